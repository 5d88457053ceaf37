use crate::types::{ParagraphPassages, Passage, SpeakerName, TurnNumber};
use crate::Error;
use std::fmt;
use std::str::FromStr;

/// Which transcript sections an extraction walks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Sections {
    #[default]
    All,
    Presentation,
    Qa,
}

impl Sections {
    pub fn includes_presentation(&self) -> bool {
        matches!(self, Sections::All | Sections::Presentation)
    }

    pub fn includes_qa(&self) -> bool {
        matches!(self, Sections::All | Sections::Qa)
    }
}

impl FromStr for Sections {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(Sections::All),
            "presentation" => Ok(Sections::Presentation),
            "qa" => Ok(Sections::Qa),
            other => Err(Error::InvalidArgument(format!(
                "sections: expected one of 'all', 'presentation', 'qa', got '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for Sections {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sections::All => write!(f, "all"),
            Sections::Presentation => write!(f, "presentation"),
            Sections::Qa => write!(f, "qa"),
        }
    }
}

/// Passages of one contributing turn; every entry of `paragraphs` stems from one paragraph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnPassages {
    pub turn_number: TurnNumber,
    pub speaker: SpeakerName,
    pub paragraphs: Vec<ParagraphPassages>,
}

impl TurnPassages {
    pub fn passages(&self) -> impl Iterator<Item = &Passage> {
        self.paragraphs.iter().flatten()
    }
}

/// Passages extracted from one event, grouped by section and turn.
///
/// Only turns which contributed at least one passage are listed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EventPassages {
    pub presentation: Vec<TurnPassages>,
    pub qa: Vec<TurnPassages>,
}

impl EventPassages {
    /// The two sections in output order: presentation first, then Q&A.
    pub fn sections(&self) -> [&[TurnPassages]; 2] {
        [&self.presentation, &self.qa]
    }

    pub fn passages(&self) -> impl Iterator<Item = &Passage> {
        self.presentation
            .iter()
            .chain(self.qa.iter())
            .flat_map(TurnPassages::passages)
    }

    pub fn passage_count(&self) -> usize {
        self.passages().count()
    }

    pub fn is_empty(&self) -> bool {
        self.passages().next().is_none()
    }

    /// All passages, presentation first, one per line.
    pub fn collapse(&self) -> String {
        self.passages()
            .map(String::as_str)
            .collect::<Vec<&str>>()
            .join("\n")
    }
}
