use crate::models::Role;
use crate::types::{SpeakerName, TurnNumber};

/// One speaker turn: a speaker header paired with the text following it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub number: TurnNumber,
    pub speaker: SpeakerName,
    pub role: Role,
    pub text: String,
}

impl Turn {
    /// Non-blank, trimmed paragraphs (newline separated) of the turn's text.
    pub fn paragraphs(&self) -> impl Iterator<Item = &str> {
        self.text
            .split('\n')
            .map(str::trim)
            .filter(|paragraph| !paragraph.is_empty())
    }
}

/// The turns of one transcript section.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SectionTurns {
    /// The section marker is missing (or the section is blank).
    #[default]
    Absent,
    /// The section is present but has no usable speaker headers or texts.
    Empty,
    Present(Vec<Turn>),
}

impl SectionTurns {
    pub fn turns(&self) -> &[Turn] {
        match self {
            SectionTurns::Present(turns) => turns,
            _ => &[],
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, SectionTurns::Present(_))
    }

    /// `true` only when the section marker was not found; an `Empty` section is not absent.
    pub fn is_absent(&self) -> bool {
        matches!(self, SectionTurns::Absent)
    }

    pub fn len(&self) -> usize {
        self.turns().len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns().is_empty()
    }

    /// Texts of all corporate turns joined by single spaces.
    pub fn collapsed_corporate_text(&self) -> String {
        self.turns()
            .iter()
            .filter(|turn| turn.role.is_corporate())
            .map(|turn| turn.text.as_str())
            .collect::<Vec<&str>>()
            .join(" ")
    }
}
