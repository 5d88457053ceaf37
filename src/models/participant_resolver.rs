use crate::config::FUZZY_MATCH_THRESHOLD;
use crate::constants::PHONETIC_MARKER;
use crate::models::Roster;
use crate::types::SpeakerName;
use crate::utils::indel_similarity_ratio;
use log::debug;
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static REPEATED_WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s{2,}").expect("valid whitespace pattern"));

/// Similarity measure in the range `0..=100`.
pub type SimilarityFn = fn(&str, &str) -> f64;

/// The role of a speaker within a transcript section.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Role {
    Operator,
    Editor,
    Moderator,
    /// Listed among the corporate participants (company representatives).
    Corporate,
    /// Listed among the conference call participants (analysts).
    Conference,
    Unknown,
    /// Neither listed nor otherwise recognizable, although both rosters are present.
    Unlisted(SpeakerName),
}

impl Role {
    /// Call-management roles which are skipped when extracting passages.
    pub fn is_moderating(&self) -> bool {
        matches!(self, Role::Operator | Role::Editor | Role::Moderator)
    }

    pub fn is_corporate(&self) -> bool {
        matches!(self, Role::Corporate)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Operator => write!(f, "operator"),
            Role::Editor => write!(f, "editor"),
            Role::Moderator => write!(f, "moderator"),
            Role::Corporate => write!(f, "corporate"),
            Role::Conference => write!(f, "conference"),
            Role::Unknown => write!(f, "unknown"),
            Role::Unlisted(name) => write!(f, "{}", name),
        }
    }
}

/// Canonicalizes raw speaker names against the participant rosters and assigns their role.
#[derive(Debug, Clone)]
pub struct ParticipantResolver {
    similarity_threshold: f64,
    similarity: SimilarityFn,
}

impl Default for ParticipantResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl ParticipantResolver {
    pub fn new() -> Self {
        Self::with_similarity(FUZZY_MATCH_THRESHOLD, indel_similarity_ratio)
    }

    pub fn with_similarity(similarity_threshold: f64, similarity: SimilarityFn) -> Self {
        Self {
            similarity_threshold,
            similarity,
        }
    }

    pub fn similarity_threshold(&self) -> f64 {
        self.similarity_threshold
    }

    pub fn resolve(
        &self,
        raw_name: &str,
        corporate: &Roster,
        conference: &Roster,
    ) -> (SpeakerName, Role) {
        let name = self.canonicalize(raw_name, corporate, conference);
        let role = Self::assign_role(&name, corporate, conference);

        (name, role)
    }

    /// Normalizes a raw header name, snapping it onto the first sufficiently similar roster entry.
    pub fn canonicalize(&self, raw_name: &str, corporate: &Roster, conference: &Roster) -> String {
        let trimmed = raw_name.trim();
        let trimmed = trimmed.strip_suffix(',').unwrap_or(trimmed).trim_end();

        let lowered = trimmed.to_lowercase();
        let name = if lowered.starts_with("operator") {
            "Operator".to_string()
        } else if lowered.starts_with("moderator") {
            "Moderator".to_string()
        } else {
            REPEATED_WHITESPACE.replace_all(trimmed, "  ").into_owned()
        };

        let name = if corporate.contains(&name) || conference.contains(&name) {
            name
        } else {
            self.closest_roster_entry(&name, corporate, conference)
                .unwrap_or(name)
        };

        name.trim_start_matches(|c: char| !c.is_alphabetic())
            .to_string()
    }

    fn closest_roster_entry(
        &self,
        name: &str,
        corporate: &Roster,
        conference: &Roster,
    ) -> Option<String> {
        corporate
            .collapsed_names()
            .iter()
            .chain(conference.collapsed_names())
            .find(|entry| {
                let candidate = entry.replace(PHONETIC_MARKER, "");
                (self.similarity)(name, &candidate) >= self.similarity_threshold
            })
            .map(|entry| {
                debug!("Resolved speaker '{}' to roster entry '{}'", name, entry);
                entry.clone()
            })
    }

    pub fn assign_role(name: &str, corporate: &Roster, conference: &Roster) -> Role {
        let lowered = name.to_lowercase();

        match lowered.as_str() {
            "operator" => return Role::Operator,
            "editor" => return Role::Editor,
            "moderator" => return Role::Moderator,
            _ => {}
        }

        if corporate.contains(name) {
            Role::Corporate
        } else if conference.contains(name) {
            Role::Conference
        } else if lowered.starts_with("unidentified") || lowered.starts_with("unknown") {
            Role::Unknown
        } else if !corporate.is_empty() && !conference.is_empty() {
            Role::Unlisted(name.to_string())
        } else {
            Role::Unknown
        }
    }
}
