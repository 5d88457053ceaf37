use crate::constants::ROSTER_FIELD_SEPARATOR;
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

static ROSTER_ENTRY_DELIMITER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:^|\s+)\*").expect("valid roster entry pattern"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    pub name: String,
    pub position: Option<String>,
}

impl Participant {
    /// `"name,  position"`, or just the name if there is no position.
    pub fn collapsed(&self) -> String {
        match &self.position {
            Some(position) => format!("{}{}{}", self.name, ROSTER_FIELD_SEPARATOR, position),
            None => self.name.clone(),
        }
    }
}

/// A participant list (corporate or conference) together with its collapsed lookup forms.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Roster {
    participants: Vec<Participant>,
    collapsed: Vec<String>,
}

impl Roster {
    /// Parses a participants section where every entry starts with `*`, its first non-empty line
    /// being the name and any further lines the position.
    pub fn parse(section_text: &str) -> Self {
        let participants: Vec<Participant> = ROSTER_ENTRY_DELIMITER
            .split(section_text)
            .filter_map(|entry| {
                let mut lines = entry.lines().map(str::trim).filter(|line| !line.is_empty());
                let name = lines.next()?.to_string();
                let rest: Vec<&str> = lines.collect();

                Some(Participant {
                    name,
                    position: if rest.is_empty() {
                        None
                    } else {
                        Some(rest.join(ROSTER_FIELD_SEPARATOR))
                    },
                })
            })
            .collect();

        Self::from_participants(participants)
    }

    pub fn from_participants(participants: Vec<Participant>) -> Self {
        let collapsed = participants.iter().map(Participant::collapsed).collect();

        Self {
            participants,
            collapsed,
        }
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn collapsed_names(&self) -> &[String] {
        &self.collapsed
    }

    /// Exact membership of a (collapsed) name.
    pub fn contains(&self, name: &str) -> bool {
        self.collapsed.iter().any(|collapsed| collapsed == name)
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    /// Individual words of all participant names, deduplicated, in order of appearance.
    pub fn name_parts(&self) -> Vec<String> {
        Self::distinct_name_parts([self])
    }

    /// Distinct name words across several rosters, first occurrence wins.
    pub fn distinct_name_parts<'a>(rosters: impl IntoIterator<Item = &'a Roster>) -> Vec<String> {
        let mut seen: HashSet<String> = HashSet::new();

        rosters
            .into_iter()
            .flat_map(|roster| roster.participants.iter())
            .flat_map(|participant| participant.name.split_whitespace())
            .map(|part| part.trim_end_matches(','))
            .filter(|part| !part.is_empty() && seen.insert(part.to_string()))
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_roster() {
        let section = "\n * John Smith\n   Acme Corp - CEO\n * Jane Doe\n   Acme Corp - CFO\n * Bob\n";
        let roster = Roster::parse(section);

        assert_eq!(roster.len(), 3);
        assert_eq!(
            roster.collapsed_names(),
            &[
                "John Smith,  Acme Corp - CEO".to_string(),
                "Jane Doe,  Acme Corp - CFO".to_string(),
                "Bob".to_string(),
            ]
        );
        assert_eq!(roster.participants()[2].position, None);
        assert!(roster.contains("Jane Doe,  Acme Corp - CFO"));
    }

    #[test]
    fn test_empty_section() {
        assert!(Roster::parse("\n\n").is_empty());
    }

    #[test]
    fn test_name_parts() {
        let roster = Roster::parse(" * John Smith\n   Acme\n * John Doe\n   Acme");
        assert_eq!(roster.name_parts(), vec!["John", "Smith", "Doe"]);
    }

    #[test]
    fn test_distinct_name_parts_across_rosters() {
        let corporate = Roster::parse(" * John Smith\n   Acme Corp - CEO");
        let conference = Roster::parse(" * Alan Smith\n   Big Bank - Analyst");

        assert_eq!(
            Roster::distinct_name_parts([&corporate, &conference]),
            vec!["John", "Smith", "Alan"]
        );
    }
}
