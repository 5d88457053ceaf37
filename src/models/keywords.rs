use crate::types::{Keyword, KeywordThreshold};
use crate::Error;

/// The normalized keyword set: an ordered mapping from lowercase keyword to the minimum
/// number of occurrences required for a match.
///
/// Every entry point which accepts keywords takes this type, so the "list of keywords" and
/// "keyword to threshold" forms are only distinguished at construction time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Keywords {
    entries: Vec<(Keyword, KeywordThreshold)>,
}

impl Keywords {
    /// Keywords with an implicit threshold of 1 each.
    pub fn from_list<S: AsRef<str>>(keywords: &[S]) -> Result<Self, Error> {
        let mut instance = Self::default();
        for keyword in keywords {
            instance.insert(keyword.as_ref(), 1)?;
        }
        Ok(instance)
    }

    /// Keywords with explicit minimum-occurrence thresholds.
    ///
    /// A repeated keyword keeps its first position and takes the last threshold.
    pub fn from_thresholds<S: AsRef<str>>(
        keywords: &[(S, KeywordThreshold)],
    ) -> Result<Self, Error> {
        let mut instance = Self::default();
        for (keyword, threshold) in keywords {
            instance.insert(keyword.as_ref(), *threshold)?;
        }
        Ok(instance)
    }

    /// Parses a single `keyword` or `keyword=threshold` entry, e.g. from the command line.
    pub fn parse_entry(entry: &str) -> Result<(Keyword, KeywordThreshold), Error> {
        let (keyword, threshold) = match entry.rsplit_once('=') {
            Some((keyword, threshold)) => {
                let threshold = threshold.trim().parse::<KeywordThreshold>().map_err(|_| {
                    Error::InvalidArgument(format!(
                        "keywords: threshold of '{}' is not a non-negative integer",
                        entry
                    ))
                })?;
                (keyword, threshold)
            }
            None => (entry, 1),
        };

        Ok((Self::normalize(keyword)?, Self::validate_threshold(keyword, threshold)?))
    }

    fn insert(&mut self, keyword: &str, threshold: KeywordThreshold) -> Result<(), Error> {
        let keyword = Self::normalize(keyword)?;
        let threshold = Self::validate_threshold(&keyword, threshold)?;

        match self.entries.iter_mut().find(|(existing, _)| *existing == keyword) {
            Some(entry) => entry.1 = threshold,
            None => self.entries.push((keyword, threshold)),
        }

        Ok(())
    }

    fn normalize(keyword: &str) -> Result<Keyword, Error> {
        let keyword = keyword.trim().to_lowercase();
        if keyword.is_empty() {
            return Err(Error::InvalidArgument(
                "keywords: empty keyword is not allowed".to_string(),
            ));
        }
        Ok(keyword)
    }

    fn validate_threshold(
        keyword: &str,
        threshold: KeywordThreshold,
    ) -> Result<KeywordThreshold, Error> {
        if threshold == 0 {
            return Err(Error::InvalidArgument(format!(
                "keywords: threshold for '{}' must be at least 1",
                keyword.trim()
            )));
        }
        Ok(threshold)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, KeywordThreshold)> {
        self.entries
            .iter()
            .map(|(keyword, threshold)| (keyword.as_str(), *threshold))
    }

    pub fn keywords(&self) -> Vec<&str> {
        self.entries
            .iter()
            .map(|(keyword, _)| keyword.as_str())
            .collect()
    }

    pub fn threshold(&self, keyword: &str) -> Option<KeywordThreshold> {
        let keyword = keyword.trim().to_lowercase();
        self.entries
            .iter()
            .find(|(existing, _)| *existing == keyword)
            .map(|(_, threshold)| *threshold)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
