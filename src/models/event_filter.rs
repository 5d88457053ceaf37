use crate::config::{BASE_YEAR, DEFAULT_KEYWORDS};
use crate::constants::{FINAL_VERSION, MODIFIER_WORDS, PUBLISH_ACTION};
use crate::models::{Event, KeywordMatcher, Keywords};
use crate::types::ModifierWord;
use chrono::Datelike;
use log::debug;

#[derive(Debug, Clone, PartialEq)]
pub struct EventFilterConfig {
    pub min_year: i32,
    /// An empty keyword set disables the keyword predicate.
    pub keywords: Keywords,
    pub modifier_words: Vec<ModifierWord>,
}

impl Default for EventFilterConfig {
    fn default() -> Self {
        Self {
            min_year: BASE_YEAR,
            keywords: Keywords::from_thresholds(DEFAULT_KEYWORDS).unwrap_or_default(),
            modifier_words: MODIFIER_WORDS.iter().map(|word| word.to_string()).collect(),
        }
    }
}

/// Selects published, final events from `min_year` onwards whose corporate text mentions the
/// keywords.
#[derive(Debug, Clone)]
pub struct EventFilter {
    min_year: i32,
    matcher: Option<KeywordMatcher>,
}

impl EventFilter {
    pub fn new(config: &EventFilterConfig) -> Self {
        let matcher = if config.keywords.is_empty() {
            None
        } else {
            Some(KeywordMatcher::new(&config.keywords, &config.modifier_words))
        };

        Self {
            min_year: config.min_year,
            matcher,
        }
    }

    pub fn is_recent(&self, event: &Event) -> bool {
        event
            .date
            .map_or(false, |date| date.year() >= self.min_year)
    }

    pub fn is_published_final(&self, event: &Event) -> bool {
        event.action == PUBLISH_ACTION && event.version == FINAL_VERSION
    }

    /// Matches the keywords against the collapsed corporate Q&A and presentation text.
    pub fn mentions_keywords(&self, event: &Event) -> bool {
        match &self.matcher {
            Some(matcher) => {
                let text = format!(
                    "{} {}",
                    event.questions_and_answers_collapsed(),
                    event.presentation_collapsed()
                );
                matcher.matches(&text)
            }
            None => true,
        }
    }

    pub fn accepts(&self, event: &Event) -> bool {
        let accepted = self.is_recent(event)
            && self.is_published_final(event)
            && self.mentions_keywords(event);

        if !accepted {
            debug!("Filtered out '{}'", event.file);
        }

        accepted
    }

    pub fn filter<'a>(&self, events: &'a [Event]) -> Vec<&'a Event> {
        events.iter().filter(|event| self.accepts(event)).collect()
    }
}
