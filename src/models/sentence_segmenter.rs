use crate::constants::SENTENCE_ABBREVIATIONS;
use std::collections::HashSet;
use unicode_segmentation::UnicodeSegmentation;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    pub text: String,
}

/// Splits a paragraph into ordered sentences.
///
/// Implementations must be deterministic for a given input.
pub trait SentenceSegmenter: Send + Sync {
    fn segment(&self, text: &str) -> Vec<Sentence>;
}

const SENTENCE_TERMINATORS: &[char] = &['.', '!', '?'];
const CLOSING_PUNCTUATION: &[char] = &['"', '\'', ')', ']', '\u{201D}', '\u{2019}'];
const OPENING_PUNCTUATION: &[char] = &['"', '\'', '(', '[', '\u{201C}', '\u{2018}'];

/// Unicode (UAX #29) sentence boundaries, tightened for transcript prose.
///
/// A candidate boundary is kept only when it follows `.`, `!` or `?` (plus any closing quotes or
/// brackets) and whitespace, and the next fragment starts with a character which can start a
/// sentence. Periods after known abbreviations and single-letter initials do not end a sentence.
#[derive(Debug, Clone)]
pub struct PunctuationSentenceSegmenter {
    abbreviations: HashSet<String>,
}

impl Default for PunctuationSentenceSegmenter {
    fn default() -> Self {
        Self::new()
    }
}

impl PunctuationSentenceSegmenter {
    pub fn new() -> Self {
        Self::with_abbreviations(SENTENCE_ABBREVIATIONS)
    }

    pub fn with_abbreviations<S: AsRef<str>>(abbreviations: &[S]) -> Self {
        Self {
            abbreviations: abbreviations
                .iter()
                .map(|abbreviation| abbreviation.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// `true` if the period at `period_idx` belongs to an abbreviation or an initial.
    fn is_abbreviation_period(&self, text: &str, period_idx: usize) -> bool {
        let word_start = text[..period_idx]
            .rfind(char::is_whitespace)
            .map_or(0, |idx| idx + text[idx..].chars().next().map_or(1, char::len_utf8));
        let word = text[word_start..period_idx]
            .trim_start_matches(|c| OPENING_PUNCTUATION.contains(&c))
            .to_lowercase();

        let mut chars = word.chars();
        let is_initial = matches!((chars.next(), chars.next()), (Some(c), None) if c.is_alphabetic());

        is_initial || self.abbreviations.contains(&word)
    }

    /// `true` if `pending` (a run of candidate fragments) ends a sentence before `next`.
    fn ends_sentence(&self, pending: &str, next: &str) -> bool {
        if !pending.ends_with(char::is_whitespace) {
            return false;
        }

        let trimmed = pending.trim_end();
        let body = trimmed.trim_end_matches(|c: char| CLOSING_PUNCTUATION.contains(&c));
        let Some(last) = body.chars().next_back() else {
            return false;
        };
        if !SENTENCE_TERMINATORS.contains(&last) {
            return false;
        }

        let single_period = trimmed.ends_with('.')
            && !trimmed[..trimmed.len() - 1]
                .ends_with(|c: char| SENTENCE_TERMINATORS.contains(&c) || CLOSING_PUNCTUATION.contains(&c));
        if single_period && self.is_abbreviation_period(trimmed, trimmed.len() - 1) {
            return false;
        }

        next.trim_start().chars().next().map_or(false, |first| {
            first.is_uppercase() || first.is_numeric() || OPENING_PUNCTUATION.contains(&first)
        })
    }
}

impl SentenceSegmenter for PunctuationSentenceSegmenter {
    fn segment(&self, text: &str) -> Vec<Sentence> {
        let mut sentences = Vec::new();
        let mut pending = String::new();
        let mut fragments = text.split_sentence_bounds().peekable();

        while let Some(fragment) = fragments.next() {
            pending.push_str(fragment);

            let is_boundary = match fragments.peek() {
                Some(next) => self.ends_sentence(&pending, next),
                None => true,
            };

            if is_boundary {
                let sentence = pending.trim();
                if !sentence.is_empty() {
                    sentences.push(Sentence {
                        text: sentence.to_string(),
                    });
                }
                pending.clear();
            }
        }

        sentences
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment(text: &str) -> Vec<String> {
        PunctuationSentenceSegmenter::new()
            .segment(text)
            .into_iter()
            .map(|sentence| sentence.text)
            .collect()
    }

    #[test]
    fn test_basic_segmentation() {
        assert_eq!(
            segment("Revenue grew. Costs fell! Why? Because of 2022."),
            vec!["Revenue grew.", "Costs fell!", "Why?", "Because of 2022."]
        );
    }

    #[test]
    fn test_abbreviations_and_initials() {
        assert_eq!(
            segment("We met Mr. Smith in the U.S. Market last week. J. Doe agreed."),
            vec!["We met Mr. Smith in the U.S. Market last week.", "J. Doe agreed."]
        );
    }

    #[test]
    fn test_decimal_numbers_and_lowercase_continuation() {
        assert_eq!(
            segment("Margin was 3.5 percent. it improved."),
            vec!["Margin was 3.5 percent. it improved."]
        );
    }

    #[test]
    fn test_closing_quotes_stay_with_sentence() {
        assert_eq!(
            segment("He said \"no.\" Then we left."),
            vec!["He said \"no.\"", "Then we left."]
        );
    }

    #[test]
    fn test_lowercase_after_question_mark_continues() {
        assert_eq!(
            segment("Is it over? not yet. Next quarter, maybe."),
            vec!["Is it over? not yet.", "Next quarter, maybe."]
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(segment("   ").is_empty());
    }
}
