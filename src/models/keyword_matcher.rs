use crate::models::Keywords;
use crate::types::{Keyword, KeywordThreshold, ModifierWord};

/// Decides whether a unit of text "contains" a keyword set.
///
/// A keyword occurrence counts only if it starts on a word boundary and is not directly preceded
/// by one of the modifier words followed by a single whitespace character (so "excluding russia"
/// does not count as an occurrence of "russia"). Matching is case-insensitive.
///
/// If no modifier words are configured, an occurrence instead has to be preceded by a space (or
/// start the text), mirroring the `" keyword"` search used for the unmodified case.
///
/// A text matches if ANY keyword reaches its threshold.
#[derive(Debug, Clone)]
pub struct KeywordMatcher {
    keywords: Vec<(Keyword, KeywordThreshold)>,
    modifier_words: Vec<ModifierWord>,
}

impl KeywordMatcher {
    pub fn new<S: AsRef<str>>(keywords: &Keywords, modifier_words: &[S]) -> Self {
        Self {
            keywords: keywords
                .iter()
                .map(|(keyword, threshold)| (keyword.to_string(), threshold))
                .collect(),
            modifier_words: modifier_words
                .iter()
                .map(|word| word.as_ref().to_lowercase())
                .filter(|word| !word.is_empty())
                .collect(),
        }
    }

    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        self.keywords.iter().map(|(keyword, _)| keyword.as_str())
    }

    pub fn modifier_words(&self) -> &[ModifierWord] {
        &self.modifier_words
    }

    /// Returns `true` as soon as one keyword occurs at least as often as its threshold.
    pub fn matches(&self, text: &str) -> bool {
        let lowered = text.to_lowercase();

        self.keywords.iter().any(|(keyword, threshold)| {
            self.count_valid_occurrences(&lowered, keyword) >= *threshold
        })
    }

    /// Number of counted (non-negated) occurrences of every configured keyword in `text`.
    pub fn occurrence_counts(&self, text: &str) -> Vec<(&str, usize)> {
        let lowered = text.to_lowercase();

        self.keywords
            .iter()
            .map(|(keyword, _)| {
                (
                    keyword.as_str(),
                    self.count_valid_occurrences(&lowered, keyword),
                )
            })
            .collect()
    }

    /// The inverse check: `true` if any keyword is directly preceded by a modifier word.
    ///
    /// Used to audit which sentences the modifier exclusion filters out.
    pub fn matches_with_modifier(&self, text: &str) -> bool {
        let lowered = text.to_lowercase();

        self.keywords.iter().any(|(keyword, _)| {
            find_occurrences(&lowered, keyword, |start| {
                self.modifier_words
                    .iter()
                    .any(|modifier| is_preceded_by_modifier(&lowered, start, modifier))
            }) > 0
        })
    }

    fn count_valid_occurrences(&self, lowered: &str, keyword: &str) -> usize {
        if self.modifier_words.is_empty() {
            return find_occurrences(lowered, keyword, |start| {
                matches!(lowered[..start].chars().next_back(), None | Some(' '))
            });
        }

        find_occurrences(lowered, keyword, |start| {
            is_word_boundary(lowered, start)
                && !self
                    .modifier_words
                    .iter()
                    .any(|modifier| is_preceded_by_modifier(lowered, start, modifier))
        })
    }
}

/// Counts non-overlapping occurrences of `needle` accepted by `is_valid`.
///
/// A rejected occurrence only advances the search by one character, so an overlapping occurrence
/// starting inside it can still be found.
fn find_occurrences<F>(haystack: &str, needle: &str, is_valid: F) -> usize
where
    F: Fn(usize) -> bool,
{
    if needle.is_empty() {
        return 0;
    }

    let mut count = 0;
    let mut position = 0;

    while position <= haystack.len() {
        let Some(offset) = haystack[position..].find(needle) else {
            break;
        };
        let start = position + offset;

        if is_valid(start) {
            count += 1;
            position = start + needle.len();
        } else {
            position = start
                + haystack[start..]
                    .chars()
                    .next()
                    .map_or(1, |c| c.len_utf8());
        }
    }

    count
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// `\b` semantics: the characters on either side of `position` differ in "wordness".
fn is_word_boundary(text: &str, position: usize) -> bool {
    let before = text[..position].chars().next_back().map_or(false, is_word_char);
    let after = text[position..].chars().next().map_or(false, is_word_char);
    before != after
}

/// `true` if `text[..position]` ends with `modifier` followed by exactly one whitespace character.
fn is_preceded_by_modifier(text: &str, position: usize, modifier: &str) -> bool {
    let prefix = &text[..position];

    match prefix.chars().next_back() {
        Some(c) if c.is_whitespace() => prefix[..prefix.len() - c.len_utf8()].ends_with(modifier),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_occurrences_retries_inside_rejected_match() {
        // "aa" at 0 is rejected, the overlapping "aa" at 1 is accepted
        assert_eq!(find_occurrences("aaa", "aa", |start| start == 1), 1);
    }

    #[test]
    fn test_word_boundary() {
        assert!(is_word_boundary("russia", 0));
        assert!(is_word_boundary("in russia", 3));
        assert!(!is_word_boundary("prussia", 1));
    }

    #[test]
    fn test_preceded_by_modifier() {
        let text = "excluding russia";
        assert!(is_preceded_by_modifier(text, 10, "excluding"));
        assert!(!is_preceded_by_modifier(text, 10, "without"));
        assert!(!is_preceded_by_modifier("excludingrussia", 9, "excluding"));
    }
}
