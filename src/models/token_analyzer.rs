use crate::constants::STOP_WORDS;
use std::collections::HashSet;
use unicode_segmentation::UnicodeSegmentation;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzedToken {
    pub text: String,
    pub lemma: String,
    pub lower: String,
    pub is_stopword: bool,
    pub is_punctuation: bool,
    pub is_numeric: bool,
    pub is_currency: bool,
    pub is_whitespace: bool,
}

/// Splits text into annotated tokens for corpus preparation.
pub trait TokenAnalyzer: Send + Sync {
    fn tokenize(&self, text: &str) -> Vec<AnalyzedToken>;
}

/// Unicode (UAX #29) word segments annotated with flags and a light suffix-stripping lemma.
///
/// Single spaces between tokens are not emitted; other whitespace segments (line breaks, tabs,
/// repeated spaces) become whitespace tokens.
#[derive(Debug, Clone)]
pub struct SimpleTokenAnalyzer {
    stop_words: HashSet<String>,
}

impl Default for SimpleTokenAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

fn is_currency_symbol(c: char) -> bool {
    matches!(
        c,
        '$' | '\u{20AC}' | '\u{00A3}' | '\u{00A5}' | '\u{20BD}' | '\u{20B9}' | '\u{00A2}'
    )
}

impl SimpleTokenAnalyzer {
    pub fn new() -> Self {
        Self::with_stop_words(STOP_WORDS)
    }

    pub fn with_stop_words<S: AsRef<str>>(stop_words: &[S]) -> Self {
        Self {
            stop_words: stop_words
                .iter()
                .map(|word| word.as_ref().to_lowercase())
                .collect(),
        }
    }

    fn analyze(&self, token: &str) -> Option<AnalyzedToken> {
        let lower = token.to_lowercase();

        let is_whitespace = token.chars().all(char::is_whitespace);
        if is_whitespace && token == " " {
            return None;
        }

        let is_currency = token.chars().all(is_currency_symbol);
        let is_punctuation = !is_currency
            && !is_whitespace
            && token
                .chars()
                .all(|c| !c.is_alphanumeric() && !c.is_whitespace());
        let is_numeric = token.chars().any(|c| c.is_ascii_digit())
            && token
                .chars()
                .all(|c| c.is_ascii_digit() || c == '.' || c == ',');

        let is_word = !is_whitespace && !is_punctuation && !is_currency && !is_numeric;

        Some(AnalyzedToken {
            text: token.to_string(),
            lemma: if is_word {
                lemmatize(&lower)
            } else {
                lower.clone()
            },
            is_stopword: self.stop_words.contains(&lower),
            is_punctuation,
            is_numeric,
            is_currency,
            is_whitespace,
            lower,
        })
    }
}

impl TokenAnalyzer for SimpleTokenAnalyzer {
    fn tokenize(&self, text: &str) -> Vec<AnalyzedToken> {
        text.split_word_bounds()
            .filter_map(|token| self.analyze(token))
            .collect()
    }
}

/// Strips common English inflection suffixes.
fn lemmatize(lower: &str) -> String {
    let char_count = lower.chars().count();

    if char_count > 4 {
        if let Some(stem) = lower.strip_suffix("ies") {
            return format!("{}y", stem);
        }
        if let Some(stem) = lower.strip_suffix("sses") {
            return format!("{}ss", stem);
        }
    }

    if char_count > 3
        && lower.ends_with('s')
        && !lower.ends_with("ss")
        && !lower.ends_with("us")
        && !lower.ends_with("is")
    {
        return lower[..lower.len() - 1].to_string();
    }

    lower.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_flags() {
        let analyzer = SimpleTokenAnalyzer::new();
        let tokens = analyzer.tokenize("The sanctions cost $1,200.5 million.\nWe're done");

        let texts: Vec<&str> = tokens.iter().map(|token| token.text.as_str()).collect();
        assert_eq!(
            texts,
            vec!["The", "sanctions", "cost", "$", "1,200.5", "million", ".", "\n", "We're", "done"]
        );

        assert!(tokens[0].is_stopword);
        assert_eq!(tokens[1].lemma, "sanction");
        assert!(tokens[3].is_currency);
        assert!(tokens[4].is_numeric);
        assert!(tokens[6].is_punctuation);
        assert!(tokens[7].is_whitespace);
    }

    #[test]
    fn test_contractions_stay_whole() {
        let analyzer = SimpleTokenAnalyzer::new();
        let texts: Vec<String> = analyzer
            .tokenize("Prices didn't rise")
            .into_iter()
            .map(|token| token.text)
            .collect();

        assert_eq!(texts, vec!["Prices", "didn't", "rise"]);
    }

    #[test]
    fn test_lemmatize() {
        assert_eq!(lemmatize("companies"), "company");
        assert_eq!(lemmatize("business"), "business");
        assert_eq!(lemmatize("markets"), "market");
        assert_eq!(lemmatize("gas"), "gas");
        assert_eq!(lemmatize("crisis"), "crisis");
    }
}
