use crate::constants::{MODIFIER_WORDS_STRATEGY, STRATEGY_KEYWORDS};
use crate::models::{KeywordMatcher, Keywords};
use crate::Error;

/// Flags for one strategy across a list of passages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrategyFlags {
    pub strategy: String,
    pub flags: Vec<bool>,
}

/// Labels passages with the business strategies (exit, stay, adaptation) they mention.
///
/// Each strategy is a keyword list matched with the regular keyword matcher, where negations
/// like "not" invalidate a directly following strategy word.
#[derive(Debug, Clone)]
pub struct StrategyClassifier {
    strategies: Vec<(String, KeywordMatcher)>,
    keywords: Vec<String>,
}

impl StrategyClassifier {
    pub fn new<S, M>(strategies: &[(S, &[S])], modifier_words: &[M]) -> Result<Self, Error>
    where
        S: AsRef<str>,
        M: AsRef<str>,
    {
        let mut compiled = Vec::with_capacity(strategies.len());
        let mut all_keywords = Vec::new();

        for (name, keywords) in strategies {
            let keywords = Keywords::from_list(*keywords)?;
            all_keywords.extend(keywords.keywords().into_iter().map(str::to_string));
            compiled.push((
                name.as_ref().to_string(),
                KeywordMatcher::new(&keywords, modifier_words),
            ));
        }

        Ok(Self {
            strategies: compiled,
            keywords: all_keywords,
        })
    }

    pub fn with_default_strategies() -> Result<Self, Error> {
        Self::new(STRATEGY_KEYWORDS, MODIFIER_WORDS_STRATEGY)
    }

    pub fn strategy_names(&self) -> Vec<&str> {
        self.strategies
            .iter()
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// Every strategy keyword, in strategy order.
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// One flag per strategy, in strategy order.
    pub fn classify(&self, text: &str) -> Vec<bool> {
        self.strategies
            .iter()
            .map(|(_, matcher)| matcher.matches(text))
            .collect()
    }

    pub fn classify_all<S: AsRef<str>>(&self, texts: &[S]) -> Vec<StrategyFlags> {
        self.strategies
            .iter()
            .map(|(name, matcher)| StrategyFlags {
                strategy: name.clone(),
                flags: texts
                    .iter()
                    .map(|text| matcher.matches(text.as_ref()))
                    .collect(),
            })
            .collect()
    }
}
