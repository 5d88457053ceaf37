use crate::constants::ADDITIONAL_STOPWORDS;
use crate::models::{AnalyzedToken, Keywords, StrategyClassifier, TokenAnalyzer};
use log::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusProcessingOptions {
    pub lemmatize: bool,
    pub lowercase: bool,
    pub remove_stopwords: bool,
    pub remove_punctuation: bool,
    pub remove_numeric: bool,
    pub remove_currency: bool,
    pub remove_whitespace: bool,
    /// Tokens whose lemma contains a word starting with one of these prefixes are removed.
    pub remove_words_starting_with: Vec<String>,
}

impl Default for CorpusProcessingOptions {
    fn default() -> Self {
        Self {
            lemmatize: true,
            lowercase: true,
            remove_stopwords: true,
            remove_punctuation: true,
            remove_numeric: true,
            remove_currency: true,
            remove_whitespace: true,
            remove_words_starting_with: vec![],
        }
    }
}

impl CorpusProcessingOptions {
    /// Prefix removals made of the extraction keywords, the strategy keywords and the additional
    /// earnings-call stop words, as used before topic modelling.
    pub fn with_topic_modelling_removals(
        mut self,
        keywords: &Keywords,
        strategies: Option<&StrategyClassifier>,
    ) -> Self {
        let prefixes = keywords
            .keywords()
            .into_iter()
            .map(str::to_string)
            .chain(
                strategies
                    .map(|classifier| classifier.keywords().to_vec())
                    .unwrap_or_default(),
            )
            .chain(ADDITIONAL_STOPWORDS.iter().map(|word| word.to_string()));

        for prefix in prefixes {
            if !self.remove_words_starting_with.contains(&prefix) {
                self.remove_words_starting_with.push(prefix);
            }
        }

        self
    }
}

/// Turns passages into processed token strings for topic modelling.
pub struct CorpusProcessor {
    analyzer: Box<dyn TokenAnalyzer>,
    options: CorpusProcessingOptions,
}

impl CorpusProcessor {
    pub fn new<A: TokenAnalyzer + 'static>(analyzer: A, options: CorpusProcessingOptions) -> Self {
        Self {
            analyzer: Box::new(analyzer),
            options: CorpusProcessingOptions {
                remove_words_starting_with: options
                    .remove_words_starting_with
                    .iter()
                    .map(|prefix| prefix.to_lowercase())
                    .filter(|prefix| !prefix.is_empty())
                    .collect(),
                ..options
            },
        }
    }

    pub fn options(&self) -> &CorpusProcessingOptions {
        &self.options
    }

    /// Processed tokens of `text`. Tokens whose text is exactly one of `remove_whole_words` are
    /// dropped as well.
    pub fn process_text<S: AsRef<str>>(&self, text: &str, remove_whole_words: &[S]) -> Vec<String> {
        self.analyzer
            .tokenize(text)
            .into_iter()
            .filter(|token| self.keeps(token, remove_whole_words))
            .map(|token| {
                let word = if self.options.lemmatize {
                    token.lemma
                } else {
                    token.text
                };

                if self.options.lowercase {
                    word.to_lowercase()
                } else {
                    word
                }
            })
            .collect()
    }

    /// Processes every document into a space-joined token string.
    ///
    /// `remove_whole_words_per_document` is either empty or index-aligned with `corpus`.
    pub fn process_corpus<S: AsRef<str>>(
        &self,
        corpus: &[S],
        remove_whole_words_per_document: &[Vec<String>],
    ) -> Vec<String> {
        debug!("Processing corpus of {} documents", corpus.len());

        corpus
            .iter()
            .enumerate()
            .map(|(document_idx, document)| {
                let remove_whole_words = remove_whole_words_per_document
                    .get(document_idx)
                    .map(Vec::as_slice)
                    .unwrap_or_default();

                self.process_text(document.as_ref(), remove_whole_words)
                    .join(" ")
            })
            .collect()
    }

    fn keeps<S: AsRef<str>>(&self, token: &AnalyzedToken, remove_whole_words: &[S]) -> bool {
        let options = &self.options;

        !(options.remove_stopwords && token.is_stopword
            || options.remove_punctuation && token.is_punctuation
            || options.remove_numeric && token.is_numeric
            || options.remove_currency && token.is_currency
            || options.remove_whitespace && token.is_whitespace
            || contains_word_starting_with(&token.lemma, &options.remove_words_starting_with)
            || remove_whole_words
                .iter()
                .any(|word| word.as_ref() == token.text))
    }
}

/// `true` if a word inside `text` (case-insensitively) starts with one of `prefixes`.
pub fn contains_word_starting_with(text: &str, prefixes: &[String]) -> bool {
    let lowered = text.to_lowercase();

    prefixes.iter().any(|prefix| {
        lowered.match_indices(prefix.as_str()).any(|(start, _)| {
            let before = lowered[..start].chars().next_back();
            let first = lowered[start..].chars().next();
            let is_word = |c: Option<char>| c.map_or(false, |c| c.is_alphanumeric() || c == '_');
            is_word(before) != is_word(first)
        })
    })
}
