#[cfg(doctest)]
doc_comment::doctest!("../README.md");

pub mod config;
pub mod constants;
pub use constants::{MODIFIER_WORDS, MODIFIER_WORDS_STRATEGY};
pub mod models;
pub use models::{
    run_batch, ContextWindow, Error, Event, EventFilter, EventFilterConfig, EventLoader,
    EventPassages, ExtractionConfig, KeywordMatcher, Keywords, PassageExtractor,
    PunctuationSentenceSegmenter, Role, Sections, SentenceSegmenter, TranscriptParser,
    TurnPassages,
};
pub mod types;
pub mod utils;
pub use types::{Keyword, KeywordThreshold, ModifierWord, Passage};

/// Returns `true` if any keyword occurs (not negated by a modifier word) at least as often as its
/// threshold.
///
/// # Example
/// ```
/// use transcript_sniffer::{keyword_matches, Keywords, MODIFIER_WORDS};
///
/// let keywords = Keywords::from_list(&["russia"]).unwrap();
///
/// assert!(keyword_matches("Our Russia business is small.", &keywords, MODIFIER_WORDS));
/// assert!(!keyword_matches("Sales excluding Russia grew.", &keywords, MODIFIER_WORDS));
/// ```
pub fn keyword_matches<S: AsRef<str>>(
    text: &str,
    keywords: &Keywords,
    modifier_words: &[S],
) -> bool {
    KeywordMatcher::new(keywords, modifier_words).matches(text)
}

/// Extracts the passages mentioning `keywords` from a transcript body, with the default
/// extraction settings and sentence segmenter.
pub fn extract_passages_from_transcript(
    body: &str,
    keywords: &Keywords,
) -> Result<EventPassages, Error> {
    let config = ExtractionConfig {
        keywords: keywords.clone(),
        ..ExtractionConfig::default()
    };

    extract_passages_from_transcript_with_custom_config(body, config)
}

pub fn extract_passages_from_transcript_with_custom_config(
    body: &str,
    config: ExtractionConfig,
) -> Result<EventPassages, Error> {
    let extractor = PassageExtractor::builder()
        .config(config)
        .segmenter(PunctuationSentenceSegmenter::new())
        .build()?;

    extractor.extract_event(&Event::from_body(body))
}
