use crate::models::{ContextWindow, KeywordMatcher, SentenceSegmenter};
use crate::types::Passage;
use crate::utils::{combine_adjacent_sentences, expand_context_indices};
use crate::Error;

/// Turns a matching paragraph into the passages surrounding its keyword sentences.
pub struct SentenceWindowExpander<'a> {
    segmenter: &'a dyn SentenceSegmenter,
    matcher: &'a KeywordMatcher,
    window: ContextWindow,
    join_adjacent_sentences: bool,
}

impl<'a> SentenceWindowExpander<'a> {
    pub fn new(
        segmenter: &'a dyn SentenceSegmenter,
        matcher: &'a KeywordMatcher,
        window: ContextWindow,
        join_adjacent_sentences: bool,
    ) -> Self {
        Self {
            segmenter,
            matcher,
            window,
            join_adjacent_sentences,
        }
    }

    /// Adjacent sentences are always joined when the window pulls in neighbors.
    pub fn joins_adjacent_sentences(&self) -> bool {
        self.join_adjacent_sentences || self.window.is_expanding()
    }

    /// Segments `paragraph`, keeps the matching sentences plus their window and returns them in
    /// sentence order. No matching sentence yields no passages.
    pub fn expand(&self, paragraph: &str) -> Result<Vec<Passage>, Error> {
        let sentences: Vec<String> = self
            .segmenter
            .segment(paragraph.trim())
            .into_iter()
            .map(|sentence| sentence.text.trim().to_string())
            .collect();

        let matched_indices: Vec<i64> = sentences
            .iter()
            .enumerate()
            .filter(|(_, sentence)| self.matcher.matches(sentence))
            .map(|(idx, _)| idx as i64)
            .collect();

        if matched_indices.is_empty() {
            return Ok(vec![]);
        }

        let selected_indices = expand_context_indices(
            &matched_indices,
            self.window.before(),
            self.window.after(),
            Some(0),
            Some(sentences.len() as i64 - 1),
        )?;

        if self.joins_adjacent_sentences() {
            Ok(combine_adjacent_sentences(&selected_indices, &sentences))
        } else {
            Ok(selected_indices
                .into_iter()
                .filter_map(|idx| sentences.get(idx).cloned())
                .collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Keywords, PunctuationSentenceSegmenter};

    fn matcher() -> KeywordMatcher {
        KeywordMatcher::new(&Keywords::from_list(&["russia"]).unwrap(), &[] as &[&str])
    }

    #[test]
    fn test_window_and_joining() {
        let segmenter = PunctuationSentenceSegmenter::new();
        let matcher = matcher();
        let paragraph = "One. Two about Russia. Three. Four. Five about Russia.";

        let expander =
            SentenceWindowExpander::new(&segmenter, &matcher, ContextWindow::NONE, false);
        assert_eq!(
            expander.expand(paragraph).unwrap(),
            vec!["Two about Russia.", "Five about Russia."]
        );

        let expander = SentenceWindowExpander::new(
            &segmenter,
            &matcher,
            ContextWindow::new(1, 0).unwrap(),
            false,
        );
        assert_eq!(
            expander.expand(paragraph).unwrap(),
            vec!["One. Two about Russia.", "Four. Five about Russia."]
        );
    }

    #[test]
    fn test_oversized_window_stops_at_paragraph_end() {
        let segmenter = PunctuationSentenceSegmenter::new();
        let matcher = matcher();
        let expander = SentenceWindowExpander::new(
            &segmenter,
            &matcher,
            ContextWindow::new(0, i64::MAX).unwrap(),
            false,
        );

        assert_eq!(
            expander.expand("One. Two about Russia. Three.").unwrap(),
            vec!["Two about Russia. Three."]
        );
    }

    #[test]
    fn test_no_match_yields_nothing() {
        let segmenter = PunctuationSentenceSegmenter::new();
        let matcher = matcher();
        let expander =
            SentenceWindowExpander::new(&segmenter, &matcher, ContextWindow::NONE, true);

        assert!(expander.expand("Nothing to see here.").unwrap().is_empty());
    }
}
