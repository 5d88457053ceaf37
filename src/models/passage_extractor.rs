use crate::config::{
    DEFAULT_EXTRACT_ANSWERS, DEFAULT_JOIN_ADJACENT_SENTENCES, DEFAULT_KEYWORDS,
    DEFAULT_SUBSEQUENT_PARAGRAPHS,
};
use crate::constants::MODIFIER_WORDS;
use crate::models::{
    ContextWindow, Event, EventPassages, KeywordMatcher, Keywords, Role, SectionTurns, Sections,
    SentenceSegmenter, SentenceWindowExpander, Turn, TurnPassages,
};
use crate::types::{ModifierWord, ParagraphPassages, TurnNumber};
use crate::Error;
use log::{debug, info};

#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionConfig {
    pub keywords: Keywords,
    pub modifier_words: Vec<ModifierWord>,
    pub sections: Sections,
    pub context_window: ContextWindow,
    pub join_adjacent_sentences: bool,
    /// Number of paragraphs kept verbatim after a matching paragraph.
    pub subsequent_paragraphs: usize,
    /// Keep whole answers to questions which mention a keyword.
    pub extract_answers: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            // The defaults are non-empty and have non-zero thresholds
            keywords: Keywords::from_thresholds(DEFAULT_KEYWORDS).unwrap_or_default(),
            modifier_words: MODIFIER_WORDS.iter().map(|word| word.to_string()).collect(),
            sections: Sections::All,
            context_window: ContextWindow::NONE,
            join_adjacent_sentences: DEFAULT_JOIN_ADJACENT_SENTENCES,
            subsequent_paragraphs: DEFAULT_SUBSEQUENT_PARAGRAPHS,
            extract_answers: DEFAULT_EXTRACT_ANSWERS,
        }
    }
}

#[derive(Default)]
pub struct PassageExtractorBuilder {
    config: ExtractionConfig,
    segmenter: Option<Box<dyn SentenceSegmenter>>,
}

impl PassageExtractorBuilder {
    pub fn config(mut self, config: ExtractionConfig) -> Self {
        self.config = config;
        self
    }

    pub fn keywords(mut self, keywords: Keywords) -> Self {
        self.config.keywords = keywords;
        self
    }

    pub fn modifier_words<S: AsRef<str>>(mut self, modifier_words: &[S]) -> Self {
        self.config.modifier_words = modifier_words
            .iter()
            .map(|word| word.as_ref().to_string())
            .collect();
        self
    }

    pub fn sections(mut self, sections: Sections) -> Self {
        self.config.sections = sections;
        self
    }

    pub fn context_window(mut self, context_window: ContextWindow) -> Self {
        self.config.context_window = context_window;
        self
    }

    pub fn join_adjacent_sentences(mut self, join_adjacent_sentences: bool) -> Self {
        self.config.join_adjacent_sentences = join_adjacent_sentences;
        self
    }

    pub fn subsequent_paragraphs(mut self, subsequent_paragraphs: usize) -> Self {
        self.config.subsequent_paragraphs = subsequent_paragraphs;
        self
    }

    pub fn extract_answers(mut self, extract_answers: bool) -> Self {
        self.config.extract_answers = extract_answers;
        self
    }

    pub fn segmenter<T: SentenceSegmenter + 'static>(mut self, segmenter: T) -> Self {
        self.segmenter = Some(Box::new(segmenter));
        self
    }

    pub fn build(self) -> Result<PassageExtractor, Error> {
        let segmenter = self.segmenter.ok_or_else(|| {
            Error::PreconditionFailed(
                "a sentence segmenter must be configured before extracting passages".to_string(),
            )
        })?;

        let matcher = KeywordMatcher::new(&self.config.keywords, &self.config.modifier_words);

        Ok(PassageExtractor {
            config: self.config,
            matcher,
            segmenter,
        })
    }
}

/// Running state of the paragraph loop: paragraphs seen since the last matching paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct ParagraphCarry {
    paragraphs_since_match: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParagraphDecision {
    ExtractSentences,
    KeepWhole,
    Discard,
}

impl ParagraphCarry {
    fn observe(self, is_match: bool, subsequent_paragraphs: usize) -> (ParagraphDecision, Self) {
        let (decision, counter) = if is_match {
            (ParagraphDecision::ExtractSentences, Some(0))
        } else {
            match self.paragraphs_since_match {
                Some(counter) if counter <= subsequent_paragraphs => {
                    (ParagraphDecision::KeepWhole, Some(counter))
                }
                counter => (ParagraphDecision::Discard, counter),
            }
        };

        (
            decision,
            Self {
                paragraphs_since_match: counter.map(|counter| counter + 1),
            },
        )
    }
}

/// Extracts keyword passages from events.
///
/// Stateless between calls; every extraction threads its own running state.
pub struct PassageExtractor {
    config: ExtractionConfig,
    matcher: KeywordMatcher,
    segmenter: Box<dyn SentenceSegmenter>,
}

impl PassageExtractor {
    pub fn builder() -> PassageExtractorBuilder {
        PassageExtractorBuilder::default()
    }

    pub fn config(&self) -> &ExtractionConfig {
        &self.config
    }

    pub fn matcher(&self) -> &KeywordMatcher {
        &self.matcher
    }

    pub fn segmenter(&self) -> &dyn SentenceSegmenter {
        self.segmenter.as_ref()
    }

    pub fn extract_events(&self, events: &[Event]) -> Result<Vec<EventPassages>, Error> {
        events
            .iter()
            .map(|event| self.extract_event(event))
            .collect()
    }

    pub fn extract_event(&self, event: &Event) -> Result<EventPassages, Error> {
        let presentation = if self.config.sections.includes_presentation() {
            self.extract_presentation(&event.presentation)?
        } else {
            vec![]
        };

        let qa = if self.config.sections.includes_qa() {
            self.extract_qa(&event.questions_and_answers)?
        } else {
            vec![]
        };

        let passages = EventPassages { presentation, qa };

        debug!(
            "Extracted {} passages from '{}'",
            passages.passage_count(),
            event.file
        );

        Ok(passages)
    }

    /// Walks the corporate turns of a presentation through the paragraph loop.
    pub fn extract_presentation(&self, turns: &SectionTurns) -> Result<Vec<TurnPassages>, Error> {
        let mut contributions = Vec::new();

        for turn in turns.turns().iter().filter(|turn| turn.role.is_corporate()) {
            let paragraphs = self.extract_paragraphs(turn.paragraphs())?;
            push_contribution(&mut contributions, turn, paragraphs);
        }

        Ok(contributions)
    }

    /// Walks a Q&A section.
    ///
    /// Questions (non-corporate turns) are never emitted; they only decide whether the answers
    /// following them are kept whole. Operator and editor turns are skipped without touching
    /// that state.
    pub fn extract_qa(&self, turns: &SectionTurns) -> Result<Vec<TurnPassages>, Error> {
        let mut contributions = Vec::new();
        let mut previous_question_has_keyword = false;

        for turn in turns.turns() {
            match &turn.role {
                Role::Operator | Role::Editor => continue,
                Role::Corporate => {
                    let paragraphs = if previous_question_has_keyword && self.config.extract_answers
                    {
                        vec![vec![turn.text.clone()]]
                    } else {
                        self.extract_paragraphs(turn.paragraphs())?
                    };
                    push_contribution(&mut contributions, turn, paragraphs);
                }
                _ => previous_question_has_keyword = self.matcher.matches(&turn.text),
            }
        }

        Ok(contributions)
    }

    /// The paragraph loop: matching paragraphs are narrowed to their keyword sentences, the
    /// `subsequent_paragraphs` following ones are kept whole, everything else is dropped.
    pub fn extract_paragraphs<'p, I>(&self, paragraphs: I) -> Result<Vec<ParagraphPassages>, Error>
    where
        I: IntoIterator<Item = &'p str>,
    {
        let expander = SentenceWindowExpander::new(
            self.segmenter.as_ref(),
            &self.matcher,
            self.config.context_window,
            self.config.join_adjacent_sentences,
        );

        let (_, extracted) = paragraphs.into_iter().try_fold(
            (ParagraphCarry::default(), Vec::new()),
            |(carry, mut extracted), paragraph| {
                let (decision, carry) = carry.observe(
                    self.matcher.matches(paragraph),
                    self.config.subsequent_paragraphs,
                );

                match decision {
                    ParagraphDecision::ExtractSentences => {
                        let passages = expander.expand(paragraph)?;
                        if !passages.is_empty() {
                            extracted.push(passages);
                        }
                    }
                    ParagraphDecision::KeepWhole => extracted.push(vec![paragraph.trim().to_string()]),
                    ParagraphDecision::Discard => {}
                }

                Ok::<_, Error>((carry, extracted))
            },
        )?;

        Ok(extracted)
    }

    /// Sentences in which a keyword is negated by a modifier word, i.e. the sentences the
    /// modifier exclusion keeps out of the corporate texts of `event`.
    pub fn excluded_sentences(&self, event: &Event) -> Vec<String> {
        let texts = [
            event.presentation_collapsed(),
            event.questions_and_answers_collapsed(),
        ];

        let excluded: Vec<String> = texts
            .iter()
            .flat_map(|text| self.segmenter.segment(text))
            .map(|sentence| sentence.text)
            .filter(|sentence| self.matcher.matches_with_modifier(sentence))
            .collect();

        if !excluded.is_empty() {
            info!(
                "{} sentences of '{}' negate a keyword",
                excluded.len(),
                event.file
            );
        }

        excluded
    }

    /// Numbers of the Q&A questions which mention a keyword while none of the corporate answers
    /// given before the next question does.
    ///
    /// Questions are classified exactly as in the Q&A walk, so these are the questions whose
    /// answers are kept whole only because of the question.
    pub fn unanswered_keyword_questions(&self, event: &Event) -> Vec<TurnNumber> {
        let mut unanswered = Vec::new();
        // (question number, answered with a keyword so far)
        let mut open_question: Option<(TurnNumber, bool)> = None;

        for turn in event.questions_and_answers.turns() {
            match &turn.role {
                Role::Operator | Role::Editor => continue,
                Role::Corporate => {
                    if let Some((_, answered)) = open_question.as_mut() {
                        *answered = *answered || self.matcher.matches(&turn.text);
                    }
                }
                _ => {
                    if let Some((number, false)) = open_question {
                        unanswered.push(number);
                    }
                    open_question = self
                        .matcher
                        .matches(&turn.text)
                        .then_some((turn.number, false));
                }
            }
        }

        if let Some((number, false)) = open_question {
            unanswered.push(number);
        }

        if !unanswered.is_empty() {
            info!(
                "{} keyword questions of '{}' were answered without the keyword",
                unanswered.len(),
                event.file
            );
        }

        unanswered
    }
}

fn push_contribution(
    contributions: &mut Vec<TurnPassages>,
    turn: &Turn,
    paragraphs: Vec<ParagraphPassages>,
) {
    if paragraphs.is_empty() {
        return;
    }

    contributions.push(TurnPassages {
        turn_number: turn.number,
        speaker: turn.speaker.clone(),
        paragraphs,
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraph_carry() {
        let carry = ParagraphCarry::default();

        let (decision, carry) = carry.observe(false, 1);
        assert_eq!(decision, ParagraphDecision::Discard);

        let (decision, carry) = carry.observe(true, 1);
        assert_eq!(decision, ParagraphDecision::ExtractSentences);

        let (decision, carry) = carry.observe(false, 1);
        assert_eq!(decision, ParagraphDecision::KeepWhole);

        let (decision, carry) = carry.observe(false, 1);
        assert_eq!(decision, ParagraphDecision::Discard);

        let (decision, _) = carry.observe(true, 1);
        assert_eq!(decision, ParagraphDecision::ExtractSentences);
    }

    #[test]
    fn test_zero_subsequent_paragraphs_keeps_nothing_extra() {
        let (_, carry) = ParagraphCarry::default().observe(true, 0);
        let (decision, _) = carry.observe(false, 0);
        assert_eq!(decision, ParagraphDecision::Discard);
    }

    #[test]
    fn test_build_requires_segmenter() {
        assert!(matches!(
            PassageExtractor::builder().build(),
            Err(Error::PreconditionFailed(_))
        ));
    }
}
