pub mod batch_runner;
pub use batch_runner::{run_batch, BatchOutput, BatchReport};

pub mod context_window;
pub use context_window::ContextWindow;

pub mod corpus_processor;
pub use corpus_processor::{contains_word_starting_with, CorpusProcessingOptions, CorpusProcessor};

pub mod error;
pub use error::Error;

pub mod event;
pub use event::Event;

pub mod event_filter;
pub use event_filter::{EventFilter, EventFilterConfig};

pub mod event_loader;
pub use event_loader::EventLoader;

pub mod event_passages;
pub use event_passages::{EventPassages, Sections, TurnPassages};

pub mod keyword_matcher;
pub use keyword_matcher::KeywordMatcher;

pub mod keywords;
pub use keywords::Keywords;

pub mod participant_resolver;
pub use participant_resolver::{ParticipantResolver, Role};

pub mod passage_extractor;
pub use passage_extractor::{ExtractionConfig, PassageExtractor, PassageExtractorBuilder};

pub mod passage_table;
pub use passage_table::{
    event_info_rows, flatten_corpus, write_rows_csv, EventInfoRow, PassageRow,
};

pub mod roster;
pub use roster::{Participant, Roster};

pub mod sentence_segmenter;
pub use sentence_segmenter::{PunctuationSentenceSegmenter, Sentence, SentenceSegmenter};

pub mod sentence_window_expander;
pub use sentence_window_expander::SentenceWindowExpander;

pub mod strategy_classifier;
pub use strategy_classifier::{StrategyClassifier, StrategyFlags};

pub mod token_analyzer;
pub use token_analyzer::{AnalyzedToken, SimpleTokenAnalyzer, TokenAnalyzer};

pub mod topic_categorizer;
pub use topic_categorizer::{
    categorize_topics, expand_topic_assignments, map_topics_to_categories, DocumentClusterer,
    TopicAssignment,
};

pub mod transcript_parser;
pub use transcript_parser::{ParsedTranscript, SectionKind, TranscriptParser, TranscriptSections};

pub mod turn;
pub use turn::{SectionTurns, Turn};
