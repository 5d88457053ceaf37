// Types listed here are either shared across multiple files and/or exposed via the library.

/// Represents a keyword as an owned, lowercase `String`.
pub type Keyword = String;

/// The minimum number of (non-negated) occurrences a keyword needs before a text counts as a match.
pub type KeywordThreshold = usize;

/// Represents a modifier phrase (e.g. "excluding") which invalidates a directly following keyword.
pub type ModifierWord = String;

/// The raw speaker name as it appears in a transcript header (or its resolved roster form).
pub type SpeakerName = String;

/// The 1-based appearance number of a speaker header within its section.
pub type TurnNumber = usize;

/// Index of a sentence within a segmented paragraph.
pub type SentenceIndex = usize;

/// An extracted span of text: one or more sentences, a whole paragraph, or a whole answer.
pub type Passage = String;

/// All passages extracted from a single paragraph, in sentence order.
pub type ParagraphPassages = Vec<Passage>;

/// Index of an event within a batch.
pub type EventIndex = usize;

/// Opaque topic identifier handed back by a clustering collaborator. `-1` marks outliers.
pub type TopicId = i64;
