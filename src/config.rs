/// Earliest event year considered by the default event filter.
pub const BASE_YEAR: i32 = 2022;

pub const DEFAULT_KEYWORDS: &[(&str, usize)] = &[("russia", 1), ("ukraine", 1)];

/// Minimum similarity ratio (0..=100) for a speaker name to be snapped to a roster entry.
pub const FUZZY_MATCH_THRESHOLD: f64 = 80.0;

pub const DEFAULT_SUBSEQUENT_PARAGRAPHS: usize = 0;

pub const DEFAULT_EXTRACT_ANSWERS: bool = true;

pub const DEFAULT_JOIN_ADJACENT_SENTENCES: bool = true;

/// Processed documents with this many words or fewer are dropped before topic modelling.
pub const DEFAULT_SHORT_DOCUMENT_THRESHOLD: usize = 1;
