pub mod combine_adjacent_sentences;
pub use combine_adjacent_sentences::combine_adjacent_sentences;

pub mod discover_transcript_files;
pub use discover_transcript_files::discover_transcript_files;

pub mod expand_context_indices;
pub use expand_context_indices::{expand_context_indices, EXPAND_TO_BOUND};

pub mod indel_similarity_ratio;
pub use indel_similarity_ratio::indel_similarity_ratio;

pub mod remove_short_documents;
pub use remove_short_documents::remove_short_documents;
