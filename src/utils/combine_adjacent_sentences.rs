use crate::types::{Passage, SentenceIndex};

/// Joins sentences whose indices form consecutive runs into single passages, separated by a single
/// space. Non-adjacent indices start a new passage.
///
/// `sentence_indices` must be sorted ascending and each index must be valid for `sentences`.
///
/// # Example
/// ```
/// use transcript_sniffer::utils::combine_adjacent_sentences;
///
/// let sentences = ["A.", "B.", "C.", "D."];
/// assert_eq!(
///     combine_adjacent_sentences(&[0, 1, 3], &sentences),
///     vec!["A. B.".to_string(), "D.".to_string()]
/// );
/// ```
pub fn combine_adjacent_sentences<S: AsRef<str>>(
    sentence_indices: &[SentenceIndex],
    sentences: &[S],
) -> Vec<Passage> {
    let mut passages: Vec<Passage> = Vec::new();
    let mut previous_idx: Option<SentenceIndex> = None;

    for &sentence_idx in sentence_indices {
        let sentence = sentences[sentence_idx].as_ref();

        let continues_run =
            previous_idx.map_or(false, |previous_idx| sentence_idx == previous_idx + 1);
        previous_idx = Some(sentence_idx);

        if continues_run {
            if let Some(current) = passages.last_mut() {
                current.push(' ');
                current.push_str(sentence);
                continue;
            }
        }

        passages.push(sentence.to_string());
    }

    passages
}
