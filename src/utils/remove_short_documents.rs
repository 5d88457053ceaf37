/// Removes documents consisting of `threshold` words or fewer.
///
/// Returns the compacted corpus together with a mapping from each original position to its
/// position in the compacted corpus (`None` for removed documents), so downstream results (e.g.
/// topic assignments) can be mapped back onto the original rows.
pub fn remove_short_documents(
    corpus: &[String],
    threshold: usize,
) -> (Vec<String>, Vec<Option<usize>>) {
    let mut kept = Vec::new();
    let mut mapping = Vec::with_capacity(corpus.len());

    for document in corpus {
        // Counted on single spaces; an empty document still counts as one (empty) word
        let word_count = document.split(' ').count();

        if word_count <= threshold {
            mapping.push(None);
        } else {
            mapping.push(Some(kept.len()));
            kept.push(document.clone());
        }
    }

    (kept, mapping)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_short_documents() {
        let corpus = vec![
            "russia sanction impact".to_string(),
            "energy".to_string(),
            "".to_string(),
            "supply chain".to_string(),
        ];

        let (kept, mapping) = remove_short_documents(&corpus, 1);

        assert_eq!(kept, vec!["russia sanction impact", "supply chain"]);
        assert_eq!(mapping, vec![Some(0), None, None, Some(1)]);
    }
}
