use crate::types::TopicId;
use crate::Error;
use std::collections::HashSet;

/// Topic id of the outlier cluster.
pub const OUTLIER_TOPIC: TopicId = -1;

pub const MISC_CATEGORY: &str = "misc";
pub const OUTLIER_CATEGORY: &str = "standard";
/// Category of documents which were too short to be clustered.
pub const EMPTY_CATEGORY: &str = "empty";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TopicAssignment {
    pub topic: TopicId,
    pub probability: Option<f64>,
}

/// A topic model. Only the interface is provided; implementations live outside this crate.
pub trait DocumentClusterer {
    fn cluster(&mut self, documents: &[String]) -> Result<Vec<TopicAssignment>, Error>;
}

/// Labels every topic with the category sharing the most keywords with it.
///
/// `topic_keywords[i]` describes topic `i - 1`, i.e. the outlier topic comes first. Ties keep the
/// earlier category; topics without any shared keyword are labelled "misc".
pub fn categorize_topics<S: AsRef<str>>(
    topic_keywords: &[Vec<S>],
    categories: &[(&str, &[&str])],
) -> Vec<String> {
    topic_keywords
        .iter()
        .map(|keywords| {
            let keywords: HashSet<&str> = keywords.iter().map(AsRef::as_ref).collect();

            let mut best_category = MISC_CATEGORY;
            let mut best_count = 0;

            for (category, category_keywords) in categories {
                let count = category_keywords
                    .iter()
                    .collect::<HashSet<_>>()
                    .into_iter()
                    .filter(|keyword| keywords.contains(**keyword))
                    .count();

                if count > best_count {
                    best_category = *category;
                    best_count = count;
                }
            }

            best_category.to_string()
        })
        .collect()
}

/// Maps clustered documents back onto the original corpus positions.
///
/// `mapping` is the position mapping of `remove_short_documents`; dropped documents yield `None`.
pub fn expand_topic_assignments(
    assignments: &[TopicAssignment],
    mapping: &[Option<usize>],
) -> Vec<Option<TopicId>> {
    mapping
        .iter()
        .map(|position| {
            position
                .and_then(|position| assignments.get(position))
                .map(|assignment| assignment.topic)
        })
        .collect()
}

/// Category of every document. Outliers are "standard", dropped documents "empty".
///
/// `topic_categories` is the output of [`categorize_topics`].
pub fn map_topics_to_categories(
    topics: &[Option<TopicId>],
    topic_categories: &[String],
) -> Vec<String> {
    topics
        .iter()
        .map(|topic| match topic {
            None => EMPTY_CATEGORY.to_string(),
            Some(OUTLIER_TOPIC) => OUTLIER_CATEGORY.to_string(),
            Some(topic) => usize::try_from(*topic - OUTLIER_TOPIC)
                .ok()
                .and_then(|idx| topic_categories.get(idx))
                .cloned()
                .unwrap_or_else(|| MISC_CATEGORY.to_string()),
        })
        .collect()
}
