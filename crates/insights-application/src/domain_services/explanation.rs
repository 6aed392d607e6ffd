//! Match explanations
//!
//! Explanations annotate results; they never change scores or ordering.

use std::collections::BTreeSet;

use insights_domain::constants::{
    FIELD_BUSINESS_FOCUS, FIELD_KEY_EMOTIONS, FIELD_MAIN_BLOCKER, FIELD_MINDSET_PATTERN,
    FIELD_PRIMARY_GOAL, FIELD_SECONDARY_BLOCKERS, FIELD_URGENCY_LEVEL,
};
use insights_domain::value_objects::{Metadata, MetadataExt};

const SIMILAR_GOAL: &str = "Similar goal";
const SIMILAR_CHALLENGE: &str = "Similar challenge";
const SAME_BUSINESS: &str = "Same business type";
const SIMILAR_MINDSET: &str = "Similar mindset";
const SIMILAR_URGENCY: &str = "Similar urgency";
const SHARED_EMOTIONS: &str = "Shared emotions";
const SEMANTIC_SIMILARITY: &str = "Semantic similarity";

/// Shortest query word that counts toward an explanation
const MIN_WORD_CHARS: usize = 3;

/// Filler words ignored when comparing two records
const STOP_WORDS: &[&str] = &[
    "and", "are", "but", "for", "from", "has", "have", "into", "not", "our", "that", "the",
    "their", "them", "they", "this", "was", "with", "you", "your",
];

fn words(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|w| w.chars().count() >= MIN_WORD_CHARS)
        .map(str::to_lowercase)
}

fn significant_words<'a, I>(texts: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = &'a str>,
{
    texts
        .into_iter()
        .flat_map(words)
        .filter(|w| !STOP_WORDS.contains(&w.as_str()))
        .collect()
}

fn blocker_texts(metadata: &Metadata) -> impl Iterator<Item = &str> {
    std::iter::once(metadata.text_or_empty(FIELD_MAIN_BLOCKER))
        .chain(metadata.list(FIELD_SECONDARY_BLOCKERS).iter().map(String::as_str))
}

fn join(labels: Vec<&str>) -> String {
    if labels.is_empty() {
        SEMANTIC_SIMILARITY.to_string()
    } else {
        labels.join(" + ")
    }
}

/// Explain why a record matched a text query
///
/// Query words of three or more characters are looked up,
/// case-insensitively, in the goal, blockers and mindset. A business focus
/// mentioned in the query counts as the same business type.
pub fn explain_query_match(query: &str, metadata: &Metadata) -> String {
    let query_lower = query.to_lowercase();
    let query_words: Vec<String> = words(&query_lower).collect();
    let mentions = |text: &str| {
        let text = text.to_lowercase();
        query_words.iter().any(|w| text.contains(w.as_str()))
    };

    let mut labels = Vec::new();
    if mentions(metadata.text_or_empty(FIELD_PRIMARY_GOAL)) {
        labels.push(SIMILAR_GOAL);
    }
    if blocker_texts(metadata).any(mentions) {
        labels.push(SIMILAR_CHALLENGE);
    }
    let business = metadata.text_or_empty(FIELD_BUSINESS_FOCUS).trim().to_lowercase();
    if !business.is_empty() && query_lower.contains(&business) {
        labels.push(SAME_BUSINESS);
    }
    if mentions(metadata.text_or_empty(FIELD_MINDSET_PATTERN)) {
        labels.push(SIMILAR_MINDSET);
    }
    join(labels)
}

/// Explain why a candidate record resembles a participant's record
pub fn explain_participant_match(source: &Metadata, candidate: &Metadata) -> String {
    let mut labels = Vec::new();

    let business = source.text_or_empty(FIELD_BUSINESS_FOCUS).trim();
    if !business.is_empty()
        && business.eq_ignore_ascii_case(candidate.text_or_empty(FIELD_BUSINESS_FOCUS).trim())
    {
        labels.push(SAME_BUSINESS);
    }

    let goal_a = significant_words([source.text_or_empty(FIELD_PRIMARY_GOAL)]);
    let goal_b = significant_words([candidate.text_or_empty(FIELD_PRIMARY_GOAL)]);
    if !goal_a.is_disjoint(&goal_b) {
        labels.push(SIMILAR_GOAL);
    }

    let blockers_a = significant_words(blocker_texts(source));
    let blockers_b = significant_words(blocker_texts(candidate));
    if !blockers_a.is_disjoint(&blockers_b) {
        labels.push(SIMILAR_CHALLENGE);
    }

    if let (Some(a), Some(b)) = (
        source.number(FIELD_URGENCY_LEVEL),
        candidate.number(FIELD_URGENCY_LEVEL),
    ) {
        if (a - b).abs() <= 1.0 {
            labels.push(SIMILAR_URGENCY);
        }
    }

    let emotions = |m: &Metadata| -> BTreeSet<String> {
        m.list(FIELD_KEY_EMOTIONS)
            .iter()
            .map(|e| e.trim().to_lowercase())
            .filter(|e| !e.is_empty())
            .collect()
    };
    if !emotions(source).is_disjoint(&emotions(candidate)) {
        labels.push(SHARED_EMOTIONS);
    }

    join(labels)
}
