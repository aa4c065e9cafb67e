//! Topic tagging by fixed-vocabulary substring matching.

use crate::utils::upcase;
use tracing::trace;

/// Derive topic tags for an article.
///
/// Each vocabulary term that occurs anywhere in the lowercased
/// `title + " " + summary` is emitted once, first letter uppercased, in
/// vocabulary order. Matching is plain substring search, so `"apt"` also
/// hits `"chapter"`. With no hit the result is `[fallback]`.
pub fn classify<S: AsRef<str>>(
    title: &str,
    summary: &str,
    vocabulary: &[S],
    fallback: &str,
) -> Vec<String> {
    let haystack = format!("{title} {summary}").to_lowercase();

    let mut tags: Vec<String> = Vec::new();
    for term in vocabulary {
        let term = term.as_ref();
        if haystack.contains(term) {
            let tag = upcase(term);
            if !tags.contains(&tag) {
                tags.push(tag);
            }
        }
    }

    if tags.is_empty() {
        tags.push(fallback.to_string());
    }
    trace!(?tags, "Classified article");
    tags
}
