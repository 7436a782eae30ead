use crate::models::MatchResult;

/// Orders match results from most to least confident and keeps at most `max_results`.
///
/// ### Sorting Order:
/// - **Primary:** match percentage, descending.
/// - **Secondary:** none. The sort is stable, so equal percentages keep the order the results
///   were produced in (knowledge base order).
///
/// ### Example:
/// ```rust
/// use symptom_sniffer::{sort_results, MatchResult};
///
/// let result = |name: &str, match_percent| MatchResult {
///     name: name.to_string(),
///     match_percent,
///     evidence: String::new(),
/// };
///
/// let sorted = sort_results(
///     vec![result("migraine", 25), result("influenza", 50), result("allergies", 25)],
///     2,
/// );
/// assert_eq!(sorted, vec![result("influenza", 50), result("migraine", 25)]);
/// ```
pub fn sort_results(mut results: Vec<MatchResult>, max_results: usize) -> Vec<MatchResult> {
    results.sort_by(|a, b| b.match_percent.cmp(&a.match_percent));
    results.truncate(max_results);

    results
}
