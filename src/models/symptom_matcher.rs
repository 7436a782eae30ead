use crate::models::{DiagnosisConfig, KnowledgeBase, KnowledgeEntry, MatchResult, Tokenizer};
use crate::types::{MatchPercent, Token, TokenRef};
use crate::utils::{round_percentage, sort_results};
use log::{debug, trace};

/// Whether a query token and a canonical symptom refer to each other.
///
/// Containment is checked in both directions, so `"ache"` matches `"headache"` and
/// `"severe headache"` matches `"headache"`. This is deliberately loose: a single letter
/// matches every symptom containing it.
pub fn token_matches_symptom(token: &TokenRef, symptom: &str) -> bool {
    symptom.contains(token) || token.contains(symptom)
}

/// Scores a knowledge entry against the query tokens.
///
/// Counts the entry's canonical symptoms that at least one token matches, divided by the
/// total number of symptoms on the entry, as a percentage rounded half up. Each symptom
/// counts at most once no matter how many tokens hit it, so the result stays in `0..=100`.
pub fn score(entry: &KnowledgeEntry, tokens: &[Token]) -> MatchPercent {
    let matched_symptom_count = entry
        .symptoms
        .iter()
        .filter(|symptom| {
            tokens
                .iter()
                .any(|token| token_matches_symptom(token, symptom))
        })
        .count();

    round_percentage(matched_symptom_count, entry.symptoms.len())
}

pub struct SymptomMatcher<'a> {
    config: &'a DiagnosisConfig,
    knowledge_base: &'a KnowledgeBase,
    tokenizer: Tokenizer,
}

impl<'a> SymptomMatcher<'a> {
    pub fn new(config: &'a DiagnosisConfig, knowledge_base: &'a KnowledgeBase) -> Self {
        Self {
            config,
            knowledge_base,
            tokenizer: Tokenizer::symptom_query_parser(),
        }
    }

    /// Ranks the knowledge base against a raw, comma-separated query.
    ///
    /// Entries scoring zero are excluded; the remainder is ordered by score (ties keep
    /// knowledge base order) and capped at `max_results`.
    pub fn process_query(&self, query: &str) -> Vec<MatchResult> {
        let tokens = self.tokenizer.tokenize(query);

        if tokens.is_empty() {
            debug!("Query {:?} produced no tokens", query);
            return vec![];
        }

        let results: Vec<MatchResult> = self
            .knowledge_base
            .iter()
            .filter_map(|entry| {
                let match_percent = score(entry, &tokens);
                trace!("{}: {}%", entry.name, match_percent);

                (match_percent > 0).then(|| MatchResult {
                    name: entry.name.clone(),
                    match_percent,
                    evidence: entry.evidence.clone(),
                })
            })
            .collect();

        let ranked_results = sort_results(results, self.config.max_results);

        debug!(
            "Query {:?} matched {} illness(es)",
            query,
            ranked_results.len()
        );

        ranked_results
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(values: &[&str]) -> Vec<Token> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn test_token_matches_symptom_both_directions() {
        assert!(token_matches_symptom("ache", "headache"));
        assert!(token_matches_symptom("severe headache", "headache"));
        assert!(!token_matches_symptom("xyz", "headache"));
    }

    #[test]
    fn test_score_counts_each_symptom_once() {
        let entry = KnowledgeEntry::new("migraine", &["headache", "nausea"], "");

        // Both tokens hit "headache"; only one of two symptoms is covered
        assert_eq!(score(&entry, &tokens(&["headache", "ache"])), 50);
    }

    #[test]
    fn test_score_never_exceeds_one_hundred() {
        let entry = KnowledgeEntry::new("allergies", &["sneezing", "cough"], "");

        assert_eq!(
            score(&entry, &tokens(&["e", "n", "o", "sneezing", "cough"])),
            100
        );
    }

    #[test]
    fn test_score_without_symptoms_is_zero() {
        let entry = KnowledgeEntry {
            name: "empty".to_string(),
            symptoms: vec![],
            evidence: String::new(),
        };

        assert_eq!(score(&entry, &tokens(&["fever"])), 0);
    }
}
