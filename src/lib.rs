mod config;
pub use config::DEFAULT_DIAGNOSIS_CONFIG;
mod constants;
pub use constants::{LOADING_MESSAGE, MATCH_BAR_WIDTH, NO_MATCH_MESSAGE};
pub mod models;
pub use models::{
    score, token_matches_symptom, DiagnosisConfig, DiagnosisView, Error, KnowledgeBase,
    KnowledgeEntry, MatchResult, SymptomMatcher, Tokenizer, ViewPhase, ViewState,
};
pub mod types;
mod utils;
pub use types::{Evidence, IllnessName, MatchPercent, Symptom, Token, TokenRef};
pub use utils::{render_match_bar, sort_results};

#[cfg(doctest)]
doc_comment::doctest!("../README.md");

/// Ranks the illnesses in `knowledge_base` against a comma-separated symptom query.
///
/// Returns at most five results, most confident first. An empty query, or one that matches
/// nothing, yields an empty `Vec`.
pub fn diagnose(query: &str, knowledge_base: &KnowledgeBase) -> Vec<MatchResult> {
    diagnose_with_custom_config(DEFAULT_DIAGNOSIS_CONFIG, query, knowledge_base)
}

pub fn diagnose_with_custom_config(
    diagnosis_config: &DiagnosisConfig,
    query: &str,
    knowledge_base: &KnowledgeBase,
) -> Vec<MatchResult> {
    let symptom_matcher = SymptomMatcher::new(diagnosis_config, knowledge_base);

    symptom_matcher.process_query(query)
}

/// Ranks the compiled-in knowledge base against a comma-separated symptom query.
pub fn diagnose_with_embedded_knowledge_base(query: &str) -> Result<Vec<MatchResult>, Error> {
    let knowledge_base = KnowledgeBase::embedded()?;

    Ok(diagnose(query, &knowledge_base))
}
