pub mod config;
pub use config::DiagnosisConfig;

pub mod diagnosis_view;
pub use diagnosis_view::{DiagnosisView, ViewPhase, ViewState};

pub mod error;
pub use error::Error;

pub mod knowledge_base;
pub use knowledge_base::KnowledgeBase;

pub mod knowledge_entry;
pub use knowledge_entry::KnowledgeEntry;

pub mod match_result;
pub use match_result::MatchResult;

pub mod symptom_matcher;
pub use symptom_matcher::{score, token_matches_symptom, SymptomMatcher};

pub mod tokenizer;
pub use tokenizer::Tokenizer;
