use crate::types::{Evidence, IllnessName, Symptom};

/// A fixed illness record: its canonical symptoms and the sentence explaining a match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnowledgeEntry {
    pub name: IllnessName,
    pub symptoms: Vec<Symptom>,
    pub evidence: Evidence,
}

impl KnowledgeEntry {
    pub fn new(name: &str, symptoms: &[&str], evidence: &str) -> Self {
        Self {
            name: name.to_string(),
            symptoms: symptoms.iter().map(|symptom| symptom.to_string()).collect(),
            evidence: evidence.to_string(),
        }
    }
}
