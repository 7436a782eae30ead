use crate::types::{Evidence, IllnessName, MatchPercent};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    pub name: IllnessName,
    pub match_percent: MatchPercent,
    pub evidence: Evidence,
}
