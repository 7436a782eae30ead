use std::time::Duration;

/// Tunables for a diagnosis run.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DiagnosisConfig {
    /// Upper bound on the number of ranked illnesses returned.
    pub max_results: usize,
    /// Artificial delay between a submission and its result being shown.
    pub simulated_latency: Duration,
}
