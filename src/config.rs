use crate::models::DiagnosisConfig;
use std::time::Duration;

pub const DEFAULT_DIAGNOSIS_CONFIG: &DiagnosisConfig = &DiagnosisConfig {
    max_results: 5,
    simulated_latency: Duration::from_millis(1500),
};
