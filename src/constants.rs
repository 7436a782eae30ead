/// Gzip-compressed `data/knowledge_base.csv`, produced by `build.rs`.
pub const COMPRESSED_KNOWLEDGE_BASE_BYTE_ARRAY: &[u8] =
    include_bytes!(concat!(env!("OUT_DIR"), "/knowledge_base.csv.gz"));

pub const KNOWLEDGE_BASE_NAME_HEADER: &str = "Name";
pub const KNOWLEDGE_BASE_SYMPTOMS_HEADER: &str = "Symptoms";
pub const KNOWLEDGE_BASE_EVIDENCE_HEADER: &str = "Evidence";

/// Number of cells in a rendered match bar.
pub const MATCH_BAR_WIDTH: usize = 40;

pub const QUERY_SEPARATOR: char = ',';

pub const NO_MATCH_MESSAGE: &str = "No matching diagnoses found. Try different symptoms.";
pub const LOADING_MESSAGE: &str = "Analyzing symptoms...";
pub const QUERY_PROMPT: &str = "Enter your symptoms, separated by commas (e.g. fever, cough, headache)";
