use std::path::PathBuf;
use std::sync::LazyLock;

macro_rules! define_path {
    ($($segment:expr),*) => {{
        PathBuf::from_iter(vec![$($segment),*])
    }};
}

// Lazy-initialized static variables
pub static TEST_FILES_DIRECTORY: LazyLock<PathBuf> =
    LazyLock::new(|| define_path!("tests", "test_files"));

pub static KNOWLEDGE_BASE_FILE_PATH: LazyLock<PathBuf> =
    LazyLock::new(|| define_path!("data", "knowledge_base.csv"));

pub const QUERY_PREFIX: &str = "QUERY:";
pub const EXPECTED_PREFIX: &str = "EXPECTED:";
pub const COMMENT_PREFIX: &str = "COMMENT:";
