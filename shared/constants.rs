use std::path::PathBuf;
use std::sync::LazyLock;

macro_rules! define_path {
    ($($segment:expr),*) => {{
        PathBuf::from_iter(vec![$($segment),*])
    }};
}

pub static KNOWLEDGE_BASE_CSV_FILE_PATH: LazyLock<PathBuf> =
    LazyLock::new(|| define_path!("data", "knowledge_base.csv"));

pub static COMPRESSED_KNOWLEDGE_BASE_FILE_NAME: &str = "knowledge_base.csv.gz";
