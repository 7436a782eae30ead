pub mod constants;

use constants::{COMMENT_PREFIX, EXPECTED_PREFIX, QUERY_PREFIX};
use std::error::Error;
use std::{fs, path::Path};
use symptom_sniffer::{diagnose, KnowledgeBase, MatchPercent};

/// Utility to load a knowledge base from a CSV file for testing and benchmarking.
pub fn load_knowledge_base_from_file<P: AsRef<Path>>(
    file_path: P,
) -> Result<KnowledgeBase, Box<dyn Error>> {
    let csv = fs::read_to_string(file_path)?;
    let knowledge_base = KnowledgeBase::from_csv_str(&csv)?;

    Ok(knowledge_base)
}

// Helper function to get the query from the `QUERY:` line of a test file
pub fn get_test_query(file_path: &Path) -> Option<String> {
    let content = fs::read_to_string(file_path).expect("Failed to read test file");

    content.lines().find_map(|line| {
        line.trim_start()
            .strip_prefix(QUERY_PREFIX)
            // Only the leading space after the prefix is syntax; the rest belongs to the query
            .map(|query| query.strip_prefix(' ').unwrap_or(query).to_string())
    })
}

// Helper function to get the expected `name: percent` pairs, in ranked order, from the file
pub fn get_expected_results(file_path: &Path) -> Vec<(String, MatchPercent)> {
    let content = fs::read_to_string(file_path).expect("Failed to read test file");

    content
        .lines()
        .map(|line| line.trim())
        .filter(|line| !line.starts_with(COMMENT_PREFIX))
        .filter_map(|line| line.strip_prefix(EXPECTED_PREFIX))
        .map(|expected| {
            let (name, percent) = expected
                .rsplit_once(':')
                .expect("EXPECTED lines must be formatted as `name: percent`");

            let percent = percent
                .trim()
                .parse::<MatchPercent>()
                .expect("Failed to parse expected percent");

            (name.trim().to_string(), percent)
        })
        .collect()
}

// Helper function to run the test for a single file; returns the number of mismatches
pub fn run_test_for_file(
    test_file_path: &Path,
    knowledge_base: &KnowledgeBase,
    use_assertions: bool,
) -> usize {
    eprintln!("Testing file: {}", test_file_path.display());

    let query = get_test_query(test_file_path).unwrap_or_else(|| {
        panic!(
            "{} - Missing `{}` line",
            test_file_path.display(),
            QUERY_PREFIX
        )
    });
    let expected_results = get_expected_results(test_file_path);

    let results: Vec<(String, MatchPercent)> = diagnose(&query, knowledge_base)
        .into_iter()
        .map(|result| (result.name, result.match_percent))
        .collect();

    let mut error_count = 0;

    if results.len() != expected_results.len() {
        error_count += 1;
    }

    error_count += results
        .iter()
        .zip(expected_results.iter())
        .filter(|(result, expected)| result != expected)
        .count();

    if use_assertions {
        assert_eq!(
            results,
            expected_results,
            "{} - Query {:?}",
            test_file_path.display(),
            query
        );
    }

    error_count
}
