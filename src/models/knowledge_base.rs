use crate::constants::{
    COMPRESSED_KNOWLEDGE_BASE_BYTE_ARRAY, KNOWLEDGE_BASE_EVIDENCE_HEADER,
    KNOWLEDGE_BASE_NAME_HEADER, KNOWLEDGE_BASE_SYMPTOMS_HEADER,
};
use crate::models::KnowledgeEntry;
use crate::Error;
use csv::{ReaderBuilder, StringRecord};
use flate2::read::GzDecoder;
use log::debug;
use std::collections::HashSet;
use std::io::{Cursor, Read};

/// Ordered, read-only table of illnesses.
///
/// Iteration order is the order the entries were loaded in, and is what ties in match
/// percentage fall back on when ranking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnowledgeBase {
    entries: Vec<KnowledgeEntry>,
}

impl KnowledgeBase {
    /// Builds a table from already-constructed entries.
    ///
    /// Symptoms are trimmed and lowercased so they compare directly against query tokens, and
    /// blank symptoms are dropped. Fails if two entries share a name or an entry is left with no
    /// symptoms.
    pub fn new(mut entries: Vec<KnowledgeEntry>) -> Result<Self, Error> {
        for entry in &mut entries {
            entry.symptoms = entry
                .symptoms
                .iter()
                .map(|symptom| symptom.trim().to_lowercase())
                .filter(|symptom| !symptom.is_empty())
                .collect();
        }

        let mut seen_names = HashSet::new();

        for entry in &entries {
            if !seen_names.insert(entry.name.as_str()) {
                return Err(Error::ParserError(format!(
                    "Duplicate illness name: {}",
                    entry.name
                )));
            }

            if entry.symptoms.is_empty() {
                return Err(Error::ParserError(format!(
                    "Illness '{}' has no symptoms",
                    entry.name
                )));
            }
        }

        Ok(Self { entries })
    }

    /// Decompress and parse the knowledge base compiled into the crate.
    pub fn embedded() -> Result<Self, Error> {
        Self::from_gzip_bytes(COMPRESSED_KNOWLEDGE_BASE_BYTE_ARRAY)
    }

    /// Decompress a Gzip-encoded CSV and parse it with [`KnowledgeBase::from_csv_str`].
    pub fn from_gzip_bytes(read_bytes: &[u8]) -> Result<Self, Error> {
        let mut decoder = GzDecoder::new(read_bytes);
        let mut decompressed_data = String::new();
        decoder.read_to_string(&mut decompressed_data)?;

        Self::from_csv_str(&decompressed_data)
    }

    /// Parses a CSV with `Name`, `Symptoms` and `Evidence` columns.
    ///
    /// `Symptoms` holds the canonical symptoms as a comma-separated list inside one field.
    pub fn from_csv_str(csv: &str) -> Result<Self, Error> {
        // Use a cursor to simulate a file reader from the string
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .from_reader(Cursor::new(csv));

        let headers = reader
            .headers()
            .map_err(|e| Error::ParserError(format!("Failed to read headers: {}", e)))?
            .clone();

        let name_index = Self::header_position(&headers, KNOWLEDGE_BASE_NAME_HEADER)?;
        let symptoms_index = Self::header_position(&headers, KNOWLEDGE_BASE_SYMPTOMS_HEADER)?;
        let evidence_index = Self::header_position(&headers, KNOWLEDGE_BASE_EVIDENCE_HEADER)?;

        let mut entries = Vec::new();

        for record in reader.records() {
            let record = record?;

            let name = record
                .get(name_index)
                .map(|name| name.trim())
                .filter(|name| !name.is_empty())
                .ok_or_else(|| Error::ParserError("Missing 'Name' field".to_string()))?;

            let symptoms: Vec<String> = record
                .get(symptoms_index)
                .unwrap_or_default()
                .split(',')
                .map(|symptom| symptom.to_string())
                .collect();

            let evidence = record.get(evidence_index).unwrap_or_default().trim();

            entries.push(KnowledgeEntry {
                name: name.to_string(),
                symptoms,
                evidence: evidence.to_string(),
            });
        }

        let knowledge_base = Self::new(entries)?;

        debug!("Loaded {} knowledge base entries", knowledge_base.len());

        Ok(knowledge_base)
    }

    fn header_position(headers: &StringRecord, header: &str) -> Result<usize, Error> {
        headers
            .iter()
            .position(|h| h.trim() == header)
            .ok_or_else(|| Error::ParserError(format!("Missing '{}' column", header)))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, KnowledgeEntry> {
        self.entries.iter()
    }

    pub fn get(&self, name: &str) -> Option<&KnowledgeEntry> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a KnowledgeBase {
    type Item = &'a KnowledgeEntry;
    type IntoIter = std::slice::Iter<'a, KnowledgeEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_knowledge_base_order() {
        let knowledge_base = KnowledgeBase::embedded().expect("Failed to load knowledge base");

        let names: Vec<&str> = knowledge_base
            .iter()
            .map(|entry| entry.name.as_str())
            .collect();

        assert_eq!(
            names,
            vec!["covid-19", "influenza", "common cold", "migraine", "allergies"]
        );
    }

    #[test]
    fn test_embedded_knowledge_base_symptoms() {
        let knowledge_base = KnowledgeBase::embedded().expect("Failed to load knowledge base");

        let covid = knowledge_base.get("covid-19").expect("Missing covid-19");
        assert_eq!(covid.symptoms.len(), 7);
        assert_eq!(covid.symptoms[6], "shortness of breath");

        let allergies = knowledge_base.get("allergies").expect("Missing allergies");
        assert_eq!(
            allergies.symptoms,
            vec!["sneezing", "runny nose", "itchy eyes", "cough"]
        );
        assert_eq!(
            allergies.evidence,
            "Sneezing with itchy eyes indicates allergic reaction."
        );
    }

    #[test]
    fn test_constructed_and_parsed_tables_match() {
        let constructed = KnowledgeBase::new(vec![KnowledgeEntry::new(
            "flu",
            &[" Fever", "COUGH "],
            "x",
        )])
        .expect("Invalid knowledge base");
        let csv = "Name,Symptoms,Evidence\nflu,\"Fever, Cough\",x\n";
        let parsed = KnowledgeBase::from_csv_str(csv).expect("Failed to parse knowledge base");

        assert_eq!(constructed, parsed);
        assert_eq!(
            crate::diagnose("fever", &constructed),
            crate::diagnose("fever", &parsed)
        );
        assert_eq!(crate::diagnose("fever", &constructed)[0].match_percent, 50);
    }

    #[test]
    fn test_len_and_is_empty() {
        let knowledge_base = KnowledgeBase::embedded().expect("Failed to load knowledge base");
        assert_eq!(knowledge_base.len(), 5);
        assert!(!knowledge_base.is_empty());

        let empty = KnowledgeBase::new(vec![]).expect("Invalid knowledge base");
        assert_eq!(empty.len(), 0);
        assert!(empty.is_empty());
    }

    #[test]
    fn test_missing_column_is_rejected() {
        let csv = "Name,Symptoms\nflu,\"fever, cough\"\n";

        match KnowledgeBase::from_csv_str(csv) {
            Err(Error::ParserError(msg)) => assert!(msg.contains("Evidence")),
            other => panic!("Expected parser error, got {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_name_is_rejected() {
        let csv = "Name,Symptoms,Evidence\nflu,fever,a\nflu,cough,b\n";

        assert!(matches!(
            KnowledgeBase::from_csv_str(csv),
            Err(Error::ParserError(_))
        ));
    }

    #[test]
    fn test_entry_without_symptoms_is_rejected() {
        let csv = "Name,Symptoms,Evidence\nflu,\" , \",a\n";

        assert!(matches!(
            KnowledgeBase::from_csv_str(csv),
            Err(Error::ParserError(_))
        ));
    }

    #[test]
    fn test_invalid_gzip_is_io_error() {
        assert!(matches!(
            KnowledgeBase::from_gzip_bytes(b"not gzip"),
            Err(Error::IoError(_))
        ));
    }
}
