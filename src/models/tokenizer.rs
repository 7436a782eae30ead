use crate::constants::QUERY_SEPARATOR;
use crate::types::Token;
use log::debug;

#[derive(Copy, Clone, Debug)]
pub struct Tokenizer {
    pub separator: char,
    pub drop_empty_tokens: bool,
}

impl Tokenizer {
    /// Configuration for comma-separated symptom queries typed by a user
    pub fn symptom_query_parser() -> Self {
        Self {
            separator: QUERY_SEPARATOR,
            drop_empty_tokens: true,
        }
    }

    /// Splits the text on the configured separator into lowercased, trimmed tokens.
    ///
    /// The whole string is lowercased before splitting so that mixed-case input such as
    /// `"Fever, COUGH"` yields `["fever", "cough"]`.
    pub fn tokenize(self, text: &str) -> Vec<Token> {
        let tokens: Vec<Token> = text
            .to_lowercase()
            .split(self.separator)
            .map(|token| token.trim().to_string())
            // An empty token is a substring of every symptom and would otherwise match all of them
            .filter(|token| !self.drop_empty_tokens || !token.is_empty())
            .collect();

        debug!("Tokenized {:?} into {:?}", text, tokens);

        tokens
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::symptom_query_parser()
    }
}
