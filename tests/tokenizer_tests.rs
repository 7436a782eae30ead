use symptom_sniffer::Tokenizer;

#[cfg(test)]
mod symptom_query_tokenizer_tests {
    use super::*;

    #[test]
    fn test_tokenize_splits_on_commas() {
        let tokenizer = Tokenizer::symptom_query_parser();

        let tokens = tokenizer.tokenize("fever,cough,headache");
        assert_eq!(tokens, vec!["fever", "cough", "headache"]);
    }

    #[test]
    fn test_tokenize_trims_whitespace() {
        let tokenizer = Tokenizer::symptom_query_parser();

        let tokens = tokenizer.tokenize("  fever ,\tcough  ,\n runny nose ");
        assert_eq!(tokens, vec!["fever", "cough", "runny nose"]);
    }

    #[test]
    fn test_tokenize_lowercases() {
        let tokenizer = Tokenizer::symptom_query_parser();

        let tokens = tokenizer.tokenize("Fever, COUGH, Sore Throat");
        assert_eq!(tokens, vec!["fever", "cough", "sore throat"]);
    }

    #[test]
    fn test_tokenize_keeps_inner_spaces() {
        let tokenizer = Tokenizer::symptom_query_parser();

        let tokens = tokenizer.tokenize("shortness  of breath");
        assert_eq!(tokens, vec!["shortness  of breath"]);
    }

    #[test]
    fn test_tokenize_drops_empty_tokens() {
        let tokenizer = Tokenizer::symptom_query_parser();

        let tokens = tokenizer.tokenize(",fever,, ,cough,");
        assert_eq!(tokens, vec!["fever", "cough"]);
    }

    #[test]
    fn test_tokenize_blank_input() {
        let tokenizer = Tokenizer::symptom_query_parser();

        assert!(tokenizer.tokenize("").is_empty());
        assert!(tokenizer.tokenize("   ").is_empty());
        assert!(tokenizer.tokenize(" , , ").is_empty());
    }
}
