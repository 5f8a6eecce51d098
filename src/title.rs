use super::lexicon::Lexicon;
use super::token::{extract_from_end, Tokens};
use compact_str::CompactString;
use smallvec::SmallVec;

/// Pull out every recognized honorific, wherever it appears, e.g. the "Dr."
/// of "Dr. Jane Doe" or of "Doe, Dr. Jane".
pub fn extract_titles(tokens: &mut Tokens, lexicon: &Lexicon) -> SmallVec<[CompactString; 2]> {
    extract_from_end(tokens, 0, |word| lexicon.is_title(word))
}

#[cfg(test)]
mod tests {
    use super::super::token::tokenize;
    use super::*;

    fn remaining(text: &str) -> (Vec<String>, Vec<String>) {
        let mut tokens = tokenize(text);
        let found = extract_titles(&mut tokens, Lexicon::english());
        (
            found.iter().map(|s| s.to_string()).collect(),
            tokens.iter().map(|t| t.text.to_string()).collect(),
        )
    }

    #[test]
    fn none() {
        let (titles, rest) = remaining("Jane Doe");
        assert!(titles.is_empty());
        assert_eq!(vec!["Jane", "Doe"], rest);
    }

    #[test]
    fn abbr() {
        let (titles, rest) = remaining("Dr. Jane Doe");
        assert_eq!(vec!["Dr."], titles);
        assert_eq!(vec!["Jane", "Doe"], rest);
    }

    #[test]
    fn multi_abbr() {
        let (titles, rest) = remaining("Rev. Dr. Jane Doe");
        assert_eq!(vec!["Rev.", "Dr."], titles);
        assert_eq!(vec!["Jane", "Doe"], rest);
    }

    #[test]
    fn word() {
        let (titles, rest) = remaining("Lady Jane Doe");
        assert_eq!(vec!["Lady"], titles);
        assert_eq!(vec!["Jane", "Doe"], rest);
    }

    #[test]
    fn after_sort_order_comma() {
        let mut tokens = tokenize("Doe, Prof. Jane");
        let found = extract_titles(&mut tokens, Lexicon::english());
        assert_eq!("Prof.", found[0].as_str());
        assert_eq!(2, tokens.len());
        assert!(tokens[0].comma);
    }

    #[test]
    fn short() {
        let (titles, rest) = remaining("Dr. Doe");
        assert_eq!(vec!["Dr."], titles);
        assert_eq!(vec!["Doe"], rest);
    }

    #[test]
    fn only_title() {
        let (titles, rest) = remaining("Mrs.");
        assert_eq!(vec!["Mrs."], titles);
        assert!(rest.is_empty());
    }
}
