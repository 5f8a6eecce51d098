use super::lexicon::Lexicon;
use super::token::{count_commas, extract_from_end, Tokens};
use compact_str::CompactString;
use smallvec::SmallVec;

/// Pull out every recognized suffix after the first word, e.g. the "Jr."
/// of "John Smith Jr.". The first word is never a suffix.
pub fn extract_suffixes(tokens: &mut Tokens, lexicon: &Lexicon) -> SmallVec<[CompactString; 2]> {
    extract_from_end(tokens, 1, |word| lexicon.is_suffix(word))
}

/// Pull out unrecognized postfixes that were set off by commas, e.g. the
/// "CPA" of "John Q Smith, CPA" or "Smith, John, CPA".
///
/// Only kicks in when the first comma comes after the second word, or when
/// there is more than one comma; a single early comma is read as "Last,
/// First" instead. Nothing at index 0 or 1 is ever taken.
pub fn extract_comma_separated(tokens: &mut Tokens) -> SmallVec<[CompactString; 2]> {
    let mut found = SmallVec::new();

    // A comma after the final word doesn't separate anything
    if let Some(last) = tokens.last_mut() {
        last.comma = false;
    }

    let first_comma = tokens.iter().position(|t| t.comma);
    if !first_comma.map_or(false, |i| i > 1) && count_commas(tokens) <= 1 {
        return found;
    }

    for i in (2..tokens.len()).rev() {
        if !tokens[i - 1].comma {
            break;
        }

        let removed = tokens.remove(i);
        tokens[i - 1].comma = false;
        found.insert(0, removed.text);
    }

    found
}

#[cfg(test)]
mod tests {
    use super::super::token::tokenize;
    use super::*;

    fn texts(tokens: &Tokens) -> Vec<&str> {
        tokens.iter().map(|t| t.text.as_str()).collect()
    }

    fn strs(found: &[CompactString]) -> Vec<&str> {
        found.iter().map(|s| s.as_str()).collect()
    }

    #[test]
    fn no_suffix() {
        let mut tokens = tokenize("John Smith");
        assert!(extract_suffixes(&mut tokens, Lexicon::english()).is_empty());
        assert_eq!(vec!["John", "Smith"], texts(&tokens));
    }

    #[test]
    fn jr() {
        let mut tokens = tokenize("John Smith Jr.");
        let found = extract_suffixes(&mut tokens, Lexicon::english());
        assert_eq!(vec!["Jr."], strs(&found));
        assert_eq!(vec!["John", "Smith"], texts(&tokens));
    }

    #[test]
    fn several_in_order() {
        let mut tokens = tokenize("John Smith III PhD");
        let found = extract_suffixes(&mut tokens, Lexicon::english());
        assert_eq!(vec!["III", "PhD"], strs(&found));
    }

    #[test]
    fn first_word_is_never_a_suffix() {
        let mut tokens = tokenize("V Smith");
        assert!(extract_suffixes(&mut tokens, Lexicon::english()).is_empty());
        assert_eq!(vec!["V", "Smith"], texts(&tokens));
    }

    #[test]
    fn comma_separated_after_full_name() {
        let mut tokens = tokenize("John Q Smith, CPA");
        let found = extract_comma_separated(&mut tokens);
        assert_eq!(vec!["CPA"], strs(&found));
        assert_eq!(vec!["John", "Q", "Smith"], texts(&tokens));
        assert_eq!(0, count_commas(&tokens));
    }

    #[test]
    fn comma_separated_after_sort_order() {
        let mut tokens = tokenize("Smith, John, CPA, CFA");
        let found = extract_comma_separated(&mut tokens);
        assert_eq!(vec!["CPA", "CFA"], strs(&found));
        assert_eq!(vec!["Smith", "John"], texts(&tokens));
        assert_eq!(1, count_commas(&tokens));
    }

    #[test]
    fn single_early_comma_is_sort_order() {
        let mut tokens = tokenize("Smith, John Q");
        assert!(extract_comma_separated(&mut tokens).is_empty());
        assert_eq!(vec!["Smith", "John", "Q"], texts(&tokens));
        assert_eq!(1, count_commas(&tokens));
    }

    #[test]
    fn trailing_comma_ignored() {
        let mut tokens = tokenize("John Smith,");
        assert!(extract_comma_separated(&mut tokens).is_empty());
        assert_eq!(0, count_commas(&tokens));
    }

    #[test]
    fn stops_at_uncommaed_word() {
        let mut tokens = tokenize("Smith, John, Q R");
        assert!(extract_comma_separated(&mut tokens).is_empty());
        assert_eq!(2, count_commas(&tokens));
    }
}
