use compact_str::CompactString;
use smallvec::SmallVec;

/// One whitespace-delimited unit of the name, after any joining, along with
/// whether a comma immediately followed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: CompactString,
    pub comma: bool,
}

pub type Tokens = SmallVec<[Token; 7]>;

impl Token {
    pub fn new(text: &str, comma: bool) -> Token {
        Token {
            text: CompactString::new(text),
            comma,
        }
    }
}

/// Split on single spaces. One trailing comma is stripped from each piece
/// and recorded on its token; a comma inside a word stays part of it.
/// A piece left empty (a lone ",") yields no token.
pub fn tokenize(text: &str) -> Tokens {
    text.split(' ')
        .filter_map(|piece| {
            let (word, comma) = match piece.strip_suffix(',') {
                Some(word) => (word, true),
                None => (piece, false),
            };
            (!word.is_empty()).then(|| Token::new(word, comma))
        })
        .collect()
}

/// Remove every token at index `min_index` or later that satisfies
/// `matches`, scanning from the end, and return them in their original
/// left-to-right order.
///
/// When a removed token carried a comma, the token that slides into its
/// position inherits it (replacing its own flag); a comma on the final
/// token is simply dropped along with it.
pub fn extract_from_end<F>(
    tokens: &mut Tokens,
    min_index: usize,
    mut matches: F,
) -> SmallVec<[CompactString; 2]>
where
    F: FnMut(&str) -> bool,
{
    let mut found = SmallVec::new();

    for i in (min_index..tokens.len()).rev() {
        if !matches(&tokens[i].text) {
            continue;
        }

        let removed = tokens.remove(i);
        if removed.comma {
            if let Some(next) = tokens.get_mut(i) {
                next.comma = true;
            }
        }
        found.insert(0, removed.text);
    }

    found
}

/// Replace `tokens[start..end]` with a single token of their texts joined by
/// spaces. The merged token keeps the comma of the last token merged.
pub fn merge(tokens: &mut Tokens, start: usize, end: usize) {
    debug_assert!(start < end && end <= tokens.len());

    let comma = tokens[end - 1].comma;
    let mut text = CompactString::with_capacity(
        tokens[start..end].iter().map(|t| t.text.len() + 1).sum(),
    );
    for token in tokens.drain(start..end) {
        if !text.is_empty() {
            text.push(' ');
        }
        text.push_str(&token.text);
    }

    tokens.insert(start, Token { text, comma });
}

/// Join token texts with single spaces.
pub fn join<'a, I>(tokens: I) -> CompactString
where
    I: IntoIterator<Item = &'a Token>,
{
    let mut text = CompactString::default();
    for token in tokens {
        if !text.is_empty() {
            text.push(' ');
        }
        text.push_str(&token.text);
    }
    text
}

/// Join extracted parts the way list-valued fields are stored, e.g.
/// "Jr., CPA".
pub fn join_listed<'a, I>(parts: I) -> CompactString
where
    I: IntoIterator<Item = &'a str>,
{
    let mut text = CompactString::default();
    for part in parts.into_iter().filter(|p| !p.is_empty()) {
        if !text.is_empty() {
            text.push_str(", ");
        }
        text.push_str(part);
    }
    text
}

pub fn count_commas(tokens: &[Token]) -> usize {
    tokens.iter().filter(|t| t.comma).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(tokens: &Tokens) -> Vec<&str> {
        tokens.iter().map(|t| t.text.as_str()).collect()
    }

    fn commas(tokens: &Tokens) -> Vec<bool> {
        tokens.iter().map(|t| t.comma).collect()
    }

    #[test]
    fn plain_words() {
        let tokens = tokenize("John Q Public");
        assert_eq!(vec!["John", "Q", "Public"], texts(&tokens));
        assert_eq!(vec![false, false, false], commas(&tokens));
    }

    #[test]
    fn trailing_commas() {
        let tokens = tokenize("Public, John Q,");
        assert_eq!(vec!["Public", "John", "Q"], texts(&tokens));
        assert_eq!(vec![true, false, true], commas(&tokens));
    }

    #[test]
    fn internal_comma_stays() {
        let tokens = tokenize("Public,John");
        assert_eq!(vec!["Public,John"], texts(&tokens));
        assert_eq!(vec![false], commas(&tokens));
    }

    #[test]
    fn one_comma_stripped() {
        let tokens = tokenize("Public,, John");
        assert_eq!(vec!["Public,", "John"], texts(&tokens));
        assert_eq!(vec![true, false], commas(&tokens));
    }

    #[test]
    fn lone_comma_dropped() {
        let tokens = tokenize("Public , John");
        assert_eq!(vec!["Public", "John"], texts(&tokens));
        assert_eq!(vec![false, false], commas(&tokens));
        assert!(tokenize(",").is_empty());
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn extract_keeps_order_and_moves_comma() {
        let mut tokens = tokenize("Smith, Jr., John III");
        let found = extract_from_end(&mut tokens, 1, |w| w == "Jr." || w == "III");
        assert_eq!(vec!["Jr.", "III"], found.iter().map(|s| s.as_str()).collect::<Vec<_>>());
        assert_eq!(vec!["Smith", "John"], texts(&tokens));
        assert_eq!(vec![true, true], commas(&tokens));
    }

    #[test]
    fn extract_respects_min_index() {
        let mut tokens = tokenize("Jr. Smith");
        let found = extract_from_end(&mut tokens, 1, |w| w == "Jr.");
        assert!(found.is_empty());
        assert_eq!(vec!["Jr.", "Smith"], texts(&tokens));
    }

    #[test]
    fn merge_takes_last_comma() {
        let mut tokens = tokenize("de la Vega, Juan");
        merge(&mut tokens, 0, 3);
        assert_eq!(vec!["de la Vega", "Juan"], texts(&tokens));
        assert_eq!(vec![true, false], commas(&tokens));
    }

    #[test]
    fn join_and_count() {
        let tokens = tokenize("Smith, John, Q");
        assert_eq!("Smith John Q", join(&tokens).as_str());
        assert_eq!(2, count_commas(&tokens));
    }

    #[test]
    fn listed() {
        assert_eq!("Jr., CPA", join_listed(["Jr.", "", "CPA"]).as_str());
        assert_eq!("", join_listed([]).as_str());
    }
}
