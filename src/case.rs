#[derive(Debug)]
enum CaseMapping {
    Empty,
    Single(char),
    Double(char, char),
    Triple(char, char, char),
}

impl CaseMapping {
    #[inline]
    fn lowercase(c: char) -> CaseMapping {
        let [x, y] = unicode_case_mapping::to_lowercase(c);
        Self::chars_from_u32(c, x, y, 0)
    }

    #[inline]
    fn uppercase(c: char) -> CaseMapping {
        let [x, y, z] = unicode_case_mapping::to_uppercase(c);
        Self::chars_from_u32(c, x, y, z)
    }

    #[inline]
    fn titlecase(c: char) -> CaseMapping {
        let [x, y, z] = unicode_case_mapping::to_titlecase(c);
        Self::chars_from_u32(c, x, y, z)
    }

    // Zero means "no mapping", in which case the char maps to itself
    #[inline]
    fn chars_from_u32(c: char, x: u32, y: u32, z: u32) -> CaseMapping {
        let mapped = [x, y, z].map(char::from_u32);
        match mapped {
            [Some(x), Some(y), Some(z)] if x != '\0' && y != '\0' && z != '\0' => {
                CaseMapping::Triple(x, y, z)
            }
            [Some(x), Some(y), _] if x != '\0' && y != '\0' => CaseMapping::Double(x, y),
            [Some(x), _, _] if x != '\0' => CaseMapping::Single(x),
            _ => CaseMapping::Single(c),
        }
    }
}

impl Iterator for CaseMapping {
    type Item = char;

    #[inline]
    fn next(&mut self) -> Option<char> {
        match *self {
            CaseMapping::Triple(x, y, z) => {
                let _ = std::mem::replace(self, CaseMapping::Double(y, z));
                Some(x)
            }
            CaseMapping::Double(x, y) => {
                let _ = std::mem::replace(self, CaseMapping::Single(y));
                Some(x)
            }
            CaseMapping::Single(x) => {
                let _ = std::mem::replace(self, CaseMapping::Empty);
                Some(x)
            }
            CaseMapping::Empty => None,
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = match self {
            CaseMapping::Triple(_, _, _) => 3,
            CaseMapping::Double(_, _) => 2,
            CaseMapping::Single(_) => 1,
            CaseMapping::Empty => 0,
        };
        (size, Some(size))
    }
}

impl ExactSizeIterator for CaseMapping {}

pub fn to_lowercase(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    result.extend(text.chars().flat_map(CaseMapping::lowercase));
    result
}

pub fn to_uppercase(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    result.extend(text.chars().flat_map(CaseMapping::uppercase));
    result
}

/// First char titlecased, everything after it lowercased. Unlike the more
/// common name-casing algorithms, hyphens and apostrophes do not start a
/// new capitalized run.
pub fn capitalize_word(word: &str) -> String {
    let mut result = String::with_capacity(word.len());
    let mut chars = word.chars();
    if let Some(first) = chars.next() {
        result.extend(CaseMapping::titlecase(first));
        result.extend(chars.flat_map(CaseMapping::lowercase));
    }
    result
}

/// Uppercase the char that starts at byte offset `at`, leaving the rest as is.
pub fn capitalize_at(word: &str, at: usize) -> String {
    debug_assert!(word.is_char_boundary(at));

    match word[at..].chars().next() {
        Some(c) => {
            let mut result = String::with_capacity(word.len() + 2);
            result.push_str(&word[..at]);
            result.extend(CaseMapping::uppercase(c));
            result.push_str(&word[at + c.len_utf8()..]);
            result
        }
        None => word.to_string(),
    }
}

pub fn has_uppercase(word: &str) -> bool {
    word.chars().any(char::is_uppercase)
}

pub fn has_lowercase(word: &str) -> bool {
    word.chars().any(char::is_lowercase)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalization() {
        assert_eq!("A", capitalize_word("a"));
        assert_eq!("Aa", capitalize_word("aa"));
        assert_eq!("Aa", capitalize_word("AA"));
        assert_eq!("Aa-bb", capitalize_word("AA-BB"));
        assert_eq!("O'brien", capitalize_word("O'BRIEN"));
        assert_eq!("Émile", capitalize_word("éMILE"));
        assert_eq!("", capitalize_word(""));
    }

    #[test]
    fn whole_word_mappings() {
        assert_eq!("straße", to_lowercase("STRAßE"));
        assert_eq!("STRASSE", to_uppercase("straße"));
        assert_eq!("3RD", to_uppercase("3rd"));
    }

    #[test]
    fn capitalize_after_prefix() {
        assert_eq!("McDonald", capitalize_at("Mcdonald", 2));
        assert_eq!("O'Brien", capitalize_at("O'brien", 2));
        assert_eq!("Mc", capitalize_at("Mc", 2));
    }

    #[test]
    fn mixed_case_detection() {
        assert!(has_uppercase("McDonald"));
        assert!(!has_uppercase("cpa"));
        assert!(has_lowercase("PhD"));
        assert!(!has_lowercase("CPA."));
    }
}
