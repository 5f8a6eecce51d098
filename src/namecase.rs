use super::case::*;
use super::lexicon::Lexicon;
use super::Field;
use compact_str::CompactString;
use unicode_segmentation::UnicodeSegmentation;

/// Recase every space-separated word of a field value.
pub fn namecase_field(value: &str, field: Field, lexicon: &Lexicon) -> CompactString {
    let mut result = CompactString::with_capacity(value.len());
    let mut words = value.split(' ').enumerate().peekable();
    while let Some((i, word)) = words.next() {
        if i > 0 {
            result.push(' ');
        }

        // Commas come from joining listed parts ("Jr., CPA") and don't take
        // part in the decision
        let core = word.trim_end_matches(',');
        if i > 0
            && words.peek().is_some()
            && !has_uppercase(core)
            && lexicon.is_conjunction(core)
        {
            // Left lowercase by the conjunction joiner, as in "John and Jane"
            result.push_str(core);
        } else {
            result.push_str(&namecase_word(core, field, lexicon));
        }
        result.push_str(&word[core.len()..]);
    }
    result
}

pub fn namecase_word(word: &str, field: Field, lexicon: &Lexicon) -> String {
    if word.is_empty() {
        return String::new();
    }

    if let Some(forced) = lexicon.forced_case(word) {
        return forced.to_string();
    }

    if is_single_grapheme(word) {
        // Initial
        return capitalize_word(word);
    }

    if field == Field::Suffix && !word.ends_with('.') && !lexicon.is_suffix_entry(word) {
        // Unrecognized postfix abbreviation like "cpa"; checked before the
        // McCase shape so that an uppercased result is left alone next time
        return if has_uppercase(word) {
            word.to_string()
        } else {
            to_uppercase(word)
        };
    }

    if let Some(tail_at) = mc_case_shape_tail(word) {
        // Typed like "McDONALD": keep the head, lowercase the rest
        let mut result = String::with_capacity(word.len());
        result.push_str(&word[..tail_at]);
        result.push_str(&to_lowercase(&word[tail_at..]));
        return result;
    }

    let capitalized = capitalize_word(word);
    if lexicon.is_mc_case_exception(&capitalized) {
        return capitalized;
    }

    match mc_case_prefix_end(&capitalized, lexicon) {
        Some(at) => capitalize_at(&capitalized, at),
        None => capitalized,
    }
}

#[inline]
fn is_single_grapheme(word: &str) -> bool {
    let mut graphemes = word.graphemes(true);
    graphemes.next().is_some() && graphemes.next().is_none()
}

// Matches words like "McDONALD", "O'BRIEN" or "PhD": a non-lowercase first
// char, a non-uppercase second, a non-lowercase third, then a tail that
// isn't itself mixed-case. Returns the byte offset of the tail.
fn mc_case_shape_tail(word: &str) -> Option<usize> {
    let mut chars = word.char_indices();
    let (_, first) = chars.next()?;
    let (_, second) = chars.next()?;
    let (_, third) = chars.next()?;

    if first.is_lowercase() || second.is_uppercase() || third.is_lowercase() {
        return None;
    }

    let tail_at = chars.next().map_or(word.len(), |(i, _)| i);
    let tail = &word[tail_at..];
    if has_lowercase(tail) && has_uppercase(tail) {
        None
    } else {
        Some(tail_at)
    }
}

// Byte offset of the first char after a McCase prefix, if the word has one
// and continues past it
fn mc_case_prefix_end(word: &str, lexicon: &Lexicon) -> Option<usize> {
    lexicon.mc_case_prefixes().iter().find_map(|prefix| {
        let len = prefix.chars().count();
        let (end, _) = word.char_indices().nth(len)?;
        if to_lowercase(&word[..end]) == *prefix {
            Some(end)
        } else {
            None
        }
    })
}
