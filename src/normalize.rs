use std::borrow::Cow;
use unicode_normalization::{is_nfc_quick, IsNormalized, UnicodeNormalization};

#[inline]
fn already_normalized(string: &str) -> bool {
    let mut banned_char = false;
    let mut prev_space = true;
    let normalized = is_nfc_quick(string.chars().take_while(|&c| {
        banned_char = (c.is_whitespace() && (c != ' ' || prev_space)) || c == '\u{feff}';
        prev_space = c == ' ';
        !banned_char
    }));
    normalized == IsNormalized::Yes && !banned_char && !prev_space
}

#[inline(never)]
fn do_normalize(string: &str) -> String {
    let composed: String = string
        .chars()
        .filter(|&c| c != '\u{feff}')
        .nfc()
        .collect();

    let mut result = String::with_capacity(composed.len());
    for word in composed.split_whitespace() {
        if !result.is_empty() {
            result.push(' ');
        }
        result.push_str(word);
    }
    result
}

/// NFC-compose the input and collapse every run of Unicode whitespace into
/// a single ASCII space, with none leading or trailing.
pub fn normalize_nfc_whitespace(string: &str) -> Cow<str> {
    if string.is_empty() || already_normalized(string) {
        Cow::Borrowed(string)
    } else {
        Cow::Owned(do_normalize(string))
    }
}
