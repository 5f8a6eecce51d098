use compact_str::CompactString;
use std::borrow::Cow;

const OPENERS: [char; 8] = ['\'', '‘', '’', '"', '“', '”', '[', '('];
const SINGLE_QUOTES: &[char] = &['\'', '‘', '’'];
const DOUBLE_QUOTES: &[char] = &['"', '“', '”'];
const CLOSE_BRACKET: &[char] = &[']'];
const CLOSE_PAREN: &[char] = &[')'];

// Quotes close on any quote of the same kind, so a nickname can't contain one
#[inline]
fn closers_if_opens_nickname(c: char) -> Option<&'static [char]> {
    match c {
        '\'' | '‘' | '’' => Some(SINGLE_QUOTES),
        '"' | '“' | '”' => Some(DOUBLE_QUOTES),
        '[' => Some(CLOSE_BRACKET),
        '(' => Some(CLOSE_PAREN),
        _ => None,
    }
}

struct NickSpan<'a> {
    start: usize,
    end: usize,
    content: &'a str,
}

// Looks for `<space><open>content<close>[,]<space>` at or after `from`.
// The span runs from the leading space up to, not including, the trailing
// space, which stays behind to open the next aside.
fn find_nickname(padded: &str, from: usize) -> Option<NickSpan> {
    for (i, c) in padded[from..].char_indices() {
        if c != ' ' {
            continue;
        }

        let start = from + i;
        let open_at = start + 1;
        let open = match padded[open_at..].chars().next() {
            Some(open) => open,
            None => break,
        };
        let closers = match closers_if_opens_nickname(open) {
            Some(closers) => closers,
            None => continue,
        };

        let content_start = open_at + open.len_utf8();
        let close_at = match padded[content_start..].find(closers) {
            Some(found_at) if found_at > 0 => content_start + found_at,
            _ => continue,
        };
        let close_len = padded[close_at..].chars().next().map_or(1, char::len_utf8);

        let mut after = close_at + close_len;
        if padded[after..].starts_with(',') {
            after += 1;
        }

        if padded[after..].starts_with(' ') {
            return Some(NickSpan {
                start,
                end: after,
                content: &padded[content_start..close_at],
            });
        }
    }

    None
}

fn clean_content(content: &str) -> &str {
    let content = content.trim();
    content.strip_suffix(',').unwrap_or(content).trim_end()
}

/// Remove every quoted or bracketed aside bounded by whitespace, returning
/// the asides joined by `", "` and what is left of the name.
///
/// A comma directly after an aside goes with it.
///
/// Optimized for the common case of no nickname at all.
pub fn strip_nicknames(input: &str) -> (CompactString, Cow<str>) {
    if !input.contains(&OPENERS[..]) {
        return (CompactString::default(), Cow::Borrowed(input));
    }

    let padded = format!(" {} ", input);
    let mut nick = CompactString::default();
    let mut remaining = String::with_capacity(padded.len());
    let mut pos = 0;

    while let Some(span) = find_nickname(&padded, pos) {
        let content = clean_content(span.content);
        if !content.is_empty() {
            if !nick.is_empty() {
                nick.push_str(", ");
            }
            nick.push_str(content);
        }

        remaining.push_str(&padded[pos..span.start]);
        pos = span.end;
    }

    if pos == 0 {
        return (nick, Cow::Borrowed(input));
    }

    remaining.push_str(&padded[pos..]);
    let remaining = remaining.split_whitespace().collect::<Vec<_>>().join(" ");
    (nick, Cow::Owned(remaining))
}
