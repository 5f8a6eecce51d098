//! A library for splitting a full human name into its title, first, middle
//! and last names, nickname and suffix.
//!
//! ```
//! use full_name_parser::ParsedName;
//!
//! let name = ParsedName::parse("DR. JUAN 'DON' DE LA VEGA JR.").unwrap();
//! assert_eq!("Dr.", name.title());
//! assert_eq!("Juan", name.first());
//! assert_eq!("de la Vega", name.last());
//! assert_eq!("Don", name.nick());
//! assert_eq!("Jr.", name.suffix());
//! ```

mod case;
mod error;
mod lexicon;
mod namecase;
mod nickname;
mod normalize;
mod parse;
mod suffix;
mod surname;
mod title;
mod token;

#[cfg(feature = "serialization")]
mod serialization;

#[cfg(feature = "ffi")]
pub mod external;

pub use error::ParseError;
pub use lexicon::Lexicon;

use compact_str::CompactString;
use std::fmt;

/// One of the six parts a name is split into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Title,
    First,
    Middle,
    Last,
    Nick,
    Suffix,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::Title,
        Field::First,
        Field::Middle,
        Field::Last,
        Field::Nick,
        Field::Suffix,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::First => "first",
            Field::Middle => "middle",
            Field::Last => "last",
            Field::Nick => "nick",
            Field::Suffix => "suffix",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A name split into its parts. Any part may be empty.
///
/// Several titles, nicknames or suffixes are kept together in one field,
/// separated by `", "`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ParsedName {
    title: CompactString,
    first: CompactString,
    middle: CompactString,
    last: CompactString,
    nick: CompactString,
    suffix: CompactString,
}

impl ParsedName {
    /// Parses the given string, using the built-in English word lists.
    ///
    /// Anything that can't be placed is left out rather than treated as an
    /// error; the only failure is a name with more than one comma left over
    /// once titles and suffixes are removed, e.g. "Smith, John, Q R", where
    /// there's no telling which part is the surname.
    ///
    /// ```
    /// use full_name_parser::ParsedName;
    ///
    /// let name = ParsedName::parse("Smith, John Q").unwrap();
    /// assert_eq!("John", name.first());
    /// assert_eq!("Q", name.middle());
    /// assert_eq!("Smith", name.last());
    ///
    /// let name = ParsedName::parse("Mr. John 'Jack' Smith Jr.").unwrap();
    /// assert_eq!("Mr. John Smith, Jr.", name.display_full());
    ///
    /// assert!(ParsedName::parse("Smith, John, Q R").is_err());
    /// ```
    pub fn parse(name: &str) -> Result<ParsedName, ParseError> {
        ParsedName::parse_with(name, Lexicon::english())
    }

    pub fn parse_with(name: &str, lexicon: &Lexicon) -> Result<ParsedName, ParseError> {
        parse::parse(name, lexicon)
    }

    #[inline]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[inline]
    pub fn first(&self) -> &str {
        &self.first
    }

    #[inline]
    pub fn middle(&self) -> &str {
        &self.middle
    }

    #[inline]
    pub fn last(&self) -> &str {
        &self.last
    }

    #[inline]
    pub fn nick(&self) -> &str {
        &self.nick
    }

    #[inline]
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Title => &self.title,
            Field::First => &self.first,
            Field::Middle => &self.middle,
            Field::Last => &self.last,
            Field::Nick => &self.nick,
            Field::Suffix => &self.suffix,
        }
    }

    fn get_mut(&mut self, field: Field) -> &mut CompactString {
        match field {
            Field::Title => &mut self.title,
            Field::First => &mut self.first,
            Field::Middle => &mut self.middle,
            Field::Last => &mut self.last,
            Field::Nick => &mut self.nick,
            Field::Suffix => &mut self.suffix,
        }
    }

    /// The non-empty fields, in the order they are declared in `Field`.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> + '_ {
        Field::ALL
            .into_iter()
            .map(move |field| (field, self.get(field)))
            .filter(|(_, value)| !value.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// Recapitalizes every field: forced spellings like "van" or "III",
    /// uppercased initials, and title case with "McDonald"-style
    /// capitals. Applying it twice changes nothing.
    pub fn normalize_case(&mut self, lexicon: &Lexicon) {
        for field in Field::ALL {
            let value = self.get_mut(field);
            if !value.is_empty() {
                *value = namecase::namecase_field(value, field, lexicon);
            }
        }
    }

    /// The whole name, without the nickname, e.g. "Dr. Juan Q. Garcia, Jr.".
    pub fn display_full(&self) -> String {
        let mut result = String::with_capacity(
            self.title.len()
                + self.first.len()
                + self.middle.len()
                + self.last.len()
                + self.suffix.len()
                + 6,
        );

        for part in [&self.title, &self.first, &self.middle, &self.last] {
            if part.is_empty() {
                continue;
            }
            if !result.is_empty() {
                result.push(' ');
            }
            result.push_str(part);
        }

        if !self.suffix.is_empty() {
            if !result.is_empty() {
                result.push_str(", ");
            }
            result.push_str(&self.suffix);
        }

        result
    }

    /// E.g. "Juan Garcia".
    pub fn display_first_last(&self) -> String {
        match (self.first.is_empty(), self.last.is_empty()) {
            (false, false) => format!("{} {}", self.first, self.last),
            (false, true) => self.first.to_string(),
            _ => self.last.to_string(),
        }
    }
}

impl fmt::Display for ParsedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_full())
    }
}

/// Shorthand for [`ParsedName::parse`].
pub fn parse(name: &str) -> Result<ParsedName, ParseError> {
    ParsedName::parse(name)
}
