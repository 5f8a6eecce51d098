use super::ParsedName;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// More than one comma was left once titles and suffixes were taken out,
    /// so there is no telling which part is the surname. Whatever was found
    /// before that point is kept in `partial`.
    #[error("ambiguous name structure: {commas} unresolved commas")]
    Ambiguous { commas: usize, partial: ParsedName },
}

impl ParseError {
    /// The fields recovered before parsing gave up.
    pub fn partial(&self) -> &ParsedName {
        match self {
            ParseError::Ambiguous { partial, .. } => partial,
        }
    }

    pub fn into_partial(self) -> ParsedName {
        match self {
            ParseError::Ambiguous { partial, .. } => partial,
        }
    }
}
