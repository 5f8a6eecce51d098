use super::error::ParseError;
use super::lexicon::Lexicon;
use super::nickname::strip_nicknames;
use super::normalize::normalize_nfc_whitespace;
use super::suffix;
use super::surname;
use super::title;
use super::token::{count_commas, join, join_listed, tokenize, Tokens};
use super::ParsedName;
use compact_str::CompactString;
use tracing::{debug, trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Done,
}

#[derive(Debug)]
struct ParseOp<'a> {
    lexicon: &'a Lexicon,
    input: CompactString,
    tokens: Tokens,
    name: ParsedName,
}

pub fn parse(input: &str, lexicon: &Lexicon) -> Result<ParsedName, ParseError> {
    let mut op = ParseOp {
        lexicon,
        input: CompactString::new(normalize_nfc_whitespace(input)),
        tokens: Tokens::new(),
        name: ParsedName::default(),
    };

    op.run()?;
    op.name.normalize_case(lexicon);
    Ok(op.name)
}

impl<'a> ParseOp<'a> {
    fn run(&mut self) -> Result<(), ParseError> {
        // Each stage consumes tokens and fills in fields; once the tokens run
        // out, the rest are skipped
        let stages: [(&str, fn(&mut Self) -> Result<Flow, ParseError>); 8] = [
            ("nickname", Self::strip_nicknames),
            ("suffix", Self::strip_suffixes),
            ("title", Self::strip_titles),
            ("particle", Self::join_particles),
            ("conjunction", Self::join_conjunctions),
            ("comma suffix", Self::strip_comma_separated),
            ("surname", Self::split_surname),
            ("given name", Self::split_given),
        ];

        for (stage, apply) in stages {
            if apply(self)? == Flow::Done {
                trace!(stage, "nothing left to parse");
                break;
            }
        }

        Ok(())
    }

    #[inline]
    fn exhausted(&self) -> Flow {
        if self.tokens.is_empty() {
            Flow::Done
        } else {
            Flow::Continue
        }
    }

    fn strip_nicknames(&mut self) -> Result<Flow, ParseError> {
        let (nick, remaining) = strip_nicknames(&self.input);
        self.tokens = tokenize(&remaining);
        self.name.nick = nick;
        Ok(self.exhausted())
    }

    fn strip_suffixes(&mut self) -> Result<Flow, ParseError> {
        let found = suffix::extract_suffixes(&mut self.tokens, self.lexicon);
        self.name.suffix = join_listed(found.iter().map(|s| s.as_str()));
        Ok(self.exhausted())
    }

    fn strip_titles(&mut self) -> Result<Flow, ParseError> {
        let found = title::extract_titles(&mut self.tokens, self.lexicon);
        self.name.title = join_listed(found.iter().map(|s| s.as_str()));
        Ok(self.exhausted())
    }

    fn join_particles(&mut self) -> Result<Flow, ParseError> {
        surname::join_particles(&mut self.tokens, self.lexicon);
        Ok(Flow::Continue)
    }

    fn join_conjunctions(&mut self) -> Result<Flow, ParseError> {
        surname::join_conjunctions(&mut self.tokens, self.lexicon);
        Ok(Flow::Continue)
    }

    fn strip_comma_separated(&mut self) -> Result<Flow, ParseError> {
        let found = suffix::extract_comma_separated(&mut self.tokens);
        if !found.is_empty() {
            self.name.suffix = join_listed(
                std::iter::once(self.name.suffix.as_str()).chain(found.iter().map(|s| s.as_str())),
            );
        }
        Ok(Flow::Continue)
    }

    // "Last, First Middle" if a comma is left, otherwise "First Middle Last"
    fn split_surname(&mut self) -> Result<Flow, ParseError> {
        let commas = count_commas(&self.tokens);
        if commas > 1 {
            debug!(commas, input = %self.input, "ambiguous name structure");
            let mut partial = std::mem::take(&mut self.name);
            partial.normalize_case(self.lexicon);
            return Err(ParseError::Ambiguous { commas, partial });
        }

        match self.tokens.iter().position(|t| t.comma) {
            Some(at) => {
                self.name.last = join(&self.tokens[..=at]);
                self.tokens.drain(..=at);
            }
            None => {
                if let Some(last) = self.tokens.pop() {
                    self.name.last = last.text;
                }
            }
        }

        Ok(self.exhausted())
    }

    fn split_given(&mut self) -> Result<Flow, ParseError> {
        let first = self.tokens.remove(0);
        self.name.first = first.text;
        self.name.middle = join(&self.tokens);
        self.tokens.clear();
        Ok(Flow::Done)
    }
}
