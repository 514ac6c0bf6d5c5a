//! Named locations of values on ORCA output lines. Each extractor declares its layout as a set
//! of `Field` constants, so a change in ORCA's print format is a change to one constant.

use std::str::FromStr;

use crate::{
    error::{ParseError, Result},
    orca::Section,
};

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Position {
    /// 0-based index into the whitespace-separated tokens.
    Token(usize),
    /// Counted back from the end of the tokens. `FromEnd(1)` is the last token.
    FromEnd(usize),
    /// Fixed byte columns, end exclusive. Surrounding whitespace is trimmed.
    Columns(usize, usize),
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Field {
    /// Used in error messages.
    pub name: &'static str,
    pub position: Position,
    /// Stripped from the end of the value if present, e.g. the colon in `ROOT   1:`.
    pub suffix: Option<char>,
}

impl Field {
    pub const fn token(name: &'static str, index: usize) -> Self {
        Self {
            name,
            position: Position::Token(index),
            suffix: None,
        }
    }

    pub const fn from_end(name: &'static str, count: usize) -> Self {
        Self {
            name,
            position: Position::FromEnd(count),
            suffix: None,
        }
    }

    pub const fn columns(name: &'static str, start: usize, end: usize) -> Self {
        Self {
            name,
            position: Position::Columns(start, end),
            suffix: None,
        }
    }

    pub const fn strip_suffix(self, suffix: char) -> Self {
        Self {
            suffix: Some(suffix),
            ..self
        }
    }

    /// The unparsed text of this field, if the line is long enough to contain it.
    pub fn raw<'a>(&self, line: &'a str) -> Option<&'a str> {
        let v = match self.position {
            Position::Token(i) => line.split_whitespace().nth(i)?,
            Position::FromEnd(n) => {
                let tokens: Vec<_> = line.split_whitespace().collect();
                let i = tokens.len().checked_sub(n)?;
                *tokens.get(i)?
            }
            Position::Columns(start, end) => line.get(start..end)?.trim(),
        };

        Some(match self.suffix {
            Some(c) => v.strip_suffix(c).unwrap_or(v),
            None => v,
        })
    }

    pub fn parse<T: FromStr>(&self, line: &str, section: Section, line_num: usize) -> Result<T> {
        let raw = self.raw(line);

        raw.and_then(|v| v.parse::<T>().ok())
            .ok_or_else(|| ParseError::MalformedNumericField {
                section,
                line_num,
                field: self.name,
                value: raw.unwrap_or_default().to_owned(),
            })
    }
}
