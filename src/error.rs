//! Errors raised while scanning an ORCA output file. All of these are fatal: a log that doesn't
//! match the expected layout is reported rather than summarized from partial data.

use std::io;

use thiserror::Error;

use crate::orca::Section;

#[derive(Error, Debug)]
pub enum ParseError {
    /// A section started, but the file ended before its terminator.
    #[error("Unexpected end of input inside the {section} section")]
    UnexpectedEndOfInput { section: Section },
    #[error("Invalid {field} in the {section} section, line {line_num}: {value:?}")]
    MalformedNumericField {
        section: Section,
        line_num: usize,
        field: &'static str,
        value: String,
    },
    /// An MRCI configuration line without a `[...]` occupation pattern.
    #[error("No occupation pattern on MRCI configuration line {line_num}: {line:?}")]
    MalformedConfigurationLine { line_num: usize, line: String },
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, ParseError>;
