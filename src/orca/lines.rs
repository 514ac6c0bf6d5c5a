//! A line cursor shared between the scanner and the section extractors. Every extractor pulls
//! from the same cursor, so when it returns, the scanner resumes right after the last line
//! the extractor consumed.

use std::io::{BufRead, Lines};

use crate::{
    error::{ParseError, Result},
    orca::Section,
};

pub struct LineReader<R> {
    lines: Lines<R>,
    /// 1-based number of the most recently read line. 0 before the first read.
    line_num: usize,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line_num: 0,
        }
    }

    pub fn line_num(&self) -> usize {
        self.line_num
    }

    /// The next line, or `None` at the end of the file. Used by the scanner, where running out
    /// of lines is the normal way to finish.
    pub fn next_line(&mut self) -> Result<Option<String>> {
        match self.lines.next() {
            Some(line) => {
                self.line_num += 1;
                Ok(Some(line?))
            }
            None => Ok(None),
        }
    }

    /// The next line, inside a section. The end of the file here means the section was cut off.
    pub fn expect_line(&mut self, section: Section) -> Result<String> {
        self.next_line()?
            .ok_or(ParseError::UnexpectedEndOfInput { section })
    }

    /// Discard `count` lines, e.g. table headers.
    pub fn skip(&mut self, count: usize, section: Section) -> Result<()> {
        for _ in 0..count {
            self.expect_line(section)?;
        }
        Ok(())
    }

    /// Read forward until a line containing `needle`, and return that line.
    pub fn seek_containing(&mut self, needle: &str, section: Section) -> Result<String> {
        loop {
            let line = self.expect_line(section)?;
            if line.contains(needle) {
                return Ok(line);
            }
        }
    }
}

/// True for lines that end a block: empty, or whitespace only.
pub fn is_blank(line: &str) -> bool {
    line.split_whitespace().next().is_none()
}
