//! The MRCI absorption spectrum, under the `CI-EXCITATION SPECTRA` header. Rows are handed to
//! the sink as they're read.
//!
//! State indices are read from fixed columns; indices wider than these columns are misread. Energies
//! are read by token, counting back from the end of the row.

use std::io::BufRead;

use log::debug;

#[cfg(feature = "encode")]
use bincode::{Decode, Encode};

use crate::{
    error::Result,
    orca::{
        Section,
        fields::Field,
        lines::{LineReader, is_blank},
        scanner::SectionSink,
    },
};

const SECTION: Section = Section::AbsorptionSpectrum;

/// cm^-1 to eV.
pub const WAVENUMBER_TO_EV: f64 = 1.239842e-4;

const TABLE_MARKER: &str = "ABSORPTION SPECTRUM";
/// Dashes, two column-title lines, dashes.
const HEADER_LINES: usize = 4;

const STATE_FROM: Field = Field::columns("initial state", 0, 3);
const STATE_TO: Field = Field::columns("final state", 9, 11);
const ENERGY_WAVENUMBER: Field = Field::from_end("transition energy (cm-1)", 7);

#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "encode", derive(Encode, Decode))]
pub struct SpectrumLine {
    pub state_from: u32,
    pub state_to: u32,
    pub energy_wavenumber: f64,
    pub energy_ev: f64,
}

impl SpectrumLine {
    pub fn new(state_from: u32, state_to: u32, energy_wavenumber: f64) -> Self {
        Self {
            state_from,
            state_to,
            energy_wavenumber,
            energy_ev: energy_wavenumber * WAVENUMBER_TO_EV,
        }
    }

    fn from_line(line: &str, line_num: usize) -> Result<Self> {
        Ok(Self::new(
            STATE_FROM.parse(line, SECTION, line_num)?,
            STATE_TO.parse(line, SECTION, line_num)?,
            ENERGY_WAVENUMBER.parse(line, SECTION, line_num)?,
        ))
    }
}

/// Find the absorption table after the section header, and pass each of its rows to `sink`.
pub fn parse_block<R: BufRead, S: SectionSink>(rdr: &mut LineReader<R>, sink: &mut S) -> Result<()> {
    rdr.seek_containing(TABLE_MARKER, SECTION)?;
    rdr.skip(HEADER_LINES, SECTION)?;

    let mut line = rdr.expect_line(SECTION)?;
    sink.spectrum_start()?;

    let mut count = 0;
    while !is_blank(&line) {
        sink.spectrum_line(&SpectrumLine::from_line(&line, rdr.line_num())?)?;
        count += 1;

        line = rdr.expect_line(SECTION)?;
    }

    debug!("Parsed {count} absorption lines");
    Ok(())
}
