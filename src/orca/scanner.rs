//! Walks an ORCA output file line by line. When a line contains a section marker, the matching
//! extractor takes over the same line cursor until its block ends, then scanning resumes.

use std::io::BufRead;

use log::{debug, info};

use crate::{
    error::Result,
    orca::{
        Section,
        casscf::{self, CasRoot},
        g_tensor::{self, GTensor},
        lines::LineReader,
        mrci::{self, CiState},
        spectrum::{self, SpectrumLine},
    },
};

/// Receives results in the order their sections appear in the file.
pub trait SectionSink {
    /// A marker line was found. `header` is the line with surrounding whitespace removed.
    fn section_start(&mut self, section: Section, header: &str) -> Result<()>;
    fn cas_roots(&mut self, roots: &[CasRoot]) -> Result<()>;
    fn ci_states(&mut self, states: &[CiState]) -> Result<()>;
    /// The absorption table was found; rows follow.
    fn spectrum_start(&mut self) -> Result<()>;
    fn spectrum_line(&mut self, line: &SpectrumLine) -> Result<()>;
    fn g_tensor(&mut self, g: &GTensor) -> Result<()>;
}

/// Scan a whole file, passing each section's results to `sink`. Any error aborts the scan.
pub fn scan<R: BufRead, S: SectionSink>(reader: R, sink: &mut S) -> Result<()> {
    let mut rdr = LineReader::new(reader);
    let mut count = 0;

    while let Some(line) = rdr.next_line()? {
        let Some(section) = Section::from_line(&line) else {
            continue;
        };

        debug!("{section} section at line {}", rdr.line_num());
        count += 1;

        sink.section_start(section, line.trim())?;

        match section {
            Section::CasScf => {
                let roots = casscf::parse_block(&mut rdr)?;
                sink.cas_roots(&roots)?;
            }
            Section::Mrci => {
                let states = mrci::parse_block(&mut rdr)?;
                sink.ci_states(&states)?;
            }
            Section::AbsorptionSpectrum => spectrum::parse_block(&mut rdr, sink)?,
            Section::GTensor => {
                let g = g_tensor::parse_block(&mut rdr)?;
                sink.g_tensor(&g)?;
            }
        }
    }

    info!("Scanned {} lines; found {count} sections", rdr.line_num());
    Ok(())
}
