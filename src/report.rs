//! The plain-text summary. Each record is written as soon as the scanner produces it.

use std::io::{self, BufRead, Write};

use crate::{
    Configuration,
    error::Result,
    orca::{
        Section,
        casscf::CasRoot,
        g_tensor::GTensor,
        mrci::CiState,
        scanner::{self, SectionSink},
        spectrum::SpectrumLine,
    },
};

/// Configurations at or below this weight are left out of the report.
pub const DEFAULT_CUTOFF_WEIGHT: f64 = 0.5;

const SEPARATOR: &str =
    "------------------------------------------------------------------------------";

const SPECTRUM_ANNOTATION: &str = "(no SOC correction)";
const SPECTRUM_COLUMNS: &str = "state from state to       cm-1      eV";

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct ReportConfig {
    /// Only configurations with a coefficient strictly greater than this are printed.
    pub cutoff_weight: f64,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            cutoff_weight: DEFAULT_CUTOFF_WEIGHT,
        }
    }
}

pub struct Report<W: Write> {
    out: W,
    cfg: ReportConfig,
}

impl<W: Write> Report<W> {
    pub fn new(out: W, cfg: ReportConfig) -> Self {
        Self { out, cfg }
    }

    /// Write the report preamble. `source_name` is usually the output file's path.
    pub fn begin(&mut self, source_name: &str) -> io::Result<()> {
        writeln!(
            self.out,
            "Using a cutoff weight of {:?}",
            self.cfg.cutoff_weight
        )?;
        writeln!(self.out, "{SEPARATOR}")?;
        writeln!(self.out, "{source_name}")
    }

    /// Write the closing separator, and hand back the writer.
    pub fn finish(mut self) -> io::Result<W> {
        writeln!(self.out, "{SEPARATOR}")?;
        self.out.flush()?;
        Ok(self.out)
    }
}

fn write_configurations<'a, W: Write>(
    out: &mut W,
    configs: impl Iterator<Item = &'a Configuration>,
) -> io::Result<()> {
    for c in configs {
        writeln!(out, "    {:>10.5}  {}", c.coefficient, c.occupation)?;
    }
    Ok(())
}

pub fn write_cas_root<W: Write>(out: &mut W, root: &CasRoot, cutoff_weight: f64) -> io::Result<()> {
    match root.excitation {
        // Only the ground state prints without excitation energies.
        None => writeln!(out, "ROOT {}: E= {:?} Eh", root.index, root.energy_hartree)?,
        Some(exc) => writeln!(
            out,
            "ROOT {}: E= {:?} Eh {:?} eV {:?} cm**-1",
            root.index, root.energy_hartree, exc.energy_ev, exc.energy_wavenumber
        )?,
    }

    write_configurations(out, root.configurations_above(cutoff_weight))
}

pub fn write_ci_state<W: Write>(out: &mut W, state: &CiState, cutoff_weight: f64) -> io::Result<()> {
    writeln!(
        out,
        "STATE {}: E= {:?} Eh RefWeight= {:?} {:?} eV {:?} cm**-1",
        state.index,
        state.energy_hartree,
        state.ref_weight,
        state.excitation.energy_ev,
        state.excitation.energy_wavenumber
    )?;

    write_configurations(out, state.configurations_above(cutoff_weight))
}

pub fn write_spectrum_line<W: Write>(out: &mut W, line: &SpectrumLine) -> io::Result<()> {
    writeln!(
        out,
        "{:10} {:8} {:10.1} {:7.3}",
        line.state_from, line.state_to, line.energy_wavenumber, line.energy_ev
    )
}

pub fn write_g_tensor<W: Write>(out: &mut W, g: &GTensor) -> io::Result<()> {
    writeln!(out, " g_perp: {:?}", g.g_perp)?;
    writeln!(out, " g_para: {:?}", g.g_para)
}

impl<W: Write> SectionSink for Report<W> {
    fn section_start(&mut self, section: Section, header: &str) -> Result<()> {
        match section {
            Section::AbsorptionSpectrum => {
                writeln!(self.out, "{header} {SPECTRUM_ANNOTATION}")?
            }
            _ => writeln!(self.out, "{header}")?,
        }
        Ok(())
    }

    fn cas_roots(&mut self, roots: &[CasRoot]) -> Result<()> {
        for root in roots {
            write_cas_root(&mut self.out, root, self.cfg.cutoff_weight)?;
        }
        Ok(())
    }

    fn ci_states(&mut self, states: &[CiState]) -> Result<()> {
        for state in states {
            write_ci_state(&mut self.out, state, self.cfg.cutoff_weight)?;
        }
        Ok(())
    }

    fn spectrum_start(&mut self) -> Result<()> {
        writeln!(self.out, "{SPECTRUM_COLUMNS}")?;
        Ok(())
    }

    fn spectrum_line(&mut self, line: &SpectrumLine) -> Result<()> {
        Ok(write_spectrum_line(&mut self.out, line)?)
    }

    fn g_tensor(&mut self, g: &GTensor) -> Result<()> {
        Ok(write_g_tensor(&mut self.out, g)?)
    }
}

/// Scan `reader`, writing the full report to `out`. If scanning fails, the report is left
/// unterminated; the error names the section and line.
pub fn write_report<R: BufRead, W: Write>(
    reader: R,
    source_name: &str,
    out: W,
    cfg: ReportConfig,
) -> Result<W> {
    let mut report = Report::new(out, cfg);

    report.begin(source_name)?;
    scanner::scan(reader, &mut report)?;

    Ok(report.finish()?)
}
