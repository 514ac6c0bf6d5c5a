//! For reading ORCA `out` files from CASSCF/MRCI runs: state energies and their leading
//! configurations, the MRCI absorption spectrum, and g-tensors.
//!
//! Results can be streamed into any `SectionSink` (e.g. the text [`Report`](crate::Report)), or
//! collected into an `OrcaOutput`.

pub mod casscf;
pub mod fields;
pub mod g_tensor;
pub mod lines;
pub mod mrci;
pub mod scanner;
pub mod spectrum;

#[cfg(feature = "encode")]
use std::io;
use std::{fmt, fs::File, io::BufReader, path::Path};

#[cfg(feature = "encode")]
use bincode::{Decode, Encode};

use casscf::CasRoot;
use g_tensor::GTensor;
use mrci::CiState;
use scanner::SectionSink;
use spectrum::SpectrumLine;

use crate::error::Result;

/// The parts of the output file we parse. Each starts at a line containing its marker.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Section {
    CasScf,
    Mrci,
    AbsorptionSpectrum,
    GTensor,
}

impl Section {
    pub const ALL: [Self; 4] = [
        Self::CasScf,
        Self::Mrci,
        Self::AbsorptionSpectrum,
        Self::GTensor,
    ];

    pub fn marker(self) -> &'static str {
        match self {
            Self::CasScf => "CAS-SCF STATES FOR BLOCK",
            Self::Mrci => "CI-RESULTS",
            Self::AbsorptionSpectrum => "CI-EXCITATION SPECTRA",
            Self::GTensor => "ELECTRONIC G-MATRIX",
        }
    }

    /// The section this line starts, if any. ORCA never prints two markers on one line.
    pub fn from_line(line: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| line.contains(s.marker()))
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = match self {
            Self::CasScf => "CASSCF states",
            Self::Mrci => "MRCI states",
            Self::AbsorptionSpectrum => "absorption spectrum",
            Self::GTensor => "g-tensor",
        };
        write!(f, "{v}")
    }
}

/// One configuration (determinant or CSF) contributing to a state.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "encode", derive(Encode, Decode))]
pub struct Configuration {
    /// Weight in the state's wavefunction, as printed.
    pub coefficient: f64,
    /// Active-space occupation, e.g. `2220`. The CASSCF variant keeps the token exactly as printed.
    pub occupation: String,
}

/// Excitation energy relative to the lowest root of the block.
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "encode", derive(Encode, Decode))]
pub struct Excitation {
    pub energy_ev: f64,
    /// cm^-1
    pub energy_wavenumber: f64,
}

#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "encode", derive(Encode, Decode))]
pub struct CasBlock {
    /// The marker line, e.g. `CAS-SCF STATES FOR BLOCK  1 MULT= 2 NROOTS= 3`
    pub header: String,
    pub roots: Vec<CasRoot>,
}

#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "encode", derive(Encode, Decode))]
pub struct CiBlock {
    pub header: String,
    pub states: Vec<CiState>,
}

/// Everything parsed from one output file, in file order within each field.
#[derive(Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "encode", derive(Encode, Decode))]
pub struct OrcaOutput {
    pub cas_blocks: Vec<CasBlock>,
    pub ci_blocks: Vec<CiBlock>,
    /// One table per `CI-EXCITATION SPECTRA` section.
    pub spectra: Vec<Vec<SpectrumLine>>,
    pub g_tensors: Vec<GTensor>,
}

impl OrcaOutput {
    /// Create output by parsing ORCA's stdout text.
    pub fn new(text: &str) -> Result<Self> {
        let mut result = Self::default();
        scanner::scan(text.as_bytes(), &mut result)?;
        Ok(result)
    }

    /// Parse an ORCA `out` file.
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)?;

        let mut result = Self::default();
        scanner::scan(BufReader::new(file), &mut result)?;
        Ok(result)
    }

    #[cfg(feature = "encode")]
    pub fn save_encoded(&self, path: &Path) -> io::Result<()> {
        use std::io::Write;

        let bytes = bincode::encode_to_vec(self, bincode::config::standard())
            .map_err(io::Error::other)?;

        let mut file = File::create(path)?;
        file.write_all(&bytes)
    }

    #[cfg(feature = "encode")]
    pub fn load_encoded(path: &Path) -> io::Result<Self> {
        let bytes = std::fs::read(path)?;

        let (result, _) = bincode::decode_from_slice(&bytes, bincode::config::standard())
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        Ok(result)
    }
}

impl SectionSink for OrcaOutput {
    fn section_start(&mut self, section: Section, header: &str) -> Result<()> {
        match section {
            Section::CasScf => self.cas_blocks.push(CasBlock {
                header: header.to_owned(),
                roots: Vec::new(),
            }),
            Section::Mrci => self.ci_blocks.push(CiBlock {
                header: header.to_owned(),
                states: Vec::new(),
            }),
            // Added once the table itself is found.
            Section::AbsorptionSpectrum | Section::GTensor => (),
        }
        Ok(())
    }

    fn cas_roots(&mut self, roots: &[CasRoot]) -> Result<()> {
        match self.cas_blocks.last_mut() {
            Some(block) => block.roots = roots.to_vec(),
            None => self.cas_blocks.push(CasBlock {
                header: String::new(),
                roots: roots.to_vec(),
            }),
        }
        Ok(())
    }

    fn ci_states(&mut self, states: &[CiState]) -> Result<()> {
        match self.ci_blocks.last_mut() {
            Some(block) => block.states = states.to_vec(),
            None => self.ci_blocks.push(CiBlock {
                header: String::new(),
                states: states.to_vec(),
            }),
        }
        Ok(())
    }

    fn spectrum_start(&mut self) -> Result<()> {
        self.spectra.push(Vec::new());
        Ok(())
    }

    fn spectrum_line(&mut self, line: &SpectrumLine) -> Result<()> {
        match self.spectra.last_mut() {
            Some(table) => table.push(*line),
            None => self.spectra.push(vec![*line]),
        }
        Ok(())
    }

    fn g_tensor(&mut self, g: &GTensor) -> Result<()> {
        self.g_tensors.push(*g);
        Ok(())
    }
}
