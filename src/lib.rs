//! Summaries of ORCA CASSCF and MRCI output files: state energies with their leading
//! configurations, MRCI absorption spectra, and g-tensors. Also includes a helper for converting
//! Q-Chem output geometries to XYZ using Open Babel.

pub mod error;
pub mod orca;
pub mod qcout;
pub mod report;

pub use error::ParseError;
pub use orca::{
    CasBlock, CiBlock, Configuration, Excitation, OrcaOutput, Section,
    casscf::CasRoot,
    g_tensor::GTensor,
    mrci::CiState,
    scanner::{SectionSink, scan},
    spectrum::{SpectrumLine, WAVENUMBER_TO_EV},
};
pub use report::{DEFAULT_CUTOFF_WEIGHT, Report, ReportConfig, write_report};
