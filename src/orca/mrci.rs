//! MRCI state blocks, following the `CI-RESULTS` header:
//!
//! ```text
//! STATE   0:  Energy=   -149.747320468 Eh RefWeight=   0.9007  0.00 eV      0.0 cm**-1
//!       0.88612 : h---h---[2220]
//!       0.00931 : h 13 p 14[2202]
//! STATE   1:  Energy=   -149.680963157 Eh RefWeight=   0.9014  1.81 eV  14563.5 cm**-1
//!       0.89012 : h---h---[2202]
//!
//! ```
//!
//! Unlike the CASSCF block, the excitation fields are read for every state, including the
//! ground state. ORCA prints zeros there; anything else is logged as suspect.
//!
//! [MRCI docs](https://www.faccts.de/docs/orca/6.1/manual/contents/multireferencemethods/mrci.html)

use std::{io::BufRead, sync::LazyLock};

use log::{debug, warn};
use regex::Regex;

#[cfg(feature = "encode")]
use bincode::{Decode, Encode};

use crate::{
    error::{ParseError, Result},
    orca::{
        Configuration, Excitation, Section,
        fields::Field,
        lines::{LineReader, is_blank},
    },
};

const SECTION: Section = Section::Mrci;

const STATE_MARKER: &str = "STATE";

const STATE_INDEX: Field = Field::token("state index", 1).strip_suffix(':');
const ENERGY_HARTREE: Field = Field::token("state energy (Eh)", 3);
const REF_WEIGHT: Field = Field::token("reference weight", 6);
const EXCITATION_EV: Field = Field::token("excitation energy (eV)", 7);
const EXCITATION_WAVENUMBER: Field = Field::token("excitation energy (cm**-1)", 9);

const COEFFICIENT: Field = Field::token("configuration weight", 0);
/// Occupation numbers in brackets, e.g. `[2220]`.
static OCC_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[([012]+)\]").unwrap());

#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "encode", derive(Encode, Decode))]
pub struct CiState {
    pub index: u32,
    pub energy_hartree: f64,
    /// Weight of the reference (CASSCF) space in this state.
    pub ref_weight: f64,
    pub excitation: Excitation,
    pub configurations: Vec<Configuration>,
}

impl CiState {
    fn from_line(line: &str, line_num: usize) -> Result<Self> {
        let index = STATE_INDEX.parse(line, SECTION, line_num)?;
        let energy_hartree = ENERGY_HARTREE.parse(line, SECTION, line_num)?;
        let ref_weight = REF_WEIGHT.parse(line, SECTION, line_num)?;

        let excitation = Excitation {
            energy_ev: EXCITATION_EV.parse(line, SECTION, line_num)?,
            energy_wavenumber: EXCITATION_WAVENUMBER.parse(line, SECTION, line_num)?,
        };

        if index == 0 && (excitation.energy_ev != 0. || excitation.energy_wavenumber != 0.) {
            warn!(
                "MRCI ground state on line {line_num} has a non-zero excitation energy: {} eV",
                excitation.energy_ev
            );
        }

        Ok(Self {
            index,
            energy_hartree,
            ref_weight,
            excitation,
            configurations: Vec::new(),
        })
    }

    /// The configurations whose weight is strictly above `cutoff_weight`.
    pub fn configurations_above(&self, cutoff_weight: f64) -> impl Iterator<Item = &Configuration> {
        self.configurations
            .iter()
            .filter(move |c| c.coefficient > cutoff_weight)
    }
}

fn parse_configuration(line: &str, line_num: usize) -> Result<Configuration> {
    let coefficient = COEFFICIENT.parse(line, SECTION, line_num)?;

    let occupation = OCC_RE
        .captures(line)
        .and_then(|caps| caps.get(1))
        .ok_or_else(|| ParseError::MalformedConfigurationLine {
            line_num,
            line: line.to_owned(),
        })?
        .as_str()
        .to_owned();

    Ok(Configuration {
        coefficient,
        occupation,
    })
}

/// Parse the states of one block. `rdr` is positioned just after the `CI-RESULTS` line. Lines up to
/// the first STATE line are skipped; the block ends at the next blank line.
pub fn parse_block<R: BufRead>(rdr: &mut LineReader<R>) -> Result<Vec<CiState>> {
    let mut line = rdr.seek_containing(STATE_MARKER, SECTION)?;

    let mut states = Vec::new();
    let mut current: Option<CiState> = None;

    while !is_blank(&line) {
        if line.contains(STATE_MARKER) {
            let state = CiState::from_line(&line, rdr.line_num())?;
            if let Some(prev) = current.replace(state) {
                states.push(prev);
            }
        } else {
            let config = parse_configuration(&line, rdr.line_num())?;
            // `current` is always set here: the block starts on a STATE line.
            if let Some(state) = current.as_mut() {
                state.configurations.push(config);
            }
        }

        line = rdr.expect_line(SECTION)?;
    }

    if let Some(state) = current {
        states.push(state);
    }

    debug!("Parsed {} MRCI states", states.len());
    Ok(states)
}
