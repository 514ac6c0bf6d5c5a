//! CASSCF state blocks, as printed after each `CAS-SCF STATES FOR BLOCK` header:
//!
//! ```text
//! ---------------------------------------------
//! CAS-SCF STATES FOR BLOCK  1 MULT= 2 NROOTS= 3
//! ---------------------------------------------
//!
//! ROOT   0:  E=    -1.5485353762 Eh
//!       0.95478 [     0]: 2221
//!       0.04520 [     1]: 2212
//! ROOT   1:  E=    -1.4483985257 Eh  2.725 eV  21976.8 cm**-1
//!       0.99873 [     1]: 2212
//!
//! ```
//!
//! [CASSCF docs](https://www.faccts.de/docs/orca/6.1/manual/contents/multireferencemethods/casscf.html)

use std::io::BufRead;

use log::{debug, warn};

#[cfg(feature = "encode")]
use bincode::{Decode, Encode};

use crate::{
    error::Result,
    orca::{
        Configuration, Excitation, Section,
        fields::Field,
        lines::{LineReader, is_blank},
    },
};

const SECTION: Section = Section::CasScf;

/// Lines between the marker and the first ROOT line.
const HEADER_LINES: usize = 2;
const ROOT_MARKER: &str = "ROOT";

const ROOT_INDEX: Field = Field::token("root index", 1).strip_suffix(':');
const ENERGY_HARTREE: Field = Field::token("root energy (Eh)", 3);
const EXCITATION_EV: Field = Field::token("excitation energy (eV)", 5);
const EXCITATION_WAVENUMBER: Field = Field::token("excitation energy (cm**-1)", 7);

const COEFFICIENT: Field = Field::token("configuration weight", 0);
const OCCUPATION: Field = Field::from_end("occupation", 1);

#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "encode", derive(Encode, Decode))]
pub struct CasRoot {
    pub index: u32,
    pub energy_hartree: f64,
    /// Only printed for excited roots.
    pub excitation: Option<Excitation>,
    pub configurations: Vec<Configuration>,
}

impl CasRoot {
    fn from_line(line: &str, line_num: usize) -> Result<Self> {
        let index = ROOT_INDEX.parse(line, SECTION, line_num)?;
        let energy_hartree = ENERGY_HARTREE.parse(line, SECTION, line_num)?;

        let excitation = if index > 0 {
            Some(Excitation {
                energy_ev: EXCITATION_EV.parse(line, SECTION, line_num)?,
                energy_wavenumber: EXCITATION_WAVENUMBER.parse(line, SECTION, line_num)?,
            })
        } else {
            None
        };

        Ok(Self {
            index,
            energy_hartree,
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
    // The line isn't blank, so there is always a last token.
    let occupation = OCCUPATION.raw(line).unwrap_or_default().to_owned();

    Ok(Configuration {
        coefficient,
        occupation,
    })
}

/// Parse the roots of one block. `rdr` is positioned just after the marker line; on return, it is
/// positioned after the blank line that ends the block.
pub fn parse_block<R: BufRead>(rdr: &mut LineReader<R>) -> Result<Vec<CasRoot>> {
    rdr.skip(HEADER_LINES, SECTION)?;

    let mut roots = Vec::new();
    let mut current: Option<CasRoot> = None;

    loop {
        let line = rdr.expect_line(SECTION)?;
        if is_blank(&line) {
            break;
        }

        if line.contains(ROOT_MARKER) {
            let root = CasRoot::from_line(&line, rdr.line_num())?;
            if let Some(prev) = current.replace(root) {
                roots.push(prev);
            }
            continue;
        }

        let config = parse_configuration(&line, rdr.line_num())?;
        match current.as_mut() {
            Some(root) => root.configurations.push(config),
            None => warn!(
                "Configuration on line {} precedes the first ROOT; ignoring it",
                rdr.line_num()
            ),
        }
    }

    if let Some(root) = current {
        roots.push(root);
    }

    debug!("Parsed {} CASSCF roots", roots.len());
    Ok(roots)
}
