//! Principal g-values from the `ELECTRONIC G-MATRIX` section, reduced to the perpendicular and
//! parallel components of an axial tensor.
//!
//! [EPR docs](https://www.faccts.de/docs/orca/6.1/manual/contents/spectroscopyproperties/eprnmr.html)

use std::io::BufRead;

#[cfg(feature = "encode")]
use bincode::{Decode, Encode};

use crate::{
    error::Result,
    orca::{Section, fields::Field, lines::LineReader},
};

const SECTION: Section = Section::GTensor;

/// The principal values are on the line after this one.
const VALUES_MARKER: &str = "g-factors";

const G_XX: Field = Field::token("g_xx", 0);
const G_YY: Field = Field::token("g_yy", 1);
const G_ZZ: Field = Field::token("g_zz", 2);

#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "encode", derive(Encode, Decode))]
pub struct GTensor {
    pub g_perp: f64,
    pub g_para: f64,
}

impl GTensor {
    pub fn from_principal(g_xx: f64, g_yy: f64, g_zz: f64) -> Self {
        Self {
            g_perp: (g_xx + g_yy) / 2.,
            g_para: g_zz,
        }
    }
}

pub fn parse_block<R: BufRead>(rdr: &mut LineReader<R>) -> Result<GTensor> {
    rdr.seek_containing(VALUES_MARKER, SECTION)?;

    let line = rdr.expect_line(SECTION)?;
    let n = rdr.line_num();

    Ok(GTensor::from_principal(
        G_XX.parse(&line, SECTION, n)?,
        G_YY.parse(&line, SECTION, n)?,
        G_ZZ.parse(&line, SECTION, n)?,
    ))
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::error::ParseError;

    fn parse(text: &str) -> Result<GTensor> {
        parse_block(&mut LineReader::new(Cursor::new(text)))
    }

    #[test]
    fn axial() {
        let text = "-------------------\n\
                    The g-matrix: \n\
                    ...\n\
                    g-factors:\n   2.0021   2.0043   2.2110    iso =    2.0725\n";

        let g = parse(text).unwrap();
        assert_eq!(g.g_perp, (2.0021 + 2.0043) / 2.);
        assert_eq!(g.g_para, 2.2110);
    }

    #[test]
    fn too_few_values() {
        match parse("g-factors:\n  2.0 2.0\n") {
            Err(ParseError::MalformedNumericField { field, .. }) => assert_eq!(field, "g_zz"),
            r => panic!("Unexpected result: {r:?}"),
        }
    }

    #[test]
    fn values_line_missing() {
        assert!(matches!(
            parse("  g-factors:\n"),
            Err(ParseError::UnexpectedEndOfInput {
                section: Section::GTensor
            })
        ));
    }
}
