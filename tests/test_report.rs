use std::path::Path;

use approx::assert_relative_eq;
use orca_mrci::{
    DEFAULT_CUTOFF_WEIGHT, OrcaOutput, ParseError, ReportConfig, Section, WAVENUMBER_TO_EV,
    write_report,
};

const H2O_MRCI: &str = include_str!("data/h2o_mrci.out");

fn report(text: &str, cutoff_weight: f64) -> Result<String, ParseError> {
    let out = write_report(
        text.as_bytes(),
        "h2o_mrci.out",
        Vec::new(),
        ReportConfig { cutoff_weight },
    )?;
    Ok(String::from_utf8(out).unwrap())
}

#[test]
fn test_full_report() {
    let sep = "-".repeat(78);
    let g_perp = (2.0020817_f64 + 2.0050436) / 2.;

    let expected = [
        "Using a cutoff weight of 0.5".to_owned(),
        sep.clone(),
        "h2o_mrci.out".to_owned(),
        "CAS-SCF STATES FOR BLOCK  1 MULT= 1 NROOTS= 2".to_owned(),
        "ROOT 0: E= -75.9854210035 Eh".to_owned(),
        "       0.97459  2220".to_owned(),
        "ROOT 1: E= -75.6402006847 Eh 9.394 eV 75766.3 cm**-1".to_owned(),
        "CI-RESULTS".to_owned(),
        "STATE 0: E= -76.144870661 Eh RefWeight= 0.9501 0.0 eV 0.0 cm**-1".to_owned(),
        "       0.95012  2220".to_owned(),
        "STATE 1: E= -75.812653107 Eh RefWeight= 0.9432 9.04 eV 72910.9 cm**-1".to_owned(),
        "CI-EXCITATION SPECTRA (no SOC correction)".to_owned(),
        "state from state to       cm-1      eV".to_owned(),
        "         0        1    72910.9   9.040".to_owned(),
        "ELECTRONIC G-MATRIX".to_owned(),
        format!(" g_perp: {g_perp:?}"),
        " g_para: 2.1085212".to_owned(),
        sep,
    ];

    let text = report(H2O_MRCI, DEFAULT_CUTOFF_WEIGHT).unwrap();
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines, expected);
}

#[test]
fn test_zero_cutoff_prints_all_configurations() {
    let text = report(H2O_MRCI, 0.).unwrap();

    for occ in ["2220", "2202", "2211", "2121"] {
        assert!(text.contains(&format!("  {occ}\n")), "missing {occ}");
    }
    // Root 1's 0.5 configuration sits exactly on the default cutoff.
    assert!(text.contains("       0.50000  2211\n"));
    assert!(!report(H2O_MRCI, 0.5).unwrap().contains("0.50000"));
}

#[test]
fn test_collected_output() {
    let out = OrcaOutput::new(H2O_MRCI).unwrap();

    assert_eq!(out.cas_blocks.len(), 1);
    let roots = &out.cas_blocks[0].roots;
    assert_eq!(roots.len(), 2);
    assert_eq!(roots[0].configurations.len(), 2);
    assert_eq!(roots[1].configurations[1].occupation, "2121");

    assert_eq!(out.ci_blocks.len(), 1);
    assert_eq!(out.ci_blocks[0].header, "CI-RESULTS");
    let states = &out.ci_blocks[0].states;
    assert_eq!(states.len(), 2);
    assert_relative_eq!(states[1].ref_weight, 0.9432);

    assert_eq!(out.spectra.len(), 1);
    let row = out.spectra[0][0];
    assert_eq!((row.state_from, row.state_to), (0, 1));
    assert_eq!(row.energy_ev, row.energy_wavenumber * WAVENUMBER_TO_EV);

    assert_eq!(out.g_tensors.len(), 1);
    assert_eq!(out.g_tensors[0].g_para, 2.1085212);
}

#[test]
fn test_no_sections() {
    let text = report("nothing to see\nhere\n", 0.5).unwrap();
    assert_eq!(text.lines().count(), 4);
}

#[test]
fn test_truncated_ci_block() {
    let cut = H2O_MRCI.find("      0.47012").unwrap();
    let mut buf = Vec::new();
    let err = write_report(
        H2O_MRCI[..cut].as_bytes(),
        "h2o_mrci.out",
        &mut buf,
        ReportConfig::default(),
    )
    .unwrap_err();

    assert!(matches!(
        err,
        ParseError::UnexpectedEndOfInput {
            section: Section::Mrci
        }
    ));

    // The CASSCF section was complete, and is reported. Nothing from the MRCI block is.
    let text = String::from_utf8(buf).unwrap();
    assert!(text.contains("ROOT 1: E="));
    assert!(text.trim_end().ends_with("CI-RESULTS"));
    assert!(!text.contains("STATE 0"));
}

#[test]
fn test_spectrum_rows_written_before_truncation() {
    let row_end = "0.39332   0.00000\n";
    let cut = H2O_MRCI.find(row_end).unwrap() + row_end.len();
    let mut buf = Vec::new();
    let err = write_report(
        H2O_MRCI[..cut].as_bytes(),
        "h2o_mrci.out",
        &mut buf,
        ReportConfig::default(),
    )
    .unwrap_err();

    assert!(matches!(
        err,
        ParseError::UnexpectedEndOfInput {
            section: Section::AbsorptionSpectrum
        }
    ));

    let text = String::from_utf8(buf).unwrap();
    assert!(text.contains("state from state to       cm-1      eV\n"));
    assert!(text.ends_with("         0        1    72910.9   9.040\n"));
}

#[test]
fn test_truncated_g_tensor() {
    let cut = H2O_MRCI.find(" g-factors:").unwrap();
    let err = OrcaOutput::new(&H2O_MRCI[..cut]).unwrap_err();

    assert!(matches!(
        err,
        ParseError::UnexpectedEndOfInput {
            section: Section::GTensor
        }
    ));
    assert!(err.to_string().contains("g-tensor"));
}

#[test]
fn test_bad_energy_names_the_line() {
    let text = H2O_MRCI.replace("-75.6402006847", "-75.64O2006847");
    match OrcaOutput::new(&text) {
        Err(ParseError::MalformedNumericField {
            section,
            line_num,
            value,
            ..
        }) => {
            assert_eq!(section, Section::CasScf);
            assert_eq!(line_num, 28);
            assert_eq!(value, "-75.64O2006847");
        }
        r => panic!("Unexpected result: {r:?}"),
    }
}

#[test]
fn test_load_from_file() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data/h2o_mrci.out");
    let out = OrcaOutput::load(&path).unwrap();
    assert_eq!(out, OrcaOutput::new(H2O_MRCI).unwrap());

    assert!(matches!(
        OrcaOutput::load(Path::new("does_not_exist.out")),
        Err(ParseError::Io(_))
    ));
}

#[cfg(feature = "encode")]
#[test]
fn test_save_encoded() {
    let out = OrcaOutput::new(H2O_MRCI).unwrap();
    let path = std::env::temp_dir().join("orca_mrci_test_h2o.bin");

    out.save_encoded(&path).unwrap();
    let loaded = OrcaOutput::load_encoded(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(loaded, out);
}
