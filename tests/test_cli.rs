use std::{
    path::{Path, PathBuf},
    process::Command,
};

const MRCI_ANALYSIS: &str = env!("CARGO_BIN_EXE_mrci_analysis");
const QCOUT2XYZ: &str = env!("CARGO_BIN_EXE_qcout2xyz");

fn fixture() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data/h2o_mrci.out")
}

fn exit_code(cmd: &mut Command) -> Option<i32> {
    cmd.output().unwrap().status.code()
}

#[test]
fn test_report_succeeds() {
    let out = Command::new(MRCI_ANALYSIS).arg(fixture()).output().unwrap();

    assert_eq!(out.status.code(), Some(0));
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.starts_with("Using a cutoff weight of 0.5\n"));
    assert!(stdout.contains(" g_para: 2.1085212\n"));
}

#[test]
fn test_bad_cutoff_weight() {
    let code = exit_code(
        Command::new(MRCI_ANALYSIS)
            .arg(fixture())
            .args(["--cutoff-weight", "heavy"]),
    );
    assert_eq!(code, Some(1));
}

#[test]
fn test_missing_file() {
    let code = exit_code(Command::new(MRCI_ANALYSIS).arg("does_not_exist.out"));
    assert_eq!(code, Some(1));
}

#[test]
fn test_malformed_ci_block() {
    let text = std::fs::read_to_string(fixture())
        .unwrap()
        .replace("-75.812653107", "-75.8l2653107");
    let path = std::env::temp_dir().join("orca_mrci_cli_bad_ci.out");
    std::fs::write(&path, text).unwrap();

    let out = Command::new(MRCI_ANALYSIS).arg(&path).output().unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(out.status.code(), Some(2));
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("-75.8l2653107"));
}

#[test]
fn test_qcout2xyz_skips_other_files() {
    let code = exit_code(Command::new(QCOUT2XYZ).args(["run1.log", "run2.log"]));
    assert_eq!(code, Some(0));
}
