//! Extract final geometries from Q-Chem output files, by running them through
//! [Open Babel](https://openbabel.org/docs/Command-line_tools/babel.html). Requires `obabel` to be
//! available on the system PATH.

use std::{
    io::{self, ErrorKind},
    path::{Path, PathBuf},
    process::Command,
};

use log::{info, warn};

pub const QCOUT_EXT: &str = "qcout";
pub const XYZ_EXT: &str = "xyz";

/// Paths with their `.qcout` extension removed. Other files are skipped.
pub fn qcout_stubs<P: AsRef<Path>>(paths: &[P]) -> Vec<PathBuf> {
    let mut result = Vec::new();
    for path in paths {
        let path: &Path = path.as_ref();
        if path.extension().is_some_and(|ext| ext == QCOUT_EXT) {
            result.push(path.with_extension(""));
        }
    }
    result
}

/// The `obabel` arguments converting `{stub}.qcout` to `{stub}.xyz`.
pub fn obabel_args(stub: &Path) -> Vec<String> {
    let stub = stub.display();
    vec![
        format!("-i{QCOUT_EXT}"),
        format!("{stub}.{QCOUT_EXT}"),
        format!("-o{XYZ_EXT}"),
        "-O".to_owned(),
        format!("{stub}.{XYZ_EXT}"),
    ]
}

/// Convert `{stub}.qcout` to `{stub}.xyz`, returning the path written.
pub fn convert_to_xyz(stub: &Path) -> io::Result<PathBuf> {
    let out = match Command::new("obabel").args(obabel_args(stub)).output() {
        Ok(out) => out,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(io::Error::new(
                ErrorKind::NotFound,
                "`obabel` executable not found in the system PATH",
            ));
        }
        Err(e) => return Err(e),
    };

    if !out.status.success() {
        let stderr_str = String::from_utf8_lossy(&out.stderr);
        return Err(io::Error::other(format!(
            "Problem converting {}.{QCOUT_EXT}: {}",
            stub.display(),
            stderr_str.trim()
        )));
    }

    let path = PathBuf::from(format!("{}.{XYZ_EXT}", stub.display()));
    info!("Wrote {}", path.display());
    Ok(path)
}

/// Convert every `.qcout` file in `paths`. A failed conversion doesn't stop the others; returns
/// the number of failures. A missing `obabel` is returned as an error right away.
pub fn convert_all<P: AsRef<Path>>(paths: &[P]) -> io::Result<usize> {
    let stubs = qcout_stubs(paths);
    if stubs.is_empty() {
        warn!("No .{QCOUT_EXT} files given");
    }

    let mut failures = 0;
    for stub in &stubs {
        match convert_to_xyz(stub) {
            Ok(_) => (),
            Err(e) if e.kind() == ErrorKind::NotFound => return Err(e),
            Err(e) => {
                warn!("{e}");
                failures += 1;
            }
        }
    }

    Ok(failures)
}
