//! Take a batch of Q-Chem output files, and write their final geometries to XYZ files using
//! Open Babel. Files without a `.qcout` extension are skipped.

use std::{path::PathBuf, process::ExitCode};

use clap::{Parser, error::ErrorKind};
use env_logger::Env;
use orca_mrci::qcout;

const EXIT_USAGE: u8 = 1;
const EXIT_CONVERSION: u8 = 2;

#[derive(Parser, Debug)]
#[command(version, about = "Convert Q-Chem output geometries to XYZ files with Open Babel")]
struct Args {
    /// Q-Chem output files
    #[arg(required = true)]
    filenames: Vec<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = match Args::try_parse() {
        Ok(a) => a,
        Err(e) => {
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::from(EXIT_USAGE),
            };
        }
    };

    match qcout::convert_all(&args.filenames) {
        Ok(0) => ExitCode::SUCCESS,
        Ok(failures) => {
            eprintln!("{failures} conversion(s) failed");
            ExitCode::from(EXIT_CONVERSION)
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(EXIT_CONVERSION)
        }
    }
}
