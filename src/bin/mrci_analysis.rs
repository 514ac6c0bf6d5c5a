//! Summarize the CASSCF/MRCI states, absorption spectrum and g-tensor of an ORCA output file.
//!
//! Exit codes: 0 on success, 1 for bad arguments or an unreadable file, 2 if the file can't be
//! parsed.

use std::{
    fs::File,
    io::{self, BufReader},
    path::PathBuf,
    process::ExitCode,
};

use clap::{Parser, error::ErrorKind};
use env_logger::Env;
use orca_mrci::{DEFAULT_CUTOFF_WEIGHT, ReportConfig, write_report};

const EXIT_USAGE: u8 = 1;
const EXIT_PARSE: u8 = 2;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// ORCA output file
    outputfilename: PathBuf,

    /// Cutoff weight for printing a configuration
    #[arg(long, value_name = "CWEIGHT", default_value_t = DEFAULT_CUTOFF_WEIGHT)]
    cutoff_weight: f64,

    /// Print the argument block
    #[arg(long)]
    print_args: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

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

    if args.print_args {
        println!("{args:#?}");
    }

    let file = match File::open(&args.outputfilename) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Unable to open {}: {e}", args.outputfilename.display());
            return ExitCode::from(EXIT_USAGE);
        }
    };

    let cfg = ReportConfig {
        cutoff_weight: args.cutoff_weight,
    };

    let name = args.outputfilename.display().to_string();
    match write_report(BufReader::new(file), &name, io::stdout().lock(), cfg) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error reading {name}: {e}");
            ExitCode::from(EXIT_PARSE)
        }
    }
}
