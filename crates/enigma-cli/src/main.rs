//! Enigma command-line binary.
//!
//! # Usage
//!
//! ```bash
//! # Encrypt to stdout
//! enigma -c config.json -i plaintext.txt
//!
//! # Encrypt to a file, dropping lines the configuration cannot encode
//! enigma -c config.json -i plaintext.txt -o ciphertext.txt --on-error skip
//! ```
//!
//! Exits with status 1 on usage errors and on any runtime error.

use std::{
    io::{self, Write},
    path::PathBuf,
    process::ExitCode,
};

use clap::{Parser, error::ErrorKind};
use enigma_cli::{LinePolicy, Output, RunConfig};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const USAGE: &str = "Usage: enigma -c <config_file> -i <input_file> -o <output_file>";

const RUNTIME_ERROR: &str = "The enigma script has encountered an error";

/// Enigma line cipher
#[derive(Parser, Debug)]
#[command(name = "enigma")]
#[command(about = "Encrypt a text file line by line with an Enigma-like cipher")]
#[command(version)]
struct Args {
    /// Path to the JSON configuration (hash_map, wheels, reflector_map)
    #[arg(short, long = "config", value_name = "CONFIG_FILE")]
    config: PathBuf,

    /// Path to the plaintext input
    #[arg(short, long = "input", value_name = "INPUT_FILE")]
    input: PathBuf,

    /// Path to write ciphertext to (stdout if omitted)
    #[arg(short, long = "output", value_name = "OUTPUT_FILE")]
    output: Option<PathBuf>,

    /// What to do with a line that cannot be encrypted
    #[arg(long, value_enum, default_value_t = LinePolicy::Abort)]
    on_error: LinePolicy,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        },
        Err(e) => {
            let _ = e.print();
            let _ = writeln!(io::stderr(), "{USAGE}");
            return ExitCode::FAILURE;
        },
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    tracing_subscriber::registry().with(fmt::layer().with_writer(io::stderr)).with(filter).init();

    let config = RunConfig {
        config_path: args.config,
        input_path: args.input,
        output: args.output.map_or(Output::Stdout, Output::File),
        policy: args.on_error,
    };

    match enigma_cli::run(&config) {
        Ok(summary) => {
            tracing::debug!("Run finished: {:?}", summary);
            ExitCode::SUCCESS
        },
        Err(e) => {
            tracing::error!("{}", e);
            let _ = writeln!(io::stderr(), "{RUNTIME_ERROR}");
            ExitCode::FAILURE
        },
    }
}
