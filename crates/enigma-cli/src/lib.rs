//! Enigma line cipher tool.
//!
//! Reads a text file line by line, encrypts every non-blank line with a
//! [`CipherEngine`] built from a JSON configuration, and writes one output
//! line per encrypted line.
//!
//! ## Architecture
//!
//! ```text
//! enigma
//!   ├─ EngineConfig::load   (JSON configuration)
//!   ├─ read_lines           (input file, blank lines dropped)
//!   ├─ encrypt_lines        (CipherEngine, LinePolicy)
//!   └─ write_lines          (file or stdout)
//! ```
//!
//! All output is computed before anything is written, so a failed run never
//! leaves a partial output file behind.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod error;

use std::{
    fs::File,
    io::{self, BufWriter, Read, Write},
    path::{Path, PathBuf},
};

pub use enigma_core::{CipherEngine, EngineConfig};
pub use error::CliError;

/// What to do with a line that fails to encrypt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum LinePolicy {
    /// Stop the run at the first failing line.
    #[default]
    Abort,

    /// Log the failing line and leave it out of the output.
    Skip,
}

/// Where encrypted lines go.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Output {
    /// Standard output.
    #[default]
    Stdout,

    /// File, created or truncated.
    File(PathBuf),
}

/// A non-blank input line and its position in the input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputLine {
    /// 1-based line number.
    pub number: usize,
    /// Line text without its terminator.
    pub text: String,
}

/// Settings for one run of the tool.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Path to the JSON engine configuration
    pub config_path: PathBuf,
    /// Path to the plaintext input
    pub input_path: PathBuf,
    /// Output destination
    pub output: Output,
    /// Failing-line policy
    pub policy: LinePolicy,
}

/// Counts reported after a successful run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    /// Non-blank lines read from the input.
    pub lines_read: usize,
    /// Lines written to the output.
    pub lines_written: usize,
    /// Lines dropped under [`LinePolicy::Skip`].
    pub lines_skipped: usize,
}

/// Load the configuration, encrypt the input, and write the output.
///
/// # Errors
///
/// Returns `CliError` if the configuration or input cannot be loaded, if a
/// line fails under [`LinePolicy::Abort`], or if the output cannot be written.
pub fn run(config: &RunConfig) -> Result<RunSummary, CliError> {
    let engine_config = EngineConfig::load(&config.config_path)?;
    let mut engine = CipherEngine::from_config(engine_config);

    let lines = read_lines(&config.input_path)?;
    let lines_read = lines.len();
    tracing::info!("Read {} lines from {}", lines_read, config.input_path.display());

    let encrypted = encrypt_lines(&mut engine, lines, config.policy)?;
    write_lines(&config.output, &encrypted)?;

    let summary = RunSummary {
        lines_read,
        lines_written: encrypted.len(),
        lines_skipped: lines_read - encrypted.len(),
    };
    tracing::info!(
        "Wrote {} lines ({} skipped)",
        summary.lines_written,
        summary.lines_skipped
    );

    Ok(summary)
}

/// Read the non-blank lines of a UTF-8 text file.
///
/// `\n`, `\r\n` and a lone `\r` all end a line and are stripped. Lines
/// holding only whitespace are not blank and are kept.
pub fn read_lines(path: &Path) -> Result<Vec<InputLine>, CliError> {
    let read_error = |source| CliError::ReadInput { path: path.to_path_buf(), source };

    let file = File::open(path).map_err(read_error)?;
    parse_lines(file).map_err(read_error)
}

fn parse_lines(mut reader: impl Read) -> io::Result<Vec<InputLine>> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;

    let lines = split_lines(&text)
        .enumerate()
        .filter(|(_, line)| !line.is_empty())
        .map(|(index, line)| InputLine { number: index + 1, text: line.to_string() })
        .collect();
    Ok(lines)
}

/// Lines of `text` without terminators. `\r\n` is a single terminator.
fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let Some(end) = rest.find(['\r', '\n']) else {
            return Some(std::mem::take(&mut rest));
        };
        let line = &rest[..end];
        let terminator = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
        rest = &rest[end + terminator..];
        Some(line)
    })
}

/// Encrypt every line in order.
///
/// # Errors
///
/// Under [`LinePolicy::Abort`], returns `CliError::Lookup` for the first line
/// that fails. Under [`LinePolicy::Skip`], failing lines are dropped and this
/// never fails.
pub fn encrypt_lines(
    engine: &mut CipherEngine,
    lines: impl IntoIterator<Item = InputLine>,
    policy: LinePolicy,
) -> Result<Vec<String>, CliError> {
    let mut encrypted = Vec::new();

    for line in lines {
        match engine.encrypt(&line.text) {
            Ok(ciphertext) => encrypted.push(ciphertext),
            Err(source) => match policy {
                LinePolicy::Abort => {
                    return Err(CliError::Lookup { line_number: line.number, source });
                },
                LinePolicy::Skip => {
                    tracing::warn!("Skipping line {}: {}", line.number, source);
                },
            },
        }
    }

    Ok(encrypted)
}

/// Write each line followed by `\n`.
pub fn write_lines(output: &Output, lines: &[String]) -> Result<(), CliError> {
    let result = match output {
        Output::Stdout => write_to(io::stdout().lock(), lines),
        Output::File(path) => {
            File::create(path).and_then(|file| write_to(BufWriter::new(file), lines))
        },
    };
    result.map_err(CliError::WriteOutput)
}

fn write_to(mut writer: impl Write, lines: &[String]) -> io::Result<()> {
    for line in lines {
        writeln!(writer, "{line}")?;
    }
    writer.flush()
}
