//! CLI module for the testsmith generator
//!
//! ## Commands
//!
//! - `generate` - Run the full pipeline over an input directory
//! - `inspect <file>` - Dump the class models extracted from one file (debug)
//! - `emit <file>` - Print the generated test classes for one file (debug)
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros. Command
//! functions return `CliResult<T>` instead of calling `process::exit`; only
//! the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// NUnit/Moq test skeleton generator for C# sources
#[derive(Parser, Debug)]
#[command(name = "testsmith")]
#[command(version = VERSION)]
#[command(about = "NUnit/Moq test skeleton generator for C# sources", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate test skeletons for every class in a directory of sources
    Generate {
        /// Directory of input source files (immediate files only)
        #[arg(long, value_name = "DIR")]
        input: PathBuf,
        /// Directory for generated test files (created if absent)
        #[arg(long, value_name = "DIR")]
        output: PathBuf,
        /// Worker count of the file-loading stage
        #[arg(long = "input-parallelism", value_name = "N")]
        input_parallelism: usize,
        /// Worker count of the synthesis stage
        #[arg(long = "processing-parallelism", value_name = "N")]
        processing_parallelism: usize,
        /// Worker count of the file-writing stage
        #[arg(long = "output-parallelism", value_name = "N")]
        output_parallelism: usize,
    },

    /// Dump the class models extracted from one source file (debug)
    Inspect {
        /// Source file to analyze
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Print the generated test classes for one source file (debug)
    Emit {
        /// Source file to generate from
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    match cli.command {
        Command::Generate {
            input,
            output,
            input_parallelism,
            processing_parallelism,
            output_parallelism,
        } => commands::generate(
            &input,
            &output,
            input_parallelism,
            processing_parallelism,
            output_parallelism,
        ),
        Command::Inspect { file } => commands::inspect_file(&file),
        Command::Emit { file } => commands::emit_file(&file),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_generate() {
        let cli = Cli::try_parse_from([
            "testsmith",
            "generate",
            "--input",
            "in",
            "--output",
            "out",
            "--input-parallelism",
            "2",
            "--processing-parallelism",
            "4",
            "--output-parallelism",
            "2",
        ])
        .unwrap();
        if let Command::Generate {
            input_parallelism,
            processing_parallelism,
            output_parallelism,
            ..
        } = cli.command
        {
            assert_eq!(input_parallelism, 2);
            assert_eq!(processing_parallelism, 4);
            assert_eq!(output_parallelism, 2);
        } else {
            panic!("Expected Generate command");
        }
    }

    #[test]
    fn test_cli_generate_requires_parallelism() {
        let result = Cli::try_parse_from([
            "testsmith",
            "generate",
            "--input",
            "in",
            "--output",
            "out",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_parse_inspect() {
        let cli = Cli::try_parse_from(["testsmith", "inspect", "Foo.cs"]).unwrap();
        assert!(matches!(cli.command, Command::Inspect { .. }));
    }

    #[test]
    fn test_cli_parse_emit() {
        let cli = Cli::try_parse_from(["testsmith", "emit", "Foo.cs"]).unwrap();
        assert!(matches!(cli.command, Command::Emit { .. }));
    }

    #[test]
    fn test_cli_requires_a_subcommand() {
        assert!(Cli::try_parse_from(["testsmith"]).is_err());
    }
}
