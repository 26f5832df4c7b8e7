//! CLI module for the vbfront front end
//!
//! This module provides the command-line interface.
//!
//! ## Usage
//!
//! - `vbfront <file>` - Lex and parse, print a summary of the external declarations
//! - `vbfront --lex <file>` - Print the token sequence
//! - `vbfront --parse <file>` - Print the translation unit AST
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::Parser;

use crate::config::FrontendConfig;

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

/// Tokenizer and declaration parser for a classic BASIC dialect
#[derive(Parser, Debug)]
#[command(name = "vbfront")]
#[command(version = VERSION)]
#[command(about = "Tokenizer and declaration parser for a classic BASIC dialect", long_about = None)]
pub struct Cli {
    /// File to lex and parse (default action)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    // Debug/development flags
    /// Tokenize only (debug)
    #[arg(long = "lex", value_name = "FILE", conflicts_with_all = ["file", "parse_file"])]
    pub lex_file: Option<PathBuf>,

    /// Parse only and print the AST (debug)
    #[arg(long = "parse", value_name = "FILE", conflicts_with = "file")]
    pub parse_file: Option<PathBuf>,

    /// Treat NAME as already declared when looking for a declaration's name (repeatable)
    #[arg(long = "declare", value_name = "NAME")]
    pub declare: Vec<String>,

    /// Leave forward declarations out of the summary
    #[arg(long = "hide-forward")]
    pub hide_forward: bool,

    /// Reject source files larger than this many bytes
    #[arg(long = "max-source-size", value_name = "BYTES")]
    pub max_source_size: Option<u64>,
}

impl Cli {
    /// Driver configuration from the command-line flags.
    pub fn config(&self) -> FrontendConfig {
        let mut config = FrontendConfig::new()
            .with_declared_names(self.declare.iter().cloned())
            .with_report_forward_declarations(!self.hide_forward);
        if let Some(bytes) = self.max_source_size {
            config = config.with_max_source_size(bytes);
        }
        config
    }
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
pub fn execute(cli: Cli) -> CliResult<ExitCode> {
    let config = cli.config();

    // Handle debug flags first
    if let Some(file) = cli.lex_file {
        return commands::lex_file(&file.to_string_lossy(), &config);
    }
    if let Some(file) = cli.parse_file {
        return commands::parse_file(&file.to_string_lossy(), &config);
    }

    match cli.file {
        Some(file) => commands::check_file(&file.to_string_lossy(), &config),
        None => Err(CliError::failure("Error: no input file (see --help)")),
    }
}

// ============================================================================
// Tests
// ============================================================================
