//! CLI argument parsing for injector.
//!
//! Uses clap derive macros for declarative argument definitions.
//! The actual work happens in the `commands` module.

use clap::Parser;
use std::path::PathBuf;

/// Render a Jinja-style template with parameters from a vars file.
///
/// The vars file may be plain `key=value` lines, a JSON object (`.json`),
/// or a YAML mapping (`.yaml`/`.yml`).
#[derive(Parser, Debug)]
#[command(name = "injector")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Template file to render.
    pub template: PathBuf,

    /// Output file to write (created or overwritten).
    pub output: PathBuf,

    /// Vars file: key=value lines, JSON (.json), or YAML (.yaml/.yml).
    #[arg(short = 'v', long = "vars", default_value = "vars")]
    pub vars: PathBuf,

    /// Less verbose: only warnings and errors are logged.
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Parse command-line arguments.
    ///
    /// On `--help`/`--version` this prints and exits 0; on invalid
    /// arguments it prints usage and exits 2.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
