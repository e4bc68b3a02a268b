//! Injector: render a Jinja-style template with parameters from a vars file.
//!
//! This is the main entry point for the `injector` CLI. It parses arguments,
//! configures logging, runs the render, and maps errors to exit codes.

mod cli;
mod commands;
pub mod error;
pub mod exit_codes;
pub mod fs;
mod logging;
pub mod render;
pub mod vars;

#[cfg(test)]
mod test_support;

use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    logging::init(cli.quiet);

    match commands::dispatch(&cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Single line on stderr; --quiet never hides errors.
            tracing::error!("{}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
