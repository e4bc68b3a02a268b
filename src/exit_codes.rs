//! Exit code constants for the injector CLI.
//!
//! - 0: Success (including `--version` and `--help`)
//! - 2: Any failure: missing input, vars format error, template syntax
//!   error, render error, or output write error

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// Failure: validation, vars parsing, template compilation, rendering, or I/O.
///
/// Matches the status clap uses for argument errors, so every failure mode
/// of the tool reports the same code.
pub const FAILURE: i32 = 2;
