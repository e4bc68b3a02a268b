//! Filesystem helpers for injector.
//!
//! Inputs are read whole as UTF-8 text; the output is written atomically.

pub mod atomic;

pub use atomic::atomic_write_file;

use crate::error::{InjectorError, Result};
use std::path::Path;

/// Read a whole file as UTF-8 text.
///
/// `action` describes the read in error messages, e.g. `"read vars file"`.
pub fn read_text(path: &Path, action: &'static str) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| InjectorError::io(action, path, e))
}
