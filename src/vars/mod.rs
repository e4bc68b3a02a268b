//! Parameter reading for templates.
//!
//! A vars file is turned into a [`ParameterSet`] according to its extension:
//!
//! - `.json` - a JSON object
//! - `.yaml` / `.yml` - a YAML mapping (empty document means no parameters)
//! - anything else, including no extension - `key=value` lines
//!
//! The whole set is built before any template is evaluated.

mod key_value;
mod structured;


pub use key_value::parse_key_value;

use crate::error::{FileRole, InjectorError, Result};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, warn};

/// Named values made available to a template at render time.
pub type ParameterSet = BTreeMap<String, serde_json::Value>;

/// Vars file format, selected by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VarsFormat {
    Json,
    Yaml,
    KeyValue,
}

impl VarsFormat {
    /// Pick the format for `path` from its extension (case-insensitive).
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match ext.as_deref() {
            Some("json") => VarsFormat::Json,
            Some("yaml" | "yml") => VarsFormat::Yaml,
            _ => VarsFormat::KeyValue,
        }
    }
}

/// Read a vars file into a [`ParameterSet`].
///
/// Lines without `=` in a key=value file are skipped with a warning; every
/// other problem is an error.
pub fn read_vars(path: &Path) -> Result<ParameterSet> {
    if !path.exists() {
        return Err(InjectorError::FileNotFound {
            role: FileRole::Vars,
            path: path.to_path_buf(),
        });
    }

    let format = VarsFormat::from_path(path);
    debug!(path = %path.display(), ?format, "reading vars file");

    // Checked before reading so a missing YAML parser is reported even for
    // files that would not parse.
    if format == VarsFormat::Yaml && !structured::YAML_SUPPORTED {
        return Err(InjectorError::YamlSupportUnavailable {
            path: path.to_path_buf(),
        });
    }

    let content = crate::fs::read_text(path, "read vars file")?;

    match format {
        VarsFormat::Json => structured::parse_json(path, &content),
        VarsFormat::Yaml => structured::parse_yaml(path, &content),
        VarsFormat::KeyValue => {
            let parsed = parse_key_value(&content);
            for skipped in &parsed.skipped {
                warn!(
                    "Skipping invalid line {} in vars file {}: {:?}",
                    skipped.line_number,
                    path.display(),
                    skipped.text
                );
            }
            Ok(parsed.into_parameters())
        }
    }
}
