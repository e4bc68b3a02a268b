//! JSON and YAML vars files.
//!
//! Both must decode to a mapping at the top level. YAML goes through
//! `serde_yaml`, which only ever produces plain data, so a vars file cannot
//! construct arbitrary objects.

use super::ParameterSet;
use crate::error::{InjectorError, Result};
use serde_json::Value;
use std::path::Path;

/// Whether this build can read `.yaml`/`.yml` vars files.
pub(super) const YAML_SUPPORTED: bool = cfg!(feature = "yaml");

pub(super) fn parse_json(path: &Path, content: &str) -> Result<ParameterSet> {
    let value: Value = serde_json::from_str(content).map_err(|e| InjectorError::VarsParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    into_parameters(path, value)
}

#[cfg(feature = "yaml")]
pub(super) fn parse_yaml(path: &Path, content: &str) -> Result<ParameterSet> {
    let parse_error = |message: String| InjectorError::VarsParse {
        path: path.to_path_buf(),
        message,
    };

    let document: serde_yaml::Value =
        serde_yaml::from_str(content).map_err(|e| parse_error(e.to_string()))?;

    match document {
        serde_yaml::Value::Null => Ok(ParameterSet::new()),
        serde_yaml::Value::Mapping(_) => {
            reject_tags(&document).map_err(parse_error)?;
            // Non-string keys that serde_json cannot turn into object keys
            // (null, sequences, mappings) fail here.
            let value = serde_json::to_value(&document).map_err(|e| parse_error(e.to_string()))?;
            into_parameters(path, value)
        }
        other => Err(InjectorError::UnsupportedVarsFormat {
            path: path.to_path_buf(),
            found: yaml_kind(&other).to_string(),
        }),
    }
}

/// Tags such as `!custom` have no plain-data meaning; refuse them anywhere in
/// the document, keys included.
#[cfg(feature = "yaml")]
fn reject_tags(value: &serde_yaml::Value) -> std::result::Result<(), String> {
    match value {
        serde_yaml::Value::Tagged(tagged) => Err(format!("unsupported YAML tag {}", tagged.tag)),
        serde_yaml::Value::Sequence(items) => items.iter().try_for_each(reject_tags),
        serde_yaml::Value::Mapping(map) => map.iter().try_for_each(|(key, value)| {
            reject_tags(key)?;
            reject_tags(value)
        }),
        _ => Ok(()),
    }
}

#[cfg(not(feature = "yaml"))]
pub(super) fn parse_yaml(path: &Path, _content: &str) -> Result<ParameterSet> {
    Err(InjectorError::YamlSupportUnavailable {
        path: path.to_path_buf(),
    })
}

fn into_parameters(path: &Path, value: Value) -> Result<ParameterSet> {
    match value {
        Value::Object(map) => Ok(map.into_iter().collect()),
        other => Err(InjectorError::UnsupportedVarsFormat {
            path: path.to_path_buf(),
            found: json_kind(&other).to_string(),
        }),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(feature = "yaml")]
fn yaml_kind(value: &serde_yaml::Value) -> &'static str {
    match value {
        serde_yaml::Value::Null => "null",
        serde_yaml::Value::Bool(_) => "boolean",
        serde_yaml::Value::Number(_) => "number",
        serde_yaml::Value::String(_) => "string",
        serde_yaml::Value::Sequence(_) => "sequence",
        serde_yaml::Value::Mapping(_) => "mapping",
        serde_yaml::Value::Tagged(_) => "tagged value",
    }
}
