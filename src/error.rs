//! Error types for the injector CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Which input a missing file was supposed to provide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileRole {
    Template,
    Vars,
}

impl fmt::Display for FileRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileRole::Template => f.write_str("Template"),
            FileRole::Vars => f.write_str("Vars"),
        }
    }
}

/// Main error type for injector operations.
///
/// Every variant is terminal for the invocation; see [`InjectorError::exit_code`].
#[derive(Error, Debug)]
pub enum InjectorError {
    /// The template or vars file does not exist.
    #[error("{role} file not found: {}", path.display())]
    FileNotFound { role: FileRole, path: PathBuf },

    /// The vars file parsed, but its top level is not a mapping.
    #[error(
        "unsupported vars format in '{}': top level must be a mapping, found {found}",
        path.display()
    )]
    UnsupportedVarsFormat { path: PathBuf, found: String },

    /// The vars file is not valid JSON/YAML.
    #[error("failed to parse vars file '{}': {message}", path.display())]
    VarsParse { path: PathBuf, message: String },

    /// A YAML vars file was requested but YAML support was compiled out.
    #[error(
        "cannot read '{}': YAML support is not available; rebuild injector with the `yaml` feature enabled",
        path.display()
    )]
    YamlSupportUnavailable { path: PathBuf },

    /// The template path has no usable file name.
    #[error("invalid template path '{}': file name must be valid UTF-8", path.display())]
    InvalidTemplatePath { path: PathBuf },

    /// The template source failed to compile.
    #[error("invalid template: {0}")]
    TemplateSyntax(String),

    /// The template compiled but failed during evaluation.
    #[error("failed to render template: {0}")]
    Render(String),

    /// Reading an input or writing the output failed.
    #[error("failed to {action} '{}': {source}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl InjectorError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            InjectorError::FileNotFound { .. }
            | InjectorError::UnsupportedVarsFormat { .. }
            | InjectorError::VarsParse { .. }
            | InjectorError::YamlSupportUnavailable { .. }
            | InjectorError::InvalidTemplatePath { .. }
            | InjectorError::TemplateSyntax(_)
            | InjectorError::Render(_)
            | InjectorError::Io { .. } => exit_codes::FAILURE,
        }
    }

    pub(crate) fn io(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        InjectorError::Io {
            action,
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for injector operations.
pub type Result<T> = std::result::Result<T, InjectorError>;
