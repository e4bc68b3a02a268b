//! Template rendering.
//!
//! [`render`] ties the pieces together: compile the template, read the vars
//! file, evaluate, and write the output atomically.

mod engine;


pub use engine::TemplateEngine;

use crate::error::{FileRole, InjectorError, Result};
use crate::fs::{atomic_write_file, read_text};
use crate::vars::read_vars;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Render `template_path` with parameters from `vars_path` into `output_path`.
///
/// The template is compiled before the vars file is read, so a syntax error
/// is reported even when the vars file is also broken. Nothing is written
/// unless rendering succeeds; an existing output file is replaced.
pub fn render(template_path: &Path, vars_path: &Path, output_path: &Path) -> Result<()> {
    if !template_path.exists() {
        return Err(InjectorError::FileNotFound {
            role: FileRole::Template,
            path: template_path.to_path_buf(),
        });
    }

    let name = template_name(template_path)?;
    let source = read_text(template_path, "read template")?;

    let mut engine = TemplateEngine::new(search_root(template_path));
    engine.compile(name, &source)?;
    debug!(template = name, "compiled template");

    let params = read_vars(vars_path)?;
    debug!(count = params.len(), "loaded parameters");

    let rendered = engine.render(name, &params)?;
    atomic_write_file(output_path, &rendered)?;

    info!("Rendered template saved to {}", output_path.display());
    Ok(())
}

/// The template's file name, which is also its name inside the engine.
fn template_name(template_path: &Path) -> Result<&str> {
    template_path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| InjectorError::InvalidTemplatePath {
            path: template_path.to_path_buf(),
        })
}

/// Directory containing the template; `.` for a bare file name.
fn search_root(template_path: &Path) -> PathBuf {
    match template_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
