//! MiniJinja environment setup.
//!
//! The environment mirrors a conventional Jinja setup for config and text
//! generation: block tags swallow their own line, values are HTML-escaped
//! only in `.html`/`.xml` templates, and undefined variables are errors.

use crate::error::{InjectorError, Result};
use minijinja::{AutoEscape, Environment, ErrorKind, UndefinedBehavior};
use serde::Serialize;
use std::path::PathBuf;

/// A configured template environment rooted at one directory.
pub struct TemplateEngine<'source> {
    env: Environment<'source>,
}

impl<'source> TemplateEngine<'source> {
    /// Create an engine that resolves `{% include %}` and `{% extends %}`
    /// relative to `search_root`.
    pub fn new(search_root: PathBuf) -> Self {
        let mut env = Environment::new();
        env.set_loader(minijinja::path_loader(search_root));
        env.set_auto_escape_callback(auto_escape_for);
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.set_undefined_behavior(UndefinedBehavior::Strict);

        Self { env }
    }

    /// Compile `source` under `name`.
    pub fn compile(&mut self, name: &'source str, source: &'source str) -> Result<()> {
        self.env
            .add_template(name, source)
            .map_err(|e| InjectorError::TemplateSyntax(e.to_string()))
    }

    /// Evaluate a compiled template with `context` as the top-level namespace.
    pub fn render<S: Serialize>(&self, name: &str, context: S) -> Result<String> {
        let template = self.env.get_template(name).map_err(classify)?;
        template.render(context).map_err(classify)
    }
}

/// HTML escaping for `.html` and `.xml` templates, none for anything else.
fn auto_escape_for(name: &str) -> AutoEscape {
    let name = name.to_ascii_lowercase();
    if name.ends_with(".html") || name.ends_with(".xml") {
        AutoEscape::Html
    } else {
        AutoEscape::None
    }
}

// Included templates are compiled lazily, so syntax errors can surface
// during evaluation too.
fn classify(err: minijinja::Error) -> InjectorError {
    match err.kind() {
        ErrorKind::SyntaxError => InjectorError::TemplateSyntax(err.to_string()),
        _ => InjectorError::Render(err.to_string()),
    }
}
