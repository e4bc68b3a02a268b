//! Command implementation for injector.
//!
//! Validates the inputs named on the command line, then hands off to the
//! renderer.

use crate::cli::Cli;
use crate::error::{FileRole, InjectorError, Result};
use crate::render;
use std::path::Path;
use tracing::debug;

/// Run the CLI invocation described by `cli`.
pub fn dispatch(cli: &Cli) -> Result<()> {
    debug!(?cli, "parsed arguments");

    require_file(&cli.template, FileRole::Template)?;
    require_file(&cli.vars, FileRole::Vars)?;

    render::render(&cli.template, &cli.vars, &cli.output)
}

/// Fail unless `path` is an existing regular file (symlinks are followed).
fn require_file(path: &Path, role: FileRole) -> Result<()> {
    if path.is_file() {
        Ok(())
    } else {
        Err(InjectorError::FileNotFound {
            role,
            path: path.to_path_buf(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exit_codes;
    use crate::test_support::{DirGuard, Workspace};
    use clap::Parser;
    use serial_test::serial;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("injector").chain(args.iter().copied())).unwrap()
    }

    fn path_arg(path: &Path) -> String {
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn test_renders_with_explicit_vars() {
        let ws = Workspace::new();
        let template = ws.file("hello.j2", "Hello {{ name }}!");
        let vars = ws.file("people.env", "name=World\n");
        let output = ws.path().join("hello.txt");

        dispatch(&cli(&[
            &path_arg(&template),
            &path_arg(&output),
            "--vars",
            &path_arg(&vars),
        ]))
        .unwrap();

        assert_eq!(ws.read("hello.txt"), "Hello World!");
    }

    #[test]
    #[serial]
    fn test_default_vars_file_in_working_directory() {
        let ws = Workspace::new();
        ws.file("greeting.j2", "Hello {{ name }}!");
        ws.file("vars", "# defaults\nname=World\n");
        let _guard = DirGuard::new(ws.path());

        dispatch(&cli(&["greeting.j2", "greeting.txt"])).unwrap();

        assert_eq!(ws.read("greeting.txt"), "Hello World!");
    }

    #[test]
    #[serial]
    fn test_missing_default_vars_file() {
        let ws = Workspace::new();
        ws.file("greeting.j2", "Hello!");
        let _guard = DirGuard::new(ws.path());

        let err = dispatch(&cli(&["greeting.j2", "greeting.txt"])).unwrap_err();

        assert_eq!(err.to_string(), "Vars file not found: vars");
        assert_eq!(err.exit_code(), exit_codes::FAILURE);
        assert!(!ws.exists("greeting.txt"));
    }

    #[test]
    fn test_missing_template_exits_with_failure() {
        let ws = Workspace::new();
        let vars = ws.file("vars", "name=World\n");
        let template = ws.path().join("absent.j2");
        let output = ws.path().join("out.txt");

        let err = dispatch(&cli(&[
            &path_arg(&template),
            &path_arg(&output),
            "-v",
            &path_arg(&vars),
        ]))
        .unwrap_err();

        assert!(matches!(
            err,
            InjectorError::FileNotFound {
                role: FileRole::Template,
                ..
            }
        ));
        assert_eq!(err.exit_code(), exit_codes::FAILURE);
        assert!(!output.exists());
    }

    #[test]
    fn test_template_checked_before_vars() {
        let ws = Workspace::new();
        let output = ws.path().join("out.txt");

        let err = dispatch(&cli(&[
            &path_arg(&ws.path().join("absent.j2")),
            &path_arg(&output),
            "-v",
            &path_arg(&ws.path().join("absent.json")),
        ]))
        .unwrap_err();

        assert!(err.to_string().starts_with("Template file not found"));
    }

    #[test]
    fn test_directory_is_not_a_template_file() {
        let ws = Workspace::new();
        let vars = ws.file("vars", "x=1\n");
        std::fs::create_dir(ws.path().join("templates")).unwrap();

        let err = dispatch(&cli(&[
            &path_arg(&ws.path().join("templates")),
            &path_arg(&ws.path().join("out.txt")),
            "-v",
            &path_arg(&vars),
        ]))
        .unwrap_err();

        assert!(matches!(err, InjectorError::FileNotFound { .. }));
    }

    #[test]
    fn test_syntax_error_exits_with_failure() {
        let ws = Workspace::new();
        let template = ws.file("broken.j2", "Hello {{ name ");
        let vars = ws.file("vars", "name=World\n");
        let output = ws.path().join("out.txt");

        let err = dispatch(&cli(&[
            &path_arg(&template),
            &path_arg(&output),
            "-v",
            &path_arg(&vars),
        ]))
        .unwrap_err();

        assert!(matches!(err, InjectorError::TemplateSyntax(_)));
        assert!(err.to_string().contains("syntax error"));
        assert_eq!(err.exit_code(), exit_codes::FAILURE);
        assert!(!output.exists());
    }
}
