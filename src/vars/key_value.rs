//! Plain `key=value` vars files.
//!
//! One assignment per line, split on the first `=`. Key and value are
//! trimmed. Blank lines and lines starting with `#` are ignored. Lines with no
//! `=` are collected as [`SkippedLine`]s instead of failing the parse.
//!
//! Line boundaries are the full Unicode set (`\n`, `\r\n`, a lone `\r`,
//! vertical tab, form feed, the C1/FS/GS/RS separators, U+2028, U+2029), so
//! files saved with classic Mac line endings parse line by line too.

use super::ParameterSet;
use serde_json::Value;

/// A line that was ignored because it contains no `=`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number in the file.
    pub line_number: usize,
    /// The trimmed line text.
    pub text: String,
}

/// Result of parsing a key=value file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeyValueVars {
    pub params: ParameterSet,
    pub skipped: Vec<SkippedLine>,
}

impl KeyValueVars {
    pub fn into_parameters(self) -> ParameterSet {
        self.params
    }
}

/// Parse key=value text. Later assignments to the same key win.
pub fn parse_key_value(content: &str) -> KeyValueVars {
    let mut parsed = KeyValueVars::default();

    for (index, raw) in split_lines(content).enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        match line.split_once('=') {
            Some((key, value)) => {
                parsed
                    .params
                    .insert(key.trim().to_string(), Value::String(value.trim().to_string()));
            }
            None => parsed.skipped.push(SkippedLine {
                line_number: index + 1,
                text: line.to_string(),
            }),
        }
    }

    parsed
}

const LINE_BREAKS: [char; 10] = [
    '\n', '\r', '\u{0b}', '\u{0c}', '\u{1c}', '\u{1d}', '\u{1e}', '\u{85}', '\u{2028}', '\u{2029}',
];

/// Split on any line boundary, treating `\r\n` as one. A trailing break does
/// not produce an extra empty line.
fn split_lines(content: &str) -> impl Iterator<Item = &str> {
    let mut rest = content;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        match rest.find(LINE_BREAKS) {
            Some(at) => {
                let line = &rest[..at];
                let tail = &rest[at..];
                let width = if tail.starts_with("\r\n") {
                    2
                } else {
                    tail.chars().next().map_or(1, char::len_utf8)
                };
                rest = &tail[width..];
                Some(line)
            }
            None => Some(std::mem::take(&mut rest)),
        }
    })
}
