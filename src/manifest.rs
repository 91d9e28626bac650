//! Manifest loading.
//!
//! A manifest is kept as raw text lines; nothing is parsed into instructions.
//! Every `load` call reads the file again.

use crate::error::ConfigLoadError;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A loaded container build manifest.
#[derive(Debug, Clone)]
pub struct Manifest {
    path: PathBuf,
    lines: Vec<String>,
}

impl Manifest {
    /// Build a manifest from in-memory text, split the same way `load` does.
    pub fn from_text(path: impl Into<PathBuf>, text: &str) -> Self {
        Self {
            path: path.into(),
            lines: split_lines(text),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

/// Read the manifest at `path` into lines.
pub fn load(path: &Path) -> Result<Manifest, ConfigLoadError> {
    let text = fs::read_to_string(path).map_err(|e| ConfigLoadError::new(path, e))?;
    let manifest = Manifest::from_text(path, &text);
    debug!(
        path = %path.display(),
        lines = manifest.lines.len(),
        "loaded manifest"
    );
    Ok(manifest)
}

fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r'
            | '\u{0b}'
            | '\u{0c}'
            | '\u{1c}'
            | '\u{1d}'
            | '\u{1e}'
            | '\u{85}'
            | '\u{2028}'
            | '\u{2029}'
    )
}

/// Split text into lines without their terminators.
///
/// `\r\n` counts as one break. A trailing break does not add an empty line,
/// so `"a\n"` and `"a"` both yield `["a"]` and `""` yields nothing.
pub fn split_lines(text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        if !is_line_break(c) {
            continue;
        }
        lines.push(text[start..i].to_string());
        let mut end = i + c.len_utf8();
        if c == '\r' {
            if let Some(&(j, '\n')) = chars.peek() {
                chars.next();
                end = j + 1;
            }
        }
        start = end;
    }
    if start < text.len() {
        lines.push(text[start..].to_string());
    }
    lines
}
