//! Lint runner: load manifests and evaluate the rule registry against them.
//!
//! A run never reuses findings from an earlier run; each call builds its own
//! list, so calling `run_checks` twice on one `Checker` gives the same result.

use crate::error::ConfigLoadError;
use crate::manifest;
use crate::models::{Finding, LintResult, ManifestReport};
use crate::rules;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Checker bound to one manifest path.
#[derive(Debug, Clone)]
pub struct Checker {
    path: PathBuf,
}

impl Default for Checker {
    fn default() -> Self {
        Self::new("Dockerfile")
    }
}

impl Checker {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the manifest and run every rule in registry order.
    ///
    /// A load failure is returned as-is and no findings are produced.
    pub fn run_checks(&self) -> Result<Vec<Finding>, ConfigLoadError> {
        let manifest = manifest::load(&self.path)?;
        let findings = rules::run_all(manifest.lines());
        debug!(
            path = %self.path.display(),
            findings = findings.len(),
            "manifest checked"
        );
        Ok(findings)
    }
}

/// Check several manifests, in parallel, keeping input order.
///
/// `root` is only used to shorten displayed paths. Any load failure fails the
/// whole run and no partial result is returned.
pub fn run_lint(root: &Path, paths: &[PathBuf]) -> Result<LintResult, ConfigLoadError> {
    let reports = paths
        .par_iter()
        .map(|p| -> Result<ManifestReport, ConfigLoadError> {
            let findings = Checker::new(p).run_checks()?;
            Ok(ManifestReport {
                path: display_path(root, p),
                findings,
            })
        })
        .collect::<Result<Vec<_>, ConfigLoadError>>()?;
    Ok(LintResult::from_reports(reports))
}

/// Render `path` relative to `root` when it lives under it.
pub fn display_path(root: &Path, path: &Path) -> String {
    if path.is_absolute() {
        if let Some(rel) = pathdiff::diff_paths(path, root) {
            if !rel.starts_with("..") {
                return rel.to_string_lossy().to_string();
            }
        }
    }
    path.to_string_lossy().to_string()
}
