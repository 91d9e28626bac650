//! Shared data models for findings and lint output.

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
/// Finding severity. Only two levels exist; there is no scoring.
pub enum Severity {
    Warning,
    Info,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Warning => "WARNING",
            Severity::Info => "INFO",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// A single reported misconfiguration.
pub struct Finding {
    pub severity: Severity,
    /// Id of the rule that produced it.
    pub rule: &'static str,
    /// 1-based line that triggered it; `None` for whole-manifest rules.
    pub line: Option<usize>,
    pub message: String,
}

impl Finding {
    pub fn warning(rule: &'static str, line: Option<usize>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            rule,
            line,
            message: message.into(),
        }
    }

    pub fn info(rule: &'static str, line: Option<usize>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            rule,
            line,
            message: message.into(),
        }
    }
}

/// Renders as `[SEVERITY] message`.
impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.severity, self.message)
    }
}

#[derive(Debug, Serialize)]
/// Findings of one manifest, in rule execution order.
pub struct ManifestReport {
    pub path: String,
    pub findings: Vec<Finding>,
}

#[derive(Debug, Default, Serialize, PartialEq, Eq)]
/// Aggregated counts used by printers.
pub struct Summary {
    pub warnings: usize,
    pub infos: usize,
    pub manifests: usize,
}

#[derive(Debug, Serialize)]
/// Lint results container.
pub struct LintResult {
    pub manifests: Vec<ManifestReport>,
    pub summary: Summary,
}

impl LintResult {
    pub fn from_reports(manifests: Vec<ManifestReport>) -> Self {
        let mut summary = Summary {
            manifests: manifests.len(),
            ..Summary::default()
        };
        for f in manifests.iter().flat_map(|m| m.findings.iter()) {
            match f.severity {
                Severity::Warning => summary.warnings += 1,
                Severity::Info => summary.infos += 1,
            }
        }
        Self { manifests, summary }
    }
}
