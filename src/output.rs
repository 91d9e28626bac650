//! Output rendering for lint results.
//!
//! Supports `human` (default) and `json` outputs. The human form is the
//! report header followed by one `[SEVERITY] message` line per finding.

use crate::models::{Finding, LintResult, Severity};
use crate::rules::Rule;
use owo_colors::OwoColorize;
use serde_json::Value as JsonVal;
use std::fmt::Write as _;

pub const REPORT_TITLE: &str = "Misconfiguration Check Report:";

/// Output modes accepted by `--output` and config.
pub fn is_known_output(output: &str) -> bool {
    matches!(output, "human" | "json")
}

/// Print lint results in the requested format.
pub fn print_lint(res: &LintResult, output: &str, color: bool) {
    match output {
        "json" => println!(
            "{}",
            serde_json::to_string_pretty(&compose_lint_json(res)).unwrap_or_default()
        ),
        _ => print!("{}", render_human(res, color)),
    }
}

/// Render the human report. A `==> path` line precedes each manifest only
/// when more than one manifest was checked.
pub fn render_human(res: &LintResult, color: bool) -> String {
    let mut out = String::new();
    let title = if color {
        REPORT_TITLE.bold().to_string()
    } else {
        REPORT_TITLE.to_string()
    };
    let _ = writeln!(out, "\n{}\n", title);
    let many = res.manifests.len() > 1;
    for m in &res.manifests {
        if many {
            let _ = writeln!(out, "==> {}", m.path);
        }
        for f in &m.findings {
            let _ = writeln!(out, "{}", render_finding(f, color));
        }
    }
    out
}

fn render_finding(f: &Finding, color: bool) -> String {
    if !color {
        return f.to_string();
    }
    let tag = format!("[{}]", f.severity);
    let tag = match f.severity {
        Severity::Warning => tag.yellow().bold().to_string(),
        Severity::Info => tag.blue().bold().to_string(),
    };
    format!("{} {}", tag, f.message)
}

/// Print the rule registry, one rule per line.
pub fn print_rules(rules: &[Rule]) {
    let width = rules.iter().map(|r| r.id.len()).max().unwrap_or(0);
    for r in rules {
        println!("{:width$}  {}", r.id, r.summary, width = width);
    }
}

/// Compose lint JSON object (pure) for testing/snapshot purposes.
pub fn compose_lint_json(res: &LintResult) -> JsonVal {
    serde_json::to_value(res).unwrap_or(JsonVal::Null)
}
