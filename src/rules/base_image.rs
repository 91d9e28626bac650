//! Base image tag checks on `FROM` lines.
//!
//! The keyword match is case-sensitive and the line is not trimmed, so an
//! indented `FROM` is skipped. `add_copy` trims; the difference is kept so
//! reports stay comparable with earlier runs.

use crate::models::Finding;

pub const ID: &str = "base-image-tag";

const LATEST_MSG: &str = "Base image uses 'latest' tag. Use specific versions.";
const SCRATCH_MSG: &str = "Base image is 'scratch'. Ensure minimal image is needed.";

pub fn check(lines: &[String]) -> Vec<Finding> {
    let mut out = Vec::new();
    for (idx, line) in lines.iter().enumerate() {
        if !line.starts_with("FROM") {
            continue;
        }
        let lower = line.to_lowercase();
        if lower.contains("latest") {
            out.push(Finding::warning(ID, Some(idx + 1), LATEST_MSG));
        }
        if lower.contains("scratch") {
            out.push(Finding::info(ID, Some(idx + 1), SCRATCH_MSG));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Severity;
    use crate::rules::lines;

    #[test]
    fn test_latest_tag_warns_once() {
        let found = check(&lines(&["FROM something:latest"]));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].severity, Severity::Warning);
        assert_eq!(found[0].message, LATEST_MSG);
        assert_eq!(found[0].line, Some(1));
    }

    #[test]
    fn test_scratch_is_info_only() {
        let found = check(&lines(&["FROM scratch"]));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].severity, Severity::Info);
        assert_eq!(found[0].message, SCRATCH_MSG);
    }

    #[test]
    fn test_scratch_latest_fires_both() {
        let found = check(&lines(&["FROM scratch:latest"]));
        let sev: Vec<_> = found.iter().map(|f| f.severity).collect();
        assert_eq!(sev, vec![Severity::Warning, Severity::Info]);
    }

    #[test]
    fn test_substring_match_is_case_insensitive() {
        let found = check(&lines(&["FROM registry.local/app:LATEST AS build"]));
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn test_keyword_is_case_sensitive_and_untrimmed() {
        assert!(check(&lines(&["from ubuntu:latest"])).is_empty());
        assert!(check(&lines(&["  FROM ubuntu:latest"])).is_empty());
        assert!(check(&lines(&["FROM ubuntu:22.04"])).is_empty());
    }

    #[test]
    fn test_every_from_line_is_checked() {
        let found = check(&lines(&[
            "FROM golang:latest AS build",
            "RUN go build",
            "FROM scratch",
        ]));
        let at: Vec<_> = found.iter().map(|f| f.line).collect();
        assert_eq!(at, vec![Some(1), Some(3)]);
    }
}
