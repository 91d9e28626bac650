//! Built-in manifest rules.
//!
//! Each rule is a pure function over the full line list. Matching is purely
//! textual: a `FROM` inside a comment or a continuation line still counts.
//! `RULES` fixes the execution order, and therefore the order of findings.

use crate::models::Finding;

mod add_copy;
mod base_image;
mod user;

/// A registered rule.
pub struct Rule {
    pub id: &'static str,
    pub summary: &'static str,
    pub check: fn(&[String]) -> Vec<Finding>,
}

pub const RULES: &[Rule] = &[
    Rule {
        id: base_image::ID,
        summary: "FROM lines must not use the 'latest' tag; flags 'scratch' base images",
        check: base_image::check,
    },
    Rule {
        id: user::ID,
        summary: "the manifest must contain a USER instruction",
        check: user::check,
    },
    Rule {
        id: add_copy::ID,
        summary: "prefer COPY over ADD",
        check: add_copy::check,
    },
];

/// Run every registered rule in order and collect their findings.
pub fn run_all(lines: &[String]) -> Vec<Finding> {
    let mut out = Vec::new();
    for rule in RULES {
        let found = (rule.check)(lines);
        tracing::debug!(rule = rule.id, findings = found.len(), "rule evaluated");
        out.extend(found);
    }
    out
}

#[cfg(test)]
pub(crate) fn lines(src: &[&str]) -> Vec<String> {
    src.iter().map(|s| s.to_string()).collect()
}
