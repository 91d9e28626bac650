//! `ADD` versus `COPY`.
//!
//! Leading whitespace is stripped before matching, including the ASCII
//! separators `\x1c`..`\x1f` that `char::is_whitespace` leaves alone.

use crate::models::Finding;

pub const ID: &str = "add-vs-copy";

const MSG: &str = "'ADD' used instead of 'COPY'. 'COPY' is preferred unless needed.";

fn is_blank(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

pub fn check(lines: &[String]) -> Vec<Finding> {
    lines
        .iter()
        .enumerate()
        .filter(|(_, l)| l.trim_start_matches(is_blank).starts_with("ADD"))
        .map(|(idx, _)| Finding::warning(ID, Some(idx + 1), MSG))
        .collect()
}
