//! Non-root user check.

use crate::models::Finding;

pub const ID: &str = "non-root-user";

const MSG: &str = "No USER instruction found. Containers run as root by default.";

/// Warns once when no line mentions `USER` anywhere. Plain substring match,
/// so `ENV USERNAME=x` also satisfies it.
pub fn check(lines: &[String]) -> Vec<Finding> {
    if lines.iter().any(|l| l.contains("USER")) {
        Vec::new()
    } else {
        vec![Finding::warning(ID, None, MSG)]
    }
}
