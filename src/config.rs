//! Configuration discovery and effective settings resolution.
//!
//! dockscan reads `dockscan.toml|yaml|yml` from the project root (or closest
//! ancestor) and merges it with CLI flags to produce an `Effective` config.
//! Defaults:
//! - `manifests`: `["Dockerfile"]`
//! - `output`: `human`
//! - `color`: true (still only applied when stdout is a terminal)
//!
//! Overrides precedence: CLI > config file > defaults.
//!
//! A missing config is normal. An unreadable or invalid one is logged and
//! ignored.

use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

pub const DEFAULT_MANIFEST: &str = "Dockerfile";

const CONFIG_NAMES: [&str; 3] = ["dockscan.toml", "dockscan.yaml", "dockscan.yml"];

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `dockscan.toml|yaml`.
pub struct DockscanConfig {
    /// Manifest paths or glob patterns, relative to the project root.
    #[serde(default)]
    pub manifests: Option<Vec<String>>,
    pub output: Option<String>,
    pub color: Option<bool>,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by commands after applying precedence.
pub struct Effective {
    pub project_root: PathBuf,
    pub manifests: Vec<PathBuf>,
    pub output: String,
    pub color: bool,
}

/// Walk upward from `start` to detect the project root.
///
/// Stops when a `dockscan.toml|yaml|yml` or a `.git` directory is found.
pub fn detect_project_root(start: &Path) -> PathBuf {
    let mut cur = start;
    loop {
        if CONFIG_NAMES.iter().any(|n| cur.join(n).exists()) {
            return cur.to_path_buf();
        }
        if cur.join(".git").exists() {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) => cur = p,
            None => return start.to_path_buf(),
        }
    }
}

/// Load `DockscanConfig` from `dockscan.toml` or `dockscan.yaml|yml` if present.
pub fn load_config(root: &Path) -> Option<DockscanConfig> {
    for name in CONFIG_NAMES {
        let p = root.join(name);
        if !p.exists() {
            continue;
        }
        let s = match fs::read_to_string(&p) {
            Ok(s) => s,
            Err(e) => {
                warn!(path = %p.display(), error = %e, "cannot read config; using defaults");
                return None;
            }
        };
        let parsed = if name.ends_with(".toml") {
            toml::from_str::<DockscanConfig>(&s).map_err(|e| e.to_string())
        } else {
            serde_yaml::from_str::<DockscanConfig>(&s).map_err(|e| e.to_string())
        };
        return match parsed {
            Ok(cfg) => Some(cfg),
            Err(e) => {
                warn!(path = %p.display(), error = %e, "invalid config; using defaults");
                None
            }
        };
    }
    None
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
///
/// Discovery starts at `cli_project_root` (default: the working directory)
/// and walks up from its absolute form.
///
/// CLI manifest paths are taken as given (relative to the working
/// directory). Config entries are resolved against the project root and may
/// be glob patterns; a pattern that matches nothing is kept as a literal path
/// so the loader reports it. Without configured entries the manifest is
/// `Dockerfile` in the start directory, not in the discovered ancestor.
pub fn resolve_effective(
    cli_project_root: Option<&str>,
    cli_manifests: &[String],
    cli_output: Option<&str>,
    cli_no_color: bool,
) -> Effective {
    let cwd = match std::env::current_dir() {
        Ok(d) => d,
        Err(e) => {
            warn!(error = %e, "cannot resolve working directory; config lookup stays local");
            PathBuf::from(".")
        }
    };
    resolve_effective_in(&cwd, cli_project_root, cli_manifests, cli_output, cli_no_color)
}

/// `resolve_effective` with an explicit working directory.
pub fn resolve_effective_in(
    cwd: &Path,
    cli_project_root: Option<&str>,
    cli_manifests: &[String],
    cli_output: Option<&str>,
    cli_no_color: bool,
) -> Effective {
    let start = match cli_project_root {
        Some(p) => cwd.join(p),
        None => cwd.to_path_buf(),
    };
    let project_root = detect_project_root(&start);
    let cfg = load_config(&project_root).unwrap_or_default();

    let manifests: Vec<PathBuf> = if !cli_manifests.is_empty() {
        cli_manifests.iter().map(PathBuf::from).collect()
    } else {
        match cfg.manifests.clone().filter(|m| !m.is_empty()) {
            Some(entries) => {
                let mut seen = HashSet::new();
                entries
                    .iter()
                    .flat_map(|e| expand_entry(&project_root, e))
                    .filter(|p| seen.insert(p.clone()))
                    .collect()
            }
            None => vec![start.join(DEFAULT_MANIFEST)],
        }
    };

    let output = cli_output
        .map(|s| s.to_string())
        .or(cfg.output)
        .unwrap_or_else(|| "human".to_string());

    let color = !cli_no_color && cfg.color.unwrap_or(true);

    Effective {
        project_root,
        manifests,
        output,
        color,
    }
}

fn expand_entry(root: &Path, entry: &str) -> Vec<PathBuf> {
    let joined = root.join(entry);
    let pattern = joined.to_string_lossy().to_string();
    let mut found: Vec<PathBuf> = match glob::glob(&pattern) {
        Ok(paths) => paths.filter_map(Result::ok).filter(|p| p.is_file()).collect(),
        Err(e) => {
            warn!(pattern = %entry, error = %e, "bad glob pattern; using it as a path");
            Vec::new()
        }
    };
    if found.is_empty() {
        found.push(joined);
    }
    found.sort();
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_without_config() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();
        let eff = resolve_effective(dir.path().to_str(), &[], None, false);
        assert_eq!(eff.output, "human");
        assert!(eff.color);
        assert_eq!(eff.manifests, vec![dir.path().join("Dockerfile")]);
    }

    #[test]
    fn test_detect_and_load_toml_with_globs() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("docker")).unwrap();
        fs::write(root.join("docker/web.Dockerfile"), "FROM nginx\n").unwrap();
        fs::write(root.join("docker/api.Dockerfile"), "FROM alpine\n").unwrap();
        let mut f = fs::File::create(root.join("dockscan.toml")).unwrap();
        writeln!(
            f,
            "{}",
            r#"
manifests = ["docker/*.Dockerfile"]
output = "json"
color = false
    "#
        )
        .unwrap();

        let nested = root.join("docker");
        let eff = resolve_effective(nested.to_str(), &[], None, false);
        assert_eq!(eff.project_root, root);
        assert_eq!(eff.output, "json");
        assert!(!eff.color);
        assert_eq!(
            eff.manifests,
            vec![
                root.join("docker/api.Dockerfile"),
                root.join("docker/web.Dockerfile")
            ]
        );
    }

    #[test]
    fn test_load_yaml() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(
            root.join("dockscan.yaml"),
            "manifests:\n  - build/Dockerfile\noutput: human\n",
        )
        .unwrap();
        let eff = resolve_effective(root.to_str(), &[], None, false);
        assert_eq!(eff.manifests, vec![root.join("build/Dockerfile")]);
        assert_eq!(eff.output, "human");
    }

    #[test]
    fn test_cli_takes_precedence() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(
            root.join("dockscan.toml"),
            "manifests = [\"other\"]\noutput = \"json\"\ncolor = true\n",
        )
        .unwrap();
        let cli = vec!["ci/Dockerfile".to_string()];
        let eff = resolve_effective(root.to_str(), &cli, Some("human"), true);
        assert_eq!(eff.manifests, vec![PathBuf::from("ci/Dockerfile")]);
        assert_eq!(eff.output, "human");
        assert!(!eff.color);
    }

    #[test]
    fn test_invalid_config_falls_back_to_defaults() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join("dockscan.toml"), "manifests = 3\n").unwrap();
        assert!(load_config(root).is_none());
        let eff = resolve_effective(root.to_str(), &[], None, false);
        assert_eq!(eff.output, "human");
        assert_eq!(eff.manifests, vec![root.join("Dockerfile")]);
    }

    #[test]
    fn test_config_found_from_subdirectory() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join("dockscan.toml"), "output = \"json\"\n").unwrap();
        let svc = root.join("svc");
        fs::create_dir(&svc).unwrap();

        let eff = resolve_effective_in(&svc, None, &[], None, false);
        assert_eq!(eff.project_root, root);
        assert_eq!(eff.output, "json");
        assert_eq!(eff.manifests, vec![svc.join("Dockerfile")]);
    }

    #[test]
    fn test_default_manifest_stays_in_start_dir() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join("dockscan.toml"), "color = false\n").unwrap();
        let sub = root.join("sub");
        fs::create_dir(&sub).unwrap();

        let eff = resolve_effective(sub.to_str(), &[], None, false);
        assert_eq!(eff.project_root, root);
        assert!(!eff.color);
        assert_eq!(eff.manifests, vec![sub.join("Dockerfile")]);
    }

    #[test]
    fn test_overlapping_entries_are_checked_once() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join("Dockerfile"), "FROM alpine\n").unwrap();
        fs::write(root.join("Dockerfile.dev"), "FROM alpine\n").unwrap();
        fs::write(
            root.join("dockscan.toml"),
            "manifests = [\"Dockerfile\", \"Docker*\", \"Dockerfile\"]\n",
        )
        .unwrap();
        let eff = resolve_effective(root.to_str(), &[], None, false);
        assert_eq!(
            eff.manifests,
            vec![root.join("Dockerfile"), root.join("Dockerfile.dev")]
        );
    }
}
