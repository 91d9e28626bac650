//! CLI argument parsing via `clap`.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "dockscan",
    version,
    about = "Scan Dockerfiles for common security misconfigurations",
    long_about = "dockscan reads container build manifests line by line and reports risky patterns: unpinned 'latest' base images, 'scratch' bases, missing USER instructions, and ADD where COPY would do.\n\nConfiguration precedence: CLI > dockscan.toml > defaults.",
    after_help = "Examples:\n  dockscan check\n  dockscan check docker/api.Dockerfile docker/web.Dockerfile\n  dockscan check --output json\n  dockscan rules",
    arg_required_else_help = true
)]
/// Top-level CLI options and subcommands.
pub struct Cli {
    /// Raise log verbosity on stderr (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
/// Supported subcommands.
pub enum Commands {
    /// Show version
    #[command(about = "Show version", long_about = "Print the current dockscan version.")]
    Version,
    /// Check manifests
    #[command(
        about = "Run manifest checks",
        long_about = "Check one or more Dockerfiles. Without paths, manifests come from dockscan.toml, else ./Dockerfile. A manifest that cannot be read stops the run with exit code 2.",
        after_help = "Examples:\n  dockscan check\n  dockscan check build/Dockerfile --output json"
    )]
    Check {
        #[arg(help = "Manifest paths (default: from config, else Dockerfile)")]
        paths: Vec<String>,
        #[arg(long, help = "Project root used for config discovery (default: current dir)")]
        project_root: Option<String>,
        #[arg(long, help = "Output mode: human|json (default: human)")]
        output: Option<String>,
        #[arg(long, action = clap::ArgAction::SetTrue, help = "Disable colored output")]
        no_color: bool,
    },
    /// List built-in rules
    #[command(
        about = "List rules",
        long_about = "Print the built-in rules in the order they run."
    )]
    Rules,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_check_with_paths_and_flags() {
        let cli = Cli::try_parse_from([
            "dockscan", "-vv", "check", "a/Dockerfile", "b/Dockerfile", "--output", "json",
            "--no-color",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.cmd {
            Commands::Check {
                paths,
                output,
                no_color,
                project_root,
            } => {
                assert_eq!(paths, vec!["a/Dockerfile", "b/Dockerfile"]);
                assert_eq!(output.as_deref(), Some("json"));
                assert!(no_color);
                assert!(project_root.is_none());
            }
            _ => panic!("expected check"),
        }
    }

    #[test]
    fn test_parse_rules() {
        let cli = Cli::try_parse_from(["dockscan", "rules"]).unwrap();
        assert!(matches!(cli.cmd, Commands::Rules));
    }
}
