//! dockscan CLI binary entry point.
//! Resolves config, runs checks, and prints results.

use clap::Parser;
use dockscan::cli::{Cli, Commands};
use dockscan::{config, lint, output, rules, utils};
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(level))
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.cmd {
        Commands::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
        }
        Commands::Rules => {
            output::print_rules(rules::RULES);
        }
        Commands::Check {
            paths,
            project_root,
            output: out,
            no_color,
        } => {
            let eff =
                config::resolve_effective(project_root.as_deref(), &paths, out.as_deref(), no_color);
            if !output::is_known_output(&eff.output) {
                eprintln!(
                    "{} unknown output mode '{}' (expected human|json)",
                    utils::error_prefix(),
                    eff.output
                );
                std::process::exit(2);
            }
            tracing::info!(
                root = %eff.project_root.display(),
                manifests = eff.manifests.len(),
                "checking manifests"
            );
            let result = match lint::run_lint(&eff.project_root, &eff.manifests) {
                Ok(r) => r,
                Err(e) => {
                    eprintln!("{} {}", utils::error_prefix(), e);
                    std::process::exit(2);
                }
            };
            let color = eff.color && std::io::stdout().is_terminal();
            output::print_lint(&result, &eff.output, color);
        }
    }
}
