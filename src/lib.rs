//! dockscan core library.
//!
//! Scans container build manifests (Dockerfiles) for common security
//! misconfigurations. Matching is line-based and textual; nothing is parsed
//! into instructions.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Discovery and effective configuration resolution.
//! - `error`: The manifest load error.
//! - `manifest`: Reading a manifest into lines.
//! - `rules`: The built-in rule registry.
//! - `lint`: Runs the registry against one or many manifests.
//! - `models`: Findings and lint output structs.
//! - `output`: Human/JSON printers.
//! - `utils`: Supporting helpers.
pub mod cli;
pub mod config;
pub mod error;
pub mod lint;
pub mod manifest;
pub mod models;
pub mod output;
pub mod rules;
pub mod utils;

pub use error::ConfigLoadError;
pub use lint::Checker;
pub use models::{Finding, Severity};
