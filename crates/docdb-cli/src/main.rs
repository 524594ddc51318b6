//! # Docdb CLI
//!
//! The `docdb` binary is intentionally thin: the CLI lives in `src/cli/`, and
//! this file only invokes `cli::run()` and handles process termination.
//!
//! ## Workspace Structure
//!
//! - `crates/docdb/` — Core library: key parsing, the document engine, storage
//! - `crates/docdb-cli/` — This CLI tool, depends on the `docdb` library
//!
//! Everything from the library's `api.rs` inward is UI agnostic. This crate
//! owns all user-facing concerns: argument parsing, logging setup, opening
//! the one store handle, dispatch, rendering, and exit codes.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
