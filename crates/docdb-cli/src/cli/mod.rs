//! # CLI Behavior
//!
//! This is **one possible UI client** for docdb, not the application itself.
//!
//! ## Locating the Document
//!
//! The document path comes from `--db`, else `DOCDB_PATH`, else the `path`
//! key of `./docdb.toml` or the user config file. Every command except
//! `config` and `init` requires the file to exist already; `docdb init`
//! creates an empty `{}` document.
//!
//! ## Values
//!
//! `docdb set KEY VALUE` stores VALUE as a string. With `--json`, VALUE is
//! parsed as JSON first, so `docdb set users/u1 --json '{"age": "30"}'` stores
//! a mapping. `docdb get` prints strings raw and everything else as
//! pretty JSON (`--json` forces JSON for strings too).
//!
//! ## Logging
//!
//! Warnings only by default. `--verbose` shows connect/disconnect and
//! persistence lines; `RUST_LOG` overrides both.
//!
//! ## Module Structure
//!
//! - `commands`: Context setup and per-command handlers
//! - `render`: Output formatting (values, info, messages)
//! - `setup`: Argument parsing via clap

mod commands;
mod render;
pub mod setup;

pub use commands::run;
