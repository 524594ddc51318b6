//! # CLI Layer
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Handles argument parsing
//! - Installs the logger
//! - Formats output for human consumption
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: Convert shell arguments into typed commands via clap
//! 2. **Context Setup**: Load configuration and open the single store handle
//! 3. **Dispatch**: Route commands to handlers, opening the store only for
//!    commands that read or write it
//! 4. **Error Handling**: Surface errors as `Error: ...` plus a non-zero exit

use super::render::{print_config, print_info, print_messages, render_value};
use super::setup::{Cli, Commands};
use anyhow::{bail, Context, Result};
use clap::Parser;
use docdb::api::DocDbApi;
use docdb::config::DocDbConfig;
use docdb::store::fs_backend::FsBackend;
use serde_json::Value;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config(&cli)?;

    match cli.command {
        Commands::Config => handle_config(&config),
        Commands::Init => handle_init(&config),
        Commands::Get { key, json } => handle_get(&open(&config)?, &key, json),
        Commands::Set { key, value, json } => handle_set(&mut open(&config)?, &key, value, json),
        Commands::Delete { key } => handle_delete(&mut open(&config)?, &key),
        Commands::Info => handle_info(&open(&config)?),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn load_config(cli: &Cli) -> Result<DocDbConfig> {
    let config = DocDbConfig::load().context("failed to load configuration")?;
    Ok(match &cli.db {
        Some(path) => config.with_path(path),
        None => config,
    })
}

/// Opens the one store handle for this process.
fn open(config: &DocDbConfig) -> Result<DocDbApi<FsBackend>> {
    Ok(DocDbApi::open(config)?)
}

fn handle_get(api: &DocDbApi<FsBackend>, key: &str, json: bool) -> Result<()> {
    let result = api.get(key)?;
    match &result.value {
        Some(value) => println!("{}", render_value(value, json)?),
        None => bail!("Key not found: {}", key.trim()),
    }
    Ok(())
}

fn handle_set(api: &mut DocDbApi<FsBackend>, key: &str, raw: String, json: bool) -> Result<()> {
    let value = parse_value(raw, json)?;
    let result = api.set(key, value)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(api: &mut DocDbApi<FsBackend>, key: &str) -> Result<()> {
    let result = api.delete(key)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_info(api: &DocDbApi<FsBackend>) -> Result<()> {
    let result = api.info()?;
    if let Some(info) = &result.info {
        print_info(info);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(config: &DocDbConfig) -> Result<()> {
    let result = docdb::api::config(config);
    if let Some(config) = &result.config {
        print_config(config);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_init(config: &DocDbConfig) -> Result<()> {
    let (_api, result) = DocDbApi::init(config)?;
    print_messages(&result.messages);
    Ok(())
}

fn parse_value(raw: String, json: bool) -> Result<Value> {
    if json {
        serde_json::from_str(&raw).with_context(|| format!("invalid JSON value: {}", raw))
    } else {
        Ok(Value::String(raw))
    }
}
