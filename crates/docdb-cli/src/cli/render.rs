use chrono::{DateTime, Local, Utc};
use colored::*;
use docdb::api::{CmdMessage, MessageLevel};
use docdb::config::DocDbConfig;
use docdb::model::StoreInfo;
use serde_json::Value;

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Strings print raw unless `force_json`; everything else prints as pretty JSON.
pub fn render_value(value: &Value, force_json: bool) -> serde_json::Result<String> {
    match value {
        Value::String(s) if !force_json => Ok(s.clone()),
        other => serde_json::to_string_pretty(other),
    }
}

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

pub fn print_info(info: &StoreInfo) {
    println!("{} {}", "location:     ".bold(), info.location.display());
    println!("{} {}", "connection:   ".bold(), info.connection_id);
    println!("{} {}", "root keys:    ".bold(), info.root_keys);
    println!("{} {}", "created:      ".bold(), format_time(Some(info.created_at)));
    println!("{} {}", "last accessed:".bold(), format_time(info.last_accessed));
    println!("{} {}", "last modified:".bold(), format_time(info.last_modified));
}

pub fn print_config(config: &DocDbConfig) {
    let path = config
        .path
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(unset)".to_string());
    println!("path = {}", path);
    println!("indent = {}", config.indent);
}

fn format_time(time: Option<DateTime<Utc>>) -> String {
    match time {
        Some(t) => t.with_timezone(&Local).format(TIME_FORMAT).to_string(),
        None => "never".dimmed().to_string(),
    }
}
