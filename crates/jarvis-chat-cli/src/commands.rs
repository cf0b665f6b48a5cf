//! One-shot subcommands that read a message and print a rendering of it.

use anyhow::{Context, Result};
use jarvis_chat_config::Config;
use jarvis_chat_engine::{export, parse_message, to_email_text};
use std::{
    io::{self, Read},
    path::Path,
};

/// Reads the message from `path`, or from stdin when no path is given.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read message from {}", path.display())),
        None => {
            let mut raw = String::new();
            io::stdin()
                .read_to_string(&mut raw)
                .context("Failed to read message from stdin")?;
            Ok(raw)
        }
    }
}

/// The block sequence as pretty-printed JSON.
pub fn render_json(raw: &str) -> Result<String> {
    Ok(serde_json::to_string_pretty(&parse_message(raw))?)
}

pub fn email(raw: &str) -> String {
    to_email_text(raw)
}

/// The first budget table in the message, as markdown or CSV.
pub fn export_budget(raw: &str, as_csv: bool) -> String {
    let parsed = parse_message(raw);
    let rows = export::budget_rows(&parsed).unwrap_or_default();
    if as_csv {
        export::csv(rows)
    } else {
        export::markdown_table(rows)
    }
}

/// Settings to persist; `None` keeps the value already in the file.
#[derive(Debug, Default)]
pub struct ConfigUpdate {
    pub api_base: Option<String>,
    pub session_id: Option<String>,
    pub timeout_seconds: Option<u64>,
}

/// Merges `update` into the config file at `path` (or defaults) and writes it back.
pub fn save_config(path: &Path, update: ConfigUpdate) -> Result<Config> {
    let mut config = Config::load_from_path(path)?.unwrap_or_default();
    if let Some(api_base) = update.api_base {
        config.api_base = api_base;
    }
    if let Some(session_id) = update.session_id {
        config.session_id = Some(session_id);
    }
    if let Some(timeout_seconds) = update.timeout_seconds {
        config.timeout_seconds = timeout_seconds;
    }
    config
        .save_to_path(path)
        .with_context(|| format!("Failed to write config file {}", path.display()))?;
    Ok(config)
}
