mod app;
mod clipboard;
mod commands;
mod transcript;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use jarvis_chat_config::Config;
use jarvis_chat_session::{ChatSession, HttpBackend};
use std::{fs::OpenOptions, path::PathBuf, time::Duration};

#[derive(Parser)]
#[command(name = "jarvis-chat")]
#[command(about = "Chat with JARVIS and render its replies for the terminal or email", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the block sequence of a reply as JSON.
    Render {
        /// Reply file; reads stdin when omitted.
        file: Option<PathBuf>,
    },
    /// Print a reply as email-ready plain text.
    Email { file: Option<PathBuf> },
    /// Print the first budget table of a reply.
    ExportBudget {
        file: Option<PathBuf>,
        /// CSV instead of a markdown table.
        #[arg(long)]
        csv: bool,
    },
    /// Ask the backend whether chat is available.
    Status {
        #[arg(long)]
        api_base: Option<String>,
    },
    /// Write settings to the config file.
    Config {
        #[arg(long)]
        api_base: Option<String>,
        /// Pin a session id so every chat resumes the same backend session.
        #[arg(long)]
        session: Option<String>,
        #[arg(long)]
        timeout_seconds: Option<u64>,
    },
    /// Interactive chat session.
    Chat {
        #[arg(long)]
        api_base: Option<String>,
        /// Reuse a session id instead of generating one.
        #[arg(long)]
        session: Option<String>,
    },
}

fn init_logging(to_file: bool) {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(log::LevelFilter::Info)
        .parse_default_env();

    // The TUI owns the terminal, so chat logs go to a file instead of stderr.
    if to_file {
        let log_path = std::env::temp_dir().join("jarvis-chat.log");
        match OpenOptions::new().create(true).append(true).open(&log_path) {
            Ok(file) => {
                builder.target(env_logger::Target::Pipe(Box::new(file)));
            }
            Err(_) => {
                builder.filter_level(log::LevelFilter::Off);
            }
        }
    }
    builder.init();
}

fn load_config(api_base: Option<String>) -> Result<Config> {
    let config = Config::resolve().with_context(|| {
        format!(
            "Failed to load config file {}",
            Config::config_path().display()
        )
    })?;
    Ok(config.with_api_base_override(api_base))
}

fn backend(config: &Config) -> Result<HttpBackend> {
    let backend = HttpBackend::new(
        &config.api_base,
        Duration::from_secs(config.timeout_seconds),
    )?;
    Ok(backend)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(matches!(cli.command, Commands::Chat { .. }));

    match cli.command {
        Commands::Render { file } => {
            let raw = commands::read_input(file.as_deref())?;
            println!("{}", commands::render_json(&raw)?);
        }
        Commands::Email { file } => {
            let raw = commands::read_input(file.as_deref())?;
            println!("{}", commands::email(&raw));
        }
        Commands::ExportBudget { file, csv } => {
            let raw = commands::read_input(file.as_deref())?;
            let out = commands::export_budget(&raw, csv);
            if out.ends_with('\n') {
                print!("{out}");
            } else {
                println!("{out}");
            }
        }
        Commands::Status { api_base } => {
            let config = load_config(api_base)?;
            let status = backend(&config)?
                .status()
                .with_context(|| format!("JARVIS backend at {} is unreachable", config.api_base))?;
            println!("{}", serde_json::to_string_pretty(&status)?);
        }
        Commands::Config {
            api_base,
            session,
            timeout_seconds,
        } => {
            let path = Config::config_path();
            let config = commands::save_config(
                &path,
                commands::ConfigUpdate {
                    api_base,
                    session_id: session,
                    timeout_seconds,
                },
            )?;
            println!("Saved {}", path.display());
            println!("{config:#?}");
        }
        Commands::Chat { api_base, session } => {
            let config = load_config(api_base)?;
            let backend = backend(&config)?;
            log::info!("Connecting to JARVIS at {}", config.api_base);
            let chat = match session.or(config.session_id) {
                Some(id) => ChatSession::new(backend, id),
                None => ChatSession::with_generated_id(backend),
            };
            app::run(chat)?;
        }
    }

    Ok(())
}
