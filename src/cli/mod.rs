//! Command-line interface parsing and handling
//!
//! This module handles parsing command-line arguments and executing the appropriate commands.

pub mod ask;

use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::ask::run_ask;
use crate::core::app::AppInitConfig;
use crate::core::config::data::{ConfigKey, BASE_URL_ENV};
use crate::core::config::Config;
use crate::core::setup::{ChaosLevel, FamilyBucket};
use crate::ui::chat_loop::run_chat;
use crate::utils::logging::init_diagnostics;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_DESCRIBE"),
    ", built ",
    env!("VERGEN_BUILD_DATE"),
    ")"
);

#[derive(Parser)]
#[command(name = "hotmess-coach")]
#[command(version, long_version = LONG_VERSION)]
#[command(about = "A terminal Thanksgiving survival coach")]
#[command(
    long_about = "HotMessCoach asks how many relatives are coming and how much chaos you \
can take, then lets you chat with a coach backend about the holiday.\n\n\
Environment Variables:\n\
  HOTMESS_COACH_BASE_URL   Coach origin serving /api/chat (defaults to http://localhost:3000)\n\
  HOTMESS_COACH_LOG        Diagnostic filter for --debug-log (defaults to info)\n\n\
Controls:\n\
  Up/Down, 1-4      Pick an option in the setup screens\n\
  Enter             Select an option, or send the message\n\
  Esc               Back to the family-size question\n\
  Alt+Enter         Insert a new line in the message\n\
  PgUp/PgDn         Scroll through the conversation\n\
  Ctrl+R            Start over\n\
  Ctrl+C            Quit the application"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Coach origin, overriding the environment and config file
    #[arg(short = 'u', long, global = true, value_name = "URL")]
    pub base_url: Option<String>,

    /// Write diagnostic logs to the specified file
    #[arg(long, global = true, value_name = "PATH")]
    pub debug_log: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the chat interface (default)
    Chat,
    /// Ask a single question without the full-screen interface
    Ask {
        /// Family size bucket: 5-10, 11-20, 21-30 or 30+
        #[arg(short, long, default_value = "5-10")]
        family: FamilyBucket,
        /// Chaos level: zen, medium or chaotic
        #[arg(short, long, default_value = "medium")]
        chaos: ChaosLevel,
        /// Question for the coach
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, required = true)]
        prompt: Vec<String>,
    },
    /// Set configuration values, or show them when no key is given
    Set {
        /// Configuration key to set (base-url or theme)
        key: Option<String>,
        /// Value to set for the key
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        value: Vec<String>,
    },
    /// Unset configuration values
    Unset {
        /// Configuration key to unset
        key: String,
    },
}

pub fn main() -> Result<(), Box<dyn Error>> {
    tokio::runtime::Runtime::new()?.block_on(async_main())
}

async fn async_main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    init_diagnostics(args.debug_log.as_deref())?;

    match args.command.unwrap_or(Commands::Chat) {
        Commands::Chat => {
            let config = Config::load()?;
            let init_config = AppInitConfig {
                base_url: config
                    .resolve_base_url(args.base_url.as_deref(), std::env::var(BASE_URL_ENV).ok()),
                theme: config.resolve_theme(),
            };
            run_chat(init_config).await
        }
        Commands::Ask {
            family,
            chaos,
            prompt,
        } => {
            let config = Config::load()?;
            let base_url =
                config.resolve_base_url(args.base_url.as_deref(), std::env::var(BASE_URL_ENV).ok());
            run_ask(base_url, family, chaos, prompt).await
        }
        Commands::Set { key, value } => {
            let mut config = Config::load()?;
            let Some(key) = key else {
                config.print_all();
                return Ok(());
            };
            let config_key = parse_key_or_exit(&key);
            let value = value.join(" ");
            if value.trim().is_empty() {
                config.print_all();
                return Ok(());
            }
            match config.set_value(config_key, &value) {
                Ok(()) => {
                    config.save()?;
                    println!("✅ Set {} to: {}", config_key.as_str(), value.trim());
                }
                Err(message) => {
                    eprintln!("❌ {message}");
                    std::process::exit(1);
                }
            }
            Ok(())
        }
        Commands::Unset { key } => {
            let mut config = Config::load()?;
            let config_key = parse_key_or_exit(&key);
            config.unset_value(config_key);
            config.save()?;
            println!("✅ Unset {}", config_key.as_str());
            Ok(())
        }
    }
}

fn parse_key_or_exit(key: &str) -> ConfigKey {
    match ConfigKey::parse(key) {
        Some(config_key) => config_key,
        None => {
            let known: Vec<&str> = ConfigKey::ALL.iter().map(|k| k.as_str()).collect();
            eprintln!("❌ Unknown config key: {key}");
            eprintln!("Known keys: {}", known.join(", "));
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests;
