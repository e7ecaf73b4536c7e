//! Verda design token toolchain
//!
//! Compiles the Verda theme's token table into per-platform variable files
//! (CSS custom properties, SCSS variables, JS constants, TypeScript
//! declarations), configured through `verda.toml`.

mod build;
mod config;
mod formats;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use verda_theme::{Theme, TokenTable};

use crate::config::VerdaConfig;
use crate::formats::Platform;

#[derive(Parser)]
#[command(name = "verda", about = "Verda design token toolchain", version)]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "verda.toml", global = true)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compile design tokens into per-platform variable files
    BuildTokens {
        /// Restrict the build to the named platforms
        #[arg(short, long, value_enum)]
        platform: Vec<Platform>,
    },
    /// Print the flattened token table
    ListTokens,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cli = Cli::parse();
    let config = VerdaConfig::load_or_default(&cli.config)?;
    let table = TokenTable::from_theme(&Theme::default());

    match cli.command {
        Command::BuildTokens { platform } => {
            let written = build::build_tokens(&config, &table, &platform)?;
            tracing::info!(files = written.len(), "token build finished");
        }
        Command::ListTokens => {
            for (name, value) in table.iter() {
                println!("{name}: {value}");
            }
        }
    }

    Ok(())
}
