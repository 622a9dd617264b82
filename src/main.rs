//! Attraction tools: local trigger-host harness.
//!
//! Usage:
//!   attraction-tools init [--force]                  Write a default config file
//!   attraction-tools tools [--json | --schema]       List registered tools
//!   attraction-tools invoke <tool> [--context JSON]  Run one invocation
//!
//! Without `--context`, the invocation document is read from stdin.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::{Path, PathBuf};
use tokio::io::AsyncReadExt;
use tracing::info;

use attraction_tools::config;
use attraction_tools::tools::{self, ToolDescriptor, ToolRegistry};
use attraction_tools::travel::TravelClient;

// ---------------------------------------------------------------------------
// CLI definition
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(name = "attraction-tools")]
#[command(version)]
#[command(about = "Attraction search and review tools for a trigger host")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the config file [default: ~/.attraction-tools/config.toml].
    #[arg(long)]
    config: Option<String>,

    /// Log level (debug, info, warn, error). Overrides the config file.
    #[arg(long)]
    log_level: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write a default config file.
    Init {
        /// Replace an existing config file.
        #[arg(long)]
        force: bool,
    },

    /// List the registered tools and their parameters.
    Tools {
        /// Print trigger bindings as JSON (`toolProperties` as a string).
        #[arg(long, conflicts_with = "schema")]
        json: bool,

        /// Print each tool's JSON Schema input definition.
        #[arg(long)]
        schema: bool,
    },

    /// Invoke one tool with an invocation context document.
    Invoke {
        /// Tool name, e.g. `get_attractions`.
        tool: String,

        /// Context document, e.g. '{"arguments": {"query": "Paris"}}'.
        #[arg(long)]
        context: Option<String>,
    },
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli
        .config
        .as_deref()
        .map(|p| PathBuf::from(shellexpand::tilde(p).into_owned()))
        .unwrap_or_else(config::default_config_path);
    // `init` must be able to replace an unreadable config
    let cfg = match config::load_config(&config_path) {
        Ok(cfg) => cfg,
        Err(_) if matches!(cli.command, Commands::Init { .. }) => config::ToolsConfig::default(),
        Err(e) => {
            return Err(e.context(format!(
                "Failed to load config from {}",
                config_path.display()
            )))
        }
    };

    // Initialize logging (stderr; stdout carries tool output)
    let level = cli.log_level.as_deref().unwrap_or(&cfg.log_level);
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Init { force } => cmd_init(&config_path, force),
        Commands::Tools { json, schema } => cmd_tools(json, schema),
        Commands::Invoke { tool, context } => cmd_invoke(&cfg, &tool, context).await,
    }
}

// ---------------------------------------------------------------------------
// Command implementations
// ---------------------------------------------------------------------------

fn cmd_init(config_path: &Path, force: bool) -> Result<()> {
    let cfg = config::init_config(config_path, force)?;
    println!(
        "{} Wrote {}. Export ${} with your RapidAPI key before invoking tools.",
        ">>>".green().bold(),
        config_path.display(),
        cfg.api_key_env,
    );
    Ok(())
}

fn cmd_tools(json: bool, schema: bool) -> Result<()> {
    let descriptors = tools::tool_descriptors();

    if json || schema {
        let entries = descriptors
            .iter()
            .map(|d| if schema { Ok(d.schema_entry()) } else { d.host_binding() })
            .collect::<serde_json::Result<Vec<_>>>()
            .context("Failed to encode descriptors")?;
        let out = serde_json::to_string_pretty(&entries).context("Failed to encode descriptors")?;
        println!("{out}");
        return Ok(());
    }

    println!();
    for descriptor in &descriptors {
        print_descriptor(descriptor);
    }
    Ok(())
}

async fn cmd_invoke(cfg: &config::ToolsConfig, tool: &str, context: Option<String>) -> Result<()> {
    let raw_context = match context {
        Some(raw) => raw,
        None => {
            let mut buf = String::new();
            tokio::io::stdin()
                .read_to_string(&mut buf)
                .await
                .context("Failed to read invocation context from stdin")?;
            buf
        }
    };

    let client = TravelClient::from_config(cfg)?;
    let registry = ToolRegistry::new(client, cfg);

    let output = registry.dispatch(tool, &raw_context).await;
    info!("Tool '{}' finished", tool);
    println!("{output}");
    Ok(())
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn print_descriptor(descriptor: &ToolDescriptor) {
    println!(
        "  {}  {}",
        descriptor.name.green().bold(),
        descriptor.description
    );
    for param in &descriptor.parameters {
        println!(
            "      {} ({}) {}",
            param.name.bold(),
            param.kind,
            param.description.dimmed()
        );
    }
    println!();
}
