// SPDX-FileCopyrightText: 2026 Benang Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Benang - accounting assistant for garment manufacturers.
//!
//! This is the binary entry point. Every subcommand loads configuration,
//! builds the Gemini transport and routes questions through the
//! classifier and responder.

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod doctor;
mod shell;

use std::path::PathBuf;
use std::sync::Arc;

use benang_config::model::BenangConfig;
use benang_core::BenangError;
use benang_gemini::GeminiTransport;
use benang_router::AccountingAssistant;
use clap::{Parser, Subcommand};

/// Benang - accounting assistant for garment manufacturers.
#[derive(Parser, Debug)]
#[command(name = "benang", version, about, long_about = None)]
struct Cli {
    /// Read configuration from this file instead of the standard locations.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Route one question and print the answer.
    Ask {
        /// The question, e.g. "berapa stok kain katun?".
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },
    /// Print only the routing decision for a question.
    Classify {
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
        /// Print the decision as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Launch an interactive chat session.
    Shell,
    /// Check configuration and connectivity.
    Doctor {
        /// Send a real request to the hosted model.
        #[arg(long)]
        deep: bool,
        /// Disable colored output.
        #[arg(long)]
        plain: bool,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => benang_config::load_and_validate_path(path),
        None => benang_config::load_and_validate(),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(errors) => {
            benang_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    init_tracing(cli.verbose, &config.agent.log_level);

    if let Err(e) = run(cli.command, config).await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn run(command: Option<Commands>, config: BenangConfig) -> Result<(), BenangError> {
    match command {
        Some(Commands::Ask { query }) => {
            let assistant = build_assistant(&config)?;
            let reply = assistant.ask(&query.join(" ")).await;
            if config.shell.show_reasoning {
                println!("{}\n", reply.routing_notice());
            }
            println!("{}", reply.answer);
        }
        Some(Commands::Classify { query, json }) => {
            let assistant = build_assistant(&config)?;
            let result = assistant.classifier().classify(&query.join(" ")).await;
            if json {
                let rendered = serde_json::to_string_pretty(&result)
                    .map_err(|e| BenangError::Internal(format!("failed to encode result: {e}")))?;
                println!("{rendered}");
            } else {
                println!("{}\t{}", result.domain, result.reasoning);
            }
        }
        Some(Commands::Shell) => {
            let assistant = build_assistant(&config)?;
            shell::run_shell(&config, &assistant).await?;
        }
        Some(Commands::Doctor { deep, plain }) => {
            doctor::run_doctor(&config, deep, plain).await?;
        }
        None => {
            println!("benang: use --help for available commands");
        }
    }
    Ok(())
}

/// Wire the Gemini transport and the configured credential into an assistant.
pub(crate) fn build_assistant(config: &BenangConfig) -> Result<AccountingAssistant, BenangError> {
    let transport = Arc::new(GeminiTransport::new(&config.gemini)?);
    let credential = config.gemini.credential_state();
    tracing::debug!(
        credential = credential.describe(),
        model = config.gemini.model.as_str(),
        "assistant initialized"
    );
    Ok(AccountingAssistant::new(
        transport,
        credential,
        config.gemini.model.clone(),
    ))
}

/// Log level for the `benang` targets: `-v` flags override the config value.
fn effective_level(verbose: u8, configured: &str) -> String {
    match verbose {
        0 => configured.to_ascii_lowercase(),
        1 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

/// Initialize the tracing subscriber. `RUST_LOG` wins over everything else.
fn init_tracing(verbose: u8, configured: &str) {
    use tracing_subscriber::EnvFilter;

    let level = effective_level(verbose, configured);
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("benang={level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false)
        .init();
}
