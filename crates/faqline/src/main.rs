// SPDX-FileCopyrightText: 2026 Faqline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Faqline - a keyword-matching FAQ chatbot.
//!
//! This is the binary entry point for the Faqline CLI.

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod shell;

use clap::{Parser, Subcommand};
use faqline_engine::FaqSession;
use tracing_subscriber::EnvFilter;

/// Faqline - a keyword-matching FAQ chatbot.
#[derive(Parser, Debug)]
#[command(name = "faqline", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Launch an interactive chat session (the default).
    Shell,
    /// Ask a single question and print the answer.
    Ask {
        /// The question to resolve against the FAQ dataset.
        query: String,
    },
    /// Print the effective configuration as TOML.
    Config,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match faqline_config::load_and_validate() {
        Ok(config) => config,
        Err(errors) => {
            faqline_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    // Filter defaults to the configured level; RUST_LOG still overrides.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.agent.log_level.clone()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Some(Commands::Shell) | None => shell::run_shell(config).await,
        Some(Commands::Ask { query }) => {
            let mut session = FaqSession::from_config(&config);
            match session.submit_query(&query).await {
                Ok(reply) => {
                    println!("{}", reply.text);
                    Ok(())
                }
                Err(e) => Err(e),
            }
        }
        Some(Commands::Config) => match toml::to_string_pretty(&config) {
            Ok(rendered) => {
                print!("{rendered}");
                Ok(())
            }
            Err(e) => Err(faqline_core::FaqlineError::Internal(format!(
                "failed to render config: {e}"
            ))),
        },
    };

    if let Err(e) = result {
        eprintln!("faqline: {e}");
        std::process::exit(1);
    }
}
