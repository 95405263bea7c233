//! # threadbot
//!
//! Answers programming questions with a related Stack Overflow thread and
//! small talk with a canned reply.

#![deny(unsafe_code)]

mod commands;
mod logging;

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use threadbot_core::config::ThreadbotConfig;
use threadbot_core::constants::VERSION;
use threadbot_dialogue::build_router;
use tracing::info;

/// Query router for programming questions.
#[derive(Parser, Debug)]
#[command(name = "threadbot", version = VERSION, about)]
struct Cli {
    /// TOML configuration file. Built-in defaults when omitted.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log level (overrides `[observability] log_level`; `THREADBOT_LOG` wins over both).
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Emit logs as JSON lines.
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Answer a single question.
    Ask {
        /// The question, as one or more words.
        #[arg(required = true, num_args = 1..)]
        question: Vec<String>,
    },
    /// Answer questions read from stdin, one per line. `quit` or `exit` ends.
    Chat,
    /// List tags that have a thread partition.
    Tags,
}

fn load_config(cli: &Cli) -> Result<ThreadbotConfig> {
    let mut config = match &cli.config {
        Some(path) => ThreadbotConfig::from_file(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => ThreadbotConfig::default(),
    };
    if let Some(level) = &cli.log_level {
        config.observability.log_level = level.clone();
    }
    if cli.json_logs {
        config.observability.json = true;
    }
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;
    logging::init_tracing(&config.observability);

    let router = build_router(&config).context("Failed to start threadbot")?;
    info!(version = VERSION, "threadbot started");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.command {
        Command::Ask { question } => {
            let answer = router.generate_answer(&question.join(" "))?;
            writeln!(out, "{answer}")?;
        }
        Command::Chat => {
            let answered = commands::run_chat(
                |query| router.generate_answer(query),
                io::stdin().lock(),
                &mut out,
                &mut io::stderr(),
            )?;
            info!(answered, "chat session ended");
        }
        Command::Tags => {
            let tags = router
                .available_tags()
                .context("Failed to list thread partitions")?;
            commands::print_tags(&tags, &mut out)?;
        }
    }
    Ok(())
}
