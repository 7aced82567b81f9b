use std::fs;
use std::io::Read;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use ember::config::Config;
use ember::output::terminal::display_score_report;
use ember::scoring::spam_scores;

/// Ember: batch spam-likelihood scoring for short messages.
///
/// Scores each message in a batch by its average cosine similarity to every
/// other message — near-duplicate promotional phrasing is the spam signal.
/// Scores are relative to the batch, not an external corpus.
#[derive(Parser)]
#[command(name = "ember", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a batch of messages, one per line, from a file or stdin
    Score {
        /// Path to the message file (reads stdin when omitted)
        file: Option<PathBuf>,

        /// Emit the scored batch as JSON instead of the terminal report
        #[arg(long)]
        json: bool,

        /// Keep blank lines as (empty) messages instead of skipping them
        #[arg(long)]
        keep_blank: bool,
    },

    /// Score the built-in sample batch of promotional emails
    Demo {
        /// Emit the scored batch as JSON instead of the terminal report
        #[arg(long)]
        json: bool,
    },
}

/// Sample batch for the demo command. Local to the binary — the library
/// never depends on it.
const DEMO_MESSAGES: [&str; 10] = [
    "Congratulations! You have won a free iPhone!",
    "Your bank account has been flagged for suspicious activity.",
    "You are a winner! Get your free iPhone now!",
    "Important update: Your account requires verification.",
    "Don't miss this chance to claim your prize!",
    "This is a final reminder: Your subscription is about to expire.",
    "Earn money from home with just a few clicks!",
    "Your Amazon order #12345 has been shipped. Track it here.",
    "Upgrade your account today to enjoy premium features.",
    "Get the latest iPhone for just $1! Limited time offer.",
];

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("ember=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Score {
            file,
            json,
            keep_blank,
        } => {
            let messages = read_messages(file.as_deref(), keep_blank)?;
            if messages.len() > config.max_batch {
                bail!(
                    "Batch of {} messages exceeds EMBER_MAX_BATCH ({}) — scoring is O(N²)",
                    messages.len(),
                    config.max_batch
                );
            }
            info!(batch_size = messages.len(), "Scoring batch");
            report(&messages, json, &config)?;
        }

        Commands::Demo { json } => {
            let messages: Vec<String> = DEMO_MESSAGES.iter().map(|m| m.to_string()).collect();
            report(&messages, json, &config)?;
        }
    }

    Ok(())
}

/// Read the batch, one message per line, preserving input order.
fn read_messages(file: Option<&std::path::Path>, keep_blank: bool) -> Result<Vec<String>> {
    let raw = match file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read messages from {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read messages from stdin")?;
            buffer
        }
    };

    Ok(raw
        .lines()
        .filter(|line| keep_blank || !line.trim().is_empty())
        .map(|line| line.to_string())
        .collect())
}

fn report(messages: &[String], json: bool, config: &Config) -> Result<()> {
    let scores = spam_scores(messages);

    if json {
        println!("{}", serde_json::to_string_pretty(&scores)?);
    } else {
        display_score_report(&scores, config.spam_threshold);
    }

    Ok(())
}
