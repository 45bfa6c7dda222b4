//! CLI module for Oncochat
//!
//! Every subcommand loads `.env` and the layered configuration, then builds
//! only the services it needs.

pub mod ask;
pub mod classify;
pub mod index_stats;
pub mod serve;
pub mod suggest;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::AppConfig;
use crate::infrastructure::logging;

/// Oncochat - answers for cancer patients, checked for hallucinations
#[derive(Parser)]
#[command(name = "oncochat")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP API
    Serve,

    /// Answer one question and exit
    Ask {
        question: String,

        /// Print the full outcome as JSON
        #[arg(long)]
        json: bool,
    },

    /// Label a question 0 (simple) or 1 (complex)
    Classify { question: String },

    /// Suggest follow-up questions for a conversation
    Suggest {
        /// Conversation file, one turn per line
        #[arg(long)]
        history: PathBuf,

        /// Optional background text for the suggestions
        #[arg(long)]
        context: Option<String>,
    },

    /// Build the document index and print its size
    IndexStats,
}

/// Load `.env` and configuration, then start logging
pub fn bootstrap() -> anyhow::Result<AppConfig> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;
    logging::init_logging(&config.logging)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ask() {
        let cli = Cli::try_parse_from(["oncochat", "ask", "Who is Michael E. Jordan?", "--json"]).unwrap();

        match cli.command {
            Command::Ask { question, json } => {
                assert_eq!(question, "Who is Michael E. Jordan?");
                assert!(json);
            }
            _ => panic!("expected ask"),
        }
    }

    #[test]
    fn test_parse_suggest() {
        let cli = Cli::try_parse_from(["oncochat", "suggest", "--history", "chat.txt"]).unwrap();

        match cli.command {
            Command::Suggest { history, context } => {
                assert_eq!(history, PathBuf::from("chat.txt"));
                assert!(context.is_none());
            }
            _ => panic!("expected suggest"),
        }
    }

    #[test]
    fn test_parse_index_stats() {
        let cli = Cli::try_parse_from(["oncochat", "index-stats"]).unwrap();
        assert!(matches!(cli.command, Command::IndexStats));
    }
}
