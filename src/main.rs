use clap::Parser;
use oncochat::cli::{self, Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Serve => cli::serve::run().await,
        Command::Ask { question, json } => cli::ask::run(question, json).await,
        Command::Classify { question } => cli::classify::run(question).await,
        Command::Suggest { history, context } => cli::suggest::run(&history, context).await,
        Command::IndexStats => cli::index_stats::run().await,
    }
}
