//! quizbot CLI: run the Telegram bot or check a content catalog. Config from env (and `.env`)
//! with optional CLI overrides.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use handlers::ContentCatalog;
use quizbot_telegram::{run_bot, BotConfig};

#[derive(Parser)]
#[command(name = "quizbot")]
#[command(about = "Quiz and content Telegram bot: run, check-catalog", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the Telegram bot (config from env; token can override BOT_TOKEN).
    Run {
        #[arg(short, long)]
        token: Option<String>,
    },
    /// Validate a JSON catalog (or the built-in one) and print collection sizes.
    CheckCatalog {
        #[arg(short, long, env = "CATALOG_PATH")]
        path: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token } => {
            let config = BotConfig::load(token)?;
            run_bot(config).await
        }
        Commands::CheckCatalog { path } => check_catalog(path),
    }
}

fn check_catalog(path: Option<PathBuf>) -> Result<()> {
    let catalog = ContentCatalog::load(path.as_deref()).with_context(|| match &path {
        Some(path) => format!("Catalog {} is invalid", path.display()),
        None => "Built-in catalog is invalid".to_string(),
    })?;

    println!("facts:          {}", catalog.facts.len());
    println!("quotes:         {}", catalog.quotes.len());
    println!("lifehacks:      {}", catalog.lifehacks.len());
    println!("images:         {}", catalog.images.len());
    println!("click messages: {}", catalog.click_messages.len());
    println!("quizzes:        {}", catalog.quizzes.len());
    println!("riddles:        {}", catalog.riddles.len());
    println!("Catalog OK");
    Ok(())
}
