// src/main.rs
mod alphavantage;
mod analyst;
mod llm;
mod state;
mod utils;

use alphavantage::AlphaVantageConfig;
use analyst::FundamentalsAnalyst;
use clap::Parser;
use llm::{OpenAiChatClient, OpenAiConfig};
use state::AnalystState;
use std::path::PathBuf;
use utils::AppError;

/// Command Line Interface for the fundamentals report generator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Ticker symbol of the company to analyze
    #[arg(short, long)]
    ticker: String,

    /// Trade date anchoring the 7-day lookback window (YYYY-MM-DD)
    #[arg(short = 'd', long)]
    trade_date: String,

    /// Write the Markdown report to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

/// Reads all credentials and endpoints from the environment. This is the
/// only place the process environment is consulted; everything below main
/// takes explicit config values.
fn alphavantage_config_from_env() -> AlphaVantageConfig {
    let api_key = std::env::var("ALPHAVANTAGE_API_KEY").unwrap_or_else(|_| {
        tracing::warn!("ALPHAVANTAGE_API_KEY not set; data requests will be rejected by the provider");
        String::new()
    });
    AlphaVantageConfig::new(api_key)
}

fn openai_config_from_env() -> OpenAiConfig {
    OpenAiConfig {
        api_base: std::env::var("OPENAI_API_BASE")
            .unwrap_or_else(|_| "https://api.openai.com/v1".to_string()),
        api_key: std::env::var("OPENAI_API_KEY").unwrap_or_else(|_| {
            tracing::warn!("OPENAI_API_KEY not set; chat requests may be rejected");
            String::new()
        }),
        model: std::env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string()),
    }
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // 1. Setup Logging (reads RUST_LOG env var)
    utils::logging::setup_logging();

    // 2. Parse CLI Arguments
    let args = Args::parse();
    tracing::info!("Starting fundamentals analysis for args: {:?}", args);

    // 3. Assemble configuration and collaborators
    let data_config = alphavantage_config_from_env();
    let chat = OpenAiChatClient::new(openai_config_from_env())?;
    let node = FundamentalsAnalyst::new(data_config, chat);

    // 4. Build the state slice the node consumes
    let state = AnalystState {
        company_of_interest: args.ticker.to_uppercase(),
        trade_date: args.trade_date.clone(),
        messages: Vec::new(),
    };

    // 5. Run the node and emit the report
    let update = node.run(&state).await?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, &update.fundamentals_report)?;
            tracing::info!("Saved report to {}", path.display());
        }
        None => println!("{}", update.fundamentals_report),
    }

    Ok(())
}
