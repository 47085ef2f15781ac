mod cli;
mod config;
mod output;
mod repl;
mod telemetry;

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use parlance_engine::executor::{TurnExecutor, TurnOutcome};
use parlance_engine::handler::HandlerSet;
use parlance_engine::llm::{GenerationParams, HttpCompletionClient};
use parlance_engine::session::ChatSession;

use cli::{AskArgs, Cli, Command};

const DEFAULT_CONFIG_PATH: &str = "parlance.toml";

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    telemetry::init_tracing(cli.verbose);

    let explicit = cli.config.is_some();
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| Path::new(DEFAULT_CONFIG_PATH).to_path_buf());

    let config = config::load_config(&config_path, explicit)?;
    config::validate_config(&config)?;

    match cli.command {
        Command::Validate => {
            println!("config is valid");
            Ok(())
        }
        Command::Chat => {
            let session = build_session(&config)?;
            info!(
                session_id = %session.id(),
                endpoint = %config.llm.base_url,
                model = %config.llm.model,
                "starting chat session"
            );
            repl::run(session).await
        }
        Command::Ask(args) => run_ask(&config, args).await,
    }
}

async fn run_ask(config: &parlance_core::config::ParlanceConfig, args: AskArgs) -> Result<()> {
    let mut session = build_session(config)?;

    match session.submit(&args.message).await {
        TurnOutcome::Replied { intent, text } => {
            if args.json {
                let envelope = serde_json::json!({
                    "ok": true,
                    "intent": intent,
                    "response": text,
                });
                println!("{envelope}");
            } else {
                println!("{text}");
            }
            Ok(())
        }
        TurnOutcome::Skipped => {
            anyhow::bail!("message is empty");
        }
    }
}

fn build_session(config: &parlance_core::config::ParlanceConfig) -> Result<ChatSession> {
    let client = HttpCompletionClient::new(&config.llm)
        .context("building completion client")?;
    let handlers = HandlerSet::new(Arc::new(client), GenerationParams::from(&config.llm));
    Ok(ChatSession::new(TurnExecutor::new(handlers)))
}
