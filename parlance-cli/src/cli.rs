use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "parlance",
    version,
    about = "Intent-routed chat front-end for a local language-model endpoint"
)]
pub struct Cli {
    /// Config file path (default: parlance.toml). The built-in defaults
    /// are used when no path is given and the default file does not exist.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (debug level).
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Start an interactive chat session.
    Chat,
    /// Execute a single turn and print the response.
    Ask(AskArgs),
    /// Load and validate the config, then exit.
    Validate,
}

#[derive(Debug, Args)]
pub struct AskArgs {
    /// The user message for this turn.
    pub message: String,

    /// Emit a stable JSON envelope instead of plain text.
    #[arg(long)]
    pub json: bool,
}
