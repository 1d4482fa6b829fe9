//! CLI parser.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "hfbot")]
#[command(about = "Telegram bot answering with a Hugging Face text2text model", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Answer messages with the inference model (config from env; token overrides TELEGRAM_BOT_API_KEY).
    Run {
        #[arg(short, long)]
        token: Option<String>,
    },
    /// Copy every message back to its chat; no model call.
    Copy {
        #[arg(short, long)]
        token: Option<String>,
    },
}

impl Commands {
    pub fn token(&self) -> Option<String> {
        match self {
            Commands::Run { token } | Commands::Copy { token } => token.clone(),
        }
    }
}
