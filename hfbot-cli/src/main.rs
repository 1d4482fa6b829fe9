//! hfbot CLI: long-polls Telegram and answers with a Hugging Face model, or copies messages back.

mod cli;

use std::sync::Arc;

use anyhow::Result;
use bot_runtime::{run_dispatcher, CancellationToken, CopyRouter, LlmRouter};
use clap::Parser;
use hf_inference::{InferenceClient, InferenceConfig};
use hfbot_core::{init_tracing, MessageHandler};
use hfbot_telegram::{build_teloxide_bot, verify_bot, LongPollingSource, TelegramBotAdapter, TelegramConfig};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let telegram = TelegramConfig::from_env(cli.command.token())?;
    let inference = match cli.command {
        Commands::Run { .. } => Some(InferenceConfig::from_env()?),
        Commands::Copy { .. } => None,
    };

    init_tracing(&telegram.log_file)?;
    info!(start_time = %chrono::Utc::now().to_rfc3339(), "Starting hfbot");

    let teloxide_bot = build_teloxide_bot(&telegram)?;
    verify_bot(&teloxide_bot).await?;

    let bot = Arc::new(TelegramBotAdapter::new(teloxide_bot.clone()));
    let handler: Arc<dyn MessageHandler> = match inference {
        Some(config) => {
            info!(model = %config.model, base_url = %config.base_url, "Answering with inference model");
            let client = InferenceClient::with_base_url(config.api_token, config.base_url)
                .with_options(config.options);
            Arc::new(LlmRouter::new(
                bot,
                Arc::new(client),
                config.model,
                config.parameters,
            ))
        }
        None => {
            info!("Copying messages back");
            Arc::new(CopyRouter::new(bot))
        }
    };

    let mut source = LongPollingSource::new(teloxide_bot, telegram.poll_timeout_secs);
    let cancel = CancellationToken::new();
    let dispatcher = {
        let cancel = cancel.clone();
        tokio::spawn(async move { run_dispatcher(&mut source, handler.as_ref(), cancel).await })
    };

    info!("Start listening for updates. Press enter to stop");
    wait_for_shutdown().await;
    cancel.cancel();

    match dispatcher.await {
        Ok(stats) => info!(handled = stats.handled, ignored = stats.ignored, "Shutdown complete"),
        Err(e) => warn!(error = %e, "Dispatcher task failed"),
    }
    Ok(())
}

/// Resolves on the first line (or EOF) on stdin, or on Ctrl-C.
async fn wait_for_shutdown() {
    let mut line = String::new();
    let mut stdin = BufReader::new(tokio::io::stdin());
    tokio::select! {
        read = stdin.read_line(&mut line) => {
            if let Err(e) = read {
                warn!(error = %e, "Failed to read stdin");
            }
            info!("Stop requested from stdin");
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Ctrl-C received");
        }
    }
}
