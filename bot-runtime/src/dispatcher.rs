//! Update dispatch loop with cooperative cancellation.
//!
//! One update is handled to completion before the next is awaited. The cancellation token is
//! checked at the top of every iteration, before the source, so a cancelled loop never takes
//! another update even if some are already queued. A handler that is running when cancellation
//! fires is not interrupted.

use hfbot_core::{InboundUpdate, MessageHandler, UpdateSource};
use tokio_util::sync::CancellationToken;
use tracing::{info, instrument};

/// Counts reported when the loop exits.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DispatchStats {
    /// Message updates passed to the handler.
    pub handled: u64,
    /// Other update kinds, dropped.
    pub ignored: u64,
}

/// Runs until `cancel` fires or `source` is exhausted.
#[instrument(skip_all)]
pub async fn run_dispatcher<S, H>(
    source: &mut S,
    handler: &H,
    cancel: CancellationToken,
) -> DispatchStats
where
    S: UpdateSource + ?Sized,
    H: MessageHandler + ?Sized,
{
    let mut stats = DispatchStats::default();
    info!("Start listening for updates");

    loop {
        let next = tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                info!("Cancellation requested, stop listening for updates");
                break;
            }
            update = source.next_update() => update,
        };

        let Some(update) = next else {
            info!("Update source exhausted, stop listening for updates");
            break;
        };

        if dispatch_update(update, handler).await {
            stats.handled += 1;
        } else {
            stats.ignored += 1;
        }
    }

    info!(handled = stats.handled, ignored = stats.ignored, "Dispatcher stopped");
    stats
}

/// Routes one update by kind. Returns true if it reached the handler.
///
/// Only new messages are handled; every other kind is dropped without a log line.
pub async fn dispatch_update<H>(update: InboundUpdate, handler: &H) -> bool
where
    H: MessageHandler + ?Sized,
{
    match update {
        InboundUpdate::Message(message) => {
            handler.handle_message(&message).await;
            true
        }
        InboundUpdate::Other { .. } => false,
    }
}
