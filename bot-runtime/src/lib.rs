//! # bot-runtime
//!
//! Update dispatch and message routing. [`run_dispatcher`] drains an [`hfbot_core::UpdateSource`]
//! until cancelled; [`LlmRouter`] answers free text through a [`hf_inference::TextGenerator`];
//! [`CopyRouter`] copies messages back without any model call.

mod commands;
mod dispatcher;
mod router;

pub use commands::{handle_command, Command};
pub use dispatcher::{dispatch_update, run_dispatcher, DispatchStats};
pub use router::{classify, CopyRouter, LlmRouter, Route, APOLOGY_REPLY, UNEXPECTED_MESSAGE_REPLY};
pub use tokio_util::sync::CancellationToken;
