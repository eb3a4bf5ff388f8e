//! BubbleChat: a floating chat widget.
//!
//! The core (`session`, `history`, `storage`, `prompt`, `client`) has no UI dependency and
//! runs on any target. The Dioxus components live in `ui` and `views` behind the `ui`
//! feature.

pub mod client;
pub mod config;
pub mod error;
pub mod history;
pub mod ids;
pub mod prompt;
pub mod session;
pub mod storage;
pub mod types;

#[cfg(feature = "ui")]
pub mod ui;
#[cfg(feature = "ui")]
pub mod views;

pub use client::{ChatBackend, FALLBACK_REPLY, HttpBackend, dispatch};
pub use config::WidgetConfig;
pub use error::{ChatError, ChatResult};
pub use history::ChatHistory;
pub use session::{ChatSession, PanelState, PendingReply, SubmitOutcome};
pub use types::{Author, Message};
