//! Financial advisor chat.
//!
//! The UI talks to an [`Advisor`] through a single call,
//! `respond(query) -> reply`, and keeps the conversation in an
//! [`AdvisorSession`]. The only backend is [`SimulatedAdvisor`], which waits
//! a fixed delay and returns one canned reply picked at random.

mod session;
mod simulated;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use session::{AdvisorSession, ChatMessage, ChatRole, ResponderState, Submission};
pub use simulated::{SimulatedAdvisor, DEFAULT_REPLIES, GREETING};

/// Result type alias for advisor operations.
pub type Result<T> = std::result::Result<T, AdvisorError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AdvisorError {
    /// A canned-reply advisor was configured with no replies.
    #[error("Advisor reply set is empty")]
    EmptyReplySet,

    /// The backend could not produce a reply.
    #[error("Advisor backend error: {0}")]
    Backend(String),
}

/// Something that answers a user's question, eventually.
#[async_trait]
pub trait Advisor: Send + Sync {
    /// Short name shown in the status bar.
    fn name(&self) -> &str;

    /// Produce a reply for `query`. May take a while.
    async fn respond(&self, query: &str) -> Result<String>;
}

/// Which advisor implementation to construct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdvisorBackend {
    #[default]
    Simulated,
}

/// Build the configured advisor. Fails fast on an invalid reply set.
pub fn build_advisor(
    backend: AdvisorBackend,
    replies: Vec<String>,
    delay: Duration,
) -> Result<Arc<dyn Advisor>> {
    match backend {
        AdvisorBackend::Simulated => {
            let advisor = SimulatedAdvisor::new(replies, delay)?;
            log::info!(
                "Simulated advisor ready ({} replies, {}ms delay)",
                advisor.replies().len(),
                delay.as_millis()
            );
            Ok(Arc::new(advisor))
        }
    }
}
