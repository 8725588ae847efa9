use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use super::{Advisor, AdvisorError, Result};

/// First assistant message of every conversation.
pub const GREETING: &str = "Hello! I'm your AI Financial Advisor. I can help you with budgeting, \
     spending analysis, and financial planning. What would you like to know?";

pub const DEFAULT_REPLIES: [&str; 4] = [
    "Based on your spending patterns, I recommend reducing entertainment expenses by 15% this month. \
     Your grocery spending is on track.",
    "I've analyzed your transactions. You're spending 24% more on shopping compared to last month. \
     Would you like me to set up a budget alert?",
    "Your savings rate is currently 18% of income, which is above average. \
     Consider increasing your investment contributions.",
    "I noticed two flagged transactions. One is an unusual ATM withdrawal in Miami, and another is \
     a foreign transaction. Should I lock your card as a precaution?",
];

/// Canned-reply advisor: waits `delay`, then picks a reply uniformly at
/// random. The query text is never inspected.
pub struct SimulatedAdvisor {
    replies: Vec<String>,
    delay: Duration,
    rng: Mutex<StdRng>,
}

impl SimulatedAdvisor {
    pub fn new(replies: Vec<String>, delay: Duration) -> Result<Self> {
        Self::with_rng(replies, delay, StdRng::from_entropy())
    }

    /// Deterministic reply sequence for a given seed.
    pub fn with_seed(replies: Vec<String>, delay: Duration, seed: u64) -> Result<Self> {
        Self::with_rng(replies, delay, StdRng::seed_from_u64(seed))
    }

    /// The stock advisor with [`DEFAULT_REPLIES`].
    pub fn with_defaults(delay: Duration) -> Self {
        Self {
            replies: DEFAULT_REPLIES.iter().map(|s| s.to_string()).collect(),
            delay,
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    fn with_rng(replies: Vec<String>, delay: Duration, rng: StdRng) -> Result<Self> {
        if replies.is_empty() {
            return Err(AdvisorError::EmptyReplySet);
        }
        Ok(Self {
            replies,
            delay,
            rng: Mutex::new(rng),
        })
    }

    pub fn replies(&self) -> &[String] {
        &self.replies
    }

    /// Pick a reply without waiting.
    pub fn pick(&self) -> &str {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        // Non-empty by construction.
        self.replies
            .choose(&mut *rng)
            .map(String::as_str)
            .unwrap_or_default()
    }
}

#[async_trait]
impl Advisor for SimulatedAdvisor {
    fn name(&self) -> &str {
        "simulated"
    }

    #[tracing::instrument(level = "debug", skip_all)]
    async fn respond(&self, _query: &str) -> Result<String> {
        tokio::time::sleep(self.delay).await;
        let reply = self.pick().to_string();
        log::debug!("Simulated advisor replied with {} chars", reply.len());
        Ok(reply)
    }
}
