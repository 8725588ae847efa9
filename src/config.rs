use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::advisor::{AdvisorBackend, DEFAULT_REPLIES};
use crate::core::logging;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub tui: TuiConfig,
    pub advisor: AdvisorConfig,
    pub logging: LoggingConfig,
}

/// TUI-specific configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    /// Tick interval in milliseconds for the event loop.
    pub tick_rate_ms: u64,
    /// Enable mouse support in the terminal.
    pub mouse_enabled: bool,
}

/// Advisor chat configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvisorConfig {
    pub backend: AdvisorBackend,
    /// Artificial delay before a reply appears.
    pub reply_delay_ms: u64,
    /// Override the canned replies. Must not be empty when present.
    pub replies: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter used when `RUST_LOG` is unset.
    pub level: String,
    /// Override the default log directory.
    pub dir: Option<PathBuf>,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 50,
            mouse_enabled: false,
        }
    }
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            backend: AdvisorBackend::Simulated,
            reply_delay_ms: 1500,
            replies: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            dir: None,
        }
    }
}

impl AdvisorConfig {
    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms)
    }

    /// Configured replies, or the stock set.
    pub fn reply_set(&self) -> Vec<String> {
        match &self.replies {
            Some(replies) => replies.clone(),
            None => DEFAULT_REPLIES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl TuiConfig {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(1))
    }
}

impl LoggingConfig {
    pub fn log_dir(&self) -> PathBuf {
        self.dir.clone().unwrap_or_else(logging::default_log_dir)
    }
}

impl AppConfig {
    /// Load configuration from `~/.config/financeai/config.toml`.
    /// Returns `Default` if the file is missing or unparseable.
    pub fn load() -> Self {
        let config_path = Self::config_path();
        match std::fs::read_to_string(&config_path) {
            Ok(contents) => Self::parse(&contents, &config_path.display().to_string()),
            Err(_) => {
                log::debug!(
                    "No config file at {}; using defaults",
                    config_path.display()
                );
                Self::default()
            }
        }
    }

    fn parse(contents: &str, origin: &str) -> Self {
        match toml::from_str(contents) {
            Ok(config) => {
                log::info!("Loaded config from {origin}");
                config
            }
            Err(e) => {
                log::warn!("Failed to parse config at {origin}: {e}; using defaults");
                Self::default()
            }
        }
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .map(|d| d.join("financeai").join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }
}
