//! Process configuration read from the environment.
//!
//! - `FLAPPY_HIGH_SCORE_PATH`: high-score file (default: `highscore.txt`)
//! - `FLAPPY_LOG_PATH`: write log records to this file (default: logging off)
//! - `FLAPPY_SEED`: RNG seed for reproducible runs (default: random)

use std::path::PathBuf;

pub const DEFAULT_HIGH_SCORE_PATH: &str = "highscore.txt";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub high_score_path: PathBuf,
    pub log_path: Option<PathBuf>,
    pub seed: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            high_score_path: PathBuf::from(DEFAULT_HIGH_SCORE_PATH),
            log_path: None,
            seed: None,
        }
    }
}

impl AppConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let high_score_path = get("FLAPPY_HIGH_SCORE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_HIGH_SCORE_PATH));
        let log_path = get("FLAPPY_LOG_PATH").map(PathBuf::from);
        let seed = get("FLAPPY_SEED").and_then(|s| s.parse().ok());

        Self {
            high_score_path,
            log_path,
            seed,
        }
    }
}
