//! High-score persistence: one decimal integer in a plain text file.
//!
//! Reading never fails: a missing or unreadable file means "no high score yet".
//! Writing replaces the whole file; callers decide what a failed write means.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct HighScoreStore {
    path: PathBuf,
}

impl HighScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Stored high score, or 0 when there is none.
    pub fn load(&self) -> u32 {
        match fs::read_to_string(&self.path) {
            Ok(text) => match text.trim().parse::<u32>() {
                Ok(score) => {
                    log::debug!("loaded high score {} from {}", score, self.path.display());
                    score
                }
                Err(e) => {
                    log::warn!(
                        "ignoring unparseable high score file {}: {}",
                        self.path.display(),
                        e
                    );
                    0
                }
            },
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("no high score file at {}", self.path.display());
                0
            }
            Err(e) => {
                log::warn!("cannot read high score file {}: {}", self.path.display(), e);
                0
            }
        }
    }

    /// Overwrite the file with `score`.
    pub fn save(&self, score: u32) -> Result<()> {
        fs::write(&self.path, score.to_string())
            .with_context(|| format!("writing high score to {}", self.path.display()))
    }
}
