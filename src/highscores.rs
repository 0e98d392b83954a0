//! High score persistence
//!
//! A single text file holding one decimal integer. Reading never fails:
//! a missing, unreadable or garbled file counts as a high score of 0.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Default file name, relative to the working directory
pub const DEFAULT_HIGH_SCORE_FILE: &str = "highscore.txt";

/// Location of the high score file
#[derive(Debug, Clone)]
pub struct HighScoreFile {
    path: PathBuf,
}

impl HighScoreFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the stored high score (0 when missing or unparseable)
    pub fn load(&self) -> u64 {
        match fs::read_to_string(&self.path) {
            Ok(contents) => match parse_score(&contents) {
                Some(score) => {
                    log::info!("Loaded high score {} from {}", score, self.path.display());
                    score
                }
                None => {
                    log::warn!(
                        "Ignoring unreadable high score in {}",
                        self.path.display()
                    );
                    0
                }
            },
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::info!("No high score file at {}, starting fresh", self.path.display());
                0
            }
            Err(e) => {
                log::warn!("Could not read {}: {}", self.path.display(), e);
                0
            }
        }
    }

    /// Overwrite the file with `score`
    pub fn save(&self, score: u64) -> io::Result<()> {
        fs::write(&self.path, score.to_string())?;
        log::info!("High score {} saved to {}", score, self.path.display());
        Ok(())
    }
}

fn parse_score(contents: &str) -> Option<u64> {
    contents.trim().parse::<u64>().ok()
}
