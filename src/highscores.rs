//! High score leaderboard
//!
//! Persisted as JSON next to the settings file, tracks the top 10 runs.

use std::fs;
use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// A single high score entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HighScoreEntry {
    /// Points at the end of the run
    pub score: u64,
    /// Milliseconds survived
    pub survived_ms: u64,
    /// Unix timestamp (seconds) when achieved
    pub timestamp: u64,
}

/// High score leaderboard, sorted descending by score
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    /// Create empty leaderboard
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Check if a score qualifies for the leaderboard
    pub fn qualifies(&self, score: u64) -> bool {
        if score == 0 {
            return false;
        }
        if self.entries.len() < MAX_HIGH_SCORES {
            return true;
        }
        self.entries.last().map(|e| score > e.score).unwrap_or(true)
    }

    /// Get the rank a score would achieve (1-indexed, None if it doesn't qualify)
    pub fn potential_rank(&self, score: u64) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }
        let rank = self.entries.iter().position(|e| score > e.score);
        Some(rank.unwrap_or(self.entries.len()) + 1)
    }

    /// Add a new score to the leaderboard (if it qualifies).
    /// Returns the rank achieved (1-indexed) or None if it didn't qualify.
    pub fn add_score(&mut self, score: u64, survived_ms: u64, timestamp: u64) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }

        let entry = HighScoreEntry {
            score,
            survived_ms,
            timestamp,
        };

        let pos = self.entries.iter().position(|e| score > e.score);
        let rank = match pos {
            Some(i) => {
                self.entries.insert(i, entry);
                i + 1
            }
            None => {
                self.entries.push(entry);
                self.entries.len()
            }
        };

        self.entries.truncate(MAX_HIGH_SCORES);

        Some(rank)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the top score (if any)
    pub fn top_score(&self) -> Option<u64> {
        self.entries.first().map(|e| e.score)
    }

    /// Leaderboard file under the platform config directory
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("jetfall").join("highscores.json"))
    }

    /// Load the leaderboard, starting fresh if missing or unreadable
    pub fn load() -> Self {
        let Some(path) = Self::path() else {
            return Self::new();
        };
        match fs::read_to_string(&path) {
            Ok(json) => match serde_json::from_str::<HighScores>(&json) {
                Ok(scores) => {
                    log::info!("loaded {} high scores", scores.entries.len());
                    scores
                }
                Err(err) => {
                    log::warn!("unparseable high score file {}: {err}", path.display());
                    Self::new()
                }
            },
            Err(err) if err.kind() == io::ErrorKind::NotFound => Self::new(),
            Err(err) => {
                log::warn!("failed to read {}: {err}", path.display());
                Self::new()
            }
        }
    }

    /// Save the leaderboard next to the settings file
    pub fn save(&self) -> io::Result<()> {
        let Some(path) = Self::path() else {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                "no config directory",
            ));
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(io::Error::other)?;
        fs::write(&path, json)?;
        log::info!("high scores saved ({} entries)", self.entries.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_score_never_qualifies() {
        let scores = HighScores::new();
        assert!(!scores.qualifies(0));
        assert!(scores.qualifies(1));
    }

    #[test]
    fn test_add_score_keeps_descending_order_and_cap() {
        let mut scores = HighScores::new();
        for s in 1..=15u64 {
            scores.add_score(s * 100, s * 1000, s);
        }
        assert_eq!(scores.entries.len(), MAX_HIGH_SCORES);
        assert_eq!(scores.top_score(), Some(1500));
        assert!(scores.entries.windows(2).all(|w| w[0].score >= w[1].score));
        // The weakest surviving entry is 600; 500 no longer qualifies
        assert!(!scores.qualifies(500));
    }

    #[test]
    fn test_rank_reporting() {
        let mut scores = HighScores::new();
        scores.add_score(300, 300, 0);
        scores.add_score(100, 100, 0);
        assert_eq!(scores.potential_rank(200), Some(2));
        assert_eq!(scores.add_score(200, 200, 0), Some(2));
    }
}
