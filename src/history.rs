//! Run leaderboard
//!
//! In-memory only; tracks the top 10 completed runs of this session.

use serde::{Deserialize, Serialize};

/// Maximum number of runs to keep
pub const MAX_RUNS: usize = 10;

/// A single completed run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunEntry {
    /// Run number within the session (1-based)
    pub run: u32,
    pub score: u64,
    /// Ticks survived
    pub ticks: usize,
}

/// Leaderboard of completed runs, best first
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunHistory {
    pub entries: Vec<RunEntry>,
    total_runs: u32,
}

impl RunHistory {
    /// Create empty leaderboard
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a score would make the leaderboard
    pub fn qualifies(&self, score: u64) -> bool {
        if self.entries.len() < MAX_RUNS {
            return true;
        }
        self.entries.last().is_none_or(|e| score > e.score)
    }

    /// Record a finished run.
    /// Returns the rank achieved (1-indexed) or None if it didn't qualify
    pub fn add_run(&mut self, run: u32, score: u64, ticks: usize) -> Option<usize> {
        self.total_runs += 1;
        if !self.qualifies(score) {
            return None;
        }

        let entry = RunEntry { run, score, ticks };

        // Ties keep the earlier run ahead
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

        self.entries.truncate(MAX_RUNS);

        Some(rank)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Best score this session (if any)
    pub fn best_score(&self) -> Option<u64> {
        self.entries.first().map(|e| e.score)
    }

    /// Runs completed, including those that fell off the board
    pub fn total_runs(&self) -> u32 {
        self.total_runs
    }
}
