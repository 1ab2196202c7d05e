//! Finder pagination state
//!
//! The recommender reveals the ranking a page at a time. The count lives
//! with the caller: every transition takes a state and returns a new one,
//! so the core never holds it.

use serde::{Deserialize, Serialize};

use super::score::{RankedResults, ScoreResult};

/// Results revealed per "show more" when the caller does not configure it
pub const DEFAULT_PAGE_SIZE: usize = 3;

/// Upper bound on revealed results (one per instrument)
pub const MAX_RESULTS: usize = 12;

/// Runtime options the UI may pass in; missing fields use defaults
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct FinderConfig {
    pub page_size: usize,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// How many ranked results the finder currently shows
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct FinderState {
    pub revealed: usize,
    pub page_size: usize,
}

impl FinderState {
    /// Fresh state for a new query. A zero page size is treated as 1.
    pub fn new(page_size: usize) -> Self {
        let page_size = page_size.max(1);
        Self {
            revealed: page_size.min(MAX_RESULTS),
            page_size,
        }
    }

    pub fn from_config(config: &FinderConfig) -> Self {
        Self::new(config.page_size)
    }

    /// Back to the first page, keeping the page size
    pub fn reset(&self) -> Self {
        Self::new(self.page_size)
    }

    /// Reveal one more page, never past `MAX_RESULTS`
    pub fn reveal_more(&self) -> Self {
        let page_size = self.page_size.max(1);
        Self {
            revealed: self.revealed.saturating_add(page_size).min(MAX_RESULTS),
            page_size,
        }
    }

    pub fn has_more(&self) -> bool {
        self.revealed < MAX_RESULTS
    }

    /// The revealed prefix of a ranking
    pub fn visible<'a>(&self, ranked: &'a RankedResults) -> &'a [ScoreResult] {
        ranked.top(self.revealed)
    }
}

impl Default for FinderState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}
