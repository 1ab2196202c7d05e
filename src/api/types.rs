//! Shared types for the WASM API
//!
//! Result shapes that bundle core values for a single JS round trip.

use crate::models::{FinderState, ScoreResult, Theme};

/// One page of the recommender: the revealed results plus the state to pass
/// back for the next "show more"
#[derive(serde::Serialize, Clone, Debug)]
pub struct FinderPage {
    pub results: Vec<ScoreResult>,
    pub state: FinderState,
    pub has_more: bool,
    pub total: usize,
}

/// Theme plus the key/value pair the UI should persist
#[derive(serde::Serialize, Clone, Debug)]
pub struct ThemeChoice {
    pub theme: Theme,
    pub storage_key: &'static str,
    pub stored_value: &'static str,
}

impl From<Theme> for ThemeChoice {
    fn from(theme: Theme) -> Self {
        Self {
            theme,
            storage_key: crate::models::theme::THEME_STORAGE_KEY,
            stored_value: theme.as_str(),
        }
    }
}
