/// Display theme preference
///
/// The UI persists this under `THEME_STORAGE_KEY` as `"light"` or `"dark"`.
/// Anything else, including a missing value, reads back as `Light`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Preference key the UI stores the theme under
pub const THEME_STORAGE_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Resolve a stored preference (case-insensitive)
    pub fn from_preference(stored: Option<&str>) -> Theme {
        match stored.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Value to persist
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
