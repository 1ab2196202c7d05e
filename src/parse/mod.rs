//! Parsing module for the flute finder
//!
//! Converts free-form note text into canonical pitch classes.

pub mod notes;

// Re-export commonly used types
pub use notes::*;
