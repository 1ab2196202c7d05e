//! Utility modules for the flute finder
//!
//! Helpers shared across the models and the parser.

pub mod pitch_utils;

pub use pitch_utils::*;
