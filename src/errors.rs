//! Error types for the flute finder core
//!
//! Only identifier resolution can fail. Parsing, scoring and ranking are
//! total: bad tokens are dropped and empty input scores 0%.

use thiserror::Error;

/// A pitch class or instrument name that is not one of the 12 table entries
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("Unknown pitch class: '{0}'. Expected one of: C, C#, D, D#, E, F, F#, G, G#, A, A#, B (flats accepted)")]
    UnknownPitchClass(String),

    /// Seven notes that are not the major scale on their first note
    #[error("Not a major scale: [{0}]")]
    NotMajorScale(String),
}
