//! Instrument identity for the twelve transposing flutes
//!
//! A flute is labeled by its 4th major-scale degree, not by its root. An
//! `A` flute plays the E major scale; a `C` flute plays G major.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::pitch_class::PitchClass;
use super::scale::Scale;
use crate::errors::ResolveError;

/// Semitones from the sounding root up to the instrument's name
pub const NAME_DEGREE_OFFSET: i32 = 5;

/// One of the twelve flutes, identified by the pitch class it is named after
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Instrument {
    name: PitchClass,
}

impl Instrument {
    pub fn new(name: PitchClass) -> Self {
        Self { name }
    }

    /// All twelve instruments in enumeration order (named C, C#, ... B)
    pub fn all() -> [Instrument; 12] {
        PitchClass::ALL.map(Instrument::new)
    }

    /// Resolve an instrument from a user-facing name such as `"A"` or `"Bb"`
    pub fn from_name(name: &str) -> Result<Self, ResolveError> {
        name.parse()
    }

    /// The naming pitch class (the 4th scale degree)
    pub fn name(&self) -> PitchClass {
        self.name
    }

    /// The sounding root, five semitones below the name
    pub fn root(&self) -> PitchClass {
        self.name.transpose(-NAME_DEGREE_OFFSET)
    }

    /// The major scale this flute plays
    pub fn scale(&self) -> Scale {
        Scale::major(self.root())
    }
}

impl From<PitchClass> for Instrument {
    fn from(name: PitchClass) -> Self {
        Self::new(name)
    }
}

impl FromStr for Instrument {
    type Err = ResolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<PitchClass>().map(Instrument::new)
    }
}

impl fmt::Display for Instrument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
