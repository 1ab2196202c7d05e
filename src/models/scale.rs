//! Seven-degree major scales
//!
//! A `Scale` always starts at its root and climbs through the major
//! interval pattern, so degree order is also rotation order mod 12.

use serde::{Deserialize, Serialize};

use super::pitch_class::PitchClass;
use crate::errors::ResolveError;

/// Semitones above the root for degrees 1-7 of a major scale
pub const MAJOR_INTERVALS: [i32; 7] = [0, 2, 4, 5, 7, 9, 11];

/// Deserializing checks the notes form the major scale on their first note,
/// so a `Scale` from JS upholds the same invariant as `Scale::major`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[PitchClass; 7]", into = "[PitchClass; 7]")]
pub struct Scale([PitchClass; 7]);

impl Scale {
    /// Build the major scale on `root`
    pub fn major(root: PitchClass) -> Self {
        Scale(MAJOR_INTERVALS.map(|interval| root.transpose(interval)))
    }

    pub fn root(&self) -> PitchClass {
        self.0[0]
    }

    /// Pitch class at a 1-based scale degree, `None` outside 1-7
    pub fn degree(&self, degree: usize) -> Option<PitchClass> {
        degree.checked_sub(1).and_then(|i| self.0.get(i)).copied()
    }

    pub fn contains(&self, pitch: PitchClass) -> bool {
        self.0.contains(&pitch)
    }

    pub fn notes(&self) -> &[PitchClass; 7] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &PitchClass> {
        self.0.iter()
    }
}

impl TryFrom<[PitchClass; 7]> for Scale {
    type Error = ResolveError;

    fn try_from(notes: [PitchClass; 7]) -> Result<Self, Self::Error> {
        let scale = Scale::major(notes[0]);
        if scale.0 != notes {
            let names: Vec<&str> = notes.iter().map(|pc| pc.as_str()).collect();
            return Err(ResolveError::NotMajorScale(names.join(", ")));
        }
        Ok(scale)
    }
}

impl From<Scale> for [PitchClass; 7] {
    fn from(scale: Scale) -> Self {
        scale.0
    }
}

impl std::ops::Index<usize> for Scale {
    type Output = PitchClass;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}
