/// The twelve chromatic pitch classes, canonically spelled with sharps
///
/// Identity is positional: `C` is index 0 and each following variant is one
/// semitone higher. Flat spellings are never stored; they are folded into
/// their sharp (or natural) equivalent by the note parser.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::ResolveError;

/// Canonical note names, indexed by semitone above C
pub const NOTE_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PitchClass {
    C,
    #[serde(rename = "C#")]
    Cs,
    D,
    #[serde(rename = "D#")]
    Ds,
    E,
    F,
    #[serde(rename = "F#")]
    Fs,
    G,
    #[serde(rename = "G#")]
    Gs,
    A,
    #[serde(rename = "A#")]
    As,
    B,
}

impl PitchClass {
    /// All pitch classes in enumeration order (ascending from C)
    pub const ALL: [PitchClass; 12] = [
        PitchClass::C,
        PitchClass::Cs,
        PitchClass::D,
        PitchClass::Ds,
        PitchClass::E,
        PitchClass::F,
        PitchClass::Fs,
        PitchClass::G,
        PitchClass::Gs,
        PitchClass::A,
        PitchClass::As,
        PitchClass::B,
    ];

    /// Semitones above C (0-11)
    pub fn index(self) -> usize {
        self as usize
    }

    /// Pitch class for any integer semitone count, wrapped into 0-11
    pub fn from_semitones(semitones: i32) -> PitchClass {
        PitchClass::ALL[wrap_semitones(semitones)]
    }

    /// Move up (positive) or down (negative) by a number of semitones
    pub fn transpose(self, semitones: i32) -> PitchClass {
        PitchClass::from_semitones(self.index() as i32 + semitones)
    }

    /// Canonical (sharp) spelling
    pub fn as_str(&self) -> &'static str {
        NOTE_NAMES[self.index()]
    }

    /// Look up a canonical spelling exactly (`"C#"`, never `"Db"` or `"c#"`)
    pub fn from_canonical(name: &str) -> Option<PitchClass> {
        NOTE_NAMES
            .iter()
            .position(|&n| n == name)
            .map(|i| PitchClass::ALL[i])
    }
}

/// Normalize any semitone offset into 0-11, regardless of sign
pub fn wrap_semitones(semitones: i32) -> usize {
    ((semitones % 12 + 12) % 12) as usize
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PitchClass {
    type Err = ResolveError;

    /// Resolve a single note name, accepting the same spellings the note
    /// parser accepts (any case, flats, `♯`/`♭`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::utils::pitch_utils::normalize_token(s.trim())
            .ok_or_else(|| ResolveError::UnknownPitchClass(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_matches_note_names() {
        for (i, pc) in PitchClass::ALL.iter().enumerate() {
            assert_eq!(pc.index(), i);
            assert_eq!(pc.as_str(), NOTE_NAMES[i]);
        }
    }

    #[test]
    fn test_wrap_semitones() {
        assert_eq!(wrap_semitones(0), 0);
        assert_eq!(wrap_semitones(12), 0);
        assert_eq!(wrap_semitones(-1), 11);
        assert_eq!(wrap_semitones(-5), 7);
        assert_eq!(wrap_semitones(-17), 7);
        assert_eq!(wrap_semitones(25), 1);
    }

    #[test]
    fn test_transpose() {
        assert_eq!(PitchClass::C.transpose(-5), PitchClass::G);
        assert_eq!(PitchClass::A.transpose(-5), PitchClass::E);
        assert_eq!(PitchClass::B.transpose(1), PitchClass::C);
        assert_eq!(PitchClass::E.transpose(24), PitchClass::E);
    }

    #[test]
    fn test_from_canonical() {
        assert_eq!(PitchClass::from_canonical("C#"), Some(PitchClass::Cs));
        assert_eq!(PitchClass::from_canonical("B"), Some(PitchClass::B));
        assert_eq!(PitchClass::from_canonical("Db"), None);
        assert_eq!(PitchClass::from_canonical("c#"), None);
        assert_eq!(PitchClass::from_canonical(""), None);
    }

    #[test]
    fn test_from_str_lenient() {
        assert_eq!("Db".parse::<PitchClass>().unwrap(), PitchClass::Cs);
        assert_eq!("f#".parse::<PitchClass>().unwrap(), PitchClass::Fs);
        assert_eq!(" a ".parse::<PitchClass>().unwrap(), PitchClass::A);
        assert_eq!(
            "H".parse::<PitchClass>(),
            Err(ResolveError::UnknownPitchClass("H".to_string()))
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", PitchClass::Gs), "G#");
        assert_eq!(format!("{}", PitchClass::F), "F");
    }

    #[test]
    fn test_serde_uses_canonical_names() {
        let json = serde_json::to_string(&PitchClass::As).unwrap();
        assert_eq!(json, "\"A#\"");

        let parsed: PitchClass = serde_json::from_str("\"D#\"").unwrap();
        assert_eq!(parsed, PitchClass::Ds);
    }
}
