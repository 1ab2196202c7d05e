//! Ordered, duplicate-free set of input notes

use serde::{Deserialize, Serialize};

use super::pitch_class::PitchClass;

/// Notes parsed from user text, in first-seen order with no repeats.
/// Order only matters for display; scoring treats this as a set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<PitchClass>", into = "Vec<PitchClass>")]
pub struct InputNoteSet(Vec<PitchClass>);

impl InputNoteSet {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Insert a note unless it is already present.
    /// Returns `true` if the note was added.
    pub fn insert(&mut self, pitch: PitchClass) -> bool {
        if self.0.contains(&pitch) {
            return false;
        }
        self.0.push(pitch);
        true
    }

    pub fn contains(&self, pitch: PitchClass) -> bool {
        self.0.contains(&pitch)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PitchClass> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[PitchClass] {
        &self.0
    }

    /// Canonical names joined with `separator` (e.g. `"A# C# F"`)
    pub fn join(&self, separator: &str) -> String {
        self.0
            .iter()
            .map(|pc| pc.as_str())
            .collect::<Vec<_>>()
            .join(separator)
    }
}

impl FromIterator<PitchClass> for InputNoteSet {
    fn from_iter<I: IntoIterator<Item = PitchClass>>(iter: I) -> Self {
        let mut set = InputNoteSet::new();
        for pitch in iter {
            set.insert(pitch);
        }
        set
    }
}

impl From<Vec<PitchClass>> for InputNoteSet {
    fn from(notes: Vec<PitchClass>) -> Self {
        notes.into_iter().collect()
    }
}

impl From<InputNoteSet> for Vec<PitchClass> {
    fn from(set: InputNoteSet) -> Self {
        set.0
    }
}

impl<'a> IntoIterator for &'a InputNoteSet {
    type Item = &'a PitchClass;
    type IntoIter = std::slice::Iter<'a, PitchClass>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use PitchClass::*;

    #[test]
    fn test_insert_dedups_and_keeps_order() {
        let mut set = InputNoteSet::new();
        assert!(set.insert(G));
        assert!(set.insert(C));
        assert!(!set.insert(G));
        assert_eq!(set.as_slice(), &[G, C]);
    }

    #[test]
    fn test_from_iter() {
        let set: InputNoteSet = vec![As, Cs, As, F].into_iter().collect();
        assert_eq!(set.as_slice(), &[As, Cs, F]);
        assert_eq!(set.join(" "), "A# C# F");
    }

    #[test]
    fn test_deserialize_drops_duplicates() {
        let set: InputNoteSet = serde_json::from_str(r#"["D","G","D"]"#).unwrap();
        assert_eq!(set.as_slice(), &[D, G]);
        assert_eq!(serde_json::to_string(&set).unwrap(), r#"["D","G"]"#);
    }

    #[test]
    fn test_empty() {
        let set = InputNoteSet::default();
        assert!(set.is_empty());
        assert_eq!(set.join(" "), "");
    }
}
