//! Pitch table helpers shared by the note parser and `PitchClass::from_str`
//!
//! Covers the flat → sharp map and single-token normalization
//! (letter casing, modifier casing, unicode accidentals).

use crate::models::pitch_class::PitchClass;

/// Flat spellings and their canonical equivalents.
/// `Fb` and `Cb` land on naturals, not sharps.
pub const FLAT_TO_SHARP: [(&str, &str); 7] = [
    ("Db", "C#"),
    ("Eb", "D#"),
    ("Fb", "E"),
    ("Gb", "F#"),
    ("Ab", "G#"),
    ("Bb", "A#"),
    ("Cb", "B"),
];

/// Canonical spelling for a flat name, if it is one
pub fn flat_to_sharp(flat: &str) -> Option<&'static str> {
    FLAT_TO_SHARP
        .iter()
        .find(|(f, _)| *f == flat)
        .map(|(_, sharp)| *sharp)
}

/// Fold unicode accidentals into their ASCII forms
fn ascii_accidental(c: char) -> char {
    match c {
        '♯' => '#',
        '♭' => 'b',
        other => other,
    }
}

/// Rewrite a raw token into its spelled form: letter uppercased,
/// modifier lowercased (`"bB"` → `"Bb"`, `"c#"` → `"C#"`).
/// Returns `None` unless the token starts with an ASCII letter; only the
/// modifier characters after it are treated as accidentals.
pub fn spell_token(token: &str) -> Option<String> {
    let mut chars = token.chars();
    let letter = chars.next().filter(|c| c.is_ascii_alphabetic())?;
    let mut spelled = letter.to_ascii_uppercase().to_string();
    spelled.extend(chars.map(ascii_accidental).flat_map(|c| c.to_lowercase()));
    Some(spelled)
}

/// Normalize a single note token to a pitch class.
/// Returns `None` for anything that is not a natural, a sharp from the
/// table, or a flat with a table entry.
pub fn normalize_token(token: &str) -> Option<PitchClass> {
    let spelled = spell_token(token)?;
    let canonical = if spelled.chars().count() == 2 && spelled.ends_with('b') {
        flat_to_sharp(&spelled)?
    } else {
        spelled.as_str()
    };
    PitchClass::from_canonical(canonical)
}
