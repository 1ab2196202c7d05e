//! Note text parser
//!
//! Turns free-form text such as `"Bb, d  g#"` into an `InputNoteSet`.
//! Parsing never fails: tokens that do not name one of the twelve pitch
//! classes are dropped. `parse_notes_detailed` keeps a per-token record for
//! callers that need to tell "nothing typed" apart from "nothing valid".

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::models::note_set::InputNoteSet;
use crate::models::pitch_class::PitchClass;
use crate::utils::pitch_utils::normalize_token;

/// Runs of commas and/or whitespace separate notes
static SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"[,\s]+").expect("separator pattern is valid"));

/// What happened to one raw token
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(tag = "status", content = "pitch", rename_all = "snake_case")]
pub enum TokenOutcome {
    /// First occurrence of a valid note
    Accepted(PitchClass),
    /// Valid note already seen earlier in the text
    Duplicate(PitchClass),
    /// Not a recognizable note name
    Rejected,
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct TokenDiagnostic {
    pub token: String,
    pub outcome: TokenOutcome,
}

/// Parsed notes plus a diagnostic for every raw token, in text order
#[derive(Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct ParseReport {
    pub notes: InputNoteSet,
    pub tokens: Vec<TokenDiagnostic>,
}

impl ParseReport {
    pub fn rejected_tokens(&self) -> impl Iterator<Item = &str> {
        self.tokens
            .iter()
            .filter(|t| t.outcome == TokenOutcome::Rejected)
            .map(|t| t.token.as_str())
    }

    pub fn has_rejections(&self) -> bool {
        self.rejected_tokens().next().is_some()
    }
}

/// Split text into raw note tokens, discarding empties
pub fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    SEPARATOR.split(text).filter(|token| !token.is_empty())
}

/// Parse text into an ordered, deduplicated note set
pub fn parse_notes(text: &str) -> InputNoteSet {
    parse_notes_detailed(text).notes
}

/// Parse text and report the outcome of every token
pub fn parse_notes_detailed(text: &str) -> ParseReport {
    let mut report = ParseReport::default();

    for token in tokenize(text) {
        let outcome = match normalize_token(token) {
            Some(pitch) if report.notes.insert(pitch) => TokenOutcome::Accepted(pitch),
            Some(pitch) => TokenOutcome::Duplicate(pitch),
            None => {
                log::trace!("dropping unrecognized note token '{}'", token);
                TokenOutcome::Rejected
            }
        };
        report.tokens.push(TokenDiagnostic {
            token: token.to_string(),
            outcome,
        });
    }

    report
}
