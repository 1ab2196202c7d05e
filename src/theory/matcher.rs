//! Scoring one instrument against a set of input notes

use crate::errors::ResolveError;
use crate::models::instrument::Instrument;
use crate::models::note_set::InputNoteSet;
use crate::models::score::ScoreResult;

/// `round(100 * matched / total)` with halves rounded up; 0 when `total` is 0
pub fn match_percent(matched: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((200 * matched + total) / (2 * total)) as u32
}

/// Classify every input note as matched or extra for one instrument
pub fn score_instrument(instrument: Instrument, notes: &InputNoteSet) -> ScoreResult {
    let scale = instrument.scale();
    let (matched_notes, extra_notes): (Vec<_>, Vec<_>) =
        notes.iter().copied().partition(|&pitch| scale.contains(pitch));
    let match_count = matched_notes.len();

    ScoreResult {
        instrument,
        root: scale.root(),
        scale,
        match_percent: match_percent(match_count, notes.len()),
        matched_notes,
        extra_notes,
        match_count,
    }
}

/// Score an instrument given by name, failing only if the name is unknown
pub fn score_named(name: &str, notes: &InputNoteSet) -> Result<ScoreResult, ResolveError> {
    let instrument = Instrument::from_name(name)?;
    Ok(score_instrument(instrument, notes))
}
