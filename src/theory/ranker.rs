//! Ranking all twelve instruments for one set of notes

use std::cmp::Reverse;

use crate::models::instrument::Instrument;
use crate::models::note_set::InputNoteSet;
use crate::models::score::RankedResults;

use super::matcher::score_instrument;

/// Score every instrument and order best first.
///
/// Keys: `match_percent` descending, then `match_count` descending.
/// Results start in enumeration order (C, C#, ... B) and the sort is
/// stable, so exact ties stay in that order.
pub fn rank_instruments(notes: &InputNoteSet) -> RankedResults {
    let mut results: Vec<_> = Instrument::all()
        .iter()
        .map(|&instrument| score_instrument(instrument, notes))
        .collect();

    results.sort_by_key(|r| (Reverse(r.match_percent), Reverse(r.match_count)));

    if let Some(best) = results.first() {
        log::debug!(
            "ranked {} instruments for [{}]; best {} at {}%",
            results.len(),
            notes.join(" "),
            best.instrument,
            best.match_percent
        );
    }

    RankedResults::from_sorted(results)
}
