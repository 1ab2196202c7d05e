//! Scoring results for one instrument and for the full ranking

use serde::{Deserialize, Serialize};

use super::instrument::Instrument;
use super::pitch_class::PitchClass;
use super::scale::Scale;

/// How well one instrument's scale covers a set of input notes
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ScoreResult {
    pub instrument: Instrument,
    pub root: PitchClass,
    pub scale: Scale,
    /// Input notes present in the scale, in input order
    pub matched_notes: Vec<PitchClass>,
    /// Input notes absent from the scale, in input order
    pub extra_notes: Vec<PitchClass>,
    pub match_count: usize,
    /// Rounded percentage in 0..=100; 0 when there were no input notes
    pub match_percent: u32,
}

impl ScoreResult {
    /// True when every input note is playable (and there was at least one)
    pub fn is_perfect(&self) -> bool {
        self.extra_notes.is_empty() && !self.matched_notes.is_empty()
    }
}

/// All twelve score results, best first
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(transparent)]
pub struct RankedResults(Vec<ScoreResult>);

impl RankedResults {
    pub(crate) fn from_sorted(results: Vec<ScoreResult>) -> Self {
        Self(results)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn best(&self) -> Option<&ScoreResult> {
        self.0.first()
    }

    pub fn as_slice(&self) -> &[ScoreResult] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &ScoreResult> {
        self.0.iter()
    }

    /// The first `count` results (clamped to the list length)
    pub fn top(&self, count: usize) -> &[ScoreResult] {
        &self.0[..count.min(self.0.len())]
    }
}
