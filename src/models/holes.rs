//! Finger-hole layout types for the hole-diagram renderer

use serde::Serialize;

use super::pitch_class::PitchClass;
use super::score::ScoreResult;

/// Number of holes on every flute in the family
pub const HOLE_COUNT: usize = 7;

/// Hole labels from the blow end down to the root, as sargam degrees
pub const HOLE_LABELS: [&str; HOLE_COUNT] = ["Ni", "Dha", "Pa", "Ma", "Ga", "Re", "Sa"];

/// Hole position of the blow/embouchure end
pub const BLOW_HOLE: usize = 0;

/// One physical hole and the note it sounds
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct HolePosition {
    /// 0 at the blow end, 6 at the far (root) end
    pub position: usize,
    pub label: &'static str,
    pub pitch_class: PitchClass,
    pub is_blow: bool,
}

/// A hole as shown in the visualizer, flagged when the user's notes include it
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct HoleView {
    pub hole: HolePosition,
    pub played: bool,
}

/// Everything the single-instrument visualizer renders
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Visualization {
    pub score: ScoreResult,
    pub holes: [HoleView; HOLE_COUNT],
}
