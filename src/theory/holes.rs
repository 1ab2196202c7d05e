//! Scale degrees → physical finger holes
//!
//! Hole 0 (the blow end) sounds the 7th degree and hole 6 sounds the root,
//! so hole `i` carries scale index `6 - i`. Hole 3 is always the
//! instrument's namesake note.

use crate::models::holes::{HolePosition, HoleView, Visualization, BLOW_HOLE, HOLE_COUNT, HOLE_LABELS};
use crate::models::instrument::Instrument;
use crate::models::note_set::InputNoteSet;
use crate::models::scale::Scale;

use super::matcher::score_instrument;

/// Relabel a scale's seven degrees onto the seven holes
pub fn map_to_hole_positions(scale: &Scale) -> [HolePosition; HOLE_COUNT] {
    std::array::from_fn(|position| HolePosition {
        position,
        label: HOLE_LABELS[position],
        pitch_class: scale[HOLE_COUNT - 1 - position],
        is_blow: position == BLOW_HOLE,
    })
}

/// Score one instrument and lay its holes out, flagging the ones the
/// input notes use
pub fn visualize(instrument: Instrument, notes: &InputNoteSet) -> Visualization {
    let score = score_instrument(instrument, notes);
    let holes = map_to_hole_positions(&score.scale).map(|hole| HoleView {
        played: notes.contains(hole.pitch_class),
        hole,
    });
    Visualization { score, holes }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::pitch_class::PitchClass::{self, *};
    use crate::parse::parse_notes;

    #[test]
    fn test_a_flute_layout() {
        let holes = map_to_hole_positions(&Instrument::new(A).scale());
        let pitches: Vec<PitchClass> = holes.iter().map(|h| h.pitch_class).collect();
        assert_eq!(pitches, vec![Ds, Cs, B, A, Gs, Fs, E]);
        assert_eq!(holes[0].label, "Ni");
        assert_eq!(holes[6].label, "Sa");
        assert!(holes[0].is_blow);
        assert!(holes[1..].iter().all(|h| !h.is_blow));
    }

    #[test]
    fn test_hole_three_is_namesake() {
        for instrument in Instrument::all() {
            let holes = map_to_hole_positions(&instrument.scale());
            assert_eq!(holes[3].pitch_class, instrument.name());
            assert_eq!(holes[6].pitch_class, instrument.root());
        }
    }

    #[test]
    fn test_positions_are_sequential() {
        let holes = map_to_hole_positions(&Scale::major(C));
        for (i, hole) in holes.iter().enumerate() {
            assert_eq!(hole.position, i);
        }
    }

    #[test]
    fn test_visualize_flags_played_holes() {
        let view = visualize(Instrument::new(C), &parse_notes("Bb D G"));
        assert_eq!(view.score.match_percent, 67);
        let played: Vec<PitchClass> = view
            .holes
            .iter()
            .filter(|h| h.played)
            .map(|h| h.hole.pitch_class)
            .collect();
        // Hole order: F#, E, D, C, B, A, G
        assert_eq!(played, vec![D, G]);
    }

    #[test]
    fn test_visualize_empty_input() {
        let view = visualize(Instrument::new(G), &InputNoteSet::new());
        assert!(view.holes.iter().all(|h| !h.played));
        assert_eq!(view.score.match_percent, 0);
    }

    #[test]
    fn test_hole_wire_shape() {
        let view = visualize(Instrument::new(A), &parse_notes("D#"));
        let json = serde_json::to_value(&view.holes[0]).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "hole": {
                    "position": 0,
                    "label": "Ni",
                    "pitch_class": "D#",
                    "is_blow": true
                },
                "played": true
            })
        );
    }
}
