//! End-to-end checks of the parse → derive/rank → score → map pipeline

use flute_finder_wasm::{
    derive_scale, map_to_hole_positions, parse_notes, rank_instruments, score_instrument,
    visualize, FinderState, Instrument, PitchClass, ResolveError,
};
use flute_finder_wasm::PitchClass::*;

#[test]
fn test_a_flute_with_a_sharp_c_sharp_f() {
    let notes = parse_notes("A# C# F");
    assert_eq!(notes.as_slice(), &[As, Cs, F]);

    let scale = derive_scale("A").unwrap();
    assert_eq!(scale.root(), E);
    assert_eq!(scale.notes(), &[E, Fs, Gs, A, B, Cs, Ds]);

    let result = score_instrument(Instrument::new(A), &notes);
    assert_eq!(result.matched_notes, vec![Cs]);
    assert_eq!(result.extra_notes, vec![As, F]);
    assert_eq!(result.match_percent, 33);
}

#[test]
fn test_c_flute_with_flat_input() {
    let notes = parse_notes("Bb D G");
    assert_eq!(notes.as_slice(), &[As, D, G]);

    let result = score_instrument(Instrument::new(C), &notes);
    assert_eq!(result.root, G);
    assert_eq!(result.scale.notes(), &[G, A, B, C, D, E, Fs]);
    assert_eq!(result.matched_notes, vec![D, G]);
    assert_eq!(result.extra_notes, vec![As]);
    assert_eq!(result.match_percent, 67);
}

#[test]
fn test_blank_input_ranks_everything_at_zero() {
    for text in ["", "   "] {
        let notes = parse_notes(text);
        assert!(notes.is_empty());

        let ranked = rank_instruments(&notes);
        assert_eq!(ranked.len(), 12);
        for (result, expected) in ranked.iter().zip(PitchClass::ALL) {
            assert_eq!(result.instrument.name(), expected);
            assert_eq!(result.match_percent, 0);
            assert!(result.matched_notes.is_empty());
            assert!(result.extra_notes.is_empty());
        }
    }
}

#[test]
fn test_scale_properties_for_every_instrument() {
    for name in PitchClass::ALL {
        let scale = derive_scale(name.as_str()).unwrap();
        assert_eq!(scale.notes().len(), 7);
        assert_eq!(scale[3], name);
        assert_eq!(scale.root(), PitchClass::from_semitones(name.index() as i32 - 5));
        assert_eq!(map_to_hole_positions(&scale)[3].pitch_class, name);
    }
}

#[test]
fn test_percent_bounds() {
    for text in ["C", "C D", "C C# D D# E F F# G G# A A# B", "Gb Ab Bb", "x y"] {
        let notes = parse_notes(text);
        for instrument in Instrument::all() {
            let percent = score_instrument(instrument, &notes).match_percent;
            assert!(percent <= 100);
            if notes.is_empty() {
                assert_eq!(percent, 0);
            }
        }
    }
}

#[test]
fn test_chromatic_input_ties_at_58_percent() {
    // Every major scale covers 7 of 12 chromatic notes
    let ranked = rank_instruments(&parse_notes("C C# D D# E F F# G G# A A# B"));
    assert!(ranked.iter().all(|r| r.match_percent == 58 && r.match_count == 7));
    let order: Vec<PitchClass> = ranked.iter().map(|r| r.instrument.name()).collect();
    assert_eq!(order, PitchClass::ALL.to_vec());
}

#[test]
fn test_finder_paging_over_ranking() {
    let ranked = rank_instruments(&parse_notes("E F# G# A B C# D#"));
    let mut state = FinderState::default();
    assert_eq!(state.visible(&ranked).len(), 3);
    assert_eq!(state.visible(&ranked)[0].instrument.name(), A);

    while state.has_more() {
        state = state.reveal_more();
    }
    assert_eq!(state.visible(&ranked).len(), 12);
}

#[test]
fn test_visualizer_matches_scorer() {
    let notes = parse_notes("d, f#, a");
    let view = visualize(Instrument::new(G), &notes);
    assert_eq!(view.score, score_instrument(Instrument::new(G), &notes));
    assert_eq!(view.holes[3].hole.pitch_class, G);
    assert_eq!(view.holes.iter().filter(|h| h.played).count(), 3);
}

#[test]
fn test_unknown_instrument_name() {
    assert_eq!(
        derive_scale("H#"),
        Err(ResolveError::UnknownPitchClass("H#".to_string()))
    );
    assert!(Instrument::from_name("E#").is_err());
}
