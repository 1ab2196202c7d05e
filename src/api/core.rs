//! Exported WASM functions
//!
//! Each call runs the full pipeline for one UI event (parse → derive/rank →
//! score → map) and returns plain serde values. Nothing is cached between
//! calls; state such as the revealed-result count is passed in and handed
//! back by the caller.

use wasm_bindgen::prelude::*;
use js_sys;

use crate::api::helpers::{deserialize, deserialize_optional, deserialize_or_default, resolution_error, serialize};
use crate::api::types::{FinderPage, ThemeChoice};
use crate::models::{FinderConfig, FinderState, InputNoteSet, Instrument, Scale, Theme, NOTE_NAMES};
use crate::parse::{parse_notes, parse_notes_detailed};
use crate::theory::{derive_scale, map_to_hole_positions, rank_instruments, score_named, visualize};
use crate::{wasm_info, wasm_log};

// ============================================================================
// Input Helpers
// ============================================================================

/// Note names from a JS array, run through the same rules as typed text
/// (normalized, invalid names dropped, duplicates removed)
pub fn notes_from_names<S: AsRef<str>>(names: &[S]) -> InputNoteSet {
    let joined: Vec<&str> = names.iter().map(|n| n.as_ref()).collect();
    parse_notes(&joined.join(" "))
}

/// Read a JS array of note names into a note set
fn notes_from_js(notes_js: JsValue) -> Result<InputNoteSet, JsValue> {
    let names: Vec<String> = deserialize_or_default(notes_js, "Failed to read notes")?;
    Ok(notes_from_names(&names))
}

fn string_array<'a>(items: impl IntoIterator<Item = &'a str>) -> js_sys::Array {
    items.into_iter().map(JsValue::from_str).collect()
}

// ============================================================================
// Parsing
// ============================================================================

/// Parse free-form note text into canonical note names
///
/// # Returns
/// Array of note names (e.g. `["A#", "C#", "F"]`); never throws
#[wasm_bindgen(js_name = parseNotes)]
pub fn parse_notes_js(text: &str) -> js_sys::Array {
    let notes = parse_notes(text);
    wasm_log!("parseNotes: {:?} → [{}]", text, notes.join(", "));
    string_array(notes.iter().map(|pc| pc.as_str()))
}

/// Parse note text and report what happened to every token
///
/// # Returns
/// `{ notes, tokens: [{ token, outcome: { status, pitch? } }] }`
#[wasm_bindgen(js_name = parseNotesDetailed)]
pub fn parse_notes_detailed_js(text: &str) -> Result<JsValue, JsValue> {
    let report = parse_notes_detailed(text);
    if report.has_rejections() {
        wasm_log!(
            "parseNotesDetailed: rejected [{}]",
            report.rejected_tokens().collect::<Vec<_>>().join(", ")
        );
    }
    serialize(&report, "Failed to serialize parse report")
}

/// All twelve canonical note names in enumeration order
#[wasm_bindgen(js_name = noteNames)]
pub fn note_names() -> js_sys::Array {
    string_array(NOTE_NAMES)
}

// ============================================================================
// Visualizer
// ============================================================================

/// Derive the 7-note scale of the flute named `instrument`
///
/// # Returns
/// Array of 7 note names, root first; `Err` for an unknown name
#[wasm_bindgen(js_name = deriveScale)]
pub fn derive_scale_js(instrument: &str) -> Result<JsValue, JsValue> {
    let scale = derive_scale(instrument).map_err(resolution_error)?;
    serialize(&scale, "Failed to serialize scale")
}

/// Score one flute against an array of note names
#[wasm_bindgen(js_name = scoreInstrument)]
pub fn score_instrument_js(instrument: &str, notes_js: JsValue) -> Result<JsValue, JsValue> {
    let notes = notes_from_js(notes_js)?;
    let result = score_named(instrument, &notes).map_err(resolution_error)?;
    wasm_log!(
        "scoreInstrument: {} vs [{}] → {}%",
        result.instrument,
        notes.join(" "),
        result.match_percent
    );
    serialize(&result, "Failed to serialize score")
}

/// Map a 7-note scale onto the flute's holes, blow end first
#[wasm_bindgen(js_name = mapToHolePositions)]
pub fn map_to_hole_positions_js(scale_js: JsValue) -> Result<JsValue, JsValue> {
    let scale: Scale = deserialize(scale_js, "Expected an array of 7 note names")?;
    serialize(&map_to_hole_positions(&scale), "Failed to serialize hole positions")
}

/// Everything the single-flute view needs: score plus hole layout
///
/// # Parameters
/// - `instrument`: flute name, e.g. `"A"` or `"Bb"`
/// - `text`: the raw contents of the notes input
#[wasm_bindgen(js_name = visualizeInstrument)]
pub fn visualize_instrument(instrument: &str, text: &str) -> Result<JsValue, JsValue> {
    let instrument = Instrument::from_name(instrument).map_err(resolution_error)?;
    let view = visualize(instrument, &parse_notes(text));
    serialize(&view, "Failed to serialize visualization")
}

// ============================================================================
// Recommender
// ============================================================================

/// Rank all twelve flutes against an array of note names
#[wasm_bindgen(js_name = rankInstruments)]
pub fn rank_instruments_js(notes_js: JsValue) -> Result<JsValue, JsValue> {
    let notes = notes_from_js(notes_js)?;
    serialize(&rank_instruments(&notes), "Failed to serialize ranking")
}

/// Rank the note text and cut the page `state` reveals
pub fn build_finder_page(text: &str, state: FinderState) -> FinderPage {
    let ranked = rank_instruments(&parse_notes(text));
    FinderPage {
        results: state.visible(&ranked).to_vec(),
        state,
        has_more: state.has_more(),
        total: ranked.len(),
    }
}

/// State after "show more": one page past `previous`, or the first page
/// when the caller has no state yet
pub fn next_finder_state(previous: Option<FinderState>) -> FinderState {
    match previous {
        Some(state) => state.reveal_more(),
        None => FinderState::default(),
    }
}

fn finder_page(text: &str, state: FinderState) -> Result<JsValue, JsValue> {
    let page = build_finder_page(text, state);
    wasm_info!("finder page: {} of {} results", page.results.len(), page.total);
    serialize(&page, "Failed to serialize finder page")
}

/// Start a new recommendation for the note text
///
/// # Parameters
/// - `text`: the raw contents of the notes input
/// - `config_js`: optional `{ page_size }`; defaults apply when omitted
#[wasm_bindgen(js_name = findInstruments)]
pub fn find_instruments(text: &str, config_js: JsValue) -> Result<JsValue, JsValue> {
    let config: FinderConfig = deserialize_or_default(config_js, "Invalid finder config")?;
    finder_page(text, FinderState::from_config(&config))
}

/// Reveal the next page for the same note text
///
/// # Parameters
/// - `state_js`: the `state` returned by the previous page; when omitted
///   the first page is returned
#[wasm_bindgen(js_name = revealMoreResults)]
pub fn reveal_more_results(text: &str, state_js: JsValue) -> Result<JsValue, JsValue> {
    let previous: Option<FinderState> = deserialize_optional(state_js, "Invalid finder state")?;
    finder_page(text, next_finder_state(previous))
}

// ============================================================================
// Theme
// ============================================================================

/// Resolve the stored theme preference (missing or unknown → light)
#[wasm_bindgen(js_name = resolveTheme)]
pub fn resolve_theme(stored: Option<String>) -> Result<JsValue, JsValue> {
    let choice = ThemeChoice::from(Theme::from_preference(stored.as_deref()));
    serialize(&choice, "Failed to serialize theme")
}

/// Flip the stored theme preference
#[wasm_bindgen(js_name = toggleTheme)]
pub fn toggle_theme(stored: Option<String>) -> Result<JsValue, JsValue> {
    let choice = ThemeChoice::from(Theme::from_preference(stored.as_deref()).toggled());
    serialize(&choice, "Failed to serialize theme")
}
