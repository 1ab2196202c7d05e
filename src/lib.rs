//! Flute Finder WASM Module
//!
//! Recommends and visualizes which of twelve transposing flutes fits a set of
//! notes. Each flute is named after its 4th scale degree. The Rust side is a
//! stateless theory engine; the JavaScript UI renders hole diagrams and owns
//! persistence.

pub mod errors;
pub mod models;
pub mod parse;
pub mod theory;
pub mod utils;
pub mod api;

// Re-export commonly used types
pub use errors::ResolveError;
pub use models::*;
pub use parse::{parse_notes, parse_notes_detailed, ParseReport, TokenOutcome};
pub use theory::{derive_scale, map_to_hole_positions, rank_instruments, score_instrument, score_named, visualize};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    console_log::init_with_level(log::Level::Debug).expect("failed to initialize logger");

    log::info!("Flute finder WASM module initialized");
}
