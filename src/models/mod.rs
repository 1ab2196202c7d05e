//! Models module for the flute finder
//!
//! Value types shared by the theory engine and the WASM API. Everything here
//! is freely copyable and carries no shared mutable state.

pub mod pitch_class;
pub mod instrument;
pub mod scale;
pub mod note_set;
pub mod score;
pub mod holes;
pub mod finder_state;
pub mod theme;

// Re-export commonly used types
pub use pitch_class::{PitchClass, NOTE_NAMES};
pub use instrument::Instrument;
pub use scale::Scale;
pub use note_set::InputNoteSet;
pub use score::{RankedResults, ScoreResult};
pub use holes::{HolePosition, HoleView, Visualization};
pub use finder_state::{FinderConfig, FinderState};
pub use theme::Theme;
