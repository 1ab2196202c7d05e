//! Music-theory engine
//!
//! Pure functions shared by the visualizer and the recommender:
//! scale derivation, scoring, ranking and the hole mapping.

pub mod derive;
pub mod matcher;
pub mod ranker;
pub mod holes;

pub use derive::derive_scale;
pub use matcher::{score_instrument, score_named};
pub use ranker::rank_instruments;
pub use holes::{map_to_hole_positions, visualize};
