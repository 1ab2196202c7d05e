//! Flute Finder WASM API
//!
//! JavaScript-facing wrappers around the theory engine. Values cross the
//! boundary through serde; unknown instrument names come back as `Err`
//! strings instead of throwing from inside the core.
//!
//! # Module Structure
//!
//! - `helpers`: serialization, error conversion and console logging
//! - `types`: result shapes that only exist at the boundary
//! - `core`: the exported functions

pub mod helpers;
pub mod types;
pub mod core;

pub use self::core::*;
