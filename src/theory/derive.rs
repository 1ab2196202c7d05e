//! Instrument name → sounding root → major scale

use crate::errors::ResolveError;
use crate::models::instrument::Instrument;
use crate::models::scale::Scale;

/// Derive the scale of the instrument named `name` (e.g. `"A"`, `"Bb"`).
///
/// The name is the 4th degree, so the root sits five semitones below it.
/// Names outside the pitch table give `ResolveError::UnknownPitchClass`.
pub fn derive_scale(name: &str) -> Result<Scale, ResolveError> {
    let instrument = Instrument::from_name(name)?;
    Ok(instrument.scale())
}
