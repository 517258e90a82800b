//! # Composite Score
//!
//! The single derived number every ranking decision hangs off of.
//! Sunlight and quietness are subjective 1-10 ratings taken during the
//! viewing; quietness is stored inverted (as a noise level) because that
//! is how people report it.

/// Upper bound of the subjective 1-10 rating scales.
pub const RATING_MAX: u8 = 10;

/// Composite desirability score: `(sunlight + (10 - noise) + floor) / 3`.
///
/// Pure and total. Range enforcement happens at the form boundary, not
/// here — out-of-range inputs still produce a number.
///
/// The floor number enters the average unscaled, so a high floor can
/// dominate both ratings combined. That mirrors the source formula and
/// is kept as-is rather than silently renormalized.
pub fn composite_score(sunlight: u8, noise: u8, floor: i32) -> f64 {
    let quietness = i32::from(RATING_MAX) - i32::from(noise);
    f64::from(i32::from(sunlight) + quietness + floor) / 3.0
}
