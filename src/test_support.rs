//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::config::ResolvedConfig;
use crate::core::record::RecordDraft;
use crate::core::state::App;

/// Creates an App with default config and an empty store.
pub fn test_app() -> App {
    App::new(ResolvedConfig::default())
}

/// A draft whose ratings work out to a score of exactly 6.0.
pub fn test_draft(name: &str) -> RecordDraft {
    RecordDraft {
        name: name.to_string(),
        rent: 100_000,
        station_min: 5,
        floor: 2,
        sunlight: 8,
        noise: 2,
        age: 5,
        note: String::new(),
    }
}
