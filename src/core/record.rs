//! # Viewing Records
//!
//! The sole domain entity: one record per apartment viewing. Records are
//! immutable once created — there is no edit operation, so a mistaken
//! entry is deleted and re-added.

use std::ops::RangeInclusive;

use chrono::Local;

use crate::core::score::composite_score;

/// Format of the creation timestamp, e.g. "03/14 18:05".
pub const ADDED_FORMAT: &str = "%m/%d %H:%M";

/// Bounds enforced by the form layer. The store trusts numeric fields
/// as already clamped; only the name is validated on add.
pub const FLOOR_RANGE: RangeInclusive<i64> = 1..=20;
pub const AGE_RANGE: RangeInclusive<i64> = 0..=50;
pub const RATING_RANGE: RangeInclusive<i64> = 1..=10;

/// A single viewed apartment.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Unique, assigned sequentially from 1, never reused.
    pub id: u32,
    pub name: String,
    /// Monthly rent in currency units.
    pub rent: u32,
    /// Walk to the nearest station, minutes.
    pub station_min: u32,
    pub floor: i32,
    /// Sunlight rating, 1-10.
    pub sunlight: u8,
    /// Noise rating, 1-10, higher = noisier.
    pub noise: u8,
    /// Building age in years.
    pub age: u32,
    /// Free-text impressions from the viewing.
    pub note: String,
    /// Derived at creation via [`composite_score`], never recomputed.
    pub score: f64,
    /// Local creation time formatted with [`ADDED_FORMAT`].
    pub added: String,
}

/// User-entered fields for a new record, before the store assigns an id,
/// computes the score, and stamps the creation time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordDraft {
    pub name: String,
    pub rent: u32,
    pub station_min: u32,
    pub floor: i32,
    pub sunlight: u8,
    pub noise: u8,
    pub age: u32,
    pub note: String,
}

impl RecordDraft {
    pub(crate) fn into_record(self, id: u32) -> Record {
        let score = composite_score(self.sunlight, self.noise, self.floor);
        Record {
            id,
            name: self.name,
            rent: self.rent,
            station_min: self.station_min,
            floor: self.floor,
            sunlight: self.sunlight,
            noise: self.noise,
            age: self.age,
            note: self.note,
            score,
            added: Local::now().format(ADDED_FORMAT).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_into_record_computes_score() {
        let draft = RecordDraft {
            name: "A".to_string(),
            rent: 100_000,
            station_min: 5,
            floor: 2,
            sunlight: 8,
            noise: 2,
            age: 5,
            note: String::new(),
        };
        let record = draft.into_record(1);
        assert_eq!(record.id, 1);
        assert_eq!(record.score, 6.0);
        assert!(!record.added.is_empty());
    }

    #[test]
    fn test_added_format_shape() {
        let record = RecordDraft::default().into_record(7);
        // "%m/%d %H:%M" is always 11 chars with the separators in place.
        assert_eq!(record.added.len(), 11);
        assert_eq!(&record.added[2..3], "/");
        assert_eq!(&record.added[5..6], " ");
    }
}
