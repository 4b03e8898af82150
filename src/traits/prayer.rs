//! Prayer-time calculation trait abstraction.
//!
//! The astronomical formulas are an external concern; this layer only needs
//! a deterministic mapping from position and date to the five clock times.

use chrono::NaiveDate;

use crate::prayer::PrayerTimes;
use crate::traits::location::Coordinates;

/// Pure, deterministic prayer-time calculation.
///
/// Implementations must be side-effect free: the same coordinates and date
/// always yield the same times.
pub trait PrayerCalculator: Send + Sync {
    /// The five prayer times for `date` at `coords`, as local HH:MM strings.
    fn times(&self, coords: Coordinates, date: NaiveDate) -> PrayerTimes;
}
