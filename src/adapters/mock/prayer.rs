//! Fixed-table prayer calculator for testing.

use chrono::NaiveDate;

use crate::prayer::PrayerTimes;
use crate::traits::{Coordinates, PrayerCalculator};

/// Calculator that returns the same table for every position and date.
///
/// Deterministic by construction, which is all the home-view composition
/// tests need; the real calculator lives behind the platform boundary.
#[derive(Debug, Clone)]
pub struct FixedPrayerCalculator {
    times: PrayerTimes,
}

impl FixedPrayerCalculator {
    /// A calculator that always yields `times`.
    pub fn new(times: PrayerTimes) -> Self {
        Self { times }
    }
}

impl Default for FixedPrayerCalculator {
    fn default() -> Self {
        Self::new(PrayerTimes {
            fajr: "04:38".into(),
            dhuhr: "11:52".into(),
            asr: "15:14".into(),
            maghrib: "17:48".into(),
            isha: "19:01".into(),
        })
    }
}

impl PrayerCalculator for FixedPrayerCalculator {
    fn times(&self, _coords: Coordinates, _date: NaiveDate) -> PrayerTimes {
        self.times.clone()
    }
}
