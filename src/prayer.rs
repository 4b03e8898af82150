//! Prayer schedule value types for the home screen.

use serde::{Deserialize, Serialize};

/// The five daily prayer times as local HH:MM strings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PrayerTimes {
    pub fajr: String,
    pub dhuhr: String,
    pub asr: String,
    pub maghrib: String,
    pub isha: String,
}

/// Placeholder shown when reverse geocoding resolves nothing.
pub const UNKNOWN_LOCALITY: &str = "Current location";

/// Prayer times together with the locality they were computed for.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PrayerSchedule {
    /// The computed times.
    pub times: PrayerTimes,
    /// Locality name from reverse geocoding, or [`UNKNOWN_LOCALITY`].
    pub locality: String,
}
