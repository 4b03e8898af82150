//! Geolocation and reverse-geocoding trait abstraction.
//!
//! Consumed by the prayer-time home feature: one-shot "where am I" fetch
//! and a coordinates-to-locality lookup, each fallible independently.

use async_trait::async_trait;
use thiserror::Error;

/// A geographic position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Failures at the geolocation boundary.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LocationError {
    /// The device could not produce a fix (no permission, no signal).
    #[error("could not determine the current location")]
    Unavailable,

    /// The geocoding service failed.
    #[error("geocoding failed: {0}")]
    Geocoding(String),
}

/// Trait for on-device geolocation and reverse geocoding.
#[async_trait]
pub trait LocationProvider: Send + Sync {
    /// One-shot fetch of the current coordinates.
    async fn current_coordinates(&self) -> Result<Coordinates, LocationError>;

    /// Best-effort locality name for the coordinates. `Ok(None)` when the
    /// geocoder resolved nothing useful; `Err` when the lookup itself
    /// failed.
    async fn locality_name(&self, coords: Coordinates) -> Result<Option<String>, LocationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_error_display() {
        assert_eq!(
            LocationError::Unavailable.to_string(),
            "could not determine the current location"
        );
        assert_eq!(
            LocationError::Geocoding("timeout".into()).to_string(),
            "geocoding failed: timeout"
        );
    }
}
