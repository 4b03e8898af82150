//! Mock geolocation provider for testing.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::traits::{Coordinates, LocationError, LocationProvider};

/// Configurable in-memory location provider.
#[derive(Debug, Clone)]
pub struct MockLocationProvider {
    coordinates: Arc<Mutex<Result<Coordinates, LocationError>>>,
    locality: Arc<Mutex<Result<Option<String>, LocationError>>>,
}

impl MockLocationProvider {
    /// A provider positioned at `coords` that resolves to `locality`.
    pub fn new(coords: Coordinates, locality: Option<&str>) -> Self {
        Self {
            coordinates: Arc::new(Mutex::new(Ok(coords))),
            locality: Arc::new(Mutex::new(Ok(locality.map(str::to_string)))),
        }
    }

    /// Make the coordinate fetch fail.
    pub fn fail_coordinates(&self) {
        *self.coordinates.lock().unwrap() = Err(LocationError::Unavailable);
    }

    /// Make the geocode lookup fail.
    pub fn fail_geocoding(&self, message: &str) {
        *self.locality.lock().unwrap() = Err(LocationError::Geocoding(message.to_string()));
    }
}

#[async_trait]
impl LocationProvider for MockLocationProvider {
    async fn current_coordinates(&self) -> Result<Coordinates, LocationError> {
        self.coordinates.lock().unwrap().clone()
    }

    async fn locality_name(&self, _coords: Coordinates) -> Result<Option<String>, LocationError> {
        self.locality.lock().unwrap().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BANDUNG: Coordinates = Coordinates {
        latitude: -6.9175,
        longitude: 107.6191,
    };

    #[tokio::test]
    async fn test_returns_configured_position() {
        let provider = MockLocationProvider::new(BANDUNG, Some("Bandung"));
        let coords = provider.current_coordinates().await.unwrap();
        assert_eq!(coords, BANDUNG);
        let locality = provider.locality_name(coords).await.unwrap();
        assert_eq!(locality.as_deref(), Some("Bandung"));
    }

    #[tokio::test]
    async fn test_failures_are_independent() {
        let provider = MockLocationProvider::new(BANDUNG, Some("Bandung"));
        provider.fail_geocoding("no geocoder");

        assert!(provider.current_coordinates().await.is_ok());
        assert_eq!(
            provider.locality_name(BANDUNG).await,
            Err(LocationError::Geocoding("no geocoder".into()))
        );
    }
}
