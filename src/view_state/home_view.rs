//! Home screen view state: locality-aware prayer schedule.
//!
//! One-shot composition per refresh: fetch coordinates, reverse-geocode
//! them (best effort), compute today's prayer times. Only the coordinate
//! fetch can fail the whole refresh; a geocoding failure just falls back
//! to a placeholder locality.

use chrono::Local;
use tracing::debug;

use crate::prayer::{PrayerSchedule, UNKNOWN_LOCALITY};
use crate::traits::{LocationProvider, PrayerCalculator};
use crate::ui_state::UiState;

const MSG_NO_LOCATION: &str = "Could not detect your location. Turn on GPS or location services.";

/// View state for the home screen's prayer schedule card.
#[derive(Debug, Default)]
pub struct HomeViewState {
    schedule: UiState<PrayerSchedule>,
}

impl HomeViewState {
    /// A home view with no schedule loaded yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current schedule state.
    pub fn schedule(&self) -> &UiState<PrayerSchedule> {
        &self.schedule
    }

    /// Recompute the schedule for the current position and today's date.
    ///
    /// "Today" is the device's calendar day, not the UTC one; they differ
    /// for a large part of every day east of Greenwich.
    pub async fn refresh(
        &mut self,
        location: &dyn LocationProvider,
        calculator: &dyn PrayerCalculator,
    ) {
        self.refresh_on(location, calculator, Local::now().date_naive())
            .await;
    }

    /// Recompute the schedule for the current position on `date`.
    pub async fn refresh_on(
        &mut self,
        location: &dyn LocationProvider,
        calculator: &dyn PrayerCalculator,
        date: chrono::NaiveDate,
    ) {
        self.schedule = UiState::Loading;

        let coords = match location.current_coordinates().await {
            Ok(coords) => coords,
            Err(error) => {
                debug!(%error, "coordinate fetch failed");
                self.schedule = UiState::Error(MSG_NO_LOCATION.to_string());
                return;
            }
        };

        let locality = match location.locality_name(coords).await {
            Ok(Some(name)) => name,
            Ok(None) => UNKNOWN_LOCALITY.to_string(),
            Err(error) => {
                debug!(%error, "geocoding failed, using placeholder locality");
                UNKNOWN_LOCALITY.to_string()
            }
        };

        let times = calculator.times(coords, date);
        self.schedule = UiState::Success(PrayerSchedule { times, locality });
    }
}
