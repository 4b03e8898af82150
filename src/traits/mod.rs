//! Trait abstractions over the remote collaborators.
//!
//! The gateways never talk to a vendor SDK directly; they go through these
//! traits so tests can inject in-memory fakes and the platform frontends can
//! wire in whichever backing services they ship with.
//!
//! # Traits
//!
//! - [`IdentityProvider`] - email+password auth and identity lookup
//! - [`DocumentStore`] - keyed record access plus the realtime posts feed
//! - [`LocationProvider`] - one-shot geolocation and reverse geocoding
//! - [`PrayerCalculator`] - opaque prayer-time calculation

pub mod identity;
pub mod location;
pub mod prayer;
pub mod store;

pub use identity::{AuthUser, IdentityError, IdentityProvider};
pub use location::{Coordinates, LocationError, LocationProvider};
pub use prayer::PrayerCalculator;
pub use store::{DocumentStore, PostSubscription, StoreError};
