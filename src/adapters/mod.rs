//! Concrete implementations of the remote-boundary traits.
//!
//! # Adapters
//!
//! - [`RestIdentityProvider`] - identity provider over its REST API
//! - [`RestDocumentStore`] - document store over its REST API, with a
//!   poll-based change feed backing the posts subscription
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides in-memory fakes with full semantics:
//! - [`mock::MockIdentityProvider`] - registered accounts and a session cache
//! - [`mock::MockDocumentStore`] - stored documents with realtime fan-out
//!   and an observable active-listener count
//! - [`mock::MockLocationProvider`] - configurable coordinates and locality
//! - [`mock::FixedPrayerCalculator`] - fixed prayer-time table

pub mod mock;
pub mod rest_identity;
pub mod rest_store;

pub use mock::{
    FixedPrayerCalculator, MockDocumentStore, MockIdentityProvider, MockLocationProvider,
};
pub use rest_identity::RestIdentityProvider;
pub use rest_store::RestDocumentStore;
