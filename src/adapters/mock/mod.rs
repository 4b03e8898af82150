//! In-memory fakes for the remote-boundary traits.
//!
//! These carry enough real semantics for end-to-end tests without a
//! network: the identity fake keeps registered accounts and a session
//! cache, the store fake fans snapshots out to every live listener on each
//! post write and exposes its active-listener count so tests can prove
//! release-on-drop.

pub mod identity;
pub mod location;
pub mod prayer;
pub mod store;

pub use identity::MockIdentityProvider;
pub use location::MockLocationProvider;
pub use prayer::FixedPrayerCalculator;
pub use store::MockDocumentStore;
