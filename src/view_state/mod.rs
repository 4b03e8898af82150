//! Per-screen view-state composition.
//!
//! Each screen owns one composer that merges the gateway streams with its
//! local, user-controlled signals into a single consistent value for
//! rendering. Composition is synchronous; only the gateway streams ever
//! suspend.

pub mod feed_view;
pub mod home_view;

pub use feed_view::FeedViewState;
pub use home_view::HomeViewState;
