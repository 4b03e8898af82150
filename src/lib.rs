//! Halaqa core - the data-synchronization layer of the Halaqa client
//!
//! This library exposes the repository gateways, view-state composers and
//! remote-boundary traits; screen code lives in the platform frontends.

pub mod adapters;
pub mod config;
pub mod models;
pub mod prayer;
pub mod repository;
pub mod traits;
pub mod ui_state;
pub mod view_state;
