//! Repository gateways over the remote boundaries.
//!
//! Every operation returns a cold stream of [`UiState`] transitions: nothing
//! happens until the consumer polls, `Loading` is emitted first, and
//! single-shot operations finish with exactly one terminal emission.
//! Dropping a stream before its terminal emission stops any further side
//! effects; a remote write already issued is not retracted.

pub mod auth;
pub mod posts;

pub use auth::AuthRepository;
pub use posts::PostRepository;

use futures::stream::{self, StreamExt};
use std::pin::Pin;

use crate::traits::StoreError;
use crate::ui_state::UiState;

/// Stream of `UiState` transitions for one logical operation.
pub type UiStateStream<T> = Pin<Box<dyn futures::Stream<Item = UiState<T>> + Send>>;

/// Build a cold single-shot stream: `Loading`, then the terminal state
/// produced by `terminal`. The future does not run until polled.
pub(crate) fn single_shot<T, Fut>(terminal: Fut) -> UiStateStream<T>
where
    T: Send + 'static,
    Fut: std::future::Future<Output = UiState<T>> + Send + 'static,
{
    Box::pin(stream::once(async { UiState::Loading }).chain(stream::once(terminal)))
}

/// Short-circuit for validation failures caught before any remote call:
/// a single `Error` emission, no `Loading`.
pub(crate) fn validation_error<T>(message: impl Into<String>) -> UiStateStream<T>
where
    T: Send + 'static,
{
    let message = message.into();
    Box::pin(stream::once(async move { UiState::Error(message) }))
}

/// Human-readable message for a store failure.
pub(crate) fn store_error_message(error: &StoreError) -> String {
    match error {
        StoreError::NotFound => "The requested record was not found.".to_string(),
        StoreError::Network(_) => "Could not reach the server. Check your connection.".to_string(),
        StoreError::Backend(message) => message.clone(),
    }
}
