//! Document store trait abstraction.
//!
//! Keyed record access on the `users` and `posts` collections plus a
//! standing realtime subscription over `posts`. The subscription is the one
//! place in this crate where a server-side resource outlives a single call;
//! [`PostSubscription`] owns that resource and releases it on drop.

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::mpsc;

use crate::models::{AnswerPatch, Question, User, UserPatch};

/// Classified failures at the document-store boundary.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    /// The requested record does not exist.
    #[error("record not found")]
    NotFound,

    /// The store could not be reached.
    #[error("network error: {0}")]
    Network(String),

    /// Any other store-level failure, with the backend's own message.
    #[error("{0}")]
    Backend(String),
}

/// One emission from a standing posts subscription: a full snapshot of the
/// collection ordered by creation time descending, or a listener error.
pub type PostSnapshot = Result<Vec<Question>, StoreError>;

/// Handle to an active realtime subscription on the posts collection.
///
/// Holds the receiving end of the snapshot channel together with a cancel
/// guard. Dropping the subscription runs the guard synchronously, releasing
/// the server-side listener before the drop returns; a leaked listener keeps
/// consuming server quota, so every constructor must supply a real guard.
pub struct PostSubscription {
    rx: mpsc::UnboundedReceiver<PostSnapshot>,
    cancel: Option<Box<dyn FnOnce() + Send>>,
}

impl PostSubscription {
    /// Wrap a snapshot channel and the guard that tears the listener down.
    pub fn new(
        rx: mpsc::UnboundedReceiver<PostSnapshot>,
        cancel: impl FnOnce() + Send + 'static,
    ) -> Self {
        Self {
            rx,
            cancel: Some(Box::new(cancel)),
        }
    }

    /// Wait for the next snapshot. `None` once the listener has gone away
    /// (store dropped or subscription cancelled).
    pub async fn next(&mut self) -> Option<PostSnapshot> {
        self.rx.recv().await
    }

    /// Release the server-side listener now. Idempotent; also runs on drop.
    pub fn cancel(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
        self.rx.close();
    }
}

impl Drop for PostSubscription {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl std::fmt::Debug for PostSubscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PostSubscription")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}

/// Trait for the remote document store.
///
/// The store is the sole arbiter of write ordering; implementations hold no
/// client-side locks and perform no conflict resolution.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Read the profile record for `uid`.
    async fn get_user(&self, uid: &str) -> Result<User, StoreError>;

    /// Write a full profile record keyed by its id.
    async fn set_user(&self, user: &User) -> Result<(), StoreError>;

    /// Apply a partial update to the profile record for `uid`.
    async fn update_user(&self, uid: &str, patch: &UserPatch) -> Result<(), StoreError>;

    /// Allocate a fresh post id ahead of the write, so the persisted record
    /// is self-describing. Local, infallible.
    fn allocate_post_id(&self) -> String;

    /// Persist a full post record keyed by its id.
    async fn set_post(&self, post: &Question) -> Result<(), StoreError>;

    /// Apply an answer update to the post `id`. Last write wins; the store's
    /// access-control layer is the authorization check.
    async fn update_post(&self, id: &str, patch: &AnswerPatch) -> Result<(), StoreError>;

    /// Open a standing realtime subscription over the posts collection.
    ///
    /// The subscription yields a snapshot immediately and then again on
    /// every remote insert or update, always in creation-time descending
    /// order. At most one server listener exists per subscription.
    async fn subscribe_posts(&self) -> Result<PostSubscription, StoreError>;
}
