//! Question store gateway: create, realtime feed and answer.
//!
//! Wraps the `posts` collection. `all_posts` is the one continuous stream
//! in the crate: it stays subscribed until the consumer drops it, and the
//! drop releases the server-side listener before it returns.

use futures::stream::{self, StreamExt};
use std::sync::Arc;
use tracing::{debug, warn};

use super::{single_shot, store_error_message, validation_error, UiStateStream};
use crate::models::{AnswerPatch, Question};
use crate::traits::DocumentStore;
use crate::ui_state::UiState;

const MSG_EMPTY_QUESTION: &str = "Question must not be empty.";
const MSG_EMPTY_ANSWER: &str = "Answer must not be empty.";
const MSG_POST_FAILED: &str = "Failed to post your question. Please try again.";

/// Gateway over the `posts` collection.
#[derive(Clone)]
pub struct PostRepository {
    store: Arc<dyn DocumentStore>,
}

impl PostRepository {
    /// Create a gateway over the given store handle.
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Persist a new question under a store-allocated id.
    ///
    /// The id is allocated before the write so the persisted record is
    /// self-describing. Any remote failure surfaces as one generic message.
    pub fn create_post(&self, post: Question) -> UiStateStream<bool> {
        if post.question.trim().is_empty() {
            return validation_error(MSG_EMPTY_QUESTION);
        }

        let store = Arc::clone(&self.store);
        single_shot(async move {
            let mut post = post;
            post.id = store.allocate_post_id();
            debug!(id = %post.id, "persisting question");

            match store.set_post(&post).await {
                Ok(()) => UiState::Success(true),
                Err(error) => {
                    warn!(%error, "question write failed");
                    UiState::Error(MSG_POST_FAILED.to_string())
                }
            }
        })
    }

    /// Standing realtime feed over all questions, newest first.
    ///
    /// Emits `Loading` once, then a fresh `Success(list)` for every remote
    /// change, in server order (creation time descending, no client
    /// re-sort). A listener error surfaces as `Error` without auto-retry;
    /// re-subscribing is the consumer's call. Dropping the stream releases
    /// the underlying listener synchronously.
    pub fn all_posts(&self) -> UiStateStream<Vec<Question>> {
        let store = Arc::clone(&self.store);

        let snapshots = stream::once(async move { store.subscribe_posts().await }).flat_map(
            |subscribed| match subscribed {
                Ok(subscription) => stream::unfold(subscription, |mut subscription| async move {
                    match subscription.next().await {
                        Some(Ok(posts)) => Some((UiState::Success(posts), subscription)),
                        Some(Err(error)) => {
                            warn!(%error, "posts listener error");
                            Some((UiState::Error(store_error_message(&error)), subscription))
                        }
                        None => None,
                    }
                })
                .boxed(),
                Err(error) => {
                    warn!(%error, "failed to open posts subscription");
                    stream::once(async move { UiState::Error(store_error_message(&error)) })
                        .boxed()
                }
            },
        );

        Box::pin(stream::once(async { UiState::Loading }).chain(snapshots))
    }

    /// Apply an answer to the question `id`.
    ///
    /// Partial update of {answer, responder id/name, answered, answeredAt};
    /// no client-side authorization check, and concurrent answers to the
    /// same id resolve to last write wins at the store.
    pub fn answer_post(
        &self,
        id: &str,
        answer: &str,
        ustadz_id: &str,
        ustadz_name: &str,
    ) -> UiStateStream<bool> {
        if answer.trim().is_empty() {
            return validation_error(MSG_EMPTY_ANSWER);
        }

        let store = Arc::clone(&self.store);
        let id = id.to_string();
        let patch = AnswerPatch::new(answer, ustadz_id, ustadz_name);

        single_shot(async move {
            match store.update_post(&id, &patch).await {
                Ok(()) => UiState::Success(true),
                Err(error) => {
                    warn!(%error, id = %id, "answer update failed");
                    UiState::Error(store_error_message(&error))
                }
            }
        })
    }
}
