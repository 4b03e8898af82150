//! Mock document store with realtime fan-out for testing.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;
use uuid::Uuid;

use crate::models::{AnswerPatch, Question, User, UserPatch};
use crate::traits::store::PostSnapshot;
use crate::traits::{DocumentStore, PostSubscription, StoreError};

#[derive(Default)]
struct Inner {
    users: HashMap<String, User>,
    posts: HashMap<String, Question>,
    listeners: Vec<(u64, mpsc::UnboundedSender<PostSnapshot>)>,
    next_listener_id: u64,
}

impl Inner {
    /// Full posts snapshot in creation-time descending order, the order the
    /// server pushes.
    fn snapshot(&self) -> Vec<Question> {
        let mut posts: Vec<Question> = self.posts.values().cloned().collect();
        posts.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        posts
    }

    fn notify(&mut self) {
        let snapshot = self.snapshot();
        self.listeners
            .retain(|(_, tx)| tx.send(Ok(snapshot.clone())).is_ok());
    }
}

/// In-memory document store.
///
/// Every post write fans a fresh snapshot out to all live listeners, and
/// [`active_listeners`](Self::active_listeners) exposes how many server-side
/// listeners currently exist so tests can prove a dropped subscription
/// released its listener.
#[derive(Clone, Default)]
pub struct MockDocumentStore {
    inner: Arc<Mutex<Inner>>,
    next_failure: Arc<Mutex<Option<StoreError>>>,
}

impl MockDocumentStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a profile record.
    pub fn seed_user(&self, user: User) {
        self.inner.lock().unwrap().users.insert(user.id.clone(), user);
    }

    /// Seed a post without notifying listeners, for pre-populated fixtures.
    pub fn seed_post(&self, post: Question) {
        self.inner.lock().unwrap().posts.insert(post.id.clone(), post);
    }

    /// Make the next remote operation fail with `error`.
    pub fn fail_next(&self, error: StoreError) {
        *self.next_failure.lock().unwrap() = Some(error);
    }

    /// Push a listener error to every live subscription, simulating a
    /// server-side listener failure.
    pub fn emit_listener_error(&self, error: StoreError) {
        let mut inner = self.inner.lock().unwrap();
        inner
            .listeners
            .retain(|(_, tx)| tx.send(Err(error.clone())).is_ok());
    }

    /// Number of currently registered server-side listeners.
    pub fn active_listeners(&self) -> usize {
        self.inner.lock().unwrap().listeners.len()
    }

    /// Direct read of a stored post, bypassing the subscription.
    pub fn post(&self, id: &str) -> Option<Question> {
        self.inner.lock().unwrap().posts.get(id).cloned()
    }

    fn take_failure(&self) -> Option<StoreError> {
        self.next_failure.lock().unwrap().take()
    }
}

#[async_trait]
impl DocumentStore for MockDocumentStore {
    async fn get_user(&self, uid: &str) -> Result<User, StoreError> {
        if let Some(error) = self.take_failure() {
            return Err(error);
        }
        let inner = self.inner.lock().unwrap();
        inner.users.get(uid).cloned().ok_or(StoreError::NotFound)
    }

    async fn set_user(&self, user: &User) -> Result<(), StoreError> {
        if let Some(error) = self.take_failure() {
            return Err(error);
        }
        let mut inner = self.inner.lock().unwrap();
        inner.users.insert(user.id.clone(), user.clone());
        Ok(())
    }

    async fn update_user(&self, uid: &str, patch: &UserPatch) -> Result<(), StoreError> {
        if let Some(error) = self.take_failure() {
            return Err(error);
        }
        let mut inner = self.inner.lock().unwrap();
        let user = inner.users.get_mut(uid).ok_or(StoreError::NotFound)?;
        user.name = patch.name.clone();
        if let Some(photo) = &patch.photo {
            user.photo = Some(photo.clone());
        }
        Ok(())
    }

    fn allocate_post_id(&self) -> String {
        Uuid::new_v4().to_string()
    }

    async fn set_post(&self, post: &Question) -> Result<(), StoreError> {
        if let Some(error) = self.take_failure() {
            return Err(error);
        }
        let mut inner = self.inner.lock().unwrap();
        inner.posts.insert(post.id.clone(), post.clone());
        inner.notify();
        Ok(())
    }

    async fn update_post(&self, id: &str, patch: &AnswerPatch) -> Result<(), StoreError> {
        if let Some(error) = self.take_failure() {
            return Err(error);
        }
        let mut inner = self.inner.lock().unwrap();
        let post = inner.posts.get_mut(id).ok_or(StoreError::NotFound)?;
        post.answer = Some(patch.answer.clone());
        post.ustadz_id = Some(patch.ustadz_id.clone());
        post.ustadz_name = Some(patch.ustadz_name.clone());
        post.answered = patch.answered;
        post.answered_at = Some(patch.answered_at);
        inner.notify();
        Ok(())
    }

    async fn subscribe_posts(&self) -> Result<PostSubscription, StoreError> {
        if let Some(error) = self.take_failure() {
            return Err(error);
        }

        let (tx, rx) = mpsc::unbounded_channel();
        let id = {
            let mut inner = self.inner.lock().unwrap();
            let id = inner.next_listener_id;
            inner.next_listener_id += 1;
            // Initial snapshot before any change arrives.
            let _ = tx.send(Ok(inner.snapshot()));
            inner.listeners.push((id, tx));
            id
        };

        let registry = Arc::clone(&self.inner);
        Ok(PostSubscription::new(rx, move || {
            let mut inner = registry.lock().unwrap();
            inner.listeners.retain(|(listener_id, _)| *listener_id != id);
        }))
    }
}
