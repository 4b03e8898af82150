//! Feed screen view state: the live question list merged with local filters.
//!
//! Three independently settable inputs - the base feed state from the post
//! gateway, the selected category and the "only unanswered" toggle - are
//! combined into one derived `UiState` every time any of them changes. The
//! composed value is published through a `tokio::sync::watch` channel so a
//! renderer can await changes without polling.

use tokio::sync::watch;
use tracing::debug;

use crate::models::{CategoryFilter, Question, Role};
use crate::traits::DocumentStore;
use crate::ui_state::UiState;

/// Combine-latest composer for the feed screen.
///
/// `Success` base states are filtered through the latest filter values at
/// composition time; `Idle`, `Loading` and `Error` pass through untouched.
/// Filter setters never force the composed state back to `Loading` - only a
/// fresh base emission can, and in practice that happens once at
/// subscription start.
pub struct FeedViewState {
    base: UiState<Vec<Question>>,
    category: CategoryFilter,
    only_unanswered: bool,
    role: Option<Role>,
    composed: watch::Sender<UiState<Vec<Question>>>,
}

impl FeedViewState {
    /// A composer with no base emission yet: composed state is `Idle`,
    /// filters at their defaults, role undetermined.
    pub fn new() -> Self {
        let (composed, _) = watch::channel(UiState::Idle);
        Self {
            base: UiState::Idle,
            category: CategoryFilter::All,
            only_unanswered: false,
            role: None,
            composed,
        }
    }

    /// Subscribe to composed-state changes.
    pub fn watch(&self) -> watch::Receiver<UiState<Vec<Question>>> {
        self.composed.subscribe()
    }

    /// The current composed state.
    pub fn composed(&self) -> UiState<Vec<Question>> {
        self.composed.borrow().clone()
    }

    /// Feed a base emission from the gateway stream.
    pub fn set_base(&mut self, state: UiState<Vec<Question>>) {
        self.base = state;
        self.recompute();
    }

    /// Select a category filter. Pure, synchronous, idempotent.
    pub fn set_category_filter(&mut self, filter: CategoryFilter) {
        self.category = filter;
        self.recompute();
    }

    /// Toggle the "only unanswered" filter. Pure, synchronous, idempotent.
    pub fn set_only_unanswered(&mut self, only_unanswered: bool) {
        self.only_unanswered = only_unanswered;
        self.recompute();
    }

    /// The currently selected category filter.
    pub fn category_filter(&self) -> CategoryFilter {
        self.category
    }

    /// Whether the unanswered filter is on.
    pub fn only_unanswered(&self) -> bool {
        self.only_unanswered
    }

    /// The fetched role, if the lookup has completed and succeeded.
    pub fn role(&self) -> Option<Role> {
        self.role
    }

    /// Whether the unanswered filter control is meaningful for this actor.
    pub fn can_filter_unanswered(&self) -> bool {
        self.role == Some(Role::Ustadz)
    }

    /// Set the actor role directly (e.g. from a cached session).
    pub fn set_role(&mut self, role: Option<Role>) {
        self.role = role;
    }

    /// One-shot role lookup, performed once per screen activation.
    ///
    /// A failed lookup leaves the role undetermined; it never surfaces as
    /// an `Error` on the composed stream.
    pub async fn load_role(&mut self, store: &dyn DocumentStore, uid: &str) {
        match store.get_user(uid).await {
            Ok(user) => self.role = Some(user.role),
            Err(error) => {
                debug!(%error, uid, "role lookup failed, leaving role undetermined");
                self.role = None;
            }
        }
    }

    /// Recompute from the latest inputs and publish if the result changed.
    fn recompute(&mut self) {
        let next = self.compose();
        self.composed.send_if_modified(|current| {
            if *current == next {
                false
            } else {
                *current = next;
                true
            }
        });
    }

    fn compose(&self) -> UiState<Vec<Question>> {
        match &self.base {
            UiState::Success(posts) => {
                let filtered = posts
                    .iter()
                    .filter(|post| self.category.matches(post.category))
                    .filter(|post| !self.only_unanswered || !post.answered)
                    .cloned()
                    .collect();
                UiState::Success(filtered)
            }
            other => other.clone(),
        }
    }
}

impl Default for FeedViewState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::MockDocumentStore;
    use crate::models::{Category, User};

    fn post(id: &str, category: Category, answered: bool) -> Question {
        let mut post = Question::new("u1", "Amin", format!("question {id}"), category);
        post.id = id.to_string();
        post.answered = answered;
        post
    }

    fn five_posts() -> Vec<Question> {
        vec![
            post("q1", Category::Fiqih, true),
            post("q2", Category::Fiqih, false),
            post("q3", Category::Ibadah, false),
            post("q4", Category::Sejarah, true),
            post("q5", Category::Akhlak, false),
        ]
    }

    #[test]
    fn test_initial_state_is_idle() {
        let view = FeedViewState::new();
        assert_eq!(view.composed(), UiState::Idle);
        assert_eq!(view.category_filter(), CategoryFilter::All);
        assert!(!view.only_unanswered());
        assert!(view.role().is_none());
    }

    #[test]
    fn test_loading_and_error_pass_through_filters() {
        let mut view = FeedViewState::new();
        view.set_category_filter(CategoryFilter::Only(Category::Fiqih));
        view.set_only_unanswered(true);

        view.set_base(UiState::Loading);
        assert_eq!(view.composed(), UiState::Loading);

        view.set_base(UiState::Error("down".into()));
        assert_eq!(view.composed(), UiState::Error("down".into()));
    }

    #[test]
    fn test_category_then_unanswered_composition() {
        // 5 posts, 2 in Fiqih, 1 of those unanswered.
        let mut view = FeedViewState::new();
        view.set_base(UiState::Success(five_posts()));
        view.set_category_filter(CategoryFilter::Only(Category::Fiqih));
        view.set_only_unanswered(true);

        let composed = view.composed();
        let posts = composed.success().unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].id, "q2");
    }

    #[test]
    fn test_filters_recompute_from_latest_base() {
        let mut view = FeedViewState::new();
        view.set_category_filter(CategoryFilter::Only(Category::Ibadah));
        view.set_base(UiState::Success(five_posts()));

        // Fresh base list with the latest filter, not a stale mix.
        let composed = view.composed();
        assert_eq!(composed.success().unwrap().len(), 1);

        view.set_base(UiState::Success(vec![post("q9", Category::Ibadah, false)]));
        let composed = view.composed();
        assert_eq!(composed.success().unwrap()[0].id, "q9");
    }

    #[test]
    fn test_clearing_filters_restores_full_list() {
        let mut view = FeedViewState::new();
        view.set_base(UiState::Success(five_posts()));
        view.set_category_filter(CategoryFilter::Only(Category::Fiqih));
        assert_eq!(view.composed().success().unwrap().len(), 2);

        view.set_category_filter(CategoryFilter::All);
        assert_eq!(view.composed().success().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_idempotent_setter_emits_once() {
        let mut view = FeedViewState::new();
        view.set_base(UiState::Success(five_posts()));

        let mut rx = view.watch();
        rx.mark_unchanged();

        view.set_category_filter(CategoryFilter::Only(Category::Fiqih));
        assert!(rx.has_changed().unwrap());
        let first = rx.borrow_and_update().clone();

        // Same value again: no further change notification, same value.
        view.set_category_filter(CategoryFilter::Only(Category::Fiqih));
        assert!(!rx.has_changed().unwrap());
        assert_eq!(view.composed(), first);
    }

    #[tokio::test]
    async fn test_watch_observes_composed_changes() {
        let mut view = FeedViewState::new();
        let mut rx = view.watch();

        view.set_base(UiState::Loading);
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow(), UiState::Loading);

        view.set_base(UiState::Success(five_posts()));
        rx.changed().await.unwrap();
        assert!(rx.borrow().is_success());
    }

    #[test]
    fn test_success_never_returns_to_loading_on_filter_change() {
        let mut view = FeedViewState::new();
        view.set_base(UiState::Success(five_posts()));
        view.set_only_unanswered(true);
        assert!(view.composed().is_success());
        view.set_category_filter(CategoryFilter::Only(Category::Sejarah));
        assert!(view.composed().is_success());
    }

    #[tokio::test]
    async fn test_load_role_success_and_failure() {
        let store = MockDocumentStore::new();
        store.seed_user(User {
            id: "u9".into(),
            name: "Ustadz A".into(),
            email: "ua@x.com".into(),
            role: Role::Ustadz,
            ..Default::default()
        });

        let mut view = FeedViewState::new();
        view.load_role(&store, "u9").await;
        assert_eq!(view.role(), Some(Role::Ustadz));
        assert!(view.can_filter_unanswered());

        // Unknown uid: role stays undetermined, composed stream untouched.
        view.load_role(&store, "missing").await;
        assert!(view.role().is_none());
        assert!(!view.can_filter_unanswered());
        assert_eq!(view.composed(), UiState::Idle);
    }
}
