//! Common test utilities for integration tests.
//!
//! Provides seeded mock environments and question fixtures shared by the
//! flow tests.
#![allow(dead_code)]

use std::sync::{Arc, Once};

use chrono::{Duration, Utc};
use halaqa_core::adapters::mock::{MockDocumentStore, MockIdentityProvider};
use halaqa_core::models::{Category, Question, Role, User};
use halaqa_core::repository::{AuthRepository, PostRepository};
use halaqa_core::traits::DocumentStore;

static TRACING: Once = Once::new();

/// Install the log subscriber once per test binary. Verbosity comes from
/// `RUST_LOG`; output is routed through the test writer so it interleaves
/// with captured test output.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Email/password/uid of the seeded regular user.
pub const USER_EMAIL: &str = "amin@example.com";
pub const USER_PASSWORD: &str = "secret123";
pub const USER_UID: &str = "uid-amin";

/// Uid of the seeded ustadz.
pub const USTADZ_UID: &str = "uid-ustadz";

/// A question posted `minutes_ago`, optionally answered.
pub fn question_at(id: &str, category: Category, minutes_ago: i64, answered: bool) -> Question {
    let mut post = Question::new(USER_UID, "Amin", format!("question {id}"), category);
    post.id = id.to_string();
    post.timestamp = Utc::now() - Duration::minutes(minutes_ago);
    post.answered = answered;
    post
}

/// Identity provider with the regular user and the ustadz registered.
pub fn seeded_identity() -> MockIdentityProvider {
    let identity = MockIdentityProvider::new();
    identity.add_account(USER_EMAIL, USER_PASSWORD, USER_UID, Some("Amin"));
    identity.add_account("ustadz@example.com", "secret456", USTADZ_UID, Some("Ustadz A"));
    identity
}

/// Store with matching profile records for both seeded accounts.
pub fn seeded_store() -> MockDocumentStore {
    let store = MockDocumentStore::new();
    store.seed_user(User {
        id: USER_UID.into(),
        name: "Amin".into(),
        email: USER_EMAIL.into(),
        role: Role::User,
        ..Default::default()
    });
    store.seed_user(User {
        id: USTADZ_UID.into(),
        name: "Ustadz A".into(),
        email: "ustadz@example.com".into(),
        role: Role::Ustadz,
        ..Default::default()
    });
    store
}

/// Fully wired gateways over a fresh seeded environment.
pub fn seeded_gateways() -> (AuthRepository, PostRepository, Arc<MockDocumentStore>) {
    init_tracing();
    let store = Arc::new(seeded_store());
    let auth = AuthRepository::new(
        Arc::new(seeded_identity()),
        Arc::clone(&store) as Arc<dyn DocumentStore>,
    );
    let posts = PostRepository::new(Arc::clone(&store) as Arc<dyn DocumentStore>);
    (auth, posts, store)
}
