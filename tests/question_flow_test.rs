//! Create-question and answer-question flows, observed through the
//! realtime feed.

mod common;

use common::*;
use futures::StreamExt;
use halaqa_core::models::{Category, Question};
use halaqa_core::traits::DocumentStore;
use halaqa_core::ui_state::UiState;

#[tokio::test]
async fn created_question_appears_first_in_feed_with_server_id() {
    let (_, posts, _) = seeded_gateways();

    let draft = Question::new(USER_UID, "Amin", "Bagaimana hukum jual beli emas?", Category::Fiqih);
    let states: Vec<_> = posts.create_post(draft.clone()).collect().await;
    assert_eq!(states, vec![UiState::Loading, UiState::Success(true)]);

    let mut feed = posts.all_posts();
    assert_eq!(feed.next().await, Some(UiState::Loading));
    let snapshot = feed.next().await.unwrap();
    let list = snapshot.success().unwrap();

    let first = &list[0];
    assert!(!first.id.is_empty());
    assert_eq!(first.question, draft.question);
    assert_eq!(first.category, Category::Fiqih);
    assert!(!first.answered);
}

#[tokio::test]
async fn answering_shows_up_in_next_feed_emission() {
    let (_, posts, store) = seeded_gateways();
    store.seed_post(question_at("q1", Category::Ibadah, 30, false));

    let mut feed = posts.all_posts();
    feed.next().await; // Loading
    let initial = feed.next().await.unwrap();
    assert!(!initial.success().unwrap()[0].answered);

    let states: Vec<_> = posts
        .answer_post("q1", "Jawabannya begini...", USTADZ_UID, "Ustadz A")
        .collect()
        .await;
    assert_eq!(states, vec![UiState::Loading, UiState::Success(true)]);

    let next = feed.next().await.unwrap();
    let answered = &next.success().unwrap()[0];
    assert!(answered.answered);
    assert_eq!(answered.answer.as_deref(), Some("Jawabannya begini..."));
    assert_eq!(answered.ustadz_id.as_deref(), Some(USTADZ_UID));
    assert_eq!(answered.ustadz_name.as_deref(), Some("Ustadz A"));
    assert!(answered.answered_at.is_some());
}

#[tokio::test]
async fn feed_stays_sorted_by_timestamp_descending() {
    let (_, posts, store) = seeded_gateways();
    // Seed out of insertion order.
    store.seed_post(question_at("mid", Category::Ibadah, 30, false));
    store.seed_post(question_at("oldest", Category::Fiqih, 90, true));
    store.seed_post(question_at("newest", Category::Akhlak, 5, false));

    let mut feed = posts.all_posts();
    feed.next().await; // Loading
    let snapshot = feed.next().await.unwrap();
    let ids: Vec<&str> = snapshot
        .success()
        .unwrap()
        .iter()
        .map(|q| q.id.as_str())
        .collect();
    assert_eq!(ids, vec!["newest", "mid", "oldest"]);

    // A late insert between existing ones keeps the order.
    store
        .set_post(&question_at("recent", Category::Sejarah, 10, false))
        .await
        .unwrap();
    let snapshot = feed.next().await.unwrap();
    let ids: Vec<&str> = snapshot
        .success()
        .unwrap()
        .iter()
        .map(|q| q.id.as_str())
        .collect();
    assert_eq!(ids, vec!["newest", "recent", "mid", "oldest"]);
}

#[tokio::test]
async fn concurrent_creates_each_trigger_an_emission() {
    let (_, posts, _) = seeded_gateways();

    let mut feed = posts.all_posts();
    feed.next().await; // Loading
    feed.next().await; // initial empty snapshot

    let a = posts
        .create_post(Question::new(USER_UID, "Amin", "first", Category::Fiqih))
        .collect::<Vec<_>>();
    let b = posts
        .create_post(Question::new(USER_UID, "Amin", "second", Category::Ibadah))
        .collect::<Vec<_>>();
    let (states_a, states_b) = tokio::join!(a, b);
    assert_eq!(states_a[1], UiState::Success(true));
    assert_eq!(states_b[1], UiState::Success(true));

    // One emission per committed write; the second snapshot holds both.
    feed.next().await.unwrap();
    let snapshot = feed.next().await.unwrap();
    assert_eq!(snapshot.success().unwrap().len(), 2);
}
