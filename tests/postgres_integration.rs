//! Integration tests for the PostgreSQL adapters.
//!
//! These need a live database and are skipped by default. Run with:
//!
//! ```text
//! DATABASE_URL=postgres://localhost/interest_channels_test cargo test -- --ignored
//! ```
//!
//! Every test uses fresh user ids and titles, so runs can share one database.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use uuid::Uuid;

use interest_channels::adapters::postgres::{
    run_migrations, PostgresChannelRepository, PostgresLexiconRepository,
    PostgresSurveyAnalysisRepository,
};
use interest_channels::domain::channel::Channel;
use interest_channels::domain::foundation::{Timestamp, UserId};
use interest_channels::domain::interests::{
    AnalysisOutcome, InterestExtraction, LexicalEntry, LexicalKind, SurveyAnalysis,
    SurveyResponse, SurveySubmission,
};
use interest_channels::ports::{
    AddResult, ChannelRepository, LexiconRepository, SaveResult, SurveyAnalysisRepository,
    WindowSave,
};

// =============================================================================
// Test Infrastructure
// =============================================================================

async fn pool() -> PgPool {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let pool = PgPoolOptions::new()
        .max_connections(4)
        .connect(&url)
        .await
        .expect("Failed to connect to PostgreSQL");
    run_migrations(&pool).await.expect("Failed to run migrations");
    pool
}

fn unique_user() -> UserId {
    UserId::new(format!("user-{}", Uuid::new_v4())).unwrap()
}

fn analysis(user_id: &UserId, interests: &[&str], edited_at: Timestamp) -> SurveyAnalysis {
    let submission =
        SurveySubmission::new(vec![SurveyResponse::new("Hobbies?", interests.join(" "))]).unwrap();
    let outcome = AnalysisOutcome {
        extraction: InterestExtraction {
            selected_interests: interests.iter().map(|s| s.to_string()).collect(),
            matched_categories: vec![],
        },
        classifier_categories: None,
    };
    SurveyAnalysis::new(user_id.clone(), submission, &outcome, edited_at)
}

// =============================================================================
// Survey analyses
// =============================================================================

#[tokio::test]
#[ignore = "Requires PostgreSQL (set DATABASE_URL)"]
async fn save_inside_edit_window_is_refused() {
    let repo = PostgresSurveyAnalysisRepository::new(pool().await);
    let user = unique_user();
    let now = Timestamp::now();
    let cutoff = now.add_days(-7);

    let first = analysis(&user, &["chess"], now);
    assert_eq!(
        repo.save_if_window_elapsed(&first, cutoff).await.unwrap(),
        WindowSave::Saved
    );

    let second = analysis(&user, &["painting"], now);
    match repo.save_if_window_elapsed(&second, cutoff).await.unwrap() {
        WindowSave::WindowClosed { last_edited_at } => {
            assert_eq!(last_edited_at.as_unix_secs(), now.as_unix_secs());
        }
        other => panic!("expected WindowClosed, got {:?}", other),
    }

    let stored = repo.find_by_user(&user).await.unwrap().unwrap();
    assert_eq!(stored.selected_interests, vec!["chess"]);
}

#[tokio::test]
#[ignore = "Requires PostgreSQL (set DATABASE_URL)"]
async fn save_after_edit_window_replaces_record_and_keeps_id() {
    let repo = PostgresSurveyAnalysisRepository::new(pool().await);
    let user = unique_user();
    let now = Timestamp::now();

    let old = analysis(&user, &["chess"], now.add_days(-8));
    repo.save_if_window_elapsed(&old, now.add_days(-15)).await.unwrap();

    let fresh = analysis(&user, &["painting"], now);
    assert_eq!(
        repo.save_if_window_elapsed(&fresh, now.add_days(-7)).await.unwrap(),
        WindowSave::Saved
    );

    let stored = repo.find_by_user(&user).await.unwrap().unwrap();
    assert_eq!(stored.id, old.id);
    assert_eq!(stored.selected_interests, vec!["painting"]);
    assert_eq!(stored.last_edited_at.as_unix_secs(), now.as_unix_secs());
}

#[tokio::test]
#[ignore = "Requires PostgreSQL (set DATABASE_URL)"]
async fn concurrent_saves_inside_window_write_once() {
    let repo = PostgresSurveyAnalysisRepository::new(pool().await);
    let user = unique_user();
    let now = Timestamp::now();
    let cutoff = now.add_days(-7);

    let a = analysis(&user, &["chess"], now);
    let b = analysis(&user, &["painting"], now);
    let (ra, rb) = tokio::join!(
        repo.save_if_window_elapsed(&a, cutoff),
        repo.save_if_window_elapsed(&b, cutoff)
    );

    let saved = [ra.unwrap(), rb.unwrap()]
        .iter()
        .filter(|r| **r == WindowSave::Saved)
        .count();
    assert_eq!(saved, 1);
}

// =============================================================================
// Channels
// =============================================================================

#[tokio::test]
#[ignore = "Requires PostgreSQL (set DATABASE_URL)"]
async fn channel_insert_if_absent_keeps_first_row() {
    let repo = PostgresChannelRepository::new(pool().await);
    let title = format!("robotics {}", Uuid::new_v4());

    let first = Channel::new(title.clone()).unwrap();
    let second = Channel::new(title.clone()).unwrap();

    assert_eq!(repo.insert_if_absent(&first).await.unwrap(), SaveResult::Inserted);
    assert_eq!(
        repo.insert_if_absent(&second).await.unwrap(),
        SaveResult::AlreadyExists
    );

    let stored = repo.find_by_title(&title).await.unwrap().unwrap();
    assert_eq!(stored.id, first.id);
}

#[tokio::test]
#[ignore = "Requires PostgreSQL (set DATABASE_URL)"]
async fn concurrent_channel_inserts_create_one_row() {
    let repo = PostgresChannelRepository::new(pool().await);
    let title = format!("astronomy {}", Uuid::new_v4());

    let a = Channel::new(title.clone()).unwrap();
    let b = Channel::new(title.clone()).unwrap();
    let (ra, rb) = tokio::join!(repo.insert_if_absent(&a), repo.insert_if_absent(&b));

    let inserted = [ra.unwrap(), rb.unwrap()]
        .iter()
        .filter(|r| **r == SaveResult::Inserted)
        .count();
    assert_eq!(inserted, 1);
}

// =============================================================================
// Lexicon
// =============================================================================

#[tokio::test]
#[ignore = "Requires PostgreSQL (set DATABASE_URL)"]
async fn duplicate_lexicon_entry_is_reported() {
    let repo = PostgresLexiconRepository::new(pool().await);
    let word = format!("stop{}", Uuid::new_v4().simple());
    let entry = LexicalEntry::new(LexicalKind::Stopword, &word).unwrap();

    assert_eq!(repo.add(&entry).await.unwrap(), AddResult::Added);
    assert_eq!(repo.add(&entry).await.unwrap(), AddResult::Duplicate);
    assert!(repo.list_stopwords().await.unwrap().contains(&word));

    assert!(repo.remove(LexicalKind::Stopword, &word).await.unwrap());
    assert!(!repo.remove(LexicalKind::Stopword, &word).await.unwrap());
}
