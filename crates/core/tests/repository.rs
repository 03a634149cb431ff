//! Repository tests against a live PostgreSQL instance.
//!
//! These demonstrate the store-level invariants: seeding happens at most
//! once, a duplicate tour slug performs no write, and a stale `baseVersion`
//! is rejected without touching the document. They are skipped when
//! `DATABASE_URL` is not set so the suite stays runnable without a database.

use druk_travel_core::repository::content::ContentRepository;
use druk_travel_core::repository::tours::TourRepository;
use druk_travel_core::repository::RepoError;
use druk_travel_core::tour::TourDraft;
use serde_json::json;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use uuid::Uuid;

async fn test_pool() -> Option<PgPool> {
    let url = std::env::var("DATABASE_URL").ok()?;
    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&url)
        .await
        .ok()?;
    sqlx::migrate!("../../migrations").run(&pool).await.ok()?;
    Some(pool)
}

#[tokio::test]
async fn content_seeds_once_and_rejects_stale_versions() {
    let Some(pool) = test_pool().await else {
        return;
    };
    let repo = ContentRepository::new(pool);

    // Back-to-back reads return the identical document; the second call
    // must not re-seed or bump the version.
    let first = repo.get_or_seed().await.unwrap();
    let second = repo.get_or_seed().await.unwrap();
    assert_eq!(second.version, first.version);
    assert_eq!(second.document, first.document);

    // A write based on a stale version fails and leaves the store as-is.
    let err = repo
        .update_section("gallery", &json!({"images": []}), first.version + 999)
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::Conflict { .. }), "got: {err}");

    let after = repo.get_or_seed().await.unwrap();
    assert_eq!(after.version, first.version);
    assert_eq!(after.document, first.document);
}

#[tokio::test]
async fn duplicate_tour_slug_is_rejected_without_a_write() {
    let Some(pool) = test_pool().await else {
        return;
    };
    let repo = TourRepository::new(pool);

    let slug = format!("druk-path-trek-{}", Uuid::new_v4());
    let draft = |title: &str| TourDraft {
        title: Some(title.into()),
        slug: Some(slug.clone()),
        description: Some("A classic five-day trek from Paro to Thimphu.".into()),
        duration: Some("7 Days / 6 Nights".into()),
        price: Some(2890.0),
        image_url: Some("/images/tours/druk-path.jpg".into()),
        group_size: Some("4-12".into()),
        difficulty: Some("Moderate".into()),
        best_time: Some("March-May, September-November".into()),
        ..TourDraft::default()
    };

    repo.create(draft("Druk Path Trek")).await.unwrap();
    let err = repo.create(draft("Druk Path Trek II")).await.unwrap_err();
    assert!(err.to_string().contains(&slug), "got: {err}");

    // The original record is the only one standing, untouched.
    let survivors: Vec<_> = repo
        .list()
        .await
        .unwrap()
        .into_iter()
        .filter(|t| t.slug == slug)
        .collect();
    assert_eq!(survivors.len(), 1);
    assert_eq!(survivors[0].title, "Druk Path Trek");

    repo.delete(&slug).await.unwrap();
}
