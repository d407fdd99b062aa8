//! Integration tests for asset CRUD across all three variants:
//! create/get round trips, per-type id monotonicity, update semantics,
//! hard delete, and empty-page metadata.

use assert_matches::assert_matches;
use assetdeck_core::asset::{
    Asset, AssetData, AssetQuery, AssetType, Audience, Chart, Gender, Insight, XyData,
};
use assetdeck_db::error::DbError;
use assetdeck_db::repositories::AssetRepo;
use sqlx::SqlitePool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_insight(description: &str) -> AssetData {
    AssetData::Insight(Insight {
        text: "40% of millenials spend more than 3 hours on social media daily".into(),
        description: description.into(),
    })
}

fn new_chart(description: &str) -> AssetData {
    AssetData::Chart(Chart {
        title: "Relationship between tax and GDP".into(),
        description: description.into(),
        x_title: "GDP".into(),
        y_title: "Tax".into(),
        data: XyData {
            x: vec![1.0, 2.0, 3.0, 4.0, 5.0],
            y: vec![1.5, 2.5, 3.5, 4.5, 5.5],
        },
    })
}

fn new_audience(description: &str) -> AssetData {
    AssetData::Audience(Audience {
        age_min: 20,
        age_max: 30,
        gender: Gender::Female,
        country: "Sweden".into(),
        hours_spent: 3.0,
        number_of_purchases: 3,
        description: description.into(),
    })
}

fn assert_round_trip(created: &Asset, fetched: &Asset, input: &AssetData) {
    assert_eq!(created.id, fetched.id);
    assert_eq!(&created.data, input);
    assert_eq!(&fetched.data, input);
    assert_eq!(created.is_favourite, None);
    assert_eq!(fetched.is_favourite, None);
}

// ---------------------------------------------------------------------------
// Create / get
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn insight_round_trips(pool: SqlitePool) {
    let input = new_insight("round trip");
    let created = AssetRepo::create(&pool, &input).await.unwrap();
    assert_eq!(created.id, 1);

    let fetched = AssetRepo::get(&pool, AssetType::Insight, created.id)
        .await
        .unwrap();
    assert_round_trip(&created, &fetched, &input);
}

#[sqlx::test(migrations = "./migrations")]
async fn chart_round_trips(pool: SqlitePool) {
    let input = new_chart("round trip");
    let created = AssetRepo::create(&pool, &input).await.unwrap();
    assert_eq!(created.id, 1);

    let fetched = AssetRepo::get(&pool, AssetType::Chart, created.id)
        .await
        .unwrap();
    assert_round_trip(&created, &fetched, &input);
}

#[sqlx::test(migrations = "./migrations")]
async fn audience_round_trips(pool: SqlitePool) {
    let input = new_audience("round trip");
    let created = AssetRepo::create(&pool, &input).await.unwrap();
    assert_eq!(created.id, 1);

    let fetched = AssetRepo::get(&pool, AssetType::Audience, created.id)
        .await
        .unwrap();
    assert_round_trip(&created, &fetched, &input);
}

#[sqlx::test(migrations = "./migrations")]
async fn ids_are_monotonic_per_type(pool: SqlitePool) {
    // Interleave variants: each table owns its own id sequence.
    for i in 1..=3 {
        let insight = AssetRepo::create(&pool, &new_insight("i")).await.unwrap();
        assert_eq!(insight.id, i);
    }
    for i in 1..=2 {
        let chart = AssetRepo::create(&pool, &new_chart("c")).await.unwrap();
        assert_eq!(chart.id, i);
    }
    let audience = AssetRepo::create(&pool, &new_audience("a")).await.unwrap();
    assert_eq!(audience.id, 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn get_missing_is_not_found(pool: SqlitePool) {
    let err = AssetRepo::get(&pool, AssetType::Chart, 99).await.unwrap_err();
    assert_matches!(
        err,
        DbError::NotFound {
            entity: "chart",
            id: 99
        }
    );
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn update_overwrites_all_payload_fields(pool: SqlitePool) {
    let created = AssetRepo::create(&pool, &new_audience("before")).await.unwrap();

    let replacement = AssetData::Audience(Audience {
        age_min: 35,
        age_max: 50,
        gender: Gender::Male,
        country: "Greece".into(),
        hours_spent: 1.5,
        number_of_purchases: 12,
        description: "after".into(),
    });
    let updated = AssetRepo::update(&pool, created.id, &replacement)
        .await
        .unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.data, replacement);

    let fetched = AssetRepo::get(&pool, AssetType::Audience, created.id)
        .await
        .unwrap();
    assert_eq!(fetched.data, replacement);
}

#[sqlx::test(migrations = "./migrations")]
async fn update_missing_id_is_not_found(pool: SqlitePool) {
    let err = AssetRepo::update(&pool, 7, &new_insight("nope"))
        .await
        .unwrap_err();
    assert_matches!(
        err,
        DbError::NotFound {
            entity: "insight",
            id: 7
        }
    );
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn delete_is_hard_and_idempotent(pool: SqlitePool) {
    let created = AssetRepo::create(&pool, &new_chart("doomed")).await.unwrap();

    AssetRepo::delete(&pool, AssetType::Chart, created.id)
        .await
        .unwrap();
    let err = AssetRepo::get(&pool, AssetType::Chart, created.id)
        .await
        .unwrap_err();
    assert_matches!(err, DbError::NotFound { .. });

    // Deleting an absent row still succeeds.
    AssetRepo::delete(&pool, AssetType::Chart, created.id)
        .await
        .unwrap();
}

#[sqlx::test(migrations = "./migrations")]
async fn deleted_ids_are_never_reused(pool: SqlitePool) {
    let first = AssetRepo::create(&pool, &new_insight("one")).await.unwrap();
    AssetRepo::delete(&pool, AssetType::Insight, first.id)
        .await
        .unwrap();

    let second = AssetRepo::create(&pool, &new_insight("two")).await.unwrap();
    assert_eq!(second.id, first.id + 1);
}

// ---------------------------------------------------------------------------
// Empty listing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn empty_list_has_zero_page_bounds(pool: SqlitePool) {
    let page = AssetRepo::list(
        &pool,
        &AssetQuery {
            limit: 10,
            last_id: 0,
            asset_type: AssetType::Audience,
            is_desc: false,
        },
    )
    .await
    .unwrap();

    assert_eq!(page.first_id, 0);
    assert_eq!(page.last_id, 0);
    assert_eq!(page.limit, 10);
    assert_eq!(page.asset_type, AssetType::Audience);
    assert!(page.assets.is_empty());
}
