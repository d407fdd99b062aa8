//! Pool and migration bootstrap tests.

use sqlx::SqlitePool;

/// Full bootstrap: migrate, verify schema, health check.
#[sqlx::test(migrations = "./migrations")]
async fn full_bootstrap(pool: SqlitePool) {
    assetdeck_db::health_check(&pool).await.unwrap();

    let tables = [
        "insights",
        "charts",
        "audiences",
        "favourite_insights",
        "favourite_charts",
        "favourite_audiences",
    ];
    for table in tables {
        let count: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&pool)
            .await
            .unwrap_or_else(|e| panic!("{table} query failed: {e}"));
        assert_eq!(count.0, 0, "{table} should start empty");
    }
}

/// The library-level pool constructor and migrator work end to end.
#[tokio::test]
async fn create_pool_and_migrate() {
    let path = std::env::temp_dir().join(format!("assetdeck-bootstrap-{}.sqlite", std::process::id()));
    let _ = std::fs::remove_file(&path);

    let url = format!("sqlite://{}", path.display());
    let pool = assetdeck_db::create_pool(&url).await.unwrap();
    assetdeck_db::run_migrations(&pool).await.unwrap();
    assetdeck_db::health_check(&pool).await.unwrap();

    pool.close().await;
    let _ = std::fs::remove_file(&path);
}
