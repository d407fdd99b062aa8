//! Repository for the three asset variant tables.
//!
//! Create and update dispatch on the concrete payload variant; get, delete,
//! and list dispatch on the caller-supplied type tag. The variant set is
//! closed at compile time, so no unknown-type arm exists here.

use assetdeck_core::asset::{Asset, AssetData, AssetPage, AssetQuery, AssetType};
use assetdeck_core::types::DbId;
use sqlx::sqlite::SqliteRow;
use sqlx::types::Json;
use sqlx::{FromRow, SqlitePool};

use crate::error::{DbError, DbResult};
use crate::models::audience::AudienceRow;
use crate::models::chart::ChartRow;
use crate::models::insight::InsightRow;
use crate::pagination::{build_page, Keyset};

use super::tables;
use super::tables::{AUDIENCE_COLUMNS, CHART_COLUMNS, INSIGHT_COLUMNS};

/// CRUD and plain listing over any asset variant.
pub struct AssetRepo;

impl AssetRepo {
    /// Persist a new asset, returning the assigned id and the round-tripped
    /// payload.
    pub async fn create(pool: &SqlitePool, data: &AssetData) -> DbResult<Asset> {
        let asset = match data {
            AssetData::Insight(insight) => {
                let query = format!(
                    "INSERT INTO insights (text, description) \
                     VALUES (?1, ?2) \
                     RETURNING {INSIGHT_COLUMNS}"
                );
                sqlx::query_as::<_, InsightRow>(&query)
                    .bind(&insight.text)
                    .bind(&insight.description)
                    .fetch_one(pool)
                    .await
                    .map_err(DbError::database("create asset"))?
                    .into_asset()
            }
            AssetData::Chart(chart) => {
                let query = format!(
                    "INSERT INTO charts (title, description, x_title, y_title, x_data, y_data) \
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6) \
                     RETURNING {CHART_COLUMNS}"
                );
                sqlx::query_as::<_, ChartRow>(&query)
                    .bind(&chart.title)
                    .bind(&chart.description)
                    .bind(&chart.x_title)
                    .bind(&chart.y_title)
                    .bind(Json(&chart.data.x))
                    .bind(Json(&chart.data.y))
                    .fetch_one(pool)
                    .await
                    .map_err(DbError::database("create asset"))?
                    .into_asset()
            }
            AssetData::Audience(audience) => {
                let query = format!(
                    "INSERT INTO audiences (\
                        age_min, age_max, gender, country, \
                        hours_spent, number_of_purchases, description\
                     ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7) \
                     RETURNING {AUDIENCE_COLUMNS}"
                );
                sqlx::query_as::<_, AudienceRow>(&query)
                    .bind(audience.age_min)
                    .bind(audience.age_max)
                    .bind(audience.gender.as_str())
                    .bind(&audience.country)
                    .bind(audience.hours_spent)
                    .bind(audience.number_of_purchases)
                    .bind(&audience.description)
                    .fetch_one(pool)
                    .await
                    .map_err(DbError::database("create asset"))?
                    .into_asset()
            }
        };
        tracing::debug!(
            asset_type = asset.data.asset_type().as_str(),
            id = asset.id,
            "created asset"
        );
        Ok(asset)
    }

    /// Overwrite all payload fields of an existing asset. The type is
    /// inferred from the payload variant. Fails with `NotFound` when no row
    /// with that id exists for the variant's table.
    pub async fn update(pool: &SqlitePool, id: DbId, data: &AssetData) -> DbResult<Asset> {
        let row_to_asset = match data {
            AssetData::Insight(insight) => {
                let query = format!(
                    "UPDATE insights SET \
                        text = ?2, description = ?3, updated_at = CURRENT_TIMESTAMP \
                     WHERE id = ?1 \
                     RETURNING {INSIGHT_COLUMNS}"
                );
                sqlx::query_as::<_, InsightRow>(&query)
                    .bind(id)
                    .bind(&insight.text)
                    .bind(&insight.description)
                    .fetch_optional(pool)
                    .await
                    .map_err(DbError::database("update asset"))?
                    .map(InsightRow::into_asset)
            }
            AssetData::Chart(chart) => {
                let query = format!(
                    "UPDATE charts SET \
                        title = ?2, description = ?3, x_title = ?4, y_title = ?5, \
                        x_data = ?6, y_data = ?7, updated_at = CURRENT_TIMESTAMP \
                     WHERE id = ?1 \
                     RETURNING {CHART_COLUMNS}"
                );
                sqlx::query_as::<_, ChartRow>(&query)
                    .bind(id)
                    .bind(&chart.title)
                    .bind(&chart.description)
                    .bind(&chart.x_title)
                    .bind(&chart.y_title)
                    .bind(Json(&chart.data.x))
                    .bind(Json(&chart.data.y))
                    .fetch_optional(pool)
                    .await
                    .map_err(DbError::database("update asset"))?
                    .map(ChartRow::into_asset)
            }
            AssetData::Audience(audience) => {
                let query = format!(
                    "UPDATE audiences SET \
                        age_min = ?2, age_max = ?3, gender = ?4, country = ?5, \
                        hours_spent = ?6, number_of_purchases = ?7, description = ?8, \
                        updated_at = CURRENT_TIMESTAMP \
                     WHERE id = ?1 \
                     RETURNING {AUDIENCE_COLUMNS}"
                );
                sqlx::query_as::<_, AudienceRow>(&query)
                    .bind(id)
                    .bind(audience.age_min)
                    .bind(audience.age_max)
                    .bind(audience.gender.as_str())
                    .bind(&audience.country)
                    .bind(audience.hours_spent)
                    .bind(audience.number_of_purchases)
                    .bind(&audience.description)
                    .fetch_optional(pool)
                    .await
                    .map_err(DbError::database("update asset"))?
                    .map(AudienceRow::into_asset)
            }
        };
        row_to_asset.ok_or(DbError::NotFound {
            entity: data.asset_type().as_str(),
            id,
        })
    }

    /// Fetch one asset by type and id.
    pub async fn get(pool: &SqlitePool, asset_type: AssetType, id: DbId) -> DbResult<Asset> {
        let asset = match asset_type {
            AssetType::Insight => Self::fetch_by_id::<InsightRow>(pool, asset_type, id)
                .await?
                .into_asset(),
            AssetType::Chart => Self::fetch_by_id::<ChartRow>(pool, asset_type, id)
                .await?
                .into_asset(),
            AssetType::Audience => Self::fetch_by_id::<AudienceRow>(pool, asset_type, id)
                .await?
                .into_asset(),
        };
        Ok(asset)
    }

    /// Hard-delete one asset row. Succeeds whether or not the row existed.
    ///
    /// Favourite marks referencing the asset are NOT removed here; callers
    /// pair this with [`super::FavouriteRepo::remove_from_everyone`].
    pub async fn delete(pool: &SqlitePool, asset_type: AssetType, id: DbId) -> DbResult<()> {
        let t = tables::for_type(asset_type);
        let query = format!("DELETE FROM {} WHERE id = ?1", t.table);
        let result = sqlx::query(&query)
            .bind(id)
            .execute(pool)
            .await
            .map_err(DbError::database("delete asset"))?;
        tracing::debug!(
            asset_type = asset_type.as_str(),
            id,
            rows = result.rows_affected(),
            "hard-deleted asset"
        );
        Ok(())
    }

    /// Keyset-paginated listing of one variant, without favourite
    /// annotation.
    pub async fn list(pool: &SqlitePool, query: &AssetQuery) -> DbResult<AssetPage> {
        let keyset = Keyset::from_query(query);
        let assets: Vec<Asset> = match query.asset_type {
            AssetType::Insight => Self::fetch_page::<InsightRow>(pool, query.asset_type, &keyset)
                .await?
                .into_iter()
                .map(InsightRow::into_asset)
                .collect(),
            AssetType::Chart => Self::fetch_page::<ChartRow>(pool, query.asset_type, &keyset)
                .await?
                .into_iter()
                .map(ChartRow::into_asset)
                .collect(),
            AssetType::Audience => Self::fetch_page::<AudienceRow>(pool, query.asset_type, &keyset)
                .await?
                .into_iter()
                .map(AudienceRow::into_asset)
                .collect(),
        };
        Ok(build_page(query, assets))
    }

    async fn fetch_by_id<T>(pool: &SqlitePool, asset_type: AssetType, id: DbId) -> DbResult<T>
    where
        T: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
    {
        let t = tables::for_type(asset_type);
        let query = format!("SELECT {} FROM {} WHERE id = ?1", t.columns, t.table);
        sqlx::query_as::<_, T>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(DbError::database("get asset"))?
            .ok_or(DbError::NotFound {
                entity: asset_type.as_str(),
                id,
            })
    }

    async fn fetch_page<T>(
        pool: &SqlitePool,
        asset_type: AssetType,
        keyset: &Keyset,
    ) -> DbResult<Vec<T>>
    where
        T: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
    {
        let t = tables::for_type(asset_type);
        let query = format!(
            "SELECT {columns} FROM {table} \
             WHERE id {cmp} ?1 ORDER BY id {order} LIMIT ?2",
            columns = t.columns,
            table = t.table,
            cmp = keyset.comparator(),
            order = keyset.order(),
        );
        sqlx::query_as::<_, T>(&query)
            .bind(keyset.last_id)
            .bind(keyset.limit)
            .fetch_all(pool)
            .await
            .map_err(DbError::database("list assets"))
    }
}
