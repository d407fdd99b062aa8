//! Per-user favourite marks and favourite-aware listing.
//!
//! Uniqueness of one mark per `(user, asset)` pair is enforced by the
//! store's unique index; the resulting conflict surfaces as
//! `AlreadyFavourited`, so concurrent favouriting cannot insert duplicates.

use assetdeck_core::asset::{Asset, AssetPage, AssetQuery, AssetType};
use assetdeck_core::types::DbId;
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, SqlitePool};

use crate::error::{DbError, DbResult};
use crate::models::audience::AudienceWithFavouriteRow;
use crate::models::chart::ChartWithFavouriteRow;
use crate::models::insight::InsightWithFavouriteRow;
use crate::pagination::{build_page, Keyset};

use super::tables;

/// Favourite index over the per-type association tables.
pub struct FavouriteRepo;

impl FavouriteRepo {
    /// Mark or unmark an asset as a favourite of one user.
    ///
    /// Favouriting returns the fresh mark id and fails with
    /// `AlreadyFavourited` when a mark already exists: callers get to
    /// distinguish "already true" from "just set". Un-favouriting has no
    /// return-value contract, so it succeeds (returning 0) whether or not a
    /// mark existed.
    pub async fn toggle(
        pool: &SqlitePool,
        user_id: DbId,
        asset_id: DbId,
        asset_type: AssetType,
        want_favourite: bool,
    ) -> DbResult<DbId> {
        let t = tables::for_type(asset_type);
        if want_favourite {
            let query = format!(
                "INSERT INTO {} (user_id, {}) VALUES (?1, ?2) RETURNING id",
                t.favourite_table, t.asset_fk,
            );
            let (mark_id,): (DbId,) = sqlx::query_as(&query)
                .bind(user_id)
                .bind(asset_id)
                .fetch_one(pool)
                .await
                .map_err(|e| {
                    if let sqlx::Error::Database(db_err) = &e {
                        if db_err.is_unique_violation() {
                            return DbError::AlreadyFavourited { user_id, asset_id };
                        }
                    }
                    DbError::Database {
                        op: "favourite asset",
                        source: e,
                    }
                })?;
            tracing::debug!(user_id, asset_id, mark_id, "favourited asset");
            Ok(mark_id)
        } else {
            let query = format!(
                "DELETE FROM {} WHERE user_id = ?1 AND {} = ?2",
                t.favourite_table, t.asset_fk,
            );
            let result = sqlx::query(&query)
                .bind(user_id)
                .bind(asset_id)
                .execute(pool)
                .await
                .map_err(DbError::database("unfavourite asset"))?;
            tracing::debug!(
                user_id,
                asset_id,
                rows = result.rows_affected(),
                "unfavourited asset"
            );
            Ok(0)
        }
    }

    /// Delete every mark referencing an asset, across all users. The
    /// explicit cleanup step after a hard asset delete; succeeds whether or
    /// not any mark existed.
    pub async fn remove_from_everyone(
        pool: &SqlitePool,
        asset_id: DbId,
        asset_type: AssetType,
    ) -> DbResult<()> {
        let t = tables::for_type(asset_type);
        let query = format!("DELETE FROM {} WHERE {} = ?1", t.favourite_table, t.asset_fk);
        let result = sqlx::query(&query)
            .bind(asset_id)
            .execute(pool)
            .await
            .map_err(DbError::database("remove favourite from everyone"))?;
        tracing::debug!(
            asset_type = asset_type.as_str(),
            asset_id,
            rows = result.rows_affected(),
            "removed favourite marks"
        );
        Ok(())
    }

    /// Favourite-aware listing for one user.
    ///
    /// With `only_fav` the favourite table is inner-joined and the page is
    /// restricted to the user's favourites, cursor and order applied to the
    /// asset id as in the plain listing. Without it every asset of the type
    /// is returned annotated; the cursor predicate sits inside the join
    /// condition, so it gates the annotation rather than filtering the
    /// returned set — only order and limit apply to the page contents.
    pub async fn list(
        pool: &SqlitePool,
        user_id: DbId,
        only_fav: bool,
        query: &AssetQuery,
    ) -> DbResult<AssetPage> {
        let keyset = Keyset::from_query(query);
        let assets: Vec<Asset> = match query.asset_type {
            AssetType::Insight => Self::fetch_annotated::<InsightWithFavouriteRow>(
                pool,
                query.asset_type,
                user_id,
                only_fav,
                &keyset,
            )
            .await?
            .into_iter()
            .map(InsightWithFavouriteRow::into_asset)
            .collect(),
            AssetType::Chart => Self::fetch_annotated::<ChartWithFavouriteRow>(
                pool,
                query.asset_type,
                user_id,
                only_fav,
                &keyset,
            )
            .await?
            .into_iter()
            .map(ChartWithFavouriteRow::into_asset)
            .collect(),
            AssetType::Audience => Self::fetch_annotated::<AudienceWithFavouriteRow>(
                pool,
                query.asset_type,
                user_id,
                only_fav,
                &keyset,
            )
            .await?
            .into_iter()
            .map(AudienceWithFavouriteRow::into_asset)
            .collect(),
        };
        Ok(build_page(query, assets))
    }

    async fn fetch_annotated<T>(
        pool: &SqlitePool,
        asset_type: AssetType,
        user_id: DbId,
        only_fav: bool,
        keyset: &Keyset,
    ) -> DbResult<Vec<T>>
    where
        T: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
    {
        let t = tables::for_type(asset_type);
        let join = if only_fav { "INNER JOIN" } else { "LEFT JOIN" };
        // The cursor predicate lives in the join condition for both modes,
        // matching the reference behaviour: with INNER JOIN it is equivalent
        // to a row filter, with LEFT JOIN it only gates the annotation.
        let query = format!(
            "SELECT a.*, (f.user_id = ?1) AS is_favourite \
             FROM {table} a \
             {join} {fav_table} f \
                ON f.{fk} = a.id AND a.id {cmp} ?2 AND f.user_id = ?1 \
             ORDER BY a.id {order} LIMIT ?3",
            table = t.table,
            join = join,
            fav_table = t.favourite_table,
            fk = t.asset_fk,
            cmp = keyset.comparator(),
            order = keyset.order(),
        );
        sqlx::query_as::<_, T>(&query)
            .bind(user_id)
            .bind(keyset.last_id)
            .bind(keyset.limit)
            .fetch_all(pool)
            .await
            .map_err(DbError::database("list favourite assets"))
    }
}
