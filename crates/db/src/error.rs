//! Repository error taxonomy.
//!
//! Every store failure is wrapped with the name of the failing operation and
//! surfaced synchronously to the caller. No retry, suppression, or rollback
//! policy lives at this layer.

use assetdeck_core::error::UnknownAssetType;
use assetdeck_core::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// A type tag outside the closed variant set arrived through a
    /// less-typed boundary. Always a caller bug, never retried.
    #[error(transparent)]
    UnknownAssetType(#[from] UnknownAssetType),

    /// No row with the requested id exists for the given type.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// The `(user, asset)` pair already carries a favourite mark. Callers
    /// that want idempotent favouriting treat this as a no-op success.
    #[error("asset {asset_id} is already a favourite of user {user_id}")]
    AlreadyFavourited { user_id: DbId, asset_id: DbId },

    /// The store collaborator failed.
    #[error("{op}: {source}")]
    Database {
        op: &'static str,
        #[source]
        source: sqlx::Error,
    },
}

impl DbError {
    /// Adapter for `map_err`: wrap a sqlx error with the operation name.
    pub(crate) fn database(op: &'static str) -> impl FnOnce(sqlx::Error) -> DbError {
        move |source| DbError::Database { op, source }
    }
}

pub type DbResult<T> = Result<T, DbError>;
