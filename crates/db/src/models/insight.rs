//! Insight rows.

use assetdeck_core::asset::{Asset, AssetData, Insight};
use assetdeck_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `insights` table.
#[derive(Debug, Clone, FromRow)]
pub struct InsightRow {
    pub id: DbId,
    pub text: String,
    pub description: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl InsightRow {
    pub fn into_asset(self) -> Asset {
        Asset {
            id: self.id,
            data: AssetData::Insight(Insight {
                text: self.text,
                description: self.description,
            }),
            is_favourite: None,
        }
    }
}

/// An `insights` row joined against `favourite_insights` for one user.
#[derive(Debug, Clone, FromRow)]
pub struct InsightWithFavouriteRow {
    pub id: DbId,
    pub text: String,
    pub description: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub is_favourite: Option<bool>,
}

impl InsightWithFavouriteRow {
    pub fn into_asset(self) -> Asset {
        Asset {
            id: self.id,
            data: AssetData::Insight(Insight {
                text: self.text,
                description: self.description,
            }),
            is_favourite: Some(self.is_favourite.unwrap_or(false)),
        }
    }
}
