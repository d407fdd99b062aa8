//! Audience segment rows.

use assetdeck_core::asset::{Asset, AssetData, Audience, Gender};
use assetdeck_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `audiences` table. Gender persists as its canonical string
/// tag; unrecognized stored values decode as [`Gender::Other`].
#[derive(Debug, Clone, FromRow)]
pub struct AudienceRow {
    pub id: DbId,
    pub age_min: i32,
    pub age_max: i32,
    pub gender: String,
    pub country: String,
    pub hours_spent: f64,
    pub number_of_purchases: i64,
    pub description: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl AudienceRow {
    pub fn into_asset(self) -> Asset {
        Asset {
            id: self.id,
            data: AssetData::Audience(Audience {
                age_min: self.age_min,
                age_max: self.age_max,
                gender: Gender::from_stored(&self.gender),
                country: self.country,
                hours_spent: self.hours_spent,
                number_of_purchases: self.number_of_purchases,
                description: self.description,
            }),
            is_favourite: None,
        }
    }
}

/// An `audiences` row joined against `favourite_audiences` for one user.
#[derive(Debug, Clone, FromRow)]
pub struct AudienceWithFavouriteRow {
    pub id: DbId,
    pub age_min: i32,
    pub age_max: i32,
    pub gender: String,
    pub country: String,
    pub hours_spent: f64,
    pub number_of_purchases: i64,
    pub description: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub is_favourite: Option<bool>,
}

impl AudienceWithFavouriteRow {
    pub fn into_asset(self) -> Asset {
        Asset {
            id: self.id,
            data: AssetData::Audience(Audience {
                age_min: self.age_min,
                age_max: self.age_max,
                gender: Gender::from_stored(&self.gender),
                country: self.country,
                hours_spent: self.hours_spent,
                number_of_purchases: self.number_of_purchases,
                description: self.description,
            }),
            is_favourite: Some(self.is_favourite.unwrap_or(false)),
        }
    }
}
