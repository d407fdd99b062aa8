//! Chart rows.
//!
//! The paired `x`/`y` series persist as JSON text columns; the core does not
//! enforce equal lengths (pass-through payload).

use assetdeck_core::asset::{Asset, AssetData, Chart, XyData};
use assetdeck_core::types::{DbId, Timestamp};
use sqlx::types::Json;
use sqlx::FromRow;

/// A row from the `charts` table.
#[derive(Debug, Clone, FromRow)]
pub struct ChartRow {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub x_title: String,
    pub y_title: String,
    pub x_data: Json<Vec<f64>>,
    pub y_data: Json<Vec<f64>>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl ChartRow {
    pub fn into_asset(self) -> Asset {
        Asset {
            id: self.id,
            data: AssetData::Chart(Chart {
                title: self.title,
                description: self.description,
                x_title: self.x_title,
                y_title: self.y_title,
                data: XyData {
                    x: self.x_data.0,
                    y: self.y_data.0,
                },
            }),
            is_favourite: None,
        }
    }
}

/// A `charts` row joined against `favourite_charts` for one user.
#[derive(Debug, Clone, FromRow)]
pub struct ChartWithFavouriteRow {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub x_title: String,
    pub y_title: String,
    pub x_data: Json<Vec<f64>>,
    pub y_data: Json<Vec<f64>>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub is_favourite: Option<bool>,
}

impl ChartWithFavouriteRow {
    pub fn into_asset(self) -> Asset {
        Asset {
            id: self.id,
            data: AssetData::Chart(Chart {
                title: self.title,
                description: self.description,
                x_title: self.x_title,
                y_title: self.y_title,
                data: XyData {
                    x: self.x_data.0,
                    y: self.y_data.0,
                },
            }),
            is_favourite: Some(self.is_favourite.unwrap_or(false)),
        }
    }
}
