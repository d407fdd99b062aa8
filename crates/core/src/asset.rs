//! Asset domain model.
//!
//! An asset is one of three payload variants (insight, chart, audience)
//! stored under a single logical abstraction. The identifier space is per
//! variant, so every cross-cutting operation also carries an [`AssetType`]
//! tag.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnknownAssetType;
use crate::types::DbId;

/// Closed set of asset variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetType {
    Insight,
    Chart,
    Audience,
}

impl AssetType {
    /// Canonical string tag, matching the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            AssetType::Insight => "insight",
            AssetType::Chart => "chart",
            AssetType::Audience => "audience",
        }
    }
}

impl FromStr for AssetType {
    type Err = UnknownAssetType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "insight" => Ok(AssetType::Insight),
            "chart" => Ok(AssetType::Chart),
            "audience" => Ok(AssetType::Audience),
            other => Err(UnknownAssetType(other.to_string())),
        }
    }
}

/// Audience gender bucket. Unrecognized stored values decode as [`Gender::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }

    /// Lenient parse used when decoding stored rows.
    pub fn from_stored(s: &str) -> Self {
        match s {
            "male" => Gender::Male,
            "female" => Gender::Female,
            _ => Gender::Other,
        }
    }
}

/// A textual insight, e.g. "40% of millenials spend more than 3 hours on
/// social media daily".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    pub text: String,
    pub description: String,
}

/// Paired chart series. Implementations should keep `x` and `y` the same
/// length; the core passes the payload through unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct XyData {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

/// A two-axis chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chart {
    pub title: String,
    pub description: String,
    pub x_title: String,
    pub y_title: String,
    pub data: XyData,
}

/// An audience segment description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Audience {
    pub age_min: i32,
    pub age_max: i32,
    pub gender: Gender,
    pub country: String,
    pub hours_spent: f64,
    pub number_of_purchases: i64,
    pub description: String,
}

/// Tagged union over the three payload variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AssetData {
    Insight(Insight),
    Chart(Chart),
    Audience(Audience),
}

impl AssetData {
    /// The type tag of this payload.
    pub fn asset_type(&self) -> AssetType {
        match self {
            AssetData::Insight(_) => AssetType::Insight,
            AssetData::Chart(_) => AssetType::Chart,
            AssetData::Audience(_) => AssetType::Audience,
        }
    }
}

/// A stored asset.
///
/// `is_favourite` is `Some` only when the asset was retrieved through the
/// favourite-aware listing path; `None` means "unknown", not "false".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub id: DbId,
    #[serde(flatten)]
    pub data: AssetData,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_favourite: Option<bool>,
}

/// Keyset pagination request over one asset variant.
///
/// `last_id = 0` means "no cursor yet" and yields the first page when
/// ascending. Descending has no such sentinel: to fetch the last page the
/// caller passes a cursor strictly greater than the maximum id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetQuery {
    pub limit: i64,
    pub last_id: DbId,
    pub asset_type: AssetType,
    pub is_desc: bool,
}

/// One page of assets.
///
/// `first_id`/`last_id` are the ids of the first/last row actually returned
/// (not the requested cursor), or 0 when the page is empty. Chaining pages
/// means feeding `last_id` back as the next query's cursor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetPage {
    pub first_id: DbId,
    pub last_id: DbId,
    pub limit: i64,
    pub asset_type: AssetType,
    pub assets: Vec<Asset>,
}
