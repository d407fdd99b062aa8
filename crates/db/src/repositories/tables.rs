//! Mapping from an asset type tag to its backing tables.
//!
//! The identifier space is per type: each variant has its own asset table
//! and its own favourite association table.

use assetdeck_core::asset::AssetType;

/// Column list for `insights` queries.
pub(crate) const INSIGHT_COLUMNS: &str = "id, text, description, created_at, updated_at";

/// Column list for `charts` queries.
pub(crate) const CHART_COLUMNS: &str = "\
    id, title, description, x_title, y_title, \
    x_data, y_data, created_at, updated_at";

/// Column list for `audiences` queries.
pub(crate) const AUDIENCE_COLUMNS: &str = "\
    id, age_min, age_max, gender, country, \
    hours_spent, number_of_purchases, description, \
    created_at, updated_at";

/// Backing tables for one asset variant.
pub(crate) struct AssetTables {
    /// Asset table name.
    pub table: &'static str,
    /// Column list for the asset table.
    pub columns: &'static str,
    /// Per-type favourite association table.
    pub favourite_table: &'static str,
    /// Column in the favourite table referencing the asset id.
    pub asset_fk: &'static str,
}

pub(crate) fn for_type(asset_type: AssetType) -> AssetTables {
    match asset_type {
        AssetType::Insight => AssetTables {
            table: "insights",
            columns: INSIGHT_COLUMNS,
            favourite_table: "favourite_insights",
            asset_fk: "insight_id",
        },
        AssetType::Chart => AssetTables {
            table: "charts",
            columns: CHART_COLUMNS,
            favourite_table: "favourite_charts",
            asset_fk: "chart_id",
        },
        AssetType::Audience => AssetTables {
            table: "audiences",
            columns: AUDIENCE_COLUMNS,
            favourite_table: "favourite_audiences",
            asset_fk: "audience_id",
        },
    }
}
