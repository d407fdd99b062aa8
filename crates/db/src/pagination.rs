//! Keyset pagination over an id-ordered table.
//!
//! Ascending pages select `id > last_id` in ascending order; descending pages
//! select `id < last_id` in descending order. `last_id = 0` is the ascending
//! "no cursor" sentinel. Descending has no sentinel: the last page is fetched
//! by passing a cursor strictly greater than the maximum id.

use assetdeck_core::asset::{Asset, AssetPage, AssetQuery};
use assetdeck_core::types::DbId;

/// Cursor parameters extracted from an [`AssetQuery`].
#[derive(Debug, Clone, Copy)]
pub(crate) struct Keyset {
    pub last_id: DbId,
    pub limit: i64,
    pub is_desc: bool,
}

impl Keyset {
    pub(crate) fn from_query(query: &AssetQuery) -> Self {
        Keyset {
            last_id: query.last_id,
            limit: query.limit,
            is_desc: query.is_desc,
        }
    }

    /// SQL comparator applied to the asset id.
    pub(crate) fn comparator(&self) -> &'static str {
        if self.is_desc {
            "<"
        } else {
            ">"
        }
    }

    /// SQL sort direction for the id ordering.
    pub(crate) fn order(&self) -> &'static str {
        if self.is_desc {
            "DESC"
        } else {
            "ASC"
        }
    }
}

/// Wrap fetched rows into a page. `first_id`/`last_id` reflect the rows
/// actually returned, not the requested cursor, so callers can chain pages.
pub(crate) fn build_page(query: &AssetQuery, assets: Vec<Asset>) -> AssetPage {
    let first_id = assets.first().map_or(0, |a| a.id);
    let last_id = assets.last().map_or(0, |a| a.id);
    AssetPage {
        first_id,
        last_id,
        limit: query.limit,
        asset_type: query.asset_type,
        assets,
    }
}
