//! Row structs and the variant codec.
//!
//! Each submodule contains:
//! - a `FromRow` row struct matching the backing table
//! - a `*WithFavouriteRow` struct adding the computed `is_favourite` join
//!   column (SQL `NULL` decodes as "not favourited")
//! - a lossless `into_asset` conversion into the domain [`Asset`]
//!
//! Conversions are purely structural; payload values round-trip unchanged.
//!
//! [`Asset`]: assetdeck_core::asset::Asset

pub mod audience;
pub mod chart;
pub mod insight;
