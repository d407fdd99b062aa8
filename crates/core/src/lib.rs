//! Domain types for the asset repository: payload variants, the tagged
//! asset union, pagination queries/pages, and shared id/timestamp aliases.

pub mod asset;
pub mod error;
pub mod types;
