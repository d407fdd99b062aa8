//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&SqlitePool` as the first argument.

mod tables;

pub mod asset_repo;
pub mod favourite_repo;

pub use asset_repo::AssetRepo;
pub use favourite_repo::FavouriteRepo;
