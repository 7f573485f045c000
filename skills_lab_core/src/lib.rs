//! Future Skills Lab Core
//!
//! Skill and career catalogs, the in-memory profile store and the
//! recommendation engine used by the console front end.

pub mod catalog;
pub mod recommender;
pub mod scoring;
pub mod store;
pub mod types;

pub use catalog::{Catalog, CatalogError};
pub use recommender::{CareerMatch, Recommender, RecommenderConfig, TrackSuggestion};
pub use scoring::compatibility_score;
pub use store::{ProfileStore, SelectionError};
pub use types::*;

pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
