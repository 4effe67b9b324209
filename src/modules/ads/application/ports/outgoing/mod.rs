pub mod ad_query;
pub mod ad_repository;

pub use ad_query::{AdQuery, AdQueryError};
pub use ad_repository::{AdChanges, AdRepository, AdRepositoryError, NewAd};
