pub mod account_query;
pub mod account_repository;
pub mod password_hasher;
pub mod profile_repository;
pub mod token_provider;

pub use account_query::{AccountQuery, AccountQueryError};
pub use account_repository::{AccountRepository, AccountRepositoryError, NewAccount};
pub use password_hasher::{HashError, PasswordHasher};
pub use profile_repository::{ProfileChanges, ProfileRepository, ProfileRepositoryError};
pub use token_provider::{TokenClaims, TokenError, TokenProvider};
