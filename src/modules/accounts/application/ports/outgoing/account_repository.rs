use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::accounts::application::domain::entities::{Account, Profile, Role};

/// Data needed to insert a new account row.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
}

#[async_trait]
pub trait AccountRepository {
    /// Insert the account and its profile in a single transaction so a
    /// failure on either side leaves no partial state behind.
    async fn create_with_profile(
        &self,
        account: NewAccount,
        role: Role,
    ) -> Result<(Account, Profile), AccountRepositoryError>;

    async fn delete_account(&self, account_id: Uuid) -> Result<(), AccountRepositoryError>;
}

#[derive(Debug, Error)]
pub enum AccountRepositoryError {
    #[error("Account already exists")]
    AccountAlreadyExists,
    #[error("Account not found")]
    AccountNotFound,
    #[error("Database error: {0}")]
    DatabaseError(String),
}
