use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::accounts::application::domain::entities::Account;

#[async_trait]
pub trait AccountQuery {
    async fn find_by_id(&self, account_id: Uuid) -> Result<Option<Account>, AccountQueryError>;
    async fn find_by_username(&self, username: &str) -> Result<Option<Account>, AccountQueryError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, AccountQueryError>;
}

#[derive(Debug, Error)]
pub enum AccountQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}
