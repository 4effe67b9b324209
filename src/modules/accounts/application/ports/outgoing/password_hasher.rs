use async_trait::async_trait;
use thiserror::Error;

#[async_trait]
pub trait PasswordHasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError>;
    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError>;
}

#[derive(Debug, Error)]
pub enum HashError {
    #[error("Password hashing failed")]
    HashFailed,
    #[error("Hashing task failed to complete")]
    TaskFailed,
}
