use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

use crate::accounts::application::ports::outgoing::{
    AccountQuery, PasswordHasher, TokenProvider,
};

#[derive(Debug, Clone)]
pub struct LoginAccountOutput {
    pub account_id: Uuid,
    pub username: String,
    pub access_token: String,
    pub refresh_token: String,
}

#[derive(Debug, Error)]
pub enum LoginAccountError {
    // One variant for both unknown user and wrong password, so the
    // response cannot be used to enumerate usernames.
    #[error("Invalid username or password")]
    InvalidCredentials,
    #[error("Account is deactivated")]
    AccountInactive,
    #[error("Token issuing failed: {0}")]
    TokenFailed(String),
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ILoginAccountUseCase: Send + Sync {
    async fn execute(
        &self,
        username: String,
        password: String,
    ) -> Result<LoginAccountOutput, LoginAccountError>;
}

pub struct LoginAccountUseCase<Q>
where
    Q: AccountQuery + Send + Sync,
{
    query: Q,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
}

impl<Q> LoginAccountUseCase<Q>
where
    Q: AccountQuery + Send + Sync,
{
    pub fn new(
        query: Q,
        password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
        token_provider: Arc<dyn TokenProvider + Send + Sync>,
    ) -> Self {
        Self {
            query,
            password_hasher,
            token_provider,
        }
    }
}

#[async_trait]
impl<Q> ILoginAccountUseCase for LoginAccountUseCase<Q>
where
    Q: AccountQuery + Send + Sync,
{
    async fn execute(
        &self,
        username: String,
        password: String,
    ) -> Result<LoginAccountOutput, LoginAccountError> {
        let account = self
            .query
            .find_by_username(&username)
            .await
            .map_err(|e| LoginAccountError::RepositoryError(e.to_string()))?
            .ok_or(LoginAccountError::InvalidCredentials)?;

        if !account.is_active {
            return Err(LoginAccountError::AccountInactive);
        }

        let valid = self
            .password_hasher
            .verify_password(&password, &account.password_hash)
            .await
            .map_err(|_| LoginAccountError::InvalidCredentials)?;

        if !valid {
            return Err(LoginAccountError::InvalidCredentials);
        }

        let access_token = self
            .token_provider
            .generate_access_token(account.id)
            .map_err(|e| LoginAccountError::TokenFailed(e.to_string()))?;
        let refresh_token = self
            .token_provider
            .generate_refresh_token(account.id)
            .map_err(|e| LoginAccountError::TokenFailed(e.to_string()))?;

        Ok(LoginAccountOutput {
            account_id: account.id,
            username: account.username,
            access_token,
            refresh_token,
        })
    }
}
