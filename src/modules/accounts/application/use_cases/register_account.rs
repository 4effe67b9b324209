use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

use crate::accounts::application::domain::entities::Role;
use crate::accounts::application::ports::outgoing::{
    AccountQuery, AccountRepository, AccountRepositoryError, NewAccount, PasswordHasher,
    TokenProvider,
};

/// Roles a visitor may pick for themselves. Admin is assigned by an
/// operator, never at registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationRole {
    Student,
    Teacher,
}

impl From<RegistrationRole> for Role {
    fn from(value: RegistrationRole) -> Self {
        match value {
            RegistrationRole::Student => Role::Student,
            RegistrationRole::Teacher => Role::Teacher,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RegisterAccountInput {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
    pub password_confirm: String,
    pub role: RegistrationRole,
}

#[derive(Debug, Clone)]
pub struct RegisterAccountOutput {
    pub account_id: Uuid,
    pub username: String,
    pub email: String,
    pub role: Role,
    pub is_verified: bool,
    pub access_token: String,
    pub refresh_token: String,
}

#[derive(Debug, Error)]
pub enum RegisterAccountError {
    #[error("{0}")]
    MissingField(&'static str),
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("Username already taken")]
    UsernameTaken,
    #[error("Email already taken")]
    EmailTaken,
    #[error("Password hashing failed")]
    HashingFailed,
    #[error("Token issuing failed: {0}")]
    TokenFailed(String),
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IRegisterAccountUseCase: Send + Sync {
    async fn execute(
        &self,
        input: RegisterAccountInput,
    ) -> Result<RegisterAccountOutput, RegisterAccountError>;
}

pub struct RegisterAccountUseCase<Q, R>
where
    Q: AccountQuery + Send + Sync,
    R: AccountRepository + Send + Sync,
{
    query: Q,
    repository: R,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
}

impl<Q, R> RegisterAccountUseCase<Q, R>
where
    Q: AccountQuery + Send + Sync,
    R: AccountRepository + Send + Sync,
{
    pub fn new(
        query: Q,
        repository: R,
        password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
        token_provider: Arc<dyn TokenProvider + Send + Sync>,
    ) -> Self {
        Self {
            query,
            repository,
            password_hasher,
            token_provider,
        }
    }
}

fn require(value: &str, field: &'static str) -> Result<(), RegisterAccountError> {
    if value.trim().is_empty() {
        Err(RegisterAccountError::MissingField(field))
    } else {
        Ok(())
    }
}

#[async_trait]
impl<Q, R> IRegisterAccountUseCase for RegisterAccountUseCase<Q, R>
where
    Q: AccountQuery + Send + Sync,
    R: AccountRepository + Send + Sync,
{
    async fn execute(
        &self,
        input: RegisterAccountInput,
    ) -> Result<RegisterAccountOutput, RegisterAccountError> {
        require(&input.username, "Username is required")?;
        require(&input.email, "Email is required")?;
        require(&input.first_name, "First name is required")?;
        require(&input.last_name, "Last name is required")?;
        require(&input.password, "Password is required")?;

        if input.password != input.password_confirm {
            return Err(RegisterAccountError::PasswordMismatch);
        }

        if self
            .query
            .find_by_username(&input.username)
            .await
            .map_err(|e| RegisterAccountError::RepositoryError(e.to_string()))?
            .is_some()
        {
            return Err(RegisterAccountError::UsernameTaken);
        }

        if self
            .query
            .find_by_email(&input.email)
            .await
            .map_err(|e| RegisterAccountError::RepositoryError(e.to_string()))?
            .is_some()
        {
            return Err(RegisterAccountError::EmailTaken);
        }

        let password_hash = self
            .password_hasher
            .hash_password(&input.password)
            .await
            .map_err(|_| RegisterAccountError::HashingFailed)?;

        let role: Role = input.role.into();

        // Account and profile land together or not at all.
        let (account, profile) = self
            .repository
            .create_with_profile(
                NewAccount {
                    username: input.username,
                    email: input.email,
                    password_hash,
                    first_name: input.first_name,
                    last_name: input.last_name,
                },
                role,
            )
            .await
            .map_err(|e| match e {
                AccountRepositoryError::AccountAlreadyExists => RegisterAccountError::UsernameTaken,
                other => RegisterAccountError::RepositoryError(other.to_string()),
            })?;

        // Registration doubles as the first login: hand back a token pair.
        let access_token = self
            .token_provider
            .generate_access_token(account.id)
            .map_err(|e| RegisterAccountError::TokenFailed(e.to_string()))?;
        let refresh_token = self
            .token_provider
            .generate_refresh_token(account.id)
            .map_err(|e| RegisterAccountError::TokenFailed(e.to_string()))?;

        Ok(RegisterAccountOutput {
            account_id: account.id,
            username: account.username,
            email: account.email,
            role: profile.role,
            is_verified: profile.is_verified,
            access_token,
            refresh_token,
        })
    }
}
