use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::accounts::application::domain::entities::{Account, Profile};
use crate::accounts::application::ports::outgoing::{AccountQuery, ProfileRepository};

use super::ensure_profile::{EnsureProfileError, EnsureProfileUseCase, IEnsureProfileUseCase};

/// Combined account + extension view for the profile page.
#[derive(Debug, Clone)]
pub struct ProfileView {
    pub account: Account,
    pub profile: Profile,
}

#[derive(Debug, Error)]
pub enum FetchProfileError {
    #[error("Account not found")]
    AccountNotFound,
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IFetchProfileUseCase: Send + Sync {
    async fn execute(&self, account_id: Uuid) -> Result<ProfileView, FetchProfileError>;
}

pub struct FetchProfileUseCase<Q, P>
where
    Q: AccountQuery + Send + Sync,
    P: ProfileRepository + Send + Sync,
{
    accounts: Q,
    ensure: EnsureProfileUseCase<P>,
}

impl<Q, P> FetchProfileUseCase<Q, P>
where
    Q: AccountQuery + Send + Sync,
    P: ProfileRepository + Send + Sync,
{
    pub fn new(accounts: Q, profiles: P) -> Self {
        Self {
            accounts,
            ensure: EnsureProfileUseCase::new(profiles),
        }
    }
}

#[async_trait]
impl<Q, P> IFetchProfileUseCase for FetchProfileUseCase<Q, P>
where
    Q: AccountQuery + Send + Sync,
    P: ProfileRepository + Send + Sync,
{
    async fn execute(&self, account_id: Uuid) -> Result<ProfileView, FetchProfileError> {
        let account = self
            .accounts
            .find_by_id(account_id)
            .await
            .map_err(|e| FetchProfileError::RepositoryError(e.to_string()))?
            .ok_or(FetchProfileError::AccountNotFound)?;

        // Accounts that predate the extension table (or lost theirs to a
        // partial migration) get one provisioned on first read rather
        // than a 404.
        let profile = self.ensure.execute(account_id).await.map_err(|e| match e {
            EnsureProfileError::RepositoryError(msg) => FetchProfileError::RepositoryError(msg),
        })?;

        Ok(ProfileView { account, profile })
    }
}
