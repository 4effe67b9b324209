use async_trait::async_trait;
use thiserror::Error;
use tracing::warn;
use uuid::Uuid;

use crate::accounts::application::domain::entities::{Profile, Role};
use crate::accounts::application::ports::outgoing::{ProfileRepository, ProfileRepositoryError};

/// Idempotent "the extension must exist" guarantee. Any code path that
/// saves an account calls this instead of relying on an implicit hook:
/// an existing profile is returned untouched, a missing one is created
/// with the student default, and a lost creation race is resolved by
/// re-reading the winner's row.
#[derive(Debug, Error)]
pub enum EnsureProfileError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IEnsureProfileUseCase: Send + Sync {
    async fn execute(&self, account_id: Uuid) -> Result<Profile, EnsureProfileError>;
}

pub struct EnsureProfileUseCase<P>
where
    P: ProfileRepository + Send + Sync,
{
    profiles: P,
}

impl<P> EnsureProfileUseCase<P>
where
    P: ProfileRepository + Send + Sync,
{
    pub fn new(profiles: P) -> Self {
        Self { profiles }
    }
}

#[async_trait]
impl<P> IEnsureProfileUseCase for EnsureProfileUseCase<P>
where
    P: ProfileRepository + Send + Sync,
{
    async fn execute(&self, account_id: Uuid) -> Result<Profile, EnsureProfileError> {
        if let Some(profile) = self
            .profiles
            .find_by_account_id(account_id)
            .await
            .map_err(|e| EnsureProfileError::RepositoryError(e.to_string()))?
        {
            return Ok(profile);
        }

        match self.profiles.create_profile(account_id, Role::Student).await {
            Ok(profile) => Ok(profile),
            Err(ProfileRepositoryError::ProfileAlreadyExists) => {
                // A concurrent save won the create. Harmless; take theirs.
                warn!(
                    account_id = %account_id,
                    "Profile creation raced with a concurrent save"
                );
                self.profiles
                    .find_by_account_id(account_id)
                    .await
                    .map_err(|e| EnsureProfileError::RepositoryError(e.to_string()))?
                    .ok_or_else(|| {
                        EnsureProfileError::RepositoryError(
                            "Profile vanished after duplicate-create race".to_string(),
                        )
                    })
            }
            Err(e) => Err(EnsureProfileError::RepositoryError(e.to_string())),
        }
    }
}
