use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::accounts::application::domain::entities::{Profile, Role, Subject};

/// Self-service fields a user may change on their own profile. `None`
/// means "leave as is".
#[derive(Debug, Clone, Default)]
pub struct ProfileChanges {
    pub subject: Option<Option<Subject>>,
    pub bio: Option<Option<String>>,
    pub phone_number: Option<Option<String>>,
    pub location: Option<Option<String>>,
    pub picture_path: Option<Option<String>>,
}

#[async_trait]
pub trait ProfileRepository {
    async fn find_by_account_id(
        &self,
        account_id: Uuid,
    ) -> Result<Option<Profile>, ProfileRepositoryError>;

    /// Insert a fresh profile for the account. Fails with
    /// [`ProfileRepositoryError::ProfileAlreadyExists`] when the unique
    /// constraint on account_id rejects a duplicate.
    async fn create_profile(
        &self,
        account_id: Uuid,
        role: Role,
    ) -> Result<Profile, ProfileRepositoryError>;

    async fn apply_changes(
        &self,
        account_id: Uuid,
        changes: ProfileChanges,
    ) -> Result<Profile, ProfileRepositoryError>;

    async fn set_role(
        &self,
        account_id: Uuid,
        role: Role,
        is_verified: bool,
    ) -> Result<Profile, ProfileRepositoryError>;

    async fn set_verified(
        &self,
        account_id: Uuid,
        is_verified: bool,
    ) -> Result<Profile, ProfileRepositoryError>;
}

#[derive(Debug, Error)]
pub enum ProfileRepositoryError {
    #[error("Profile already exists")]
    ProfileAlreadyExists,
    #[error("Profile not found")]
    ProfileNotFound,
    #[error("Database error: {0}")]
    DatabaseError(String),
}
