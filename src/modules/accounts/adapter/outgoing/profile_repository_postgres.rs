use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::accounts::application::domain::entities::{Profile, Role};
use crate::accounts::application::ports::outgoing::{
    ProfileChanges, ProfileRepository, ProfileRepositoryError,
};

use super::conversions::{is_unique_violation, profile_model_to_domain};
use super::sea_orm_entity::profiles::{
    ActiveModel as ProfileActiveModel, Column, Entity as ProfileEntity, Model as ProfileModel,
};

#[derive(Clone)]
pub struct ProfileRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProfileRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn find_model(
        &self,
        account_id: Uuid,
    ) -> Result<Option<ProfileModel>, ProfileRepositoryError> {
        ProfileEntity::find()
            .filter(Column::AccountId.eq(account_id))
            .one(&*self.db)
            .await
            .map_err(|e| ProfileRepositoryError::DatabaseError(e.to_string()))
    }
}

#[async_trait]
impl ProfileRepository for ProfileRepositoryPostgres {
    async fn find_by_account_id(
        &self,
        account_id: Uuid,
    ) -> Result<Option<Profile>, ProfileRepositoryError> {
        self.find_model(account_id)
            .await?
            .map(profile_model_to_domain)
            .transpose()
            .map_err(ProfileRepositoryError::DatabaseError)
    }

    async fn create_profile(
        &self,
        account_id: Uuid,
        role: Role,
    ) -> Result<Profile, ProfileRepositoryError> {
        let active = ProfileActiveModel {
            id: Set(Uuid::new_v4()),
            account_id: Set(account_id),
            role: Set(role.as_str().to_string()),
            subject: Set(None),
            bio: Set(None),
            phone_number: Set(None),
            location: Set(None),
            picture_path: Set(None),
            is_verified: Set(false),
            created_at: NotSet,
            updated_at: NotSet,
        };

        let inserted = active.insert(&*self.db).await.map_err(|e| {
            if is_unique_violation(&e) {
                ProfileRepositoryError::ProfileAlreadyExists
            } else {
                ProfileRepositoryError::DatabaseError(e.to_string())
            }
        })?;

        profile_model_to_domain(inserted).map_err(ProfileRepositoryError::DatabaseError)
    }

    async fn apply_changes(
        &self,
        account_id: Uuid,
        changes: ProfileChanges,
    ) -> Result<Profile, ProfileRepositoryError> {
        let profile = self
            .find_model(account_id)
            .await?
            .ok_or(ProfileRepositoryError::ProfileNotFound)?;

        let mut active: ProfileActiveModel = profile.into();
        if let Some(subject) = changes.subject {
            active.subject = Set(subject.map(|s| s.as_str().to_string()));
        }
        if let Some(bio) = changes.bio {
            active.bio = Set(bio);
        }
        if let Some(phone_number) = changes.phone_number {
            active.phone_number = Set(phone_number);
        }
        if let Some(location) = changes.location {
            active.location = Set(location);
        }
        if let Some(picture_path) = changes.picture_path {
            active.picture_path = Set(picture_path);
        }
        active.updated_at = Set(chrono::Utc::now().into());

        let updated = active
            .update(&*self.db)
            .await
            .map_err(|e| ProfileRepositoryError::DatabaseError(e.to_string()))?;

        profile_model_to_domain(updated).map_err(ProfileRepositoryError::DatabaseError)
    }

    async fn set_role(
        &self,
        account_id: Uuid,
        role: Role,
        is_verified: bool,
    ) -> Result<Profile, ProfileRepositoryError> {
        let profile = self
            .find_model(account_id)
            .await?
            .ok_or(ProfileRepositoryError::ProfileNotFound)?;

        let mut active: ProfileActiveModel = profile.into();
        active.role = Set(role.as_str().to_string());
        active.is_verified = Set(is_verified);
        active.updated_at = Set(chrono::Utc::now().into());

        let updated = active
            .update(&*self.db)
            .await
            .map_err(|e| ProfileRepositoryError::DatabaseError(e.to_string()))?;

        profile_model_to_domain(updated).map_err(ProfileRepositoryError::DatabaseError)
    }

    async fn set_verified(
        &self,
        account_id: Uuid,
        is_verified: bool,
    ) -> Result<Profile, ProfileRepositoryError> {
        let profile = self
            .find_model(account_id)
            .await?
            .ok_or(ProfileRepositoryError::ProfileNotFound)?;

        let mut active: ProfileActiveModel = profile.into();
        active.is_verified = Set(is_verified);
        active.updated_at = Set(chrono::Utc::now().into());

        let updated = active
            .update(&*self.db)
            .await
            .map_err(|e| ProfileRepositoryError::DatabaseError(e.to_string()))?;

        profile_model_to_domain(updated).map_err(ProfileRepositoryError::DatabaseError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult};

    fn profile_model(account_id: Uuid, bio: Option<&str>) -> ProfileModel {
        ProfileModel {
            id: Uuid::new_v4(),
            account_id,
            role: "student".to_string(),
            subject: None,
            bio: bio.map(|s| s.to_string()),
            phone_number: None,
            location: None,
            picture_path: None,
            is_verified: false,
            created_at: Utc::now().into(),
            updated_at: Utc::now().into(),
        }
    }

    #[tokio::test]
    async fn create_profile_duplicate_maps_to_already_exists() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom(
                "duplicate key value violates unique constraint".to_string(),
            )])
            .into_connection();

        let repository = ProfileRepositoryPostgres::new(Arc::new(db));

        let result = repository
            .create_profile(Uuid::new_v4(), Role::Student)
            .await;
        assert!(matches!(
            result,
            Err(ProfileRepositoryError::ProfileAlreadyExists)
        ));
    }

    #[tokio::test]
    async fn apply_changes_returns_updated_row() {
        // Arrange
        let account_id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![
                vec![profile_model(account_id, None)],
                vec![profile_model(account_id, Some("Maths teacher since 2015"))],
            ])
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 1,
                rows_affected: 1,
            }])
            .into_connection();

        let repository = ProfileRepositoryPostgres::new(Arc::new(db));

        // Act
        let profile = repository
            .apply_changes(
                account_id,
                ProfileChanges {
                    subject: None,
                    bio: Some(Some("Maths teacher since 2015".to_string())),
                    phone_number: None,
                    location: None,
                    picture_path: None,
                },
            )
            .await
            .unwrap();

        // Assert
        assert_eq!(profile.bio.as_deref(), Some("Maths teacher since 2015"));
        assert_eq!(profile.account_id, account_id);
    }

    #[tokio::test]
    async fn apply_changes_on_missing_profile_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<ProfileModel>::new()])
            .into_connection();

        let repository = ProfileRepositoryPostgres::new(Arc::new(db));

        let result = repository
            .apply_changes(Uuid::new_v4(), ProfileChanges::default())
            .await;
        assert!(matches!(
            result,
            Err(ProfileRepositoryError::ProfileNotFound)
        ));
    }

    #[tokio::test]
    async fn set_verified_flips_the_flag() {
        let account_id = Uuid::new_v4();
        let mut verified = profile_model(account_id, None);
        verified.is_verified = true;

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![profile_model(account_id, None)], vec![verified]])
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 1,
                rows_affected: 1,
            }])
            .into_connection();

        let repository = ProfileRepositoryPostgres::new(Arc::new(db));

        let profile = repository.set_verified(account_id, true).await.unwrap();
        assert!(profile.is_verified);
    }
}
