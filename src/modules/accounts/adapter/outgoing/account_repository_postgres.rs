use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, ModelTrait, Set, TransactionTrait};
use std::sync::Arc;
use uuid::Uuid;

use crate::accounts::application::domain::entities::{Account, Profile, Role};
use crate::accounts::application::ports::outgoing::{
    AccountRepository, AccountRepositoryError, NewAccount,
};

use super::conversions::{account_model_to_domain, is_unique_violation, profile_model_to_domain};
use super::sea_orm_entity::accounts::{
    ActiveModel as AccountActiveModel, Entity as AccountEntity,
};
use super::sea_orm_entity::profiles::ActiveModel as ProfileActiveModel;

#[derive(Clone)]
pub struct AccountRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl AccountRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AccountRepository for AccountRepositoryPostgres {
    async fn create_with_profile(
        &self,
        account: NewAccount,
        role: Role,
    ) -> Result<(Account, Profile), AccountRepositoryError> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| AccountRepositoryError::DatabaseError(e.to_string()))?;

        let account_id = Uuid::new_v4();
        let active_account = AccountActiveModel {
            id: Set(account_id),
            username: Set(account.username),
            email: Set(account.email),
            password_hash: Set(account.password_hash),
            first_name: Set(account.first_name),
            last_name: Set(account.last_name),
            is_staff: Set(false),
            is_active: Set(true),
            created_at: NotSet,
            updated_at: NotSet,
        };

        let inserted_account = active_account.insert(&txn).await.map_err(|e| {
            if is_unique_violation(&e) {
                AccountRepositoryError::AccountAlreadyExists
            } else {
                AccountRepositoryError::DatabaseError(e.to_string())
            }
        })?;

        let active_profile = ProfileActiveModel {
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

        let inserted_profile = active_profile
            .insert(&txn)
            .await
            .map_err(|e| AccountRepositoryError::DatabaseError(e.to_string()))?;

        txn.commit()
            .await
            .map_err(|e| AccountRepositoryError::DatabaseError(e.to_string()))?;

        Ok((
            account_model_to_domain(inserted_account)
                .map_err(AccountRepositoryError::DatabaseError)?,
            profile_model_to_domain(inserted_profile)
                .map_err(AccountRepositoryError::DatabaseError)?,
        ))
    }

    async fn delete_account(&self, account_id: Uuid) -> Result<(), AccountRepositoryError> {
        let account = AccountEntity::find_by_id(account_id)
            .one(&*self.db)
            .await
            .map_err(|e| AccountRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(AccountRepositoryError::AccountNotFound)?;

        // Profile and content rows go with it via FK cascade.
        account
            .delete(&*self.db)
            .await
            .map_err(|e| AccountRepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::sea_orm_entity::{accounts, profiles};
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult};

    fn new_account() -> NewAccount {
        NewAccount {
            username: "maria".to_string(),
            email: "maria@example.com".to_string(),
            password_hash: "hashed".to_string(),
            first_name: "Maria".to_string(),
            last_name: "Lopez".to_string(),
        }
    }

    fn account_model(id: Uuid) -> accounts::Model {
        accounts::Model {
            id,
            username: "maria".to_string(),
            email: "maria@example.com".to_string(),
            password_hash: "hashed".to_string(),
            first_name: "Maria".to_string(),
            last_name: "Lopez".to_string(),
            is_staff: false,
            is_active: true,
            created_at: Utc::now().into(),
            updated_at: Utc::now().into(),
        }
    }

    fn profile_model(account_id: Uuid, role: &str) -> profiles::Model {
        profiles::Model {
            id: Uuid::new_v4(),
            account_id,
            role: role.to_string(),
            subject: None,
            bio: None,
            phone_number: None,
            location: None,
            picture_path: None,
            is_verified: false,
            created_at: Utc::now().into(),
            updated_at: Utc::now().into(),
        }
    }

    #[tokio::test]
    async fn create_with_profile_returns_both_rows() {
        // Arrange
        let account_id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![account_model(account_id)]])
            .append_query_results(vec![vec![profile_model(account_id, "student")]])
            .append_exec_results(vec![
                MockExecResult {
                    last_insert_id: 1,
                    rows_affected: 1,
                },
                MockExecResult {
                    last_insert_id: 2,
                    rows_affected: 1,
                },
            ])
            .into_connection();

        let repository = AccountRepositoryPostgres::new(Arc::new(db));

        // Act
        let (account, profile) = repository
            .create_with_profile(new_account(), Role::Student)
            .await
            .unwrap();

        // Assert
        assert_eq!(account.username, "maria");
        assert_eq!(profile.account_id, account.id);
        assert_eq!(profile.role, Role::Student);
    }

    #[tokio::test]
    async fn duplicate_username_maps_to_already_exists() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom(
                "duplicate key value violates unique constraint".to_string(),
            )])
            .into_connection();

        let repository = AccountRepositoryPostgres::new(Arc::new(db));

        let result = repository
            .create_with_profile(new_account(), Role::Student)
            .await;
        assert!(matches!(
            result,
            Err(AccountRepositoryError::AccountAlreadyExists)
        ));
    }

    #[tokio::test]
    async fn other_insert_error_surfaces_as_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("connection timeout".to_string())])
            .into_connection();

        let repository = AccountRepositoryPostgres::new(Arc::new(db));

        let result = repository
            .create_with_profile(new_account(), Role::Student)
            .await;
        match result.unwrap_err() {
            AccountRepositoryError::DatabaseError(msg) => {
                assert!(msg.contains("connection timeout"));
            }
            other => panic!("Expected DatabaseError, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn delete_of_missing_account_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<accounts::Model>::new()])
            .into_connection();

        let repository = AccountRepositoryPostgres::new(Arc::new(db));

        let result = repository.delete_account(Uuid::new_v4()).await;
        assert!(matches!(
            result,
            Err(AccountRepositoryError::AccountNotFound)
        ));
    }
}
