use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use std::sync::Arc;
use uuid::Uuid;

use crate::accounts::application::domain::entities::Account;
use crate::accounts::application::ports::outgoing::{AccountQuery, AccountQueryError};

use super::conversions::account_model_to_domain;
use super::sea_orm_entity::accounts::{Column, Entity as AccountEntity};

#[derive(Clone)]
pub struct AccountQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl AccountQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AccountQuery for AccountQueryPostgres {
    async fn find_by_id(&self, account_id: Uuid) -> Result<Option<Account>, AccountQueryError> {
        AccountEntity::find_by_id(account_id)
            .one(&*self.db)
            .await
            .map_err(|e| AccountQueryError::DatabaseError(e.to_string()))?
            .map(account_model_to_domain)
            .transpose()
            .map_err(AccountQueryError::DatabaseError)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<Account>, AccountQueryError> {
        AccountEntity::find()
            .filter(Column::Username.eq(username))
            .one(&*self.db)
            .await
            .map_err(|e| AccountQueryError::DatabaseError(e.to_string()))?
            .map(account_model_to_domain)
            .transpose()
            .map_err(AccountQueryError::DatabaseError)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, AccountQueryError> {
        AccountEntity::find()
            .filter(Column::Email.eq(email))
            .one(&*self.db)
            .await
            .map_err(|e| AccountQueryError::DatabaseError(e.to_string()))?
            .map(account_model_to_domain)
            .transpose()
            .map_err(AccountQueryError::DatabaseError)
    }
}
