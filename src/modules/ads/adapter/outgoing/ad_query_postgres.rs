use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::ads::application::domain::entities::{Ad, AdPosition};
use crate::ads::application::ports::outgoing::{AdQuery, AdQueryError};

use super::conversions::ad_model_to_domain;
use super::sea_orm_entity::ads::{Column, Entity as AdEntity};

#[derive(Clone)]
pub struct AdQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl AdQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AdQuery for AdQueryPostgres {
    async fn list_all(&self) -> Result<Vec<Ad>, AdQueryError> {
        let models = AdEntity::find()
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(|e| AdQueryError::DatabaseError(e.to_string()))?;

        models
            .into_iter()
            .map(ad_model_to_domain)
            .collect::<Result<Vec<_>, _>>()
            .map_err(AdQueryError::DatabaseError)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Ad>, AdQueryError> {
        AdEntity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(|e| AdQueryError::DatabaseError(e.to_string()))?
            .map(ad_model_to_domain)
            .transpose()
            .map_err(AdQueryError::DatabaseError)
    }

    async fn active_for_position(
        &self,
        position: AdPosition,
        now: DateTime<Utc>,
    ) -> Result<Option<Ad>, AdQueryError> {
        // Ties on the window resolve to the most recently created ad;
        // the partial index on (position, created_at DESC) serves this.
        let model = AdEntity::find()
            .filter(Column::Position.eq(position.as_str()))
            .filter(Column::IsActive.eq(true))
            .filter(
                Condition::any()
                    .add(Column::StartDate.is_null())
                    .add(Column::StartDate.lte(now)),
            )
            .filter(
                Condition::any()
                    .add(Column::EndDate.is_null())
                    .add(Column::EndDate.gte(now)),
            )
            .order_by_desc(Column::CreatedAt)
            .one(&*self.db)
            .await
            .map_err(|e| AdQueryError::DatabaseError(e.to_string()))?;

        model
            .map(ad_model_to_domain)
            .transpose()
            .map_err(AdQueryError::DatabaseError)
    }
}
