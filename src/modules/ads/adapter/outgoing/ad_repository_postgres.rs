use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::ads::application::domain::entities::Ad;
use crate::ads::application::ports::outgoing::{
    AdChanges, AdRepository, AdRepositoryError, NewAd,
};

use super::conversions::ad_model_to_domain;
use super::sea_orm_entity::ads::{ActiveModel as AdActiveModel, Entity as AdEntity};

#[derive(Clone)]
pub struct AdRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl AdRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AdRepository for AdRepositoryPostgres {
    async fn insert(&self, ad: NewAd) -> Result<Ad, AdRepositoryError> {
        let active = AdActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(ad.title),
            description: Set(ad.description),
            image_path: Set(ad.image_path),
            target_url: Set(ad.target_url),
            cta_text: Set(ad.cta_text),
            position: Set(ad.position.as_str().to_string()),
            is_active: Set(true),
            show_timer: Set(ad.show_timer),
            start_date: Set(ad.start_date.map(Into::into)),
            end_date: Set(ad.end_date.map(Into::into)),
            created_by: Set(ad.created_by),
            created_at: NotSet,
            updated_at: NotSet,
        };

        let inserted = active
            .insert(&*self.db)
            .await
            .map_err(|e| AdRepositoryError::DatabaseError(e.to_string()))?;

        ad_model_to_domain(inserted).map_err(AdRepositoryError::DatabaseError)
    }

    async fn apply_changes(&self, id: Uuid, changes: AdChanges) -> Result<Ad, AdRepositoryError> {
        let model = AdEntity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(|e| AdRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(AdRepositoryError::AdNotFound)?;

        let mut active: AdActiveModel = model.into();
        if let Some(title) = changes.title {
            active.title = Set(title);
        }
        if let Some(description) = changes.description {
            active.description = Set(description);
        }
        if let Some(image_path) = changes.image_path {
            active.image_path = Set(image_path);
        }
        if let Some(target_url) = changes.target_url {
            active.target_url = Set(target_url);
        }
        if let Some(cta_text) = changes.cta_text {
            active.cta_text = Set(cta_text);
        }
        if let Some(position) = changes.position {
            active.position = Set(position.as_str().to_string());
        }
        if let Some(is_active) = changes.is_active {
            active.is_active = Set(is_active);
        }
        if let Some(show_timer) = changes.show_timer {
            active.show_timer = Set(show_timer);
        }
        if let Some(start_date) = changes.start_date {
            active.start_date = Set(start_date.map(Into::into));
        }
        if let Some(end_date) = changes.end_date {
            active.end_date = Set(end_date.map(Into::into));
        }
        active.updated_at = Set(chrono::Utc::now().into());

        let updated = active
            .update(&*self.db)
            .await
            .map_err(|e| AdRepositoryError::DatabaseError(e.to_string()))?;

        ad_model_to_domain(updated).map_err(AdRepositoryError::DatabaseError)
    }

    async fn delete(&self, id: Uuid) -> Result<(), AdRepositoryError> {
        let result = AdEntity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(|e| AdRepositoryError::DatabaseError(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(AdRepositoryError::AdNotFound);
        }
        Ok(())
    }
}
