use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::accounts::adapter::outgoing::conversions::is_unique_violation;
use crate::content::application::domain::entities::ContentItem;
use crate::content::application::ports::outgoing::{
    ContentRepository, ContentRepositoryError, NewContentItem,
};

use super::conversions::content_model_to_domain;
use super::sea_orm_entity::content_items::{
    ActiveModel as ContentActiveModel, Column as ContentColumn, Entity as ContentEntity,
    Model as ContentModel,
};

#[derive(Clone)]
pub struct ContentRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ContentRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn find_model(&self, id: Uuid) -> Result<ContentModel, ContentRepositoryError> {
        ContentEntity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(|e| ContentRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(ContentRepositoryError::ContentNotFound)
    }

    /// `UPDATE content_items SET <col> = <col> + 1 WHERE id = $1`, so
    /// concurrent counts never lose an increment to a stale read.
    async fn bump_counter(
        &self,
        id: Uuid,
        column: ContentColumn,
    ) -> Result<ContentItem, ContentRepositoryError> {
        let result = ContentEntity::update_many()
            .col_expr(column, Expr::col(column).add(1))
            .filter(ContentColumn::Id.eq(id))
            .exec(&*self.db)
            .await
            .map_err(|e| ContentRepositoryError::DatabaseError(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(ContentRepositoryError::ContentNotFound);
        }

        let model = self.find_model(id).await?;
        content_model_to_domain(model).map_err(ContentRepositoryError::DatabaseError)
    }
}

#[async_trait]
impl ContentRepository for ContentRepositoryPostgres {
    async fn insert(&self, item: NewContentItem) -> Result<ContentItem, ContentRepositoryError> {
        let active = ContentActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(item.title),
            slug: Set(item.slug),
            description: Set(item.description),
            kind: Set(item.kind.as_str().to_string()),
            file_path: Set(item.source.file_path().map(|s| s.to_string())),
            youtube_url: Set(item.source.youtube_url().map(|s| s.to_string())),
            cover_image_path: Set(item.cover_image_path),
            uploaded_by: Set(item.uploaded_by),
            is_featured: Set(false),
            download_count: Set(0),
            views_count: Set(0),
            uploaded_at: NotSet,
            updated_at: NotSet,
        };

        let inserted = active.insert(&*self.db).await.map_err(|e| {
            if is_unique_violation(&e) {
                ContentRepositoryError::SlugTaken
            } else {
                ContentRepositoryError::DatabaseError(e.to_string())
            }
        })?;

        content_model_to_domain(inserted).map_err(ContentRepositoryError::DatabaseError)
    }

    async fn delete(&self, id: Uuid) -> Result<(), ContentRepositoryError> {
        let result = ContentEntity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(|e| ContentRepositoryError::DatabaseError(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(ContentRepositoryError::ContentNotFound);
        }
        Ok(())
    }

    async fn increment_views(&self, id: Uuid) -> Result<ContentItem, ContentRepositoryError> {
        self.bump_counter(id, ContentColumn::ViewsCount).await
    }

    async fn increment_downloads(&self, id: Uuid) -> Result<ContentItem, ContentRepositoryError> {
        self.bump_counter(id, ContentColumn::DownloadCount).await
    }

    async fn set_cover_image(
        &self,
        id: Uuid,
        path: String,
    ) -> Result<ContentItem, ContentRepositoryError> {
        let model = self.find_model(id).await?;

        let mut active: ContentActiveModel = model.into();
        active.cover_image_path = Set(Some(path));

        let updated = active
            .update(&*self.db)
            .await
            .map_err(|e| ContentRepositoryError::DatabaseError(e.to_string()))?;

        content_model_to_domain(updated).map_err(ContentRepositoryError::DatabaseError)
    }
}
