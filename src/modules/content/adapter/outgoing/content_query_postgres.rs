use async_trait::async_trait;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::content::application::domain::entities::ContentItem;
use crate::content::application::ports::outgoing::{ContentQuery, ContentQueryError};

use super::conversions::content_model_to_domain;
use super::sea_orm_entity::content_items::{Column, Entity as ContentEntity};

#[derive(Clone)]
pub struct ContentQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ContentQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn to_domain_list(
    models: Vec<super::sea_orm_entity::content_items::Model>,
) -> Result<Vec<ContentItem>, ContentQueryError> {
    models
        .into_iter()
        .map(content_model_to_domain)
        .collect::<Result<Vec<_>, _>>()
        .map_err(ContentQueryError::DatabaseError)
}

#[async_trait]
impl ContentQuery for ContentQueryPostgres {
    async fn list_all(&self) -> Result<Vec<ContentItem>, ContentQueryError> {
        let models = ContentEntity::find()
            .order_by_desc(Column::UploadedAt)
            .all(&*self.db)
            .await
            .map_err(|e| ContentQueryError::DatabaseError(e.to_string()))?;

        to_domain_list(models)
    }

    async fn search(&self, term: &str) -> Result<Vec<ContentItem>, ContentQueryError> {
        // ILIKE with the term escaped, so user input never injects
        // wildcard patterns.
        let pattern = format!(
            "%{}%",
            term.replace('\\', "\\\\").replace('%', "\\%").replace('_', "\\_")
        );

        let models = ContentEntity::find()
            .filter(
                Condition::any()
                    .add(Expr::col(Column::Title).ilike(&pattern))
                    .add(Expr::col(Column::Description).ilike(&pattern)),
            )
            .order_by_desc(Column::UploadedAt)
            .all(&*self.db)
            .await
            .map_err(|e| ContentQueryError::DatabaseError(e.to_string()))?;

        to_domain_list(models)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<ContentItem>, ContentQueryError> {
        ContentEntity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(|e| ContentQueryError::DatabaseError(e.to_string()))?
            .map(content_model_to_domain)
            .transpose()
            .map_err(ContentQueryError::DatabaseError)
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<ContentItem>, ContentQueryError> {
        ContentEntity::find()
            .filter(Column::Slug.eq(slug))
            .one(&*self.db)
            .await
            .map_err(|e| ContentQueryError::DatabaseError(e.to_string()))?
            .map(content_model_to_domain)
            .transpose()
            .map_err(ContentQueryError::DatabaseError)
    }

    async fn slug_exists(&self, slug: &str) -> Result<bool, ContentQueryError> {
        let count = ContentEntity::find()
            .filter(Column::Slug.eq(slug))
            .count(&*self.db)
            .await
            .map_err(|e| ContentQueryError::DatabaseError(e.to_string()))?;

        Ok(count > 0)
    }
}
