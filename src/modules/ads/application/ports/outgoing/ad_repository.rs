use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

use crate::ads::application::domain::entities::{Ad, AdPosition};

#[derive(Debug, Clone)]
pub struct NewAd {
    pub title: String,
    pub description: String,
    pub image_path: Option<String>,
    pub target_url: String,
    pub cta_text: String,
    pub position: AdPosition,
    pub show_timer: bool,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub created_by: Option<Uuid>,
}

/// Partial update; `None` leaves the column alone, `Some(None)` on the
/// nullable fields clears it.
#[derive(Debug, Clone, Default)]
pub struct AdChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image_path: Option<Option<String>>,
    pub target_url: Option<String>,
    pub cta_text: Option<String>,
    pub position: Option<AdPosition>,
    pub is_active: Option<bool>,
    pub show_timer: Option<bool>,
    pub start_date: Option<Option<DateTime<Utc>>>,
    pub end_date: Option<Option<DateTime<Utc>>>,
}

#[async_trait]
pub trait AdRepository {
    async fn insert(&self, ad: NewAd) -> Result<Ad, AdRepositoryError>;

    async fn apply_changes(&self, id: Uuid, changes: AdChanges) -> Result<Ad, AdRepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), AdRepositoryError>;
}

#[derive(Debug, Error)]
pub enum AdRepositoryError {
    #[error("Ad not found")]
    AdNotFound,
    #[error("Database error: {0}")]
    DatabaseError(String),
}
