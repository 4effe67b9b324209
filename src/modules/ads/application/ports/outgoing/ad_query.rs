use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

use crate::ads::application::domain::entities::{Ad, AdPosition};

#[async_trait]
pub trait AdQuery {
    async fn list_all(&self) -> Result<Vec<Ad>, AdQueryError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Ad>, AdQueryError>;

    /// The most recently created ad that is active at `now` for the
    /// position, if any.
    async fn active_for_position(
        &self,
        position: AdPosition,
        now: DateTime<Utc>,
    ) -> Result<Option<Ad>, AdQueryError>;
}

#[derive(Debug, Error)]
pub enum AdQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}
