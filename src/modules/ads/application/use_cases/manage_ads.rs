use async_trait::async_trait;
use thiserror::Error;
use tracing::info;
use uuid::Uuid;

use crate::accounts::application::ports::outgoing::ProfileRepository;
use crate::ads::application::domain::entities::Ad;
use crate::ads::application::ports::outgoing::{
    AdChanges, AdQuery, AdRepository, AdRepositoryError, NewAd,
};

/// Operator CRUD over the ad inventory. Every operation re-checks the
/// caller's profile, mirroring the content-upload gate.
#[derive(Debug, Error)]
pub enum ManageAdsError {
    #[error("Only operators may manage ads")]
    AdminOnly,
    #[error("Ad not found")]
    AdNotFound,
    #[error("{0}")]
    InvalidInput(&'static str),
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[derive(Debug, Clone)]
pub struct CreateAdInput {
    pub title: String,
    pub description: String,
    pub image_path: Option<String>,
    pub target_url: String,
    pub cta_text: Option<String>,
    pub position: crate::ads::application::domain::entities::AdPosition,
    pub show_timer: bool,
    pub start_date: Option<chrono::DateTime<chrono::Utc>>,
    pub end_date: Option<chrono::DateTime<chrono::Utc>>,
}

#[async_trait]
pub trait ICreateAdUseCase: Send + Sync {
    async fn execute(&self, caller_id: Uuid, input: CreateAdInput) -> Result<Ad, ManageAdsError>;
}

#[async_trait]
pub trait IUpdateAdUseCase: Send + Sync {
    async fn execute(
        &self,
        caller_id: Uuid,
        ad_id: Uuid,
        changes: AdChanges,
    ) -> Result<Ad, ManageAdsError>;
}

#[async_trait]
pub trait IDeleteAdUseCase: Send + Sync {
    async fn execute(&self, caller_id: Uuid, ad_id: Uuid) -> Result<(), ManageAdsError>;
}

#[async_trait]
pub trait IListAdsUseCase: Send + Sync {
    async fn execute(&self, caller_id: Uuid) -> Result<Vec<Ad>, ManageAdsError>;
}

pub struct ManageAdsUseCase<P, Q, R>
where
    P: ProfileRepository + Send + Sync,
    Q: AdQuery + Send + Sync,
    R: AdRepository + Send + Sync,
{
    profiles: P,
    query: Q,
    repository: R,
}

impl<P, Q, R> ManageAdsUseCase<P, Q, R>
where
    P: ProfileRepository + Send + Sync,
    Q: AdQuery + Send + Sync,
    R: AdRepository + Send + Sync,
{
    pub fn new(profiles: P, query: Q, repository: R) -> Self {
        Self {
            profiles,
            query,
            repository,
        }
    }

    async fn require_admin(&self, caller_id: Uuid) -> Result<(), ManageAdsError> {
        let caller = self
            .profiles
            .find_by_account_id(caller_id)
            .await
            .map_err(|e| ManageAdsError::RepositoryError(e.to_string()))?
            .ok_or(ManageAdsError::AdminOnly)?;

        if !caller.is_admin() {
            return Err(ManageAdsError::AdminOnly);
        }
        Ok(())
    }
}

fn map_repo_err(e: AdRepositoryError) -> ManageAdsError {
    match e {
        AdRepositoryError::AdNotFound => ManageAdsError::AdNotFound,
        other => ManageAdsError::RepositoryError(other.to_string()),
    }
}

#[async_trait]
impl<P, Q, R> ICreateAdUseCase for ManageAdsUseCase<P, Q, R>
where
    P: ProfileRepository + Send + Sync,
    Q: AdQuery + Send + Sync,
    R: AdRepository + Send + Sync,
{
    async fn execute(&self, caller_id: Uuid, input: CreateAdInput) -> Result<Ad, ManageAdsError> {
        self.require_admin(caller_id).await?;

        if input.title.trim().is_empty() {
            return Err(ManageAdsError::InvalidInput("Title is required"));
        }
        if input.target_url.trim().is_empty() {
            return Err(ManageAdsError::InvalidInput("Target URL is required"));
        }
        if let (Some(start), Some(end)) = (input.start_date, input.end_date) {
            if end < start {
                return Err(ManageAdsError::InvalidInput(
                    "End date must not precede start date",
                ));
            }
        }

        let ad = self
            .repository
            .insert(NewAd {
                title: input.title,
                description: input.description,
                image_path: input.image_path,
                target_url: input.target_url,
                cta_text: input.cta_text.unwrap_or_else(|| "Learn More".to_string()),
                position: input.position,
                show_timer: input.show_timer,
                start_date: input.start_date,
                end_date: input.end_date,
                created_by: Some(caller_id),
            })
            .await
            .map_err(map_repo_err)?;

        info!(ad_id = %ad.id, position = ad.position.as_str(), "Ad created");
        Ok(ad)
    }
}

#[async_trait]
impl<P, Q, R> IUpdateAdUseCase for ManageAdsUseCase<P, Q, R>
where
    P: ProfileRepository + Send + Sync,
    Q: AdQuery + Send + Sync,
    R: AdRepository + Send + Sync,
{
    async fn execute(
        &self,
        caller_id: Uuid,
        ad_id: Uuid,
        changes: AdChanges,
    ) -> Result<Ad, ManageAdsError> {
        self.require_admin(caller_id).await?;

        let ad = self
            .repository
            .apply_changes(ad_id, changes)
            .await
            .map_err(map_repo_err)?;

        info!(ad_id = %ad_id, "Ad updated");
        Ok(ad)
    }
}

#[async_trait]
impl<P, Q, R> IDeleteAdUseCase for ManageAdsUseCase<P, Q, R>
where
    P: ProfileRepository + Send + Sync,
    Q: AdQuery + Send + Sync,
    R: AdRepository + Send + Sync,
{
    async fn execute(&self, caller_id: Uuid, ad_id: Uuid) -> Result<(), ManageAdsError> {
        self.require_admin(caller_id).await?;

        self.repository.delete(ad_id).await.map_err(map_repo_err)?;

        info!(ad_id = %ad_id, "Ad deleted");
        Ok(())
    }
}

#[async_trait]
impl<P, Q, R> IListAdsUseCase for ManageAdsUseCase<P, Q, R>
where
    P: ProfileRepository + Send + Sync,
    Q: AdQuery + Send + Sync,
    R: AdRepository + Send + Sync,
{
    async fn execute(&self, caller_id: Uuid) -> Result<Vec<Ad>, ManageAdsError> {
        self.require_admin(caller_id).await?;

        self.query
            .list_all()
            .await
            .map_err(|e| ManageAdsError::RepositoryError(e.to_string()))
    }
}
