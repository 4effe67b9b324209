use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use thiserror::Error;

use crate::ads::application::domain::entities::{Ad, AdPosition};
use crate::ads::application::ports::outgoing::AdQuery;

#[derive(Debug, Error)]
pub enum SelectActiveAdsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// One winner per position; positions without an active ad are simply
/// absent from the map.
#[async_trait]
pub trait ISelectActiveAdsUseCase: Send + Sync {
    async fn execute(&self) -> Result<HashMap<AdPosition, Ad>, SelectActiveAdsError>;
}

pub struct SelectActiveAdsUseCase<Q>
where
    Q: AdQuery + Send + Sync,
{
    query: Q,
}

impl<Q> SelectActiveAdsUseCase<Q>
where
    Q: AdQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ISelectActiveAdsUseCase for SelectActiveAdsUseCase<Q>
where
    Q: AdQuery + Send + Sync,
{
    async fn execute(&self) -> Result<HashMap<AdPosition, Ad>, SelectActiveAdsError> {
        // One clock reading for the whole selection, so every position
        // is judged against the same instant.
        let now = Utc::now();

        let mut winners = HashMap::new();
        for position in AdPosition::ALL {
            let ad = self
                .query
                .active_for_position(position, now)
                .await
                .map_err(|e| SelectActiveAdsError::RepositoryError(e.to_string()))?;

            if let Some(ad) = ad {
                winners.insert(position, ad);
            }
        }

        Ok(winners)
    }
}
