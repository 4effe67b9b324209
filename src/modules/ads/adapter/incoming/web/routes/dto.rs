use serde::Serialize;
use utoipa::ToSchema;

use crate::ads::application::domain::entities::Ad;

#[derive(Serialize, ToSchema)]
pub struct AdResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image_path: Option<String>,
    pub target_url: String,
    #[schema(example = "Learn More")]
    pub cta_text: String,
    #[schema(example = "sidebar")]
    pub position: String,
    pub is_active: bool,
    pub show_timer: bool,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub created_by: Option<String>,
    pub created_at: String,
}

impl From<Ad> for AdResponse {
    fn from(ad: Ad) -> Self {
        Self {
            id: ad.id.to_string(),
            title: ad.title,
            description: ad.description,
            image_path: ad.image_path,
            target_url: ad.target_url,
            cta_text: ad.cta_text,
            position: ad.position.as_str().to_string(),
            is_active: ad.is_active,
            show_timer: ad.show_timer,
            start_date: ad.start_date.map(|d| d.to_rfc3339()),
            end_date: ad.end_date.map(|d| d.to_rfc3339()),
            created_by: ad.created_by.map(|id| id.to_string()),
            created_at: ad.created_at.to_rfc3339(),
        }
    }
}
