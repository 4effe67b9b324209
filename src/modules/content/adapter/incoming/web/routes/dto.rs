use serde::Serialize;
use utoipa::ToSchema;

use crate::content::application::domain::entities::ContentItem;

/// Wire shape of a content item. The tagged domain source flattens
/// back into the two nullable fields clients expect.
#[derive(Serialize, ToSchema)]
pub struct ContentItemResponse {
    pub id: String,
    pub title: String,
    #[schema(example = "intro-to-algebra")]
    pub slug: String,
    pub description: String,
    #[schema(example = "pdf")]
    pub kind: String,
    pub file_path: Option<String>,
    pub youtube_url: Option<String>,
    /// Extracted id for embedding, present only on YouTube items
    pub youtube_video_id: Option<String>,
    pub cover_image_path: Option<String>,
    pub uploaded_by: String,
    pub is_featured: bool,
    pub download_count: i64,
    pub views_count: i64,
    pub uploaded_at: String,
    pub updated_at: String,
}

impl From<ContentItem> for ContentItemResponse {
    fn from(item: ContentItem) -> Self {
        let youtube_video_id = item.youtube_video_id();
        Self {
            id: item.id.to_string(),
            title: item.title,
            slug: item.slug,
            description: item.description,
            kind: item.kind.as_str().to_string(),
            file_path: item.source.file_path().map(|s| s.to_string()),
            youtube_url: item.source.youtube_url().map(|s| s.to_string()),
            youtube_video_id,
            cover_image_path: item.cover_image_path,
            uploaded_by: item.uploaded_by.to_string(),
            is_featured: item.is_featured,
            download_count: item.download_count,
            views_count: item.views_count,
            uploaded_at: item.uploaded_at.to_rfc3339(),
            updated_at: item.updated_at.to_rfc3339(),
        }
    }
}
