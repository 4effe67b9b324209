use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// What kind of learning resource a content item is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    Video,
    Pdf,
    Audio,
    Image,
    Youtube,
}

impl ContentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::Video => "video",
            ContentKind::Pdf => "pdf",
            ContentKind::Audio => "audio",
            ContentKind::Image => "image",
            ContentKind::Youtube => "youtube",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "video" => Some(ContentKind::Video),
            "pdf" => Some(ContentKind::Pdf),
            "audio" => Some(ContentKind::Audio),
            "image" => Some(ContentKind::Image),
            "youtube" => Some(ContentKind::Youtube),
            _ => None,
        }
    }
}

/// Where the bytes live. The flat row has two nullable columns; the
/// domain type makes the exactly-one-of-them rule unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSource {
    File { path: String },
    YouTube { url: String },
}

impl ContentSource {
    pub fn file_path(&self) -> Option<&str> {
        match self {
            ContentSource::File { path } => Some(path),
            ContentSource::YouTube { .. } => None,
        }
    }

    pub fn youtube_url(&self) -> Option<&str> {
        match self {
            ContentSource::File { .. } => None,
            ContentSource::YouTube { url } => Some(url),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContentItem {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub kind: ContentKind,
    pub source: ContentSource,
    pub cover_image_path: Option<String>,
    pub uploaded_by: Uuid,
    pub is_featured: bool,
    pub download_count: i64,
    pub views_count: i64,
    pub uploaded_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ContentItem {
    pub fn is_downloadable(&self) -> bool {
        matches!(self.source, ContentSource::File { .. })
    }

    /// Extracts the video id from `youtube.com/watch?v=` and
    /// `youtu.be/` style links. Anything else yields None.
    pub fn youtube_video_id(&self) -> Option<String> {
        let url = self.source.youtube_url()?;
        extract_youtube_id(url)
    }
}

pub fn extract_youtube_id(url: &str) -> Option<String> {
    let trimmed = url.trim();

    if let Some(pos) = trimmed.find("youtube.com/watch") {
        let query = trimmed[pos..].split_once('?').map(|(_, q)| q)?;
        for pair in query.split('&') {
            if let Some(id) = pair.strip_prefix("v=") {
                if !id.is_empty() {
                    return Some(id.to_string());
                }
            }
        }
        return None;
    }

    if let Some(pos) = trimmed.find("youtu.be/") {
        let rest = &trimmed[pos + "youtu.be/".len()..];
        let id: &str = rest.split(['?', '&', '/']).next().unwrap_or("");
        if !id.is_empty() {
            return Some(id.to_string());
        }
    }

    None
}
