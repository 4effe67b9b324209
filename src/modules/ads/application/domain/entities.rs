use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The five fixed slots the frontend renders ads into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdPosition {
    Top,
    MidContent,
    Sidebar,
    SidebarBottom,
    Bottom,
}

impl AdPosition {
    pub const ALL: [AdPosition; 5] = [
        AdPosition::Top,
        AdPosition::MidContent,
        AdPosition::Sidebar,
        AdPosition::SidebarBottom,
        AdPosition::Bottom,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AdPosition::Top => "top",
            AdPosition::MidContent => "mid_content",
            AdPosition::Sidebar => "sidebar",
            AdPosition::SidebarBottom => "sidebar_bottom",
            AdPosition::Bottom => "bottom",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "top" => Some(AdPosition::Top),
            "mid_content" => Some(AdPosition::MidContent),
            "sidebar" => Some(AdPosition::Sidebar),
            "sidebar_bottom" => Some(AdPosition::SidebarBottom),
            "bottom" => Some(AdPosition::Bottom),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ad {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub image_path: Option<String>,
    pub target_url: String,
    pub cta_text: String,
    pub position: AdPosition,
    pub is_active: bool,
    pub show_timer: bool,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub created_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Ad {
    /// Window check against a caller-supplied clock. Open-ended sides
    /// (null start or end) always pass.
    pub fn is_active_at(&self, now: DateTime<Utc>) -> bool {
        self.is_active
            && self.start_date.map_or(true, |start| now >= start)
            && self.end_date.map_or(true, |end| now <= end)
    }
}
