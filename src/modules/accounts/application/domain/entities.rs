use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Base login entity. Credentials live here; everything role-related
/// lives on the [`Profile`] extension.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub is_staff: bool,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Account {
    pub fn full_name(&self) -> String {
        let name = format!("{} {}", self.first_name, self.last_name);
        let name = name.trim().to_string();
        if name.is_empty() {
            self.username.clone()
        } else {
            name
        }
    }
}

/// Per-account identity extension: role, verification and the
/// self-service profile fields. Exactly one exists per account.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub id: Uuid,
    pub account_id: Uuid,
    pub role: Role,
    pub subject: Option<Subject>,
    pub bio: Option<String>,
    pub phone_number: Option<String>,
    pub location: Option<String>,
    pub picture_path: Option<String>,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    /// Only verified teachers may publish content.
    pub fn can_publish(&self) -> bool {
        self.role == Role::Teacher && self.is_verified
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Student,
    Teacher,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Teacher => "teacher",
            Role::Admin => "admin",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "student" => Some(Role::Student),
            "teacher" => Some(Role::Teacher),
            "admin" => Some(Role::Admin),
            _ => None,
        }
    }
}

impl Default for Role {
    fn default() -> Self {
        Role::Student
    }
}

/// Subject tags a teacher can specialize in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Subject {
    Mathematics,
    Sciences,
    Languages,
    Technology,
    Business,
    Arts,
    Other,
}

impl Subject {
    pub fn as_str(&self) -> &'static str {
        match self {
            Subject::Mathematics => "mathematics",
            Subject::Sciences => "sciences",
            Subject::Languages => "languages",
            Subject::Technology => "technology",
            Subject::Business => "business",
            Subject::Arts => "arts",
            Subject::Other => "other",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "mathematics" => Some(Subject::Mathematics),
            "sciences" => Some(Subject::Sciences),
            "languages" => Some(Subject::Languages),
            "technology" => Some(Subject::Technology),
            "business" => Some(Subject::Business),
            "arts" => Some(Subject::Arts),
            "other" => Some(Subject::Other),
            _ => None,
        }
    }
}
