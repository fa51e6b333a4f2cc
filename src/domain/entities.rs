//! Persisted records for collections and globals.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use time::{Date, OffsetDateTime};
use uuid::Uuid;

use crate::domain::types::{ContentStatus, EmploymentType, NavArea, SkillCategory, SocialPlatform};

/// An uploaded asset. Upload processing happens outside this backend; rows
/// carry the metadata and public URL only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaRecord {
    pub id: Uuid,
    pub filename: String,
    pub alt: String,
    pub content_type: String,
    pub width: Option<i32>,
    pub height: Option<i32>,
    pub url: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillRecord {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub category: SkillCategory,
    pub url: Option<String>,
    pub icon_id: Option<Uuid>,
    pub sort_order: i32,
    pub show_on_stack: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    pub image_id: Option<Uuid>,
    /// Ordered references into the skills collection.
    pub technology_ids: Vec<Uuid>,
    pub live_url: Option<String>,
    pub source_url: Option<String>,
    pub featured: bool,
    pub sort_order: i32,
    pub content: Option<Value>,
    pub status: ContentStatus,
    #[serde(with = "time::serde::rfc3339::option")]
    pub published_at: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

/// One role held at a company. Stored as part of the experience row's
/// positions JSON document, newest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionRecord {
    pub title: String,
    pub employment_type: Option<EmploymentType>,
    pub start_date: Date,
    pub end_date: Option<Date>,
    pub description: Option<Value>,
    #[serde(default)]
    pub skill_ids: Vec<Uuid>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceRecord {
    pub id: Uuid,
    pub company: String,
    pub logo_id: Option<Uuid>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub is_current: bool,
    pub sort_order: i32,
    pub positions: Vec<PositionRecord>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogRecord {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub summary: Option<String>,
    pub image_id: Option<Uuid>,
    pub published_at: Option<Date>,
    pub content: Value,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub meta_image_id: Option<Uuid>,
    pub status: ContentStatus,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryItemRecord {
    pub id: Uuid,
    pub image_id: Uuid,
    pub title: Option<String>,
    pub description: Option<String>,
    /// Camera metadata captured at upload time, surfaced read-only.
    pub exif: Option<Value>,
    pub sort_order: i32,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLinkRecord {
    pub platform: SocialPlatform,
    pub url: String,
    pub label: Option<String>,
}

/// The profile global. Singleton: upserted, never deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileRecord {
    pub name: String,
    pub title: String,
    pub bio: Value,
    pub avatar_id: Option<Uuid>,
    pub email: String,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub timezone: Option<String>,
    pub github: Option<String>,
    pub languages: Vec<String>,
    pub social_links: Vec<SocialLinkRecord>,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavLinkRecord {
    pub label: String,
    pub url: String,
    pub new_tab: bool,
    pub show_on_mobile: bool,
}

/// Navigation for one area (header or footer). Singleton per area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationRecord {
    pub area: NavArea,
    pub links: Vec<NavLinkRecord>,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}
