//! Repository traits describing persistence adapters.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;
use time::{Date, OffsetDateTime};
use uuid::Uuid;

use crate::domain::entities::{
    BlogRecord, ExperienceRecord, GalleryItemRecord, MediaRecord, NavLinkRecord, NavigationRecord,
    PositionRecord, ProfileRecord, ProjectRecord, SkillRecord, SocialLinkRecord,
};
use crate::domain::types::{ContentStatus, NavArea, SkillCategory};

#[derive(Debug, Error)]
pub enum RepoError {
    #[error("persistence error: {0}")]
    Persistence(String),
    #[error("duplicate record violates unique constraint `{constraint}`")]
    Duplicate { constraint: String },
    #[error("resource not found")]
    NotFound,
    #[error("invalid input: {message}")]
    InvalidInput { message: String },
    #[error("integrity error: {message}")]
    Integrity { message: String },
    #[error("database timeout")]
    Timeout,
}

impl RepoError {
    pub fn from_persistence(err: impl std::fmt::Display) -> Self {
        Self::Persistence(err.to_string())
    }
}

/// Visibility scope for reads against draft-capable collections.
///
/// `Public` sees published documents only; `Authenticated` sees everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadScope {
    Public,
    Authenticated,
}

impl ReadScope {
    pub fn includes_drafts(self) -> bool {
        matches!(self, ReadScope::Authenticated)
    }
}

#[derive(Debug, Clone)]
pub struct CreateMediaParams {
    pub filename: String,
    pub alt: String,
    pub content_type: String,
    pub width: Option<i32>,
    pub height: Option<i32>,
    pub url: String,
}

#[derive(Debug, Clone)]
pub struct UpdateMediaParams {
    pub id: Uuid,
    pub alt: String,
}

#[derive(Debug, Clone)]
pub struct CreateSkillParams {
    pub name: String,
    pub description: Option<String>,
    pub category: SkillCategory,
    pub url: Option<String>,
    pub icon_id: Option<Uuid>,
    pub sort_order: i32,
    pub show_on_stack: bool,
}

#[derive(Debug, Clone)]
pub struct UpdateSkillParams {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub category: SkillCategory,
    pub url: Option<String>,
    pub icon_id: Option<Uuid>,
    pub sort_order: i32,
    pub show_on_stack: bool,
}

#[derive(Debug, Clone)]
pub struct CreateProjectParams {
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    pub image_id: Option<Uuid>,
    pub technology_ids: Vec<Uuid>,
    pub live_url: Option<String>,
    pub source_url: Option<String>,
    pub featured: bool,
    pub sort_order: i32,
    pub content: Option<Value>,
    pub status: ContentStatus,
    pub published_at: Option<OffsetDateTime>,
}

#[derive(Debug, Clone)]
pub struct UpdateProjectParams {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    pub image_id: Option<Uuid>,
    pub technology_ids: Vec<Uuid>,
    pub live_url: Option<String>,
    pub source_url: Option<String>,
    pub featured: bool,
    pub sort_order: i32,
    pub content: Option<Value>,
    pub status: ContentStatus,
    pub published_at: Option<OffsetDateTime>,
}

#[derive(Debug, Clone)]
pub struct CreateExperienceParams {
    pub company: String,
    pub logo_id: Option<Uuid>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub is_current: bool,
    pub sort_order: i32,
    pub positions: Vec<PositionRecord>,
}

#[derive(Debug, Clone)]
pub struct UpdateExperienceParams {
    pub id: Uuid,
    pub company: String,
    pub logo_id: Option<Uuid>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub is_current: bool,
    pub sort_order: i32,
    pub positions: Vec<PositionRecord>,
}

#[derive(Debug, Clone)]
pub struct CreateGalleryItemParams {
    pub image_id: Uuid,
    pub title: Option<String>,
    pub description: Option<String>,
    pub exif: Option<Value>,
    pub sort_order: i32,
}

#[derive(Debug, Clone)]
pub struct UpdateGalleryItemParams {
    pub id: Uuid,
    pub title: Option<String>,
    pub description: Option<String>,
    pub sort_order: i32,
}

#[derive(Debug, Clone)]
pub struct CreateBlogParams {
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
}

#[derive(Debug, Clone)]
pub struct UpdateBlogParams {
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
}

#[derive(Debug, Clone)]
pub struct UpsertProfileParams {
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
}

#[async_trait]
pub trait MediaRepo: Send + Sync {
    /// List media ordered by creation time, oldest first.
    async fn list_media(&self) -> Result<Vec<MediaRecord>, RepoError>;

    async fn find_media(&self, id: Uuid) -> Result<Option<MediaRecord>, RepoError>;

    async fn create_media(&self, params: CreateMediaParams) -> Result<MediaRecord, RepoError>;

    async fn update_media(&self, params: UpdateMediaParams) -> Result<MediaRecord, RepoError>;

    /// Delete one media row, returning it when it existed.
    async fn delete_media(&self, id: Uuid) -> Result<Option<MediaRecord>, RepoError>;

    /// Delete every media row, returning the number removed.
    async fn delete_all_media(&self) -> Result<u64, RepoError>;
}

#[async_trait]
pub trait SkillsRepo: Send + Sync {
    /// List skills ordered by descending sort order within category.
    async fn list_skills(&self) -> Result<Vec<SkillRecord>, RepoError>;

    async fn find_skill(&self, id: Uuid) -> Result<Option<SkillRecord>, RepoError>;

    async fn create_skill(&self, params: CreateSkillParams) -> Result<SkillRecord, RepoError>;

    async fn update_skill(&self, params: UpdateSkillParams) -> Result<SkillRecord, RepoError>;

    async fn delete_skill(&self, id: Uuid) -> Result<Option<SkillRecord>, RepoError>;

    async fn delete_all_skills(&self) -> Result<u64, RepoError>;
}

#[async_trait]
pub trait ProjectsRepo: Send + Sync {
    /// List projects ordered by descending sort order. Public scope excludes
    /// drafts.
    async fn list_projects(&self, scope: ReadScope) -> Result<Vec<ProjectRecord>, RepoError>;

    async fn find_project(&self, id: Uuid) -> Result<Option<ProjectRecord>, RepoError>;

    async fn find_project_by_slug(
        &self,
        scope: ReadScope,
        slug: &str,
    ) -> Result<Option<ProjectRecord>, RepoError>;

    async fn project_slug_exists(&self, slug: &str) -> Result<bool, RepoError>;

    async fn create_project(&self, params: CreateProjectParams)
    -> Result<ProjectRecord, RepoError>;

    async fn update_project(&self, params: UpdateProjectParams)
    -> Result<ProjectRecord, RepoError>;

    async fn delete_project(&self, id: Uuid) -> Result<Option<ProjectRecord>, RepoError>;

    async fn delete_all_projects(&self) -> Result<u64, RepoError>;
}

#[async_trait]
pub trait ExperiencesRepo: Send + Sync {
    /// List experiences ordered by descending sort order.
    async fn list_experiences(&self) -> Result<Vec<ExperienceRecord>, RepoError>;

    async fn find_experience(&self, id: Uuid) -> Result<Option<ExperienceRecord>, RepoError>;

    async fn create_experience(
        &self,
        params: CreateExperienceParams,
    ) -> Result<ExperienceRecord, RepoError>;

    async fn update_experience(
        &self,
        params: UpdateExperienceParams,
    ) -> Result<ExperienceRecord, RepoError>;

    async fn delete_experience(&self, id: Uuid) -> Result<Option<ExperienceRecord>, RepoError>;

    async fn delete_all_experiences(&self) -> Result<u64, RepoError>;
}

#[async_trait]
pub trait GalleryRepo: Send + Sync {
    /// List gallery items ordered by descending sort order.
    async fn list_gallery_items(&self) -> Result<Vec<GalleryItemRecord>, RepoError>;

    async fn find_gallery_item(&self, id: Uuid) -> Result<Option<GalleryItemRecord>, RepoError>;

    async fn create_gallery_item(
        &self,
        params: CreateGalleryItemParams,
    ) -> Result<GalleryItemRecord, RepoError>;

    async fn update_gallery_item(
        &self,
        params: UpdateGalleryItemParams,
    ) -> Result<GalleryItemRecord, RepoError>;

    async fn delete_gallery_item(&self, id: Uuid)
    -> Result<Option<GalleryItemRecord>, RepoError>;

    async fn delete_all_gallery_items(&self) -> Result<u64, RepoError>;
}

#[async_trait]
pub trait BlogsRepo: Send + Sync {
    /// List blogs newest first by publication date. Public scope excludes
    /// drafts.
    async fn list_blogs(&self, scope: ReadScope) -> Result<Vec<BlogRecord>, RepoError>;

    async fn find_blog(&self, id: Uuid) -> Result<Option<BlogRecord>, RepoError>;

    async fn find_blog_by_slug(
        &self,
        scope: ReadScope,
        slug: &str,
    ) -> Result<Option<BlogRecord>, RepoError>;

    async fn blog_slug_exists(&self, slug: &str) -> Result<bool, RepoError>;

    async fn create_blog(&self, params: CreateBlogParams) -> Result<BlogRecord, RepoError>;

    async fn update_blog(&self, params: UpdateBlogParams) -> Result<BlogRecord, RepoError>;

    async fn delete_blog(&self, id: Uuid) -> Result<Option<BlogRecord>, RepoError>;

    async fn delete_all_blogs(&self) -> Result<u64, RepoError>;
}

#[async_trait]
pub trait GlobalsRepo: Send + Sync {
    async fn load_profile(&self) -> Result<Option<ProfileRecord>, RepoError>;

    async fn upsert_profile(&self, params: UpsertProfileParams)
    -> Result<ProfileRecord, RepoError>;

    async fn load_navigation(&self, area: NavArea) -> Result<Option<NavigationRecord>, RepoError>;

    async fn upsert_navigation(
        &self,
        area: NavArea,
        links: Vec<NavLinkRecord>,
    ) -> Result<NavigationRecord, RepoError>;
}

/// Liveness probe for the health endpoint.
#[async_trait]
pub trait HealthProbe: Send + Sync {
    async fn ping(&self) -> Result<(), RepoError>;
}
