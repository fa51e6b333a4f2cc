//! Authenticated write endpoints.
//!
//! Every route here sits behind [`super::middleware::require_admin`]. Bodies
//! map one-to-one onto the admin service commands; the optional
//! `suppress_revalidation` query flag skips change events for bulk tooling.

use axum::Json;
use axum::extract::{Path, Query, State};
use serde::Deserialize;
use serde_json::Value;
use time::Date;
use uuid::Uuid;

use crate::application::admin::{
    CreateBlogCommand, CreateProjectCommand, CreateSkillCommand, MutationContext,
    UpdateBlogCommand, UpdateProjectCommand,
};
use crate::application::repos::{
    CreateExperienceParams, CreateGalleryItemParams, CreateMediaParams, UpdateExperienceParams,
    UpdateGalleryItemParams, UpdateMediaParams, UpdateSkillParams, UpsertProfileParams,
};
use crate::domain::entities::{
    BlogRecord, ExperienceRecord, GalleryItemRecord, MediaRecord, NavLinkRecord, NavigationRecord,
    PositionRecord, ProfileRecord, ProjectRecord, SkillRecord, SocialLinkRecord,
};
use crate::domain::types::{ContentStatus, NavArea, SkillCategory};

use super::HttpState;
use super::error::ApiError;

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct MutationQuery {
    pub suppress_revalidation: bool,
}

impl MutationQuery {
    fn context(&self) -> MutationContext {
        MutationContext {
            suppress_revalidation: self.suppress_revalidation,
        }
    }
}

// ----------------------------------------------------------------------
// Media
// ----------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct MediaCreateRequest {
    pub filename: String,
    pub alt: String,
    pub content_type: String,
    #[serde(default)]
    pub width: Option<i32>,
    #[serde(default)]
    pub height: Option<i32>,
    pub url: String,
}

#[derive(Debug, Deserialize)]
pub struct MediaUpdateRequest {
    pub alt: String,
}

pub async fn create_media(
    State(state): State<HttpState>,
    Query(query): Query<MutationQuery>,
    Json(body): Json<MediaCreateRequest>,
) -> Result<Json<MediaRecord>, ApiError> {
    let record = state
        .admin
        .create_media(
            CreateMediaParams {
                filename: body.filename,
                alt: body.alt,
                content_type: body.content_type,
                width: body.width,
                height: body.height,
                url: body.url,
            },
            query.context(),
        )
        .await?;
    Ok(Json(record))
}

pub async fn update_media(
    State(state): State<HttpState>,
    Path(id): Path<Uuid>,
    Query(query): Query<MutationQuery>,
    Json(body): Json<MediaUpdateRequest>,
) -> Result<Json<MediaRecord>, ApiError> {
    let record = state
        .admin
        .update_media(UpdateMediaParams { id, alt: body.alt }, query.context())
        .await?;
    Ok(Json(record))
}

pub async fn delete_media(
    State(state): State<HttpState>,
    Path(id): Path<Uuid>,
    Query(query): Query<MutationQuery>,
) -> Result<Json<MediaRecord>, ApiError> {
    let record = state.admin.delete_media(id, query.context()).await?;
    Ok(Json(record))
}

// ----------------------------------------------------------------------
// Skills
// ----------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct SkillRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub category: SkillCategory,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub icon_id: Option<Uuid>,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default)]
    pub show_on_stack: bool,
}

pub async fn create_skill(
    State(state): State<HttpState>,
    Query(query): Query<MutationQuery>,
    Json(body): Json<SkillRequest>,
) -> Result<Json<SkillRecord>, ApiError> {
    let record = state
        .admin
        .create_skill(
            CreateSkillCommand {
                name: body.name,
                description: body.description,
                category: body.category,
                url: body.url,
                icon_id: body.icon_id,
                sort_order: body.sort_order,
                show_on_stack: body.show_on_stack,
            },
            query.context(),
        )
        .await?;
    Ok(Json(record))
}

pub async fn update_skill(
    State(state): State<HttpState>,
    Path(id): Path<Uuid>,
    Query(query): Query<MutationQuery>,
    Json(body): Json<SkillRequest>,
) -> Result<Json<SkillRecord>, ApiError> {
    let record = state
        .admin
        .update_skill(
            UpdateSkillParams {
                id,
                name: body.name,
                description: body.description,
                category: body.category,
                url: body.url,
                icon_id: body.icon_id,
                sort_order: body.sort_order,
                show_on_stack: body.show_on_stack,
            },
            query.context(),
        )
        .await?;
    Ok(Json(record))
}

pub async fn delete_skill(
    State(state): State<HttpState>,
    Path(id): Path<Uuid>,
    Query(query): Query<MutationQuery>,
) -> Result<Json<SkillRecord>, ApiError> {
    let record = state.admin.delete_skill(id, query.context()).await?;
    Ok(Json(record))
}

// ----------------------------------------------------------------------
// Projects
// ----------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct ProjectRequest {
    pub title: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_id: Option<Uuid>,
    #[serde(default)]
    pub technology_ids: Vec<Uuid>,
    #[serde(default)]
    pub live_url: Option<String>,
    #[serde(default)]
    pub source_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default)]
    pub content: Option<Value>,
    #[serde(default = "draft_status")]
    pub status: ContentStatus,
}

fn draft_status() -> ContentStatus {
    ContentStatus::Draft
}

pub async fn create_project(
    State(state): State<HttpState>,
    Query(query): Query<MutationQuery>,
    Json(body): Json<ProjectRequest>,
) -> Result<Json<ProjectRecord>, ApiError> {
    let record = state
        .admin
        .create_project(
            CreateProjectCommand {
                title: body.title,
                slug: body.slug,
                description: body.description,
                image_id: body.image_id,
                technology_ids: body.technology_ids,
                live_url: body.live_url,
                source_url: body.source_url,
                featured: body.featured,
                sort_order: body.sort_order,
                content: body.content,
                status: body.status,
            },
            query.context(),
        )
        .await?;
    Ok(Json(record))
}

pub async fn update_project(
    State(state): State<HttpState>,
    Path(id): Path<Uuid>,
    Query(query): Query<MutationQuery>,
    Json(body): Json<ProjectRequest>,
) -> Result<Json<ProjectRecord>, ApiError> {
    let record = state
        .admin
        .update_project(
            UpdateProjectCommand {
                id,
                title: body.title,
                slug: body.slug,
                description: body.description,
                image_id: body.image_id,
                technology_ids: body.technology_ids,
                live_url: body.live_url,
                source_url: body.source_url,
                featured: body.featured,
                sort_order: body.sort_order,
                content: body.content,
                status: body.status,
            },
            query.context(),
        )
        .await?;
    Ok(Json(record))
}

pub async fn delete_project(
    State(state): State<HttpState>,
    Path(id): Path<Uuid>,
    Query(query): Query<MutationQuery>,
) -> Result<Json<ProjectRecord>, ApiError> {
    let record = state.admin.delete_project(id, query.context()).await?;
    Ok(Json(record))
}

// ----------------------------------------------------------------------
// Experiences
// ----------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct ExperienceRequest {
    pub company: String,
    #[serde(default)]
    pub logo_id: Option<Uuid>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub is_current: bool,
    #[serde(default)]
    pub sort_order: i32,
    pub positions: Vec<PositionRecord>,
}

pub async fn create_experience(
    State(state): State<HttpState>,
    Query(query): Query<MutationQuery>,
    Json(body): Json<ExperienceRequest>,
) -> Result<Json<ExperienceRecord>, ApiError> {
    let record = state
        .admin
        .create_experience(
            CreateExperienceParams {
                company: body.company,
                logo_id: body.logo_id,
                website: body.website,
                location: body.location,
                is_current: body.is_current,
                sort_order: body.sort_order,
                positions: body.positions,
            },
            query.context(),
        )
        .await?;
    Ok(Json(record))
}

pub async fn update_experience(
    State(state): State<HttpState>,
    Path(id): Path<Uuid>,
    Query(query): Query<MutationQuery>,
    Json(body): Json<ExperienceRequest>,
) -> Result<Json<ExperienceRecord>, ApiError> {
    let record = state
        .admin
        .update_experience(
            UpdateExperienceParams {
                id,
                company: body.company,
                logo_id: body.logo_id,
                website: body.website,
                location: body.location,
                is_current: body.is_current,
                sort_order: body.sort_order,
                positions: body.positions,
            },
            query.context(),
        )
        .await?;
    Ok(Json(record))
}

pub async fn delete_experience(
    State(state): State<HttpState>,
    Path(id): Path<Uuid>,
    Query(query): Query<MutationQuery>,
) -> Result<Json<ExperienceRecord>, ApiError> {
    let record = state.admin.delete_experience(id, query.context()).await?;
    Ok(Json(record))
}

// ----------------------------------------------------------------------
// Gallery
// ----------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct GalleryCreateRequest {
    pub image_id: Uuid,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub exif: Option<Value>,
    #[serde(default)]
    pub sort_order: i32,
}

#[derive(Debug, Deserialize)]
pub struct GalleryUpdateRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub sort_order: i32,
}

pub async fn create_gallery_item(
    State(state): State<HttpState>,
    Query(query): Query<MutationQuery>,
    Json(body): Json<GalleryCreateRequest>,
) -> Result<Json<GalleryItemRecord>, ApiError> {
    let record = state
        .admin
        .create_gallery_item(
            CreateGalleryItemParams {
                image_id: body.image_id,
                title: body.title,
                description: body.description,
                exif: body.exif,
                sort_order: body.sort_order,
            },
            query.context(),
        )
        .await?;
    Ok(Json(record))
}

pub async fn update_gallery_item(
    State(state): State<HttpState>,
    Path(id): Path<Uuid>,
    Query(query): Query<MutationQuery>,
    Json(body): Json<GalleryUpdateRequest>,
) -> Result<Json<GalleryItemRecord>, ApiError> {
    let record = state
        .admin
        .update_gallery_item(
            UpdateGalleryItemParams {
                id,
                title: body.title,
                description: body.description,
                sort_order: body.sort_order,
            },
            query.context(),
        )
        .await?;
    Ok(Json(record))
}

pub async fn delete_gallery_item(
    State(state): State<HttpState>,
    Path(id): Path<Uuid>,
    Query(query): Query<MutationQuery>,
) -> Result<Json<GalleryItemRecord>, ApiError> {
    let record = state.admin.delete_gallery_item(id, query.context()).await?;
    Ok(Json(record))
}

// ----------------------------------------------------------------------
// Blogs
// ----------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct BlogRequest {
    pub title: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub image_id: Option<Uuid>,
    #[serde(default)]
    pub published_at: Option<Date>,
    pub content: Value,
    #[serde(default)]
    pub meta_title: Option<String>,
    #[serde(default)]
    pub meta_description: Option<String>,
    #[serde(default)]
    pub meta_image_id: Option<Uuid>,
    #[serde(default = "draft_status")]
    pub status: ContentStatus,
}

pub async fn create_blog(
    State(state): State<HttpState>,
    Query(query): Query<MutationQuery>,
    Json(body): Json<BlogRequest>,
) -> Result<Json<BlogRecord>, ApiError> {
    let record = state
        .admin
        .create_blog(
            CreateBlogCommand {
                title: body.title,
                slug: body.slug,
                summary: body.summary,
                image_id: body.image_id,
                published_at: body.published_at,
                content: body.content,
                meta_title: body.meta_title,
                meta_description: body.meta_description,
                meta_image_id: body.meta_image_id,
                status: body.status,
            },
            query.context(),
        )
        .await?;
    Ok(Json(record))
}

pub async fn update_blog(
    State(state): State<HttpState>,
    Path(id): Path<Uuid>,
    Query(query): Query<MutationQuery>,
    Json(body): Json<BlogRequest>,
) -> Result<Json<BlogRecord>, ApiError> {
    let record = state
        .admin
        .update_blog(
            UpdateBlogCommand {
                id,
                title: body.title,
                slug: body.slug,
                summary: body.summary,
                image_id: body.image_id,
                published_at: body.published_at,
                content: body.content,
                meta_title: body.meta_title,
                meta_description: body.meta_description,
                meta_image_id: body.meta_image_id,
                status: body.status,
            },
            query.context(),
        )
        .await?;
    Ok(Json(record))
}

pub async fn delete_blog(
    State(state): State<HttpState>,
    Path(id): Path<Uuid>,
    Query(query): Query<MutationQuery>,
) -> Result<Json<BlogRecord>, ApiError> {
    let record = state.admin.delete_blog(id, query.context()).await?;
    Ok(Json(record))
}

// ----------------------------------------------------------------------
// Globals
// ----------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct ProfileRequest {
    pub name: String,
    pub title: String,
    pub bio: Value,
    #[serde(default)]
    pub avatar_id: Option<Uuid>,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub social_links: Vec<SocialLinkRecord>,
}

pub async fn put_profile(
    State(state): State<HttpState>,
    Query(query): Query<MutationQuery>,
    Json(body): Json<ProfileRequest>,
) -> Result<Json<ProfileRecord>, ApiError> {
    let record = state
        .admin
        .upsert_profile(
            UpsertProfileParams {
                name: body.name,
                title: body.title,
                bio: body.bio,
                avatar_id: body.avatar_id,
                email: body.email,
                phone: body.phone,
                location: body.location,
                timezone: body.timezone,
                github: body.github,
                languages: body.languages,
                social_links: body.social_links,
            },
            query.context(),
        )
        .await?;
    Ok(Json(record))
}

#[derive(Debug, Deserialize)]
pub struct NavigationRequest {
    pub links: Vec<NavLinkRecord>,
}

pub async fn put_navigation(
    State(state): State<HttpState>,
    Path(area): Path<NavArea>,
    Query(query): Query<MutationQuery>,
    Json(body): Json<NavigationRequest>,
) -> Result<Json<NavigationRecord>, ApiError> {
    let record = state
        .admin
        .upsert_navigation(area, body.links, query.context())
        .await?;
    Ok(Json(record))
}
