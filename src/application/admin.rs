//! Write-side content services.
//!
//! All mutations require an authenticated admin session (enforced at the HTTP
//! layer). After a committed write the matching change event is published,
//! unless the caller suppressed revalidation, as the seed loader does for
//! bulk inserts.

use std::sync::Arc;

use serde_json::Value;
use thiserror::Error;
use time::{Date, OffsetDateTime};
use uuid::Uuid;

use crate::cache::{DocumentChange, RevalidationTrigger};
use crate::domain::entities::{
    BlogRecord, ExperienceRecord, GalleryItemRecord, MediaRecord, NavLinkRecord, NavigationRecord,
    PositionRecord, ProfileRecord, ProjectRecord, SkillRecord,
};
use crate::domain::slug::{SlugAsyncError, SlugError, generate_unique_slug_async};
use crate::domain::types::{Collection, ContentStatus, Global, NavArea, SkillCategory};

use super::repos::{
    BlogsRepo, CreateBlogParams, CreateExperienceParams, CreateGalleryItemParams,
    CreateMediaParams, CreateProjectParams, CreateSkillParams, ExperiencesRepo, GalleryRepo,
    GlobalsRepo, MediaRepo, ProjectsRepo, RepoError, SkillsRepo, UpdateBlogParams,
    UpdateExperienceParams, UpdateGalleryItemParams, UpdateMediaParams, UpdateProjectParams,
    UpdateSkillParams, UpsertProfileParams,
};

#[derive(Debug, Error)]
pub enum AdminError {
    #[error(transparent)]
    Repo(#[from] RepoError),
    #[error(transparent)]
    Slug(#[from] SlugError),
    #[error("resource not found")]
    NotFound,
    #[error("validation failed: {0}")]
    Validation(String),
}

impl From<SlugAsyncError<RepoError>> for AdminError {
    fn from(error: SlugAsyncError<RepoError>) -> Self {
        match error {
            SlugAsyncError::Slug(err) => AdminError::Slug(err),
            SlugAsyncError::Predicate(err) => AdminError::Repo(err),
        }
    }
}

/// Per-mutation options carried alongside the write.
///
/// The suppress flag mirrors the bulk-load contract: suppressed writes
/// publish no change events, and the caller is responsible for resetting the
/// cache when the batch completes.
#[derive(Debug, Clone, Copy, Default)]
pub struct MutationContext {
    pub suppress_revalidation: bool,
}

impl MutationContext {
    pub fn suppressed() -> Self {
        Self {
            suppress_revalidation: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateProjectCommand {
    pub title: String,
    /// Explicit slug; derived from the title when absent or blank.
    pub slug: Option<String>,
    pub description: Option<String>,
    pub image_id: Option<Uuid>,
    pub technology_ids: Vec<Uuid>,
    pub live_url: Option<String>,
    pub source_url: Option<String>,
    pub featured: bool,
    pub sort_order: i32,
    pub content: Option<Value>,
    pub status: ContentStatus,
}

#[derive(Debug, Clone)]
pub struct UpdateProjectCommand {
    pub id: Uuid,
    pub title: String,
    /// New slug; the existing slug is kept when absent.
    pub slug: Option<String>,
    pub description: Option<String>,
    pub image_id: Option<Uuid>,
    pub technology_ids: Vec<Uuid>,
    pub live_url: Option<String>,
    pub source_url: Option<String>,
    pub featured: bool,
    pub sort_order: i32,
    pub content: Option<Value>,
    pub status: ContentStatus,
}

#[derive(Debug, Clone)]
pub struct CreateBlogCommand {
    pub title: String,
    pub slug: Option<String>,
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
pub struct UpdateBlogCommand {
    pub id: Uuid,
    pub title: String,
    pub slug: Option<String>,
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
pub struct CreateSkillCommand {
    pub name: String,
    pub description: Option<String>,
    pub category: SkillCategory,
    pub url: Option<String>,
    pub icon_id: Option<Uuid>,
    pub sort_order: i32,
    pub show_on_stack: bool,
}

pub struct AdminContentService {
    media: Arc<dyn MediaRepo>,
    skills: Arc<dyn SkillsRepo>,
    projects: Arc<dyn ProjectsRepo>,
    experiences: Arc<dyn ExperiencesRepo>,
    gallery: Arc<dyn GalleryRepo>,
    blogs: Arc<dyn BlogsRepo>,
    globals: Arc<dyn GlobalsRepo>,
    trigger: Option<Arc<RevalidationTrigger>>,
}

impl AdminContentService {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        media: Arc<dyn MediaRepo>,
        skills: Arc<dyn SkillsRepo>,
        projects: Arc<dyn ProjectsRepo>,
        experiences: Arc<dyn ExperiencesRepo>,
        gallery: Arc<dyn GalleryRepo>,
        blogs: Arc<dyn BlogsRepo>,
        globals: Arc<dyn GlobalsRepo>,
        trigger: Option<Arc<RevalidationTrigger>>,
    ) -> Self {
        Self {
            media,
            skills,
            projects,
            experiences,
            gallery,
            blogs,
            globals,
            trigger,
        }
    }

    async fn notify_change(&self, change: DocumentChange, ctx: MutationContext) {
        if let Some(trigger) = &self.trigger {
            trigger
                .document_changed(change, ctx.suppress_revalidation)
                .await;
        }
    }

    async fn notify_delete(
        &self,
        collection: Collection,
        document_id: Uuid,
        slug: Option<String>,
        ctx: MutationContext,
    ) {
        if let Some(trigger) = &self.trigger {
            trigger
                .document_deleted(collection, document_id, slug, ctx.suppress_revalidation)
                .await;
        }
    }

    async fn notify_global(&self, global: Global, ctx: MutationContext) {
        if let Some(trigger) = &self.trigger {
            trigger
                .global_updated(global, ctx.suppress_revalidation)
                .await;
        }
    }

    // ------------------------------------------------------------------
    // Media
    // ------------------------------------------------------------------

    pub async fn create_media(
        &self,
        params: CreateMediaParams,
        ctx: MutationContext,
    ) -> Result<MediaRecord, AdminError> {
        let record = self.media.create_media(params).await?;
        self.notify_change(statusless_change(Collection::Media, record.id, None), ctx)
            .await;
        Ok(record)
    }

    pub async fn update_media(
        &self,
        params: UpdateMediaParams,
        ctx: MutationContext,
    ) -> Result<MediaRecord, AdminError> {
        let record = self.media.update_media(params).await?;
        self.notify_change(
            statusless_update(Collection::Media, record.id, None),
            ctx,
        )
        .await;
        Ok(record)
    }

    pub async fn delete_media(
        &self,
        id: Uuid,
        ctx: MutationContext,
    ) -> Result<MediaRecord, AdminError> {
        let record = self.media.delete_media(id).await?.ok_or(AdminError::NotFound)?;
        self.notify_delete(Collection::Media, id, None, ctx).await;
        Ok(record)
    }

    pub async fn purge_media(&self) -> Result<u64, AdminError> {
        Ok(self.media.delete_all_media().await?)
    }

    // ------------------------------------------------------------------
    // Skills
    // ------------------------------------------------------------------

    pub async fn list_skills(&self) -> Result<Vec<SkillRecord>, AdminError> {
        Ok(self.skills.list_skills().await?)
    }

    pub async fn create_skill(
        &self,
        command: CreateSkillCommand,
        ctx: MutationContext,
    ) -> Result<SkillRecord, AdminError> {
        if command.name.trim().is_empty() {
            return Err(AdminError::Validation("skill name is required".into()));
        }
        let record = self
            .skills
            .create_skill(CreateSkillParams {
                name: command.name,
                description: command.description,
                category: command.category,
                url: command.url,
                icon_id: command.icon_id,
                sort_order: command.sort_order,
                show_on_stack: command.show_on_stack,
            })
            .await?;
        self.notify_change(statusless_change(Collection::Skills, record.id, None), ctx)
            .await;
        Ok(record)
    }

    pub async fn update_skill(
        &self,
        params: UpdateSkillParams,
        ctx: MutationContext,
    ) -> Result<SkillRecord, AdminError> {
        let record = self.skills.update_skill(params).await?;
        self.notify_change(
            statusless_update(Collection::Skills, record.id, None),
            ctx,
        )
        .await;
        Ok(record)
    }

    pub async fn delete_skill(
        &self,
        id: Uuid,
        ctx: MutationContext,
    ) -> Result<SkillRecord, AdminError> {
        let record = self
            .skills
            .delete_skill(id)
            .await?
            .ok_or(AdminError::NotFound)?;
        self.notify_delete(Collection::Skills, id, None, ctx).await;
        Ok(record)
    }

    pub async fn purge_skills(&self) -> Result<u64, AdminError> {
        Ok(self.skills.delete_all_skills().await?)
    }

    // ------------------------------------------------------------------
    // Projects
    // ------------------------------------------------------------------

    pub async fn create_project(
        &self,
        command: CreateProjectCommand,
        ctx: MutationContext,
    ) -> Result<ProjectRecord, AdminError> {
        let slug = match normalized_slug(command.slug.as_deref()) {
            Some(slug) => slug,
            None => {
                generate_unique_slug_async(&command.title, |candidate| {
                    let candidate = candidate.to_string();
                    async move { Ok(!self.projects.project_slug_exists(&candidate).await?) }
                })
                .await?
            }
        };

        let published_at = match command.status {
            ContentStatus::Published => Some(OffsetDateTime::now_utc()),
            ContentStatus::Draft => None,
        };

        let record = self
            .projects
            .create_project(CreateProjectParams {
                title: command.title,
                slug,
                description: command.description,
                image_id: command.image_id,
                technology_ids: command.technology_ids,
                live_url: command.live_url,
                source_url: command.source_url,
                featured: command.featured,
                sort_order: command.sort_order,
                content: command.content,
                status: command.status,
                published_at,
            })
            .await?;

        self.notify_change(
            DocumentChange {
                collection: Collection::Projects,
                document_id: record.id,
                slug: Some(record.slug.clone()),
                previous_slug: None,
                status: record.status,
                previous_status: None,
            },
            ctx,
        )
        .await;

        Ok(record)
    }

    pub async fn update_project(
        &self,
        command: UpdateProjectCommand,
        ctx: MutationContext,
    ) -> Result<ProjectRecord, AdminError> {
        let existing = self
            .projects
            .find_project(command.id)
            .await?
            .ok_or(AdminError::NotFound)?;

        let slug = normalized_slug(command.slug.as_deref()).unwrap_or_else(|| existing.slug.clone());

        let published_at = match (command.status, existing.published_at) {
            (ContentStatus::Published, None) => Some(OffsetDateTime::now_utc()),
            (_, existing_at) => existing_at,
        };

        let record = self
            .projects
            .update_project(UpdateProjectParams {
                id: command.id,
                title: command.title,
                slug,
                description: command.description,
                image_id: command.image_id,
                technology_ids: command.technology_ids,
                live_url: command.live_url,
                source_url: command.source_url,
                featured: command.featured,
                sort_order: command.sort_order,
                content: command.content,
                status: command.status,
                published_at,
            })
            .await?;

        self.notify_change(
            DocumentChange {
                collection: Collection::Projects,
                document_id: record.id,
                slug: Some(record.slug.clone()),
                previous_slug: Some(existing.slug),
                status: record.status,
                previous_status: Some(existing.status),
            },
            ctx,
        )
        .await;

        Ok(record)
    }

    pub async fn delete_project(
        &self,
        id: Uuid,
        ctx: MutationContext,
    ) -> Result<ProjectRecord, AdminError> {
        let record = self
            .projects
            .delete_project(id)
            .await?
            .ok_or(AdminError::NotFound)?;
        self.notify_delete(Collection::Projects, id, Some(record.slug.clone()), ctx)
            .await;
        Ok(record)
    }

    pub async fn purge_projects(&self) -> Result<u64, AdminError> {
        Ok(self.projects.delete_all_projects().await?)
    }

    // ------------------------------------------------------------------
    // Experiences
    // ------------------------------------------------------------------

    pub async fn create_experience(
        &self,
        params: CreateExperienceParams,
        ctx: MutationContext,
    ) -> Result<ExperienceRecord, AdminError> {
        validate_positions(&params.positions)?;
        let record = self.experiences.create_experience(params).await?;
        self.notify_change(
            statusless_change(Collection::Experiences, record.id, None),
            ctx,
        )
        .await;
        Ok(record)
    }

    pub async fn update_experience(
        &self,
        params: UpdateExperienceParams,
        ctx: MutationContext,
    ) -> Result<ExperienceRecord, AdminError> {
        validate_positions(&params.positions)?;
        let record = self.experiences.update_experience(params).await?;
        self.notify_change(
            statusless_update(Collection::Experiences, record.id, None),
            ctx,
        )
        .await;
        Ok(record)
    }

    pub async fn delete_experience(
        &self,
        id: Uuid,
        ctx: MutationContext,
    ) -> Result<ExperienceRecord, AdminError> {
        let record = self
            .experiences
            .delete_experience(id)
            .await?
            .ok_or(AdminError::NotFound)?;
        self.notify_delete(Collection::Experiences, id, None, ctx)
            .await;
        Ok(record)
    }

    pub async fn purge_experiences(&self) -> Result<u64, AdminError> {
        Ok(self.experiences.delete_all_experiences().await?)
    }

    // ------------------------------------------------------------------
    // Gallery
    // ------------------------------------------------------------------

    pub async fn create_gallery_item(
        &self,
        params: CreateGalleryItemParams,
        ctx: MutationContext,
    ) -> Result<GalleryItemRecord, AdminError> {
        let record = self.gallery.create_gallery_item(params).await?;
        self.notify_change(
            statusless_change(Collection::Gallery, record.id, None),
            ctx,
        )
        .await;
        Ok(record)
    }

    pub async fn update_gallery_item(
        &self,
        params: UpdateGalleryItemParams,
        ctx: MutationContext,
    ) -> Result<GalleryItemRecord, AdminError> {
        let record = self.gallery.update_gallery_item(params).await?;
        self.notify_change(
            statusless_update(Collection::Gallery, record.id, None),
            ctx,
        )
        .await;
        Ok(record)
    }

    pub async fn delete_gallery_item(
        &self,
        id: Uuid,
        ctx: MutationContext,
    ) -> Result<GalleryItemRecord, AdminError> {
        let record = self
            .gallery
            .delete_gallery_item(id)
            .await?
            .ok_or(AdminError::NotFound)?;
        self.notify_delete(Collection::Gallery, id, None, ctx).await;
        Ok(record)
    }

    pub async fn purge_gallery(&self) -> Result<u64, AdminError> {
        Ok(self.gallery.delete_all_gallery_items().await?)
    }

    // ------------------------------------------------------------------
    // Blogs
    // ------------------------------------------------------------------

    pub async fn create_blog(
        &self,
        command: CreateBlogCommand,
        ctx: MutationContext,
    ) -> Result<BlogRecord, AdminError> {
        let slug = match normalized_slug(command.slug.as_deref()) {
            Some(slug) => slug,
            None => {
                generate_unique_slug_async(&command.title, |candidate| {
                    let candidate = candidate.to_string();
                    async move { Ok(!self.blogs.blog_slug_exists(&candidate).await?) }
                })
                .await?
            }
        };

        let record = self
            .blogs
            .create_blog(CreateBlogParams {
                title: command.title,
                slug,
                summary: command.summary,
                image_id: command.image_id,
                published_at: command.published_at,
                content: command.content,
                meta_title: command.meta_title,
                meta_description: command.meta_description,
                meta_image_id: command.meta_image_id,
                status: command.status,
            })
            .await?;

        self.notify_change(
            DocumentChange {
                collection: Collection::Blogs,
                document_id: record.id,
                slug: Some(record.slug.clone()),
                previous_slug: None,
                status: record.status,
                previous_status: None,
            },
            ctx,
        )
        .await;

        Ok(record)
    }

    pub async fn update_blog(
        &self,
        command: UpdateBlogCommand,
        ctx: MutationContext,
    ) -> Result<BlogRecord, AdminError> {
        let existing = self
            .blogs
            .find_blog(command.id)
            .await?
            .ok_or(AdminError::NotFound)?;

        let slug = normalized_slug(command.slug.as_deref()).unwrap_or_else(|| existing.slug.clone());

        let record = self
            .blogs
            .update_blog(UpdateBlogParams {
                id: command.id,
                title: command.title,
                slug,
                summary: command.summary,
                image_id: command.image_id,
                published_at: command.published_at,
                content: command.content,
                meta_title: command.meta_title,
                meta_description: command.meta_description,
                meta_image_id: command.meta_image_id,
                status: command.status,
            })
            .await?;

        self.notify_change(
            DocumentChange {
                collection: Collection::Blogs,
                document_id: record.id,
                slug: Some(record.slug.clone()),
                previous_slug: Some(existing.slug),
                status: record.status,
                previous_status: Some(existing.status),
            },
            ctx,
        )
        .await;

        Ok(record)
    }

    pub async fn delete_blog(
        &self,
        id: Uuid,
        ctx: MutationContext,
    ) -> Result<BlogRecord, AdminError> {
        let record = self
            .blogs
            .delete_blog(id)
            .await?
            .ok_or(AdminError::NotFound)?;
        self.notify_delete(Collection::Blogs, id, Some(record.slug.clone()), ctx)
            .await;
        Ok(record)
    }

    pub async fn purge_blogs(&self) -> Result<u64, AdminError> {
        Ok(self.blogs.delete_all_blogs().await?)
    }

    // ------------------------------------------------------------------
    // Globals
    // ------------------------------------------------------------------

    pub async fn upsert_profile(
        &self,
        params: UpsertProfileParams,
        ctx: MutationContext,
    ) -> Result<ProfileRecord, AdminError> {
        let record = self.globals.upsert_profile(params).await?;
        self.notify_global(Global::Profile, ctx).await;
        Ok(record)
    }

    pub async fn upsert_navigation(
        &self,
        area: NavArea,
        links: Vec<NavLinkRecord>,
        ctx: MutationContext,
    ) -> Result<NavigationRecord, AdminError> {
        let record = self.globals.upsert_navigation(area, links).await?;
        let global = match area {
            NavArea::Header => Global::Header,
            NavArea::Footer => Global::Footer,
        };
        self.notify_global(global, ctx).await;
        Ok(record)
    }
}

/// A change event for collections without a draft state: always visible,
/// always invalidating.
fn statusless_change(collection: Collection, document_id: Uuid, slug: Option<String>) -> DocumentChange {
    DocumentChange {
        collection,
        document_id,
        slug,
        previous_slug: None,
        status: ContentStatus::Published,
        previous_status: None,
    }
}

fn statusless_update(collection: Collection, document_id: Uuid, slug: Option<String>) -> DocumentChange {
    DocumentChange {
        collection,
        document_id,
        slug,
        previous_slug: None,
        status: ContentStatus::Published,
        previous_status: Some(ContentStatus::Published),
    }
}

fn normalized_slug(slug: Option<&str>) -> Option<String> {
    slug.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn validate_positions(positions: &[PositionRecord]) -> Result<(), AdminError> {
    if positions.is_empty() {
        return Err(AdminError::Validation(
            "experience requires at least one position".into(),
        ));
    }
    for position in positions {
        if let Some(end) = position.end_date
            && end < position.start_date
        {
            return Err(AdminError::Validation(format!(
                "position `{}` ends before it starts",
                position.title
            )));
        }
    }
    Ok(())
}
