//! Database seed loader.
//!
//! Clears all collection content and reloads the bundled fixtures through the
//! admin write path with revalidation suppressed, then resets the response
//! cache once at the end. Deletion runs in reference order (blogs, projects,
//! experiences, skills, gallery, media) and insertion in the reverse
//! dependency order, so cross-references always resolve against rows that
//! already exist. Failures abort the load mid-way; rerunning the loader
//! recovers, since it starts from a full purge.

pub mod data;

use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::cache::RevalidationTrigger;
use crate::domain::entities::PositionRecord;
use crate::domain::rich_text;
use crate::domain::types::NavArea;

use super::admin::{
    AdminContentService, AdminError, CreateBlogCommand, CreateProjectCommand, CreateSkillCommand,
    MutationContext,
};
use super::repos::{
    CreateExperienceParams, CreateGalleryItemParams, CreateMediaParams, UpsertProfileParams,
};

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("seed step `{step}` failed: {source}")]
    Step {
        step: &'static str,
        #[source]
        source: AdminError,
    },
}

impl SeedError {
    fn step(step: &'static str) -> impl FnOnce(AdminError) -> SeedError {
        move |source| SeedError::Step { step, source }
    }
}

/// Counts of what the load removed and created.
#[derive(Debug, Default, Clone, Serialize)]
pub struct SeedReport {
    pub deleted: u64,
    pub media: u64,
    pub skills: u64,
    pub projects: u64,
    pub experiences: u64,
    pub gallery: u64,
    pub blogs: u64,
    pub globals: u64,
}

pub struct Seeder {
    admin: Arc<AdminContentService>,
    trigger: Option<Arc<RevalidationTrigger>>,
}

impl Seeder {
    pub fn new(
        admin: Arc<AdminContentService>,
        trigger: Option<Arc<RevalidationTrigger>>,
    ) -> Self {
        Self { admin, trigger }
    }

    /// Run the full purge-and-reload cycle.
    #[instrument(skip(self))]
    pub async fn run(&self) -> Result<SeedReport, SeedError> {
        let ctx = MutationContext::suppressed();
        let mut report = SeedReport::default();

        info!("Seed load starting");

        report.deleted += self.admin.purge_blogs().await.map_err(SeedError::step("purge blogs"))?;
        report.deleted += self
            .admin
            .purge_projects()
            .await
            .map_err(SeedError::step("purge projects"))?;
        report.deleted += self
            .admin
            .purge_experiences()
            .await
            .map_err(SeedError::step("purge experiences"))?;
        report.deleted += self
            .admin
            .purge_skills()
            .await
            .map_err(SeedError::step("purge skills"))?;
        report.deleted += self
            .admin
            .purge_gallery()
            .await
            .map_err(SeedError::step("purge gallery"))?;
        report.deleted += self.admin.purge_media().await.map_err(SeedError::step("purge media"))?;

        let media_ids = self.load_media(ctx, &mut report).await?;
        self.load_profile(ctx, &media_ids, &mut report).await?;
        let skill_ids = self.load_skills(ctx, &mut report).await?;
        self.load_projects(ctx, &media_ids, &skill_ids, &mut report)
            .await?;
        self.load_experiences(ctx, &media_ids, &skill_ids, &mut report)
            .await?;
        self.load_navigation(ctx, &mut report).await?;
        self.load_gallery(ctx, &media_ids, &mut report).await?;
        self.load_blogs(ctx, &media_ids, &mut report).await?;

        if let Some(trigger) = &self.trigger {
            trigger.reset_all().await;
        }

        info!(
            deleted = report.deleted,
            media = report.media,
            skills = report.skills,
            projects = report.projects,
            experiences = report.experiences,
            gallery = report.gallery,
            blogs = report.blogs,
            globals = report.globals,
            "Seed load complete"
        );

        Ok(report)
    }

    async fn load_media(
        &self,
        ctx: MutationContext,
        report: &mut SeedReport,
    ) -> Result<HashMap<&'static str, Uuid>, SeedError> {
        let mut ids = HashMap::new();
        for fixture in data::media() {
            let record = self
                .admin
                .create_media(
                    CreateMediaParams {
                        filename: fixture.filename.to_string(),
                        alt: fixture.alt.to_string(),
                        content_type: fixture.content_type.to_string(),
                        width: Some(fixture.width),
                        height: Some(fixture.height),
                        url: fixture.url(),
                    },
                    ctx,
                )
                .await
                .map_err(SeedError::step("insert media"))?;
            ids.insert(fixture.filename, record.id);
            report.media += 1;
        }
        Ok(ids)
    }

    async fn load_profile(
        &self,
        ctx: MutationContext,
        media_ids: &HashMap<&'static str, Uuid>,
        report: &mut SeedReport,
    ) -> Result<(), SeedError> {
        let fixture = data::profile();
        self.admin
            .upsert_profile(
                UpsertProfileParams {
                    name: fixture.name.to_string(),
                    title: fixture.title.to_string(),
                    bio: fixture.bio,
                    avatar_id: fixture.avatar.and_then(|name| media_ids.get(name).copied()),
                    email: fixture.email.to_string(),
                    phone: None,
                    location: fixture.location.map(str::to_string),
                    timezone: fixture.timezone.map(str::to_string),
                    github: fixture.github.map(str::to_string),
                    languages: fixture.languages,
                    social_links: fixture.social_links,
                },
                ctx,
            )
            .await
            .map_err(SeedError::step("upsert profile"))?;
        report.globals += 1;
        Ok(())
    }

    async fn load_skills(
        &self,
        ctx: MutationContext,
        report: &mut SeedReport,
    ) -> Result<HashMap<String, Uuid>, SeedError> {
        let mut ids = HashMap::new();
        for fixture in data::skills() {
            let record = self
                .admin
                .create_skill(
                    CreateSkillCommand {
                        name: fixture.name.to_string(),
                        description: fixture.description.map(str::to_string),
                        category: fixture.category,
                        url: fixture.url.map(str::to_string),
                        icon_id: None,
                        sort_order: fixture.sort_order,
                        show_on_stack: fixture.show_on_stack,
                    },
                    ctx,
                )
                .await
                .map_err(SeedError::step("insert skills"))?;
            ids.insert(record.name.to_lowercase(), record.id);
            report.skills += 1;
        }
        Ok(ids)
    }

    /// Resolve skill names to ids, dropping names absent from the catalog.
    fn resolve_skills(
        skill_ids: &HashMap<String, Uuid>,
        names: &[&str],
        owner: &str,
    ) -> Vec<Uuid> {
        names
            .iter()
            .filter_map(|name| {
                let id = skill_ids.get(&name.to_lowercase()).copied();
                if id.is_none() {
                    warn!(owner, skill = name, "Dropping unresolved skill reference");
                }
                id
            })
            .collect()
    }

    async fn load_projects(
        &self,
        ctx: MutationContext,
        media_ids: &HashMap<&'static str, Uuid>,
        skill_ids: &HashMap<String, Uuid>,
        report: &mut SeedReport,
    ) -> Result<(), SeedError> {
        for fixture in data::projects() {
            let technology_ids =
                Self::resolve_skills(skill_ids, fixture.technologies, fixture.title);
            self.admin
                .create_project(
                    CreateProjectCommand {
                        title: fixture.title.to_string(),
                        slug: fixture.slug.map(str::to_string),
                        description: fixture.description.map(str::to_string),
                        image_id: fixture.image.and_then(|name| media_ids.get(name).copied()),
                        technology_ids,
                        live_url: fixture.live_url.map(str::to_string),
                        source_url: fixture.source_url.map(str::to_string),
                        featured: fixture.featured,
                        sort_order: fixture.sort_order,
                        content: fixture.content,
                        status: fixture.status,
                    },
                    ctx,
                )
                .await
                .map_err(SeedError::step("insert projects"))?;
            report.projects += 1;
        }
        Ok(())
    }

    async fn load_experiences(
        &self,
        ctx: MutationContext,
        media_ids: &HashMap<&'static str, Uuid>,
        skill_ids: &HashMap<String, Uuid>,
        report: &mut SeedReport,
    ) -> Result<(), SeedError> {
        for fixture in data::experiences() {
            let positions = fixture
                .positions
                .iter()
                .map(|position| PositionRecord {
                    title: position.title.to_string(),
                    employment_type: Some(position.employment_type),
                    start_date: position.start_date,
                    end_date: position.end_date,
                    description: if position.description.is_empty() {
                        None
                    } else {
                        Some(rich_text::paragraphs(position.description))
                    },
                    skill_ids: Self::resolve_skills(skill_ids, position.skills, fixture.company),
                })
                .collect();

            self.admin
                .create_experience(
                    CreateExperienceParams {
                        company: fixture.company.to_string(),
                        logo_id: fixture.logo.and_then(|name| media_ids.get(name).copied()),
                        website: fixture.website.map(str::to_string),
                        location: fixture.location.map(str::to_string),
                        is_current: fixture.is_current,
                        sort_order: fixture.sort_order,
                        positions,
                    },
                    ctx,
                )
                .await
                .map_err(SeedError::step("insert experiences"))?;
            report.experiences += 1;
        }
        Ok(())
    }

    async fn load_navigation(
        &self,
        ctx: MutationContext,
        report: &mut SeedReport,
    ) -> Result<(), SeedError> {
        self.admin
            .upsert_navigation(NavArea::Header, data::header_links(), ctx)
            .await
            .map_err(SeedError::step("upsert header"))?;
        report.globals += 1;
        self.admin
            .upsert_navigation(NavArea::Footer, data::footer_links(), ctx)
            .await
            .map_err(SeedError::step("upsert footer"))?;
        report.globals += 1;
        Ok(())
    }

    async fn load_gallery(
        &self,
        ctx: MutationContext,
        media_ids: &HashMap<&'static str, Uuid>,
        report: &mut SeedReport,
    ) -> Result<(), SeedError> {
        for fixture in data::gallery() {
            let Some(image_id) = media_ids.get(fixture.image).copied() else {
                warn!(image = fixture.image, "Skipping gallery item with unknown media");
                continue;
            };
            self.admin
                .create_gallery_item(
                    CreateGalleryItemParams {
                        image_id,
                        title: fixture.title.map(str::to_string),
                        description: fixture.description.map(str::to_string),
                        exif: fixture.exif,
                        sort_order: fixture.sort_order,
                    },
                    ctx,
                )
                .await
                .map_err(SeedError::step("insert gallery"))?;
            report.gallery += 1;
        }
        Ok(())
    }

    async fn load_blogs(
        &self,
        ctx: MutationContext,
        media_ids: &HashMap<&'static str, Uuid>,
        report: &mut SeedReport,
    ) -> Result<(), SeedError> {
        for fixture in data::blogs() {
            self.admin
                .create_blog(
                    CreateBlogCommand {
                        title: fixture.title.to_string(),
                        slug: Some(fixture.slug.to_string()),
                        summary: Some(fixture.summary.to_string()),
                        image_id: fixture.image.and_then(|name| media_ids.get(name).copied()),
                        published_at: fixture.published_at,
                        content: fixture.content,
                        meta_title: Some(fixture.meta_title.to_string()),
                        meta_description: Some(fixture.meta_description.to_string()),
                        meta_image_id: None,
                        status: fixture.status,
                    },
                    ctx,
                )
                .await
                .map_err(SeedError::step("insert blogs"))?;
            report.blogs += 1;
        }
        Ok(())
    }
}
