//! Read-side content services backing the public routes.
//!
//! Every read records the cache tags the response depends on, so the response
//! cache middleware can register the entry for group invalidation.

use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;

use crate::cache::{EntityKey, deps};
use crate::domain::entities::{
    BlogRecord, ExperienceRecord, GalleryItemRecord, MediaRecord, NavigationRecord, ProfileRecord,
    ProjectRecord, SkillRecord,
};
use crate::domain::types::{Collection, Global, NavArea};

use super::repos::{
    BlogsRepo, ExperiencesRepo, GalleryRepo, GlobalsRepo, MediaRepo, ProjectsRepo, ReadScope,
    RepoError, SkillsRepo,
};

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("resource not found")]
    NotFound,
    #[error(transparent)]
    Repo(#[from] RepoError),
}

/// Homepage payload: everything the landing page renders.
#[derive(Debug, Serialize)]
pub struct HomePayload {
    pub profile: Option<ProfileRecord>,
    pub skills: Vec<SkillRecord>,
    pub projects: Vec<ProjectRecord>,
    pub experiences: Vec<ExperienceRecord>,
    pub gallery: Vec<GalleryItemRecord>,
    pub media: Vec<MediaRecord>,
    pub header: Option<NavigationRecord>,
    pub footer: Option<NavigationRecord>,
}

/// Project detail with its technology references resolved.
#[derive(Debug, Serialize)]
pub struct ProjectDetail {
    pub project: ProjectRecord,
    pub technologies: Vec<SkillRecord>,
}

pub struct ContentService {
    media: Arc<dyn MediaRepo>,
    skills: Arc<dyn SkillsRepo>,
    projects: Arc<dyn ProjectsRepo>,
    experiences: Arc<dyn ExperiencesRepo>,
    gallery: Arc<dyn GalleryRepo>,
    blogs: Arc<dyn BlogsRepo>,
    globals: Arc<dyn GlobalsRepo>,
}

impl ContentService {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        media: Arc<dyn MediaRepo>,
        skills: Arc<dyn SkillsRepo>,
        projects: Arc<dyn ProjectsRepo>,
        experiences: Arc<dyn ExperiencesRepo>,
        gallery: Arc<dyn GalleryRepo>,
        blogs: Arc<dyn BlogsRepo>,
        globals: Arc<dyn GlobalsRepo>,
    ) -> Self {
        Self {
            media,
            skills,
            projects,
            experiences,
            gallery,
            blogs,
            globals,
        }
    }

    /// Assemble the homepage payload.
    pub async fn homepage(&self, scope: ReadScope) -> Result<HomePayload, ContentError> {
        deps::record(EntityKey::global(Global::Profile));
        deps::record(EntityKey::global(Global::Header));
        deps::record(EntityKey::global(Global::Footer));
        deps::record(EntityKey::collection(Collection::Skills));
        deps::record(EntityKey::collection(Collection::Projects));
        deps::record(EntityKey::collection(Collection::Experiences));
        deps::record(EntityKey::collection(Collection::Gallery));
        deps::record(EntityKey::collection(Collection::Media));

        Ok(HomePayload {
            profile: self.globals.load_profile().await?,
            skills: self.skills.list_skills().await?,
            projects: self.projects.list_projects(scope).await?,
            experiences: self.experiences.list_experiences().await?,
            gallery: self.gallery.list_gallery_items().await?,
            media: self.media.list_media().await?,
            header: self.globals.load_navigation(NavArea::Header).await?,
            footer: self.globals.load_navigation(NavArea::Footer).await?,
        })
    }

    /// List blogs newest first; public scope sees published only.
    pub async fn blog_index(&self, scope: ReadScope) -> Result<Vec<BlogRecord>, ContentError> {
        deps::record(EntityKey::collection(Collection::Blogs));
        Ok(self.blogs.list_blogs(scope).await?)
    }

    pub async fn blog_detail(
        &self,
        scope: ReadScope,
        slug: &str,
    ) -> Result<BlogRecord, ContentError> {
        deps::record(EntityKey::collection(Collection::Blogs));
        self.blogs
            .find_blog_by_slug(scope, slug)
            .await?
            .ok_or(ContentError::NotFound)
    }

    /// Project detail with technologies resolved to skill records, in the
    /// order the project lists them.
    pub async fn project_detail(
        &self,
        scope: ReadScope,
        slug: &str,
    ) -> Result<ProjectDetail, ContentError> {
        deps::record(EntityKey::collection(Collection::Projects));
        deps::record(EntityKey::collection(Collection::Skills));

        let project = self
            .projects
            .find_project_by_slug(scope, slug)
            .await?
            .ok_or(ContentError::NotFound)?;

        let skills = self.skills.list_skills().await?;
        let technologies = project
            .technology_ids
            .iter()
            .filter_map(|id| skills.iter().find(|skill| skill.id == *id).cloned())
            .collect();

        Ok(ProjectDetail {
            project,
            technologies,
        })
    }

    pub async fn gallery(&self) -> Result<Vec<GalleryItemRecord>, ContentError> {
        deps::record(EntityKey::collection(Collection::Gallery));
        deps::record(EntityKey::collection(Collection::Media));
        Ok(self.gallery.list_gallery_items().await?)
    }

    pub async fn navigation(
        &self,
        area: NavArea,
    ) -> Result<Option<NavigationRecord>, ContentError> {
        deps::record(match area {
            NavArea::Header => EntityKey::global(Global::Header),
            NavArea::Footer => EntityKey::global(Global::Footer),
        });
        Ok(self.globals.load_navigation(area).await?)
    }
}
