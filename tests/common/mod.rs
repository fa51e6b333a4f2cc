//! In-memory test harness: repository fakes plus an app builder that wires
//! the full router the same way the binary does.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::Value;
use time::OffsetDateTime;
use tower::ServiceExt;
use uuid::Uuid;

use vitrine::application::admin::AdminContentService;
use vitrine::application::auth::{AdminSessionService, hash_secret};
use vitrine::application::content::ContentService;
use vitrine::application::repos::{
    BlogsRepo, CreateBlogParams, CreateExperienceParams, CreateGalleryItemParams,
    CreateMediaParams, CreateProjectParams, CreateSkillParams, ExperiencesRepo, GalleryRepo,
    GlobalsRepo, HealthProbe, MediaRepo, ProjectsRepo, ReadScope, RepoError, SkillsRepo,
    UpdateBlogParams, UpdateExperienceParams, UpdateGalleryItemParams, UpdateMediaParams,
    UpdateProjectParams, UpdateSkillParams, UpsertProfileParams,
};
use vitrine::application::seed::Seeder;
use vitrine::cache::{
    CacheConfig, CacheRegistry, CacheState, EventQueue, ResponseStore, RevalidationConsumer,
    RevalidationTrigger,
};
use vitrine::config::RuntimeEnv;
use vitrine::domain::entities::{
    BlogRecord, ExperienceRecord, GalleryItemRecord, MediaRecord, NavLinkRecord, NavigationRecord,
    ProfileRecord, ProjectRecord, SkillRecord,
};
use vitrine::domain::types::NavArea;
use vitrine::infra::http::{HttpState, build_router};

pub const ADMIN_SECRET: &str = "test-admin-secret";
pub const SEED_SECRET: &str = "test-seed-secret";

#[derive(Default)]
pub struct InMemoryRepositories {
    media: Mutex<Vec<MediaRecord>>,
    skills: Mutex<Vec<SkillRecord>>,
    projects: Mutex<Vec<ProjectRecord>>,
    experiences: Mutex<Vec<ExperienceRecord>>,
    gallery: Mutex<Vec<GalleryItemRecord>>,
    blogs: Mutex<Vec<BlogRecord>>,
    profile: Mutex<Option<ProfileRecord>>,
    navigation: Mutex<HashMap<NavArea, NavigationRecord>>,
}

impl InMemoryRepositories {
    pub fn project_by_slug(&self, slug: &str) -> Option<ProjectRecord> {
        self.projects
            .lock()
            .unwrap()
            .iter()
            .find(|project| project.slug == slug)
            .cloned()
    }

    pub fn blog_count(&self) -> usize {
        self.blogs.lock().unwrap().len()
    }

    pub fn skill_by_name(&self, name: &str) -> Option<SkillRecord> {
        self.skills
            .lock()
            .unwrap()
            .iter()
            .find(|skill| skill.name == name)
            .cloned()
    }
}

fn now() -> OffsetDateTime {
    OffsetDateTime::now_utc()
}

fn category_rank(category: vitrine::domain::types::SkillCategory) -> u8 {
    use vitrine::domain::types::SkillCategory;
    match category {
        SkillCategory::Frontend => 0,
        SkillCategory::Backend => 1,
        SkillCategory::Tools => 2,
        SkillCategory::Other => 3,
    }
}

#[async_trait]
impl MediaRepo for InMemoryRepositories {
    async fn list_media(&self) -> Result<Vec<MediaRecord>, RepoError> {
        let mut rows = self.media.lock().unwrap().clone();
        rows.sort_by_key(|row| row.created_at);
        Ok(rows)
    }

    async fn find_media(&self, id: Uuid) -> Result<Option<MediaRecord>, RepoError> {
        Ok(self
            .media
            .lock()
            .unwrap()
            .iter()
            .find(|row| row.id == id)
            .cloned())
    }

    async fn create_media(&self, params: CreateMediaParams) -> Result<MediaRecord, RepoError> {
        let created_at = now();
        let record = MediaRecord {
            id: Uuid::new_v4(),
            filename: params.filename,
            alt: params.alt,
            content_type: params.content_type,
            width: params.width,
            height: params.height,
            url: params.url,
            created_at,
            updated_at: created_at,
        };
        self.media.lock().unwrap().push(record.clone());
        Ok(record)
    }

    async fn update_media(&self, params: UpdateMediaParams) -> Result<MediaRecord, RepoError> {
        let mut rows = self.media.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|row| row.id == params.id)
            .ok_or(RepoError::NotFound)?;
        row.alt = params.alt;
        row.updated_at = now();
        Ok(row.clone())
    }

    async fn delete_media(&self, id: Uuid) -> Result<Option<MediaRecord>, RepoError> {
        let mut rows = self.media.lock().unwrap();
        let index = rows.iter().position(|row| row.id == id);
        Ok(index.map(|index| rows.remove(index)))
    }

    async fn delete_all_media(&self) -> Result<u64, RepoError> {
        let mut rows = self.media.lock().unwrap();
        let count = rows.len() as u64;
        rows.clear();
        Ok(count)
    }
}

#[async_trait]
impl SkillsRepo for InMemoryRepositories {
    async fn list_skills(&self) -> Result<Vec<SkillRecord>, RepoError> {
        let mut rows = self.skills.lock().unwrap().clone();
        rows.sort_by(|a, b| {
            category_rank(a.category)
                .cmp(&category_rank(b.category))
                .then(b.sort_order.cmp(&a.sort_order))
                .then(a.name.cmp(&b.name))
        });
        Ok(rows)
    }

    async fn find_skill(&self, id: Uuid) -> Result<Option<SkillRecord>, RepoError> {
        Ok(self
            .skills
            .lock()
            .unwrap()
            .iter()
            .find(|row| row.id == id)
            .cloned())
    }

    async fn create_skill(&self, params: CreateSkillParams) -> Result<SkillRecord, RepoError> {
        let created_at = now();
        let record = SkillRecord {
            id: Uuid::new_v4(),
            name: params.name,
            description: params.description,
            category: params.category,
            url: params.url,
            icon_id: params.icon_id,
            sort_order: params.sort_order,
            show_on_stack: params.show_on_stack,
            created_at,
            updated_at: created_at,
        };
        self.skills.lock().unwrap().push(record.clone());
        Ok(record)
    }

    async fn update_skill(&self, params: UpdateSkillParams) -> Result<SkillRecord, RepoError> {
        let mut rows = self.skills.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|row| row.id == params.id)
            .ok_or(RepoError::NotFound)?;
        row.name = params.name;
        row.description = params.description;
        row.category = params.category;
        row.url = params.url;
        row.icon_id = params.icon_id;
        row.sort_order = params.sort_order;
        row.show_on_stack = params.show_on_stack;
        row.updated_at = now();
        Ok(row.clone())
    }

    async fn delete_skill(&self, id: Uuid) -> Result<Option<SkillRecord>, RepoError> {
        let mut rows = self.skills.lock().unwrap();
        let index = rows.iter().position(|row| row.id == id);
        Ok(index.map(|index| rows.remove(index)))
    }

    async fn delete_all_skills(&self) -> Result<u64, RepoError> {
        let mut rows = self.skills.lock().unwrap();
        let count = rows.len() as u64;
        rows.clear();
        Ok(count)
    }
}

#[async_trait]
impl ProjectsRepo for InMemoryRepositories {
    async fn list_projects(&self, scope: ReadScope) -> Result<Vec<ProjectRecord>, RepoError> {
        let mut rows: Vec<ProjectRecord> = self
            .projects
            .lock()
            .unwrap()
            .iter()
            .filter(|row| scope.includes_drafts() || row.status.is_published())
            .cloned()
            .collect();
        rows.sort_by(|a, b| {
            b.sort_order
                .cmp(&a.sort_order)
                .then(b.created_at.cmp(&a.created_at))
        });
        Ok(rows)
    }

    async fn find_project(&self, id: Uuid) -> Result<Option<ProjectRecord>, RepoError> {
        Ok(self
            .projects
            .lock()
            .unwrap()
            .iter()
            .find(|row| row.id == id)
            .cloned())
    }

    async fn find_project_by_slug(
        &self,
        scope: ReadScope,
        slug: &str,
    ) -> Result<Option<ProjectRecord>, RepoError> {
        Ok(self
            .projects
            .lock()
            .unwrap()
            .iter()
            .find(|row| {
                row.slug == slug && (scope.includes_drafts() || row.status.is_published())
            })
            .cloned())
    }

    async fn project_slug_exists(&self, slug: &str) -> Result<bool, RepoError> {
        Ok(self
            .projects
            .lock()
            .unwrap()
            .iter()
            .any(|row| row.slug == slug))
    }

    async fn create_project(
        &self,
        params: CreateProjectParams,
    ) -> Result<ProjectRecord, RepoError> {
        let mut rows = self.projects.lock().unwrap();
        if rows.iter().any(|row| row.slug == params.slug) {
            return Err(RepoError::Duplicate {
                constraint: "projects_slug_key".to_string(),
            });
        }
        let created_at = now();
        let record = ProjectRecord {
            id: Uuid::new_v4(),
            title: params.title,
            slug: params.slug,
            description: params.description,
            image_id: params.image_id,
            technology_ids: params.technology_ids,
            live_url: params.live_url,
            source_url: params.source_url,
            featured: params.featured,
            sort_order: params.sort_order,
            content: params.content,
            status: params.status,
            published_at: params.published_at,
            created_at,
            updated_at: created_at,
        };
        rows.push(record.clone());
        Ok(record)
    }

    async fn update_project(
        &self,
        params: UpdateProjectParams,
    ) -> Result<ProjectRecord, RepoError> {
        let mut rows = self.projects.lock().unwrap();
        if rows
            .iter()
            .any(|row| row.slug == params.slug && row.id != params.id)
        {
            return Err(RepoError::Duplicate {
                constraint: "projects_slug_key".to_string(),
            });
        }
        let row = rows
            .iter_mut()
            .find(|row| row.id == params.id)
            .ok_or(RepoError::NotFound)?;
        row.title = params.title;
        row.slug = params.slug;
        row.description = params.description;
        row.image_id = params.image_id;
        row.technology_ids = params.technology_ids;
        row.live_url = params.live_url;
        row.source_url = params.source_url;
        row.featured = params.featured;
        row.sort_order = params.sort_order;
        row.content = params.content;
        row.status = params.status;
        row.published_at = params.published_at;
        row.updated_at = now();
        Ok(row.clone())
    }

    async fn delete_project(&self, id: Uuid) -> Result<Option<ProjectRecord>, RepoError> {
        let mut rows = self.projects.lock().unwrap();
        let index = rows.iter().position(|row| row.id == id);
        Ok(index.map(|index| rows.remove(index)))
    }

    async fn delete_all_projects(&self) -> Result<u64, RepoError> {
        let mut rows = self.projects.lock().unwrap();
        let count = rows.len() as u64;
        rows.clear();
        Ok(count)
    }
}

#[async_trait]
impl ExperiencesRepo for InMemoryRepositories {
    async fn list_experiences(&self) -> Result<Vec<ExperienceRecord>, RepoError> {
        let mut rows = self.experiences.lock().unwrap().clone();
        rows.sort_by(|a, b| {
            b.sort_order
                .cmp(&a.sort_order)
                .then(b.created_at.cmp(&a.created_at))
        });
        Ok(rows)
    }

    async fn find_experience(&self, id: Uuid) -> Result<Option<ExperienceRecord>, RepoError> {
        Ok(self
            .experiences
            .lock()
            .unwrap()
            .iter()
            .find(|row| row.id == id)
            .cloned())
    }

    async fn create_experience(
        &self,
        params: CreateExperienceParams,
    ) -> Result<ExperienceRecord, RepoError> {
        let created_at = now();
        let record = ExperienceRecord {
            id: Uuid::new_v4(),
            company: params.company,
            logo_id: params.logo_id,
            website: params.website,
            location: params.location,
            is_current: params.is_current,
            sort_order: params.sort_order,
            positions: params.positions,
            created_at,
            updated_at: created_at,
        };
        self.experiences.lock().unwrap().push(record.clone());
        Ok(record)
    }

    async fn update_experience(
        &self,
        params: UpdateExperienceParams,
    ) -> Result<ExperienceRecord, RepoError> {
        let mut rows = self.experiences.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|row| row.id == params.id)
            .ok_or(RepoError::NotFound)?;
        row.company = params.company;
        row.logo_id = params.logo_id;
        row.website = params.website;
        row.location = params.location;
        row.is_current = params.is_current;
        row.sort_order = params.sort_order;
        row.positions = params.positions;
        row.updated_at = now();
        Ok(row.clone())
    }

    async fn delete_experience(&self, id: Uuid) -> Result<Option<ExperienceRecord>, RepoError> {
        let mut rows = self.experiences.lock().unwrap();
        let index = rows.iter().position(|row| row.id == id);
        Ok(index.map(|index| rows.remove(index)))
    }

    async fn delete_all_experiences(&self) -> Result<u64, RepoError> {
        let mut rows = self.experiences.lock().unwrap();
        let count = rows.len() as u64;
        rows.clear();
        Ok(count)
    }
}

#[async_trait]
impl GalleryRepo for InMemoryRepositories {
    async fn list_gallery_items(&self) -> Result<Vec<GalleryItemRecord>, RepoError> {
        let mut rows = self.gallery.lock().unwrap().clone();
        rows.sort_by(|a, b| {
            b.sort_order
                .cmp(&a.sort_order)
                .then(b.created_at.cmp(&a.created_at))
        });
        Ok(rows)
    }

    async fn find_gallery_item(&self, id: Uuid) -> Result<Option<GalleryItemRecord>, RepoError> {
        Ok(self
            .gallery
            .lock()
            .unwrap()
            .iter()
            .find(|row| row.id == id)
            .cloned())
    }

    async fn create_gallery_item(
        &self,
        params: CreateGalleryItemParams,
    ) -> Result<GalleryItemRecord, RepoError> {
        let created_at = now();
        let record = GalleryItemRecord {
            id: Uuid::new_v4(),
            image_id: params.image_id,
            title: params.title,
            description: params.description,
            exif: params.exif,
            sort_order: params.sort_order,
            created_at,
            updated_at: created_at,
        };
        self.gallery.lock().unwrap().push(record.clone());
        Ok(record)
    }

    async fn update_gallery_item(
        &self,
        params: UpdateGalleryItemParams,
    ) -> Result<GalleryItemRecord, RepoError> {
        let mut rows = self.gallery.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|row| row.id == params.id)
            .ok_or(RepoError::NotFound)?;
        row.title = params.title;
        row.description = params.description;
        row.sort_order = params.sort_order;
        row.updated_at = now();
        Ok(row.clone())
    }

    async fn delete_gallery_item(
        &self,
        id: Uuid,
    ) -> Result<Option<GalleryItemRecord>, RepoError> {
        let mut rows = self.gallery.lock().unwrap();
        let index = rows.iter().position(|row| row.id == id);
        Ok(index.map(|index| rows.remove(index)))
    }

    async fn delete_all_gallery_items(&self) -> Result<u64, RepoError> {
        let mut rows = self.gallery.lock().unwrap();
        let count = rows.len() as u64;
        rows.clear();
        Ok(count)
    }
}

#[async_trait]
impl BlogsRepo for InMemoryRepositories {
    async fn list_blogs(&self, scope: ReadScope) -> Result<Vec<BlogRecord>, RepoError> {
        let mut rows: Vec<BlogRecord> = self
            .blogs
            .lock()
            .unwrap()
            .iter()
            .filter(|row| scope.includes_drafts() || row.status.is_published())
            .cloned()
            .collect();
        rows.sort_by(|a, b| match (&b.published_at, &a.published_at) {
            (Some(b_date), Some(a_date)) => {
                b_date.cmp(a_date).then(b.created_at.cmp(&a.created_at))
            }
            (Some(_), None) => std::cmp::Ordering::Greater,
            (None, Some(_)) => std::cmp::Ordering::Less,
            (None, None) => b.created_at.cmp(&a.created_at),
        });
        Ok(rows)
    }

    async fn find_blog(&self, id: Uuid) -> Result<Option<BlogRecord>, RepoError> {
        Ok(self
            .blogs
            .lock()
            .unwrap()
            .iter()
            .find(|row| row.id == id)
            .cloned())
    }

    async fn find_blog_by_slug(
        &self,
        scope: ReadScope,
        slug: &str,
    ) -> Result<Option<BlogRecord>, RepoError> {
        Ok(self
            .blogs
            .lock()
            .unwrap()
            .iter()
            .find(|row| {
                row.slug == slug && (scope.includes_drafts() || row.status.is_published())
            })
            .cloned())
    }

    async fn blog_slug_exists(&self, slug: &str) -> Result<bool, RepoError> {
        Ok(self.blogs.lock().unwrap().iter().any(|row| row.slug == slug))
    }

    async fn create_blog(&self, params: CreateBlogParams) -> Result<BlogRecord, RepoError> {
        let mut rows = self.blogs.lock().unwrap();
        if rows.iter().any(|row| row.slug == params.slug) {
            return Err(RepoError::Duplicate {
                constraint: "blogs_slug_key".to_string(),
            });
        }
        let created_at = now();
        let record = BlogRecord {
            id: Uuid::new_v4(),
            title: params.title,
            slug: params.slug,
            summary: params.summary,
            image_id: params.image_id,
            published_at: params.published_at,
            content: params.content,
            meta_title: params.meta_title,
            meta_description: params.meta_description,
            meta_image_id: params.meta_image_id,
            status: params.status,
            created_at,
            updated_at: created_at,
        };
        rows.push(record.clone());
        Ok(record)
    }

    async fn update_blog(&self, params: UpdateBlogParams) -> Result<BlogRecord, RepoError> {
        let mut rows = self.blogs.lock().unwrap();
        if rows
            .iter()
            .any(|row| row.slug == params.slug && row.id != params.id)
        {
            return Err(RepoError::Duplicate {
                constraint: "blogs_slug_key".to_string(),
            });
        }
        let row = rows
            .iter_mut()
            .find(|row| row.id == params.id)
            .ok_or(RepoError::NotFound)?;
        row.title = params.title;
        row.slug = params.slug;
        row.summary = params.summary;
        row.image_id = params.image_id;
        row.published_at = params.published_at;
        row.content = params.content;
        row.meta_title = params.meta_title;
        row.meta_description = params.meta_description;
        row.meta_image_id = params.meta_image_id;
        row.status = params.status;
        row.updated_at = now();
        Ok(row.clone())
    }

    async fn delete_blog(&self, id: Uuid) -> Result<Option<BlogRecord>, RepoError> {
        let mut rows = self.blogs.lock().unwrap();
        let index = rows.iter().position(|row| row.id == id);
        Ok(index.map(|index| rows.remove(index)))
    }

    async fn delete_all_blogs(&self) -> Result<u64, RepoError> {
        let mut rows = self.blogs.lock().unwrap();
        let count = rows.len() as u64;
        rows.clear();
        Ok(count)
    }
}

#[async_trait]
impl GlobalsRepo for InMemoryRepositories {
    async fn load_profile(&self) -> Result<Option<ProfileRecord>, RepoError> {
        Ok(self.profile.lock().unwrap().clone())
    }

    async fn upsert_profile(
        &self,
        params: UpsertProfileParams,
    ) -> Result<ProfileRecord, RepoError> {
        let record = ProfileRecord {
            name: params.name,
            title: params.title,
            bio: params.bio,
            avatar_id: params.avatar_id,
            email: params.email,
            phone: params.phone,
            location: params.location,
            timezone: params.timezone,
            github: params.github,
            languages: params.languages,
            social_links: params.social_links,
            updated_at: now(),
        };
        *self.profile.lock().unwrap() = Some(record.clone());
        Ok(record)
    }

    async fn load_navigation(
        &self,
        area: NavArea,
    ) -> Result<Option<NavigationRecord>, RepoError> {
        Ok(self.navigation.lock().unwrap().get(&area).cloned())
    }

    async fn upsert_navigation(
        &self,
        area: NavArea,
        links: Vec<NavLinkRecord>,
    ) -> Result<NavigationRecord, RepoError> {
        let record = NavigationRecord {
            area,
            links,
            updated_at: now(),
        };
        self.navigation.lock().unwrap().insert(area, record.clone());
        Ok(record)
    }
}

#[async_trait]
impl HealthProbe for InMemoryRepositories {
    async fn ping(&self) -> Result<(), RepoError> {
        Ok(())
    }
}

pub struct TestOptions {
    pub admin_secret: Option<&'static str>,
    pub seed_secret: Option<&'static str>,
    pub runtime_env: RuntimeEnv,
    pub cache_enabled: bool,
}

impl Default for TestOptions {
    fn default() -> Self {
        Self {
            admin_secret: Some(ADMIN_SECRET),
            seed_secret: None,
            runtime_env: RuntimeEnv::Development,
            cache_enabled: false,
        }
    }
}

pub struct TestApp {
    pub state: HttpState,
    pub repos: Arc<InMemoryRepositories>,
    pub seeder: Arc<Seeder>,
}

impl TestApp {
    pub fn build(options: TestOptions) -> Self {
        let repos = Arc::new(InMemoryRepositories::default());

        let media: Arc<dyn MediaRepo> = repos.clone();
        let skills: Arc<dyn SkillsRepo> = repos.clone();
        let projects: Arc<dyn ProjectsRepo> = repos.clone();
        let experiences: Arc<dyn ExperiencesRepo> = repos.clone();
        let gallery: Arc<dyn GalleryRepo> = repos.clone();
        let blogs: Arc<dyn BlogsRepo> = repos.clone();
        let globals: Arc<dyn GlobalsRepo> = repos.clone();
        let health: Arc<dyn HealthProbe> = repos.clone();

        let cache_config = CacheConfig {
            enabled: options.cache_enabled,
            ..CacheConfig::default()
        };
        let store = Arc::new(ResponseStore::new(&cache_config));
        let registry = Arc::new(CacheRegistry::new());
        let queue = Arc::new(EventQueue::new());
        let consumer = Arc::new(RevalidationConsumer::new(
            cache_config.clone(),
            store.clone(),
            registry.clone(),
            queue.clone(),
        ));
        let trigger = options.cache_enabled.then(|| {
            Arc::new(RevalidationTrigger::new(
                cache_config.clone(),
                queue,
                consumer,
            ))
        });

        let content = Arc::new(ContentService::new(
            media.clone(),
            skills.clone(),
            projects.clone(),
            experiences.clone(),
            gallery.clone(),
            blogs.clone(),
            globals.clone(),
        ));
        let admin = Arc::new(AdminContentService::new(
            media,
            skills,
            projects,
            experiences,
            gallery,
            blogs,
            globals,
            trigger.clone(),
        ));
        let sessions = Arc::new(AdminSessionService::new(options.admin_secret));
        let seeder = Arc::new(Seeder::new(admin.clone(), trigger));

        let state = HttpState {
            content,
            admin,
            sessions,
            seeder: seeder.clone(),
            health,
            cache: CacheState {
                config: cache_config,
                store,
                registry,
            },
            seed_secret: options.seed_secret.map(|secret| Arc::new(hash_secret(secret))),
            runtime_env: options.runtime_env,
        };

        Self {
            state,
            repos,
            seeder,
        }
    }

    pub fn router(&self) -> Router {
        build_router(self.state.clone())
    }

    pub async fn seed(&self) {
        self.seeder.run().await.expect("seed run");
    }
}

pub fn get(path: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(path)
        .body(Body::empty())
        .expect("request")
}

pub fn get_with_bearer(path: &str, token: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(path)
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .expect("request")
}

pub fn json_request(
    method: &str,
    path: &str,
    token: Option<&str>,
    body: &Value,
) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder
        .body(Body::from(body.to_string()))
        .expect("request")
}

pub fn bodyless_request(method: &str, path: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(path);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::empty()).expect("request")
}

pub async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.oneshot(request).await.expect("router call");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("read body")
        .to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, json)
}
