mod admin;
mod error;
mod middleware;
mod public;
mod seed;

pub use error::{ApiError, ApiErrorBody, codes};
pub use middleware::{require_admin, scope_from_headers};

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post, put};

use crate::application::admin::AdminContentService;
use crate::application::auth::AdminSessionService;
use crate::application::content::ContentService;
use crate::application::repos::HealthProbe;
use crate::application::seed::Seeder;
use crate::cache::{CacheState, response_cache_layer};
use crate::config::RuntimeEnv;

#[derive(Clone)]
pub struct HttpState {
    pub content: Arc<ContentService>,
    pub admin: Arc<AdminContentService>,
    pub sessions: Arc<AdminSessionService>,
    pub seeder: Arc<Seeder>,
    pub health: Arc<dyn HealthProbe>,
    pub cache: CacheState,
    /// SHA-256 hash of the seed secret, when one is configured.
    pub seed_secret: Option<Arc<Vec<u8>>>,
    pub runtime_env: RuntimeEnv,
}

/// Build the full application router: cached public routes, the guarded
/// admin surface, and the seed and health endpoints.
pub fn build_router(state: HttpState) -> Router {
    let cached_public = Router::new()
        .route("/", get(public::home))
        .route("/blog", get(public::blog_index))
        .route("/blog/{slug}", get(public::blog_detail))
        .route("/projects/{slug}", get(public::project_detail))
        .route("/gallery", get(public::gallery))
        .layer(axum::middleware::from_fn_with_state(
            state.cache.clone(),
            response_cache_layer,
        ));

    let admin_routes = Router::new()
        .route("/media", post(admin::create_media))
        .route(
            "/media/{id}",
            put(admin::update_media).delete(admin::delete_media),
        )
        .route("/skills", post(admin::create_skill))
        .route(
            "/skills/{id}",
            put(admin::update_skill).delete(admin::delete_skill),
        )
        .route("/projects", post(admin::create_project))
        .route(
            "/projects/{id}",
            put(admin::update_project).delete(admin::delete_project),
        )
        .route("/experiences", post(admin::create_experience))
        .route(
            "/experiences/{id}",
            put(admin::update_experience).delete(admin::delete_experience),
        )
        .route("/gallery", post(admin::create_gallery_item))
        .route(
            "/gallery/{id}",
            put(admin::update_gallery_item).delete(admin::delete_gallery_item),
        )
        .route("/blogs", post(admin::create_blog))
        .route(
            "/blogs/{id}",
            put(admin::update_blog).delete(admin::delete_blog),
        )
        .route("/globals/profile", put(admin::put_profile))
        .route("/globals/{area}", put(admin::put_navigation))
        .route_layer(axum::middleware::from_fn_with_state(
            state.clone(),
            require_admin,
        ));

    Router::new()
        .merge(cached_public)
        .nest("/admin", admin_routes)
        .route("/seed", get(seed::usage).post(seed::run))
        .route("/health", get(public::health))
        .with_state(state)
}
