use std::{process, sync::Arc};

use tokio::signal;
use tracing::{Dispatch, Level, dispatcher, error, info};
use tracing_subscriber::fmt as tracing_fmt;
use vitrine::{
    application::{
        admin::AdminContentService,
        auth::{AdminSessionService, hash_secret},
        content::ContentService,
        error::AppError,
        repos::{
            BlogsRepo, ExperiencesRepo, GalleryRepo, GlobalsRepo, HealthProbe, MediaRepo,
            ProjectsRepo, SkillsRepo,
        },
        seed::Seeder,
    },
    cache::{
        CacheConfig, CacheRegistry, CacheState, EventQueue, ResponseStore, RevalidationConsumer,
        RevalidationTrigger,
    },
    config,
    infra::{
        db::PostgresRepositories,
        error::InfraError,
        http::{self, HttpState},
        telemetry,
    },
};

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        report_application_error(&error);
        process::exit(1);
    }
}

fn report_application_error(error: &AppError) {
    if dispatcher::has_been_set() {
        error!(error = %error, "application error");
        return;
    }

    let subscriber = tracing_fmt().with_max_level(Level::ERROR).finish();
    let dispatch = Dispatch::new(subscriber);
    dispatcher::with_default(&dispatch, || {
        error!(error = %error, "application error");
    });
}

async fn run() -> Result<(), AppError> {
    let (cli_args, settings) = config::load_with_cli()
        .map_err(|err| AppError::unexpected(format!("failed to load configuration: {err}")))?;

    let command = cli_args
        .command
        .unwrap_or(config::Command::Serve(Box::<config::ServeArgs>::default()));

    telemetry::init(&settings.logging).map_err(AppError::from)?;

    match command {
        config::Command::Serve(_) => run_serve(settings).await,
        config::Command::Seed(_) => run_seed(settings).await,
    }
}

async fn run_serve(settings: config::Settings) -> Result<(), AppError> {
    let repositories = init_repositories(&settings).await?;
    let app = build_application_context(repositories, &settings);

    serve_http(&settings, app.http_state).await
}

async fn run_seed(settings: config::Settings) -> Result<(), AppError> {
    let repositories = init_repositories(&settings).await?;
    let app = build_application_context(repositories, &settings);

    let report = app
        .http_state
        .seeder
        .run()
        .await
        .map_err(|err| AppError::unexpected(format!("seed run failed: {err}")))?;

    info!(
        deleted = report.deleted,
        media = report.media,
        skills = report.skills,
        projects = report.projects,
        experiences = report.experiences,
        gallery = report.gallery,
        blogs = report.blogs,
        globals = report.globals,
        "seed run complete"
    );

    Ok(())
}

async fn init_repositories(
    settings: &config::Settings,
) -> Result<Arc<PostgresRepositories>, AppError> {
    let url = settings.database.url.as_deref().ok_or_else(|| {
        AppError::from(InfraError::configuration(
            "database.url is not set; configure it via vitrine.toml, \
             VITRINE__DATABASE__URL, or --database-url",
        ))
    })?;

    let pool = PostgresRepositories::connect(url, settings.database.max_connections.get())
        .await
        .map_err(|err| AppError::from(InfraError::database(err.to_string())))?;

    PostgresRepositories::run_migrations(&pool)
        .await
        .map_err(|err| AppError::from(InfraError::database(format!("migrations failed: {err}"))))?;

    Ok(Arc::new(PostgresRepositories::new(pool)))
}

struct ApplicationContext {
    http_state: HttpState,
}

fn build_application_context(
    repositories: Arc<PostgresRepositories>,
    settings: &config::Settings,
) -> ApplicationContext {
    let media_repo: Arc<dyn MediaRepo> = repositories.clone();
    let skills_repo: Arc<dyn SkillsRepo> = repositories.clone();
    let projects_repo: Arc<dyn ProjectsRepo> = repositories.clone();
    let experiences_repo: Arc<dyn ExperiencesRepo> = repositories.clone();
    let gallery_repo: Arc<dyn GalleryRepo> = repositories.clone();
    let blogs_repo: Arc<dyn BlogsRepo> = repositories.clone();
    let globals_repo: Arc<dyn GlobalsRepo> = repositories.clone();
    let health: Arc<dyn HealthProbe> = repositories;

    let cache_config = CacheConfig::from(&settings.cache);
    let store = Arc::new(ResponseStore::new(&cache_config));
    let registry = Arc::new(CacheRegistry::new());
    let queue = Arc::new(EventQueue::new());
    let consumer = Arc::new(RevalidationConsumer::new(
        cache_config.clone(),
        store.clone(),
        registry.clone(),
        queue.clone(),
    ));
    let trigger = cache_config
        .is_enabled()
        .then(|| Arc::new(RevalidationTrigger::new(cache_config.clone(), queue, consumer)));

    let cache = CacheState {
        config: cache_config,
        store,
        registry,
    };

    let content = Arc::new(ContentService::new(
        media_repo.clone(),
        skills_repo.clone(),
        projects_repo.clone(),
        experiences_repo.clone(),
        gallery_repo.clone(),
        blogs_repo.clone(),
        globals_repo.clone(),
    ));
    let admin = Arc::new(AdminContentService::new(
        media_repo,
        skills_repo,
        projects_repo,
        experiences_repo,
        gallery_repo,
        blogs_repo,
        globals_repo,
        trigger.clone(),
    ));
    let sessions = Arc::new(AdminSessionService::new(
        settings.admin.session_secret.as_deref(),
    ));
    let seeder = Arc::new(Seeder::new(admin.clone(), trigger));

    let http_state = HttpState {
        content,
        admin,
        sessions,
        seeder,
        health,
        cache,
        seed_secret: settings
            .seed
            .secret
            .as_deref()
            .map(|secret| Arc::new(hash_secret(secret))),
        runtime_env: settings.runtime_env,
    };

    ApplicationContext { http_state }
}

async fn serve_http(settings: &config::Settings, state: HttpState) -> Result<(), AppError> {
    let router = http::build_router(state);

    let listener = tokio::net::TcpListener::bind(settings.server.addr)
        .await
        .map_err(|err| AppError::from(InfraError::from(err)))?;

    info!(addr = %settings.server.addr, "listening");

    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|err| AppError::unexpected(format!("server error: {err}")))?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = signal::ctrl_c().await {
        error!(error = %err, "failed to install shutdown handler");
    }
}
