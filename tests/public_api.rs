//! End-to-end tests for the public read surface and the access gates.

mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{
    ADMIN_SECRET, SEED_SECRET, TestApp, TestOptions, bodyless_request, get, get_with_bearer,
    json_request, send,
};
use vitrine::config::RuntimeEnv;

#[tokio::test]
async fn anonymous_blog_index_returns_published_newest_first() {
    let app = TestApp::build(TestOptions::default());
    app.seed().await;

    let (status, body) = send(app.router(), get("/blog")).await;
    assert_eq!(status, StatusCode::OK);

    let blogs = body.as_array().expect("blog array");
    assert_eq!(blogs.len(), 4);

    let slugs: Vec<&str> = blogs
        .iter()
        .map(|blog| blog["slug"].as_str().expect("slug"))
        .collect();
    assert_eq!(
        slugs,
        [
            "building-portfolio-payload-nextjs",
            "react-to-react-native-journey",
            "typescript-best-practices",
            "writing-good-commit-messages",
        ]
    );
}

#[tokio::test]
async fn authenticated_blog_index_includes_drafts() {
    let app = TestApp::build(TestOptions::default());
    app.seed().await;

    let (status, body) = send(app.router(), get_with_bearer("/blog", ADMIN_SECRET)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().expect("blog array").len(), 5);
}

#[tokio::test]
async fn draft_blog_detail_is_hidden_from_anonymous_readers() {
    let app = TestApp::build(TestOptions::default());
    app.seed().await;

    let (status, _) = send(app.router(), get("/blog/ai-assisted-development")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(
        app.router(),
        get_with_bearer("/blog/ai-assisted-development", ADMIN_SECRET),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["slug"], "ai-assisted-development");
}

#[tokio::test]
async fn invalid_bearer_falls_back_to_public_scope() {
    let app = TestApp::build(TestOptions::default());
    app.seed().await;

    let (status, body) = send(app.router(), get_with_bearer("/blog", "wrong-token")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().expect("blog array").len(), 4);
}

#[tokio::test]
async fn project_detail_resolves_derived_slug_and_technologies() {
    let app = TestApp::build(TestOptions::default());
    app.seed().await;

    let (status, body) = send(app.router(), get("/projects/educave")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["project"]["title"], "Educave");

    // Firebase is not a seeded skill, so only React Native survives.
    let technologies = body["technologies"].as_array().expect("technologies");
    assert_eq!(technologies.len(), 1);
    assert_eq!(technologies[0]["name"], "React Native");
}

#[tokio::test]
async fn draft_project_detail_requires_authentication() {
    let app = TestApp::build(TestOptions::default());
    app.seed().await;

    let (status, _) = send(app.router(), get("/projects/secret-project")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(
        app.router(),
        get_with_bearer("/projects/secret-project", ADMIN_SECRET),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["project"]["status"], "draft");
}

#[tokio::test]
async fn homepage_assembles_profile_and_navigation() {
    let app = TestApp::build(TestOptions::default());
    app.seed().await;

    let (status, body) = send(app.router(), get("/")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["profile"]["name"], "Hey, I'm Jay!");
    assert_eq!(body["header"]["area"], "header");
    assert_eq!(body["footer"]["area"], "footer");
    assert!(body["skills"].as_array().is_some_and(|s| !s.is_empty()));

    // Homepage projects follow the public scope.
    let projects = body["projects"].as_array().expect("projects");
    assert!(projects.iter().all(|p| p["status"] == "published"));
}

#[tokio::test]
async fn gallery_lists_seeded_items() {
    let app = TestApp::build(TestOptions::default());
    app.seed().await;

    let (status, body) = send(app.router(), get("/gallery")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().expect("gallery array").len(), 3);
}

#[tokio::test]
async fn health_endpoint_reports_ok() {
    let app = TestApp::build(TestOptions::default());

    let (status, body) = send(app.router(), get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn admin_routes_reject_missing_and_invalid_tokens() {
    let app = TestApp::build(TestOptions::default());

    let body = json!({ "name": "Svelte", "category": "frontend" });

    let (status, _) = send(
        app.router(),
        json_request("POST", "/admin/skills", None, &body),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(
        app.router(),
        json_request("POST", "/admin/skills", Some("nope"), &body),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, created) = send(
        app.router(),
        json_request("POST", "/admin/skills", Some(ADMIN_SECRET), &body),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["name"], "Svelte");
}

#[tokio::test]
async fn admin_routes_report_missing_session_secret() {
    let app = TestApp::build(TestOptions {
        admin_secret: None,
        ..TestOptions::default()
    });

    let body = json!({ "name": "Svelte", "category": "frontend" });
    let (status, _) = send(
        app.router(),
        json_request("POST", "/admin/skills", Some("anything"), &body),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn seed_usage_is_public() {
    let app = TestApp::build(TestOptions::default());

    let (status, body) = send(app.router(), get("/seed")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["method"], "POST");
}

#[tokio::test]
async fn seed_in_development_requires_admin_session() {
    let app = TestApp::build(TestOptions::default());

    let (status, _) = send(app.router(), bodyless_request("POST", "/seed", None)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = send(
        app.router(),
        bodyless_request("POST", "/seed", Some(ADMIN_SECRET)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["report"]["blogs"], 5);
}

#[tokio::test]
async fn seed_in_production_requires_the_seed_secret() {
    let app = TestApp::build(TestOptions {
        seed_secret: Some(SEED_SECRET),
        runtime_env: RuntimeEnv::Production,
        ..TestOptions::default()
    });

    let (status, _) = send(app.router(), bodyless_request("POST", "/seed", None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    // The admin session token is not the seed secret.
    let (status, _) = send(
        app.router(),
        bodyless_request("POST", "/seed", Some(ADMIN_SECRET)),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, body) = send(
        app.router(),
        bodyless_request("POST", "/seed", Some(SEED_SECRET)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
}

#[tokio::test]
async fn seed_in_production_without_secret_is_a_server_error() {
    let app = TestApp::build(TestOptions {
        seed_secret: None,
        runtime_env: RuntimeEnv::Production,
        ..TestOptions::default()
    });

    let (status, _) = send(
        app.router(),
        bodyless_request("POST", "/seed", Some("whatever")),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}
