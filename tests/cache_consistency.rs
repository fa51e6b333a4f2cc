//! Response cache behavior through the HTTP surface: hits, targeted
//! invalidation on writes, suppression, and the full reset after a seed run.

mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{ADMIN_SECRET, TestApp, TestOptions, get, get_with_bearer, json_request, send};
use vitrine::cache::ResponseKey;

fn cached_app() -> TestApp {
    TestApp::build(TestOptions {
        cache_enabled: true,
        ..TestOptions::default()
    })
}

#[tokio::test]
async fn anonymous_reads_are_cached() {
    let app = cached_app();
    app.seed().await;

    let (status, _) = send(app.router(), get("/blog")).await;
    assert_eq!(status, StatusCode::OK);

    let key = ResponseKey::new("/blog", "");
    assert!(app.state.cache.store.get(&key).is_some());
}

#[tokio::test]
async fn authenticated_reads_bypass_the_cache() {
    let app = cached_app();
    app.seed().await;

    let (status, _) = send(app.router(), get_with_bearer("/blog", ADMIN_SECRET)).await;
    assert_eq!(status, StatusCode::OK);

    let key = ResponseKey::new("/blog", "");
    assert!(app.state.cache.store.get(&key).is_none());
}

#[tokio::test]
async fn stale_responses_are_served_until_a_write_invalidates() {
    let app = cached_app();
    app.seed().await;

    let (_, body) = send(app.router(), get("/blog")).await;
    assert_eq!(body.as_array().expect("blog array").len(), 4);

    // A direct repository write fires no change event, so the cached index
    // keeps serving.
    use vitrine::application::repos::BlogsRepo;
    app.repos.delete_all_blogs().await.expect("direct purge");

    let (_, body) = send(app.router(), get("/blog")).await;
    assert_eq!(body.as_array().expect("blog array").len(), 4);
}

#[tokio::test]
async fn publishing_a_blog_refreshes_the_index() {
    let app = cached_app();
    app.seed().await;

    let (_, body) = send(app.router(), get("/blog")).await;
    assert_eq!(body.as_array().expect("blog array").len(), 4);

    let (status, _) = send(
        app.router(),
        json_request(
            "POST",
            "/admin/blogs",
            Some(ADMIN_SECRET),
            &json!({
                "title": "Fresh Post",
                "content": { "root": { "children": [] } },
                "published_at": "2025-01-05",
                "status": "published",
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(app.router(), get("/blog")).await;
    let blogs = body.as_array().expect("blog array");
    assert_eq!(blogs.len(), 5);
    assert_eq!(blogs[0]["slug"], "fresh-post");
}

#[tokio::test]
async fn suppressed_writes_leave_the_cache_untouched() {
    let app = cached_app();
    app.seed().await;

    let (_, body) = send(app.router(), get("/blog")).await;
    assert_eq!(body.as_array().expect("blog array").len(), 4);

    let (status, _) = send(
        app.router(),
        json_request(
            "POST",
            "/admin/blogs?suppress_revalidation=true",
            Some(ADMIN_SECRET),
            &json!({
                "title": "Quiet Post",
                "content": { "root": { "children": [] } },
                "published_at": "2025-01-06",
                "status": "published",
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    // Cached index is still the old one.
    let (_, body) = send(app.router(), get("/blog")).await;
    assert_eq!(body.as_array().expect("blog array").len(), 4);

    // An authenticated read skips the cache and sees the new document.
    let (_, body) = send(app.router(), get_with_bearer("/blog", ADMIN_SECRET)).await;
    assert_eq!(body.as_array().expect("blog array").len(), 6);
}

#[tokio::test]
async fn unpublishing_invalidates_the_detail_path() {
    let app = cached_app();
    app.seed().await;

    let slug = "typescript-best-practices";
    let (status, cached) = send(app.router(), get(&format!("/blog/{slug}"))).await;
    assert_eq!(status, StatusCode::OK);
    let id = cached["id"].as_str().expect("blog id").to_string();

    let (status, _) = send(
        app.router(),
        json_request(
            "PUT",
            &format!("/admin/blogs/{id}"),
            Some(ADMIN_SECRET),
            &json!({
                "title": cached["title"],
                "slug": slug,
                "content": cached["content"],
                "published_at": cached["published_at"],
                "status": "draft",
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    // Without invalidation this would keep serving the cached 200.
    let (status, _) = send(app.router(), get(&format!("/blog/{slug}"))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = send(app.router(), get("/blog")).await;
    assert_eq!(body.as_array().expect("blog array").len(), 3);
}

#[tokio::test]
async fn deleting_a_blog_refreshes_the_index() {
    let app = cached_app();
    app.seed().await;

    let (_, cached) = send(app.router(), get("/blog/writing-good-commit-messages")).await;
    let id = cached["id"].as_str().expect("blog id").to_string();

    let (_, body) = send(app.router(), get("/blog")).await;
    assert_eq!(body.as_array().expect("blog array").len(), 4);

    let (status, _) = send(
        app.router(),
        common::bodyless_request("DELETE", &format!("/admin/blogs/{id}"), Some(ADMIN_SECRET)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(app.router(), get("/blog")).await;
    assert_eq!(body.as_array().expect("blog array").len(), 3);

    let (status, _) = send(app.router(), get("/blog/writing-good-commit-messages")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn global_updates_invalidate_the_homepage() {
    let app = cached_app();
    app.seed().await;

    let (_, body) = send(app.router(), get("/")).await;
    assert_eq!(body["profile"]["name"], "Hey, I'm Jay!");

    let (status, _) = send(
        app.router(),
        json_request(
            "PUT",
            "/admin/globals/profile",
            Some(ADMIN_SECRET),
            &json!({
                "name": "Jay Kikani",
                "title": "Software Developer",
                "bio": { "root": { "children": [] } },
                "email": "hello@jaykikani.dev",
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(app.router(), get("/")).await;
    assert_eq!(body["profile"]["name"], "Jay Kikani");
}

#[tokio::test]
async fn seeding_resets_the_whole_cache() {
    let app = cached_app();
    app.seed().await;

    let (_, _) = send(app.router(), get("/blog")).await;
    let (_, _) = send(app.router(), get("/")).await;
    assert!(app.state.cache.store.len() >= 2);

    app.seed().await;
    assert!(app.state.cache.store.is_empty());
}

#[tokio::test]
async fn distinct_query_strings_cache_separately() {
    let app = cached_app();
    app.seed().await;

    let (_, _) = send(app.router(), get("/blog")).await;
    let (_, _) = send(app.router(), get("/blog?page=2")).await;

    assert!(app.state.cache.store.get(&ResponseKey::new("/blog", "")).is_some());
    assert!(
        app.state
            .cache
            .store
            .get(&ResponseKey::new("/blog", "page=2"))
            .is_some()
    );
}
