//! Seed loader lifecycle: purge ordering, reference resolution, idempotence.

mod common;

use axum::http::StatusCode;

use common::{TestApp, TestOptions, get, send};

#[tokio::test]
async fn seed_report_counts_every_fixture() {
    let app = TestApp::build(TestOptions::default());

    let report = app.seeder.run().await.expect("seed run");

    assert_eq!(report.deleted, 0);
    assert_eq!(report.media, 6);
    assert_eq!(report.skills, 18);
    assert_eq!(report.projects, 6);
    assert_eq!(report.experiences, 3);
    assert_eq!(report.gallery, 3);
    assert_eq!(report.blogs, 5);
    // Profile plus header and footer navigation.
    assert_eq!(report.globals, 3);
}

#[tokio::test]
async fn reseeding_purges_previous_content_first() {
    let app = TestApp::build(TestOptions::default());

    let first = app.seeder.run().await.expect("first seed run");
    let second = app.seeder.run().await.expect("second seed run");

    assert_eq!(first.deleted, 0);
    // Everything the first run inserted into collections is purged; globals
    // are upserted in place, never deleted.
    assert_eq!(second.deleted, 41);
    assert_eq!(second.media, first.media);
    assert_eq!(second.blogs, first.blogs);
    assert_eq!(app.repos.blog_count(), 5);
}

#[tokio::test]
async fn unknown_skill_references_are_dropped_not_fatal() {
    let app = TestApp::build(TestOptions::default());
    app.seed().await;

    // The Educave fixture names Firebase, which is not a seeded skill.
    let educave = app.repos.project_by_slug("educave").expect("educave row");
    assert_eq!(educave.technology_ids.len(), 1);

    let react_native = app
        .repos
        .skill_by_name("React Native")
        .expect("react native skill");
    assert_eq!(educave.technology_ids[0], react_native.id);
}

#[tokio::test]
async fn skill_resolution_is_case_insensitive() {
    let app = TestApp::build(TestOptions::default());
    app.seed().await;

    // ChallengeRate references its stack in canonical casing; the resolved
    // ids must all point at real skills.
    let challengerate = app
        .repos
        .project_by_slug("challengerate")
        .expect("challengerate row");
    assert!(!challengerate.technology_ids.is_empty());
}

#[tokio::test]
async fn seeded_blog_index_is_the_published_four() {
    let app = TestApp::build(TestOptions::default());
    app.seed().await;

    let (status, body) = send(app.router(), get("/blog")).await;
    assert_eq!(status, StatusCode::OK);

    let blogs = body.as_array().expect("blog array");
    assert_eq!(blogs.len(), 4);

    // Newest publication date first.
    let dates: Vec<&str> = blogs
        .iter()
        .map(|blog| blog["published_at"].as_str().expect("published_at"))
        .collect();
    let mut sorted = dates.clone();
    sorted.sort_by(|a, b| b.cmp(a));
    assert_eq!(dates, sorted);
}

#[tokio::test]
async fn seeded_positions_carry_employment_metadata() {
    let app = TestApp::build(TestOptions::default());
    app.seed().await;

    let (status, body) = send(app.router(), get("/")).await;
    assert_eq!(status, StatusCode::OK);

    let experiences = body["experiences"].as_array().expect("experiences");
    assert_eq!(experiences.len(), 3);

    let finlytics = experiences
        .iter()
        .find(|experience| experience["company"] == "Finlytics")
        .expect("finlytics row");
    let positions = finlytics["positions"].as_array().expect("positions");
    assert_eq!(positions.len(), 2);
    assert_eq!(positions[0]["employment_type"], "full-time");
    assert_eq!(positions[1]["employment_type"], "internship");
}

#[tokio::test]
async fn seeded_gallery_keeps_exif_payload() {
    let app = TestApp::build(TestOptions::default());
    app.seed().await;

    let (status, body) = send(app.router(), get("/gallery")).await;
    assert_eq!(status, StatusCode::OK);

    let items = body.as_array().expect("gallery array");
    let golden_hour = items
        .iter()
        .find(|item| item["title"] == "Golden hour")
        .expect("golden hour item");
    assert_eq!(golden_hour["exif"]["camera"], "Fujifilm X-T30");
}
