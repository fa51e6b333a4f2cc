//! Public read endpoints.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::application::content::{HomePayload, ProjectDetail};
use crate::domain::entities::{BlogRecord, GalleryItemRecord};

use super::HttpState;
use super::error::ApiError;
use super::middleware::scope_from_headers;

pub async fn home(
    State(state): State<HttpState>,
    headers: HeaderMap,
) -> Result<Json<HomePayload>, ApiError> {
    let scope = scope_from_headers(&state, &headers);
    let payload = state.content.homepage(scope).await?;
    Ok(Json(payload))
}

pub async fn blog_index(
    State(state): State<HttpState>,
    headers: HeaderMap,
) -> Result<Json<Vec<BlogRecord>>, ApiError> {
    let scope = scope_from_headers(&state, &headers);
    let blogs = state.content.blog_index(scope).await?;
    Ok(Json(blogs))
}

pub async fn blog_detail(
    State(state): State<HttpState>,
    headers: HeaderMap,
    Path(slug): Path<String>,
) -> Result<Json<BlogRecord>, ApiError> {
    let scope = scope_from_headers(&state, &headers);
    let blog = state.content.blog_detail(scope, &slug).await?;
    Ok(Json(blog))
}

pub async fn project_detail(
    State(state): State<HttpState>,
    headers: HeaderMap,
    Path(slug): Path<String>,
) -> Result<Json<ProjectDetail>, ApiError> {
    let scope = scope_from_headers(&state, &headers);
    let detail = state.content.project_detail(scope, &slug).await?;
    Ok(Json(detail))
}

pub async fn gallery(
    State(state): State<HttpState>,
) -> Result<Json<Vec<GalleryItemRecord>>, ApiError> {
    let items = state.content.gallery().await?;
    Ok(Json(items))
}

pub async fn health(State(state): State<HttpState>) -> Response {
    match state.health.ping().await {
        Ok(()) => Json(json!({ "status": "ok" })).into_response(),
        Err(err) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({ "status": "unavailable", "detail": err.to_string() })),
        )
            .into_response(),
    }
}
