//! The seed endpoint.
//!
//! In production the endpoint is gated by a dedicated seed secret: an
//! unconfigured secret is a hard 500, a wrong one a 401. Outside production a
//! valid admin session is enough; anything else is a 403.

use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use serde_json::json;
use tracing::{error, info};

use crate::application::auth::verify_shared_secret;

use super::HttpState;
use super::error::ApiError;
use super::middleware::extract_token;

pub async fn usage() -> Json<serde_json::Value> {
    Json(json!({
        "method": "POST",
        "description": "Purges all content and reloads the bundled fixtures.",
        "authorization": "Bearer token: the seed secret in production, an admin session otherwise.",
    }))
}

pub async fn run(State(state): State<HttpState>, headers: HeaderMap) -> Response {
    if let Err(response) = authorize(&state, &headers) {
        return response;
    }

    match state.seeder.run().await {
        Ok(report) => {
            info!(blogs = report.blogs, projects = report.projects, "Seed endpoint completed");
            Json(json!({ "success": true, "report": report })).into_response()
        }
        Err(err) => {
            error!(error = %err, "Seed endpoint failed");
            ApiError::from(err).into_response()
        }
    }
}

fn authorize(state: &HttpState, headers: &HeaderMap) -> Result<(), Response> {
    if state.runtime_env.is_production() {
        let Some(hashed) = state.seed_secret.as_deref() else {
            return Err(
                ApiError::misconfigured("Seed secret not configured").into_response()
            );
        };
        let Some(token) = extract_token(headers) else {
            return Err(unauthorized());
        };
        if !verify_shared_secret(hashed, &token) {
            return Err(unauthorized());
        }
        return Ok(());
    }

    let authenticated = extract_token(headers)
        .map(|token| state.sessions.authenticate(&token).is_ok())
        .unwrap_or(false);
    if authenticated {
        Ok(())
    } else {
        Err(ApiError::forbidden().into_response())
    }
}

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "error": { "code": "unauthorized", "message": "Seed secret required" } })),
    )
        .into_response()
}
