use axum::body::Body;
use axum::extract::State;
use axum::http::{HeaderMap, Request, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::application::auth::AuthError;
use crate::application::repos::ReadScope;

use super::HttpState;
use super::error::ApiError;

/// Require a valid admin session token; attaches the principal to the request.
pub async fn require_admin(
    State(state): State<HttpState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let token = match extract_token(request.headers()) {
        Some(value) => value,
        None => return ApiError::unauthorized().into_response(),
    };

    let principal = match state.sessions.authenticate(&token) {
        Ok(principal) => principal,
        Err(AuthError::Unconfigured) => {
            return ApiError::misconfigured("Admin session secret not configured")
                .into_response();
        }
        Err(AuthError::Missing) | Err(AuthError::Invalid) => {
            return ApiError::unauthorized().into_response();
        }
    };

    request.extensions_mut().insert(principal);

    next.run(request).await
}

/// Resolve the read scope from request headers: a valid admin session widens
/// reads to include drafts, anything else stays public.
pub fn scope_from_headers(state: &HttpState, headers: &HeaderMap) -> ReadScope {
    match extract_token(headers) {
        Some(token) => match state.sessions.authenticate(&token) {
            Ok(principal) => principal.scope(),
            Err(_) => ReadScope::Public,
        },
        None => ReadScope::Public,
    }
}

pub fn extract_token(headers: &HeaderMap) -> Option<String> {
    let raw = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let bearer = raw.strip_prefix("Bearer ")?;
    Some(bearer.to_string())
}
