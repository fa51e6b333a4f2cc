//! Response cache middleware.
//!
//! Caches anonymous GET requests to public routes and serves cached
//! responses. Authenticated requests bypass the cache entirely so draft
//! content is never shared with anonymous readers.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    body::Body,
    extract::State,
    http::{Method, Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::{debug, instrument};

use super::{
    CacheConfig, CacheRegistry, ResponseStore, deps,
    keys::{EntityKey, ResponseKey},
    store::CachedResponse,
};

const MAX_CACHED_BODY_BYTES: usize = 1024 * 1024;

/// Shared cache state for middleware.
#[derive(Clone)]
pub struct CacheState {
    pub config: CacheConfig,
    pub store: Arc<ResponseStore>,
    pub registry: Arc<CacheRegistry>,
}

/// Middleware for response caching.
///
/// Only caches anonymous GET requests that return 200 OK. Uses
/// `deps::with_collector()` to track tag dependencies for invalidation; the
/// request path itself is always registered so path-level invalidation works
/// without service cooperation. Bodies above `MAX_CACHED_BODY_BYTES` are
/// served but never stored.
#[instrument(skip_all, fields(path = %request.uri().path()))]
pub async fn response_cache_layer(
    State(cache): State<CacheState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    if !cache.config.is_enabled() {
        return next.run(request).await;
    }

    // Only cache GET requests
    if request.method() != Method::GET {
        return next.run(request).await;
    }

    // Authenticated scope may include drafts; never cache or serve it.
    if request
        .headers()
        .contains_key(axum::http::header::AUTHORIZATION)
    {
        return next.run(request).await;
    }

    let path = request.uri().path().to_string();
    let query = request.uri().query().unwrap_or("");
    let key = ResponseKey::new(path.clone(), query);

    if let Some(cached) = cache.store.get(&key) {
        debug!(outcome = "hit", "serving cached response");
        return build_response(cached);
    }

    debug!(outcome = "miss", "cache miss, executing handler");

    // Run with dependency collector
    let (response, mut deps) = deps::with_collector(next.run(request)).await;

    // Only cache successful responses
    if response.status() == StatusCode::OK {
        let (parts, body) = response.into_parts();
        let bytes = match axum::body::to_bytes(body, usize::MAX).await {
            Ok(bytes) => bytes,
            Err(_) => {
                // The body stream itself failed; nothing left to forward.
                return StatusCode::INTERNAL_SERVER_ERROR.into_response();
            }
        };

        if bytes.len() <= MAX_CACHED_BODY_BYTES {
            let cached = CachedResponse {
                status: parts.status.as_u16(),
                headers: parts
                    .headers
                    .iter()
                    .filter_map(|(k, v)| v.to_str().ok().map(|s| (k.to_string(), s.to_string())))
                    .collect(),
                body: bytes.clone(),
                stored_at: Instant::now(),
            };

            deps.insert(EntityKey::path(path));

            debug!(deps_count = deps.len(), "caching response");

            if let Some(evicted) = cache.store.set(key.clone(), cached) {
                cache.registry.unregister(&evicted);
            }
            cache.registry.register(key, deps);
        } else {
            debug!(body_bytes = bytes.len(), "response too large to cache");
        }

        Response::from_parts(parts, Body::from(bytes))
    } else {
        response
    }
}

/// Build a response from cached data.
fn build_response(cached: CachedResponse) -> Response {
    use axum::http::HeaderValue;

    let mut builder = Response::builder().status(cached.status);

    for (name, value) in cached.headers {
        if let Ok(header_value) = HeaderValue::from_str(&value) {
            builder = builder.header(name, header_value);
        }
    }

    builder
        .body(Body::from(cached.body))
        .unwrap_or_else(|_| StatusCode::INTERNAL_SERVER_ERROR.into_response())
}
