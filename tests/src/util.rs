use std::sync::Arc;

use axum::Router;
use axum::body::{self, Body};
use axum::http::{Request, StatusCode};
use cafe_core::catalog::InMemoryCatalog;
use cafe_core::http;
use cafe_core::resolver::QueryResolver;
use tower::ServiceExt;

pub fn builtin_router() -> Router {
    http::router(QueryResolver::new(Arc::new(InMemoryCatalog::builtin().unwrap())))
}

/// Percent-encodes everything but ASCII alphanumerics.
pub fn encode(s: &str) -> String {
    s.bytes()
        .map(|b| match b {
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' => (b as char).to_string(),
            _ => format!("%{b:02X}"),
        })
        .collect()
}

pub async fn get(router: &Router, uri: &str) -> anyhow::Result<(StatusCode, String)> {
    let request = Request::builder().method("GET").uri(uri).body(Body::empty())?;
    let response = router.clone().oneshot(request).await?;

    let status = response.status();
    let bytes = body::to_bytes(response.into_body(), usize::MAX).await?;
    Ok((status, String::from_utf8(bytes.to_vec())?))
}

/// Splits a rendered payload on commas, one `name (address)` entry per piece.
pub fn entries(body: &str) -> Vec<&str> {
    if body.trim().is_empty() {
        return Vec::new();
    }
    body.split(',').map(str::trim).collect()
}
