//! # HTTP Transport
//!
//! Exposes the [`QueryResolver`] as `GET /cafe`.
//!
//! The transport only decodes the query string and maps the outcome to a
//! status code:
//! * success: `200` with the rendered cafés (possibly empty);
//! * [`QueryError`]: `400` with the error message as plain text.

use std::net::SocketAddr;

use anyhow::Context;
use axum::Router;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use tokio::net::TcpListener;
use tracing::{info, warn};

use cafe_common::error::QueryError;
use cafe_common::models::query::CafeQuery;

use crate::resolver::QueryResolver;

pub const CAFE_PATH: &str = "/cafe";

/// Transport-side wrapper turning a [`QueryError`] into a response.
#[derive(Debug)]
pub struct HttpError(pub QueryError);

impl From<QueryError> for HttpError {
    fn from(err: QueryError) -> Self {
        Self(err)
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, self.0.to_string()).into_response()
    }
}

pub fn router(resolver: QueryResolver) -> Router {
    Router::new()
        .route(CAFE_PATH, get(cafe_handler))
        .with_state(resolver)
}

async fn cafe_handler(
    State(resolver): State<QueryResolver>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<String, HttpError> {
    let query = CafeQuery::from_pairs(pairs);
    let payload = resolver
        .respond(&query)
        .inspect_err(|err| warn!("Rejected {query:?}: {err}"))?;
    Ok(payload)
}

/// Binds `addr` and serves the router until Ctrl-C.
pub async fn serve(addr: SocketAddr, resolver: QueryResolver) -> anyhow::Result<()> {
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    info!("Listening on http://{}{CAFE_PATH}", listener.local_addr()?);

    axum::serve(listener, router(resolver))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serving http")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutting down"),
        Err(err) => {
            warn!("Cannot listen for Ctrl-C: {err}");
            std::future::pending::<()>().await;
        }
    }
}
