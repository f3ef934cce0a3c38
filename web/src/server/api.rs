//! Read-only JSON view of the content snapshot.
//!
//! Exposes the exact record shapes the pages consume, so a replacement
//! data source can be checked against them.

use axum::{routing::get, Json, Router};
use snaploop_common::content::{fixtures, ContentSnapshot};

/// `GET /api/content.json`
pub async fn content_json() -> Json<&'static ContentSnapshot> {
    Json(fixtures())
}

/// Routes under `/api`, merged into the main router when enabled.
pub fn routes<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/api/content.json", get(content_json))
}
