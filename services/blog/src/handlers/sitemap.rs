use axum::Json;
use serde::Serialize;

use crate::router::{ENDPOINTS, Endpoint};

#[derive(Debug, Serialize)]
pub struct SitemapResponse {
    pub endpoints: &'static [Endpoint],
}

// ── GET / ────────────────────────────────────────────────────────────────────

pub async fn sitemap() -> Json<SitemapResponse> {
    Json(SitemapResponse {
        endpoints: ENDPOINTS,
    })
}
