use axum::{
    Router,
    http::StatusCode,
    routing::{get, post},
};
use serde::Serialize;

use holonet_core::health::{healthz, readyz};
use holonet_core::middleware::{
    cors_layer, propagate_request_id_layer, request_id_layer, trace_layer, trim_trailing_slash,
};

use crate::error::BlogServiceError;
use crate::handlers::{
    character::{get_character, get_characters},
    favorite::{
        add_favorite_character, add_favorite_planet, get_favorites, remove_favorite_character,
        remove_favorite_planet,
    },
    planet::{get_planet, get_planets},
    sitemap::sitemap,
    user::{get_user, get_users, hello_user},
};
use crate::state::AppState;

/// A registered route, as listed by `GET /`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Endpoint {
    pub method: &'static str,
    pub path: &'static str,
}

const fn endpoint(method: &'static str, path: &'static str) -> Endpoint {
    Endpoint { method, path }
}

/// Every route `build_router` registers. Keep in sync with the router below.
pub const ENDPOINTS: &[Endpoint] = &[
    endpoint("GET", "/"),
    endpoint("GET", "/healthz"),
    endpoint("GET", "/readyz"),
    endpoint("GET", "/user"),
    endpoint("GET", "/users"),
    endpoint("GET", "/users/{id}"),
    endpoint("GET", "/characters"),
    endpoint("GET", "/characters/{id}"),
    endpoint("GET", "/planets"),
    endpoint("GET", "/planets/{id}"),
    endpoint("GET", "/favorites"),
    endpoint("POST", "/favorite/planet/{planet_id}"),
    endpoint("DELETE", "/favorite/planet/{planet_id}"),
    endpoint("POST", "/favorite/character/{character_id}"),
    endpoint("DELETE", "/favorite/character/{character_id}"),
];

/// The full application. Paths are matched with any trailing `/` removed.
pub fn build_router(state: AppState) -> Router {
    trim_trailing_slash(routes(state))
}

fn routes(state: AppState) -> Router {
    Router::new()
        // Sitemap
        .route("/", get(sitemap))
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Users
        .route("/user", get(hello_user))
        .route("/users", get(get_users))
        .route("/users/{id}", get(get_user))
        // Catalog
        .route("/characters", get(get_characters))
        .route("/characters/{id}", get(get_character))
        .route("/planets", get(get_planets))
        .route("/planets/{id}", get(get_planet))
        // Favorites
        .route("/favorites", get(get_favorites))
        .route(
            "/favorite/planet/{planet_id}",
            post(add_favorite_planet).delete(remove_favorite_planet),
        )
        .route(
            "/favorite/character/{character_id}",
            post(add_favorite_character).delete(remove_favorite_character),
        )
        .fallback(not_found)
        .layer(propagate_request_id_layer())
        .layer(trace_layer())
        .layer(request_id_layer())
        .layer(cors_layer())
        .with_state(state)
}

async fn not_found() -> BlogServiceError {
    BlogServiceError::api(StatusCode::NOT_FOUND, "Resource not found")
}
