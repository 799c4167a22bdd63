use axum::{Json, extract::State, http::StatusCode};
use serde::Serialize;

use crate::domain::types::{Favorite, FavoriteTarget};
use crate::error::BlogServiceError;
use crate::handlers::{IdPath, MessageResponse, row_id};
use crate::state::AppState;
use crate::usecase::favorite::{AddFavoriteUseCase, GetFavoritesUseCase, RemoveFavoriteUseCase};

/// Serialized favorite; the unused target is rendered as `null`.
#[derive(Debug, Serialize)]
pub struct FavoriteResponse {
    pub id: i32,
    pub user_id: i32,
    pub character_id: Option<i32>,
    pub planet_id: Option<i32>,
}

impl From<Favorite> for FavoriteResponse {
    fn from(favorite: Favorite) -> Self {
        Self {
            id: favorite.id,
            user_id: favorite.user_id,
            character_id: favorite.character_id,
            planet_id: favorite.planet_id,
        }
    }
}

// ── GET /favorites ───────────────────────────────────────────────────────────

pub async fn get_favorites(
    State(state): State<AppState>,
) -> Result<Json<Vec<FavoriteResponse>>, BlogServiceError> {
    let usecase = GetFavoritesUseCase {
        repo: state.favorite_repo(),
    };
    let favorites = usecase.execute().await?;
    Ok(Json(favorites.into_iter().map(FavoriteResponse::from).collect()))
}

async fn add_favorite(state: &AppState, target: FavoriteTarget) -> Result<(), BlogServiceError> {
    let usecase = AddFavoriteUseCase {
        users: state.user_repo(),
        characters: state.character_repo(),
        planets: state.planet_repo(),
        favorites: state.favorite_repo(),
    };
    usecase.execute(target).await?;
    Ok(())
}

async fn remove_favorite(
    state: &AppState,
    target: FavoriteTarget,
) -> Result<(), BlogServiceError> {
    let usecase = RemoveFavoriteUseCase {
        users: state.user_repo(),
        favorites: state.favorite_repo(),
    };
    usecase.execute(target).await
}

// ── POST /favorite/planet/{planet_id} ────────────────────────────────────────

pub async fn add_favorite_planet(
    IdPath(planet_id): IdPath<i64>,
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<MessageResponse>), BlogServiceError> {
    let planet_id = row_id(planet_id, BlogServiceError::PlanetNotFound)?;
    add_favorite(&state, FavoriteTarget::Planet(planet_id)).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            msg: "Planet added to favorites",
        }),
    ))
}

// ── POST /favorite/character/{character_id} ──────────────────────────────────

pub async fn add_favorite_character(
    IdPath(character_id): IdPath<i64>,
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<MessageResponse>), BlogServiceError> {
    let character_id = row_id(character_id, BlogServiceError::CharacterNotFound)?;
    add_favorite(&state, FavoriteTarget::Character(character_id)).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            msg: "Character added to favorites",
        }),
    ))
}

// ── DELETE /favorite/planet/{planet_id} ──────────────────────────────────────

pub async fn remove_favorite_planet(
    IdPath(planet_id): IdPath<i64>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, BlogServiceError> {
    let planet_id = row_id(planet_id, BlogServiceError::FavoriteNotFound)?;
    remove_favorite(&state, FavoriteTarget::Planet(planet_id)).await?;
    Ok(Json(MessageResponse {
        msg: "Planet removed from favorites",
    }))
}

// ── DELETE /favorite/character/{character_id} ────────────────────────────────

pub async fn remove_favorite_character(
    IdPath(character_id): IdPath<i64>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, BlogServiceError> {
    let character_id = row_id(character_id, BlogServiceError::FavoriteNotFound)?;
    remove_favorite(&state, FavoriteTarget::Character(character_id)).await?;
    Ok(Json(MessageResponse {
        msg: "Character removed from favorites",
    }))
}
