use axum::{Json, extract::State};
use serde::Serialize;

use crate::domain::types::Character;
use crate::error::BlogServiceError;
use crate::handlers::{IdPath, row_id};
use crate::state::AppState;
use crate::usecase::character::{GetCharacterUseCase, GetCharactersUseCase};

#[derive(Debug, Serialize)]
pub struct CharacterResponse {
    pub id: i32,
    pub name: String,
}

impl From<Character> for CharacterResponse {
    fn from(character: Character) -> Self {
        Self {
            id: character.id,
            name: character.name,
        }
    }
}

// ── GET /characters ──────────────────────────────────────────────────────────

pub async fn get_characters(
    State(state): State<AppState>,
) -> Result<Json<Vec<CharacterResponse>>, BlogServiceError> {
    let usecase = GetCharactersUseCase {
        repo: state.character_repo(),
    };
    let characters = usecase.execute().await?;
    Ok(Json(characters.into_iter().map(CharacterResponse::from).collect()))
}

// ── GET /characters/{id} ─────────────────────────────────────────────────────

pub async fn get_character(
    IdPath(id): IdPath<i64>,
    State(state): State<AppState>,
) -> Result<Json<CharacterResponse>, BlogServiceError> {
    let id = row_id(id, BlogServiceError::CharacterNotFound)?;
    let usecase = GetCharacterUseCase {
        repo: state.character_repo(),
    };
    let character = usecase.execute(id).await?;
    Ok(Json(character.into()))
}
