use crate::domain::repository::CharacterRepository;
use crate::domain::types::Character;
use crate::error::BlogServiceError;

// ── GetCharacters ────────────────────────────────────────────────────────────

pub struct GetCharactersUseCase<R: CharacterRepository> {
    pub repo: R,
}

impl<R: CharacterRepository> GetCharactersUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<Character>, BlogServiceError> {
        self.repo.list().await
    }
}

// ── GetCharacter ─────────────────────────────────────────────────────────────

pub struct GetCharacterUseCase<R: CharacterRepository> {
    pub repo: R,
}

impl<R: CharacterRepository> GetCharacterUseCase<R> {
    pub async fn execute(&self, id: i32) -> Result<Character, BlogServiceError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(BlogServiceError::CharacterNotFound)
    }
}
