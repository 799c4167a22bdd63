use crate::domain::repository::UserRepository;
use crate::domain::types::User;
use crate::error::BlogServiceError;

// ── GetUsers ─────────────────────────────────────────────────────────────────

pub struct GetUsersUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> GetUsersUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<User>, BlogServiceError> {
        self.repo.list().await
    }
}

// ── GetUser ──────────────────────────────────────────────────────────────────

pub struct GetUserUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> GetUserUseCase<R> {
    pub async fn execute(&self, id: i32) -> Result<User, BlogServiceError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(BlogServiceError::UserNotFound)
    }
}
