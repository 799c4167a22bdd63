use axum::{Json, extract::State};
use serde::Serialize;

use crate::domain::types::User;
use crate::error::BlogServiceError;
use crate::handlers::{IdPath, MessageResponse, row_id};
use crate::state::AppState;
use crate::usecase::user::{GetUserUseCase, GetUsersUseCase};

/// Public view of a user; never carries the password.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i32,
    pub email: String,
    pub is_active: bool,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            is_active: user.is_active,
        }
    }
}

// ── GET /users ───────────────────────────────────────────────────────────────

pub async fn get_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, BlogServiceError> {
    let usecase = GetUsersUseCase {
        repo: state.user_repo(),
    };
    let users = usecase.execute().await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

// ── GET /users/{id} ──────────────────────────────────────────────────────────

pub async fn get_user(
    IdPath(id): IdPath<i64>,
    State(state): State<AppState>,
) -> Result<Json<UserResponse>, BlogServiceError> {
    let id = row_id(id, BlogServiceError::UserNotFound)?;
    let usecase = GetUserUseCase {
        repo: state.user_repo(),
    };
    let user = usecase.execute(id).await?;
    Ok(Json(user.into()))
}

// ── GET /user ────────────────────────────────────────────────────────────────

pub async fn hello_user() -> Json<MessageResponse> {
    Json(MessageResponse {
        msg: "Hello, this is your GET /user response ",
    })
}
