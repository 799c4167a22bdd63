use axum::extract::rejection::PathRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Blog service error variants.
#[derive(Debug, thiserror::Error)]
pub enum BlogServiceError {
    #[error("Character not found")]
    CharacterNotFound,
    #[error("Planet not found")]
    PlanetNotFound,
    #[error("User not found")]
    UserNotFound,
    #[error("Favorite not found")]
    FavoriteNotFound,
    /// Application error carrying its own status code.
    #[error("{message}")]
    Api { status: StatusCode, message: String },
    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl BlogServiceError {
    pub fn api(status: StatusCode, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::CharacterNotFound => "CHARACTER_NOT_FOUND",
            Self::PlanetNotFound => "PLANET_NOT_FOUND",
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::FavoriteNotFound => "FAVORITE_NOT_FOUND",
            Self::Api { .. } => "API_ERROR",
            Self::Internal(_) => "INTERNAL",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::CharacterNotFound
            | Self::PlanetNotFound
            | Self::UserNotFound
            | Self::FavoriteNotFound => StatusCode::NOT_FOUND,
            Self::Api { status, .. } => *status,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<PathRejection> for BlogServiceError {
    fn from(rejection: PathRejection) -> Self {
        Self::api(rejection.status(), rejection.body_text())
    }
}

impl IntoResponse for BlogServiceError {
    fn into_response(self) -> Response {
        let status = self.status();
        // 4xx are expected client errors and already show up in the trace layer.
        if let Self::Internal(ref e) = self {
            tracing::error!(error = ?e, kind = "INTERNAL", "internal error");
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "msg": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
