use axum::extract::FromRef;
use sea_orm::DatabaseConnection;

use crate::infra::db::{
    DbCharacterRepository, DbFavoriteRepository, DbPlanetRepository, DbUserRepository,
};

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone, FromRef)]
pub struct AppState {
    pub db: DatabaseConnection,
}

impl AppState {
    pub fn character_repo(&self) -> DbCharacterRepository {
        DbCharacterRepository {
            db: self.db.clone(),
        }
    }

    pub fn planet_repo(&self) -> DbPlanetRepository {
        DbPlanetRepository {
            db: self.db.clone(),
        }
    }

    pub fn user_repo(&self) -> DbUserRepository {
        DbUserRepository {
            db: self.db.clone(),
        }
    }

    pub fn favorite_repo(&self) -> DbFavoriteRepository {
        DbFavoriteRepository {
            db: self.db.clone(),
        }
    }
}
