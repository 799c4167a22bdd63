#![allow(async_fn_in_trait)]

use crate::domain::types::{Character, Favorite, FavoriteTarget, NewUser, Planet, User};
use crate::error::BlogServiceError;

/// Repository for catalog characters.
pub trait CharacterRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Character>, BlogServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Character>, BlogServiceError>;
    async fn create(&self, name: &str) -> Result<Character, BlogServiceError>;
}

/// Repository for catalog planets.
pub trait PlanetRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Planet>, BlogServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Planet>, BlogServiceError>;
    async fn create(&self, name: &str) -> Result<Planet, BlogServiceError>;
}

/// Repository for users.
pub trait UserRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<User>, BlogServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, BlogServiceError>;
    /// The user with the lowest id; favorites act on this user.
    async fn find_first(&self) -> Result<Option<User>, BlogServiceError>;
    async fn create(&self, user: &NewUser) -> Result<User, BlogServiceError>;
}

/// Repository for user favorites.
pub trait FavoriteRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Favorite>, BlogServiceError>;

    /// First favorite of `user_id` pointing at `target`.
    async fn find(
        &self,
        user_id: i32,
        target: FavoriteTarget,
    ) -> Result<Option<Favorite>, BlogServiceError>;

    async fn create(
        &self,
        user_id: i32,
        target: FavoriteTarget,
    ) -> Result<Favorite, BlogServiceError>;

    /// Delete a favorite. Returns `true` if a row was deleted.
    async fn delete(&self, id: i32) -> Result<bool, BlogServiceError>;
}
