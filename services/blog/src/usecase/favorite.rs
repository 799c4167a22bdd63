use crate::domain::repository::{
    CharacterRepository, FavoriteRepository, PlanetRepository, UserRepository,
};
use crate::domain::types::{Favorite, FavoriteTarget, User};
use crate::error::BlogServiceError;

// Favorites are not scoped to a caller: every mutation acts on the first user.
async fn current_user<U: UserRepository>(users: &U) -> Result<User, BlogServiceError> {
    users
        .find_first()
        .await?
        .ok_or(BlogServiceError::UserNotFound)
}

// ── GetFavorites ─────────────────────────────────────────────────────────────

pub struct GetFavoritesUseCase<F: FavoriteRepository> {
    pub repo: F,
}

impl<F: FavoriteRepository> GetFavoritesUseCase<F> {
    pub async fn execute(&self) -> Result<Vec<Favorite>, BlogServiceError> {
        self.repo.list().await
    }
}

// ── AddFavorite ──────────────────────────────────────────────────────────────

pub struct AddFavoriteUseCase<U, C, P, F>
where
    U: UserRepository,
    C: CharacterRepository,
    P: PlanetRepository,
    F: FavoriteRepository,
{
    pub users: U,
    pub characters: C,
    pub planets: P,
    pub favorites: F,
}

impl<U, C, P, F> AddFavoriteUseCase<U, C, P, F>
where
    U: UserRepository,
    C: CharacterRepository,
    P: PlanetRepository,
    F: FavoriteRepository,
{
    pub async fn execute(&self, target: FavoriteTarget) -> Result<Favorite, BlogServiceError> {
        let user = current_user(&self.users).await?;
        match target {
            FavoriteTarget::Character(id) => {
                self.characters
                    .find_by_id(id)
                    .await?
                    .ok_or(BlogServiceError::CharacterNotFound)?;
            }
            FavoriteTarget::Planet(id) => {
                self.planets
                    .find_by_id(id)
                    .await?
                    .ok_or(BlogServiceError::PlanetNotFound)?;
            }
        }
        let favorite = self.favorites.create(user.id, target).await?;
        tracing::info!(
            favorite_id = favorite.id,
            user_id = user.id,
            ?target,
            "favorite added"
        );
        Ok(favorite)
    }
}

// ── RemoveFavorite ───────────────────────────────────────────────────────────

pub struct RemoveFavoriteUseCase<U: UserRepository, F: FavoriteRepository> {
    pub users: U,
    pub favorites: F,
}

impl<U: UserRepository, F: FavoriteRepository> RemoveFavoriteUseCase<U, F> {
    pub async fn execute(&self, target: FavoriteTarget) -> Result<(), BlogServiceError> {
        let user = current_user(&self.users).await?;
        let favorite = self
            .favorites
            .find(user.id, target)
            .await?
            .ok_or(BlogServiceError::FavoriteNotFound)?;
        // A concurrent delete may have won between find and delete.
        if !self.favorites.delete(favorite.id).await? {
            return Err(BlogServiceError::FavoriteNotFound);
        }
        tracing::info!(
            favorite_id = favorite.id,
            user_id = user.id,
            ?target,
            "favorite removed"
        );
        Ok(())
    }
}
