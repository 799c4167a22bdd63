use anyhow::Context as _;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ActiveValue::Set, ColumnTrait, DatabaseConnection,
    EntityTrait, QueryFilter, QueryOrder,
};

use holonet_blog_schema::{characters, planets, user_favorites, users};

use crate::domain::repository::{
    CharacterRepository, FavoriteRepository, PlanetRepository, UserRepository,
};
use crate::domain::types::{Character, Favorite, FavoriteTarget, NewUser, Planet, User};
use crate::error::BlogServiceError;

// ── Character repository ─────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbCharacterRepository {
    pub db: DatabaseConnection,
}

impl CharacterRepository for DbCharacterRepository {
    async fn list(&self) -> Result<Vec<Character>, BlogServiceError> {
        let models = characters::Entity::find()
            .all(&self.db)
            .await
            .context("list characters")?;
        Ok(models.into_iter().map(character_from_model).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Character>, BlogServiceError> {
        let model = characters::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find character by id")?;
        Ok(model.map(character_from_model))
    }

    async fn create(&self, name: &str) -> Result<Character, BlogServiceError> {
        let model = characters::ActiveModel {
            id: NotSet,
            name: Set(name.to_owned()),
        }
        .insert(&self.db)
        .await
        .context("insert character")?;
        Ok(character_from_model(model))
    }
}

fn character_from_model(model: characters::Model) -> Character {
    Character {
        id: model.id,
        name: model.name,
    }
}

// ── Planet repository ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbPlanetRepository {
    pub db: DatabaseConnection,
}

impl PlanetRepository for DbPlanetRepository {
    async fn list(&self) -> Result<Vec<Planet>, BlogServiceError> {
        let models = planets::Entity::find()
            .all(&self.db)
            .await
            .context("list planets")?;
        Ok(models.into_iter().map(planet_from_model).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Planet>, BlogServiceError> {
        let model = planets::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find planet by id")?;
        Ok(model.map(planet_from_model))
    }

    async fn create(&self, name: &str) -> Result<Planet, BlogServiceError> {
        let model = planets::ActiveModel {
            id: NotSet,
            name: Set(name.to_owned()),
        }
        .insert(&self.db)
        .await
        .context("insert planet")?;
        Ok(planet_from_model(model))
    }
}

fn planet_from_model(model: planets::Model) -> Planet {
    Planet {
        id: model.id,
        name: model.name,
    }
}

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

impl UserRepository for DbUserRepository {
    async fn list(&self) -> Result<Vec<User>, BlogServiceError> {
        let models = users::Entity::find()
            .all(&self.db)
            .await
            .context("list users")?;
        Ok(models.into_iter().map(user_from_model).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<User>, BlogServiceError> {
        let model = users::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find user by id")?;
        Ok(model.map(user_from_model))
    }

    async fn find_first(&self) -> Result<Option<User>, BlogServiceError> {
        let model = users::Entity::find()
            .order_by_asc(users::Column::Id)
            .one(&self.db)
            .await
            .context("find first user")?;
        Ok(model.map(user_from_model))
    }

    async fn create(&self, user: &NewUser) -> Result<User, BlogServiceError> {
        let model = users::ActiveModel {
            id: NotSet,
            email: Set(user.email.clone()),
            password: Set(user.password.clone()),
            is_active: Set(user.is_active),
        }
        .insert(&self.db)
        .await
        .context("insert user")?;
        Ok(user_from_model(model))
    }
}

fn user_from_model(model: users::Model) -> User {
    User {
        id: model.id,
        email: model.email,
        password: model.password,
        is_active: model.is_active,
    }
}

// ── Favorite repository ──────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbFavoriteRepository {
    pub db: DatabaseConnection,
}

impl FavoriteRepository for DbFavoriteRepository {
    async fn list(&self) -> Result<Vec<Favorite>, BlogServiceError> {
        let models = user_favorites::Entity::find()
            .all(&self.db)
            .await
            .context("list favorites")?;
        Ok(models.into_iter().map(favorite_from_model).collect())
    }

    async fn find(
        &self,
        user_id: i32,
        target: FavoriteTarget,
    ) -> Result<Option<Favorite>, BlogServiceError> {
        let query = user_favorites::Entity::find()
            .filter(user_favorites::Column::UserId.eq(user_id));
        let query = match target {
            FavoriteTarget::Character(id) => {
                query.filter(user_favorites::Column::CharacterId.eq(id))
            }
            FavoriteTarget::Planet(id) => query.filter(user_favorites::Column::PlanetId.eq(id)),
        };
        let model = query
            .order_by_asc(user_favorites::Column::Id)
            .one(&self.db)
            .await
            .context("find favorite")?;
        Ok(model.map(favorite_from_model))
    }

    async fn create(
        &self,
        user_id: i32,
        target: FavoriteTarget,
    ) -> Result<Favorite, BlogServiceError> {
        let model = user_favorites::ActiveModel {
            id: NotSet,
            user_id: Set(user_id),
            character_id: Set(target.character_id()),
            planet_id: Set(target.planet_id()),
        }
        .insert(&self.db)
        .await
        .context("insert favorite")?;
        Ok(favorite_from_model(model))
    }

    async fn delete(&self, id: i32) -> Result<bool, BlogServiceError> {
        let result = user_favorites::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete favorite")?;
        Ok(result.rows_affected > 0)
    }
}

fn favorite_from_model(model: user_favorites::Model) -> Favorite {
    Favorite {
        id: model.id,
        user_id: model.user_id,
        character_id: model.character_id,
        planet_id: model.planet_id,
    }
}
