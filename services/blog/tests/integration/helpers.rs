use axum_test::TestServer;
use sea_orm::{ConnectOptions, Database};
use sea_orm_migration::MigratorTrait;

use holonet_blog::domain::repository::{CharacterRepository, PlanetRepository, UserRepository};
use holonet_blog::domain::types::{Character, NewUser, Planet, User};
use holonet_blog::router::build_router;
use holonet_blog::state::AppState;
use holonet_blog_migration::Migrator;

// ── TestApp ──────────────────────────────────────────────────────────────────

/// The real router over a freshly migrated in-memory SQLite store.
pub struct TestApp {
    pub server: TestServer,
    pub state: AppState,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let mut options = ConnectOptions::new("sqlite::memory:");
        options.max_connections(1).sqlx_logging(false);
        let db = Database::connect(options).await.unwrap();
        Migrator::up(&db, None).await.unwrap();

        let state = AppState { db };
        let server = TestServer::new(build_router(state.clone())).unwrap();
        Self { server, state }
    }

    pub async fn seed_user(&self, email: &str) -> User {
        self.state
            .user_repo()
            .create(&NewUser {
                email: email.to_owned(),
                password: "blue-milk".to_owned(),
                is_active: true,
            })
            .await
            .unwrap()
    }

    pub async fn seed_character(&self, name: &str) -> Character {
        self.state.character_repo().create(name).await.unwrap()
    }

    pub async fn seed_planet(&self, name: &str) -> Planet {
        self.state.planet_repo().create(name).await.unwrap()
    }

    pub async fn favorites(&self) -> serde_json::Value {
        let response = self.server.get("/favorites").await;
        response.assert_status_ok();
        response.json()
    }
}
