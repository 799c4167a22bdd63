use sea_orm::Database;
use sea_orm_migration::MigratorTrait;
use tracing::info;

use holonet_blog::config::BlogConfig;
use holonet_blog::router::build_router;
use holonet_blog::state::AppState;
use holonet_blog_migration::Migrator;
use holonet_core::tracing::init_tracing;

#[tokio::main]
async fn main() {
    init_tracing();

    let config = BlogConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    Migrator::up(&db, None)
        .await
        .expect("failed to apply migrations");
    info!("database schema up to date");

    let state = AppState { db };

    let router = build_router(state);
    let http_addr = config.http_addr();
    let listener = tokio::net::TcpListener::bind(&http_addr)
        .await
        .expect("failed to bind");

    info!("blog service listening on {http_addr}");
    axum::serve(listener, router).await.expect("server error");
}
