use sea_orm_migration::prelude::*;

mod m20250214_000001_create_users;
mod m20250214_000002_create_characters;
mod m20250214_000003_create_planets;
mod m20250214_000004_create_user_favorites;
mod m20250214_000005_add_user_favorites_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250214_000001_create_users::Migration),
            Box::new(m20250214_000002_create_characters::Migration),
            Box::new(m20250214_000003_create_planets::Migration),
            Box::new(m20250214_000004_create_user_favorites::Migration),
            Box::new(m20250214_000005_add_user_favorites_indexes::Migration),
        ]
    }
}
