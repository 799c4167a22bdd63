use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .table(UserFavorites::Table)
                    .col(UserFavorites::UserId)
                    .name("idx_user_favorites_user_id")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_user_favorites_user_id").to_owned())
            .await
    }
}

#[derive(Iden)]
enum UserFavorites {
    Table,
    UserId,
}
