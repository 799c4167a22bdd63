use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserFavorites::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UserFavorites::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(UserFavorites::UserId).integer().not_null())
                    .col(ColumnDef::new(UserFavorites::CharacterId).integer().null())
                    .col(ColumnDef::new(UserFavorites::PlanetId).integer().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_favorites_user_id")
                            .from(UserFavorites::Table, UserFavorites::UserId)
                            .to(Users::Table, Users::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_favorites_character_id")
                            .from(UserFavorites::Table, UserFavorites::CharacterId)
                            .to(Characters::Table, Characters::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_favorites_planet_id")
                            .from(UserFavorites::Table, UserFavorites::PlanetId)
                            .to(Planets::Table, Planets::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserFavorites::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum UserFavorites {
    Table,
    Id,
    UserId,
    CharacterId,
    PlanetId,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}

#[derive(Iden)]
enum Characters {
    Table,
    Id,
}

#[derive(Iden)]
enum Planets {
    Table,
    Id,
}
