use sea_orm_migration::prelude::*;

#[tokio::main]
async fn main() {
    cli::run_cli(holonet_blog_migration::Migrator).await;
}
