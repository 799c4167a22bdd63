//! sea-orm entities for the blog service tables.

pub mod characters;
pub mod planets;
pub mod user_favorites;
pub mod users;
