/// A character from the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Character {
    pub id: i32,
    pub name: String,
}

/// A planet from the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Planet {
    pub id: i32,
    pub name: String,
}

/// A blog user. The password is kept as stored and must never be serialized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub password: String,
    pub is_active: bool,
}

/// Fields for a user that does not exist yet.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password: String,
    pub is_active: bool,
}

/// A stored favorite row. Target columns are read as-is, so a row written
/// outside this service may carry both targets or neither.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Favorite {
    pub id: i32,
    pub user_id: i32,
    pub character_id: Option<i32>,
    pub planet_id: Option<i32>,
}

/// What a favorite points at. Favorites created or looked up through the
/// API always name exactly one target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteTarget {
    Character(i32),
    Planet(i32),
}

impl FavoriteTarget {
    pub fn character_id(self) -> Option<i32> {
        match self {
            Self::Character(id) => Some(id),
            Self::Planet(_) => None,
        }
    }

    pub fn planet_id(self) -> Option<i32> {
        match self {
            Self::Planet(id) => Some(id),
            Self::Character(_) => None,
        }
    }
}

impl Favorite {
    /// Whether this row is the user's favorite of `target`.
    pub fn matches(&self, user_id: i32, target: FavoriteTarget) -> bool {
        if self.user_id != user_id {
            return false;
        }
        match target {
            FavoriteTarget::Character(id) => self.character_id == Some(id),
            FavoriteTarget::Planet(id) => self.planet_id == Some(id),
        }
    }
}
