//! Row types as stored and serialized, plus the typed request bodies that create them.

use crate::sql::TableRef;
use serde::{Deserialize, Serialize};
use sqlx::any::AnyRow;
use sqlx::{FromRow, Row};

/// A persisted entity that the generic list / read / delete paths can serve.
pub trait Record: for<'r> FromRow<'r, AnyRow> + Serialize + Send + Unpin + 'static {
    const TABLE: TableRef;
    /// Singular name used in log lines and not-found messages.
    const KIND: &'static str;
}

#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Planet {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub diameter: String,
}

impl Record for Planet {
    const TABLE: TableRef = TableRef {
        name: "planets",
        columns: &["id", "name", "description", "diameter"],
    };
    const KIND: &'static str = "planet";
}

#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Character {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub gender: Option<String>,
    pub height: Option<i64>,
}

impl Record for Character {
    const TABLE: TableRef = TableRef {
        name: "characters",
        columns: &["id", "name", "description", "gender", "height"],
    };
    const KIND: &'static str = "character";
}

/// `password` is read back from the store but never leaves the process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub is_active: bool,
}

/// `is_active` arrives as a boolean from PostgreSQL and as a 0/1 integer from SQLite.
impl<'r> FromRow<'r, AnyRow> for User {
    fn from_row(row: &'r AnyRow) -> Result<Self, sqlx::Error> {
        Ok(User {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            email: row.try_get("email")?,
            password: row.try_get("password")?,
            is_active: flag(row, "is_active")?,
        })
    }
}

fn flag(row: &AnyRow, column: &str) -> Result<bool, sqlx::Error> {
    match row.try_get::<bool, _>(column) {
        Ok(b) => Ok(b),
        Err(_) => row.try_get::<i64, _>(column).map(|n| n != 0),
    }
}

impl Record for User {
    const TABLE: TableRef = TableRef {
        name: "users",
        columns: &["id", "name", "email", "password", "is_active"],
    };
    const KIND: &'static str = "user";
}

#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Favorite {
    pub id: i64,
    pub user_id: i64,
    pub planet_id: Option<i64>,
    pub character_id: Option<i64>,
}

impl Record for Favorite {
    const TABLE: TableRef = TableRef {
        name: "favorites",
        columns: &["id", "user_id", "planet_id", "character_id"],
    };
    const KIND: &'static str = "favorite";
}

/// POST /planets. `id` is optional; the store assigns one when absent.
#[derive(Debug, Clone, Deserialize)]
pub struct NewPlanet {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    pub description: String,
    pub diameter: String,
}

/// POST /people.
#[derive(Debug, Clone, Deserialize)]
pub struct NewCharacter {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub height: Option<i64>,
}

/// POST /user. `id` is optional; the store assigns one when absent.
#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    pub email: String,
    pub password: String,
    pub is_active: bool,
}

/// POST /favorite/planets/:id.
#[derive(Debug, Clone, Deserialize)]
pub struct FavoritePlanetRequest {
    pub user_id: i64,
    #[serde(default)]
    pub planet_id: Option<i64>,
}

/// POST /favorite/characters/:id.
#[derive(Debug, Clone, Deserialize)]
pub struct FavoriteCharacterRequest {
    pub user_id: i64,
    #[serde(default)]
    pub character_id: Option<i64>,
}

/// Insert shape shared by both favorite endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFavorite {
    pub user_id: i64,
    pub planet_id: Option<i64>,
    pub character_id: Option<i64>,
}

impl NewFavorite {
    pub fn planet(user_id: i64, planet_id: i64) -> Self {
        NewFavorite {
            user_id,
            planet_id: Some(planet_id),
            character_id: None,
        }
    }

    pub fn character(user_id: i64, character_id: i64) -> Self {
        NewFavorite {
            user_id,
            planet_id: None,
            character_id: Some(character_id),
        }
    }
}
