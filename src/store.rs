//! Store setup: backend detection from `DATABASE_URL`, database creation, pool, and table DDL.
//! Tables are created with `IF NOT EXISTS` on every start so the binary works against an empty database.

use crate::error::{AppError, ConfigError};
use sqlx::any::AnyPoolOptions;
use sqlx::migrate::MigrateDatabase;
use sqlx::{Any, AnyPool};

/// Which SQL dialect sits behind the `Any` pool. DDL and identity bookkeeping differ between the two.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Backend {
    Postgres,
    Sqlite,
}

impl Backend {
    pub fn from_url(url: &str) -> Result<Self, ConfigError> {
        let scheme = url.split(':').next().unwrap_or("").to_ascii_lowercase();
        match scheme.as_str() {
            "postgres" | "postgresql" => Ok(Backend::Postgres),
            "sqlite" => Ok(Backend::Sqlite),
            _ => Err(ConfigError::UnsupportedDatabase(url.to_string())),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Backend::Postgres => "postgres",
            Backend::Sqlite => "sqlite",
        }
    }

    /// PostgreSQL identity sequences do not move when a row is inserted with an explicit id.
    pub fn syncs_identity_after_explicit_id(self) -> bool {
        matches!(self, Backend::Postgres)
    }

    fn id_column(self) -> &'static str {
        match self {
            Backend::Postgres => "id BIGINT GENERATED BY DEFAULT AS IDENTITY PRIMARY KEY",
            Backend::Sqlite => "id INTEGER PRIMARY KEY AUTOINCREMENT",
        }
    }

    /// The `Any` driver has no mapping for SQLite's `BOOLEAN` affinity, so flags are stored as 0/1 integers there.
    fn flag_type(self) -> &'static str {
        match self {
            Backend::Postgres => "BOOLEAN",
            Backend::Sqlite => "INTEGER",
        }
    }
}

/// Create the database named in `database_url` if it does not exist yet (file for SQLite, `CREATE DATABASE` for PostgreSQL).
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    sqlx::any::install_default_drivers();
    Backend::from_url(database_url)?;
    if !Any::database_exists(database_url).await? {
        tracing::info!("database does not exist, creating it");
        Any::create_database(database_url).await?;
    }
    Ok(())
}

pub async fn connect(database_url: &str, max_connections: u32) -> Result<AnyPool, AppError> {
    sqlx::any::install_default_drivers();
    let pool = AnyPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;
    Ok(pool)
}

fn table_ddl(backend: Backend) -> [String; 4] {
    let id = backend.id_column();
    let flag = backend.flag_type();
    [
        format!(
            r#"
            CREATE TABLE IF NOT EXISTS planets (
                {},
                name VARCHAR(120) NOT NULL UNIQUE,
                description VARCHAR(80) NOT NULL,
                diameter VARCHAR(80) NOT NULL
            )
            "#,
            id
        ),
        format!(
            r#"
            CREATE TABLE IF NOT EXISTS characters (
                {},
                name VARCHAR(80) NOT NULL UNIQUE,
                description VARCHAR(250),
                gender VARCHAR(80),
                height BIGINT
            )
            "#,
            id
        ),
        format!(
            r#"
            CREATE TABLE IF NOT EXISTS users (
                {},
                name VARCHAR(120) NOT NULL,
                email VARCHAR(120) NOT NULL UNIQUE,
                password VARCHAR(80) NOT NULL,
                is_active {} NOT NULL
            )
            "#,
            id, flag
        ),
        format!(
            r#"
            CREATE TABLE IF NOT EXISTS favorites (
                {},
                user_id BIGINT NOT NULL REFERENCES users (id) ON DELETE CASCADE,
                planet_id BIGINT REFERENCES planets (id) ON DELETE CASCADE,
                character_id BIGINT REFERENCES characters (id) ON DELETE CASCADE
            )
            "#,
            id
        ),
    ]
}

/// Create planets, characters, users and favorites (in FK order) if missing.
pub async fn ensure_tables(pool: &AnyPool, backend: Backend) -> Result<(), AppError> {
    for ddl in table_ddl(backend) {
        sqlx::query(&ddl).execute(pool).await?;
    }
    tracing::debug!(?backend, "tables ensured");
    Ok(())
}
