//! REST backend for planets, characters, users and their favorites.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod models;
pub mod response;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use config::ServerConfig;
pub use error::{AppError, ConfigError};
pub use models::{Character, Favorite, Planet, User};
pub use response::{Data, DataList};
pub use routes::{api_routes, app, status_routes};
pub use service::CrudService;
pub use state::AppState;
pub use store::{connect, ensure_database_exists, ensure_tables, Backend};
