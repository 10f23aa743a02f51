//! Database module: models and schema for persistent storage.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows
//! - `schema.rs`: SQL DDL for initializing the database (SQLite-first)
//! - `sqlite.rs`: the repository issuing explicit queries

pub mod models;
pub mod schema;
pub mod sqlite;

pub use models::{DbSong, DbUser, SongPatch};
pub use schema::SQLITE_INIT;
pub use sqlite::{LyricsStorage, SqlitePool};
