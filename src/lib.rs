pub mod config;
pub mod db;
pub mod deck;
pub mod error;
pub mod handlers;
pub mod pptx;
pub mod router;
pub mod service;
pub mod types;

pub use error::LyricsError;
pub use router::{LyricsState, lyrics_router};
