pub mod accounts;
pub mod deck;
pub mod songs;
