pub mod accounts;
pub mod password;
pub mod songs;

pub use accounts::AccountService;
pub use songs::SongService;
