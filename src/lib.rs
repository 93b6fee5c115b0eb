pub mod cli;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod notes;
pub mod platform;
pub mod session;
pub mod store;

pub use db::Database;
pub use session::NoteSession;
