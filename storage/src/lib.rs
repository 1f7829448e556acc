//! Storage crate: registration records and the user store abstraction.
//!
//! ## Modules
//!
//! - [`error`] – Storage error types
//! - [`models`] – UserRecord, SampleSize
//! - [`repository`] – UserStore trait
//! - [`user_repo`] – UserRepository (SQLite)
//! - [`sqlite_pool`] – SqlitePoolManager

mod error;
mod models;
mod repository;
mod sqlite_pool;
mod user_repo;

pub use error::StorageError;
pub use models::{SampleSize, UserRecord};
pub use repository::UserStore;
pub use sqlite_pool::SqlitePoolManager;
pub use user_repo::UserRepository;
