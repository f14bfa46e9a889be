//! SQLite persistence for normalized weather rows and the photo journal
//!
//! The store is an explicit handle with an open/close lifecycle -- callers
//! construct it once and pass it down, there is no process-wide instance.

pub mod rows;
pub mod store;

pub use rows::*;
pub use store::*;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Corrupt row: {0}")]
    Corrupt(String),
}

pub type StoreResult<T> = Result<T, StoreError>;
