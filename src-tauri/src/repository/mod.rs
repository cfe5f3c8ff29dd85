//! Repository Layer
//!
//! Data access abstractions and implementations.

mod traits;
pub mod db;
mod kv_repo;
mod session_repo;

#[cfg(test)]
mod tests;

pub use traits::{Repository, KeyValueStore};
pub use db::{init_db, DbState};
pub use kv_repo::SqliteKvStore;
pub use session_repo::{SessionStore, TOKEN_KEY};
