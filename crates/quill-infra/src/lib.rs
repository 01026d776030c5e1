//! # Quill Infrastructure
//!
//! Concrete implementations of the ports defined in `quill-core`:
//! PostgreSQL repositories via SeaORM, Argon2 password hashing, and the
//! local-disk attachment store.

pub mod auth;
pub mod database;
pub mod storage;

pub use auth::Argon2PasswordService;
pub use database::DatabaseConnection;
pub use storage::LocalFileStore;
