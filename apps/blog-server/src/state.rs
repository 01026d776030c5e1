//! Application state - shared across all handlers.

use std::sync::Arc;

use anyhow::Context;

use quill_core::ports::{FileStore, PasswordService, PostRepository, SessionRepository, UserRepository};
use quill_infra::auth::Argon2PasswordService;
use quill_infra::database::{
    DatabaseConnection, PostgresPostRepository, PostgresSessionRepository, PostgresUserRepository,
};
use quill_infra::storage::LocalFileStore;

use crate::config::AppConfig;

/// Shared application state. Handlers receive this instead of reaching for
/// module-level globals.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub posts: Arc<dyn PostRepository>,
    pub sessions: Arc<dyn SessionRepository>,
    pub files: Arc<dyn FileStore>,
    pub passwords: Arc<dyn PasswordService>,
}

impl AppState {
    /// Build the application state. A missing or unreachable store is fatal
    /// to application readiness, so this errors instead of degrading.
    pub async fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let db_config = config
            .database
            .as_ref()
            .context("DATABASE_URL is not set")?;

        let db = DatabaseConnection::init(db_config)
            .await
            .context("Failed to connect to database")?;

        let files = LocalFileStore::init(config.uploads_dir.clone())
            .await
            .context("Failed to prepare uploads directory")?;

        tracing::info!("Application state initialized");

        Ok(Self {
            users: Arc::new(PostgresUserRepository::new(db.conn.clone())),
            posts: Arc::new(PostgresPostRepository::new(db.conn.clone())),
            sessions: Arc::new(PostgresSessionRepository::new(db.conn)),
            files: Arc::new(files),
            passwords: Arc::new(Argon2PasswordService::new()),
        })
    }
}
