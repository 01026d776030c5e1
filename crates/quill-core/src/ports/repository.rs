use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Post, Session, User};
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
///
/// `insert` and `update` are distinct because entity ids are minted by the
/// application: an update that matches no row reports `RepoError::NotFound`
/// instead of creating one, so an edit racing a delete cannot resurrect a
/// record.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Persist a new entity.
    async fn insert(&self, entity: T) -> Result<T, RepoError>;

    /// Update an existing entity.
    async fn update(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// User repository with domain-specific methods.
#[async_trait]
pub trait UserRepository: BaseRepository<User, Uuid> {
    /// Find a user by their unique username.
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepoError>;
}

/// Post repository.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, Uuid> {
    /// All posts authored by the given user.
    async fn list_by_author(&self, author_id: Uuid) -> Result<Vec<Post>, RepoError>;
}

/// Session repository.
#[async_trait]
pub trait SessionRepository: BaseRepository<Session, Uuid> {}
