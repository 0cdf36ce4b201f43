//! Store contracts. The flows only ever see these traits; Postgres provides
//! the production implementations and tests substitute in-memory ones.

use async_trait::async_trait;
use uuid::Uuid;

use super::models::{Idea, User};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The store rejected a write that would break a unique constraint.
    /// The only unique field in this system is the user email, so two
    /// concurrent registrations racing past the pre-check both land here.
    #[error("a record with the same unique key already exists")]
    DuplicateKey,
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

/// Full set of caller-supplied idea fields. Used for both insert and
/// replacement; partial updates do not exist in this API.
#[derive(Debug, Clone)]
pub struct IdeaDraft {
    pub title: String,
    pub summary: String,
    pub description: String,
    pub tags: Vec<String>,
}

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn insert(&self, new_user: NewUser) -> Result<User, StoreError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;
    async fn find(&self, id: Uuid) -> Result<Option<User>, StoreError>;
}

#[async_trait]
pub trait IdeaStore: Send + Sync {
    async fn insert(&self, owner: Uuid, draft: IdeaDraft) -> Result<Idea, StoreError>;
    async fn find(&self, id: Uuid) -> Result<Option<Idea>, StoreError>;
    /// Newest-created-first, optionally bounded.
    async fn list_newest_first(&self, limit: Option<i64>) -> Result<Vec<Idea>, StoreError>;
    /// Overwrites every caller-suppliable field. `None` when the id no
    /// longer matches a row.
    async fn replace(&self, id: Uuid, draft: IdeaDraft) -> Result<Option<Idea>, StoreError>;
    /// `false` when nothing was deleted.
    async fn delete(&self, id: Uuid) -> Result<bool, StoreError>;
}
