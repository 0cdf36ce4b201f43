use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::models::{Idea, User};
use super::store::{IdeaDraft, IdeaStore, NewUser, StoreError, UserStore};

pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn insert(&self, new_user: NewUser) -> Result<User, StoreError> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (id, name, email, password_hash) \
             VALUES ($1, $2, $3, $4) \
             RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(&new_user.name)
        .bind(&new_user.email)
        .bind(&new_user.password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(map_constraint_violation)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    async fn find(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }
}

pub struct PgIdeaStore {
    pool: PgPool,
}

impl PgIdeaStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl IdeaStore for PgIdeaStore {
    async fn insert(&self, owner: Uuid, draft: IdeaDraft) -> Result<Idea, StoreError> {
        let idea = sqlx::query_as::<_, Idea>(
            "INSERT INTO ideas (id, title, summary, description, tags, user_id) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(&draft.title)
        .bind(&draft.summary)
        .bind(&draft.description)
        .bind(&draft.tags)
        .bind(owner)
        .fetch_one(&self.pool)
        .await?;
        Ok(idea)
    }

    async fn find(&self, id: Uuid) -> Result<Option<Idea>, StoreError> {
        let idea = sqlx::query_as::<_, Idea>("SELECT * FROM ideas WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(idea)
    }

    async fn list_newest_first(&self, limit: Option<i64>) -> Result<Vec<Idea>, StoreError> {
        let ideas = match limit {
            Some(n) => {
                sqlx::query_as::<_, Idea>(
                    "SELECT * FROM ideas ORDER BY created_at DESC LIMIT $1",
                )
                .bind(n)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Idea>("SELECT * FROM ideas ORDER BY created_at DESC")
                    .fetch_all(&self.pool)
                    .await?
            }
        };
        Ok(ideas)
    }

    async fn replace(&self, id: Uuid, draft: IdeaDraft) -> Result<Option<Idea>, StoreError> {
        let idea = sqlx::query_as::<_, Idea>(
            "UPDATE ideas \
             SET title = $2, summary = $3, description = $4, tags = $5, updated_at = now() \
             WHERE id = $1 \
             RETURNING *",
        )
        .bind(id)
        .bind(&draft.title)
        .bind(&draft.summary)
        .bind(&draft.description)
        .bind(&draft.tags)
        .fetch_optional(&self.pool)
        .await?;
        Ok(idea)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM ideas WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

fn map_constraint_violation(err: sqlx::Error) -> StoreError {
    match &err {
        sqlx::Error::Database(db) if db.is_unique_violation() => StoreError::DuplicateKey,
        _ => StoreError::Database(err),
    }
}
