//! Test support: in-memory store implementations and request plumbing for
//! driving the real router without a database.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, Response};
use chrono::{DateTime, Duration, Utc};
use http_body_util::BodyExt;
use serde_json::Value;
use uuid::Uuid;

use crate::auth::TokenService;
use crate::database::models::{Idea, User};
use crate::database::store::{IdeaDraft, IdeaStore, NewUser, StoreError, UserStore};
use crate::state::AppState;

#[derive(Default)]
pub struct MemoryUserStore {
    users: Mutex<Vec<User>>,
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn insert(&self, new_user: NewUser) -> Result<User, StoreError> {
        let mut users = self.users.lock().unwrap();

        // Same contract as the unique index on users.email
        if users.iter().any(|u| u.email == new_user.email) {
            return Err(StoreError::DuplicateKey);
        }

        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            name: new_user.name,
            email: new_user.email,
            password_hash: new_user.password_hash,
            created_at: now,
            updated_at: now,
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn find(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.id == id).cloned())
    }
}

pub struct MemoryIdeaStore {
    ideas: Mutex<Vec<Idea>>,
    // Strictly increasing creation timestamps so newest-first ordering is
    // deterministic even when inserts land within the same clock tick
    base: DateTime<Utc>,
    seq: AtomicI64,
}

impl Default for MemoryIdeaStore {
    fn default() -> Self {
        Self {
            ideas: Mutex::new(Vec::new()),
            base: Utc::now(),
            seq: AtomicI64::new(0),
        }
    }
}

#[async_trait]
impl IdeaStore for MemoryIdeaStore {
    async fn insert(&self, owner: Uuid, draft: IdeaDraft) -> Result<Idea, StoreError> {
        let seq = self.seq.fetch_add(1, Ordering::SeqCst);
        let created_at = self.base + Duration::milliseconds(seq);

        let idea = Idea {
            id: Uuid::new_v4(),
            title: draft.title,
            summary: draft.summary,
            description: draft.description,
            tags: draft.tags,
            user_id: owner,
            created_at,
            updated_at: created_at,
        };

        self.ideas.lock().unwrap().push(idea.clone());
        Ok(idea)
    }

    async fn find(&self, id: Uuid) -> Result<Option<Idea>, StoreError> {
        let ideas = self.ideas.lock().unwrap();
        Ok(ideas.iter().find(|i| i.id == id).cloned())
    }

    async fn list_newest_first(&self, limit: Option<i64>) -> Result<Vec<Idea>, StoreError> {
        let mut ideas = self.ideas.lock().unwrap().clone();
        ideas.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        if let Some(n) = limit {
            ideas.truncate(n.max(0) as usize);
        }
        Ok(ideas)
    }

    async fn replace(&self, id: Uuid, draft: IdeaDraft) -> Result<Option<Idea>, StoreError> {
        let mut ideas = self.ideas.lock().unwrap();

        let Some(idea) = ideas.iter_mut().find(|i| i.id == id) else {
            return Ok(None);
        };

        idea.title = draft.title;
        idea.summary = draft.summary;
        idea.description = draft.description;
        idea.tags = draft.tags;
        idea.updated_at = Utc::now();

        Ok(Some(idea.clone()))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, StoreError> {
        let mut ideas = self.ideas.lock().unwrap();
        let before = ideas.len();
        ideas.retain(|i| i.id != id);
        Ok(ideas.len() < before)
    }
}

pub fn test_state() -> AppState {
    AppState {
        tokens: Arc::new(TokenService::new("test-secret").unwrap()),
        users: Arc::new(MemoryUserStore::default()),
        ideas: Arc::new(MemoryIdeaStore::default()),
    }
}

/// Inserts a user straight into the store (skipping the bcrypt work the
/// register flow would do) and issues a valid access token for them.
pub async fn seed_user(state: &AppState, name: &str, email: &str) -> (User, String) {
    let user = state
        .users
        .insert(NewUser {
            name: name.to_string(),
            email: email.to_string(),
            password_hash: "not-a-real-hash".to_string(),
        })
        .await
        .unwrap();
    let token = state.tokens.issue_access(user.id).unwrap();
    (user, token)
}

// Request builders

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn post_empty(uri: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_with_cookie(uri: &str, cookie: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::COOKIE, cookie)
        .body(Body::empty())
        .unwrap()
}

pub fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn json_request_auth(method: &str, uri: &str, body: &Value, token: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn delete_auth(uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap()
}

/// First `Set-Cookie` value on the response, ready to echo back as a
/// `Cookie` header (attributes stripped).
pub fn cookie_from(response: &Response<axum::body::Body>) -> Option<String> {
    let set_cookie = response.headers().get(header::SET_COOKIE)?.to_str().ok()?;
    Some(set_cookie.split(';').next().unwrap_or_default().to_string())
}

pub async fn body_json(response: Response<axum::body::Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).expect("response body was not JSON")
}
