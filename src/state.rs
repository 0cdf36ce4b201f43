use std::sync::Arc;

use crate::auth::TokenService;
use crate::database::store::{IdeaStore, UserStore};

/// Shared per-process dependencies. Stores are trait objects so the request
/// flows never know which backend they are talking to.
#[derive(Clone)]
pub struct AppState {
    pub tokens: Arc<TokenService>,
    pub users: Arc<dyn UserStore>,
    pub ideas: Arc<dyn IdeaStore>,
}
