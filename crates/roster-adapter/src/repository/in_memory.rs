//! In-Memory Repository Implementation
//!
//! Simple in-memory implementation of the user repository trait.
//! Useful for testing and development; nothing survives a restart.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use roster_domain::model::user::{User, UserId};
use roster_domain::repository::user_repository::{RepositoryError, UserRepository};
use tracing::debug;

/// In-memory User Repository
///
/// Thread-safe implementation using RwLock. The locking is discipline at
/// the repository boundary only - no other component knows about it.
/// Callers get clones; the canonical copy stays in the map.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<String, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl UserRepository for InMemoryUserRepository {
    fn save(&mut self, user: &User) -> Result<User, RepositoryError> {
        let mut users = self.users.write().map_err(|_| {
            RepositoryError::Persistence {
                message: "Failed to acquire write lock".to_string(),
            }
        })?;
        debug!(id = %user.id(), name = user.name(), "saving user to in-memory store");
        users.insert(user.id().as_str().to_string(), user.clone());
        Ok(user.clone())
    }

    fn find_by_id(&self, id: &UserId) -> Result<Option<User>, RepositoryError> {
        let users = self.users.read().map_err(|_| {
            RepositoryError::Persistence {
                message: "Failed to acquire read lock".to_string(),
            }
        })?;
        debug!(id = %id, "looking up user in in-memory store");
        Ok(users.get(id.as_str()).cloned())
    }
}
