//! User Repository - Abstract persistence for Users
//!
//! This trait defines what operations the domain needs.
//! How they're implemented (SQL, file, memory) is not our concern here.

use crate::model::user::{User, UserId};

/// Errors that can occur during repository operations
///
/// Absence of a user is NOT an error at this level: `find_by_id` reports it
/// as `Ok(None)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// Failed to persist or read
    Persistence { message: String },
}

impl core::fmt::Display for RepositoryError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            RepositoryError::Persistence { message } => {
                write!(f, "Persistence error: {}", message)
            }
        }
    }
}

impl std::error::Error for RepositoryError {}

/// User Repository Trait
///
/// This is a PORT in hexagonal architecture.
/// The domain defines what it needs; adapters provide implementations.
///
/// Note: No async here - that's an implementation detail.
/// If you need async, wrap this in an async adapter.
pub trait UserRepository {
    /// Save a user (insert or replace by id, last write wins).
    ///
    /// Returns the stored copy, unchanged in value - the store generates
    /// no fields. The repository owns the canonical copy; callers get
    /// clones and route mutations back through `save`.
    fn save(&mut self, user: &User) -> Result<User, RepositoryError>;

    /// Find a user by ID. `Ok(None)` if the id is unknown.
    fn find_by_id(&self, id: &UserId) -> Result<Option<User>, RepositoryError>;

    /// Check if a user exists
    fn exists(&self, id: &UserId) -> Result<bool, RepositoryError> {
        Ok(self.find_by_id(id)?.is_some())
    }
}
