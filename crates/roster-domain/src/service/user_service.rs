//! User Service - The orchestrator
//!
//! The service's single responsibility is sequencing: it knows which
//! collaborator to use for which step (validate → persist on creation,
//! fetch → format on display) and nothing else. All three collaborators
//! arrive at construction time - the service never builds its own.

use crate::model::user::{User, UserId};
use crate::presentation::user_presenter::{OutputFormat, PresentError, UserPresenter};
use crate::repository::user_repository::{RepositoryError, UserRepository};
use crate::validation::user_validator::{UserValidator, ValidationError};

/// Errors surfaced by the user service
///
/// Nothing is caught or retried internally; every failure propagates
/// synchronously to the caller, unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserServiceError {
    /// A business rule rejected the candidate user
    Validation(ValidationError),
    /// The requested id has no stored user
    NotFound { id: String },
    /// The requested format names no known output shape
    UnsupportedFormat { format: String },
    /// The persistence port failed
    Repository(RepositoryError),
    /// The rendering port failed
    Presentation(PresentError),
}

impl core::fmt::Display for UserServiceError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            UserServiceError::Validation(err) => write!(f, "{}", err),
            UserServiceError::NotFound { id } => {
                write!(f, "User with ID {} not found", id)
            }
            UserServiceError::UnsupportedFormat { format } => {
                write!(f, "Unsupported format: {}", format)
            }
            UserServiceError::Repository(err) => write!(f, "{}", err),
            UserServiceError::Presentation(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for UserServiceError {}

impl From<ValidationError> for UserServiceError {
    fn from(err: ValidationError) -> Self {
        UserServiceError::Validation(err)
    }
}

impl From<RepositoryError> for UserServiceError {
    fn from(err: RepositoryError) -> Self {
        UserServiceError::Repository(err)
    }
}

impl From<PresentError> for UserServiceError {
    fn from(err: PresentError) -> Self {
        UserServiceError::Presentation(err)
    }
}

/// UserService - Orchestrates the user lifecycle
///
/// Generic over its three ports so a host can swap any implementation
/// (a durable store, a stricter rule set, a new output shape) without
/// touching this code.
pub struct UserService<R, V, P> {
    repository: R,
    validator: V,
    presenter: P,
}

impl<R, V, P> UserService<R, V, P>
where
    R: UserRepository,
    V: UserValidator,
    P: UserPresenter,
{
    /// Wire up the service. Dependency injection only - no defaults.
    pub fn new(repository: R, validator: V, presenter: P) -> Self {
        Self {
            repository,
            validator,
            presenter,
        }
    }

    /// Create a user: build, validate, persist.
    ///
    /// On a validation failure nothing is persisted - the repository is
    /// never reached.
    pub fn create_user(
        &mut self,
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<User, UserServiceError> {
        let user = User::new(UserId::new(id), name, email);

        // Delegate validation
        self.validator.validate(&user)?;

        // Delegate saving
        Ok(self.repository.save(&user)?)
    }

    /// Fetch a user and render it in the named output shape.
    ///
    /// The shape name is matched case-insensitively; pass `"console"` for
    /// the human-readable default. An unknown id reports `NotFound` before
    /// the format name is examined.
    pub fn get_formatted_user_details(
        &self,
        id: &UserId,
        format_type: &str,
    ) -> Result<String, UserServiceError> {
        let user = self
            .repository
            .find_by_id(id)?
            .ok_or_else(|| UserServiceError::NotFound {
                id: id.as_str().to_string(),
            })?;

        let format =
            OutputFormat::from_name(format_type).ok_or_else(|| {
                UserServiceError::UnsupportedFormat {
                    format: format_type.to_string(),
                }
            })?;

        // Delegate formatting
        match format {
            OutputFormat::Console => Ok(self.presenter.format_for_console(&user)),
            OutputFormat::Json => Ok(self.presenter.format_for_json(&user)?),
        }
    }

    /// Activate a user: fetch, flip the flag on the fetched copy, save.
    ///
    /// Idempotent - activating an already-active user changes nothing.
    pub fn activate_user(&mut self, id: &UserId) -> Result<User, UserServiceError> {
        let mut user = self
            .repository
            .find_by_id(id)?
            .ok_or_else(|| UserServiceError::NotFound {
                id: id.as_str().to_string(),
            })?;

        user.activate();
        Ok(self.repository.save(&user)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct InMemoryUserRepo {
        users: HashMap<String, User>,
    }

    impl InMemoryUserRepo {
        fn new() -> Self {
            Self {
                users: HashMap::new(),
            }
        }
    }

    impl UserRepository for InMemoryUserRepo {
        fn save(&mut self, user: &User) -> Result<User, RepositoryError> {
            self.users
                .insert(user.id().as_str().to_string(), user.clone());
            Ok(user.clone())
        }

        fn find_by_id(&self, id: &UserId) -> Result<Option<User>, RepositoryError> {
            Ok(self.users.get(id.as_str()).cloned())
        }
    }

    /// Accepts any non-blank name; rejects the rest
    struct BlankNameValidator;

    impl UserValidator for BlankNameValidator {
        fn validate(&self, user: &User) -> Result<(), ValidationError> {
            if user.name().trim().is_empty() {
                return Err(ValidationError::new("user name cannot be blank"));
            }
            Ok(())
        }
    }

    /// Marker presenter so tests can see which operation was dispatched
    struct MarkerPresenter;

    impl UserPresenter for MarkerPresenter {
        fn format_for_console(&self, user: &User) -> String {
            format!("console:{}", user.id())
        }

        fn format_for_json(&self, user: &User) -> Result<String, PresentError> {
            Ok(format!("json:{}", user.id()))
        }
    }

    fn service() -> UserService<InMemoryUserRepo, BlankNameValidator, MarkerPresenter> {
        UserService::new(InMemoryUserRepo::new(), BlankNameValidator, MarkerPresenter)
    }

    #[test]
    fn test_create_user_persists_and_is_retrievable() {
        let mut service = service();

        let created = service.create_user("u1", "Alice", "a@x.com").unwrap();
        assert_eq!(created.id().as_str(), "u1");
        assert!(created.is_active());

        let stored = service
            .repository
            .find_by_id(&UserId::new("u1"))
            .unwrap()
            .unwrap();
        assert_eq!(stored.name(), "Alice");
        assert_eq!(stored.email(), "a@x.com");
    }

    #[test]
    fn test_create_user_validation_failure_persists_nothing() {
        let mut service = service();

        let err = service.create_user("u2", "   ", "b@y.net").unwrap_err();
        assert!(matches!(err, UserServiceError::Validation(_)));

        // Failure has no effect: the repository never saw the user.
        let stored = service.repository.find_by_id(&UserId::new("u2")).unwrap();
        assert!(stored.is_none());
    }

    #[test]
    fn test_formatted_details_dispatches_on_format() {
        let mut service = service();
        service.create_user("u1", "Alice", "a@x.com").unwrap();

        let console = service
            .get_formatted_user_details(&UserId::new("u1"), "console")
            .unwrap();
        assert_eq!(console, "console:u1");

        let json = service
            .get_formatted_user_details(&UserId::new("u1"), "json")
            .unwrap();
        assert_eq!(json, "json:u1");
    }

    #[test]
    fn test_formatted_details_format_name_is_case_insensitive() {
        let mut service = service();
        service.create_user("u1", "Alice", "a@x.com").unwrap();

        let out = service
            .get_formatted_user_details(&UserId::new("u1"), "JSON")
            .unwrap();
        assert_eq!(out, "json:u1");
    }

    #[test]
    fn test_formatted_details_unknown_id_is_not_found() {
        let service = service();

        let err = service
            .get_formatted_user_details(&UserId::new("ghost"), "console")
            .unwrap_err();
        assert_eq!(
            err,
            UserServiceError::NotFound {
                id: "ghost".to_string()
            }
        );
    }

    #[test]
    fn test_formatted_details_unknown_format_is_unsupported() {
        let mut service = service();
        service.create_user("u1", "Alice", "a@x.com").unwrap();

        let err = service
            .get_formatted_user_details(&UserId::new("u1"), "xml")
            .unwrap_err();
        assert_eq!(
            err,
            UserServiceError::UnsupportedFormat {
                format: "xml".to_string()
            }
        );
    }

    #[test]
    fn test_unknown_id_wins_over_unknown_format() {
        let service = service();

        // Fetch happens first, so the missing user is what gets reported.
        let err = service
            .get_formatted_user_details(&UserId::new("ghost"), "xml")
            .unwrap_err();
        assert!(matches!(err, UserServiceError::NotFound { .. }));
    }

    #[test]
    fn test_activate_user_persists_the_flag() {
        let mut service = service();
        service.create_user("u1", "Alice", "a@x.com").unwrap();

        // Simulate an inactive stored user to observe the transition.
        let inactive = User::new(UserId::new("u1"), "Alice", "a@x.com").with_active(false);
        service.repository.save(&inactive).unwrap();

        let activated = service.activate_user(&UserId::new("u1")).unwrap();
        assert!(activated.is_active());

        let stored = service
            .repository
            .find_by_id(&UserId::new("u1"))
            .unwrap()
            .unwrap();
        assert!(stored.is_active());
    }

    #[test]
    fn test_activate_user_is_idempotent() {
        let mut service = service();
        service.create_user("u1", "Alice", "a@x.com").unwrap();

        let once = service.activate_user(&UserId::new("u1")).unwrap();
        let twice = service.activate_user(&UserId::new("u1")).unwrap();

        assert!(once.is_active());
        assert!(twice.is_active());
        assert_eq!(twice.name(), "Alice");
        assert_eq!(twice.email(), "a@x.com");
    }

    #[test]
    fn test_activate_user_unknown_id_is_not_found() {
        let mut service = service();

        let err = service.activate_user(&UserId::new("ghost")).unwrap_err();
        assert_eq!(
            err,
            UserServiceError::NotFound {
                id: "ghost".to_string()
            }
        );
    }

    #[test]
    fn test_validation_error_propagates_unchanged() {
        let mut service = service();

        let err = service.create_user("u1", "", "a@x.com").unwrap_err();
        match err {
            UserServiceError::Validation(inner) => {
                assert_eq!(inner.reason, "user name cannot be blank");
            }
            other => panic!("Expected Validation error, got {:?}", other),
        }
    }
}
