//! User Validator - Abstract business-rule checking for Users

use crate::model::user::User;

/// A user failed a business rule.
///
/// Carries a human-readable reason; never recovered automatically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub reason: String,
}

impl ValidationError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl core::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Validation error: {}", self.reason)
    }
}

impl std::error::Error for ValidationError {}

/// User Validator Trait
///
/// This is a PORT in hexagonal architecture.
/// A candidate user is accepted or rejected before it is persisted;
/// the entity itself carries no validation logic.
pub trait UserValidator {
    /// Evaluate the business rules. Succeeds silently or fails with the
    /// first violated rule.
    fn validate(&self, user: &User) -> Result<(), ValidationError>;

    /// Convenience predicate over `validate`
    fn is_valid(&self, user: &User) -> bool {
        self.validate(user).is_ok()
    }
}
