//! Rule-Based Validator Implementation
//!
//! The reference rule set: a non-blank name and an email with a minimal
//! "local@domain.tld" shape. The email check is shape-only and
//! intentionally permissive - correctness here means "matches the rule",
//! not "is a deliverable address".

use regex::Regex;
use roster_domain::model::user::User;
use roster_domain::validation::user_validator::{UserValidator, ValidationError};
use tracing::debug;

/// Anchored at the start only: anything may follow a matching prefix.
const EMAIL_SHAPE: &str = r"^[^@]+@[^@]+\.[^@]+";

/// Rule-based User Validator
///
/// Holds its compiled pattern; the rule set is fixed at construction.
#[derive(Debug, Clone)]
pub struct RuleBasedUserValidator {
    email_shape: Regex,
}

impl RuleBasedUserValidator {
    pub fn new() -> Self {
        let email_shape = Regex::new(EMAIL_SHAPE).expect("email shape pattern compiles");
        Self { email_shape }
    }
}

impl Default for RuleBasedUserValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl UserValidator for RuleBasedUserValidator {
    fn validate(&self, user: &User) -> Result<(), ValidationError> {
        debug!(id = %user.id(), "validating user");

        if user.name().trim().is_empty() {
            return Err(ValidationError::new("User name cannot be blank"));
        }
        if !self.email_shape.is_match(user.email()) {
            return Err(ValidationError::new(format!(
                "Invalid email format for {}",
                user.email()
            )));
        }
        Ok(())
    }
}
