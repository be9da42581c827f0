//! User - The sole data-carrying entity of the system
//!
//! User is an Entity (has identity that persists through changes).
//! It ONLY holds data: saving, validating and formatting a user are
//! other components' jobs. The only behavior it carries is the one
//! lifecycle transition the system defines, activation.

/// Unique identifier for a User
///
/// Opaque and caller-supplied; the domain never generates ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for UserId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// User - A plain data holder
///
/// The type enforces no structural constraints beyond identity; whether a
/// user is *valid* is decided by a [`UserValidator`] at creation time.
///
/// [`UserValidator`]: crate::validation::user_validator::UserValidator
#[derive(Debug, Clone)]
pub struct User {
    /// Unique identifier (Entity identity)
    id: UserId,
    /// Display name
    name: String,
    /// Contact address
    email: String,
    /// Whether the account is active
    active: bool,
}

impl User {
    /// Create a new User. Accounts start active.
    pub fn new(id: UserId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            active: true,
        }
    }

    /// Builder: override the active flag at construction time.
    ///
    /// After construction the flag changes only through [`User::activate`].
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    // ========== Getters ==========

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    // ========== State Transitions ==========

    /// Activate the account. Idempotent: activating an active user is a
    /// no-op. There is no transition back to inactive.
    pub fn activate(&mut self) {
        self.active = true;
    }
}

impl PartialEq for User {
    fn eq(&self, other: &Self) -> bool {
        // Entity equality: same ID = same entity
        self.id == other.id
    }
}

impl Eq for User {}
