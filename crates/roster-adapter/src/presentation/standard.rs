//! Standard Presenter Implementation
//!
//! Renders a user as a fixed multi-line console block or as a pretty
//! JSON object. A new output shape (say, markup) is a new trait
//! operation plus an arm here - the entity and the other components
//! never change for it.

use serde::{Deserialize, Serialize};

use roster_domain::model::user::User;
use roster_domain::presentation::user_presenter::{PresentError, UserPresenter};
use tracing::debug;

/// The serialized view of a user
///
/// Field names and declaration order are the wire contract: `id`,
/// `name`, `email`, `active`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserView {
    pub id: String,
    pub name: String,
    pub email: String,
    pub active: bool,
}

impl From<&User> for UserView {
    fn from(user: &User) -> Self {
        Self {
            id: user.id().as_str().to_string(),
            name: user.name().to_string(),
            email: user.email().to_string(),
            active: user.is_active(),
        }
    }
}

/// Standard User Presenter
///
/// Stateless; both operations read the entity and build a string.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardUserPresenter;

impl StandardUserPresenter {
    pub fn new() -> Self {
        Self
    }
}

impl UserPresenter for StandardUserPresenter {
    fn format_for_console(&self, user: &User) -> String {
        debug!(id = %user.id(), "formatting user for console display");
        let status = if user.is_active() { "Active" } else { "Inactive" };
        format!(
            "User ID: {}\nName: {}\nEmail: {}\nStatus: {}",
            user.id(),
            user.name(),
            user.email(),
            status
        )
    }

    fn format_for_json(&self, user: &User) -> Result<String, PresentError> {
        debug!(id = %user.id(), "formatting user for JSON display");
        serde_json::to_string_pretty(&UserView::from(user)).map_err(|err| {
            PresentError::Serialization {
                message: err.to_string(),
            }
        })
    }
}
