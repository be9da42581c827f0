//! User Presenter - Abstract formatting for Users

use crate::model::user::User;

/// Errors that can occur while rendering a user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresentError {
    /// The serializer refused the value
    Serialization { message: String },
}

impl core::fmt::Display for PresentError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PresentError::Serialization { message } => {
                write!(f, "Serialization error: {}", message)
            }
        }
    }
}

impl std::error::Error for PresentError {}

/// The output shapes a presenter supports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable multi-line text
    Console,
    /// Machine-readable structured text
    Json,
}

impl OutputFormat {
    /// Resolve a shape by name, case-insensitively.
    /// `None` if the name matches no known shape.
    pub fn from_name(name: &str) -> Option<Self> {
        if name.eq_ignore_ascii_case("console") {
            Some(OutputFormat::Console)
        } else if name.eq_ignore_ascii_case("json") {
            Some(OutputFormat::Json)
        } else {
            None
        }
    }
}

impl Default for OutputFormat {
    fn default() -> Self {
        OutputFormat::Console
    }
}

impl core::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            OutputFormat::Console => write!(f, "console"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// User Presenter Trait
///
/// This is a PORT in hexagonal architecture.
/// Implementations change only when display requirements change.
pub trait UserPresenter {
    /// Fixed multi-line layout: id, name, email, and a derived
    /// Active/Inactive status label. Pure string assembly.
    fn format_for_console(&self, user: &User) -> String;

    /// The four fields as `id`, `name`, `email`, `active`, in that order,
    /// pretty-printed with 2-space indentation. Fallible because it goes
    /// through a real serializer.
    fn format_for_json(&self, user: &User) -> Result<String, PresentError>;
}
