//! # Roster Domain Layer
//!
//! The heart of roster - pure business logic with zero external dependencies.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                    Domain Layer (This Crate)                     │
//! │  ┌────────────────────────────────────────────────────────────┐  │
//! │  │  model/        - The User entity                           │  │
//! │  │  repository/   - Persistence port (trait, no impl)         │  │
//! │  │  validation/   - Business-rule port (trait, no impl)       │  │
//! │  │  presentation/ - Rendering port (trait, no impl)           │  │
//! │  │  service/      - UserService (orchestration)               │  │
//! │  └────────────────────────────────────────────────────────────┘  │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Golden Rule
//!
//! **This crate has ZERO external dependencies.**
//!
//! If we switch the store from a HashMap to PostgreSQL, this crate doesn't
//! change. If the JSON library changes, this crate doesn't change. Each
//! component here has exactly one reason to change.

pub mod model;
pub mod presentation;
pub mod repository;
pub mod service;
pub mod validation;

// Re-export commonly used types
pub use model::user::{User, UserId};
pub use presentation::user_presenter::{OutputFormat, PresentError, UserPresenter};
pub use repository::user_repository::{RepositoryError, UserRepository};
pub use service::user_service::{UserService, UserServiceError};
pub use validation::user_validator::{UserValidator, ValidationError};
