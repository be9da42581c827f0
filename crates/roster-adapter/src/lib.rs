//! # Roster Adapter Layer
//!
//! Reference implementations of the domain ports (Hexagonal Architecture
//! adapters).
//!
//! ## Structure
//!
//! - `repository/`   - Persistence implementations
//! - `validation/`   - Rule-set implementations
//! - `presentation/` - Output-shape implementations
//!
//! A host application can replace any of these behind the same trait
//! without touching the service.

pub mod presentation;
pub mod repository;
pub mod validation;

pub use presentation::standard::{StandardUserPresenter, UserView};
pub use repository::in_memory::InMemoryUserRepository;
pub use validation::rule_based::RuleBasedUserValidator;
