//! Domain Services - Business logic that doesn't belong to a single entity
//!
//! Services operate through the ports and contain the "verbs" of the domain.

pub mod user_service;
