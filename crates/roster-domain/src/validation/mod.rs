//! Validation Port - Business rules as a capability
//!
//! The trait lives here; the rule set (and its regex) lives in the
//! adapter layer. The rules are expected to grow independently of
//! storage and presentation - that is this component's one reason
//! to change.

pub mod user_validator;
