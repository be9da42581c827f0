//! Persistence Adapters - Repository implementations
//!
//! These implement the repository trait from roster-domain. Any durable
//! store can stand behind the same two-operation contract with no change
//! to callers.

pub mod in_memory;
