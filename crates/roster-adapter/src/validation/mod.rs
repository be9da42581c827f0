//! Validation Adapters - Rule-set implementations

pub mod rule_based;
