//! Domain Models - The vocabulary of roster
//!
//! These types represent the "Ubiquitous Language" of the system.
//! Every name here should match how we talk about it.

pub mod user;
