//! Domain module
//!
//! Core domain types and business rules.

pub mod error;
pub mod policy;

pub use error::DomainError;
pub use policy::{AccountKind, PolicyViolation};
