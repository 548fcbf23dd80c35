//! Aggregate module
//!
//! The account entity and the read-only views handed out of it.

pub mod account;

pub use account::{Account, AccountSnapshot};
