//! Registry module
//!
//! In-memory ownership and lookup of accounts.
//! Built once at startup and shared for the lifetime of the process.

mod seed;
mod store;

pub use seed::AccountSeed;
pub use store::{AccountHandle, AccountRegistry};
