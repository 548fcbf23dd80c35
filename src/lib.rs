//! bank_ledger Library
//!
//! In-memory account ledger: accounts with kind-specific withdrawal
//! policies, the registry that owns them, the service callers use, and a
//! thin HTTP adapter.

pub mod aggregate;
pub mod api;
pub mod config;
pub mod domain;
pub mod registry;
pub mod service;

mod error;

pub use aggregate::{Account, AccountSnapshot};
pub use config::Config;
pub use domain::{AccountKind, DomainError, PolicyViolation};
pub use error::{AppError, AppResult};
pub use registry::{AccountRegistry, AccountSeed};
pub use service::{AccountService, DepositOutcome, WithdrawOutcome};
