//! Domain Error Types
//!
//! Pure domain errors that don't depend on infrastructure.

use thiserror::Error;

use super::PolicyViolation;

/// Domain-specific errors
///
/// Every variant is a local, recoverable condition reported back to the
/// caller of the operation that produced it. The account is left unchanged.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// No account is registered under this number
    #[error("Account not found: {0}")]
    AccountNotFound(String),

    /// Withdrawal would breach the account's balance floor
    #[error(transparent)]
    PolicyViolation(#[from] PolicyViolation),

    /// The resulting balance falls outside the representable range
    #[error("Amount would overflow the account balance")]
    BalanceOverflow,

    /// An account with this number is already registered
    #[error("Duplicate account: {0}")]
    DuplicateAccount(String),
}

impl DomainError {
    /// Create an account not found error
    pub fn account_not_found(account_number: impl Into<String>) -> Self {
        Self::AccountNotFound(account_number.into())
    }
}
