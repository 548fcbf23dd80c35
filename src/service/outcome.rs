//! Operation outcomes
//!
//! Results returned to the caller of a service operation.

use rust_decimal::Decimal;

use crate::domain::{DomainError, PolicyViolation};

/// Outcome of a withdrawal against an existing account
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WithdrawOutcome {
    /// Withdrawal committed
    Success { new_balance: Decimal },
    /// Withdrawal rejected by the account's policy, balance unchanged
    PolicyViolation(PolicyViolation),
}

impl WithdrawOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// New balance, if the withdrawal went through
    pub fn new_balance(&self) -> Option<Decimal> {
        match self {
            Self::Success { new_balance } => Some(*new_balance),
            Self::PolicyViolation(_) => None,
        }
    }

    /// Convert into a `Result` so callers can use `?`
    pub fn into_result(self) -> Result<Decimal, DomainError> {
        match self {
            Self::Success { new_balance } => Ok(new_balance),
            Self::PolicyViolation(violation) => Err(DomainError::PolicyViolation(violation)),
        }
    }
}

/// Outcome of a deposit into an existing account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepositOutcome {
    pub account_number: String,
    pub new_balance: Decimal,
}
