//! Withdrawal policies
//!
//! Each account kind owns a pure rule computing the lowest balance a
//! withdrawal may leave behind. The rule only looks at the balance before
//! the withdrawal, so it can be evaluated while the account lock is held.
//!
//! All balance arithmetic is checked; a result outside the `Decimal` range
//! is reported as `DomainError::BalanceOverflow`.

use std::fmt;

use rust_decimal::Decimal;
use serde::Deserialize;

use super::DomainError;

/// Minimum balance a savings account must keep after any withdrawal
const SAVINGS_MINIMUM_BALANCE: i64 = 1_000;

/// Base overdraft allowance of a current account
const CURRENT_MAXIMUM_OVERDRAFT: i64 = 100_000;

/// Account kind, fixed at creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountKind {
    Savings,
    Current,
}

impl AccountKind {
    /// Lowest balance allowed after a withdrawal from `balance_before`.
    ///
    /// Savings accounts keep a fixed minimum. Current accounts may go
    /// negative down to `-(balance_before + 100000)`, so the overdraft
    /// limit moves with the balance held when the withdrawal starts.
    ///
    /// `None` when the floor lies below the representable range; every
    /// representable balance then satisfies it.
    pub fn withdrawal_floor(&self, balance_before: Decimal) -> Option<Decimal> {
        match self {
            AccountKind::Savings => Some(Decimal::from(SAVINGS_MINIMUM_BALANCE)),
            AccountKind::Current => balance_before
                .checked_add(Decimal::from(CURRENT_MAXIMUM_OVERDRAFT))
                .map(|limit| -limit),
        }
    }

    /// Check a withdrawal against this kind's floor.
    ///
    /// Returns the resulting balance when the policy allows it, otherwise
    /// `DomainError::PolicyViolation` or `DomainError::BalanceOverflow`.
    pub fn check_withdrawal(
        &self,
        balance_before: Decimal,
        amount: Decimal,
    ) -> Result<Decimal, DomainError> {
        let resulting_balance = balance_before
            .checked_sub(amount)
            .ok_or(DomainError::BalanceOverflow)?;

        match self.withdrawal_floor(balance_before) {
            Some(floor) if resulting_balance < floor => Err(PolicyViolation {
                kind: *self,
                floor,
                resulting_balance,
            }
            .into()),
            _ => Ok(resulting_balance),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AccountKind::Savings => "savings",
            AccountKind::Current => "current",
        }
    }
}

impl fmt::Display for AccountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A withdrawal rejected by the account's policy.
///
/// The account balance is left untouched when this is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyViolation {
    pub kind: AccountKind,
    /// Lowest balance the policy allowed
    pub floor: Decimal,
    /// Balance the withdrawal would have produced
    pub resulting_balance: Decimal,
}

impl PolicyViolation {
    /// How far below the floor the withdrawal would have gone.
    ///
    /// Saturates at `Decimal::MAX`.
    pub fn shortfall(&self) -> Decimal {
        self.floor
            .checked_sub(self.resulting_balance)
            .unwrap_or(Decimal::MAX)
    }

    /// Human-readable rejection reason
    pub fn reason(&self) -> String {
        match self.kind {
            AccountKind::Savings => format!(
                "Insufficient funds. Savings account must maintain a minimum balance of {} (short by {}).",
                self.floor,
                self.shortfall()
            ),
            AccountKind::Current => format!(
                "Insufficient funds. Overdraft limit of {} exceeded by {}.",
                -self.floor,
                self.shortfall()
            ),
        }
    }
}

impl fmt::Display for PolicyViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.reason())
    }
}

impl std::error::Error for PolicyViolation {}
