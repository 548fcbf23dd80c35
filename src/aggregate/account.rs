//! Account Aggregate
//!
//! Account is the core entity holding a balance and enforcing its kind's
//! withdrawal policy. Callers serialize access through the registry's
//! per-account lock; a `&mut Account` is therefore exclusive for the whole
//! check-then-commit of a withdrawal.

use rust_decimal::Decimal;

use crate::domain::{AccountKind, DomainError};

/// Account entity
#[derive(Debug, Clone)]
pub struct Account {
    /// Registry key, immutable after creation
    account_number: String,

    /// Determines the withdrawal policy
    kind: AccountKind,

    /// Current balance
    balance: Decimal,
}

/// Immutable copy of an account's identifying and balance data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountSnapshot {
    pub account_number: String,
    pub kind: AccountKind,
    pub balance: Decimal,
}

impl Account {
    pub fn new(account_number: impl Into<String>, kind: AccountKind, balance: Decimal) -> Self {
        Self {
            account_number: account_number.into(),
            kind,
            balance,
        }
    }

    /// Create a savings account
    pub fn savings(account_number: impl Into<String>, balance: Decimal) -> Self {
        Self::new(account_number, AccountKind::Savings, balance)
    }

    /// Create a current account
    pub fn current(account_number: impl Into<String>, balance: Decimal) -> Self {
        Self::new(account_number, AccountKind::Current, balance)
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Withdraw money from the account
    ///
    /// Returns the new balance, or the policy violation or overflow with
    /// the balance left unchanged.
    pub fn withdraw(&mut self, amount: Decimal) -> Result<Decimal, DomainError> {
        let new_balance = self.kind.check_withdrawal(self.balance, amount)?;
        self.balance = new_balance;
        Ok(self.balance)
    }

    /// Deposit money into the account
    ///
    /// Amounts are not validated; a negative deposit lowers the balance.
    pub fn deposit(&mut self, amount: Decimal) -> Result<Decimal, DomainError> {
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(DomainError::BalanceOverflow)?;
        Ok(self.balance)
    }

    // =========================================================================
    // Getters
    // =========================================================================

    pub fn account_number(&self) -> &str {
        &self.account_number
    }

    pub fn kind(&self) -> AccountKind {
        self.kind
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn snapshot(&self) -> AccountSnapshot {
        AccountSnapshot {
            account_number: self.account_number.clone(),
            kind: self.kind,
            balance: self.balance,
        }
    }
}
