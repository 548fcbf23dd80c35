//! Account Service
//!
//! Handles withdrawals, deposits and balance queries against the registry.

use std::sync::Arc;

use rust_decimal::Decimal;

use crate::aggregate::AccountSnapshot;
use crate::domain::DomainError;
use crate::registry::{AccountHandle, AccountRegistry};

use super::{DepositOutcome, WithdrawOutcome};

/// Service over an explicitly owned registry
#[derive(Debug, Clone)]
pub struct AccountService {
    registry: Arc<AccountRegistry>,
}

impl AccountService {
    pub fn new(registry: Arc<AccountRegistry>) -> Self {
        Self { registry }
    }

    /// Withdraw from an account
    ///
    /// A policy rejection is a successful call with a
    /// `WithdrawOutcome::PolicyViolation`; a missing account or a balance
    /// overflow is an error.
    pub fn withdraw(
        &self,
        account_number: &str,
        amount: Decimal,
    ) -> Result<WithdrawOutcome, DomainError> {
        let account = self.find(account_number)?;

        match account.withdraw(amount) {
            Ok(new_balance) => {
                tracing::info!(
                    account_number = %account_number,
                    amount = %amount,
                    new_balance = %new_balance,
                    "Withdrawal successful"
                );
                Ok(WithdrawOutcome::Success { new_balance })
            }
            Err(DomainError::PolicyViolation(violation)) => {
                tracing::warn!(
                    account_number = %account_number,
                    amount = %amount,
                    floor = %violation.floor,
                    shortfall = %violation.shortfall(),
                    "Withdrawal rejected: {}",
                    violation
                );
                Ok(WithdrawOutcome::PolicyViolation(violation))
            }
            Err(e) => {
                tracing::warn!(
                    account_number = %account_number,
                    amount = %amount,
                    "Withdrawal failed: {}",
                    e
                );
                Err(e)
            }
        }
    }

    /// Deposit into an account
    pub fn deposit(
        &self,
        account_number: &str,
        amount: Decimal,
    ) -> Result<DepositOutcome, DomainError> {
        let account = self.find(account_number)?;
        let new_balance = account.deposit(amount).map_err(|e| {
            tracing::warn!(
                account_number = %account_number,
                amount = %amount,
                "Deposit failed: {}",
                e
            );
            e
        })?;

        tracing::info!(
            account_number = %account_number,
            amount = %amount,
            new_balance = %new_balance,
            "Deposit successful"
        );

        Ok(DepositOutcome {
            account_number: account_number.to_string(),
            new_balance,
        })
    }

    /// Read-only snapshot of an account, if it exists
    pub fn get_account(&self, account_number: &str) -> Option<AccountSnapshot> {
        self.registry
            .lookup(account_number)
            .map(|account| account.snapshot())
    }

    pub fn registry(&self) -> &AccountRegistry {
        &self.registry
    }

    fn find(&self, account_number: &str) -> Result<AccountHandle, DomainError> {
        self.registry.lookup(account_number).ok_or_else(|| {
            tracing::warn!(account_number = %account_number, "Account not found");
            DomainError::account_not_found(account_number)
        })
    }
}
