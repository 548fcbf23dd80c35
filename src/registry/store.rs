//! Account registry
//!
//! Owns every account behind its own lock. The map itself never changes
//! once the registry is shared, so lookups take no lock and operations on
//! different accounts never contend.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use rust_decimal::Decimal;

use crate::aggregate::{Account, AccountSnapshot};
use crate::domain::DomainError;

use super::AccountSeed;

/// Shared handle to a registered account.
///
/// Every method locks the account for its full duration.
#[derive(Debug, Clone)]
pub struct AccountHandle(Arc<Mutex<Account>>);

impl AccountHandle {
    fn new(account: Account) -> Self {
        Self(Arc::new(Mutex::new(account)))
    }

    /// Policy-checked withdrawal, atomic with respect to other operations
    /// on the same account
    pub fn withdraw(&self, amount: Decimal) -> Result<Decimal, DomainError> {
        self.0.lock().withdraw(amount)
    }

    /// Deposit, atomic with respect to other operations on the same account
    pub fn deposit(&self, amount: Decimal) -> Result<Decimal, DomainError> {
        self.0.lock().deposit(amount)
    }

    pub fn snapshot(&self) -> AccountSnapshot {
        self.0.lock().snapshot()
    }
}

/// Registry of accounts keyed by account number
#[derive(Debug, Default)]
pub struct AccountRegistry {
    accounts: HashMap<String, AccountHandle>,
}

impl AccountRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry populated from seeds
    pub fn seeded<I>(seeds: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = AccountSeed>,
    {
        let mut registry = Self::new();
        for seed in seeds {
            registry.insert(seed.into())?;
        }
        Ok(registry)
    }

    /// Register an account.
    ///
    /// Only reachable while the registry is still exclusively owned, before
    /// it is handed to the service.
    pub fn insert(&mut self, account: Account) -> Result<(), DomainError> {
        let account_number = account.account_number().to_string();
        if self.accounts.contains_key(&account_number) {
            return Err(DomainError::DuplicateAccount(account_number));
        }

        tracing::debug!(
            account_number = %account_number,
            kind = %account.kind(),
            balance = %account.balance(),
            "Registered account"
        );
        self.accounts.insert(account_number, AccountHandle::new(account));
        Ok(())
    }

    /// Look up an account by number
    pub fn lookup(&self, account_number: &str) -> Option<AccountHandle> {
        self.accounts.get(account_number).cloned()
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Registered account numbers, sorted
    pub fn account_numbers(&self) -> Vec<String> {
        let mut numbers: Vec<String> = self.accounts.keys().cloned().collect();
        numbers.sort();
        numbers
    }
}
