//! Account seeds
//!
//! Accounts the registry is populated with at startup.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::aggregate::Account;
use crate::domain::AccountKind;

/// Description of an account to create at startup
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AccountSeed {
    pub account_number: String,
    pub kind: AccountKind,
    pub balance: Decimal,
}

impl AccountSeed {
    pub fn new(account_number: impl Into<String>, kind: AccountKind, balance: Decimal) -> Self {
        Self {
            account_number: account_number.into(),
            kind,
            balance,
        }
    }

    /// Seed set used when no other is configured:
    /// one savings account and one current account.
    pub fn defaults() -> Vec<Self> {
        vec![
            Self::new("SAV123", AccountKind::Savings, Decimal::from(5_000)),
            Self::new("CUR456", AccountKind::Current, Decimal::from(10_000)),
        ]
    }
}

impl From<AccountSeed> for Account {
    fn from(seed: AccountSeed) -> Self {
        Account::new(seed.account_number, seed.kind, seed.balance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_default_seeds() {
        let seeds = AccountSeed::defaults();

        assert_eq!(seeds.len(), 2);
        assert_eq!(seeds[0], AccountSeed::new("SAV123", AccountKind::Savings, dec!(5000)));
        assert_eq!(seeds[1], AccountSeed::new("CUR456", AccountKind::Current, dec!(10000)));
    }

    #[test]
    fn test_seed_from_json() {
        let seeds: Vec<AccountSeed> = serde_json::from_str(
            r#"[{"account_number": "SAV999", "kind": "savings", "balance": "2500.50"}]"#,
        )
        .unwrap();

        let account = Account::from(seeds[0].clone());
        assert_eq!(account.account_number(), "SAV999");
        assert_eq!(account.kind(), AccountKind::Savings);
        assert_eq!(account.balance(), dec!(2500.50));
    }
}
