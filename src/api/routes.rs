//! API Routes
//!
//! Decodes query parameters, calls the account service and renders plain
//! text responses.

use std::str::FromStr;

use axum::{
    extract::{Query, State},
    routing::{get, post},
    Router,
};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::service::AccountService;

// =========================================================================
// Request types
// =========================================================================

#[derive(Debug, Default, Deserialize)]
pub struct TransactionQuery {
    #[serde(default, rename = "accountNum")]
    pub account_num: Option<String>,
    #[serde(default)]
    pub amount: Option<String>,
}

impl TransactionQuery {
    pub fn new(account_num: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            account_num: Some(account_num.into()),
            amount: Some(amount.into()),
        }
    }

    /// Validate presence of both parameters and parse the amount
    fn parse(self) -> AppResult<(String, Decimal)> {
        let account_num = required(self.account_num, "accountNum")?;
        let amount = required(self.amount, "amount")?;
        let amount = Decimal::from_str(amount.trim())
            .map_err(|e| AppError::InvalidRequest(format!("invalid amount '{}': {}", amount, e)))?;

        Ok((account_num, amount))
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct BalanceQuery {
    #[serde(default, rename = "accountNum")]
    pub account_num: Option<String>,
}

fn required(value: Option<String>, name: &str) -> AppResult<String> {
    value
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::InvalidRequest(format!("missing parameter '{}'", name)))
}

// =========================================================================
// API Router
// =========================================================================

/// Create the bank router
pub fn create_router() -> Router<AccountService> {
    Router::new()
        .route("/withdraw", get(withdraw).post(withdraw))
        .route("/deposit", post(deposit))
        .route("/balance", get(balance))
}

// =========================================================================
// Handlers
// =========================================================================

async fn withdraw(
    State(service): State<AccountService>,
    Query(query): Query<TransactionQuery>,
) -> AppResult<String> {
    let (account_num, amount) = query.parse()?;

    let new_balance = service.withdraw(&account_num, amount)?.into_result()?;

    Ok(format!("Withdrawal successful. New balance: {}", new_balance))
}

async fn deposit(
    State(service): State<AccountService>,
    Query(query): Query<TransactionQuery>,
) -> AppResult<String> {
    let (account_num, amount) = query.parse()?;

    let outcome = service.deposit(&account_num, amount)?;

    Ok(format!("Deposit successful. New balance: {}", outcome.new_balance))
}

async fn balance(
    State(service): State<AccountService>,
    Query(query): Query<BalanceQuery>,
) -> AppResult<String> {
    let account_num = required(query.account_num, "accountNum")?;

    let snapshot = service
        .get_account(&account_num)
        .ok_or_else(|| crate::domain::DomainError::account_not_found(&account_num))?;

    Ok(format!(
        "Balance for account {}: {}",
        snapshot.account_number, snapshot.balance
    ))
}
