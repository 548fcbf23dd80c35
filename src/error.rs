//! Error handling module
//!
//! Centralized error types and HTTP response conversion.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::domain::DomainError;

/// Application-wide Result type
pub type AppResult<T> = Result<T, AppError>;

/// Application error types
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Client errors (4xx)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    // Domain errors
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Domain(domain_err) => match domain_err {
                DomainError::AccountNotFound(_) => StatusCode::NOT_FOUND,
                DomainError::PolicyViolation(_) | DomainError::BalanceOverflow => {
                    StatusCode::UNPROCESSABLE_ENTITY
                }
                DomainError::DuplicateAccount(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }

    /// Plain-text body rendered for this error
    fn body(&self) -> String {
        match self {
            AppError::Domain(DomainError::AccountNotFound(_)) => "Account not found.".to_string(),
            AppError::Domain(DomainError::DuplicateAccount(_)) => {
                "Error: Internal error".to_string()
            }
            other => format!("Error: {}", other),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!("Internal error: {:?}", self);
        }

        (status, self.body()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AccountKind;
    use rust_decimal_macros::dec;

    #[test]
    fn test_account_not_found_response() {
        let err = AppError::from(DomainError::account_not_found("UNKNOWN"));

        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.body(), "Account not found.");
    }

    #[test]
    fn test_policy_violation_response() {
        let domain_err = AccountKind::Savings
            .check_withdrawal(dec!(1500), dec!(1000))
            .unwrap_err();
        let expected = format!("Error: {}", domain_err);
        let err = AppError::from(domain_err);

        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.body(), expected);
        assert!(expected.starts_with("Error: Insufficient funds."));
    }

    #[test]
    fn test_balance_overflow_response() {
        let err = AppError::from(DomainError::BalanceOverflow);

        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.body(), "Error: Amount would overflow the account balance");
    }

    #[test]
    fn test_invalid_request_response() {
        let err = AppError::InvalidRequest("missing amount".to_string());

        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.body(), "Error: Invalid request: missing amount");
    }

    #[test]
    fn test_duplicate_account_is_server_error() {
        let err = AppError::from(DomainError::DuplicateAccount("SAV123".to_string()));

        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.body(), "Error: Internal error");
    }
}
