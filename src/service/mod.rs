//! Service module
//!
//! Orchestrates account lookup, the requested operation and outcome
//! reporting. This is the only surface transport adapters call.

mod account_service;
mod outcome;


pub use account_service::AccountService;
pub use outcome::{DepositOutcome, WithdrawOutcome};
