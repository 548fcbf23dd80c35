//! Concurrent access to a single account
//!
//! Withdrawals and deposits racing on one account must serialize: no lost
//! updates and no policy check passing against a stale balance.

use std::sync::{Arc, Barrier};
use std::thread;

use bank_ledger::{Account, AccountRegistry, AccountService};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn service_with(account: Account) -> AccountService {
    let mut registry = AccountRegistry::new();
    registry.insert(account).unwrap();
    AccountService::new(Arc::new(registry))
}

/// Run `threads` copies of `op` released together, collecting their results
fn race<T, F>(threads: usize, op: F) -> Vec<T>
where
    T: Send + 'static,
    F: Fn() -> T + Send + Sync + 'static,
{
    let barrier = Arc::new(Barrier::new(threads));
    let op = Arc::new(op);

    let handles: Vec<_> = (0..threads)
        .map(|_| {
            let barrier = Arc::clone(&barrier);
            let op = Arc::clone(&op);
            thread::spawn(move || {
                barrier.wait();
                op()
            })
        })
        .collect();

    handles.into_iter().map(|h| h.join().unwrap()).collect()
}

#[test]
fn test_two_concurrent_withdrawals_serialize() {
    let service = service_with(Account::savings("SAV123", dec!(1700)));

    let svc = service.clone();
    let outcomes = race(2, move || svc.withdraw("SAV123", dec!(300)).unwrap());

    // 1700 -> 1400 -> 1100, both stay above the 1000 minimum
    assert!(outcomes.iter().all(|o| o.is_success()));
    let mut balances: Vec<Decimal> = outcomes.iter().filter_map(|o| o.new_balance()).collect();
    balances.sort();
    assert_eq!(balances, vec![dec!(1100), dec!(1400)]);
    assert_eq!(service.get_account("SAV123").unwrap().balance, dec!(1100));
}

#[test]
fn test_many_concurrent_withdrawals_respect_minimum() {
    let service = service_with(Account::savings("SAV123", dec!(1700)));

    let svc = service.clone();
    let outcomes = race(16, move || svc.withdraw("SAV123", dec!(300)).unwrap());

    let successes = outcomes.iter().filter(|o| o.is_success()).count();
    assert_eq!(successes, 2);
    assert_eq!(service.get_account("SAV123").unwrap().balance, dec!(1100));
}

#[test]
fn test_concurrent_deposits_are_not_lost() {
    let service = service_with(Account::current("CUR456", dec!(0)));

    let svc = service.clone();
    race(8, move || {
        for _ in 0..250 {
            svc.deposit("CUR456", dec!(0.01)).unwrap();
        }
    });

    assert_eq!(service.get_account("CUR456").unwrap().balance, dec!(20.00));
}

#[test]
fn test_mixed_operations_balance_is_consistent() {
    let service = service_with(Account::current("CUR456", dec!(10000)));

    let svc = service.clone();
    race(8, move || {
        for _ in 0..100 {
            svc.deposit("CUR456", dec!(5)).unwrap();
            assert!(svc.withdraw("CUR456", dec!(5)).unwrap().is_success());
        }
    });

    assert_eq!(service.get_account("CUR456").unwrap().balance, dec!(10000));
}
