//! Concurrent access tests for the account store and transfer engine.
//!
//! Run with: cargo test -p tally-accounts --test concurrency -- --nocapture

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;

use tally_accounts::{AccountStore, NewAccount, TransferEngine, TransferRequest};
use tally_core::{AccountId, DomainError};

/// Number of concurrent worker threads for stress tests.
const THREAD_COUNT: usize = 8;

/// Transfers issued by each worker.
const ITERATIONS_PER_THREAD: usize = 250;

fn balance_of(store: &AccountStore, id: i64) -> i64 {
    store.find_by_id(AccountId::new(id)).unwrap().balance()
}

/// Test: workers move the same amount back and forth between two accounts.
///
/// Every worker sends as many transfers in each direction, so both balances
/// must end where they started. A reader thread checks that the pair's sum
/// never drifts while transfers are in flight.
#[test]
fn alternating_transfers_leave_balances_unchanged() {
    let store = Arc::new(AccountStore::with_accounts([
        NewAccount::new(0, 1_000_000),
        NewAccount::new(0, 1_000_000),
    ]));
    let engine = TransferEngine::new(Arc::clone(&store));
    let barrier = Arc::new(Barrier::new(THREAD_COUNT + 1));
    let done = Arc::new(AtomicBool::new(false));

    let reader = {
        let store = Arc::clone(&store);
        let barrier = Arc::clone(&barrier);
        let done = Arc::clone(&done);
        thread::spawn(move || {
            barrier.wait();
            let mut observed = 0usize;
            while !done.load(Ordering::Acquire) {
                let accounts = store.list().unwrap();
                let total: i64 = accounts.iter().map(|a| a.balance()).sum();
                assert_eq!(total, 2_000_000, "observed a half-applied transfer");
                observed += 1;
            }
            observed
        })
    };

    let mut handles = vec![];
    for thread_id in 0..THREAD_COUNT {
        let engine = engine.clone();
        let barrier = Arc::clone(&barrier);
        handles.push(thread::spawn(move || {
            barrier.wait();
            for i in 0..ITERATIONS_PER_THREAD {
                let request = if (thread_id + i) % 2 == 0 {
                    TransferRequest::new(1, 2, 37)
                } else {
                    TransferRequest::new(2, 1, 37)
                };
                engine.transfer(&request).unwrap();
            }
        }));
    }

    for handle in handles {
        handle.join().expect("worker panicked");
    }
    done.store(true, Ordering::Release);
    let observed = reader.join().expect("reader panicked");

    println!("reader took {observed} consistent snapshots");
    assert_eq!(balance_of(&store, 1), 1_000_000);
    assert_eq!(balance_of(&store, 2), 1_000_000);
}

/// Test: many workers race to spend the same funds.
///
/// With balance 1000, limit 0 and amount 100, exactly ten transfers can
/// succeed regardless of interleaving; the rest must be refused.
#[test]
fn racing_debits_cannot_double_spend() {
    let store = Arc::new(AccountStore::with_accounts([
        NewAccount::new(0, 1000),
        NewAccount::new(0, 0),
    ]));
    let engine = TransferEngine::new(Arc::clone(&store));
    let barrier = Arc::new(Barrier::new(THREAD_COUNT));
    let success_count = Arc::new(AtomicUsize::new(0));
    let refused_count = Arc::new(AtomicUsize::new(0));

    let mut handles = vec![];
    for _ in 0..THREAD_COUNT {
        let engine = engine.clone();
        let barrier = Arc::clone(&barrier);
        let success_count = Arc::clone(&success_count);
        let refused_count = Arc::clone(&refused_count);
        handles.push(thread::spawn(move || {
            barrier.wait();
            for _ in 0..5 {
                match engine.transfer(&TransferRequest::new(1, 2, 100)) {
                    Ok(_) => {
                        success_count.fetch_add(1, Ordering::SeqCst);
                    }
                    Err(DomainError::LimitExceeded(id)) => {
                        assert_eq!(id, AccountId::new(1));
                        refused_count.fetch_add(1, Ordering::SeqCst);
                    }
                    Err(other) => panic!("unexpected error: {other:?}"),
                }
            }
        }));
    }

    for handle in handles {
        handle.join().expect("worker panicked");
    }

    assert_eq!(success_count.load(Ordering::SeqCst), 10);
    assert_eq!(refused_count.load(Ordering::SeqCst), THREAD_COUNT * 5 - 10);
    assert_eq!(balance_of(&store, 1), 0);
    assert_eq!(balance_of(&store, 2), 1000);
}

/// Test: concurrent creation hands out every id exactly once.
#[test]
fn concurrent_creation_assigns_unique_sequential_ids() {
    let store = Arc::new(AccountStore::seeded());
    let barrier = Arc::new(Barrier::new(THREAD_COUNT));

    let mut handles = vec![];
    for _ in 0..THREAD_COUNT {
        let store = Arc::clone(&store);
        let barrier = Arc::clone(&barrier);
        handles.push(thread::spawn(move || {
            barrier.wait();
            (0..ITERATIONS_PER_THREAD)
                .map(|_| store.create_account(NewAccount::default()).unwrap().id())
                .collect::<Vec<_>>()
        }));
    }

    let mut ids = HashSet::new();
    for handle in handles {
        for id in handle.join().expect("worker panicked") {
            assert!(ids.insert(id), "id {id} handed out twice");
        }
    }

    let created = THREAD_COUNT * ITERATIONS_PER_THREAD;
    assert_eq!(ids.len(), created);
    assert_eq!(store.len().unwrap(), created + 3);

    let listed = store.list().unwrap();
    for (idx, account) in listed.iter().enumerate() {
        assert_eq!(account.id(), AccountId::new(idx as i64 + 1));
    }
}
