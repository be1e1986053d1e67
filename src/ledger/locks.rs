//! Per-account mutation locks
//!
//! Every balance mutation holds the account's exclusive lock from the
//! pre-mutation read until the account update and its transaction record are
//! written, so two concurrent withdrawals can never both pass the
//! sufficiency check against the same prior balance.
//!
//! For two-account operations the lock for the lexicographically smaller
//! account number is always taken first, giving a total acquisition order
//! that rules out deadlock between opposite-direction transfers.
//!
//! Entries are never removed: a registry that dropped a deleted account's
//! mutex would hand a later operation on the same number a fresh lock while
//! a task queued on the old one still holds or awaits its guard, and the two
//! would mutate concurrently once the number is reused. An entry outlives
//! its account; growth is bounded by the distinct numbers ever seen.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

/// Registry of per-account async mutexes.
#[derive(Debug, Default)]
pub struct AccountLocks {
    locks: Mutex<HashMap<String, Arc<AsyncMutex<()>>>>,
}

impl AccountLocks {
    pub fn new() -> Self {
        Self::default()
    }

    fn entry(&self, account_number: &str) -> Arc<AsyncMutex<()>> {
        let mut locks = self.locks.lock().expect("lock registry poisoned");
        locks
            .entry(account_number.to_string())
            .or_insert_with(|| Arc::new(AsyncMutex::new(())))
            .clone()
    }

    /// Acquire the exclusive mutation lock for one account.
    pub async fn acquire(&self, account_number: &str) -> OwnedMutexGuard<()> {
        self.entry(account_number).lock_owned().await
    }

    /// Acquire both locks in lexicographic order of account number.
    ///
    /// Guards are returned in `(first, second)` acquisition order; callers
    /// only need them held, not distinguished.
    pub async fn acquire_pair(
        &self,
        a: &str,
        b: &str,
    ) -> (OwnedMutexGuard<()>, OwnedMutexGuard<()>) {
        debug_assert_ne!(a, b);
        let (first, second) = if a < b { (a, b) } else { (b, a) };
        let first_guard = self.acquire(first).await;
        let second_guard = self.acquire(second).await;
        (first_guard, second_guard)
    }
}
