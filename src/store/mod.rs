//! Store contracts
//!
//! The engine talks to durable storage only through these traits. Accounts
//! are keyed by account number (unique index required); transactions are
//! append-only and queryable by either account reference. Implementations
//! return owned value snapshots, never shared mutable state.

mod memory;

pub use memory::{MemoryAccountStore, MemoryTransactionStore};

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{Account, Transaction};

/// Failures surfaced by a store adapter.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Unique-key violation on insert (account number collision)
    #[error("Duplicate key: {0}")]
    DuplicateKey(String),

    /// The store did not answer within the bounded timeout
    #[error("Store call timed out")]
    Timeout,

    /// The store rejected or failed the call
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Durable keyed storage for account records.
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Insert a new account. Fails with `DuplicateKey` when an account with
    /// the same number already exists.
    async fn insert(&self, account: Account) -> Result<(), StoreError>;

    /// Fetch a snapshot by account number.
    async fn fetch(&self, account_number: &str) -> Result<Option<Account>, StoreError>;

    /// Overwrite the stored record for an existing account.
    async fn update(&self, account: &Account) -> Result<(), StoreError>;

    /// Remove an account. Returns whether it existed.
    async fn delete(&self, account_number: &str) -> Result<bool, StoreError>;

    /// All accounts, store-defined order.
    async fn list(&self) -> Result<Vec<Account>, StoreError>;
}

/// Append-only storage for transaction records.
#[async_trait]
pub trait TransactionStore: Send + Sync {
    /// Append one record. Records are never updated or removed.
    async fn append(&self, transaction: Transaction) -> Result<(), StoreError>;

    /// All records referencing the account as source or destination.
    async fn find_by_account(&self, account_number: &str) -> Result<Vec<Transaction>, StoreError>;
}
