//! In-memory store adapters
//!
//! Reference implementations of the store contracts backed by tokio
//! `RwLock`s. Used by the binary and the test suite; a deployment against a
//! real database replaces these behind the same traits.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::{Account, Transaction};

use super::{AccountStore, StoreError, TransactionStore};

/// Accounts keyed by account number.
#[derive(Debug, Default)]
pub struct MemoryAccountStore {
    accounts: RwLock<HashMap<String, Account>>,
}

impl MemoryAccountStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AccountStore for MemoryAccountStore {
    async fn insert(&self, account: Account) -> Result<(), StoreError> {
        let mut accounts = self.accounts.write().await;
        if accounts.contains_key(&account.account_number) {
            return Err(StoreError::DuplicateKey(account.account_number));
        }
        accounts.insert(account.account_number.clone(), account);
        Ok(())
    }

    async fn fetch(&self, account_number: &str) -> Result<Option<Account>, StoreError> {
        Ok(self.accounts.read().await.get(account_number).cloned())
    }

    async fn update(&self, account: &Account) -> Result<(), StoreError> {
        let mut accounts = self.accounts.write().await;
        match accounts.get_mut(&account.account_number) {
            Some(stored) => {
                *stored = account.clone();
                Ok(())
            }
            None => Err(StoreError::Unavailable(format!(
                "update of unknown account {}",
                account.account_number
            ))),
        }
    }

    async fn delete(&self, account_number: &str) -> Result<bool, StoreError> {
        Ok(self.accounts.write().await.remove(account_number).is_some())
    }

    async fn list(&self) -> Result<Vec<Account>, StoreError> {
        Ok(self.accounts.read().await.values().cloned().collect())
    }
}

/// Append-only transaction log.
#[derive(Debug, Default)]
pub struct MemoryTransactionStore {
    transactions: RwLock<Vec<Transaction>>,
}

impl MemoryTransactionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TransactionStore for MemoryTransactionStore {
    async fn append(&self, transaction: Transaction) -> Result<(), StoreError> {
        self.transactions.write().await.push(transaction);
        Ok(())
    }

    async fn find_by_account(&self, account_number: &str) -> Result<Vec<Transaction>, StoreError> {
        Ok(self
            .transactions
            .read()
            .await
            .iter()
            .filter(|t| t.touches(account_number))
            .cloned()
            .collect())
    }
}
