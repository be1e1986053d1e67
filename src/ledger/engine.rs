//! Ledger engine
//!
//! Owns the business rules: validates amounts, moves balances, and appends
//! the transaction records that make every balance change auditable. Talks
//! to storage only through the store traits and never caches balances across
//! calls; every mutation re-reads current state under the account's lock.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use rust_decimal::Decimal;

use crate::domain::{Account, Amount, DomainError, Transaction};
use crate::error::{AppError, AppResult};
use crate::store::{AccountStore, StoreError, TransactionStore};

use super::account_number;
use super::locks::AccountLocks;

/// Default upper bound on a single store call.
const DEFAULT_STORE_TIMEOUT: Duration = Duration::from_secs(5);

/// Default retry budget for account number collisions.
const DEFAULT_NUMBER_ATTEMPTS: u32 = 5;

/// The account ledger engine.
pub struct LedgerEngine {
    accounts: Arc<dyn AccountStore>,
    transactions: Arc<dyn TransactionStore>,
    locks: AccountLocks,
    store_timeout: Duration,
    number_attempts: u32,
}

impl LedgerEngine {
    pub fn new(accounts: Arc<dyn AccountStore>, transactions: Arc<dyn TransactionStore>) -> Self {
        Self {
            accounts,
            transactions,
            locks: AccountLocks::new(),
            store_timeout: DEFAULT_STORE_TIMEOUT,
            number_attempts: DEFAULT_NUMBER_ATTEMPTS,
        }
    }

    /// Override the bounded store-call timeout.
    pub fn with_store_timeout(mut self, timeout: Duration) -> Self {
        self.store_timeout = timeout;
        self
    }

    /// Override the account number collision retry budget.
    pub fn with_number_attempts(mut self, attempts: u32) -> Self {
        self.number_attempts = attempts.max(1);
        self
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Open a new account with a zero balance.
    ///
    /// The generated number is not guaranteed unique up front; the engine
    /// inserts and retries on a unique-key violation, bounded by the
    /// configured attempt budget.
    pub async fn create_account(&self, holder_name: &str) -> AppResult<Account> {
        let name = holder_name.trim();
        if name.is_empty() {
            return Err(DomainError::InvalidInput("holder name must not be blank".to_string()).into());
        }

        for attempt in 1..=self.number_attempts {
            let number = account_number::generate(name)?;
            let account = Account::open(number.clone(), name.to_string());

            match self.store_call(self.accounts.insert(account.clone())).await {
                Ok(()) => {
                    tracing::info!(account_number = %number, holder = %name, "account created");
                    return Ok(account);
                }
                Err(AppError::Store(StoreError::DuplicateKey(_))) => {
                    tracing::warn!(
                        account_number = %number,
                        attempt,
                        "account number collision, regenerating"
                    );
                }
                Err(err) => return Err(err),
            }
        }

        Err(DomainError::GenerationExhausted {
            attempts: self.number_attempts,
        }
        .into())
    }

    /// Fetch one account by number.
    pub async fn get_account(&self, account_number: &str) -> AppResult<Account> {
        self.fetch_existing(account_number).await
    }

    /// All accounts, store-defined order.
    pub async fn list_accounts(&self) -> AppResult<Vec<Account>> {
        self.store_call(self.accounts.list()).await
    }

    /// Credit `amount` to an account and record a DEPOSIT.
    pub async fn deposit(&self, account_number: &str, amount: Decimal) -> AppResult<Account> {
        let amount = Amount::new(amount).map_err(DomainError::from)?;

        let _guard = self.locks.acquire(account_number).await;

        let account = self.fetch_existing(account_number).await?;
        let updated =
            account.with_balance(account.balance.credit(&amount).map_err(DomainError::from)?);

        self.store_call(self.accounts.update(&updated)).await?;
        self.store_call(self.transactions.append(Transaction::deposit(account_number, amount)))
            .await?;

        tracing::info!(account_number, %amount, balance = %updated.balance, "deposit");
        Ok(updated)
    }

    /// Debit `amount` from an account and record a WITHDRAW.
    ///
    /// The sufficiency check and the balance write happen under the same
    /// account lock, so concurrent withdrawals cannot overdraw.
    pub async fn withdraw(&self, account_number: &str, amount: Decimal) -> AppResult<Account> {
        let amount = Amount::new(amount).map_err(DomainError::from)?;

        let _guard = self.locks.acquire(account_number).await;

        let account = self.fetch_existing(account_number).await?;
        if !account.balance.is_sufficient_for(&amount) {
            return Err(
                DomainError::insufficient_balance(amount.value(), account.balance.value()).into(),
            );
        }

        let updated =
            account.with_balance(account.balance.debit(&amount).map_err(DomainError::from)?);

        self.store_call(self.accounts.update(&updated)).await?;
        self.store_call(self.transactions.append(Transaction::withdraw(account_number, amount)))
            .await?;

        tracing::info!(account_number, %amount, balance = %updated.balance, "withdrawal");
        Ok(updated)
    }

    /// Move `amount` from one account to another as a single logical unit.
    ///
    /// Both accounts are locked for the whole operation, smaller account
    /// number first. If any store write after the debit fails, the already
    /// applied balances are restored before the failure is re-raised, so no
    /// partially applied transfer is observable outside the engine.
    pub async fn transfer(&self, from: &str, to: &str, amount: Decimal) -> AppResult<()> {
        let amount = Amount::new(amount).map_err(DomainError::from)?;
        if from == to {
            return Err(DomainError::SameAccount.into());
        }

        let _guards = self.locks.acquire_pair(from, to).await;

        let source = self.fetch_existing(from).await?;
        let destination = self.fetch_existing(to).await?;

        if !source.balance.is_sufficient_for(&amount) {
            return Err(
                DomainError::insufficient_balance(amount.value(), source.balance.value()).into(),
            );
        }

        // Compute both target balances before touching the store so a credit
        // overflow is rejected with no mutation at all.
        let debited = source.with_balance(source.balance.debit(&amount).map_err(DomainError::from)?);
        let credited = destination
            .with_balance(destination.balance.credit(&amount).map_err(DomainError::from)?);

        self.store_call(self.accounts.update(&debited)).await?;

        if let Err(err) = self.store_call(self.accounts.update(&credited)).await {
            tracing::warn!(from, to, %amount, "credit leg failed, rolling back debit");
            self.compensate(&source).await;
            return Err(err);
        }

        // Audit records follow the durably applied mutations: the two leg
        // records plus one TRANSFER carrying both account numbers. The log
        // is append-only, so if a later append fails the balances are
        // compensated but records already written in this loop stay behind;
        // the absent TRANSFER record marks the operation as not completed.
        let records = [
            Transaction::withdraw(from, amount),
            Transaction::deposit(to, amount),
            Transaction::transfer(from, to, amount),
        ];
        for record in records {
            if let Err(err) = self.store_call(self.transactions.append(record)).await {
                tracing::warn!(from, to, %amount, "record append failed, rolling back transfer");
                self.compensate(&destination).await;
                self.compensate(&source).await;
                return Err(err);
            }
        }

        tracing::info!(from, to, %amount, "transfer complete");
        Ok(())
    }

    /// Rename the account holder.
    pub async fn update_holder_name(
        &self,
        account_number: &str,
        new_name: &str,
    ) -> AppResult<Account> {
        let name = new_name.trim();
        if name.is_empty() {
            return Err(DomainError::InvalidInput("holder name must not be blank".to_string()).into());
        }

        // Updates overwrite the whole record, so the rename takes the same
        // lock as balance mutations to avoid clobbering a concurrent deposit.
        let _guard = self.locks.acquire(account_number).await;

        let account = self.fetch_existing(account_number).await?;
        let updated = account.with_holder_name(name.to_string());
        self.store_call(self.accounts.update(&updated)).await?;

        tracing::info!(account_number, holder = %name, "holder name updated");
        Ok(updated)
    }

    /// Remove an account. Historical transactions are retained, and so is
    /// the account's mutation lock: if the number is ever handed out again,
    /// operations on it keep serializing against any still-queued task.
    pub async fn delete_account(&self, account_number: &str) -> AppResult<()> {
        let _guard = self.locks.acquire(account_number).await;

        if !self.store_call(self.accounts.delete(account_number)).await? {
            return Err(DomainError::AccountNotFound(account_number.to_string()).into());
        }

        tracing::info!(account_number, "account deleted");
        Ok(())
    }

    /// History for one account, as source or destination. Returns records
    /// even for accounts that have since been deleted.
    pub async fn transactions_for(&self, account_number: &str) -> AppResult<Vec<Transaction>> {
        self.store_call(self.transactions.find_by_account(account_number))
            .await
    }

    // =========================================================================
    // Internals
    // =========================================================================

    async fn fetch_existing(&self, account_number: &str) -> AppResult<Account> {
        self.store_call(self.accounts.fetch(account_number))
            .await?
            .ok_or_else(|| DomainError::AccountNotFound(account_number.to_string()).into())
    }

    /// Restore a pre-transfer snapshot. Compensation only covers account
    /// balances: transaction records appended before the failure cannot be
    /// taken back from the append-only log. A failing compensation leaves
    /// the store itself inconsistent and is loud in the logs; there is
    /// nothing further the engine can do about it.
    async fn compensate(&self, snapshot: &Account) {
        if let Err(err) = self.store_call(self.accounts.update(snapshot)).await {
            tracing::error!(
                account_number = %snapshot.account_number,
                error = %err,
                "compensating rollback failed"
            );
        }
    }

    /// Run one store call under the bounded timeout.
    async fn store_call<T>(
        &self,
        call: impl Future<Output = Result<T, StoreError>>,
    ) -> AppResult<T> {
        match tokio::time::timeout(self.store_timeout, call).await {
            Ok(result) => result.map_err(AppError::from),
            Err(_) => Err(StoreError::Timeout.into()),
        }
    }
}
