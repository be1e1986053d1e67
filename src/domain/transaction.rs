//! Transaction record
//!
//! Append-only audit entries for every completed balance mutation. Records
//! are written once, after the account update is durably applied, and are
//! never modified or deleted afterwards. Deleting an account leaves its
//! history in place.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Amount;

/// Kind of balance-affecting operation a record describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionKind {
    Deposit,
    Withdraw,
    Transfer,
}

/// Outcome marker. Only successful operations are recorded today; the enum
/// leaves room for partial-failure states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionStatus {
    Success,
}

/// One immutable ledger entry.
///
/// `source_account` names the account the operation was issued against;
/// `destination_account` is set for transfers only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub transaction_id: Uuid,

    #[serde(rename = "type")]
    pub kind: TransactionKind,

    pub amount: Amount,

    pub status: TransactionStatus,

    pub source_account: String,

    pub destination_account: Option<String>,

    pub created_at: DateTime<Utc>,
}

impl Transaction {
    /// Record a deposit into `account_number`.
    pub fn deposit(account_number: &str, amount: Amount) -> Self {
        Self::record(TransactionKind::Deposit, amount, account_number, None)
    }

    /// Record a withdrawal from `account_number`.
    pub fn withdraw(account_number: &str, amount: Amount) -> Self {
        Self::record(TransactionKind::Withdraw, amount, account_number, None)
    }

    /// Record a transfer between two accounts.
    pub fn transfer(from: &str, to: &str, amount: Amount) -> Self {
        Self::record(TransactionKind::Transfer, amount, from, Some(to))
    }

    fn record(
        kind: TransactionKind,
        amount: Amount,
        source: &str,
        destination: Option<&str>,
    ) -> Self {
        Self {
            transaction_id: Uuid::new_v4(),
            kind,
            amount,
            status: TransactionStatus::Success,
            source_account: source.to_string(),
            destination_account: destination.map(str::to_string),
            created_at: Utc::now(),
        }
    }

    /// Whether this record references the given account as source or
    /// destination.
    pub fn touches(&self, account_number: &str) -> bool {
        self.source_account == account_number
            || self.destination_account.as_deref() == Some(account_number)
    }
}
