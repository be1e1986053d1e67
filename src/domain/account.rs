//! Account record
//!
//! Value snapshot of a bank account as held by the account store. Mutations
//! go through the ledger engine and an explicit store update; a caller can
//! never alter stored truth by editing a returned snapshot.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Balance;

/// A bank account.
///
/// `account_number` is immutable once assigned; `holder_name` may change,
/// `balance` only through the engine's credit/debit paths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier, pattern `[A-Z]{3}[0-9]{4}`
    pub account_number: String,

    /// Account holder, non-blank
    pub holder_name: String,

    /// Current balance, never negative
    pub balance: Balance,

    /// When the account was created
    pub created_at: DateTime<Utc>,

    /// Last mutation time
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Open a new account with a zero balance.
    pub fn open(account_number: String, holder_name: String) -> Self {
        let now = Utc::now();
        Self {
            account_number,
            holder_name,
            balance: Balance::zero(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Return a copy with the given balance and a fresh `updated_at`.
    pub fn with_balance(&self, balance: Balance) -> Self {
        Self {
            balance,
            updated_at: Utc::now(),
            ..self.clone()
        }
    }

    /// Return a copy with the given holder name and a fresh `updated_at`.
    pub fn with_holder_name(&self, holder_name: String) -> Self {
        Self {
            holder_name,
            updated_at: Utc::now(),
            ..self.clone()
        }
    }
}
