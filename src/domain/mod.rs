//! Domain types
//!
//! Value objects shared by the ledger engine, stores, and the API layer.

mod account;
mod amount;
mod error;
mod transaction;

pub use account::Account;
pub use amount::{Amount, AmountError, Balance};
pub use error::DomainError;
pub use transaction::{Transaction, TransactionKind, TransactionStatus};
