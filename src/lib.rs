//! bank-ledger Library
//!
//! Re-exports modules for integration testing and external use.

pub mod api;
pub mod config;
pub mod domain;
pub mod ledger;
pub mod store;

mod error;

pub use config::Config;
pub use domain::{Account, Amount, AmountError, Balance, DomainError};
pub use domain::{Transaction, TransactionKind, TransactionStatus};
pub use error::{AppError, AppResult};
pub use ledger::LedgerEngine;
