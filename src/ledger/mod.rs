//! Account ledger core
//!
//! The engine plus its two supporting pieces: account number generation and
//! the per-account lock discipline.

pub mod account_number;
mod engine;
mod locks;

pub use engine::LedgerEngine;
pub use locks::AccountLocks;
