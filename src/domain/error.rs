//! Domain Error Types
//!
//! Pure business failures, independent of the web and store layers.

use thiserror::Error;

/// Business rule violations and domain invariant failures.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Blank or malformed holder name
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Invalid amount (zero, negative, malformed, or exceeds limit)
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Transfer to the same account
    #[error("Cannot transfer to the same account")]
    SameAccount,

    /// No account with the given number
    #[error("Account not found: {0}")]
    AccountNotFound(String),

    /// Insufficient balance for debit operation
    #[error("Insufficient balance: required {required}, available {available}")]
    InsufficientBalance {
        required: rust_decimal::Decimal,
        available: rust_decimal::Decimal,
    },

    /// Account number collisions exhausted the retry budget
    #[error("Could not generate a unique account number after {attempts} attempts")]
    GenerationExhausted { attempts: u32 },
}

impl DomainError {
    /// Create an insufficient balance error
    pub fn insufficient_balance(
        required: rust_decimal::Decimal,
        available: rust_decimal::Decimal,
    ) -> Self {
        Self::InsufficientBalance {
            required,
            available,
        }
    }

    /// Check if this is a client error (caller's fault)
    pub fn is_client_error(&self) -> bool {
        !matches!(self, Self::GenerationExhausted { .. })
    }
}

impl From<crate::domain::AmountError> for DomainError {
    fn from(err: crate::domain::AmountError) -> Self {
        Self::InvalidAmount(err.to_string())
    }
}
