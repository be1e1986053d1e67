//! Common test utilities

use std::sync::Arc;

use axum::{middleware, Router};

use bank_ledger::api;
use bank_ledger::ledger::LedgerEngine;
use bank_ledger::store::{MemoryAccountStore, MemoryTransactionStore};

/// Build the application router against fresh in-memory stores.
pub fn test_app() -> Router {
    let engine = Arc::new(LedgerEngine::new(
        Arc::new(MemoryAccountStore::new()),
        Arc::new(MemoryTransactionStore::new()),
    ));

    Router::new()
        .nest(
            "/api",
            api::create_router().layer(middleware::from_fn(api::middleware::logging_middleware)),
        )
        .with_state(engine)
}
