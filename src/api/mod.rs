//! API module
//!
//! HTTP surface of the ledger service.

pub mod middleware;
pub mod routes;

pub use routes::create_router;
