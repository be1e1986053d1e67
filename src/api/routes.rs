//! API Routes
//!
//! HTTP endpoint definitions. Handlers translate requests into ledger engine
//! calls and engine failures into status codes via `AppError`.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::{Account, DomainError, Transaction};
use crate::error::AppError;
use crate::ledger::LedgerEngine;

/// Shared handler state.
pub type AppState = Arc<LedgerEngine>;

// =========================================================================
// Request/Response types
// =========================================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateAccountRequest {
    pub holder_name: String,
}

/// Deposit and withdraw bodies. Amounts travel as strings to keep floats out
/// of monetary arithmetic.
#[derive(Debug, Serialize, Deserialize)]
pub struct AmountRequest {
    pub amount: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TransferRequest {
    pub from_account: String,
    pub to_account: String,
    pub amount: String,
}

#[derive(Debug, Serialize)]
pub struct TransferResponse {
    pub from_account: String,
    pub to_account: String,
    pub amount: Decimal,
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateAccountRequest {
    pub holder_name: String,
}

// =========================================================================
// API Router
// =========================================================================

/// Create the API router
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/accounts", post(create_account))
        .route("/accounts", get(list_accounts))
        // Transfer before the parameterized routes for readability; axum
        // matches the literal segment either way
        .route("/accounts/transfer", post(transfer))
        .route("/accounts/:account_number", get(get_account))
        .route("/accounts/:account_number", axum::routing::patch(update_holder_name))
        .route("/accounts/:account_number", delete(delete_account))
        .route("/accounts/:account_number/deposit", put(deposit))
        .route("/accounts/:account_number/withdraw", put(withdraw))
        .route("/accounts/:account_number/transactions", get(get_transactions))
}

fn parse_amount(raw: &str) -> Result<Decimal, AppError> {
    raw.trim()
        .parse::<Decimal>()
        .map_err(|e| DomainError::InvalidAmount(e.to_string()).into())
}

// =========================================================================
// Handlers
// =========================================================================

/// POST /accounts
async fn create_account(
    State(engine): State<AppState>,
    Json(request): Json<CreateAccountRequest>,
) -> Result<(StatusCode, Json<Account>), AppError> {
    let account = engine.create_account(&request.holder_name).await?;
    Ok((StatusCode::CREATED, Json(account)))
}

/// GET /accounts
async fn list_accounts(State(engine): State<AppState>) -> Result<Json<Vec<Account>>, AppError> {
    Ok(Json(engine.list_accounts().await?))
}

/// GET /accounts/:account_number
async fn get_account(
    State(engine): State<AppState>,
    Path(account_number): Path<String>,
) -> Result<Json<Account>, AppError> {
    Ok(Json(engine.get_account(&account_number).await?))
}

/// PUT /accounts/:account_number/deposit
async fn deposit(
    State(engine): State<AppState>,
    Path(account_number): Path<String>,
    Json(request): Json<AmountRequest>,
) -> Result<Json<Account>, AppError> {
    let amount = parse_amount(&request.amount)?;
    Ok(Json(engine.deposit(&account_number, amount).await?))
}

/// PUT /accounts/:account_number/withdraw
async fn withdraw(
    State(engine): State<AppState>,
    Path(account_number): Path<String>,
    Json(request): Json<AmountRequest>,
) -> Result<Json<Account>, AppError> {
    let amount = parse_amount(&request.amount)?;
    Ok(Json(engine.withdraw(&account_number, amount).await?))
}

/// POST /accounts/transfer
async fn transfer(
    State(engine): State<AppState>,
    Json(request): Json<TransferRequest>,
) -> Result<Json<TransferResponse>, AppError> {
    let amount = parse_amount(&request.amount)?;
    engine
        .transfer(&request.from_account, &request.to_account, amount)
        .await?;

    Ok(Json(TransferResponse {
        from_account: request.from_account,
        to_account: request.to_account,
        amount,
        status: "completed".to_string(),
    }))
}

/// PATCH /accounts/:account_number
async fn update_holder_name(
    State(engine): State<AppState>,
    Path(account_number): Path<String>,
    Json(request): Json<UpdateAccountRequest>,
) -> Result<Json<Account>, AppError> {
    Ok(Json(
        engine
            .update_holder_name(&account_number, &request.holder_name)
            .await?,
    ))
}

/// DELETE /accounts/:account_number
async fn delete_account(
    State(engine): State<AppState>,
    Path(account_number): Path<String>,
) -> Result<StatusCode, AppError> {
    engine.delete_account(&account_number).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /accounts/:account_number/transactions
async fn get_transactions(
    State(engine): State<AppState>,
    Path(account_number): Path<String>,
) -> Result<Json<Vec<Transaction>>, AppError> {
    Ok(Json(engine.transactions_for(&account_number).await?))
}
