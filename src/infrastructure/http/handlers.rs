//! Route handlers for the JSON API

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::application::errors::{PaymentError, StorageError, WalletError};
use crate::domain::entities::{IntentResult, PaymentConfirmation, WalletInfo};

use super::AppState;

pub const HEALTH_STATUS: &str = "RentBot AI is running!";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub session_id: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    pub response: String,
    pub payment_intent: IntentResult,
    pub session_id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    pub amount: f64,
    #[serde(default)]
    pub tenant_name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub session_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cleared: Option<bool>,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

pub type ApiError = (StatusCode, Json<ErrorBody>);

fn internal_error(error: impl Into<String>, details: Option<String>) -> ApiError {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorBody {
            error: error.into(),
            details,
        }),
    )
}

fn chat_error(error: impl std::fmt::Display) -> ApiError {
    tracing::error!("Error: {}", error);
    internal_error(format!("Failed to process message: {}", error), None)
}

fn payment_error(error: PaymentError) -> ApiError {
    tracing::error!("Payment error: {}", error);
    internal_error("Payment failed", None)
}

fn wallet_error(error: WalletError) -> ApiError {
    tracing::error!("Error fetching wallet info: {}", error);
    internal_error("Failed to fetch wallet info", Some(error.to_string()))
}

fn session_error(error: StorageError) -> ApiError {
    tracing::error!("Session error: {}", error);
    let status = match error {
        StorageError::InvalidSessionId(_) => StatusCode::BAD_REQUEST,
    };
    (
        status,
        Json(ErrorBody {
            error: format!("Failed to clear session: {}", error),
            details: None,
        }),
    )
}

pub async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, ApiError> {
    let Json(request) = payload.map_err(|e| chat_error(e.body_text()))?;

    let session_id = request
        .session_id
        .filter(|id| !id.trim().is_empty())
        .unwrap_or_else(|| state.default_session_id.to_string());

    let turn = state
        .chat
        .handle_turn(&session_id, &request.message)
        .await
        .map_err(chat_error)?;

    Ok(Json(ChatResponse {
        response: turn.reply,
        payment_intent: turn.intent,
        session_id: turn.session_id,
    }))
}

pub async fn payment(
    State(state): State<AppState>,
    payload: Result<Json<PaymentRequest>, JsonRejection>,
) -> Result<Json<PaymentConfirmation>, ApiError> {
    let Json(request) = payload
        .map_err(|e| payment_error(PaymentError::InvalidRequest(e.body_text())))?;

    let payer = request.tenant_name.as_deref().unwrap_or("unknown tenant");
    let confirmation = state
        .payments
        .simulate_payment(request.amount, payer)
        .await
        .map_err(payment_error)?;

    Ok(Json(confirmation))
}

pub async fn wallet_info(State(state): State<AppState>) -> Result<Json<WalletInfo>, ApiError> {
    state.wallets.get_wallet_info().await.map(Json).map_err(wallet_error)
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: HEALTH_STATUS })
}

pub async fn create_session() -> Json<SessionResponse> {
    Json(SessionResponse {
        session_id: uuid::Uuid::new_v4().to_string(),
        cleared: None,
    })
}

pub async fn clear_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<SessionResponse>, ApiError> {
    let existed = state
        .chat
        .store()
        .clear(&session_id)
        .await
        .map_err(session_error)?;

    tracing::info!("[{}] Session cleared (existed: {})", session_id, existed);

    Ok(Json(SessionResponse {
        session_id,
        cleared: Some(true),
    }))
}
