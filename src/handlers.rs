use std::time::Instant;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use serde_json::{Value, json};
use tracing::{error, info};

use crate::AppState;
use crate::logger;
use crate::models::{ChatRequest, ChatResponse, ErrorResponse};
use crate::relay::{self, RelayError, Reply};

pub async fn health_check() -> &'static str {

    "OK"

}

pub async fn metrics_handler(State(state): State<AppState>) -> Json<Value> {

    let snapshot = state.metrics.snapshot();
    let reply_rate = snapshot.reply_rate();

    Json(json!({
        "counters": snapshot,
        "reply_rate": reply_rate
    }))

}

pub async fn chat_handler(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>
) -> Result<Json<ChatResponse>, (StatusCode, Json<ErrorResponse>)> {

    let started = Instant::now();
    state.metrics.record_request();
    info!("received chat request");

    let reply = relay::generate_reply(
        &state.http_client,
        &state.config,
        request.message.as_deref()
    )
    .await
    .map_err(|err| {

        let (status, outcome, public_error) = match &err {
            RelayError::EmptyMessage => {
                state.metrics.record_rejected();
                (StatusCode::BAD_REQUEST, "rejected", "No message content provided")
            }
            RelayError::MissingApiKey => {
                state.metrics.record_failure();
                (StatusCode::INTERNAL_SERVER_ERROR, "no_api_key", "OpenRouter API key not configured")
            }
            RelayError::Upstream(_) => {
                state.metrics.record_failure();
                (StatusCode::INTERNAL_SERVER_ERROR, "upstream_error", "Failed to get AI response")
            }
        };

        // the caller only ever sees the generic text above
        error!(error = %err, "chat request failed");
        logger::log_request(outcome, &state.config.model, started.elapsed().as_millis());

        (status, Json(ErrorResponse { error: public_error.to_string() }))

    })?;

    let outcome = match &reply {
        Reply::Answer(_) => {
            state.metrics.record_reply();
            "reply"
        }
        Reply::Fallback => {
            state.metrics.record_fallback();
            "fallback"
        }
    };

    let elapsed = started.elapsed();
    info!(outcome, elapsed_ms = elapsed.as_millis() as u64, "chat request resolved");
    logger::log_request(outcome, &state.config.model, elapsed.as_millis());

    Ok(Json(ChatResponse { response: reply.into_text() }))

}
