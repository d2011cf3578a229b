//! HTTP request handlers for the eligibility API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use chrono::Utc;
use serde_json::json;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::evaluate_with_ruleset;
use crate::models::EligibilityInput;

use super::request::EvaluationRequest;
use super::response::{ApiError, ApiErrorResponse, EvaluationResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/evaluate", post(evaluate_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}

/// Handler for GET /health.
async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    let metadata = state.ruleset().metadata();
    Json(json!({
        "status": "ok",
        "engine_version": env!("CARGO_PKG_VERSION"),
        "ruleset_version": metadata.version,
    }))
}

/// Handler for POST /evaluate.
///
/// Validates the request, evaluates it against the shared ruleset, and wraps
/// the result in an [`EvaluationResponse`].
async fn evaluate_handler(
    State(state): State<AppState>,
    payload: Result<Json<EvaluationRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing evaluation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") || body_text.contains("unknown variant")
                    {
                        ApiError::validation_error(body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    if let Err(err) = request.validate() {
        warn!(
            correlation_id = %correlation_id,
            error = %err,
            "Request failed validation"
        );
        let api_error: ApiErrorResponse = err.into();
        return (
            api_error.status,
            [(header::CONTENT_TYPE, "application/json")],
            Json(api_error.error),
        )
            .into_response();
    }

    let input: EligibilityInput = request.into();
    let ruleset = state.ruleset();

    let start_time = Instant::now();
    let eligibility = evaluate_with_ruleset(&input, ruleset);
    let duration = start_time.elapsed();

    info!(
        correlation_id = %correlation_id,
        jurisdiction = %input.jurisdiction,
        result = eligibility.result.label(),
        score = eligibility.score,
        duration_us = duration.as_micros(),
        "Evaluation completed"
    );

    let response = EvaluationResponse {
        evaluation_id: correlation_id,
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        ruleset: ruleset.metadata().clone(),
        eligibility,
    };

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(response),
    )
        .into_response()
}
