//! HTTP API module for the overtime eligibility engine.
//!
//! This module exposes the engine over HTTP: `POST /evaluate` takes an
//! eligibility request and returns the estimate, and `GET /health` reports
//! liveness.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{EvaluationRequest, MAX_WEEKLY_HOURS};
pub use response::{ApiError, ApiErrorResponse, EvaluationResponse};
pub use state::AppState;
