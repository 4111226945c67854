//! REST transport for the validation pipeline.
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `POST` | `/` | Validate a card payload |
//! | `GET` | `/health` | Liveness check |
//! | `GET` | `/swagger-ui/` | Interactive API documentation |
//!
//! The body is decoded as JSON whatever `Content-Type` the client sends.
//! Bodies that cannot be decoded are answered with code `001`; everything
//! else is delegated to [`Validator::evaluate`].

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::{header, Method, StatusCode},
    response::Json,
    routing::{get, post},
    Router,
};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

use crate::error::ValidationError;
use crate::expiry::Clock;
use crate::mask::mask_card_number;
use crate::validate::{ErrorDetail, ValidationResult, Validator};
use crate::CardInput;

// ============================================================================
// OpenAPI Documentation
// ============================================================================

/// OpenAPI document served at `/api-docs/openapi.json`.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Card Validation API",
        version = "0.1.0",
        description = "Validates card number format, Luhn checksum and expiration date. No auth or rate limiting.",
        license(name = "MIT")
    ),
    tags(
        (name = "Validation", description = "Card payload validation"),
        (name = "System", description = "Health and status endpoints")
    ),
    paths(validate_card, health),
    components(schemas(CardInput, ValidationResult, ErrorDetail, HealthResponse))
)]
pub struct ApiDoc;

// ============================================================================
// State and Response Types
// ============================================================================

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    validator: Validator<Arc<dyn Clock>>,
}

impl AppState {
    /// Creates handler state that reads today's date from `clock`.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            validator: Validator::with_clock(clock),
        }
    }
}

/// Body of `GET /health`.
#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    status: String,
    /// API version
    version: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// Validate a card payload
#[utoipa::path(
    post,
    path = "/",
    request_body = CardInput,
    responses(
        (status = 200, description = "Card is valid", body = ValidationResult,
            example = json!({"valid": true})),
        (status = 400, description = "Malformed body or invalid card", body = ValidationResult,
            example = json!({"valid": false, "error": {"code": "004", "message": "the card number is incorrect"}}))
    ),
    tag = "Validation"
)]
async fn validate_card(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> (StatusCode, Json<ValidationResult>) {
    let result = match serde_json::from_slice::<CardInput>(&body) {
        Ok(input) => {
            let result = state.validator.evaluate(&input);
            tracing::info!(
                card = %mask_card_number(input.card_number()),
                issuer = state.validator.matcher().issuer(input.card_number()).unwrap_or("unknown"),
                valid = result.is_valid(),
                code = result.error_code().unwrap_or("-"),
                "card validated"
            );
            result
        }
        Err(e) => {
            tracing::warn!(error = %e, "rejected request body");
            ValidationResult::from_error(&ValidationError::MalformedRequest)
        }
    };

    let status =
        StatusCode::from_u16(result.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(result))
}

/// Health check
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "System"
)]
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

// ============================================================================
// Router
// ============================================================================

/// Builds the application router.
///
/// `clock` supplies today's date for expiration checks; pass
/// [`crate::expiry::SystemClock`] in production.
pub fn router(clock: Arc<dyn Clock>) -> Router {
    let state = Arc::new(AppState::new(clock));

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .allow_origin(Any);

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/", post(validate_card))
        .route("/health", get(health))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
