pub mod auth;
pub mod error;
pub mod inquiries;
pub mod validation;

use axum::{
    Router,
    routing::{get, post},
};

use auth::AppState;

/// The full API surface. CORS and request tracing are layered on by the
/// binary so tests can drive these routes directly.
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/api/login", post(auth::login))
        .route("/api/submit-form", post(inquiries::submit_form))
        .route("/api/inquiries", get(inquiries::list_inquiries))
        .with_state(state)
}
