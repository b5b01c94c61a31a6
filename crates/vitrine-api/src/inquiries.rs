use axum::{Json, extract::State, response::IntoResponse};
use chrono::{DateTime, SecondsFormat, Utc};
use tracing::{info, warn};

use vitrine_types::api::{SubmitFormRequest, SubmitFormResponse};
use vitrine_types::models::Inquiry;

use crate::auth::AppState;
use crate::error::ApiError;
use crate::validation;

pub async fn submit_form(
    State(state): State<AppState>,
    Json(req): Json<SubmitFormRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let inquiry = validation::validate_submission(&req).map_err(ApiError::Validation)?;

    // Stamp at microsecond precision so the stored text and the value
    // echoed back to the client are the same instant.
    let stamp = Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true);
    let created_at = stamp.parse::<DateTime<Utc>>().unwrap_or_else(|_| Utc::now());

    // Run the blocking insert off the async runtime
    let db = state.clone();
    let record = inquiry.clone();
    let created = stamp.clone();
    let id = tokio::task::spawn_blocking(move || db.db.insert_inquiry(&record, &created))
        .await
        .map_err(|e| ApiError::Save(anyhow::anyhow!("spawn_blocking join error: {}", e)))?
        .map_err(ApiError::Save)?;

    info!("New inquiry saved with ID: {}", id);

    Ok(Json(SubmitFormResponse {
        message: "Form submitted successfully!".to_string(),
        data: Inquiry {
            id,
            created_at,
            name: inquiry.name,
            email: inquiry.email,
            phone: inquiry.phone,
            user_message: inquiry.user_message,
            budget: inquiry.budget,
            employment: inquiry.employment,
        },
    }))
}

pub async fn list_inquiries(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let db = state.clone();
    let rows = tokio::task::spawn_blocking(move || db.db.list_inquiries())
        .await
        .map_err(|e| ApiError::Load(anyhow::anyhow!("spawn_blocking join error: {}", e)))?
        .map_err(ApiError::Load)?;

    let inquiries: Vec<Inquiry> = rows
        .into_iter()
        .map(|row| Inquiry {
            created_at: row.created_at.parse().unwrap_or_else(|e| {
                warn!("Corrupt created_at '{}' on inquiry {}: {}", row.created_at, row.id, e);
                DateTime::default()
            }),
            id: row.id,
            name: row.name,
            email: row.email,
            phone: row.phone,
            user_message: row.user_message,
            budget: row.budget,
            employment: row.employment,
        })
        .collect();

    Ok(Json(inquiries))
}
