// edlp-core/src/infrastructure/http/handlers.rs

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde_json::{Value, json};
use tracing::error;

use super::router::AppState;
use crate::application::{self, SubmitOutcome};
use crate::domain::error::DomainError;
use crate::domain::policy::{NewPolicyRecord, PolicyDraft, PolicyRecord, validate};
use crate::error::EdlpError;
use crate::infrastructure::export::export_file_name;

const DB_ERROR_PREFIX: &str = "資料庫錯誤: ";

/// JSON `{ "error": ... }` body with a status code.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    fn internal(err: EdlpError) -> Self {
        error!("Request failed: {}", err);
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
    }
}

// Malformed bodies get the same `{error}` shape as every other failure.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::new(rejection.status(), rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

pub async fn health() -> &'static str {
    "OK"
}

pub async fn list_records(
    State(state): State<AppState>,
) -> Result<Json<Vec<PolicyRecord>>, ApiError> {
    let records = application::list_policies(state.store.as_ref())
        .await
        .map_err(ApiError::internal)?;
    Ok(Json(records))
}

/// Stores a record the client already canonicalized.
pub async fn submit(
    State(state): State<AppState>,
    payload: Result<Json<NewPolicyRecord>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(record) = payload?;
    let stored = application::submit_record(state.store.as_ref(), record)
        .await
        .map_err(|e| {
            error!("Submit failed: {}", e);
            ApiError::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("{}{}", DB_ERROR_PREFIX, e),
            )
        })?;
    Ok(Json(json!({ "success": true, "id": stored.id })))
}

pub async fn clear(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    application::clear_policies(state.store.as_ref())
        .await
        .map_err(ApiError::internal)?;
    Ok(Json(json!({ "success": true })))
}

pub async fn validate_draft(
    payload: Result<Json<PolicyDraft>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(draft) = payload?;
    let report = validate(&draft);
    Ok(Json(
        json!({ "valid": report.is_valid(), "errors": report.into_errors() }),
    ))
}

/// Server-side validate + canonicalize + store.
pub async fn submit_draft(
    State(state): State<AppState>,
    payload: Result<Json<PolicyDraft>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(draft) = payload?;
    let outcome = application::submit_draft(state.store.as_ref(), &draft)
        .await
        .map_err(ApiError::internal)?;

    Ok(match outcome {
        SubmitOutcome::Accepted(record) => Json(json!({
            "success": true,
            "id": record.id,
            "record": record,
        }))
        .into_response(),
        SubmitOutcome::Rejected(report) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "errors": report.into_errors() })),
        )
            .into_response(),
    })
}

pub async fn export(State(state): State<AppState>) -> Result<Response, ApiError> {
    let bytes = match application::export_csv(state.store.as_ref()).await {
        Ok(bytes) => bytes,
        Err(EdlpError::Domain(e @ DomainError::NothingToExport)) => {
            return Err(ApiError::new(StatusCode::NOT_FOUND, e.to_string()));
        }
        Err(e) => return Err(ApiError::internal(e)),
    };

    let file_name = export_file_name(&state.export_prefix, chrono::Local::now().date_naive());
    let headers = [
        (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", file_name),
        ),
    ];
    Ok((headers, bytes).into_response())
}
