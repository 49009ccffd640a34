use axum::body::Bytes;
use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, Method};
use axum::response::{IntoResponse, Response};
use serde_json::{json, Value};

use crate::config::Variant;
use crate::error::AppError;
use crate::state::SharedState;
use crate::submission::parser;

use super::cors;

pub const INSERT_FAILED: &str = "Inserting the application failed.";

/// Single entry point for application submissions.
pub async fn apply(
    State(state): State<SharedState>,
    method: Method,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, AppError> {
    match state.config.variant {
        Variant::Sheet => store_and_notify(&state, &method, &headers, body).await,
        Variant::Relay => relay(&state, &method, &headers, body).await,
    }
}

async fn store_and_notify(
    state: &SharedState,
    method: &Method,
    headers: &HeaderMap,
    body: Bytes,
) -> Result<Response, AppError> {
    if *method != Method::POST {
        return Err(AppError::MethodNotAllowed);
    }

    let sheet = state
        .sheet
        .as_ref()
        .ok_or_else(|| AppError::Dispatch("storage endpoint is not configured".to_string()))?;

    let body = parser::normalize(headers, body)
        .await
        .map_err(AppError::Dispatch)?;

    // The form reads `status` from the body, so a failed insert still answers 200.
    if !sheet.submit(&body).await {
        return Ok(status_response(
            json!({ "status": "ERROR", "message": INSERT_FAILED }),
        ));
    }

    state.notifier.notify_best_effort(&body).await;

    Ok(status_response(json!({ "status": "SUCCESS" })))
}

async fn relay(
    state: &SharedState,
    method: &Method,
    headers: &HeaderMap,
    body: Bytes,
) -> Result<Response, AppError> {
    let allowed = state
        .config
        .allowed_origin
        .as_deref()
        .ok_or_else(|| AppError::Dispatch("allowed origin is not configured".to_string()))?;

    let Some(origin) = cors::matching_origin(headers, allowed) else {
        tracing::debug!("Rejected {method} from origin {:?}", headers.get("origin"));
        return Err(AppError::MethodNotAllowed);
    };

    match *method {
        Method::OPTIONS => Ok(cors::preflight(headers)),
        Method::POST => {
            // The form must be able to read the error text too.
            let mut response = match parser::normalize(headers, body).await {
                Ok(body) => {
                    state.notifier.notify_best_effort(&body).await;
                    status_response(json!({ "status": "SUCCESS" }))
                }
                Err(e) => AppError::Dispatch(e).into_response(),
            };
            response.headers_mut().extend(cors::cors_headers(origin));
            Ok(response)
        }
        _ => Err(AppError::MethodNotAllowed),
    }
}

fn status_response(body: Value) -> Response {
    (
        [(CONTENT_TYPE, "application/json;charset=UTF-8")],
        body.to_string(),
    )
        .into_response()
}
