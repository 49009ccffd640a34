use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

#[derive(Debug)]
pub enum AppError {
    MethodNotAllowed,
    Dispatch(String),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::MethodNotAllowed => write!(f, "Method Not Allowed"),
            AppError::Dispatch(msg) => write!(f, "Error thrown {msg}"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED.into_response(),
            AppError::Dispatch(ref msg) => {
                tracing::error!("Dispatch error: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
            }
        }
    }
}
