use axum::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
    ACCESS_CONTROL_MAX_AGE, ACCESS_CONTROL_REQUEST_HEADERS, ACCESS_CONTROL_REQUEST_METHOD, ALLOW,
    ORIGIN,
};
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};

pub const ALLOWED_METHODS: &str = "GET,HEAD,POST,OPTIONS";
pub const ALLOW_LIST: &str = "GET, HEAD, POST, OPTIONS";
pub const MAX_AGE: &str = "86400";

/// Return the request's Origin header if it equals the configured origin exactly.
pub fn matching_origin<'a>(headers: &'a HeaderMap, allowed: &str) -> Option<&'a HeaderValue> {
    headers
        .get(ORIGIN)
        .filter(|origin| origin.as_bytes() == allowed.as_bytes())
}

/// CORS headers attached to every response for an allowed origin.
pub fn cors_headers(origin: &HeaderValue) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(ALLOWED_METHODS),
    );
    headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, origin.clone());
    headers.insert(ACCESS_CONTROL_MAX_AGE, HeaderValue::from_static(MAX_AGE));
    headers
}

/// Answer an OPTIONS request. A full CORS preflight gets the allowed
/// methods plus the requested headers echoed back; anything else is a
/// plain OPTIONS and only learns which methods exist.
pub fn preflight(headers: &HeaderMap) -> Response {
    match (
        headers.get(ORIGIN),
        headers.get(ACCESS_CONTROL_REQUEST_METHOD),
        headers.get(ACCESS_CONTROL_REQUEST_HEADERS),
    ) {
        (Some(origin), Some(_), Some(requested)) => {
            let mut response_headers = cors_headers(origin);
            response_headers.insert(ACCESS_CONTROL_ALLOW_HEADERS, requested.clone());
            (StatusCode::NO_CONTENT, response_headers).into_response()
        }
        _ => (
            StatusCode::NO_CONTENT,
            [(ALLOW, HeaderValue::from_static(ALLOW_LIST))],
        )
            .into_response(),
    }
}
