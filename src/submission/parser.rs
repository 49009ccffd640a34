use axum::http::HeaderMap;
use bytes::Bytes;
use serde_json::{Map, Value};

use super::NormalizedBody;

/// Placeholder for payloads that are neither JSON, text nor form data.
pub const OPAQUE_PLACEHOLDER: &str = "a file";

/// Normalize a request body based on its Content-Type header.
///
/// JSON is re-serialized, plain text and HTML pass through untouched, form
/// bodies (url-encoded or multipart) fold into a flat JSON object and
/// anything else collapses to [`OPAQUE_PLACEHOLDER`].
pub async fn normalize(headers: &HeaderMap, body: Bytes) -> Result<NormalizedBody, String> {
    let ct = headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_ascii_lowercase();

    if ct.contains("application/json") {
        let value: Value =
            serde_json::from_slice(&body).map_err(|e| format!("Invalid JSON: {e}"))?;
        Ok(NormalizedBody::new(value.to_string()))
    } else if ct.contains("application/text") || ct.contains("text/html") {
        Ok(NormalizedBody::new(String::from_utf8_lossy(&body)))
    } else if ct.contains("form") {
        let map = if ct.contains("multipart/form-data") {
            parse_multipart(headers, body).await?
        } else {
            parse_form_urlencoded(&body)
        };
        Ok(NormalizedBody::new(Value::Object(map).to_string()))
    } else {
        Ok(NormalizedBody::new(OPAQUE_PLACEHOLDER))
    }
}

fn parse_form_urlencoded(body: &[u8]) -> Map<String, Value> {
    // Map::insert keeps the first position of a key and overwrites its value.
    let mut map = Map::new();
    for (k, v) in form_urlencoded::parse(body) {
        map.insert(k.into_owned(), Value::String(v.into_owned()));
    }
    map
}

/// Parse multipart form data using multer. File parts contribute their file name.
async fn parse_multipart(headers: &HeaderMap, body: Bytes) -> Result<Map<String, Value>, String> {
    let boundary = headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .and_then(|ct| multer::parse_boundary(ct).ok())
        .ok_or_else(|| "Missing multipart boundary".to_string())?;

    let stream = futures_util::stream::once(async { Ok::<_, std::io::Error>(body) });
    let mut multipart = multer::Multipart::new(stream, boundary);

    let mut map = Map::new();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| format!("Multipart error: {e}"))?
    {
        let name = field.name().unwrap_or("unknown").to_string();
        let file_name = field.file_name().map(str::to_string);
        let value = match file_name {
            Some(file_name) => file_name,
            None => field
                .text()
                .await
                .map_err(|e| format!("Field read error: {e}"))?,
        };
        map.insert(name, Value::String(value));
    }

    Ok(map)
}
