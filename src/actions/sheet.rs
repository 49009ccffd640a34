use serde_json::{json, Value};

use crate::submission::NormalizedBody;

use super::ActionError;

/// Reply message the spreadsheet API sends after appending a row.
pub const INSERTED_MESSAGE: &str = "Successfully Inserted";

/// Appends applications to the spreadsheet-backed storage API.
pub struct SheetClient {
    client: reqwest::Client,
    url: String,
}

impl SheetClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }

    /// Returns true only when the API confirms the insert. Every failure is
    /// logged and folded into `false`.
    pub async fn submit(&self, body: &NormalizedBody) -> bool {
        match self.insert(body).await {
            Ok(()) => {
                tracing::debug!("Application stored");
                true
            }
            Err(e) => {
                tracing::warn!("Storing application failed: {e}");
                false
            }
        }
    }

    async fn insert(&self, body: &NormalizedBody) -> Result<(), ActionError> {
        let row = body.to_value()?;

        let resp = self
            .client
            .post(&self.url)
            .header("Content-Type", "application/json")
            .json(&json!([row]))
            .send()
            .await?;

        let status = resp.status();
        let reply: Value = resp
            .json()
            .await
            .map_err(|e| ActionError::from(format!("Unreadable storage reply ({status}): {e}")))?;

        match reply.get("message").and_then(Value::as_str) {
            Some(INSERTED_MESSAGE) => Ok(()),
            _ => Err(ActionError::from(format!("Unexpected storage reply ({status}): {reply}"))),
        }
    }
}
