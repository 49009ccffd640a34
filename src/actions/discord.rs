use chrono::Utc;

use crate::config::Variant;
use crate::submission::{NormalizedBody, Submission};

use super::embed;
use super::ActionError;

/// Posts application announcements to a Discord webhook.
pub struct DiscordNotifier {
    client: reqwest::Client,
    url: String,
    variant: Variant,
}

impl DiscordNotifier {
    pub fn new(url: impl Into<String>, variant: Variant) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
            variant,
        }
    }

    pub async fn notify(&self, body: &NormalizedBody) -> Result<(), ActionError> {
        let value = body.to_value()?;
        let (submission, warnings) = Submission::from_value(&value, self.variant)?;
        if !warnings.is_empty() {
            tracing::warn!("Submission warnings: {:?}", warnings);
        }

        let payload = embed::build(&submission, self.variant, Utc::now());

        // Discord answers 204 with no body; only transport errors count.
        self.client
            .post(&self.url)
            .header("Content-Type", "application/json")
            .json(&payload)
            .send()
            .await?;

        Ok(())
    }

    /// Run [`notify`](Self::notify) and log any failure. The applicant's
    /// response never depends on the outcome.
    pub async fn notify_best_effort(&self, body: &NormalizedBody) {
        if let Err(e) = self.notify(body).await {
            tracing::error!("Discord notification failed: {e}");
        }
    }
}
