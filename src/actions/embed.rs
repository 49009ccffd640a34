use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::config::Variant;
use crate::submission::Submission;

/// Mentions the Trial Runner role, followed by the guild's emote.
pub const MENTION: &str = "<@&730372255758155837> <:dTpepedFeelsamazingman:549285673899786251>";
pub const THUMBNAIL_URL: &str =
    "https://cdn.discordapp.com/attachments/765177472836435979/831614589909205042/logo.png";
pub const FOOTER: &str = "I made this :)";
pub const API_KEY_PAGE: &str = "https://gw2efficiency.com/user/api-keys";
pub const KILLPROOF_BASE: &str = "https://killproof.me/proof/";

/// Zero-width space; Discord rejects empty field names and values.
const SPACER: &str = "\u{200B}";

#[derive(Debug, Clone, Serialize)]
pub struct NotificationPayload {
    pub content: String,
    pub embeds: Vec<Embed>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Embed {
    pub title: String,
    pub thumbnail: Thumbnail,
    pub fields: Vec<EmbedField>,
    pub timestamp: DateTime<Utc>,
    pub footer: Footer,
}

#[derive(Debug, Clone, Serialize)]
pub struct Thumbnail {
    pub url: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Footer {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline: Option<bool>,
}

impl EmbedField {
    fn inline(name: &str, value: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            value: value.into(),
            inline: Some(true),
        }
    }

    fn block(name: &str, value: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            value: value.into(),
            inline: None,
        }
    }

    fn spacer() -> Self {
        Self::block(SPACER, SPACER)
    }
}

/// Build the Discord message announcing a new application.
pub fn build(submission: &Submission, variant: Variant, now: DateTime<Utc>) -> NotificationPayload {
    let solo = variant == Variant::Relay || submission.is_solo();

    let mut fields = vec![
        EmbedField::inline("Account", &submission.account),
        EmbedField::inline("Discord", &submission.discord),
        EmbedField::inline("Main Guild", &submission.guild),
        EmbedField::spacer(),
        EmbedField::inline("API Key", format!("[{}]({API_KEY_PAGE})", submission.api_key)),
        EmbedField::inline(
            "Killproof.me",
            format!("[Click me]({KILLPROOF_BASE}{})", submission.account),
        ),
        EmbedField::spacer(),
        EmbedField::inline("Power Builds", spaced_list(&submission.power_builds)),
        EmbedField::inline("Condi Builds", spaced_list(&submission.condi_builds)),
    ];

    if solo {
        fields.extend([
            EmbedField::block("Logs", &submission.solo_logs),
            EmbedField::block("Playtimes", &submission.playtimes),
            EmbedField::inline("Who do you play with?", spaced_list(&submission.teammates)),
        ]);
    } else {
        fields.extend([
            EmbedField::block("Logs", &submission.static_logs),
            EmbedField::block("Altar Strategy", &submission.altar_strategy),
        ]);
    }

    fields.extend([
        EmbedField::block("Experience?", &submission.experience),
        EmbedField::block("Why do you want to join us?", &submission.motivation),
    ]);

    NotificationPayload {
        content: MENTION.to_string(),
        embeds: vec![Embed {
            title: title(variant, solo),
            thumbnail: Thumbnail {
                url: THUMBNAIL_URL.to_string(),
            },
            fields,
            timestamp: now,
            footer: Footer {
                text: FOOTER.to_string(),
            },
        }],
    }
}

fn title(variant: Variant, solo: bool) -> String {
    match (variant, solo) {
        (Variant::Relay, _) => "New Application!".to_string(),
        (Variant::Sheet, true) => "New Application! (Non-Static Trial)".to_string(),
        (Variant::Sheet, false) => "New Application! (Static Trial)".to_string(),
    }
}

/// Checkbox answers arrive as "a,b,c"; Discord renders them better as "a, b, c".
fn spaced_list(raw: &str) -> String {
    raw.replace(',', ", ")
}
