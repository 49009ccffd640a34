use std::net::IpAddr;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub variant: Variant,
    pub storage_url: Option<String>,
    pub webhook_url: String,
    pub allowed_origin: Option<String>,
    pub max_body_size: usize,
    pub log_level: String,
}

/// Deployment flavour. `Sheet` stores every application before notifying,
/// `Relay` only notifies and sits behind a single-origin CORS gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Sheet,
    Relay,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let host: IpAddr = env_or("GUILD_APPLY_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid GUILD_APPLY_HOST: {e}"))?;

        let port: u16 = env_or("GUILD_APPLY_PORT", "8787")
            .parse()
            .map_err(|e| format!("Invalid GUILD_APPLY_PORT: {e}"))?;

        let variant = match env_or("GUILD_APPLY_VARIANT", "sheet").as_str() {
            "sheet" => Variant::Sheet,
            "relay" => Variant::Relay,
            other => return Err(format!("Invalid GUILD_APPLY_VARIANT: {other}")),
        };

        let webhook_url = env_required("GUILD_APPLY_WEBHOOK_URL")?;

        let storage_url = match variant {
            Variant::Sheet => Some(env_required("GUILD_APPLY_STORAGE_URL")?),
            Variant::Relay => std::env::var("GUILD_APPLY_STORAGE_URL").ok(),
        };

        let allowed_origin = match variant {
            Variant::Relay => Some(env_required("GUILD_APPLY_ALLOWED_ORIGIN")?),
            Variant::Sheet => std::env::var("GUILD_APPLY_ALLOWED_ORIGIN").ok(),
        };

        let max_body_size: usize = env_or("GUILD_APPLY_MAX_BODY_SIZE", "1048576")
            .parse()
            .map_err(|e| format!("Invalid GUILD_APPLY_MAX_BODY_SIZE: {e}"))?;

        let log_level = env_or("GUILD_APPLY_LOG_LEVEL", "info");

        Ok(Config {
            host,
            port,
            variant,
            storage_url,
            webhook_url,
            allowed_origin,
            max_body_size,
            log_level,
        })
    }
}

fn env_required(key: &str) -> Result<String, String> {
    std::env::var(key).map_err(|_| format!("Missing required environment variable: {key}"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
