use serde_json::{Map, Value};

use crate::config::Variant;

/// Value of the track selector that marks a solo (non-static) trial.
pub const SOLO_TRACK: &str = "Solo";

/// One trial application, with every form answer under its own name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Submission {
    pub account: String,
    pub discord: String,
    pub guild: String,
    pub api_key: String,
    pub killproof: String,
    pub requirements: String,
    pub power_builds: String,
    pub condi_builds: String,
    pub track: String,
    pub static_logs: String,
    pub altar_strategy: String,
    pub solo_logs: String,
    pub playtimes: String,
    pub teammates: String,
    pub experience: String,
    pub motivation: String,
}

/// Form keys in the order the `Sheet` form submits them as an array.
pub const SHEET_FIELDS: [&str; 16] = [
    "account",
    "discord",
    "guild",
    "api_key",
    "killproof",
    "requirements",
    "power_builds",
    "condi_builds",
    "track",
    "static_logs",
    "altar_strategy",
    "solo_logs",
    "playtimes",
    "teammates",
    "experience",
    "motivation",
];

/// The `Relay` form has no track selector and no static-only questions.
pub const RELAY_FIELDS: [&str; 13] = [
    "account",
    "discord",
    "guild",
    "api_key",
    "killproof",
    "requirements",
    "power_builds",
    "condi_builds",
    "solo_logs",
    "playtimes",
    "teammates",
    "experience",
    "motivation",
];

pub fn field_order(variant: Variant) -> &'static [&'static str] {
    match variant {
        Variant::Sheet => &SHEET_FIELDS,
        Variant::Relay => &RELAY_FIELDS,
    }
}

impl Submission {
    /// Decode a submission from a normalized JSON value.
    ///
    /// Objects are read by key. Arrays are read by position in the variant's
    /// field order, so a length mismatch mislabels every later answer; it is
    /// returned as a warning alongside the record. Warnings never reject.
    pub fn from_value(value: &Value, variant: Variant) -> Result<(Self, Vec<String>), String> {
        let order = field_order(variant);
        let mut warnings = Vec::new();

        let keyed: Map<String, Value> = match value {
            Value::Object(obj) => {
                for key in order {
                    if !obj.contains_key(*key) {
                        warnings.push(format!("Missing field: {key}"));
                    }
                }
                obj.clone()
            }
            Value::Array(items) => {
                if items.len() != order.len() {
                    warnings.push(format!(
                        "Expected {} positional fields, got {}",
                        order.len(),
                        items.len()
                    ));
                }
                order
                    .iter()
                    .zip(items)
                    .map(|(key, v)| (key.to_string(), v.clone()))
                    .collect()
            }
            other => return Err(format!("Unsupported submission shape: {}", kind(other))),
        };

        let get = |key: &str| scalar(keyed.get(key));

        let submission = Submission {
            account: get("account"),
            discord: get("discord"),
            guild: get("guild"),
            api_key: get("api_key"),
            killproof: get("killproof"),
            requirements: get("requirements"),
            power_builds: get("power_builds"),
            condi_builds: get("condi_builds"),
            track: get("track"),
            static_logs: get("static_logs"),
            altar_strategy: get("altar_strategy"),
            solo_logs: get("solo_logs"),
            playtimes: get("playtimes"),
            teammates: get("teammates"),
            experience: get("experience"),
            motivation: get("motivation"),
        };

        Ok((submission, warnings))
    }

    pub fn is_solo(&self) -> bool {
        self.track == SOLO_TRACK
    }
}

fn scalar(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
