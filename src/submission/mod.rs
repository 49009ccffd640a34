pub mod fields;
pub mod parser;

pub use fields::Submission;

/// Canonical string form of an inbound payload, independent of how the
/// client encoded it. Shared by the storage and notification steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedBody(String);

impl NormalizedBody {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse the canonical string back into JSON.
    pub fn to_value(&self) -> Result<serde_json::Value, String> {
        serde_json::from_str(&self.0).map_err(|e| format!("Normalized body is not JSON: {e}"))
    }
}

impl std::fmt::Display for NormalizedBody {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
