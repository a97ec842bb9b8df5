//! Model types
//!
//! Descriptors of the locally available models, as reported by the backend.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Backend that serves a model (`type` on the wire)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ModelKind {
    Ollama,
    LlamaCpp,
    Transformers,
    /// Any backend this build does not know about, kept verbatim
    Other(String),
}

impl ModelKind {
    pub fn as_str(&self) -> &str {
        match self {
            ModelKind::Ollama => "ollama",
            ModelKind::LlamaCpp => "llamacpp",
            ModelKind::Transformers => "transformers",
            ModelKind::Other(raw) => raw,
        }
    }
}

impl Default for ModelKind {
    fn default() -> Self {
        ModelKind::Other(String::new())
    }
}

impl From<&str> for ModelKind {
    fn from(raw: &str) -> Self {
        match raw {
            "ollama" => ModelKind::Ollama,
            "llamacpp" => ModelKind::LlamaCpp,
            "transformers" => ModelKind::Transformers,
            other => ModelKind::Other(other.to_string()),
        }
    }
}

impl From<String> for ModelKind {
    fn from(raw: String) -> Self {
        ModelKind::from(raw.as_str())
    }
}

impl From<ModelKind> for String {
    fn from(kind: ModelKind) -> Self {
        kind.as_str().to_string()
    }
}

/// Readiness of a model
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ModelStatus {
    Ready,
    Available,
    Loading,
    Error,
    Other(String),
}

impl ModelStatus {
    pub fn as_str(&self) -> &str {
        match self {
            ModelStatus::Ready => "ready",
            ModelStatus::Available => "available",
            ModelStatus::Loading => "loading",
            ModelStatus::Error => "error",
            ModelStatus::Other(raw) => raw,
        }
    }
}

impl Default for ModelStatus {
    fn default() -> Self {
        ModelStatus::Other(String::new())
    }
}

impl From<&str> for ModelStatus {
    fn from(raw: &str) -> Self {
        match raw {
            "ready" => ModelStatus::Ready,
            "available" => ModelStatus::Available,
            "loading" => ModelStatus::Loading,
            "error" => ModelStatus::Error,
            other => ModelStatus::Other(other.to_string()),
        }
    }
}

impl From<String> for ModelStatus {
    fn from(raw: String) -> Self {
        ModelStatus::from(raw.as_str())
    }
}

impl From<ModelStatus> for String {
    fn from(status: ModelStatus) -> Self {
        status.as_str().to_string()
    }
}

/// Intended use category of a model
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Specialization {
    Reasoning,
    Creative,
    Analysis,
    Verification,
    Other(String),
}

impl Specialization {
    pub fn as_str(&self) -> &str {
        match self {
            Specialization::Reasoning => "reasoning",
            Specialization::Creative => "creative",
            Specialization::Analysis => "analysis",
            Specialization::Verification => "verification",
            Specialization::Other(raw) => raw,
        }
    }
}

impl Default for Specialization {
    fn default() -> Self {
        Specialization::Other(String::new())
    }
}

impl From<&str> for Specialization {
    fn from(raw: &str) -> Self {
        match raw {
            "reasoning" => Specialization::Reasoning,
            "creative" => Specialization::Creative,
            "analysis" => Specialization::Analysis,
            "verification" => Specialization::Verification,
            other => Specialization::Other(other.to_string()),
        }
    }
}

impl From<String> for Specialization {
    fn from(raw: String) -> Self {
        Specialization::from(raw.as_str())
    }
}

impl From<Specialization> for String {
    fn from(specialization: Specialization) -> Self {
        specialization.as_str().to_string()
    }
}

/// A locally available model and its current readiness
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelDescriptor {
    /// Stable identifier, used as the card key
    pub id: String,
    /// Display name
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: ModelKind,
    #[serde(default)]
    pub status: ModelStatus,
    /// Display order is the order reported by the backend
    #[serde(default)]
    pub capabilities: Vec<String>,
    /// Memory footprint in megabytes
    #[serde(rename = "memoryMB", default)]
    pub memory_mb: f64,
    #[serde(default)]
    pub specialized: Specialization,
}

impl ModelDescriptor {
    /// Normalize values the backend may report out of range.
    pub fn validate(&mut self) {
        if !self.memory_mb.is_finite() || self.memory_mb < 0.0 {
            self.memory_mb = 0.0;
        }
    }
}

/// Parse a model list payload.
///
/// Entries that do not deserialize are skipped so one bad record does not
/// hide the rest of the list.
pub fn parse_descriptors(entries: Vec<Value>) -> Vec<ModelDescriptor> {
    entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| {
            match serde_json::from_value::<ModelDescriptor>(entry) {
                Ok(mut descriptor) => {
                    descriptor.validate();
                    Some(descriptor)
                }
                Err(e) => {
                    tracing::warn!("Skipping malformed model entry #{}: {}", index, e);
                    None
                }
            }
        })
        .collect()
}
