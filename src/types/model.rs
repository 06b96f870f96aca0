use std::fmt;

use serde::{Deserialize, Serialize};

/// Represents a Gemini model identifier.
///
/// This can be a predefined model version or a custom string value
/// for models that may be added in the future.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Model {
    /// Known model versions
    Known(KnownModel),

    /// Custom model identifier (for future models or private previews)
    Custom(String),
}

/// Known Gemini model versions
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KnownModel {
    /// Gemini 3 Pro (preview)
    #[serde(rename = "gemini-3-pro-preview")]
    Gemini3ProPreview,

    /// Gemini 2.5 Pro
    #[serde(rename = "gemini-2.5-pro")]
    Gemini25Pro,

    /// Gemini 2.5 Flash
    #[serde(rename = "gemini-2.5-flash")]
    Gemini25Flash,

    /// Gemini 2.5 Flash-Lite
    #[serde(rename = "gemini-2.5-flash-lite")]
    Gemini25FlashLite,

    /// Gemini 2.0 Flash
    #[serde(rename = "gemini-2.0-flash")]
    Gemini20Flash,

    /// Gemini 1.5 Pro
    #[serde(rename = "gemini-1.5-pro")]
    Gemini15Pro,

    /// Gemini 1.5 Flash
    #[serde(rename = "gemini-1.5-flash")]
    Gemini15Flash,
}

impl KnownModel {
    /// The wire identifier for this model.
    pub fn as_str(&self) -> &'static str {
        match self {
            KnownModel::Gemini3ProPreview => "gemini-3-pro-preview",
            KnownModel::Gemini25Pro => "gemini-2.5-pro",
            KnownModel::Gemini25Flash => "gemini-2.5-flash",
            KnownModel::Gemini25FlashLite => "gemini-2.5-flash-lite",
            KnownModel::Gemini20Flash => "gemini-2.0-flash",
            KnownModel::Gemini15Pro => "gemini-1.5-pro",
            KnownModel::Gemini15Flash => "gemini-1.5-flash",
        }
    }
}

impl Model {
    /// The wire identifier for this model, as used in request URLs.
    pub fn as_str(&self) -> &str {
        match self {
            Model::Known(known) => known.as_str(),
            Model::Custom(custom) => custom,
        }
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<KnownModel> for Model {
    fn from(model: KnownModel) -> Self {
        Model::Known(model)
    }
}

impl From<&str> for Model {
    fn from(s: &str) -> Self {
        match s {
            "gemini-3-pro-preview" => Model::Known(KnownModel::Gemini3ProPreview),
            "gemini-2.5-pro" => Model::Known(KnownModel::Gemini25Pro),
            "gemini-2.5-flash" => Model::Known(KnownModel::Gemini25Flash),
            "gemini-2.5-flash-lite" => Model::Known(KnownModel::Gemini25FlashLite),
            "gemini-2.0-flash" => Model::Known(KnownModel::Gemini20Flash),
            "gemini-1.5-pro" => Model::Known(KnownModel::Gemini15Pro),
            "gemini-1.5-flash" => Model::Known(KnownModel::Gemini15Flash),
            other => Model::Custom(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_model_serialization() {
        let model = Model::Known(KnownModel::Gemini3ProPreview);
        let json = serde_json::to_string(&model).unwrap();
        assert_eq!(json, "\"gemini-3-pro-preview\"");
    }

    #[test]
    fn custom_model_round_trip() {
        let model = Model::from("gemini-experimental-001");
        assert!(matches!(model, Model::Custom(_)));
        assert_eq!(model.as_str(), "gemini-experimental-001");
    }

    #[test]
    fn known_model_from_str() {
        let model = Model::from("gemini-2.5-flash");
        assert_eq!(model, Model::Known(KnownModel::Gemini25Flash));
        assert_eq!(model.to_string(), "gemini-2.5-flash");
    }
}
