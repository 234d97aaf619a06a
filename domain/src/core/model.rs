//! Model value object representing an agent runtime model

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Available Gemini models (Value Object)
///
/// This is a domain concept representing the models a research agent
/// can be backed by on the Vertex AI runtime.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    Gemini20FlashExp,
    Gemini20Flash,
    Gemini15Pro,
    Gemini15Flash,
    // Custom
    Custom(String),
}

impl Model {
    /// Get the string identifier for this model
    pub fn as_str(&self) -> &str {
        match self {
            Model::Gemini20FlashExp => "gemini-2.0-flash-exp",
            Model::Gemini20Flash => "gemini-2.0-flash",
            Model::Gemini15Pro => "gemini-1.5-pro",
            Model::Gemini15Flash => "gemini-1.5-flash",
            Model::Custom(s) => s,
        }
    }

    /// Models known to the runtime, used for CLI help and config hints
    pub fn known_models() -> Vec<Model> {
        vec![
            Model::Gemini20FlashExp,
            Model::Gemini20Flash,
            Model::Gemini15Pro,
            Model::Gemini15Flash,
        ]
    }
}

impl Default for Model {
    /// Returns the default model (gemini-2.0-flash-exp)
    fn default() -> Self {
        Model::Gemini20FlashExp
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&str> for Model {
    /// Unknown names become `Model::Custom` so new runtime models work
    /// without a code change.
    fn from(s: &str) -> Self {
        match s {
            "gemini-2.0-flash-exp" => Model::Gemini20FlashExp,
            "gemini-2.0-flash" => Model::Gemini20Flash,
            "gemini-1.5-pro" => Model::Gemini15Pro,
            "gemini-1.5-flash" => Model::Gemini15Flash,
            other => Model::Custom(other.to_string()),
        }
    }
}

impl std::str::FromStr for Model {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Model::from(s))
    }
}

impl Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Model::from(s.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_roundtrip() {
        for model in Model::known_models() {
            let s = model.to_string();
            let parsed: Model = s.parse().unwrap();
            assert_eq!(model, parsed);
        }
    }

    #[test]
    fn test_custom_model() {
        let model: Model = "custom-model-v1".parse().unwrap();
        assert_eq!(model, Model::Custom("custom-model-v1".to_string()));
        assert_eq!(model.to_string(), "custom-model-v1");
    }

    #[test]
    fn test_model_default() {
        let model = Model::default();
        assert_eq!(model, Model::Gemini20FlashExp);
        assert_eq!(model.as_str(), "gemini-2.0-flash-exp");
    }

    #[test]
    fn test_model_serde_as_string() {
        let json = serde_json::to_string(&Model::Gemini15Pro).unwrap();
        assert_eq!(json, "\"gemini-1.5-pro\"");
        let back: Model = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Model::Gemini15Pro);
    }
}
