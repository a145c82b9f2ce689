//! Model value object representing an LLM model identifier

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A model identifier at some provider (Value Object)
///
/// Well-known models get their own variant so the hosted catalog and the
/// default price table can refer to them without string typos. Anything
/// else, including every locally served model tag, is `Custom`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    // Hosted models
    Gpt4o,
    Gpt4oMini,
    O1Preview,
    O1Mini,
    Gpt35Turbo,
    // Local models
    Llama32,
    Llama32_1b,
    Gemma3_1b,
    Gemma2b,
    // Custom
    Custom(String),
}

impl Model {
    /// Get the string identifier for this model
    pub fn as_str(&self) -> &str {
        match self {
            Model::Gpt4o => "gpt-4o",
            Model::Gpt4oMini => "gpt-4o-mini",
            Model::O1Preview => "o1-preview",
            Model::O1Mini => "o1-mini",
            Model::Gpt35Turbo => "gpt-3.5-turbo",
            Model::Llama32 => "llama3.2:latest",
            Model::Llama32_1b => "llama3.2:1b",
            Model::Gemma3_1b => "gemma3:1b",
            Model::Gemma2b => "gemma:2b",
            Model::Custom(s) => s,
        }
    }

    /// Curated list of hosted models offered for selection.
    ///
    /// Static; no network call is involved.
    pub fn hosted_catalog() -> Vec<Model> {
        vec![
            Model::Gpt4o,
            Model::Gpt4oMini,
            Model::O1Preview,
            Model::O1Mini,
            Model::Gpt35Turbo,
        ]
    }

    /// Models assumed to exist on a local inference server when it cannot
    /// be asked.
    pub fn local_fallbacks() -> Vec<Model> {
        vec![Model::Llama32, Model::Llama32_1b, Model::Gemma2b]
    }
}

impl Default for Model {
    /// Returns the default local teacher model (llama3.2:latest)
    fn default() -> Self {
        Model::Llama32
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Model {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Model::from(s))
    }
}

impl From<&str> for Model {
    fn from(s: &str) -> Self {
        match s {
            "gpt-4o" => Model::Gpt4o,
            "gpt-4o-mini" => Model::Gpt4oMini,
            "o1-preview" => Model::O1Preview,
            "o1-mini" => Model::O1Mini,
            "gpt-3.5-turbo" => Model::Gpt35Turbo,
            "llama3.2:latest" => Model::Llama32,
            "llama3.2:1b" => Model::Llama32_1b,
            "gemma3:1b" => Model::Gemma3_1b,
            "gemma:2b" => Model::Gemma2b,
            other => Model::Custom(other.to_string()),
        }
    }
}

impl From<String> for Model {
    fn from(s: String) -> Self {
        Model::from(s.as_str())
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
