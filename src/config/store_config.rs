use crate::domain::model::Rupees;
use crate::utils::error::{Result, StoreError};
use crate::utils::validation::{
    validate_non_empty_string, validate_path, validate_range, validate_url, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

pub const DEFAULT_CHAT_ENDPOINT: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_CHAT_MODEL: &str = "gemini-2.5-flash";

/// Environment variables consulted when the file has no usable api key.
const API_KEY_ENV_VARS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

static ENV_PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{([^}]+)\}").expect("placeholder pattern is valid")
});

/// Store settings loaded from TOML. Every section may be omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub store: StoreSection,
    pub catalog: CatalogSection,
    pub chat: ChatConfig,
    pub logging: LoggingSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreSection {
    pub name: String,
    pub delivery_fee: u64,
    pub featured_count: usize,
}

impl Default for StoreSection {
    fn default() -> Self {
        Self {
            name: "Village Organics".to_string(),
            delivery_fee: 40,
            featured_count: 4,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogSection {
    /// JSON product list; the built-in range is used when unset.
    pub path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    pub endpoint: String,
    pub model: String,
    pub api_key: Option<String>,
    pub timeout_seconds: u64,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_CHAT_ENDPOINT.to_string(),
            model: DEFAULT_CHAT_MODEL.to_string(),
            api_key: None,
            timeout_seconds: 30,
        }
    }
}

impl ChatConfig {
    /// The configured key, falling back to the environment.
    ///
    /// Empty values and placeholders that were never substituted count as
    /// missing.
    pub fn resolved_api_key(&self) -> Option<String> {
        let usable = |key: &str| {
            let key = key.trim();
            (!key.is_empty() && !ENV_PLACEHOLDER.is_match(key)).then(|| key.to_string())
        };

        self.api_key.as_deref().and_then(usable).or_else(|| {
            API_KEY_ENV_VARS
                .iter()
                .find_map(|var| std::env::var(var).ok().as_deref().and_then(usable))
        })
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    pub json: bool,
}

impl StoreConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content);

        toml::from_str(&processed).map_err(|e| StoreError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the variable's value; unknown variables stay
    /// as written.
    fn substitute_env_vars(content: &str) -> String {
        ENV_PLACEHOLDER
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn delivery_fee(&self) -> Rupees {
        Rupees(self.store.delivery_fee)
    }

    pub fn catalog_path(&self) -> Option<&str> {
        self.catalog.path.as_deref()
    }
}

impl Validate for StoreConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("store.name", &self.store.name)?;
        validate_url("chat.endpoint", &self.chat.endpoint)?;
        validate_non_empty_string("chat.model", &self.chat.model)?;
        validate_range("chat.timeout_seconds", self.chat.timeout_seconds, 1, 300)?;
        if let Some(path) = &self.catalog.path {
            validate_path("catalog.path", path)?;
        }
        Ok(())
    }
}
