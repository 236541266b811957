use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unknown product: {id}")]
    UnknownProduct { id: String },

    #[error("Unknown category: {name}")]
    UnknownCategory { name: String },

    #[error("Unrecognised cart intent: {input}")]
    InvalidIntent { input: String },
}

pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Data,
    Configuration,
    Input,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl StoreError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            StoreError::ApiError(_) => ErrorCategory::Network,
            StoreError::CsvError(_) | StoreError::IoError(_) | StoreError::SerializationError(_) => {
                ErrorCategory::Data
            }
            StoreError::ConfigValidationError { .. }
            | StoreError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            StoreError::UnknownProduct { .. }
            | StoreError::UnknownCategory { .. }
            | StoreError::InvalidIntent { .. } => ErrorCategory::Input,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Input => ErrorSeverity::High,
            ErrorCategory::Data => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            StoreError::ApiError(_) => {
                "Check network connectivity and the chat endpoint, then try again".to_string()
            }
            StoreError::IoError(_) => "Check that the file exists and is readable".to_string(),
            StoreError::CsvError(_) | StoreError::SerializationError(_) => {
                "Check that the catalog file is a JSON array of product records".to_string()
            }
            StoreError::ConfigValidationError { field, .. }
            | StoreError::InvalidConfigValueError { field, .. } => {
                format!("Fix the '{}' entry in the store configuration file", field)
            }
            StoreError::UnknownProduct { .. } => {
                "Run the `catalog` command to list valid product ids".to_string()
            }
            StoreError::UnknownCategory { .. } => format!(
                "Use 'All' or one of: {}",
                crate::domain::model::Category::ALL
                    .iter()
                    .map(|c| c.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
            StoreError::InvalidIntent { .. } => {
                "Write intents as add:<id>, remove:<id> or toggle:<id>".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Network => format!("Could not reach a remote service: {}", self),
            ErrorCategory::Data => format!("Could not read store data: {}", self),
            ErrorCategory::Configuration => format!("The store configuration is invalid: {}", self),
            ErrorCategory::Input => self.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_errors_are_critical() {
        let err = StoreError::InvalidConfigValueError {
            field: "chat.model".to_string(),
            value: String::new(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert!(err.recovery_suggestion().contains("chat.model"));
    }

    #[test]
    fn test_unknown_category_suggests_valid_names() {
        let err = StoreError::UnknownCategory {
            name: "Bakery".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(err.recovery_suggestion().contains("Dairy"));
        assert_eq!(err.user_friendly_message(), "Unknown category: Bakery");
    }
}
