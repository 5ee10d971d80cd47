use thiserror::Error;

#[derive(Error, Debug)]
pub enum FormError {
    #[error("Relay request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid submission transition: {from} -> {to}")]
    InvalidTransition {
        from: &'static str,
        to: &'static str,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Configuration,
    State,
}

impl FormError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            FormError::Http(_) => ErrorCategory::Network,
            FormError::Io(_)
            | FormError::ConfigValidationError { .. }
            | FormError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            FormError::InvalidTransition { .. } => ErrorCategory::State,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            FormError::Http(err) if err.is_timeout() => {
                "The form service did not answer in time".to_string()
            }
            FormError::Http(err) if err.is_connect() => {
                "Could not reach the form service".to_string()
            }
            FormError::Http(_) => "The form service request failed".to_string(),
            FormError::Io(err) => format!("Could not read a file: {}", err),
            FormError::ConfigValidationError { field, message } => {
                format!("Configuration '{}' is invalid: {}", field, message)
            }
            FormError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration '{}' is invalid: {}", field, reason)
            }
            FormError::InvalidTransition { .. } => {
                "This form cannot be submitted right now".to_string()
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => "Check your connection and submit the form again",
            ErrorCategory::Configuration => {
                "Check the relay endpoints in the site configuration file"
            }
            ErrorCategory::State => "Open a fresh form before submitting again",
        }
    }
}

pub type Result<T> = std::result::Result<T, FormError>;
