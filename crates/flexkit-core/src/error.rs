//! Error types for Flexkit Core

use thiserror::Error;

/// Main error type for Flexkit operations
#[derive(Error, Debug)]
pub enum Error {
    /// A consumer asked for provider state with no provider mounted above it.
    #[error("{provider} context is missing: mount the {provider} provider above this component")]
    MissingProviderContext { provider: &'static str },

    /// A breakpoint mapping was resolved without a single entry.
    #[error("No responsive value found: breakpoint mapping is empty")]
    EmptyResponsiveValue,

    #[error("Layout tracker has been disposed")]
    TrackerDisposed,

    #[error("No tokio runtime available to drive the layout tracker")]
    NoRuntime,

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub fn missing_provider(provider: &'static str) -> Self {
        Error::MissingProviderContext { provider }
    }
}

impl serde::Serialize for Error {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_provider_message_names_provider() {
        let err = Error::missing_provider("LayoutTracker");
        assert!(err.to_string().contains("LayoutTracker"));
    }

    #[test]
    fn test_error_serializes_as_string() {
        let json = serde_json::to_string(&Error::EmptyResponsiveValue).unwrap();
        assert_eq!(
            json,
            "\"No responsive value found: breakpoint mapping is empty\""
        );
    }
}
