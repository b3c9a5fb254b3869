//! Error types shared across the crate.
//!
//! Nothing here is fatal: every variant maps to a narrower view in the
//! presentation layer (an inline message, an omitted section).

use thiserror::Error;

/// Errors surfaced by the data layer, the calculators and the catalogs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DexError {
    /// The requested resource does not resolve at the data provider.
    ///
    /// Transport failures, timeouts and non-2xx responses all collapse
    /// into this variant before leaving the client.
    #[error("not found: {resource}")]
    NotFound { resource: String },

    /// A secondary lookup failed while the primary entity loaded.
    #[error("{section} unavailable")]
    PartialDataUnavailable { section: String },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A bundled catalog could not be parsed or violates its invariants.
    #[error("catalog error: {0}")]
    Catalog(String),
}

impl DexError {
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, DexError>;

/// Transport-level failure inside the data layer.
///
/// Never leaves [`crate::data::client`]; it is logged and mapped to
/// [`DexError::NotFound`].
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("unexpected status {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("transport error: {0}")]
    Transport(String),

    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

#[cfg(not(target_arch = "wasm32"))]
impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

/// Failure of the external text-generation service.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AiError {
    #[error("no API credential configured")]
    MissingCredential,

    /// 401/403 from the provider.
    #[error("authentication failed: {0}")]
    Authentication(String),

    #[error("request timed out")]
    Timeout,

    #[error("{0}")]
    Service(String),

    #[error("empty response from text-generation service")]
    EmptyResponse,
}

impl AiError {
    /// Coarse classification used to pick a friendlier message.
    pub fn is_authentication(&self) -> bool {
        matches!(self, Self::MissingCredential | Self::Authentication(_))
    }

    /// Inline text shown in place of the analysis.
    pub fn user_message(&self) -> String {
        if self.is_authentication() {
            "⚠️ AI service authentication failed. Please check the Groq API key in settings."
                .to_string()
        } else {
            format!("Sorry, I encountered an error: {}. Please try again!", self)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = DexError::not_found("pokemon/missingno");
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "not found: pokemon/missingno");
    }

    #[test]
    fn test_ai_error_messages() {
        let auth = AiError::Authentication("401 Unauthorized".to_string());
        assert!(auth.user_message().contains("authentication failed"));

        let missing = AiError::MissingCredential;
        assert!(missing.is_authentication());

        let generic = AiError::Service("rate limited".to_string());
        assert!(!generic.is_authentication());
        assert!(generic.user_message().contains("rate limited"));
    }
}
