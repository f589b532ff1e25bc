//! # Shopify Error Types
//!
//! Error types for configuration loading and the Admin API client.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Shopify Error Categories                            │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │  Configuration  │  │   Transport     │  │     Response            │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │  InvalidConfig  │  │  Network        │  │  Api {status, body}     │ │
//! │  │  InvalidUrl     │  │  Timeout        │  │  Decode                 │ │
//! │  │  ConfigLoad/Save│  │                 │  │                         │ │
//! │  │  MissingCreds   │  │                 │  │                         │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! None of these are fatal. The app shows them as a dismissible banner and
//! keeps the last report on screen.

use thiserror::Error;

/// Result type alias for Shopify operations.
pub type ShopifyResult<T> = Result<T, ShopifyError>;

/// Everything that can go wrong fetching analytics.
#[derive(Debug, Error)]
pub enum ShopifyError {
    // =========================================================================
    // Configuration Errors
    // =========================================================================
    /// Invalid configuration value.
    #[error("Invalid Shopify configuration: {0}")]
    InvalidConfig(String),

    /// Shop domain or base URL does not form a valid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Failed to load config file.
    #[error("Failed to load config: {0}")]
    ConfigLoadFailed(String),

    /// Failed to save config file.
    #[error("Failed to save config: {0}")]
    ConfigSaveFailed(String),

    /// Shop domain or access token not configured.
    #[error("Shopify credentials are not configured")]
    MissingCredentials,

    // =========================================================================
    // Transport Errors
    // =========================================================================
    /// Request could not be sent or the connection dropped.
    #[error("Network error: {0}")]
    Network(String),

    /// Request exceeded the configured timeout.
    #[error("Request timed out after {0} seconds")]
    Timeout(u64),

    // =========================================================================
    // Response Errors
    // =========================================================================
    /// Shopify answered with a non-2xx status.
    #[error("Shopify API error {status}: {body}")]
    Api { status: u16, body: String },

    /// Response body was not the JSON we expected.
    #[error("Failed to decode Shopify response: {0}")]
    Decode(String),
}

// =============================================================================
// Error Conversions
// =============================================================================

impl From<reqwest::Error> for ShopifyError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ShopifyError::Decode(err.to_string())
        } else {
            ShopifyError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ShopifyError {
    fn from(err: serde_json::Error) -> Self {
        ShopifyError::Decode(err.to_string())
    }
}

impl From<url::ParseError> for ShopifyError {
    fn from(err: url::ParseError) -> Self {
        ShopifyError::InvalidUrl(err.to_string())
    }
}

impl From<std::io::Error> for ShopifyError {
    fn from(err: std::io::Error) -> Self {
        ShopifyError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::de::Error> for ShopifyError {
    fn from(err: toml::de::Error) -> Self {
        ShopifyError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::ser::Error> for ShopifyError {
    fn from(err: toml::ser::Error) -> Self {
        ShopifyError::ConfigSaveFailed(err.to_string())
    }
}

// =============================================================================
// Error Categorization
// =============================================================================

impl ShopifyError {
    /// Returns true if retrying the same request may succeed.
    ///
    /// ## Retryable Errors
    /// - Network failures and timeouts
    /// - 429 (rate limited) and 5xx responses
    pub fn is_retryable(&self) -> bool {
        match self {
            ShopifyError::Network(_) | ShopifyError::Timeout(_) => true,
            ShopifyError::Api { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }

    /// Returns true if this error indicates a configuration problem.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            ShopifyError::InvalidConfig(_)
                | ShopifyError::InvalidUrl(_)
                | ShopifyError::ConfigLoadFailed(_)
                | ShopifyError::ConfigSaveFailed(_)
                | ShopifyError::MissingCredentials
        )
    }
}
