//! # API Error Type
//!
//! Unified error type for app commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in SAVN                                   │
//! │                                                                         │
//! │  Screen                      Rust Backend                               │
//! │  ──────                      ────────────                               │
//! │                                                                         │
//! │  sellProduct(id)                                                        │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Missing id? ───── CoreError::ProductNotFound ─── NOT_FOUND ───►│  │
//! │  │  Bad input? ────── CoreError::Validation ──────── VALIDATION ──►│  │
//! │  │  Store failed? ─── DbError ────────────────────── DATABASE ────►│  │
//! │  │  Shopify failed? ─ ShopifyError ───────────────── NETWORK ─────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  NOT_FOUND      → silent no-op (the product is already gone)           │
//! │  VALIDATION     → inline field message                                 │
//! │  NETWORK        → dismissible banner                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use savn_core::CoreError;
use savn_db::DbError;
use savn_shopify::ShopifyError;
use serde::Serialize;
use thiserror::Error;

/// API error returned from commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Product not found: 4f1c..."
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Error)]
#[serde(rename_all = "camelCase")]
#[error("[{code:?}] {message}")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Product id not in the store
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Shopify request failed
    NetworkError,

    /// Persistence failed
    DatabaseError,

    /// Anything else
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(
            ErrorCode::NotFound,
            format!("{} not found: {}", resource, id),
        )
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }

    /// Returns true for errors the screens swallow silently.
    pub fn is_not_found(&self) -> bool {
        self.code == ErrorCode::NotFound
    }
}

/// Converts database errors to API errors.
impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::ConnectionFailed(_) => {
                ApiError::new(ErrorCode::DatabaseError, "Database connection failed")
            }
            DbError::MigrationFailed(_) => {
                ApiError::new(ErrorCode::DatabaseError, "Database migration failed")
            }
            DbError::QueryFailed(e) => {
                // Log the actual error but return a generic message
                tracing::error!("Database query failed: {}", e);
                ApiError::new(ErrorCode::DatabaseError, "Database operation failed")
            }
            DbError::PoolExhausted => {
                ApiError::new(ErrorCode::DatabaseError, "Database pool exhausted")
            }
            DbError::Serialization { key, message } => {
                tracing::error!(key = %key, "Stored data is corrupt: {}", message);
                ApiError::new(
                    ErrorCode::DatabaseError,
                    format!("Stored {} could not be read", key),
                )
            }
            DbError::Internal(e) => {
                tracing::error!("Internal database error: {}", e);
                ApiError::new(ErrorCode::DatabaseError, "Database operation failed")
            }
        }
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ProductNotFound(id) => ApiError::not_found("Product", &id),
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
        }
    }
}

/// Converts Shopify errors to API errors.
impl From<ShopifyError> for ApiError {
    fn from(err: ShopifyError) -> Self {
        if err.is_config_error() {
            ApiError::validation(err.to_string())
        } else {
            ApiError::new(ErrorCode::NetworkError, err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use savn_core::ValidationError;

    #[test]
    fn test_core_error_mapping() {
        let err: ApiError = CoreError::ProductNotFound("abc".into()).into();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Product not found: abc");
        assert!(err.is_not_found());

        let err: ApiError = CoreError::from(ValidationError::Required {
            field: "name".into(),
        })
        .into();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_shopify_error_mapping() {
        let err: ApiError = ShopifyError::Api {
            status: 500,
            body: "boom".into(),
        }
        .into();
        assert_eq!(err.code, ErrorCode::NetworkError);
        assert!(err.message.contains("500"));

        let err: ApiError = ShopifyError::InvalidConfig("order_limit".into()).into();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_db_error_mapping() {
        let err: ApiError = DbError::Serialization {
            key: "products".into(),
            message: "eof".into(),
        }
        .into();
        assert_eq!(err.code, ErrorCode::DatabaseError);
        assert_eq!(err.message, "Stored products could not be read");
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(ApiError::not_found("Product", "x")).unwrap();
        assert_eq!(json["code"], "NOT_FOUND");
        assert_eq!(json["message"], "Product not found: x");

        let json = serde_json::to_value(ApiError::new(ErrorCode::NetworkError, "down")).unwrap();
        assert_eq!(json["code"], "NETWORK_ERROR");
    }
}
