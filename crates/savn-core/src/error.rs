//! # Error Types
//!
//! Domain-specific error types for savn-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  savn-core errors (this file)                                          │
//! │  ├── CoreError        - Store operation failures                       │
//! │  └── ValidationError  - Malformed user input                           │
//! │                                                                         │
//! │  savn-db errors        └── DbError       - Persistence failures        │
//! │  savn-shopify errors   └── ShopifyError  - Network / API failures      │
//! │                                                                         │
//! │  apps/savn             └── ApiError      - What the screens see        │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → inline UI feedback     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing here is fatal. Every variant describes a local, recoverable
//! failure the user can fix by re-attempting the action.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Inventory store errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Operation on a product id that is not (or no longer) in the store.
    ///
    /// ## When This Occurs
    /// - Product was removed while a screen still showed it
    /// - Stale id after `reset_products`
    ///
    /// The UI layer treats this as a silent no-op.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CoreError {
    /// Returns true for errors the UI should swallow silently.
    pub fn is_not_found(&self) -> bool {
        matches!(self, CoreError::ProductNotFound(_))
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Surfaced as inline feedback on the add/edit/adjust screens.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is negative where only zero or more is accepted.
    #[error("{field} must not be negative")]
    Negative { field: String },

    /// Numeric value is NaN or infinite.
    #[error("{field} must be a finite number")]
    NotFinite { field: String },

    /// Value must be at least some minimum.
    #[error("{field} must be at least {min}")]
    TooSmall { field: String, min: i64 },

    /// Invalid format (e.g., non-numeric text in a number field).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Stock change delta has the wrong sign for its kind.
    #[error("{kind} requires a {expected} quantity change, got {delta}")]
    WrongDirection {
        kind: String,
        expected: String,
        delta: i64,
    },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::ProductNotFound("abc".to_string());
        assert_eq!(err.to_string(), "Product not found: abc");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::WrongDirection {
            kind: "sale".to_string(),
            expected: "negative".to_string(),
            delta: 2,
        };
        assert_eq!(err.to_string(), "sale requires a negative quantity change, got 2");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Negative {
            field: "price".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
        assert!(!core_err.is_not_found());
    }
}
