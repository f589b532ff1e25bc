//! # Validation Module
//!
//! Input validation for the add, edit and adjust screens.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Screen                                                        │
//! │  ├── Text field → number (parse_quantity_text / parse_amount_text)     │
//! │  └── Inline feedback on failure                                        │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Inventory store boundary                                     │
//! │  └── THIS MODULE: name, finiteness, non-negativity, flooring           │
//! │                                                                         │
//! │  Quantity clamping (never below zero) is NOT here: it is enforced by   │
//! │  InventoryStore::apply_stock_change for every path at once.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use savn_core::validation::{validate_product_name, validate_quantity_input};
//!
//! assert!(validate_product_name("Widget").is_ok());
//! assert_eq!(validate_quantity_input(9.7).unwrap(), 9);
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::MAX_PRODUCT_NAME_LEN;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product name and returns it trimmed.
///
/// ## Rules
/// - Must not be empty after trimming
/// - At most 200 characters
pub fn validate_product_name(name: &str) -> ValidationResult<String> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_PRODUCT_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_PRODUCT_NAME_LEN,
        });
    }

    Ok(name.to_string())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a starting quantity and floors it to whole units.
///
/// ## Rules
/// - Must be finite
/// - Must be ≥ 0
///
/// ```rust
/// use savn_core::validation::validate_quantity_input;
///
/// assert_eq!(validate_quantity_input(10.0).unwrap(), 10);
/// assert_eq!(validate_quantity_input(0.5).unwrap(), 0);
/// assert!(validate_quantity_input(-1.0).is_err());
/// assert!(validate_quantity_input(f64::NAN).is_err());
/// ```
pub fn validate_quantity_input(qty: f64) -> ValidationResult<i64> {
    check_finite_non_negative("quantity", qty)?;

    let floored = qty.floor();
    if floored > i64::MAX as f64 {
        return Err(ValidationError::InvalidFormat {
            field: "quantity".to_string(),
            reason: "is too large".to_string(),
        });
    }

    Ok(floored as i64)
}

/// Validates a price or cost and converts it to Money.
///
/// ## Rules
/// - Must be finite
/// - Must be ≥ 0 (zero is allowed: free samples, donated stock)
pub fn validate_amount_input(field: &str, value: f64) -> ValidationResult<Money> {
    check_finite_non_negative(field, value)?;

    Money::from_major_f64(value).ok_or_else(|| ValidationError::InvalidFormat {
        field: field.to_string(),
        reason: "is too large".to_string(),
    })
}

/// Validates the quantity typed into the adjust dialog.
///
/// The dialog picks the direction (add / record loss) separately, so the
/// quantity itself must be at least 1.
pub fn validate_adjustment_quantity(qty: i64) -> ValidationResult<i64> {
    if qty < 1 {
        return Err(ValidationError::TooSmall {
            field: "quantity".to_string(),
            min: 1,
        });
    }

    Ok(qty)
}

// =============================================================================
// Text Field Parsing
// =============================================================================

/// Parses a numeric text field into a quantity (floored, ≥ 0).
pub fn parse_quantity_text(text: &str) -> ValidationResult<i64> {
    validate_quantity_input(parse_number("quantity", text)?)
}

/// Parses a numeric text field into an amount (≥ 0).
pub fn parse_amount_text(field: &str, text: &str) -> ValidationResult<Money> {
    validate_amount_input(field, parse_number(field, text)?)
}

fn parse_number(field: &str, text: &str) -> ValidationResult<f64> {
    let text = text.trim();

    if text.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    text.parse::<f64>()
        .map_err(|_| ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: "must be a number".to_string(),
        })
}

fn check_finite_non_negative(field: &str, value: f64) -> ValidationResult<()> {
    if !value.is_finite() {
        return Err(ValidationError::NotFinite {
            field: field.to_string(),
        });
    }

    if value < 0.0 {
        return Err(ValidationError::Negative {
            field: field.to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
