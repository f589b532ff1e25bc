//! # Domain Types
//!
//! Core domain types used throughout SAVN.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌──────────────────────┐   ┌────────────────┐   │
//! │  │    Product      │   │     Transaction      │   │    Settings    │   │
//! │  │  ─────────────  │   │  ──────────────────  │   │  ────────────  │   │
//! │  │  id (UUID)      │◄ ─│  product_id (weak)   │   │  language      │   │
//! │  │  name           │   │  product_name (snap) │   │  currency      │   │
//! │  │  quantity ≥ 0   │   │  kind                │   └────────────────┘   │
//! │  │  unit_price     │   │  quantity_delta      │                        │
//! │  │  unit_cost      │   │  amount_cents        │                        │
//! │  └─────────────────┘   │  reverses            │                        │
//! │                        └──────────────────────┘                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Weak References
//! A transaction points at its product by id only and copies the product
//! name at the time it was recorded. Removing the product leaves history
//! readable.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::{Currency, Money};

// =============================================================================
// Product
// =============================================================================

/// A product tracked by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Display name, never empty.
    pub name: String,

    /// Units on hand. Never negative.
    pub quantity: i64,

    /// Selling price per unit, in cents.
    pub unit_price_cents: i64,

    /// Purchase cost per unit, in cents.
    pub unit_cost_cents: i64,

    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Returns the unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }

    /// Returns the unit cost as Money.
    #[inline]
    pub fn unit_cost(&self) -> Money {
        Money::from_cents(self.unit_cost_cents)
    }

    /// Value of the stock on hand at selling price.
    pub fn stock_value(&self) -> Money {
        self.unit_price().multiply_quantity(self.quantity)
    }

    /// Checks if at least one unit is on hand.
    #[inline]
    pub fn in_stock(&self) -> bool {
        self.quantity > 0
    }
}

// =============================================================================
// Transaction Kind
// =============================================================================

/// What kind of quantity-affecting action produced a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    /// Unit(s) sold. Amount counts toward revenue.
    Sale,
    /// Unit(s) bought in. Amount counts toward expenses.
    Restock,
    /// Loss, spoilage, waste or found stock. No monetary effect.
    Adjustment,
}

impl TransactionKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Sale => "sale",
            TransactionKind::Restock => "restock",
            TransactionKind::Adjustment => "adjustment",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Transaction
// =============================================================================

/// One immutable ledger entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Transaction {
    pub id: String,

    pub kind: TransactionKind,

    /// Product this entry was recorded against. May no longer exist.
    pub product_id: String,

    /// Product name at the time of recording (frozen).
    pub product_name: String,

    /// Signed change applied to the product quantity.
    pub quantity_delta: i64,

    /// Signed monetary effect in cents: revenue for sales, expense for
    /// restocks, always zero for adjustments. Negative on reversals.
    pub amount_cents: i64,

    /// Set when this entry compensates an earlier one (undo).
    #[serde(default)]
    pub reverses: Option<String>,

    #[ts(as = "String")]
    pub timestamp: DateTime<Utc>,
}

impl Transaction {
    /// Returns the amount as Money.
    #[inline]
    pub fn amount(&self) -> Money {
        Money::from_cents(self.amount_cents)
    }

    /// Checks if this entry is an undo of an earlier one.
    #[inline]
    pub fn is_reversal(&self) -> bool {
        self.reverses.is_some()
    }

    /// Units moved, always positive (history rows show "Sold 2 ×").
    #[inline]
    pub fn units(&self) -> i64 {
        self.quantity_delta.abs()
    }
}

// =============================================================================
// Stock Change
// =============================================================================

/// A requested quantity mutation, tagged with the path it came from.
///
/// The kind decides the ledger entry and the monetary effect; the sign of
/// `delta` must agree with it (see [`crate::inventory`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StockChange {
    pub kind: TransactionKind,
    pub delta: i64,
}

impl StockChange {
    /// Sell `units` (sell path, delta < 0).
    pub const fn sale(units: i64) -> Self {
        StockChange {
            kind: TransactionKind::Sale,
            delta: -units,
        }
    }

    /// Restock `units` (restock path, delta > 0).
    pub const fn restock(units: i64) -> Self {
        StockChange {
            kind: TransactionKind::Restock,
            delta: units,
        }
    }

    /// Adjustment of either sign (adjust screen, waste).
    pub const fn adjustment(delta: i64) -> Self {
        StockChange {
            kind: TransactionKind::Adjustment,
            delta,
        }
    }
}

// =============================================================================
// Ledger Summary
// =============================================================================

/// Aggregates folded from the ledger. Never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LedgerSummary {
    pub revenue: Money,
    pub expenses: Money,
    pub profit: Money,
}

// =============================================================================
// Settings
// =============================================================================

/// UI language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Vietnamese, the default.
    #[default]
    Vi,
    En,
}

impl Language {
    pub const fn code(&self) -> &'static str {
        match self {
            Language::Vi => "vi",
            Language::En => "en",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "vi" => Ok(Language::Vi),
            "en" => Ok(Language::En),
            other => Err(ValidationError::InvalidFormat {
                field: "language".to_string(),
                reason: format!("unknown language '{}', expected vi or en", other),
            }),
        }
    }
}

/// User preferences. A singleton, persisted, loaded once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Settings {
    #[serde(default)]
    pub language: Language,
    #[serde(default)]
    pub currency: Currency,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_default() {
        let settings = Settings::default();
        assert_eq!(settings.language, Language::Vi);
        assert_eq!(settings.currency, Currency::Usd);
    }

    #[test]
    fn test_settings_tolerates_missing_fields() {
        let settings: Settings = serde_json::from_str(r#"{"language":"en"}"#).unwrap();
        assert_eq!(settings.language, Language::En);
        assert_eq!(settings.currency, Currency::Usd);
    }

    #[test]
    fn test_language_parse() {
        assert_eq!("EN".parse::<Language>().unwrap(), Language::En);
        assert_eq!("vi".parse::<Language>().unwrap(), Language::Vi);
        assert!("fr".parse::<Language>().is_err());
    }

    #[test]
    fn test_stock_change_constructors() {
        assert_eq!(StockChange::sale(2).delta, -2);
        assert_eq!(StockChange::restock(3).delta, 3);
        assert_eq!(StockChange::adjustment(-1).kind, TransactionKind::Adjustment);
    }

    #[test]
    fn test_transaction_kind_serde() {
        let json = serde_json::to_string(&TransactionKind::Restock).unwrap();
        assert_eq!(json, "\"restock\"");
    }
}
