//! # savn-core: Pure Business Logic for SAVN
//!
//! This crate is the **heart** of SAVN. It contains the inventory store,
//! its append-only transaction ledger and the single-slot undo buffer,
//! plus the formatting and aggregation helpers the screens rely on.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          SAVN Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Mobile screens                               │   │
//! │  │   Inventory ──► Add ──► Adjust ──► History ──► Settings         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 apps/savn (commands + AppContext)               │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ savn-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │ inventory │  │  ledger   │  │   money   │  │ analytics │  │   │
//! │  │   │  Store    │  │  append   │  │  Money    │  │  Orders   │  │   │
//! │  │   │  Undo     │  │  only     │  │  Currency │  │  KPIs     │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │            savn-db (key-value blobs)  /  savn-shopify          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Transaction, Settings, ...)
//! - [`money`] - Integer money and currency display
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation for the add/edit/adjust screens
//! - [`ledger`] - Append-only transaction ledger
//! - [`inventory`] - Inventory store with undo buffer
//! - [`i18n`] - Vietnamese / English strings
//! - [`analytics`] - Shopify order aggregation
//!
//! ## Example Usage
//!
//! ```rust
//! use savn_core::inventory::{InventoryStore, NewProduct};
//! use savn_core::Money;
//!
//! let mut store = InventoryStore::new();
//! let widget = store
//!     .add_product(NewProduct::new("Widget", 10.0, 5.0, 2.0))
//!     .unwrap();
//!
//! store.sell_one(&widget.id).unwrap();
//! assert_eq!(store.summary().revenue, Money::from_cents(500));
//!
//! store.undo_last_action().unwrap();
//! assert_eq!(store.summary().revenue, Money::zero());
//! ```

pub mod analytics;
pub mod error;
pub mod i18n;
pub mod inventory;
pub mod ledger;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use inventory::InventoryStore;
pub use ledger::Ledger;
pub use money::{Currency, Money};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of a product name, in characters.
pub const MAX_PRODUCT_NAME_LEN: usize = 200;

/// Number of products shown in the analytics "top products" list.
pub const TOP_PRODUCTS_LIMIT: usize = 5;

/// Default stock level at or below which a product counts as "low stock".
pub const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 3;
