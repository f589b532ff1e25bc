//! # Repository Module
//!
//! Storage access for SAVN.
//!
//! ## Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Typed repositories                Raw storage                          │
//! │                                                                         │
//! │  ProductRepository     ─┐                                               │
//! │   "products"            │                                               │
//! │  TransactionRepository ─┼──► KeyValueRepository ──► kv_store table     │
//! │   "transactions"        │     get / put / put_many / delete / keys      │
//! │  SettingsRepository    ─┘                                               │
//! │   "settings"                                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A missing key loads as empty (or default settings); the app starts
//! cleanly on first launch.
//!
//! ## Available Repositories
//!
//! - [`kv::KeyValueRepository`] - Raw string values by key
//! - [`product::ProductRepository`] - Product list blob
//! - [`transaction::TransactionRepository`] - Ledger blob
//! - [`settings::SettingsRepository`] - Settings blob

pub mod kv;
pub mod product;
pub mod settings;
pub mod transaction;

/// Key holding the JSON array of products.
pub const PRODUCTS_KEY: &str = "products";

/// Key holding the JSON array of transactions.
pub const TRANSACTIONS_KEY: &str = "transactions";

/// Key holding the settings object.
pub const SETTINGS_KEY: &str = "settings";
