//! # savn-db: Persistence Layer for SAVN
//!
//! Local storage for the inventory tracker. State is a handful of JSON
//! blobs under named keys in a single SQLite table.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          SAVN Data Flow                                 │
//! │                                                                         │
//! │  Command (sell_product)                                                │
//! │       │  InventoryStore mutated in memory                              │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     savn-db (THIS CRATE)                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌────────────────────┐   ┌───────────┐  │   │
//! │  │   │   Database    │    │   Repositories     │   │ Migrations│  │   │
//! │  │   │   (pool.rs)   │    │                    │   │ (embedded)│  │   │
//! │  │   │               │    │ KeyValueRepository │   │           │  │   │
//! │  │   │ SqlitePool    │◄───│ ProductRepository  │   │ 001_kv    │  │   │
//! │  │   │               │    │ TransactionRepo    │   │           │  │   │
//! │  │   │               │    │ SettingsRepository │   │           │  │   │
//! │  │   └───────────────┘    └────────────────────┘   └───────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  kv_store(key, value JSON, updated_at)                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - Key-value and typed blob repositories
//!
//! ## Usage
//!
//! ```rust,ignore
//! use savn_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("path/to/savn.db")).await?;
//!
//! let products = db.products().load().await?;
//! let settings = db.settings().load().await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};

// Repository re-exports for convenience
pub use repository::kv::KeyValueRepository;
pub use repository::product::ProductRepository;
pub use repository::settings::SettingsRepository;
pub use repository::transaction::TransactionRepository;
