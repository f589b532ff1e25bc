//! # State Module
//!
//! Manages application state shared by the commands.
//!
//! One type per concern, so each command declares exactly the state it
//! touches:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      AppContext::open                           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                              │                                          │
//! │       ┌───────────────┬──────┴─────────┬──────────────────┐            │
//! │       ▼               ▼                ▼                  ▼             │
//! │  ┌──────────┐  ┌────────────────┐  ┌──────────────┐  ┌──────────────┐  │
//! │  │ DbState  │  │ InventoryState │  │ SettingsState│  │AnalyticsState│  │
//! │  │          │  │                │  │              │  │              │  │
//! │  │ Database │  │ Arc<Mutex<     │  │ Arc<Mutex<   │  │ ShopifyConfig│  │
//! │  │ (SQLite  │  │  InventoryStore│  │  Settings>>  │  │ last report  │  │
//! │  │  pool)   │  │ >> + write gate│  │              │  │              │  │
//! │  └──────────┘  └────────────────┘  └──────────────┘  └──────────────┘  │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • DbState: Database has internal connection pool (thread-safe)        │
//! │  • Others: Arc<Mutex<T>>; locks are never held across an await         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod analytics;
mod db;
mod inventory;
mod settings;

pub use analytics::AnalyticsState;
pub use db::DbState;
pub use inventory::InventoryState;
pub use settings::SettingsState;
