//! # Database State
//!
//! Wraps the `Database` connection for use in commands.
//!
//! ## Thread Safety
//! The `Database` struct from `savn-db` contains a `SqlitePool` which
//! is inherently thread-safe. Reads need no extra locking; inventory
//! writes are serialized by [`super::InventoryState::write_gate`].
//!
//! ## Usage in Commands
//! ```rust,ignore
//! pub async fn set_language(
//!     db: &DbState,
//!     settings: &SettingsState,
//!     language: Language,
//! ) -> Result<Settings, ApiError> {
//!     db.inner().settings().save(&next).await?;
//!     ...
//! }
//! ```

use savn_db::Database;

/// Wrapper around `Database` for the app context.
#[derive(Debug, Clone)]
pub struct DbState {
    db: Database,
}

impl DbState {
    /// Creates a new DbState wrapping the database connection.
    pub fn new(db: Database) -> Self {
        DbState { db }
    }

    /// Returns a reference to the inner Database.
    pub fn inner(&self) -> &Database {
        &self.db
    }
}
