//! # SAVN App Library
//!
//! Application context for the SAVN inventory tracker and the Shopify
//! analytics dashboard. The screens call into [`commands`] with the state
//! held by an [`AppContext`].
//!
//! ## Module Organization
//! ```text
//! savn_app/
//! ├── lib.rs          ◄─── You are here (config, context, tracing)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── db.rs       ◄─── Database state wrapper
//! │   ├── inventory.rs◄─── Inventory store + write gate
//! │   ├── settings.rs ◄─── Language / currency
//! │   └── analytics.rs◄─── Shopify config + last report
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports + write-through helper
//! │   ├── product.rs  ◄─── Product CRUD
//! │   ├── stock.rs    ◄─── Sell / restock / waste / adjust / undo
//! │   ├── history.rs  ◄─── Summary + history
//! │   ├── settings.rs ◄─── Settings + reset
//! │   └── analytics.rs◄─── Dashboard refresh
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod commands;
pub mod error;
pub mod state;

use directories::ProjectDirs;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use error::ApiError;
use savn_core::InventoryStore;
use savn_db::{Database, DbConfig};
use savn_shopify::ShopifyConfig;
use state::{AnalyticsState, DbState, InventoryState, SettingsState};

/// Environment variable overriding the database location.
pub const ENV_DB_PATH: &str = "SAVN_DB_PATH";

const IN_MEMORY_DB: &str = ":memory:";

// =============================================================================
// Configuration
// =============================================================================

/// Startup configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// SQLite file, or `:memory:`.
    pub database_path: PathBuf,

    /// Shopify credentials and request settings.
    pub shopify: ShopifyConfig,
}

impl AppConfig {
    /// Loads configuration from the environment and config files.
    ///
    /// ## Database Path
    /// 1. `SAVN_DB_PATH`
    /// 2. Platform data dir:
    ///    - **macOS**: `~/Library/Application Support/com.savn.savn/savn.db`
    ///    - **Windows**: `%APPDATA%\savn\savn\data\savn.db`
    ///    - **Linux**: `~/.local/share/savn/savn.db`
    pub fn load() -> Result<Self, ApiError> {
        Ok(AppConfig {
            database_path: database_path()?,
            shopify: ShopifyConfig::load_or_default(None),
        })
    }

    /// In-memory database, demo analytics. For tests.
    pub fn in_memory() -> Self {
        AppConfig {
            database_path: PathBuf::from(IN_MEMORY_DB),
            shopify: ShopifyConfig::default(),
        }
    }

    fn db_config(&self) -> DbConfig {
        if self.database_path.as_os_str() == IN_MEMORY_DB {
            DbConfig::in_memory()
        } else {
            DbConfig::new(self.database_path.clone())
        }
    }
}

fn database_path() -> Result<PathBuf, ApiError> {
    if let Ok(path) = std::env::var(ENV_DB_PATH) {
        return Ok(PathBuf::from(path));
    }

    let proj_dirs = ProjectDirs::from("com", "savn", "savn")
        .ok_or_else(|| ApiError::internal("Could not determine app data directory"))?;

    let data_dir = proj_dirs.data_dir();
    std::fs::create_dir_all(data_dir)
        .map_err(|e| ApiError::internal(format!("Could not create data directory: {}", e)))?;

    Ok(data_dir.join("savn.db"))
}

// =============================================================================
// Application Context
// =============================================================================

/// Everything the commands need, constructed once at startup.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Connect to Database ──────────────────────────────────────────────► │
/// │     • SQLite with WAL mode                                              │
/// │     • Run pending migrations                                            │
/// │                                                                         │
/// │  2. Load persisted state (once) ──────────────────────────────────────► │
/// │     • products, transactions → InventoryStore                          │
/// │     • settings (defaults when missing)                                 │
/// │                                                                         │
/// │  3. Initialize State Objects ─────────────────────────────────────────► │
/// │     • DbState, InventoryState, SettingsState, AnalyticsState           │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone)]
pub struct AppContext {
    db: DbState,
    inventory: InventoryState,
    settings: SettingsState,
    analytics: AnalyticsState,
}

impl AppContext {
    /// Opens the database and loads all persisted state.
    pub async fn open(config: AppConfig) -> Result<Self, ApiError> {
        info!(path = %config.database_path.display(), "Opening SAVN");

        let db = Database::new(config.db_config()).await?;

        let products = db.products().load().await?;
        let transactions = db.transactions().load().await?;
        let settings = db.settings().load().await?;

        info!(
            products = products.len(),
            transactions = transactions.len(),
            language = %settings.language,
            currency = %settings.currency,
            "Persisted state loaded"
        );

        Ok(AppContext {
            db: DbState::new(db),
            inventory: InventoryState::new(InventoryStore::from_parts(products, transactions)),
            settings: SettingsState::new(settings),
            analytics: AnalyticsState::new(config.shopify),
        })
    }

    /// Closes the database. Later writes fail with `DATABASE_ERROR`.
    pub async fn close(&self) {
        info!("Closing SAVN");
        self.db.inner().close().await;
    }

    pub fn db(&self) -> &DbState {
        &self.db
    }

    pub fn inventory(&self) -> &InventoryState {
        &self.inventory
    }

    pub fn settings(&self) -> &SettingsState {
        &self.settings
    }

    pub fn analytics(&self) -> &AnalyticsState {
        &self.analytics
    }
}

// =============================================================================
// Logging
// =============================================================================

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=savn=trace` - Show trace for savn crates only
/// - Default: `info,savn=debug,sqlx=warn`
///
/// Safe to call more than once; later calls are ignored.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,savn=debug,sqlx=warn"));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
