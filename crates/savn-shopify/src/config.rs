//! # Shopify Configuration
//!
//! Credentials and request settings for the analytics fetch.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     SAVN_SHOPIFY_SHOP_DOMAIN=my-store.myshopify.com                    │
//! │     SAVN_SHOPIFY_ACCESS_TOKEN=shpat_...                                │
//! │     SAVN_SHOPIFY_API_VERSION=2024-10                                   │
//! │     SAVN_SHOPIFY_DEMO_SEED=42                                          │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/savn/shopify.toml (Linux)                                │
//! │     ~/Library/Application Support/com.savn.savn/shopify.toml (macOS)  │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     No credentials → demo mode                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # shopify.toml
//! shop_domain = "my-store.myshopify.com"
//! access_token = "shpat_xxx"
//! api_version = "2024-10"
//! lookback_days = 30
//! order_limit = 250
//! request_timeout_secs = 15
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, info, warn};
use url::Url;

use crate::error::{ShopifyError, ShopifyResult};

/// Environment variable for the shop domain.
pub const ENV_SHOP_DOMAIN: &str = "SAVN_SHOPIFY_SHOP_DOMAIN";
/// Environment variable for the Admin API access token.
pub const ENV_ACCESS_TOKEN: &str = "SAVN_SHOPIFY_ACCESS_TOKEN";
/// Environment variable for the Admin API version.
pub const ENV_API_VERSION: &str = "SAVN_SHOPIFY_API_VERSION";
/// Environment variable for the demo data seed.
pub const ENV_DEMO_SEED: &str = "SAVN_SHOPIFY_DEMO_SEED";

/// Shopify caps `limit` on list endpoints at 250.
pub const MAX_ORDER_LIMIT: u32 = 250;

fn default_api_version() -> String {
    "2024-10".to_string()
}
fn default_lookback_days() -> u32 {
    30
}
fn default_order_limit() -> u32 {
    MAX_ORDER_LIMIT
}
fn default_request_timeout() -> u64 {
    15
}

// =============================================================================
// Shopify Configuration
// =============================================================================

/// Complete Shopify configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopifyConfig {
    /// Shop domain, e.g. `my-store.myshopify.com`. No scheme, no path.
    #[serde(default)]
    pub shop_domain: Option<String>,

    /// Admin API access token.
    #[serde(default)]
    pub access_token: Option<String>,

    /// Admin API version path segment.
    #[serde(default = "default_api_version")]
    pub api_version: String,

    /// How far back to fetch orders.
    #[serde(default = "default_lookback_days")]
    pub lookback_days: u32,

    /// `limit` for orders.json (1-250).
    #[serde(default = "default_order_limit")]
    pub order_limit: u32,

    /// Per-request timeout (seconds).
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Seed for demo data. Random when unset.
    #[serde(default)]
    pub demo_seed: Option<u64>,

    /// Replaces `https://{shop_domain}` (proxies, tests).
    #[serde(default)]
    pub api_base_url: Option<String>,
}

impl Default for ShopifyConfig {
    fn default() -> Self {
        ShopifyConfig {
            shop_domain: None,
            access_token: None,
            api_version: default_api_version(),
            lookback_days: default_lookback_days(),
            order_limit: default_order_limit(),
            request_timeout_secs: default_request_timeout(),
            demo_seed: None,
            api_base_url: None,
        }
    }
}

impl ShopifyConfig {
    /// Creates a config with credentials set.
    pub fn with_credentials(shop_domain: impl Into<String>, access_token: impl Into<String>) -> Self {
        ShopifyConfig {
            shop_domain: Some(shop_domain.into()),
            access_token: Some(access_token.into()),
            ..Self::default()
        }
    }

    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (shopify.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> ShopifyResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading Shopify config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default (demo mode) if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load Shopify config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Saves configuration to file.
    pub fn save(&self, config_path: Option<PathBuf>) -> ShopifyResult<()> {
        let path = config_path
            .or_else(Self::default_config_path)
            .ok_or_else(|| ShopifyError::ConfigSaveFailed("No config path available".into()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents)?;

        info!(?path, "Shopify config saved");
        Ok(())
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ShopifyResult<()> {
        if let Some(domain) = self.shop_domain.as_deref().map(str::trim) {
            if domain.contains("://") || domain.contains('/') {
                return Err(ShopifyError::InvalidConfig(format!(
                    "shop_domain must be a bare host like my-store.myshopify.com, got: {}",
                    domain
                )));
            }
        }

        if self.api_version.trim().is_empty() {
            return Err(ShopifyError::InvalidConfig(
                "api_version must not be empty".into(),
            ));
        }

        if self.lookback_days == 0 {
            return Err(ShopifyError::InvalidConfig(
                "lookback_days must be greater than 0".into(),
            ));
        }

        if self.order_limit == 0 || self.order_limit > MAX_ORDER_LIMIT {
            return Err(ShopifyError::InvalidConfig(format!(
                "order_limit must be between 1 and {}",
                MAX_ORDER_LIMIT
            )));
        }

        if let Some(ref base) = self.api_base_url {
            let url = Url::parse(base)?;
            if url.scheme() != "http" && url.scheme() != "https" {
                return Err(ShopifyError::InvalidUrl(format!(
                    "api_base_url must start with http:// or https://, got: {}",
                    base
                )));
            }
        }

        Ok(())
    }

    /// Applies environment variable overrides.
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Applies overrides from any key lookup (the environment in production).
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(domain) = lookup(ENV_SHOP_DOMAIN) {
            debug!(shop_domain = %domain, "Overriding shop domain from environment");
            self.shop_domain = Some(domain);
        }

        if let Some(token) = lookup(ENV_ACCESS_TOKEN) {
            debug!("Overriding access token from environment");
            self.access_token = Some(token);
        }

        if let Some(version) = lookup(ENV_API_VERSION) {
            debug!(api_version = %version, "Overriding API version from environment");
            self.api_version = version;
        }

        if let Some(seed) = lookup(ENV_DEMO_SEED) {
            match seed.parse::<u64>() {
                Ok(s) => self.demo_seed = Some(s),
                Err(_) => warn!(seed = %seed, "Ignoring non-numeric demo seed in environment"),
            }
        }
    }

    /// Returns the default config file path.
    pub fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "savn", "savn")
            .map(|dirs| dirs.config_dir().join("shopify.toml"))
    }

    // =========================================================================
    // Convenience Methods
    // =========================================================================

    /// Returns true when both the shop domain and token are set.
    ///
    /// Without them analytics run in demo mode and make no network call.
    pub fn has_credentials(&self) -> bool {
        let present = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.trim().is_empty());
        present(&self.shop_domain) && present(&self.access_token)
    }

    /// Root of the versioned Admin API, always ending in `/`.
    ///
    /// `https://{shop}/admin/api/{version}/`, or the same path under
    /// `api_base_url` when set.
    pub fn api_root(&self) -> ShopifyResult<Url> {
        let origin = match (&self.api_base_url, &self.shop_domain) {
            (Some(base), _) => base.trim_end_matches('/').to_string(),
            (None, Some(domain)) => format!("https://{}", domain.trim()),
            (None, None) => return Err(ShopifyError::MissingCredentials),
        };

        let root = format!("{}/admin/api/{}/", origin, self.api_version.trim());
        Ok(Url::parse(&root)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = ShopifyConfig::default();
        assert!(!config.has_credentials());
        assert_eq!(config.api_version, "2024-10");
        assert_eq!(config.lookback_days, 30);
        assert_eq!(config.order_limit, 250);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_has_credentials() {
        assert!(ShopifyConfig::with_credentials("shop.myshopify.com", "tok").has_credentials());
        assert!(!ShopifyConfig::with_credentials("shop.myshopify.com", "  ").has_credentials());
        assert!(!ShopifyConfig::with_credentials("", "tok").has_credentials());
    }

    #[test]
    fn test_api_root() {
        let config = ShopifyConfig::with_credentials("shop.myshopify.com", "tok");
        assert_eq!(
            config.api_root().unwrap().as_str(),
            "https://shop.myshopify.com/admin/api/2024-10/"
        );

        let mut config = config;
        config.api_base_url = Some("http://127.0.0.1:9000/".to_string());
        assert_eq!(
            config.api_root().unwrap().as_str(),
            "http://127.0.0.1:9000/admin/api/2024-10/"
        );

        assert!(matches!(
            ShopifyConfig::default().api_root(),
            Err(ShopifyError::MissingCredentials)
        ));
    }

    #[test]
    fn test_config_validation() {
        let mut config = ShopifyConfig::with_credentials("https://shop.myshopify.com", "tok");
        assert!(config.validate().is_err());

        config.shop_domain = Some("shop.myshopify.com".to_string());
        assert!(config.validate().is_ok());

        config.order_limit = 251;
        assert!(config.validate().is_err());
        config.order_limit = 50;

        config.lookback_days = 0;
        assert!(config.validate().is_err());
        config.lookback_days = 7;

        config.api_base_url = Some("ftp://proxy".to_string());
        assert!(config.validate().is_err());
        config.api_base_url = Some("not a url".to_string());
        assert!(matches!(config.validate(), Err(ShopifyError::InvalidUrl(_))));
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            (ENV_SHOP_DOMAIN, "env.myshopify.com"),
            (ENV_ACCESS_TOKEN, "shpat_env"),
            (ENV_DEMO_SEED, "42"),
        ]
        .into_iter()
        .collect();

        let mut config = ShopifyConfig::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.shop_domain.as_deref(), Some("env.myshopify.com"));
        assert_eq!(config.access_token.as_deref(), Some("shpat_env"));
        assert_eq!(config.demo_seed, Some(42));
        assert_eq!(config.api_version, "2024-10");
    }

    #[test]
    fn test_bad_seed_ignored() {
        let mut config = ShopifyConfig::default();
        config.apply_overrides(|key| (key == ENV_DEMO_SEED).then(|| "abc".to_string()));
        assert_eq!(config.demo_seed, None);
    }

    #[test]
    fn test_toml_roundtrip_with_defaults() {
        let config: ShopifyConfig = toml::from_str(
            r#"
            shop_domain = "shop.myshopify.com"
            access_token = "tok"
            lookback_days = 7
            "#,
        )
        .unwrap();

        assert!(config.has_credentials());
        assert_eq!(config.lookback_days, 7);
        assert_eq!(config.order_limit, 250);

        let text = toml::to_string_pretty(&config).unwrap();
        assert!(text.contains("shop_domain"));
    }

    #[test]
    fn test_save_then_load() {
        let path = std::env::temp_dir().join(format!("savn-shopify-{}.toml", uuid::Uuid::new_v4()));
        let mut config = ShopifyConfig::default();
        config.lookback_days = 14;

        config.save(Some(path.clone())).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        let loaded: ShopifyConfig = toml::from_str(&text).unwrap();
        assert_eq!(loaded.lookback_days, 14);

        let _ = std::fs::remove_file(&path);
    }
}
