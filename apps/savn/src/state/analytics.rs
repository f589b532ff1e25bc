//! # Analytics State
//!
//! Holds the Shopify config and the last report shown on the dashboard.
//! A failed refresh keeps the last report on screen.

use std::sync::{Arc, Mutex, PoisonError};

use savn_core::analytics::AnalyticsReport;
use savn_shopify::ShopifyConfig;

#[derive(Debug, Clone)]
pub struct AnalyticsState {
    config: Arc<ShopifyConfig>,
    last_report: Arc<Mutex<Option<AnalyticsReport>>>,
}

impl AnalyticsState {
    pub fn new(config: ShopifyConfig) -> Self {
        AnalyticsState {
            config: Arc::new(config),
            last_report: Arc::new(Mutex::new(None)),
        }
    }

    /// Shopify configuration (read-only after startup).
    pub fn config(&self) -> &ShopifyConfig {
        &self.config
    }

    /// Last successfully loaded report, if any.
    pub fn last_report(&self) -> Option<AnalyticsReport> {
        self.last_report
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Remembers a freshly loaded report.
    pub fn store_report(&self, report: AnalyticsReport) {
        *self.last_report.lock().unwrap_or_else(PoisonError::into_inner) = Some(report);
    }
}

impl Default for AnalyticsState {
    fn default() -> Self {
        Self::new(ShopifyConfig::default())
    }
}
