//! # Analytics Commands
//!
//! Refreshes the Shopify dashboard.
//!
//! ## Fallback
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  refresh_analytics                                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  fetch_analytics(config) ── Ok ──► store as last report, no banner     │
//! │       │                                                                 │
//! │      Err                                                               │
//! │       │                                                                 │
//! │       ├── last report exists ──► show it + error banner                │
//! │       └── none yet ───────────► demo report + error banner             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use savn_core::analytics::AnalyticsReport;
use savn_shopify::{fetch_analytics, generate_demo_analytics};
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::ApiError;
use crate::state::AnalyticsState;

/// What the dashboard renders: a report, and a dismissible banner when the
/// refresh failed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsView {
    pub report: AnalyticsReport,
    pub error: Option<ApiError>,
}

/// Fetches a fresh report. Never fails; see the module docs for fallback.
pub async fn refresh_analytics(analytics: &AnalyticsState) -> AnalyticsView {
    debug!("refresh_analytics command");

    match fetch_analytics(analytics.config()).await {
        Ok(report) => {
            analytics.store_report(report.clone());
            AnalyticsView {
                report,
                error: None,
            }
        }
        Err(e) => {
            warn!(error = %e, retryable = e.is_retryable(), "Analytics refresh failed");

            let report = analytics
                .last_report()
                .unwrap_or_else(|| generate_demo_analytics(analytics.config().demo_seed));

            AnalyticsView {
                report,
                error: Some(ApiError::from(e)),
            }
        }
    }
}

/// Returns the last loaded report without refreshing.
pub fn get_analytics(analytics: &AnalyticsState) -> Option<AnalyticsReport> {
    analytics.last_report()
}
