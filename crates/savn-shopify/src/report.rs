//! # Analytics Report
//!
//! Entry point used by the app: live report when credentials exist,
//! demo report otherwise.

use chrono::{Duration, Utc};
use savn_core::analytics::{calculate_order_metrics, AnalyticsReport};
use tracing::info;

use crate::client::ShopifyClient;
use crate::config::ShopifyConfig;
use crate::demo::generate_demo_analytics;
use crate::error::ShopifyResult;

/// Fetches the analytics dashboard report.
///
/// Without credentials this returns a demo report and makes no network
/// call. Otherwise orders and both counts are requested concurrently; the
/// first failure aborts the fetch.
pub async fn fetch_analytics(config: &ShopifyConfig) -> ShopifyResult<AnalyticsReport> {
    if !config.has_credentials() {
        info!("Shopify credentials not configured, using demo analytics");
        return Ok(generate_demo_analytics(config.demo_seed));
    }

    let client = ShopifyClient::new(config)?;
    let since = Utc::now() - Duration::days(i64::from(config.lookback_days));

    let (orders, customers, products) = tokio::try_join!(
        client.fetch_orders(since),
        client.count_customers(),
        client.count_products(),
    )?;

    let metrics = calculate_order_metrics(&orders);
    info!(
        orders = metrics.total_orders,
        customers,
        products,
        "Fetched live Shopify analytics"
    );

    Ok(AnalyticsReport::live(
        metrics,
        customers,
        products,
        config.lookback_days,
    ))
}
