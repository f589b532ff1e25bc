//! # Demo Analytics
//!
//! Stand-in report used when no Shopify credentials are configured.
//! The KPI profile and product list are fixed; daily revenue is random
//! within a band. Pass a seed to get the same series every time.

use chrono::{Duration, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use savn_core::analytics::{AnalyticsMode, AnalyticsReport, DailySales, Kpis, TopProduct};
use savn_core::Money;
use tracing::debug;

/// Days of revenue in a demo report.
pub const DEMO_DAYS: u32 = 30;

const DEMO_DAILY_MIN_DOLLARS: i64 = 700;
const DEMO_DAILY_SPREAD_DOLLARS: i64 = 1200;
const DEMO_TOTAL_ORDERS: u64 = 410;
const DEMO_TOTAL_CUSTOMERS: u64 = 265;
const DEMO_TOTAL_PRODUCTS: u64 = 118;
const DEMO_RETURNING_RATE: f64 = 34.2;

/// (title, units sold, revenue in whole dollars)
const DEMO_TOP_PRODUCTS: [(&str, i64, i64); 5] = [
    ("Sequin Star Blazer", 88, 7480),
    ("Queen Glam Midi Dress", 73, 6935),
    ("Crystal Fringe Top", 52, 4160),
    ("Royal Sparkle Skirt", 44, 3300),
    ("Night Light Jumpsuit", 39, 3120),
];

/// Builds a demo report covering the last [`DEMO_DAYS`] days.
///
/// Each day's revenue is `700 + [0, 1200]` whole dollars. `None` seeds
/// from OS entropy.
pub fn generate_demo_analytics(seed: Option<u64>) -> AnalyticsReport {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let now = Utc::now();
    let start = (now - Duration::days(i64::from(DEMO_DAYS))).date_naive();

    let daily_sales: Vec<DailySales> = (0..DEMO_DAYS)
        .map(|offset| {
            let dollars = DEMO_DAILY_MIN_DOLLARS + rng.gen_range(0..=DEMO_DAILY_SPREAD_DOLLARS);
            DailySales {
                date: start + Duration::days(i64::from(offset)),
                revenue: Money::from_cents(dollars * 100),
            }
        })
        .collect();

    let total_revenue: Money = daily_sales.iter().map(|d| d.revenue).sum();

    let top_products = DEMO_TOP_PRODUCTS
        .iter()
        .map(|(title, units, dollars)| TopProduct {
            title: title.to_string(),
            units_sold: *units,
            revenue: Money::from_cents(dollars * 100),
        })
        .collect();

    debug!(seeded = seed.is_some(), revenue = %total_revenue, "Generated demo analytics");

    AnalyticsReport {
        mode: AnalyticsMode::Demo,
        date_range_days: DEMO_DAYS,
        generated_at: now,
        kpis: Kpis {
            total_revenue,
            total_orders: DEMO_TOTAL_ORDERS,
            average_order_value: total_revenue.divide_rounded(DEMO_TOTAL_ORDERS),
            total_customers: DEMO_TOTAL_CUSTOMERS,
            total_products: DEMO_TOTAL_PRODUCTS,
            returning_customer_rate: DEMO_RETURNING_RATE,
        },
        daily_sales,
        top_products,
    }
}
