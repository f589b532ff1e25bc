//! # Order Analytics
//!
//! Aggregates raw Shopify orders into the KPIs shown on the analytics
//! dashboard. Pure functions only; fetching lives in `savn-shopify`.
//!
//! ## Aggregation
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  orders.json ──► Vec<Order>                                             │
//! │                    │                                                    │
//! │                    ├── Σ current_total_price        → total_revenue     │
//! │                    ├── count                        → total_orders      │
//! │                    ├── revenue / orders             → average_order_value│
//! │                    ├── customers with > 1 order     → returning rate %  │
//! │                    ├── group by UTC day (ascending) → daily_sales       │
//! │                    └── group line items by title    → top 5 by revenue  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use tracing::warn;
use ts_rs::TS;

use crate::money::Money;
use crate::TOP_PRODUCTS_LIMIT;

/// Title used for line items Shopify returns without one.
pub const UNTITLED_PRODUCT: &str = "Untitled Product";

// =============================================================================
// Shopify Shapes
// =============================================================================

/// An order as returned by `orders.json` with the field projection we request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    #[serde(default)]
    pub id: Option<u64>,

    /// ISO 8601 timestamp with offset, e.g. `2024-10-01T09:30:00-04:00`.
    pub created_at: String,

    /// Decimal string, e.g. `"100.00"`.
    #[serde(default)]
    pub current_total_price: Option<String>,

    #[serde(default)]
    pub customer: Option<Customer>,

    #[serde(default)]
    pub line_items: Vec<LineItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    #[serde(default)]
    pub id: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    #[serde(default)]
    pub title: Option<String>,

    /// Unit price as a decimal string.
    #[serde(default)]
    pub price: Option<String>,

    #[serde(default)]
    pub quantity: Option<i64>,
}

// =============================================================================
// Aggregates
// =============================================================================

/// Revenue for one calendar day (UTC).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DailySales {
    #[ts(as = "String")]
    pub date: NaiveDate,
    pub revenue: Money,
}

/// Sales of one product title over the period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TopProduct {
    pub title: String,
    pub units_sold: i64,
    pub revenue: Money,
}

/// Everything derivable from the order list alone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrderMetrics {
    pub total_revenue: Money,
    pub total_orders: u64,
    pub average_order_value: Money,
    /// Percentage (0-100) of distinct customers with more than one order.
    pub returning_customer_rate: f64,
    pub daily_sales: Vec<DailySales>,
    pub top_products: Vec<TopProduct>,
}

/// Headline numbers for the dashboard cards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Kpis {
    pub total_revenue: Money,
    pub total_orders: u64,
    pub average_order_value: Money,
    pub total_customers: u64,
    pub total_products: u64,
    pub returning_customer_rate: f64,
}

/// Where a report's numbers came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum AnalyticsMode {
    Live,
    Demo,
}

/// A complete dashboard payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnalyticsReport {
    pub mode: AnalyticsMode,
    pub date_range_days: u32,
    #[ts(as = "String")]
    pub generated_at: DateTime<Utc>,
    pub kpis: Kpis,
    pub daily_sales: Vec<DailySales>,
    pub top_products: Vec<TopProduct>,
}

impl AnalyticsReport {
    /// Builds a live report from order metrics and the two count endpoints.
    pub fn live(
        metrics: OrderMetrics,
        total_customers: u64,
        total_products: u64,
        date_range_days: u32,
    ) -> Self {
        AnalyticsReport {
            mode: AnalyticsMode::Live,
            date_range_days,
            generated_at: Utc::now(),
            kpis: Kpis {
                total_revenue: metrics.total_revenue,
                total_orders: metrics.total_orders,
                average_order_value: metrics.average_order_value,
                total_customers,
                total_products,
                returning_customer_rate: metrics.returning_customer_rate,
            },
            daily_sales: metrics.daily_sales,
            top_products: metrics.top_products,
        }
    }

    pub fn is_demo(&self) -> bool {
        self.mode == AnalyticsMode::Demo
    }
}

// =============================================================================
// Calculation
// =============================================================================

/// Aggregates an order list.
///
/// - Orders without a customer id do not count toward customer totals.
/// - Orders with an unparseable `created_at` still count toward revenue but
///   are left out of daily sales.
/// - Top products keep first-seen order on revenue ties.
pub fn calculate_order_metrics(orders: &[Order]) -> OrderMetrics {
    let total_orders = orders.len() as u64;
    let total_revenue: Money = orders.iter().map(order_total).sum();

    let mut customer_orders: HashMap<u64, u32> = HashMap::new();
    for id in orders.iter().filter_map(|o| o.customer.as_ref()?.id) {
        *customer_orders.entry(id).or_default() += 1;
    }
    let unique_customers = customer_orders.len();
    let returning_customers = customer_orders.values().filter(|&&count| count > 1).count();

    let returning_customer_rate = if unique_customers == 0 {
        0.0
    } else {
        returning_customers as f64 / unique_customers as f64 * 100.0
    };

    let mut daily: BTreeMap<NaiveDate, Money> = BTreeMap::new();
    let mut products: Vec<TopProduct> = Vec::new();
    let mut product_index: HashMap<String, usize> = HashMap::new();

    for order in orders {
        match DateTime::parse_from_rfc3339(&order.created_at) {
            Ok(created) => {
                let day = created.with_timezone(&Utc).date_naive();
                *daily.entry(day).or_default() += order_total(order);
            }
            Err(e) => {
                warn!(order_id = ?order.id, created_at = %order.created_at, error = %e, "Skipping order with bad timestamp");
            }
        }

        for item in &order.line_items {
            let title = item
                .title
                .as_deref()
                .filter(|t| !t.is_empty())
                .unwrap_or(UNTITLED_PRODUCT);
            let quantity = item.quantity.unwrap_or(0);
            let price = parse_amount(item.price.as_deref());

            let index = *product_index.entry(title.to_string()).or_insert_with(|| {
                products.push(TopProduct {
                    title: title.to_string(),
                    units_sold: 0,
                    revenue: Money::zero(),
                });
                products.len() - 1
            });

            let entry = &mut products[index];
            entry.units_sold += quantity;
            entry.revenue += price.multiply_quantity(quantity);
        }
    }

    // Stable sort: ties keep first-seen order
    products.sort_by(|a, b| b.revenue.cmp(&a.revenue));
    products.truncate(TOP_PRODUCTS_LIMIT);

    OrderMetrics {
        total_revenue,
        total_orders,
        average_order_value: total_revenue.divide_rounded(total_orders),
        returning_customer_rate,
        daily_sales: daily
            .into_iter()
            .map(|(date, revenue)| DailySales { date, revenue })
            .collect(),
        top_products: products,
    }
}

fn order_total(order: &Order) -> Money {
    parse_amount(order.current_total_price.as_deref())
}

fn parse_amount(value: Option<&str>) -> Money {
    match value {
        None => Money::zero(),
        Some(text) => Money::parse_decimal(text).unwrap_or_else(|| {
            warn!(value = %text, "Treating malformed amount as zero");
            Money::zero()
        }),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn order(total: &str, created_at: &str, customer: Option<u64>) -> Order {
        Order {
            id: None,
            created_at: created_at.to_string(),
            current_total_price: Some(total.to_string()),
            customer: customer.map(|id| Customer { id: Some(id) }),
            line_items: Vec::new(),
        }
    }

    fn item(title: Option<&str>, price: &str, quantity: i64) -> LineItem {
        LineItem {
            title: title.map(str::to_string),
            price: Some(price.to_string()),
            quantity: Some(quantity),
        }
    }

    #[test]
    fn test_same_customer_same_day() {
        let orders = vec![
            order("100.00", "2024-10-01T10:00:00Z", Some(1)),
            order("50.00", "2024-10-01T15:30:00Z", Some(1)),
        ];

        let metrics = calculate_order_metrics(&orders);
        assert_eq!(metrics.total_orders, 2);
        assert_eq!(metrics.total_revenue, Money::from_cents(15000));
        assert_eq!(metrics.average_order_value, Money::from_cents(7500));
        assert_eq!(metrics.returning_customer_rate, 100.0);
        assert_eq!(metrics.daily_sales.len(), 1);
        assert_eq!(metrics.daily_sales[0].revenue, Money::from_cents(15000));
    }

    #[test]
    fn test_empty_orders() {
        let metrics = calculate_order_metrics(&[]);
        assert_eq!(metrics.total_revenue, Money::zero());
        assert_eq!(metrics.average_order_value, Money::zero());
        assert_eq!(metrics.returning_customer_rate, 0.0);
        assert!(metrics.daily_sales.is_empty());
        assert!(metrics.top_products.is_empty());
    }

    #[test]
    fn test_daily_sales_grouped_by_utc_day_ascending() {
        let orders = vec![
            order("10.00", "2024-10-03T01:00:00Z", None),
            // 2024-10-02 evening in New York is already 10-03 in UTC
            order("5.00", "2024-10-02T22:00:00-04:00", None),
            order("7.00", "2024-10-01T12:00:00Z", None),
            order("1.00", "not a date", None),
        ];

        let metrics = calculate_order_metrics(&orders);
        let days: Vec<_> = metrics
            .daily_sales
            .iter()
            .map(|d| (d.date.to_string(), d.revenue.cents()))
            .collect();

        assert_eq!(
            days,
            vec![("2024-10-01".to_string(), 700), ("2024-10-03".to_string(), 1500)]
        );
        assert_eq!(metrics.total_revenue, Money::from_cents(2300));
    }

    #[test]
    fn test_returning_rate_ignores_guests() {
        let orders = vec![
            order("1.00", "2024-10-01T00:00:00Z", Some(1)),
            order("1.00", "2024-10-01T00:00:00Z", Some(1)),
            order("1.00", "2024-10-01T00:00:00Z", Some(2)),
            order("1.00", "2024-10-01T00:00:00Z", Some(3)),
            order("1.00", "2024-10-01T00:00:00Z", None),
        ];

        let metrics = calculate_order_metrics(&orders);
        assert!((metrics.returning_customer_rate - 100.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_top_products() {
        let mut first = order("0", "2024-10-01T00:00:00Z", None);
        first.line_items = vec![
            item(Some("A"), "10.00", 1),
            item(Some("B"), "5.00", 2),
            item(None, "1.00", 3),
            item(Some("C"), "30.00", 1),
        ];
        let mut second = order("0", "2024-10-02T00:00:00Z", None);
        second.line_items = vec![
            item(Some("D"), "2.00", 1),
            item(Some("E"), "1.00", 1),
            item(Some("C"), "30.00", 1),
        ];

        let metrics = calculate_order_metrics(&[first, second]);
        let top: Vec<_> = metrics
            .top_products
            .iter()
            .map(|p| (p.title.as_str(), p.units_sold, p.revenue.cents()))
            .collect();

        assert_eq!(
            top,
            vec![
                ("C", 2, 6000),
                ("A", 1, 1000),
                ("B", 2, 1000),
                (UNTITLED_PRODUCT, 3, 300),
                ("D", 1, 200),
            ]
        );
    }

    #[test]
    fn test_deserialize_shopify_order() {
        let json = r#"{
            "id": 450789469,
            "created_at": "2024-10-05T12:00:00-04:00",
            "current_total_price": "19.99",
            "customer": {"id": 207119551},
            "line_items": [{"title": "Mug", "price": "9.99", "quantity": 2}]
        }"#;

        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.customer.unwrap().id, Some(207119551));
        assert_eq!(order.line_items[0].quantity, Some(2));
    }

    #[test]
    fn test_live_report() {
        let metrics = calculate_order_metrics(&[order("20.00", "2024-10-01T00:00:00Z", Some(9))]);
        let report = AnalyticsReport::live(metrics, 12, 34, 30);

        assert!(!report.is_demo());
        assert_eq!(report.kpis.total_customers, 12);
        assert_eq!(report.kpis.total_products, 34);
        assert_eq!(report.kpis.total_revenue, Money::from_cents(2000));
    }
}
