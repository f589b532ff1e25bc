//! # savn-shopify: Shopify Analytics for SAVN
//!
//! Fetches the analytics dashboard report from the Shopify Admin REST API,
//! or builds a demo report when the shop is not connected.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        fetch_analytics(&config)                         │
//! │                                                                         │
//! │  has_credentials()?                                                    │
//! │     │                                                                   │
//! │     ├── no ──► demo::generate_demo_analytics(seed)   (no network)      │
//! │     │                                                                   │
//! │     └── yes ─► ShopifyClient                                           │
//! │                  ├── orders.json            ┐                          │
//! │                  ├── customers/count.json   ├─ tokio::try_join!        │
//! │                  └── products/count.json    ┘                          │
//! │                          │                                              │
//! │                          ▼                                              │
//! │                calculate_order_metrics → AnalyticsReport::live         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//! - [`config`] - Credentials and request settings (TOML + env)
//! - [`client`] - Admin API client
//! - [`demo`] - Demo report generator
//! - [`report`] - `fetch_analytics` entry point
//! - [`error`] - Error types
//!
//! ## Usage
//!
//! ```rust,ignore
//! use savn_shopify::{fetch_analytics, ShopifyConfig};
//!
//! let config = ShopifyConfig::load_or_default(None);
//! let report = fetch_analytics(&config).await?;
//! println!("Revenue: {}", report.kpis.total_revenue);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod client;
pub mod config;
pub mod demo;
pub mod error;
pub mod report;

// =============================================================================
// Re-exports
// =============================================================================

pub use client::ShopifyClient;
pub use config::ShopifyConfig;
pub use demo::generate_demo_analytics;
pub use error::{ShopifyError, ShopifyResult};
pub use report::fetch_analytics;
