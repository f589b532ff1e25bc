//! # Shopify Admin API Client
//!
//! Thin reqwest wrapper over the three REST endpoints the dashboard needs.
//!
//! ## Requests
//! ```text
//! GET {root}orders.json?status=any&limit=N&created_at_min=...&fields=...
//! GET {root}customers/count.json
//! GET {root}products/count.json
//!
//! Headers:
//!   X-Shopify-Access-Token: <token>
//!   Content-Type: application/json
//! ```

use chrono::{DateTime, SecondsFormat, Utc};
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::Client;
use savn_core::analytics::Order;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

use crate::config::ShopifyConfig;
use crate::error::{ShopifyError, ShopifyResult};

/// Header carrying the Admin API token.
pub const ACCESS_TOKEN_HEADER: &str = "X-Shopify-Access-Token";

/// Field projection requested from orders.json.
pub const ORDER_FIELDS: &str = "id,created_at,current_total_price,customer,line_items";

#[derive(Debug, Deserialize)]
struct OrdersEnvelope {
    #[serde(default)]
    orders: Vec<Order>,
}

/// A missing `count` reads as zero.
#[derive(Debug, Deserialize)]
struct CountEnvelope {
    #[serde(default)]
    count: u64,
}

/// Authenticated Admin API client for one shop.
#[derive(Debug, Clone)]
pub struct ShopifyClient {
    http: Client,
    root: Url,
    order_limit: u32,
    timeout_secs: u64,
}

impl ShopifyClient {
    /// Builds a client from config. Fails with `MissingCredentials` when the
    /// shop domain or token is absent.
    pub fn new(config: &ShopifyConfig) -> ShopifyResult<Self> {
        if !config.has_credentials() {
            return Err(ShopifyError::MissingCredentials);
        }

        let token = config
            .access_token
            .as_deref()
            .map(str::trim)
            .ok_or(ShopifyError::MissingCredentials)?;

        let mut headers = HeaderMap::new();
        let mut token_value = HeaderValue::from_str(token)
            .map_err(|e| ShopifyError::InvalidConfig(format!("access token: {}", e)))?;
        token_value.set_sensitive(true);
        headers.insert(ACCESS_TOKEN_HEADER, token_value);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .default_headers(headers)
            .build()
            .map_err(|e| ShopifyError::Network(e.to_string()))?;

        Ok(ShopifyClient {
            http,
            root: config.api_root()?,
            order_limit: config.order_limit,
            timeout_secs: config.request_timeout_secs,
        })
    }

    /// Resolves a path relative to the versioned API root.
    pub fn endpoint(&self, path: &str) -> ShopifyResult<Url> {
        Ok(self.root.join(path)?)
    }

    /// GETs `path` and decodes the JSON body.
    ///
    /// Non-2xx responses become [`ShopifyError::Api`] carrying the body text.
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> ShopifyResult<T> {
        let url = self.endpoint(path)?;
        debug!(url = %url, "Shopify request");

        let response = self
            .http
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| self.map_send_error(e))?;

        if !status.is_success() {
            warn!(status = status.as_u16(), path, "Shopify request failed");
            let body = if body.trim().is_empty() {
                "Unknown response".to_string()
            } else {
                body
            };
            return Err(ShopifyError::Api {
                status: status.as_u16(),
                body,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }

    fn map_send_error(&self, err: reqwest::Error) -> ShopifyError {
        if err.is_timeout() {
            ShopifyError::Timeout(self.timeout_secs)
        } else {
            ShopifyError::from(err)
        }
    }

    /// Fetches orders of any status created at or after `since`.
    pub async fn fetch_orders(&self, since: DateTime<Utc>) -> ShopifyResult<Vec<Order>> {
        let query = [
            ("status", "any".to_string()),
            ("limit", self.order_limit.to_string()),
            (
                "created_at_min",
                since.to_rfc3339_opts(SecondsFormat::Millis, true),
            ),
            ("fields", ORDER_FIELDS.to_string()),
        ];

        let envelope: OrdersEnvelope = self.get_json("orders.json", &query).await?;
        debug!(count = envelope.orders.len(), "Fetched orders");
        Ok(envelope.orders)
    }

    /// Total customer count for the shop.
    pub async fn count_customers(&self) -> ShopifyResult<u64> {
        let envelope: CountEnvelope = self.get_json("customers/count.json", &[]).await?;
        Ok(envelope.count)
    }

    /// Total product count for the shop.
    pub async fn count_products(&self) -> ShopifyResult<u64> {
        let envelope: CountEnvelope = self.get_json("products/count.json", &[]).await?;
        Ok(envelope.count)
    }
}
