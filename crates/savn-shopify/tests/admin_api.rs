//! Live analytics against a mock Admin API.

use savn_core::analytics::AnalyticsMode;
use savn_core::Money;
use savn_shopify::{fetch_analytics, ShopifyClient, ShopifyConfig, ShopifyError};
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const API_ROOT: &str = "/admin/api/2024-10";

fn config_for(server: &MockServer) -> ShopifyConfig {
    let mut config = ShopifyConfig::with_credentials("test-shop.myshopify.com", "shpat_test");
    config.api_base_url = Some(server.uri());
    config.request_timeout_secs = 5;
    config
}

async fn mount_count(server: &MockServer, resource: &str, count: u64) {
    Mock::given(method("GET"))
        .and(path(format!("{}/{}/count.json", API_ROOT, resource)))
        .and(header("X-Shopify-Access-Token", "shpat_test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "count": count })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_live_report_from_admin_api() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("{}/orders.json", API_ROOT)))
        .and(header("X-Shopify-Access-Token", "shpat_test"))
        .and(header("Content-Type", "application/json"))
        .and(query_param("status", "any"))
        .and(query_param("limit", "250"))
        .and(query_param(
            "fields",
            "id,created_at,current_total_price,customer,line_items",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "orders": [
                {
                    "id": 1,
                    "created_at": "2024-10-01T10:00:00Z",
                    "current_total_price": "100.00",
                    "customer": { "id": 7 },
                    "line_items": [
                        { "title": "Sequin Top", "price": "50.00", "quantity": 2 }
                    ]
                },
                {
                    "id": 2,
                    "created_at": "2024-10-01T15:00:00Z",
                    "current_total_price": "50.00",
                    "customer": { "id": 7 },
                    "line_items": [
                        { "title": "Glitter Skirt", "price": "25.00", "quantity": 2 }
                    ]
                },
                {
                    "id": 3,
                    "created_at": "2024-10-02T09:00:00Z",
                    "current_total_price": "30.00",
                    "customer": null,
                    "line_items": [
                        { "price": "30.00", "quantity": 1 }
                    ]
                }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    mount_count(&server, "customers", 12).await;
    mount_count(&server, "products", 34).await;

    let report = fetch_analytics(&config_for(&server)).await.unwrap();

    assert_eq!(report.mode, AnalyticsMode::Live);
    assert_eq!(report.date_range_days, 30);
    assert_eq!(report.kpis.total_orders, 3);
    assert_eq!(report.kpis.total_revenue, Money::from_cents(18_000));
    assert_eq!(report.kpis.average_order_value, Money::from_cents(6_000));
    assert_eq!(report.kpis.total_customers, 12);
    assert_eq!(report.kpis.total_products, 34);
    assert_eq!(report.kpis.returning_customer_rate, 100.0);

    assert_eq!(report.daily_sales.len(), 2);
    assert_eq!(report.daily_sales[0].revenue, Money::from_cents(15_000));

    let titles: Vec<&str> = report.top_products.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["Sequin Top", "Glitter Skirt", "Untitled Product"]);
}

#[tokio::test]
async fn test_created_at_min_is_sent() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("{}/orders.json", API_ROOT)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "orders": [] })))
        .mount(&server)
        .await;

    let client = ShopifyClient::new(&config_for(&server)).unwrap();
    let since = chrono::DateTime::parse_from_rfc3339("2024-09-01T00:00:00Z")
        .unwrap()
        .with_timezone(&chrono::Utc);

    let orders = client.fetch_orders(since).await.unwrap();
    assert!(orders.is_empty());

    let requests = server.received_requests().await.unwrap();
    let query = requests[0].url.query().unwrap_or_default().to_string();
    assert!(
        query.contains("created_at_min=2024-09-01T00%3A00%3A00.000Z"),
        "query was {}",
        query
    );
}

#[tokio::test]
async fn test_non_success_status_becomes_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("{}/orders.json", API_ROOT)))
        .respond_with(
            ResponseTemplate::new(401).set_body_string("[API] Invalid API key or access token"),
        )
        .mount(&server)
        .await;
    mount_count(&server, "customers", 1).await;
    mount_count(&server, "products", 1).await;

    let err = fetch_analytics(&config_for(&server)).await.unwrap_err();
    match err {
        ShopifyError::Api { status, body } => {
            assert_eq!(status, 401);
            assert_eq!(body, "[API] Invalid API key or access token");
        }
        other => panic!("expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_empty_error_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("{}/products/count.json", API_ROOT)))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = ShopifyClient::new(&config_for(&server)).unwrap();
    let err = client.count_products().await.unwrap_err();

    assert!(err.is_retryable());
    assert!(matches!(
        err,
        ShopifyError::Api { status: 503, ref body } if body == "Unknown response"
    ));
}

#[tokio::test]
async fn test_missing_count_reads_as_zero() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("{}/customers/count.json", API_ROOT)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let client = ShopifyClient::new(&config_for(&server)).unwrap();
    assert_eq!(client.count_customers().await.unwrap(), 0);
}

#[tokio::test]
async fn test_malformed_json_is_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("{}/customers/count.json", API_ROOT)))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let client = ShopifyClient::new(&config_for(&server)).unwrap();
    let err = client.count_customers().await.unwrap_err();

    assert!(matches!(err, ShopifyError::Decode(_)));
}

#[tokio::test]
async fn test_missing_credentials_uses_demo_without_network() {
    let server = MockServer::start().await;

    let mut config = ShopifyConfig::default();
    config.api_base_url = Some(server.uri());
    config.demo_seed = Some(3);

    let report = fetch_analytics(&config).await.unwrap();

    assert!(report.is_demo());
    assert_eq!(report.kpis.total_orders, 410);
    assert!(server.received_requests().await.unwrap().is_empty());
}
