//! Router-level tests for the catalog service.
//!
//! Requests go through the fully layered router with `tower::ServiceExt::oneshot`,
//! so middleware (request ids, CORS, static fallback) is exercised as in production.

use anyhow::{Context, Result};
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use bevpack::api::{app, ServerConfig};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

fn router(config: &ServerConfig) -> Result<Router> {
    let catalog = catalog::standard().context("shipped catalog")?;
    app(config, Arc::new(catalog))
}

async fn get_json(router: Router, uri: &str) -> Result<(StatusCode, Value)> {
    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty())?)
        .await?;
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await?;
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)?
    };
    Ok((status, value))
}

fn ids(body: &Value) -> Vec<u64> {
    body["products"]
        .as_array()
        .map(|products| products.iter().filter_map(|p| p["id"].as_u64()).collect())
        .unwrap_or_default()
}

#[tokio::test]
async fn lists_declared_categories_in_order() -> Result<()> {
    let (status, body) = get_json(
        router(&ServerConfig::default())?,
        "/v1/catalog/categories",
    )
    .await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["categories"],
        serde_json::json!([
            "1 Litre Collection",
            "500 ml Collection",
            "250 ml Collection",
            "Premium Glass Collection"
        ])
    );
    Ok(())
}

#[tokio::test]
async fn unfiltered_products_keep_table_order() -> Result<()> {
    let (status, body) =
        get_json(router(&ServerConfig::default())?, "/v1/catalog/products").await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["selected"], "All");
    assert_eq!(ids(&body), (1..=12).collect::<Vec<u64>>());
    Ok(())
}

#[tokio::test]
async fn filters_by_category() -> Result<()> {
    let (status, body) = get_json(
        router(&ServerConfig::default())?,
        "/v1/catalog/products?category=500%20ml%20Collection",
    )
    .await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["selected"], "500 ml Collection");
    assert_eq!(ids(&body), vec![6, 7, 8]);
    Ok(())
}

#[tokio::test]
async fn explicit_all_returns_everything() -> Result<()> {
    let (_, body) = get_json(
        router(&ServerConfig::default())?,
        "/v1/catalog/products?category=All",
    )
    .await?;
    assert_eq!(ids(&body).len(), 12);
    Ok(())
}

#[tokio::test]
async fn unknown_category_is_empty_ok() -> Result<()> {
    let (status, body) = get_json(
        router(&ServerConfig::default())?,
        "/v1/catalog/products?category=Kegs",
    )
    .await?;

    assert_eq!(status, StatusCode::OK);
    assert!(ids(&body).is_empty());
    Ok(())
}

#[tokio::test]
async fn product_by_id() -> Result<()> {
    let (status, body) =
        get_json(router(&ServerConfig::default())?, "/v1/catalog/products/7").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 7);
    assert_eq!(body["category"], "500 ml Collection");

    let (status, _) =
        get_json(router(&ServerConfig::default())?, "/v1/catalog/products/99").await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn health_reports_catalog_and_request_id() -> Result<()> {
    let response = router(&ServerConfig::default())?
        .oneshot(Request::builder().uri("/health").body(Body::empty())?)
        .await?;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("x-request-id"));
    let x_app = response
        .headers()
        .get("x-app")
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
        .unwrap_or_default();
    assert!(x_app.starts_with("bevpack:"), "{x_app}");
    assert!(!x_app.ends_with(':'), "{x_app}");

    let bytes = to_bytes(response.into_body(), usize::MAX).await?;
    let body: Value = serde_json::from_slice(&bytes)?;
    assert_eq!(body["name"], "bevpack");
    assert_eq!(body["products"], 12);
    assert_eq!(body["categories"], 4);
    Ok(())
}

#[tokio::test]
async fn health_options_has_empty_body() -> Result<()> {
    let response = router(&ServerConfig::default())?
        .oneshot(
            Request::builder()
                .method(Method::OPTIONS)
                .uri("/health")
                .body(Body::empty())?,
        )
        .await?;

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await?;
    assert!(bytes.is_empty());
    Ok(())
}

#[tokio::test]
async fn keeps_caller_request_id() -> Result<()> {
    let response = router(&ServerConfig::default())?
        .oneshot(
            Request::builder()
                .uri("/health")
                .header("x-request-id", "req-123")
                .body(Body::empty())?,
        )
        .await?;

    assert_eq!(
        response
            .headers()
            .get("x-request-id")
            .and_then(|value| value.to_str().ok()),
        Some("req-123")
    );
    Ok(())
}

#[tokio::test]
async fn serves_openapi_document() -> Result<()> {
    let (status, body) = get_json(router(&ServerConfig::default())?, "/openapi.json").await?;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/v1/catalog/products"].is_object());
    Ok(())
}

#[tokio::test]
async fn cors_only_for_configured_origin() -> Result<()> {
    let config = ServerConfig {
        frontend_base_url: Some("https://bevpack.dev".to_string()),
        ..ServerConfig::default()
    };

    let allowed = router(&config)?
        .oneshot(
            Request::builder()
                .uri("/v1/catalog/categories")
                .header(header::ORIGIN, "https://bevpack.dev")
                .body(Body::empty())?,
        )
        .await?;
    assert_eq!(
        allowed
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|value| value.to_str().ok()),
        Some("https://bevpack.dev")
    );

    let preflight = router(&config)?
        .oneshot(
            Request::builder()
                .method(Method::OPTIONS)
                .uri("/v1/catalog/products")
                .header(header::ORIGIN, "https://bevpack.dev")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
                .body(Body::empty())?,
        )
        .await?;
    assert_eq!(
        preflight
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|value| value.to_str().ok()),
        Some("https://bevpack.dev")
    );

    let other = router(&config)?
        .oneshot(
            Request::builder()
                .uri("/v1/catalog/categories")
                .header(header::ORIGIN, "https://elsewhere.example")
                .body(Body::empty())?,
        )
        .await?;
    assert!(other
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .is_none());
    Ok(())
}

#[tokio::test]
async fn web_root_serves_spa_fallback() -> Result<()> {
    let dir = tempfile::tempdir()?;
    std::fs::write(dir.path().join("index.html"), "<html>bevpack</html>")?;
    std::fs::write(dir.path().join("app.js"), "console.log('bevpack')")?;

    let config = ServerConfig {
        web_root: Some(dir.path().to_path_buf()),
        ..ServerConfig::default()
    };

    for uri in ["/", "/products", "/dashboard/printing"] {
        let response = router(&config)?
            .oneshot(Request::builder().uri(uri).body(Body::empty())?)
            .await?;
        assert_eq!(response.status(), StatusCode::OK, "uri {uri}");
        let bytes = to_bytes(response.into_body(), usize::MAX).await?;
        assert_eq!(&bytes[..], b"<html>bevpack</html>", "uri {uri}");
    }

    let response = router(&config)?
        .oneshot(Request::builder().uri("/app.js").body(Body::empty())?)
        .await?;
    let bytes = to_bytes(response.into_body(), usize::MAX).await?;
    assert_eq!(&bytes[..], b"console.log('bevpack')");

    // API routes win over the static fallback.
    let (status, _) = get_json(router(&config)?, "/v1/catalog/categories").await?;
    assert_eq!(status, StatusCode::OK);
    Ok(())
}
