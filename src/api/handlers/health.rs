use crate::GIT_COMMIT_HASH;
use axum::{
    body::Body,
    extract::Extension,
    http::{HeaderMap, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Json},
};
use catalog::Catalog;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, error};
use utoipa::ToSchema;

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct Health {
    pub commit: String,
    pub name: String,
    pub version: String,
    pub products: usize,
    pub categories: usize,
}

#[utoipa::path(
    get,
    path= "/health",
    responses (
        (status = 200, description = "Service is up and the catalog is loaded", body = Health),
    ),
    tag= "health"
)]
// axum handler for health
pub async fn health(method: Method, catalog: Extension<Arc<Catalog>>) -> impl IntoResponse {
    let health = Health {
        commit: GIT_COMMIT_HASH.to_string(),
        name: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        products: catalog.len(),
        categories: catalog.categories().len(),
    };

    let body = if method == Method::GET {
        Json(&health).into_response()
    } else {
        Body::empty().into_response()
    };

    let mut headers = HeaderMap::new();
    match HeaderValue::from_str(&x_app(&health)) {
        Ok(value) => {
            debug!("X-App header: {:?}", value);
            headers.insert("X-App", value);
        }
        Err(err) => error!("Failed to build X-App header: {}", err),
    }

    (StatusCode::OK, headers, body)
}

/// `name:version:commit`, with the commit cut to seven characters.
fn x_app(health: &Health) -> String {
    let short_hash = health.commit.get(..7).unwrap_or(&health.commit);
    format!("{}:{}:{}", health.name, health.version, short_hash)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(commit: &str) -> Health {
        Health {
            commit: commit.to_string(),
            name: "bevpack".to_string(),
            version: "0.1.0".to_string(),
            products: 12,
            categories: 4,
        }
    }

    #[test]
    fn x_app_shortens_full_hash() {
        assert_eq!(
            x_app(&sample("3f9c2a1d8e7b6a5f4c3d2e1f0a9b8c7d6e5f4a3b")),
            "bevpack:0.1.0:3f9c2a1"
        );
    }

    #[test]
    fn x_app_keeps_short_commit() {
        assert_eq!(x_app(&sample("unknown")), "bevpack:0.1.0:unknown");
        assert_eq!(x_app(&sample("abc")), "bevpack:0.1.0:abc");
    }
}
