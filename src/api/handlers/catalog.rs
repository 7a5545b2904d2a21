//! Read-only catalog endpoints. Filtering goes through `CatalogView`, so the
//! API answers with the same subsequence the catalog page renders.

use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use catalog::{Catalog, CatalogView, Product};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;
use utoipa::{IntoParams, ToSchema};

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct CategoriesResponse {
    /// Declared categories in display order, without the `All` sentinel.
    pub categories: Vec<String>,
}

#[derive(Deserialize, IntoParams, Debug)]
#[into_params(parameter_in = Query)]
pub struct ProductsQuery {
    /// Category to filter by; absent or `All` returns every product.
    pub category: Option<String>,
}

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct ProductsResponse {
    pub selected: String,
    pub products: Vec<Product>,
}

#[utoipa::path(
    get,
    path = "/v1/catalog/categories",
    responses(
        (status = 200, description = "Declared product categories", body = CategoriesResponse)
    ),
    tag = "catalog"
)]
pub async fn categories(Extension(catalog): Extension<Arc<Catalog>>) -> Json<CategoriesResponse> {
    Json(CategoriesResponse {
        categories: catalog.categories().to_vec(),
    })
}

#[utoipa::path(
    get,
    path = "/v1/catalog/products",
    params(ProductsQuery),
    responses(
        (status = 200, description = "Products in the selected category, in catalog order; empty for unknown categories", body = ProductsResponse)
    ),
    tag = "catalog"
)]
pub async fn products(
    Extension(catalog): Extension<Arc<Catalog>>,
    Query(query): Query<ProductsQuery>,
) -> Json<ProductsResponse> {
    let mut view = CatalogView::new(catalog);
    view.select_category(query.category.as_deref());

    let products: Vec<Product> = view.visible_products().into_iter().cloned().collect();
    debug!(
        selected = %view.selected(),
        count = products.len(),
        "catalog filtered"
    );

    Json(ProductsResponse {
        selected: view.selected().to_string(),
        products,
    })
}

#[utoipa::path(
    get,
    path = "/v1/catalog/products/{id}",
    params(
        ("id" = u32, Path, description = "Product id")
    ),
    responses(
        (status = 200, description = "Product", body = Product),
        (status = 404, description = "No product with that id")
    ),
    tag = "catalog"
)]
pub async fn product(
    Extension(catalog): Extension<Arc<Catalog>>,
    Path(id): Path<u32>,
) -> impl IntoResponse {
    match catalog.get(id) {
        Some(product) => (StatusCode::OK, Json(product.clone())).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
