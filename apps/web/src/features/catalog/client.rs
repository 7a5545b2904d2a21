use crate::app_lib::{get_json, AppError};
use catalog::{Catalog, Product};
use leptos::logging;
use serde::Deserialize;

#[derive(Deserialize)]
struct CategoriesResponse {
    categories: Vec<String>,
}

#[derive(Deserialize)]
struct ProductsResponse {
    products: Vec<Product>,
}

async fn fetch() -> Result<Catalog, AppError> {
    let categories: CategoriesResponse = get_json("/v1/catalog/categories").await?;
    let products: ProductsResponse = get_json("/v1/catalog/products").await?;
    Ok(Catalog::new(categories.categories, products.products)?)
}

/// Loads the catalog, falling back to the built-in table.
pub async fn load() -> Result<Catalog, AppError> {
    match fetch().await {
        Ok(catalog) => Ok(catalog),
        Err(err) => {
            logging::warn!("catalog API unavailable, using built-in table: {err}");
            Ok(catalog::standard()?)
        }
    }
}
