//! The static product table and its declared category set.
//!
//! A `Catalog` is only ever built through [`Catalog::new`] (or the JSON loader
//! that delegates to it), so every instance satisfies referential integrity:
//! each product category is declared, ids are unique, category names are
//! unique and none of them collides with the `All` sentinel.

use crate::{
    error::CatalogError,
    product::{Product, ALL},
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Catalog {
    categories: Vec<String>,
    products: Vec<Product>,
}

/// On-disk shape of a catalog file.
#[derive(Deserialize)]
struct RawCatalog {
    categories: Vec<String>,
    products: Vec<Product>,
}

impl Catalog {
    /// Builds a catalog from a declared category order and an ordered product list.
    ///
    /// # Errors
    /// Returns an error if a category is empty, reserved or duplicated, a product id
    /// repeats, or a product references a category that was not declared.
    pub fn new(categories: Vec<String>, products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut declared = HashSet::with_capacity(categories.len());
        for category in &categories {
            if category.trim().is_empty() {
                return Err(CatalogError::EmptyCategory);
            }
            if category == ALL {
                return Err(CatalogError::ReservedCategory(category.clone()));
            }
            if !declared.insert(category.as_str()) {
                return Err(CatalogError::DuplicateCategory(category.clone()));
            }
        }

        let mut ids = HashSet::with_capacity(products.len());
        for product in &products {
            if !ids.insert(product.id) {
                return Err(CatalogError::DuplicateProductId(product.id));
            }
            if !declared.contains(product.category.as_str()) {
                return Err(CatalogError::UnknownCategory {
                    id: product.id,
                    category: product.category.clone(),
                });
            }
        }

        debug!(
            categories = categories.len(),
            products = products.len(),
            "catalog loaded"
        );

        Ok(Self {
            categories,
            products,
        })
    }

    /// Parses `{ "categories": [...], "products": [...] }` and validates it.
    ///
    /// # Errors
    /// Returns an error if the JSON is malformed or the table is inconsistent.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let raw: RawCatalog = serde_json::from_str(json)?;
        Self::new(raw.categories, raw.products)
    }

    /// Categories in declared order, without the `All` sentinel.
    #[must_use]
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Products in their original order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub fn get(&self, id: u32) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
