use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("category name must not be empty")]
    EmptyCategory,
    #[error("category {0:?} is reserved for the unfiltered view")]
    ReservedCategory(String),
    #[error("duplicate category: {0}")]
    DuplicateCategory(String),
    #[error("duplicate product id: {0}")]
    DuplicateProductId(u32),
    #[error("product {id} references undeclared category {category:?}")]
    UnknownCategory { id: u32, category: String },
    #[error("invalid catalog json")]
    Json(#[from] serde_json::Error),
}
