//! # bevpack (catalog service)
//!
//! `bevpack` serves the beverage packaging product catalog over HTTP and, when
//! configured with a web root, hosts the built frontend as a single page app.
//!
//! ## Catalog
//!
//! The product table is loaded once at start-up, either the table compiled into
//! the `catalog` crate or a JSON file passed with `--catalog-file`. The file is
//! validated before the listener binds: every product must reference a declared
//! category and ids must be unique. After loading, the table is shared read-only.
//!
//! Filtering runs the same `CatalogView` the frontend uses, so
//! `GET /v1/catalog/products?category=...` answers exactly what the catalog page
//! shows for that selection, including an empty list for unknown categories.
//!
//! ## Access control
//!
//! The service has no sessions and no protected routes. Dashboard gating lives in
//! the frontend and is a UX concern only.

pub mod api;
pub mod cli;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};
