//! Product catalog for the bevpack site.
//!
//! The catalog is a fixed, ordered product table plus the ordered set of
//! categories it may reference. [`CatalogView`] layers a single category
//! selection on top and derives the visible subsequence on demand.
//!
//! ```
//! use catalog::{standard, CatalogView};
//! use std::sync::Arc;
//!
//! let mut view = CatalogView::new(Arc::new(standard().expect("shipped table")));
//! view.select_category("500 ml Collection");
//! let ids: Vec<u32> = view.visible_products().iter().map(|p| p.id).collect();
//! assert_eq!(ids, [6, 7, 8]);
//! ```

mod error;
mod product;
mod standard;
mod table;
mod view;

pub use error::CatalogError;
pub use product::{Product, Selection, ALL};
pub use standard::{standard, CATEGORIES, HALF_LITRE, ONE_LITRE, PREMIUM_GLASS, QUARTER_LITRE};
pub use table::Catalog;
pub use view::CatalogView;
