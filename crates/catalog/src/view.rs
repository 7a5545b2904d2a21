//! Category filter view model.
//!
//! The view holds a shared, read-only [`Catalog`] and one mutable selection.
//! Every read derives its result from scratch; the table is small and changes
//! are user-paced, so nothing is cached.

use crate::{
    product::{Product, Selection, ALL},
    table::Catalog,
};
use std::sync::Arc;
use tracing::debug;

#[derive(Clone, Debug)]
pub struct CatalogView {
    catalog: Arc<Catalog>,
    selected: Selection,
}

impl CatalogView {
    /// Creates a view showing every product.
    #[must_use]
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            selected: Selection::All,
        }
    }

    /// Replaces the current selection. Unknown categories are accepted and
    /// simply produce an empty result.
    pub fn select_category(&mut self, category: impl Into<Selection>) {
        let selected = category.into();
        debug!(previous = %self.selected, next = %selected, "catalog selection changed");
        self.selected = selected;
    }

    #[must_use]
    pub fn selected(&self) -> &Selection {
        &self.selected
    }

    /// Products matching the current selection, in table order.
    #[must_use]
    pub fn visible_products(&self) -> Vec<&Product> {
        self.catalog
            .products()
            .iter()
            .filter(|product| self.selected.matches(product))
            .collect()
    }

    /// Declared categories, without the `All` sentinel.
    #[must_use]
    pub fn available_categories(&self) -> &[String] {
        self.catalog.categories()
    }

    /// True when the current selection matches nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self
            .catalog
            .products()
            .iter()
            .any(|product| self.selected.matches(product))
    }

    /// Options for selection controls: the sentinel followed by each category.
    #[must_use]
    pub fn category_options(&self) -> Vec<&str> {
        std::iter::once(ALL)
            .chain(self.catalog.categories().iter().map(String::as_str))
            .collect()
    }

    /// Number of products per declared category, in declared order.
    #[must_use]
    pub fn counts(&self) -> Vec<(&str, usize)> {
        self.catalog
            .categories()
            .iter()
            .map(|category| {
                let count = self
                    .catalog
                    .products()
                    .iter()
                    .filter(|product| product.category == *category)
                    .count();
                (category.as_str(), count)
            })
            .collect()
    }

    #[must_use]
    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }
}
