use serde::{Deserialize, Serialize};
use std::fmt;

/// Reserved selector value meaning "no filter applied".
pub const ALL: &str = "All";

/// One entry of the product table. Records are created once when the table is
/// loaded and never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub category: String,
    /// Opaque asset reference, resolved by whatever renders the product.
    pub image: String,
    /// Free-form pricing and minimum order text.
    pub details: String,
}

impl Product {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        category: impl Into<String>,
        image: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            category: category.into(),
            image: image.into(),
            details: details.into(),
        }
    }
}

/// Current category selection of a catalog view.
///
/// Any string is accepted: a category that is not declared is still a valid
/// selection, it simply matches nothing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Selection {
    #[default]
    All,
    Category(String),
}

impl Selection {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Selection::All => ALL,
            Selection::Category(name) => name,
        }
    }

    /// Returns true when `product` belongs to this selection.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Selection::All => true,
            Selection::Category(name) => product.category == *name,
        }
    }
}

impl From<&str> for Selection {
    fn from(value: &str) -> Self {
        if value == ALL {
            Selection::All
        } else {
            Selection::Category(value.to_string())
        }
    }
}

impl From<String> for Selection {
    fn from(value: String) -> Self {
        if value == ALL {
            Selection::All
        } else {
            Selection::Category(value)
        }
    }
}

impl From<Option<&str>> for Selection {
    fn from(value: Option<&str>) -> Self {
        value.map_or(Selection::All, Selection::from)
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_maps_to_all() {
        assert_eq!(Selection::from("All"), Selection::All);
        assert_eq!(Selection::from("All".to_string()), Selection::All);
        assert_eq!(Selection::from(None), Selection::All);
    }

    #[test]
    fn sentinel_is_case_sensitive() {
        assert_eq!(
            Selection::from("all"),
            Selection::Category("all".to_string())
        );
    }

    #[test]
    fn selection_matches_by_exact_category() {
        let product = Product::new(1, "Aqua", "500 ml Collection", "/a.png", "MOQ 10");
        assert!(Selection::All.matches(&product));
        assert!(Selection::from("500 ml Collection").matches(&product));
        assert!(!Selection::from("500 ml collection").matches(&product));
    }

    #[test]
    fn display_uses_sentinel_text() {
        assert_eq!(Selection::All.to_string(), "All");
        assert_eq!(Selection::from("x").to_string(), "x");
    }
}
