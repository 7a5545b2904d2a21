//! The product table shipped with the site.

use crate::{error::CatalogError, product::Product, table::Catalog};

pub const ONE_LITRE: &str = "1 Litre Collection";
pub const HALF_LITRE: &str = "500 ml Collection";
pub const QUARTER_LITRE: &str = "250 ml Collection";
pub const PREMIUM_GLASS: &str = "Premium Glass Collection";

/// Declared category order for the shipped table.
pub const CATEGORIES: [&str; 4] = [ONE_LITRE, HALF_LITRE, QUARTER_LITRE, PREMIUM_GLASS];

/// (id, name, category, image, details)
const PRODUCTS: [(u32, &str, &str, &str, &str); 12] = [
    (
        1,
        "Classic Round 1L",
        ONE_LITRE,
        "/images/products/classic-round-1l.webp",
        "From INR 9.50 per bottle | MOQ 200 cases of 12",
    ),
    (
        2,
        "Square Grip 1L",
        ONE_LITRE,
        "/images/products/square-grip-1l.webp",
        "From INR 10.20 per bottle | MOQ 200 cases of 12",
    ),
    (
        3,
        "Alkaline Blue 1L",
        ONE_LITRE,
        "/images/products/alkaline-blue-1l.webp",
        "From INR 12.00 per bottle | MOQ 150 cases of 12",
    ),
    (
        4,
        "Sport Cap 1L",
        ONE_LITRE,
        "/images/products/sport-cap-1l.webp",
        "From INR 11.40 per bottle | MOQ 150 cases of 12",
    ),
    (
        5,
        "Eco Light 1L",
        ONE_LITRE,
        "/images/products/eco-light-1l.webp",
        "From INR 8.90 per bottle | MOQ 300 cases of 12",
    ),
    (
        6,
        "Classic Round 500ml",
        HALF_LITRE,
        "/images/products/classic-round-500ml.webp",
        "From INR 6.10 per bottle | MOQ 250 cases of 24",
    ),
    (
        7,
        "Slim Grip 500ml",
        HALF_LITRE,
        "/images/products/slim-grip-500ml.webp",
        "From INR 6.60 per bottle | MOQ 250 cases of 24",
    ),
    (
        8,
        "Sport Cap 500ml",
        HALF_LITRE,
        "/images/products/sport-cap-500ml.webp",
        "From INR 7.20 per bottle | MOQ 200 cases of 24",
    ),
    (
        9,
        "Mini Round 250ml",
        QUARTER_LITRE,
        "/images/products/mini-round-250ml.webp",
        "From INR 4.30 per bottle | MOQ 400 cases of 48",
    ),
    (
        10,
        "Event Pack 250ml",
        QUARTER_LITRE,
        "/images/products/event-pack-250ml.webp",
        "From INR 4.80 per bottle | MOQ 300 cases of 48",
    ),
    (
        11,
        "Flint Glass 750ml",
        PREMIUM_GLASS,
        "/images/products/flint-glass-750ml.webp",
        "From INR 38.00 per bottle | MOQ 50 cases of 12",
    ),
    (
        12,
        "Amber Glass 330ml",
        PREMIUM_GLASS,
        "/images/products/amber-glass-330ml.webp",
        "From INR 24.50 per bottle | MOQ 80 cases of 24",
    ),
];

/// Builds the shipped catalog.
///
/// # Errors
/// Only fails if the compiled-in table is inconsistent, which the tests rule out.
pub fn standard() -> Result<Catalog, CatalogError> {
    let categories = CATEGORIES.iter().map(ToString::to_string).collect();
    let products = PRODUCTS
        .iter()
        .map(|&(id, name, category, image, details)| {
            Product::new(id, name, category, image, details)
        })
        .collect();

    Catalog::new(categories, products)
}
