//! Free-text projection of the visible catalog subset.

use super::Product;

/// Project the subsequence of `products` matching `query`.
///
/// The query is trimmed and lower-cased; an empty query returns the list
/// unchanged and in order. A non-empty query keeps exactly the products
/// whose name or short description contains it case-insensitively,
/// preserving relative order. Pure: never mutates or reorders its input.
pub fn project(products: &[Product], query: &str) -> Vec<Product> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return products.to_vec();
    }

    products
        .iter()
        .filter(|p| {
            p.name.to_lowercase().contains(&needle)
                || p.short_description.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}
