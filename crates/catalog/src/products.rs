//! Product lookups and filters.
//!
//! Text comparisons are trimmed and case-insensitive. Results keep the order
//! of the source slice.

use crate::model::Product;
use techstore_search::{count_matching, filter_all, find_first, normalize};

/// Products whose name equals `name`, or contains it when `partial` is set.
pub fn by_name<'a>(products: &'a [Product], name: &str, partial: bool) -> Vec<&'a Product> {
    let target = normalize(name);
    filter_all(products, |p| {
        let candidate = normalize(&p.name);
        candidate == target || (partial && candidate.contains(&target))
    })
}

/// First product with the given id.
pub fn by_id(products: &[Product], id: u32) -> Option<&Product> {
    find_first(products, |p| p.id == id)
}

/// Products in a category.
pub fn by_category<'a>(products: &'a [Product], category: &str) -> Vec<&'a Product> {
    let target = normalize(category);
    filter_all(products, |p| normalize(&p.category) == target)
}

/// Products that are flagged available and have stock left.
pub fn available(products: &[Product]) -> Vec<&Product> {
    filter_all(products, Product::is_in_stock)
}

/// Products priced within `[min, max]`, both bounds inclusive.
///
/// Pass `f64::INFINITY` as `max` for an open upper bound.
pub fn in_price_range(products: &[Product], min: f64, max: f64) -> Vec<&Product> {
    filter_all(products, |p| min <= p.price && p.price <= max)
}

/// Products of a brand.
pub fn by_brand<'a>(products: &'a [Product], brand: &str) -> Vec<&'a Product> {
    let target = normalize(brand);
    filter_all(products, |p| normalize(&p.brand) == target)
}

/// Number of products in a category.
pub fn count_by_category(products: &[Product], category: &str) -> usize {
    let target = normalize(category);
    count_matching(products, |p| normalize(&p.category) == target)
}
