//! Multi-criteria product search.
//!
//! A [`ProductCriteria`] holds the constraints the caller cares about. Each
//! constraint that is present contributes one check per product, and a
//! [`Combinator`] folds those checks into the final decision.

use crate::error::{CatalogError, Result};
use crate::model::Product;
use serde::{Deserialize, Serialize};
use techstore_search::{approximate_match, filter_all, normalize, Combinator};

/// Field constraints for product search. `None` means "not constrained".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductCriteria {
    pub name: Option<String>,
    pub brand: Option<String>,
    pub category: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub available: Option<bool>,
    pub min_stock: Option<u32>,
}

/// Per-field edit tolerance enabling approximate matching on text fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tolerances {
    pub name: Option<usize>,
    pub brand: Option<usize>,
}

impl Tolerances {
    /// Same tolerance for name and brand.
    pub fn uniform(tolerance: usize) -> Self {
        Self {
            name: Some(tolerance),
            brand: Some(tolerance),
        }
    }

    /// Exact matching everywhere.
    pub fn exact() -> Self {
        Self::default()
    }
}

impl ProductCriteria {
    /// No constraints; matches every product.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn min_price(mut self, min: f64) -> Self {
        self.min_price = Some(min);
        self
    }

    pub fn max_price(mut self, max: f64) -> Self {
        self.max_price = Some(max);
        self
    }

    pub fn available(mut self, available: bool) -> Self {
        self.available = Some(available);
        self
    }

    pub fn min_stock(mut self, min: u32) -> Self {
        self.min_stock = Some(min);
        self
    }

    /// Build criteria from loosely typed key/value pairs.
    ///
    /// Recognized keys are `name`, `brand`, `category`, `min_price`,
    /// `max_price`, `available` and `min_stock`. Unknown keys are skipped.
    /// Values that do not parse for their key are an error.
    pub fn from_pairs<'a, I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut criteria = Self::new();
        for (key, value) in pairs {
            let key = normalize(key);
            match key.as_str() {
                "name" => criteria.name = Some(value.to_string()),
                "brand" => criteria.brand = Some(value.to_string()),
                "category" => criteria.category = Some(value.to_string()),
                "min_price" => criteria.min_price = Some(parse_value(&key, value)?),
                "max_price" => criteria.max_price = Some(parse_value(&key, value)?),
                "min_stock" => criteria.min_stock = Some(parse_value(&key, value)?),
                "available" => criteria.available = Some(parse_flag(&key, value)?),
                _ => tracing::debug!(key = %key, "Ignoring unrecognized criterion"),
            }
        }
        Ok(criteria)
    }

    /// True when no field is constrained.
    pub fn is_empty(&self) -> bool {
        self.checked_fields() == 0
    }

    /// Number of constrained fields.
    pub fn checked_fields(&self) -> usize {
        [
            self.name.is_some(),
            self.brand.is_some(),
            self.category.is_some(),
            self.min_price.is_some(),
            self.max_price.is_some(),
            self.available.is_some(),
            self.min_stock.is_some(),
        ]
        .into_iter()
        .filter(|present| *present)
        .count()
    }

    /// Evaluate one check per constrained field and combine them.
    pub fn matches(&self, product: &Product, combinator: Combinator, tolerances: Tolerances) -> bool {
        let mut checks = Vec::with_capacity(self.checked_fields());

        if let Some(name) = &self.name {
            checks.push(text_check(name, &product.name, tolerances.name));
        }
        if let Some(brand) = &self.brand {
            checks.push(text_check(brand, &product.brand, tolerances.brand));
        }
        if let Some(category) = &self.category {
            checks.push(normalize(&product.category) == normalize(category));
        }
        if let Some(min) = self.min_price {
            checks.push(product.price >= min);
        }
        if let Some(max) = self.max_price {
            checks.push(product.price <= max);
        }
        if let Some(available) = self.available {
            checks.push(product.available == available);
        }
        if let Some(min) = self.min_stock {
            checks.push(product.stock >= min);
        }

        combinator.combine(checks)
    }
}

fn text_check(wanted: &str, actual: &str, tolerance: Option<usize>) -> bool {
    match tolerance {
        Some(tolerance) => approximate_match(wanted, actual, tolerance),
        None => normalize(actual) == normalize(wanted),
    }
}

fn parse_value<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value.trim().parse().map_err(|_| CatalogError::InvalidCriterion {
        key: key.to_string(),
        value: value.to_string(),
    })
}

fn parse_flag(key: &str, value: &str) -> Result<bool> {
    match normalize(value).as_str() {
        "true" | "yes" | "y" | "s" | "si" | "sí" | "1" => Ok(true),
        "false" | "no" | "n" | "0" => Ok(false),
        _ => Err(CatalogError::InvalidCriterion {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}

/// Products satisfying `criteria` under `combinator`, in source order.
pub fn search_products<'a>(
    products: &'a [Product],
    criteria: &ProductCriteria,
    combinator: Combinator,
    tolerances: Tolerances,
) -> Vec<&'a Product> {
    filter_all(products, |p| criteria.matches(p, combinator, tolerances))
}
