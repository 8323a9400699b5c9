//! Command dispatch over a [`Catalog`].
//!
//! Front ends translate user input into a [`Query`] and render the returned
//! [`Outcome`]; all search logic stays on this side of the boundary.

use crate::criteria::{search_products, ProductCriteria, Tolerances};
use crate::data::Catalog;
use crate::model::{Employee, Product};
use crate::{employees, products};
use serde::Serialize;
use techstore_search::{linear_search_counted, Combinator, LinearOutcome};

/// Every lookup the catalog supports.
#[derive(Debug, Clone, PartialEq)]
pub enum Query {
    /// Position of a number in the demo list, with comparison count
    LinearSearch { target: i64 },
    /// Products whose name equals (or contains) `name`, ignoring case
    ProductsByName { name: String, partial: bool },
    /// The product with this id
    ProductById { id: u32 },
    /// Products in a category, ignoring case
    ProductsByCategory { category: String },
    /// Employees by first and last name, exact or by substring
    EmployeesByFullName { first: String, last: String, partial: bool },
    /// Employees in a department, ignoring case
    EmployeesByDepartment { department: String },
    /// Active or inactive employees
    EmployeesByStatus { active: bool },
    /// Products flagged available with stock left
    AvailableProducts,
    /// Inclusive bounds; `max` may be infinite
    ProductsInPriceRange { min: f64, max: f64 },
    /// Products of a brand, ignoring case
    ProductsByBrand { brand: String },
    /// Number of products in a category
    CountByCategory { category: String },
    /// Criteria filter combined with AND/OR
    Advanced {
        criteria: ProductCriteria,
        combinator: Combinator,
        tolerances: Tolerances,
    },
}

impl Query {
    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Query::LinearSearch { .. } => "linear_search",
            Query::ProductsByName { .. } => "products_by_name",
            Query::ProductById { .. } => "product_by_id",
            Query::ProductsByCategory { .. } => "products_by_category",
            Query::EmployeesByFullName { .. } => "employees_by_full_name",
            Query::EmployeesByDepartment { .. } => "employees_by_department",
            Query::EmployeesByStatus { .. } => "employees_by_status",
            Query::AvailableProducts => "available_products",
            Query::ProductsInPriceRange { .. } => "products_in_price_range",
            Query::ProductsByBrand { .. } => "products_by_brand",
            Query::CountByCategory { .. } => "count_by_category",
            Query::Advanced { .. } => "advanced_search",
        }
    }
}

/// Result of executing a [`Query`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "result", rename_all = "snake_case")]
pub enum Outcome<'a> {
    /// Linear search result
    Position(LinearOutcome),
    /// Matching products in catalog order
    Products(Vec<&'a Product>),
    /// Single product lookup
    Product(Option<&'a Product>),
    /// Matching employees in catalog order
    Employees(Vec<&'a Employee>),
    /// Per-category product count
    Count { category: String, count: usize },
}

impl Outcome<'_> {
    /// Number of records (or matches) the outcome carries.
    pub fn len(&self) -> usize {
        match self {
            Outcome::Position(outcome) => usize::from(outcome.is_found()),
            Outcome::Products(found) => found.len(),
            Outcome::Product(found) => usize::from(found.is_some()),
            Outcome::Employees(found) => found.len(),
            Outcome::Count { count, .. } => *count,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Catalog {
    /// Run a query against this catalog.
    pub fn execute(&self, query: &Query) -> Outcome<'_> {
        let outcome = match query {
            Query::LinearSearch { target } => Outcome::Position(linear_search_counted(&self.numbers, target)),
            Query::ProductsByName { name, partial } => {
                Outcome::Products(products::by_name(&self.products, name, *partial))
            }
            Query::ProductById { id } => Outcome::Product(products::by_id(&self.products, *id)),
            Query::ProductsByCategory { category } => {
                Outcome::Products(products::by_category(&self.products, category))
            }
            Query::EmployeesByFullName { first, last, partial } => {
                Outcome::Employees(employees::by_full_name(&self.employees, first, last, *partial))
            }
            Query::EmployeesByDepartment { department } => {
                Outcome::Employees(employees::by_department(&self.employees, department))
            }
            Query::EmployeesByStatus { active } => Outcome::Employees(employees::by_status(&self.employees, *active)),
            Query::AvailableProducts => Outcome::Products(products::available(&self.products)),
            Query::ProductsInPriceRange { min, max } => {
                Outcome::Products(products::in_price_range(&self.products, *min, *max))
            }
            Query::ProductsByBrand { brand } => Outcome::Products(products::by_brand(&self.products, brand)),
            Query::CountByCategory { category } => Outcome::Count {
                category: category.clone(),
                count: products::count_by_category(&self.products, category),
            },
            Query::Advanced { criteria, combinator, tolerances } => {
                Outcome::Products(search_products(&self.products, criteria, *combinator, *tolerances))
            }
        };

        tracing::debug!(query = query.name(), results = outcome.len(), "Query executed");
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_search_outcome() {
        let catalog = Catalog::sample();
        let outcome = catalog.execute(&Query::LinearSearch { target: 25 });
        assert_eq!(
            outcome,
            Outcome::Position(LinearOutcome { index: Some(2), comparisons: 3 })
        );
        assert_eq!(outcome.len(), 1);
    }

    #[test]
    fn test_linear_search_miss() {
        let catalog = Catalog::sample();
        let outcome = catalog.execute(&Query::LinearSearch { target: 5 });
        assert!(outcome.is_empty());
    }

    #[test]
    fn test_product_by_id_outcome() {
        let catalog = Catalog::sample();
        match catalog.execute(&Query::ProductById { id: 7 }) {
            Outcome::Product(Some(product)) => assert_eq!(product.brand, "Logitech"),
            other => panic!("unexpected outcome: {other:?}"),
        }
        assert_eq!(catalog.execute(&Query::ProductById { id: 70 }), Outcome::Product(None));
    }

    #[test]
    fn test_count_outcome() {
        let catalog = Catalog::sample();
        let outcome = catalog.execute(&Query::CountByCategory { category: "laptop".into() });
        assert_eq!(outcome, Outcome::Count { category: "laptop".into(), count: 2 });
    }

    #[test]
    fn test_employee_outcomes() {
        let catalog = Catalog::sample();
        assert_eq!(catalog.execute(&Query::EmployeesByStatus { active: false }).len(), 1);
        assert_eq!(
            catalog
                .execute(&Query::EmployeesByDepartment { department: "Técnico".into() })
                .len(),
            1
        );
        assert_eq!(
            catalog
                .execute(&Query::EmployeesByFullName {
                    first: "maría".into(),
                    last: "rodríguez".into(),
                    partial: false,
                })
                .len(),
            1
        );
    }

    #[test]
    fn test_advanced_outcome() {
        let catalog = Catalog::sample();
        let query = Query::Advanced {
            criteria: ProductCriteria::new().category("smartphone").max_price(900.0),
            combinator: Combinator::And,
            tolerances: Tolerances::exact(),
        };
        match catalog.execute(&query) {
            Outcome::Products(found) => {
                assert_eq!(found.len(), 1);
                assert_eq!(found[0].name, "Samsung Galaxy S24");
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn test_outcome_serializes_with_kind() {
        let catalog = Catalog::sample();
        let json = serde_json::to_value(catalog.execute(&Query::CountByCategory { category: "Tablet".into() })).unwrap();
        assert_eq!(json["kind"], "count");
        assert_eq!(json["result"]["count"], 1);
    }

    #[test]
    fn test_query_names_are_snake_case() {
        assert_eq!(Query::AvailableProducts.name(), "available_products");
    }
}
