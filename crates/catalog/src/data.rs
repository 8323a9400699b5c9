//! The catalog data context: records loaded once at startup and shared
//! read-only with every query.

use crate::error::{CatalogError, Result};
use crate::model::{Employee, Product};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Integers used by the simple linear search demo.
pub const SAMPLE_NUMBERS: [i64; 7] = [64, 34, 25, 12, 22, 11, 90];

/// Products, employees and the demo number list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub products: Vec<Product>,

    #[serde(default)]
    pub employees: Vec<Employee>,

    #[serde(default = "default_numbers")]
    pub numbers: Vec<i64>,
}

fn default_numbers() -> Vec<i64> {
    SAMPLE_NUMBERS.to_vec()
}

/// No records, but the demo numbers are always present.
impl Default for Catalog {
    fn default() -> Self {
        Self::new(Vec::new(), Vec::new())
    }
}

impl Catalog {
    /// Create a catalog from explicit collections.
    pub fn new(products: Vec<Product>, employees: Vec<Employee>) -> Self {
        Self {
            products,
            employees,
            numbers: default_numbers(),
        }
    }

    /// The built-in TechStore sample data.
    pub fn sample() -> Self {
        Self::new(sample_products(), sample_employees())
    }

    /// Parse a catalog from JSON text and validate it.
    pub fn from_json(json: &str) -> Result<Self> {
        let catalog: Catalog = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load a catalog from a JSON file and validate it.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let catalog = Self::from_json(&content)?;
        tracing::info!(
            path = %path.display(),
            products = catalog.products.len(),
            employees = catalog.employees.len(),
            "Catalog loaded"
        );
        Ok(catalog)
    }

    /// Check id uniqueness and value ranges.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for product in &self.products {
            if !seen.insert(product.id) {
                return Err(CatalogError::DuplicateId { kind: "product", id: product.id });
            }
            if !product.price.is_finite() || product.price < 0.0 {
                return Err(CatalogError::InvalidRecord {
                    id: product.id,
                    message: format!("price must be a non-negative number, got {}", product.price),
                });
            }
        }

        seen.clear();
        for employee in &self.employees {
            if !seen.insert(employee.id) {
                return Err(CatalogError::DuplicateId { kind: "employee", id: employee.id });
            }
            if !employee.salary.is_finite() || employee.salary < 0.0 {
                return Err(CatalogError::InvalidRecord {
                    id: employee.id,
                    message: format!("salary must be a non-negative number, got {}", employee.salary),
                });
            }
        }

        Ok(())
    }
}

fn product(
    id: u32,
    name: &str,
    brand: &str,
    category: &str,
    price: f64,
    stock: u32,
    available: bool,
) -> Product {
    Product {
        id,
        name: name.to_string(),
        brand: brand.to_string(),
        category: category.to_string(),
        price,
        stock,
        available,
    }
}

fn employee(id: u32, first_name: &str, last_name: &str, department: &str, salary: f64, active: bool) -> Employee {
    Employee {
        id,
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        department: department.to_string(),
        salary,
        active,
    }
}

fn sample_products() -> Vec<Product> {
    vec![
        product(1, "iPhone 15", "Apple", "Smartphone", 999.99, 10, true),
        product(2, "Samsung Galaxy S24", "Samsung", "Smartphone", 899.99, 8, true),
        product(3, "MacBook Air M3", "Apple", "Laptop", 1299.99, 5, true),
        product(4, "Dell XPS 13", "Dell", "Laptop", 1199.99, 0, false),
        product(5, "Sony WH-1000XM5", "Sony", "Audífonos", 399.99, 15, true),
        product(6, "iPad Air", "Apple", "Tablet", 599.99, 12, true),
        product(7, "Logitech MX Master 3S", "Logitech", "Accesorios", 119.99, 25, true),
        product(8, "Kindle Paperwhite", "Amazon", "Lectores", 149.99, 0, false),
    ]
}

fn sample_employees() -> Vec<Employee> {
    vec![
        employee(101, "Ana", "García", "Ventas", 35000.0, true),
        employee(102, "Carlos", "López", "Técnico", 42000.0, true),
        employee(103, "María", "Rodríguez", "Ventas", 38000.0, false),
        employee(104, "José", "Martínez", "Inventario", 30000.0, true),
    ]
}
