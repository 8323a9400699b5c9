//! Record types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A product in the store inventory.
///
/// Fields missing from a catalog file fall back to their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub brand: String,
    pub category: String,
    pub price: f64,
    pub stock: u32,
    pub available: bool,
}

impl Product {
    /// Returns true if the product can be sold right now.
    #[inline]
    pub fn is_in_stock(&self) -> bool {
        self.available && self.stock > 0
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID:{} | {} | Brand:{} | Category:{} | Price:{:.2} | Stock:{} | Available:{}",
            self.id, self.name, self.brand, self.category, self.price, self.stock, self.available
        )
    }
}

/// A store employee.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Employee {
    pub id: u32,
    pub first_name: String,
    pub last_name: String,
    pub department: String,
    pub salary: f64,
    pub active: bool,
}

impl Employee {
    /// First and last name separated by a space.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID:{} | {} {} | Department:{} | Salary:{:.2} | Active:{}",
            self.id, self.first_name, self.last_name, self.department, self.salary, self.active
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_display() {
        let product = Product {
            id: 1,
            name: "iPhone 15".into(),
            brand: "Apple".into(),
            category: "Smartphone".into(),
            price: 999.99,
            stock: 10,
            available: true,
        };
        assert_eq!(
            product.to_string(),
            "ID:1 | iPhone 15 | Brand:Apple | Category:Smartphone | Price:999.99 | Stock:10 | Available:true"
        );
    }

    #[test]
    fn test_employee_display() {
        let employee = Employee {
            id: 101,
            first_name: "Ana".into(),
            last_name: "García".into(),
            department: "Ventas".into(),
            salary: 35000.0,
            active: true,
        };
        assert_eq!(
            employee.to_string(),
            "ID:101 | Ana García | Department:Ventas | Salary:35000.00 | Active:true"
        );
        assert_eq!(employee.full_name(), "Ana García");
    }

    #[test]
    fn test_missing_fields_default() {
        let product: Product = serde_json::from_str(r#"{"id": 9, "name": "Cable"}"#).unwrap();
        assert_eq!(product.brand, "");
        assert_eq!(product.price, 0.0);
        assert_eq!(product.stock, 0);
        assert!(!product.available);
    }

    #[test]
    fn test_in_stock_requires_both() {
        let mut product = Product { stock: 3, available: false, ..Product::default() };
        assert!(!product.is_in_stock());
        product.available = true;
        assert!(product.is_in_stock());
        product.stock = 0;
        assert!(!product.is_in_stock());
    }
}
