//! Text rendering of query outcomes.

use std::io::{self, Write};
use techstore_catalog::Outcome;
use techstore_cli::output::format_count;

const NO_RESULTS: &str = "(no results)";

/// Write an outcome as summary lines.
pub fn render(outcome: &Outcome<'_>, out: &mut impl Write) -> io::Result<()> {
    match outcome {
        Outcome::Position(position) => match position.index {
            Some(index) => writeln!(
                out,
                "Result: index={}, comparisons={}",
                index, position.comparisons
            ),
            None => writeln!(
                out,
                "Result: not found after {}",
                format_count(position.comparisons, "comparison", "comparisons")
            ),
        },
        Outcome::Products(products) => write_lines(out, products),
        Outcome::Product(Some(product)) => writeln!(out, " - {}", product),
        Outcome::Product(None) => writeln!(out, "Not found."),
        Outcome::Employees(employees) => write_lines(out, employees),
        Outcome::Count { category, count } => writeln!(
            out,
            "Found {} in category '{}'.",
            format_count(*count, "product", "products"),
            category
        ),
    }
}

fn write_lines<T: std::fmt::Display>(out: &mut impl Write, records: &[&T]) -> io::Result<()> {
    if records.is_empty() {
        return writeln!(out, "{}", NO_RESULTS);
    }
    for record in records {
        writeln!(out, " - {}", record)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use techstore_catalog::{Catalog, Query};

    fn rendered(outcome: &Outcome<'_>) -> String {
        let mut out = Vec::new();
        render(outcome, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_render_products() {
        let catalog = Catalog::sample();
        let text = rendered(&catalog.execute(&Query::ProductsByBrand { brand: "sony".into() }));
        assert_eq!(
            text,
            " - ID:5 | Sony WH-1000XM5 | Brand:Sony | Category:Audífonos | Price:399.99 | Stock:15 | Available:true\n"
        );
    }

    #[test]
    fn test_render_empty() {
        let catalog = Catalog::sample();
        let text = rendered(&catalog.execute(&Query::ProductsByBrand { brand: "HP".into() }));
        assert_eq!(text, "(no results)\n");
    }

    #[test]
    fn test_render_position() {
        let catalog = Catalog::sample();
        assert_eq!(
            rendered(&catalog.execute(&Query::LinearSearch { target: 90 })),
            "Result: index=6, comparisons=7\n"
        );
        assert_eq!(
            rendered(&catalog.execute(&Query::LinearSearch { target: 1 })),
            "Result: not found after 7 comparisons\n"
        );
    }

    #[test]
    fn test_render_count() {
        let catalog = Catalog::sample();
        assert_eq!(
            rendered(&catalog.execute(&Query::CountByCategory { category: "Tablet".into() })),
            "Found 1 product in category 'Tablet'.\n"
        );
    }

    #[test]
    fn test_render_missing_product() {
        let catalog = Catalog::sample();
        assert_eq!(rendered(&catalog.execute(&Query::ProductById { id: 0 })), "Not found.\n");
    }
}
