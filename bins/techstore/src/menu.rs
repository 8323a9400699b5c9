//! Interactive text menu.
//!
//! The menu only turns answers into [`Query`] values and renders the
//! outcomes; it reads from any `BufRead` and writes to any `Write`.

use crate::prompt::{PromptError, PromptResult, Prompter};
use crate::render::render;
use std::io::{BufRead, Write};
use techstore_catalog::{Catalog, ProductCriteria, Query, Tolerances};
use techstore_cli::output::format_bound;
use techstore_search::Combinator;
use techstore_telemetry::Timer;

const MAIN_MENU: &str = "
================= TechStore =================
1) Simple linear search (number list)
2) Product search
3) Employee search
4) Availability and filters
5) Advanced search (AND/OR/approximate)
0) Exit
=============================================";

const PRODUCTS_MENU: &str = "
-- Products --
1) Search by name (exact)
2) Search by name (partial)
3) Search by id
4) Search by category
0) Back";

const EMPLOYEES_MENU: &str = "
-- Employees --
1) Search by first and last name (exact)
2) Search by first and last name (partial)
3) Search by department
4) List active employees
0) Back";

const FILTERS_MENU: &str = "
-- Availability and filters --
1) Available products (in stock and flagged available)
2) Products by price range
3) Products by brand
4) Count products in a category
0) Back";

/// Fallbacks for advanced search answers left blank.
#[derive(Debug, Clone, Copy)]
pub struct SearchDefaults {
    pub combinator: Combinator,
    pub tolerance: usize,
}

impl Default for SearchDefaults {
    fn default() -> Self {
        Self {
            combinator: Combinator::And,
            tolerance: 1,
        }
    }
}

enum Flow {
    Continue,
    Exit,
}

/// Menu session bound to one catalog.
pub struct Menu<'a, R, W> {
    catalog: &'a Catalog,
    defaults: SearchDefaults,
    prompter: Prompter<R, W>,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(catalog: &'a Catalog, defaults: SearchDefaults, input: R, output: W) -> Self {
        Self {
            catalog,
            defaults,
            prompter: Prompter::new(input, output),
        }
    }

    /// Run until the user exits or input ends.
    pub fn run(&mut self) -> std::io::Result<()> {
        match self.main_loop() {
            Ok(()) => Ok(()),
            Err(PromptError::Eof) => {
                tracing::debug!("Input closed, leaving menu");
                Ok(())
            }
            Err(PromptError::Io(e)) => Err(e),
        }
    }

    fn main_loop(&mut self) -> PromptResult<()> {
        loop {
            writeln!(self.out(), "{}", MAIN_MENU)?;
            let choice = self.prompter.ask("Select an option")?;
            match choice.trim() {
                "1" => self.linear_search()?,
                "2" => self.submenu(PRODUCTS_MENU, Self::products_action)?,
                "3" => self.submenu(EMPLOYEES_MENU, Self::employees_action)?,
                "4" => self.submenu(FILTERS_MENU, Self::filters_action)?,
                "5" => self.advanced_search()?,
                "0" => {
                    writeln!(self.out(), "Goodbye!")?;
                    return Ok(());
                }
                _ => writeln!(self.out(), "Invalid option, please try again.")?,
            }
        }
    }

    fn submenu(&mut self, text: &str, action: fn(&mut Self, &str) -> PromptResult<Flow>) -> PromptResult<()> {
        loop {
            writeln!(self.out(), "{}", text)?;
            let choice = self.prompter.ask("Select")?;
            if let Flow::Exit = action(self, choice.trim())? {
                return Ok(());
            }
        }
    }

    fn linear_search(&mut self) -> PromptResult<()> {
        let numbers = self
            .catalog
            .numbers
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(self.out(), "List: [{}]", numbers)?;
        let target = self.prompter.ask_parsed("Number to search")?;
        self.show(&Query::LinearSearch { target })
    }

    fn products_action(&mut self, choice: &str) -> PromptResult<Flow> {
        match choice {
            "1" | "2" => {
                let name = self.prompter.ask("Name")?;
                self.show(&Query::ProductsByName { name, partial: choice == "2" })?;
            }
            "3" => {
                let id = self.prompter.ask_parsed("Product id")?;
                self.show(&Query::ProductById { id })?;
            }
            "4" => {
                let category = self.prompter.ask("Category")?;
                self.show(&Query::ProductsByCategory { category })?;
            }
            "0" => return Ok(Flow::Exit),
            _ => writeln!(self.out(), "Invalid option.")?,
        }
        Ok(Flow::Continue)
    }

    fn employees_action(&mut self, choice: &str) -> PromptResult<Flow> {
        match choice {
            "1" | "2" => {
                let first = self.prompter.ask("First name")?;
                let last = self.prompter.ask("Last name")?;
                self.show(&Query::EmployeesByFullName { first, last, partial: choice == "2" })?;
            }
            "3" => {
                let department = self.prompter.ask("Department")?;
                self.show(&Query::EmployeesByDepartment { department })?;
            }
            "4" => self.show(&Query::EmployeesByStatus { active: true })?,
            "0" => return Ok(Flow::Exit),
            _ => writeln!(self.out(), "Invalid option.")?,
        }
        Ok(Flow::Continue)
    }

    fn filters_action(&mut self, choice: &str) -> PromptResult<Flow> {
        match choice {
            "1" => self.show(&Query::AvailableProducts)?,
            "2" => {
                let min = self.prompter.ask_optional("Minimum price")?.unwrap_or(0.0);
                let max = self
                    .prompter
                    .ask_optional("Maximum price (blank for no limit)")?
                    .unwrap_or(f64::INFINITY);
                writeln!(self.out(), "Range: {} to {}", format_bound(min), format_bound(max))?;
                self.show(&Query::ProductsInPriceRange { min, max })?;
            }
            "3" => {
                let brand = self.prompter.ask("Brand")?;
                self.show(&Query::ProductsByBrand { brand })?;
            }
            "4" => {
                let category = self.prompter.ask("Category")?;
                self.show(&Query::CountByCategory { category })?;
            }
            "0" => return Ok(Flow::Exit),
            _ => writeln!(self.out(), "Invalid option.")?,
        }
        Ok(Flow::Continue)
    }

    fn advanced_search(&mut self) -> PromptResult<()> {
        writeln!(self.out(), "\n-- Advanced search --\nCombine criteria; leave blank what does not apply.")?;

        let criteria = ProductCriteria {
            name: self.prompter.ask_text("Name")?,
            brand: self.prompter.ask_text("Brand")?,
            category: self.prompter.ask_text("Category")?,
            min_price: self.prompter.ask_optional("Minimum price")?,
            max_price: self.prompter.ask_optional("Maximum price")?,
            available: self.ask_available()?,
            min_stock: self.prompter.ask_optional("Minimum stock")?,
        };

        let label = format!("Operator (AND/OR) [{}]", self.defaults.combinator);
        let combinator = self
            .prompter
            .ask_optional::<Combinator>(&label)?
            .unwrap_or(self.defaults.combinator);

        let tolerances = if self.prompter.ask_yes_no("Approximate match on name/brand (y/n)? [n]", false)? {
            let label = format!("Tolerance [{}]", self.defaults.tolerance);
            let tolerance = self.prompter.ask_optional(&label)?.unwrap_or(self.defaults.tolerance);
            Tolerances::uniform(tolerance)
        } else {
            Tolerances::exact()
        };

        self.show(&Query::Advanced { criteria, combinator, tolerances })
    }

    fn ask_available(&mut self) -> PromptResult<Option<bool>> {
        loop {
            let answer = self.prompter.ask("Available (y/n, blank for any)")?;
            match answer.trim().to_lowercase().as_str() {
                "" => return Ok(None),
                "y" | "yes" | "s" | "si" | "sí" => return Ok(Some(true)),
                "n" | "no" => return Ok(Some(false)),
                other => writeln!(self.out(), "Please answer y, n or leave blank (got '{}').", other)?,
            }
        }
    }

    fn show(&mut self, query: &Query) -> PromptResult<()> {
        let catalog = self.catalog;
        let timer = Timer::start(query.name());
        let outcome = catalog.execute(query);
        timer.stop();
        render(&outcome, self.out())?;
        Ok(())
    }

    fn out(&mut self) -> &mut W {
        self.prompter.output()
    }
}
