//! TechStore - inventory and employee lookup
//!
//! Interactive menu plus one-shot subcommands over the store catalog.

use anyhow::{Context, Result};
use clap::{ArgGroup, Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use techstore_catalog::{Catalog, CatalogError, CatalogErrorCode, Outcome, ProductCriteria, Query, Tolerances};
use techstore_cli::output::{format_count, Status};
use techstore_core::config::Config;
use techstore_core::error::{exit_codes, Error, ErrorCode};
use techstore_search::{approximate_match, match_distance, Combinator, SearchError, SearchErrorCode};
use techstore_telemetry::{timed_span, TelemetryConfig};

mod menu;
mod prompt;
mod render;

use menu::{Menu, SearchDefaults};

/// Inventory and employee lookup for TechStore
#[derive(Parser)]
#[command(name = "techstore")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file (defaults to techstore.toml lookup)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Catalog JSON file (defaults to the built-in sample data)
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive menu (default)
    Menu,

    /// Search products by several criteria
    Products {
        /// Product name
        #[arg(long)]
        name: Option<String>,

        /// Brand
        #[arg(long)]
        brand: Option<String>,

        /// Category
        #[arg(long)]
        category: Option<String>,

        /// Minimum price (inclusive)
        #[arg(long)]
        min_price: Option<f64>,

        /// Maximum price (inclusive)
        #[arg(long)]
        max_price: Option<f64>,

        /// Availability flag (true/false)
        #[arg(long)]
        available: Option<bool>,

        /// Minimum stock (inclusive)
        #[arg(long)]
        min_stock: Option<u32>,

        /// Match any criterion instead of all of them
        #[arg(long)]
        any: bool,

        /// Approximate name/brand matching with this edit tolerance
        #[arg(short, long)]
        tolerance: Option<usize>,

        /// Approximate name/brand matching with the configured tolerance
        #[arg(short, long, conflicts_with = "tolerance")]
        approximate: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Search employees
    #[command(group(
        ArgGroup::new("selector")
            .required(true)
            .args(["first", "department", "active", "inactive"])
    ))]
    Employees {
        /// First name (requires --last)
        #[arg(long, requires = "last")]
        first: Option<String>,

        /// Last name (requires --first)
        #[arg(long, requires = "first")]
        last: Option<String>,

        /// Match names by substring
        #[arg(long, requires = "first")]
        partial: bool,

        /// Department
        #[arg(long)]
        department: Option<String>,

        /// List active employees
        #[arg(long)]
        active: bool,

        /// List inactive employees
        #[arg(long)]
        inactive: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check whether a query approximately matches a candidate
    Match {
        /// Text to look for
        query: String,

        /// Text to look in
        candidate: String,

        /// Maximum edit distance (defaults to the configured tolerance)
        #[arg(short, long)]
        tolerance: Option<usize>,
    },
}

impl Commands {
    fn wants_json(&self) -> bool {
        match self {
            Commands::Products { json, .. } | Commands::Employees { json, .. } => *json,
            Commands::Menu | Commands::Match { .. } => false,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let json = cli.command.as_ref().is_some_and(Commands::wants_json);

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            Status::error(&format!("{:#}", e));
            if json {
                if let Some(report) = e.downcast_ref::<Error>().map(Error::to_report) {
                    if let Ok(text) = serde_json::to_string_pretty(&report) {
                        println!("{}", text);
                    }
                }
            }
            ExitCode::from(exit_code_for(&e) as u8)
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config = Config::load(cli.config.as_deref())?;

    let mut telemetry = TelemetryConfig {
        log_level: config.schema.logging.level.clone(),
        log_file: config.schema.logging.file.clone(),
        ..TelemetryConfig::default()
    };
    if cli.verbose {
        telemetry = telemetry.verbose();
    }
    techstore_telemetry::init_with_config(telemetry)?;

    let catalog = load_catalog(cli.data.as_ref(), &config)?;
    let defaults = SearchDefaults {
        combinator: config.schema.search.combinator.parse().map_err(search_error)?,
        tolerance: config.schema.search.tolerance,
    };

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => {
            let stdin = io::stdin();
            Menu::new(&catalog, defaults, stdin.lock(), io::stdout().lock()).run()?;
            Ok(ExitCode::SUCCESS)
        }

        Commands::Products {
            name,
            brand,
            category,
            min_price,
            max_price,
            available,
            min_stock,
            any,
            tolerance,
            approximate,
            json,
        } => {
            let criteria = ProductCriteria {
                name,
                brand,
                category,
                min_price,
                max_price,
                available,
                min_stock,
            };
            let combinator = if any { Combinator::Or } else { Combinator::And };
            let tolerances = match tolerance {
                Some(t) => Tolerances::uniform(t),
                None if approximate => Tolerances::uniform(defaults.tolerance),
                None => Tolerances::exact(),
            };
            run_query(&catalog, &Query::Advanced { criteria, combinator, tolerances }, json)
        }

        Commands::Employees {
            first,
            last,
            partial,
            department,
            active,
            inactive,
            json,
        } => {
            // clap guarantees exactly one selector
            let query = match (first, last, department) {
                (Some(first), Some(last), _) => Query::EmployeesByFullName { first, last, partial },
                (_, _, Some(department)) => Query::EmployeesByDepartment { department },
                _ => Query::EmployeesByStatus { active: active && !inactive },
            };
            run_query(&catalog, &query, json)
        }

        Commands::Match {
            query,
            candidate,
            tolerance,
        } => {
            let tolerance = tolerance.unwrap_or(defaults.tolerance);
            let matched = approximate_match(&query, &candidate, tolerance);
            println!(
                "match: {} (distance {}, tolerance {})",
                matched,
                match_distance(&query, &candidate),
                tolerance
            );
            Ok(if matched { ExitCode::SUCCESS } else { ExitCode::FAILURE })
        }
    }
}

fn load_catalog(data: Option<&PathBuf>, config: &Config) -> Result<Catalog> {
    let path = data
        .cloned()
        .or_else(|| config.schema.data.catalog.as_ref().map(PathBuf::from));

    match path {
        Some(path) => {
            timed_span!("load_catalog");
            Catalog::load(&path)
                .map_err(catalog_error)
                .with_context(|| format!("Loading catalog {}", path.display()))
        }
        None => {
            tracing::debug!("Using built-in sample catalog");
            Ok(Catalog::sample())
        }
    }
}

fn catalog_error(err: CatalogError) -> Error {
    if let CatalogError::Io { path, source } = &err {
        if source.kind() == io::ErrorKind::NotFound {
            let missing = Error::file_not_found(path);
            return missing.with_source(err);
        }
    }

    let code = match err.code() {
        CatalogErrorCode::Io => ErrorCode::IoError,
        CatalogErrorCode::Parse => ErrorCode::CatalogParseError,
        CatalogErrorCode::DuplicateId | CatalogErrorCode::InvalidRecord => ErrorCode::InvalidRecord,
        CatalogErrorCode::InvalidCriterion | CatalogErrorCode::Search => ErrorCode::InvalidInput,
    };
    Error::new(code, err.to_string())
        .with_context(format!("catalog error {}", err.code() as u32))
        .with_source(err)
        .with_suggestion("Check the catalog file or omit --data to use the sample catalog")
}

fn search_error(err: SearchError) -> Error {
    let code = match err.code() {
        SearchErrorCode::InvalidCombinator => ErrorCode::InvalidConfigValue,
    };
    Error::new(code, err.to_string()).with_context(format!("search error {}", err.code() as u32))
}

fn run_query(catalog: &Catalog, query: &Query, json: bool) -> Result<ExitCode> {
    let outcome = catalog.execute(query);

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        let mut stdout = io::stdout().lock();
        render::render(&outcome, &mut stdout)?;
        drop(stdout);
        let noun = match &outcome {
            Outcome::Employees(_) => ("employee", "employees"),
            _ => ("product", "products"),
        };
        Status::info(&format!("{} found", format_count(outcome.len(), noun.0, noun.1)));
    }

    Ok(ExitCode::SUCCESS)
}

fn exit_code_for(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<Error>()
        .map_or(exit_codes::FAILURE, Error::exit_code)
}
