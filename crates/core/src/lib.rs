//! Core utilities for TechStore tools
//!
//! This crate provides functionality shared by the TechStore binaries:
//!
//! - **Error handling**: Structured errors with codes, context and recovery suggestions
//! - **Configuration**: TOML-based configuration with validation
//!
//! # Example
//!
//! ```rust,no_run
//! use techstore_core::config::Config;
//!
//! let config = Config::load(None).expect("invalid configuration");
//! println!("default operator: {}", config.schema.search.combinator);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;

pub use error::{exit_codes, Error, ErrorCode, ErrorReport, Result};
