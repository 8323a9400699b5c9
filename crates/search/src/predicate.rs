//! Combining per-field checks into a single decision.

use crate::{Result, SearchError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Logical rule for aggregating per-field checks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Combinator {
    /// Every check must hold
    #[default]
    And,
    /// At least one check must hold
    Or,
}

impl Combinator {
    /// Fold a set of checks.
    ///
    /// With no checks at all the result is `true` under both rules, so an
    /// empty criteria set selects every record.
    pub fn combine<I>(self, checks: I) -> bool
    where
        I: IntoIterator<Item = bool>,
    {
        let mut checks = checks.into_iter().peekable();
        if checks.peek().is_none() {
            return true;
        }
        match self {
            Combinator::And => checks.all(|check| check),
            Combinator::Or => checks.any(|check| check),
        }
    }

    /// Lowercase name as used in configuration.
    pub fn as_str(&self) -> &'static str {
        match self {
            Combinator::And => "and",
            Combinator::Or => "or",
        }
    }
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_str().to_uppercase())
    }
}

impl FromStr for Combinator {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "and" => Ok(Combinator::And),
            "or" => Ok(Combinator::Or),
            other => Err(SearchError::InvalidCombinator(other.to_string())),
        }
    }
}
