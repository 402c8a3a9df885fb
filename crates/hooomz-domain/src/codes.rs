//! Category and stage codes
//!
//! Short string codes classify work type ("EL" = electrical, "TL" = tile)
//! and construction phase ("ST-RO" = rough-in, "ST-FN" = finish). Codes are
//! validated newtypes so malformed strings are rejected at the boundary
//! instead of leaking into stored records.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Category code for unclassified tasks awaiting manual selection
pub const UNCLASSIFIED: &str = "UNCLASSIFIED";

/// Work-type category code (e.g. "EL", "PL", "TL")
///
/// Valid codes are 2-16 uppercase ASCII letters.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryCode(String);

impl CategoryCode {
    /// Parse and validate a category code
    ///
    /// # Errors
    /// Returns `DomainError::InvalidCategoryCode` for empty, lowercase, or
    /// non-alphabetic input.
    pub fn parse(code: &str) -> Result<Self, DomainError> {
        if code.len() < 2
            || code.len() > 16
            || !code.bytes().all(|b| b.is_ascii_uppercase())
        {
            return Err(DomainError::InvalidCategoryCode(code.to_string()));
        }
        Ok(Self(code.to_string()))
    }

    /// The sentinel code for tasks the matcher could not classify
    #[inline]
    #[must_use]
    pub fn unclassified() -> Self {
        Self(UNCLASSIFIED.to_string())
    }

    /// Whether this is the unclassified sentinel
    #[inline]
    #[must_use]
    pub fn is_unclassified(&self) -> bool {
        self.0 == UNCLASSIFIED
    }

    /// Code as a string slice
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for CategoryCode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for CategoryCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Construction stage code (e.g. "ST-RO", "ST-FN")
///
/// Valid codes are `ST-` followed by 2-4 uppercase ASCII letters.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StageCode(String);

impl StageCode {
    /// Parse and validate a stage code
    ///
    /// # Errors
    /// Returns `DomainError::InvalidStageCode` when the `ST-` prefix or the
    /// uppercase suffix is missing.
    pub fn parse(code: &str) -> Result<Self, DomainError> {
        let Some(suffix) = code.strip_prefix("ST-") else {
            return Err(DomainError::InvalidStageCode(code.to_string()));
        };
        if suffix.len() < 2
            || suffix.len() > 4
            || !suffix.bytes().all(|b| b.is_ascii_uppercase())
        {
            return Err(DomainError::InvalidStageCode(code.to_string()));
        }
        Ok(Self(code.to_string()))
    }

    /// Code as a string slice
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for StageCode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for StageCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
