use std::fmt;

use thiserror::Error;
use uuid::Uuid;

use crate::cache::CacheError;
use crate::conversion::ConversionError;
use crate::rates::RateError;
use crate::storage::RepositoryError;

/// A single failed validation rule.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    #[error("Item name is required.")]
    EmptyName,
    #[error("Item price must be greater than zero.")]
    NonPositivePrice,
    #[error("Origin currency is required.")]
    MissingOriginCurrency,
    #[error("Origin currency must be a 3-letter code.")]
    MalformedOriginCurrency,
    #[error("Origin currency is invalid.")]
    UnknownOriginCurrency,
    #[error("One or more target currencies are invalid.")]
    UnknownTargetCurrency,
    #[error("Page must be at least 1.")]
    InvalidPage,
    #[error("Page size must be at least 1.")]
    InvalidPageSize,
}

/// Every rule that failed for one input, in rule order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(Vec<ValidationIssue>);

impl ValidationErrors {
    pub fn new(issues: Vec<ValidationIssue>) -> Self {
        Self(issues)
    }

    pub fn issues(&self) -> &[ValidationIssue] {
        &self.0
    }

    pub fn contains(&self, issue: &ValidationIssue) -> bool {
        self.0.contains(issue)
    }

    /// Returns `Err` carrying the issues, or `Ok` if there are none.
    pub fn into_result(issues: Vec<ValidationIssue>) -> std::result::Result<(), Self> {
        if issues.is_empty() {
            Ok(())
        } else {
            Err(Self(issues))
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, issue) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{issue}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Errors surfaced by catalog operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CatalogError {
    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),
    #[error("Catalog item not found: {id}")]
    NotFound { id: Uuid },
    #[error("Rate source error: {0}")]
    Upstream(#[from] RateError),
    #[error("Cache error: {0}")]
    Cache(#[from] CacheError),
    #[error("Storage error: {0}")]
    Storage(#[from] RepositoryError),
    #[error("Conversion error: {0}")]
    Conversion(#[from] ConversionError),
}

impl From<ValidationErrors> for CatalogError {
    fn from(errors: ValidationErrors) -> Self {
        CatalogError::Validation(errors)
    }
}

/// Result type for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
