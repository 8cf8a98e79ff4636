//! Alchemy Error Types
//!
//! Two families of errors live here:
//! - [`GeneratorError`]: outcomes of drawing from pools. The "empty pool" and
//!   "combination exhausted" variants are expected, recoverable conditions
//!   that the UI surfaces as warnings.
//! - [`CatalogError`]: failures while loading ingredient tables from disk.

use std::path::PathBuf;
use thiserror::Error;

use super::item::PoolKind;

// ============================================================================
// Generator Errors
// ============================================================================

/// Errors that can occur while sampling items or generating combinations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    /// No item in the pool survived the active filters.
    #[error("No eligible {kind} to draw from")]
    EmptyPool { kind: PoolKind },

    /// Every attempt produced an already-seen pair.
    #[error("No unseen combination found after {attempts} attempts ({seen} combinations already drawn)")]
    CombinationExhausted { attempts: u32, seen: usize },

    /// A rarity weight was configured as zero.
    #[error("Invalid weight for rarity '{rarity}': weights must be positive")]
    InvalidWeight { rarity: String },
}

impl GeneratorError {
    /// Create an EmptyPool error.
    pub fn empty_pool(kind: PoolKind) -> Self {
        Self::EmptyPool { kind }
    }

    /// Check if this error is a non-fatal warning the user can recover from.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::EmptyPool { .. } | Self::CombinationExhausted { .. }
        )
    }
}

/// Result type for generator operations.
pub type GeneratorResult<T> = Result<T, GeneratorError>;

// ============================================================================
// Catalog Errors
// ============================================================================

/// Errors that can occur when loading a catalog file.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Catalog file does not exist.
    #[error("Catalog not found: {path}")]
    NotFound { path: PathBuf },

    /// Failed to read the catalog file.
    #[error("Failed to read catalog {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse catalog contents.
    #[error("Failed to parse {path} as {format}: {message}")]
    ParseFailed {
        path: PathBuf,
        format: String,
        message: String,
    },

    /// Unsupported catalog file extension.
    #[error("Invalid file extension for {path}: expected {expected}")]
    InvalidExtension { path: PathBuf, expected: String },

    /// A row is missing its name.
    #[error("Row {row} in {path} has an empty name")]
    EmptyName { path: PathBuf, row: usize },
}

impl CatalogError {
    /// Create a NotFound error.
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Self::NotFound { path: path.into() }
    }

    /// Create a ReadFailed error.
    pub fn read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a ParseFailed error from any displayable parser error.
    pub fn parse_failed(
        path: impl Into<PathBuf>,
        format: impl Into<String>,
        source: impl std::fmt::Display,
    ) -> Self {
        Self::ParseFailed {
            path: path.into(),
            format: format.into(),
            message: source.to_string(),
        }
    }
}

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;
