//! Usage errors for the table builder
//!
//! Rendering only fails on programmer mistakes. Anything coming from the
//! request degrades gracefully inside `listful-sort` instead.

use thiserror::Error;

/// Result type for table rendering
pub type Result<T> = std::result::Result<T, TableError>;

/// Table builder usage errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum TableError {
	/// A semantic list was rendered without any columns.
	#[error("a semantic list requires at least one column")]
	NoColumns,

	/// A column declared sorting with an empty field name.
	#[error("sort field name must not be empty")]
	EmptySortField,
}
