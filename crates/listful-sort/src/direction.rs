//! Sort direction and its two serialized forms

use serde::{Deserialize, Serialize};

/// Sort direction
///
/// Serialized as `asc`/`desc` in query parameters and `ASC`/`DESC` in
/// ordering clauses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
	/// Ascending order
	Ascending,
	/// Descending order
	Descending,
}

impl SortDirection {
	/// Returns the opposite direction
	pub fn toggle(&self) -> Self {
		match self {
			Self::Ascending => Self::Descending,
			Self::Descending => Self::Ascending,
		}
	}

	/// Parses the direction half of a sort token.
	///
	/// Only exactly `asc` (case-insensitive) maps to [`Ascending`]; any
	/// other value sorts [`Descending`]. The token comes from a
	/// user-editable URL, so nothing here is an error.
	///
	/// [`Ascending`]: Self::Ascending
	/// [`Descending`]: Self::Descending
	pub fn parse_query(token: &str) -> Self {
		if token.eq_ignore_ascii_case("asc") {
			Self::Ascending
		} else {
			Self::Descending
		}
	}

	/// Lowercase form used in query parameters (`asc`/`desc`)
	pub fn as_query_str(&self) -> &'static str {
		match self {
			Self::Ascending => "asc",
			Self::Descending => "desc",
		}
	}

	/// Uppercase form used in ordering clauses (`ASC`/`DESC`)
	pub fn as_sql_str(&self) -> &'static str {
		match self {
			Self::Ascending => "ASC",
			Self::Descending => "DESC",
		}
	}
}

impl Default for SortDirection {
	fn default() -> Self {
		Self::Ascending
	}
}
