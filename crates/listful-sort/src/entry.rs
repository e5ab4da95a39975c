//! Sort entries and their query-token form

use serde::{Deserialize, Serialize};

use crate::direction::SortDirection;

/// A single `(field, direction)` pair in a table's sort state.
///
/// The position of an entry inside a table's sequence is significant: the
/// first entry is the primary sort key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortEntry {
	/// The data-source column or attribute being sorted on
	pub field: String,
	/// The direction this field is sorted in
	pub direction: SortDirection,
}

impl SortEntry {
	/// Creates a new sort entry
	pub fn new(field: impl Into<String>, direction: SortDirection) -> Self {
		Self {
			field: field.into(),
			direction,
		}
	}

	/// Creates an ascending entry for `field`
	pub fn ascending(field: impl Into<String>) -> Self {
		Self::new(field, SortDirection::Ascending)
	}

	/// Creates a descending entry for `field`
	pub fn descending(field: impl Into<String>) -> Self {
		Self::new(field, SortDirection::Descending)
	}

	/// Parses a `field:direction` query token.
	///
	/// The token is split on the first `:` so field names keep any later
	/// colons out of the direction. A token with no separator is treated
	/// as a bare field sorted ascending; tokens come from user-editable
	/// URLs, so the tolerance is deliberate. Returns `None` only when the
	/// field half is empty.
	pub fn parse_token(token: &str) -> Option<Self> {
		let mut parts = token.splitn(2, ':');
		let field = parts.next().unwrap_or_default();
		if field.is_empty() {
			return None;
		}
		let direction = match parts.next() {
			Some(dir) => SortDirection::parse_query(dir),
			None => {
				tracing::debug!(token, "sort token has no direction, assuming ascending");
				SortDirection::Ascending
			}
		};
		Some(Self::new(field, direction))
	}

	/// Query-token form, `field:asc` / `field:desc`
	pub fn to_token(&self) -> String {
		format!("{}:{}", self.field, self.direction.as_query_str())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("login:asc", "login", SortDirection::Ascending)]
	#[case("login:desc", "login", SortDirection::Descending)]
	#[case("login:ASC", "login", SortDirection::Ascending)]
	#[case("login:bogus", "login", SortDirection::Descending)]
	fn test_parse_token_well_formed(
		#[case] token: &str,
		#[case] field: &str,
		#[case] direction: SortDirection,
	) {
		let entry = SortEntry::parse_token(token).unwrap();
		assert_eq!(entry.field, field);
		assert_eq!(entry.direction, direction);
	}

	#[rstest]
	fn test_parse_token_without_separator_is_ascending() {
		let entry = SortEntry::parse_token("login").unwrap();
		assert_eq!(entry.field, "login");
		assert_eq!(entry.direction, SortDirection::Ascending);
	}

	#[rstest]
	fn test_parse_token_splits_on_first_colon_only() {
		let entry = SortEntry::parse_token("login:asc:extra").unwrap();
		assert_eq!(entry.field, "login");
		// "asc:extra" is not exactly "asc"
		assert_eq!(entry.direction, SortDirection::Descending);
	}

	#[rstest]
	#[case("")]
	#[case(":asc")]
	fn test_parse_token_empty_field_is_none(#[case] token: &str) {
		assert!(SortEntry::parse_token(token).is_none());
	}

	#[rstest]
	fn test_to_token_is_lowercase() {
		assert_eq!(SortEntry::ascending("login").to_token(), "login:asc");
		assert_eq!(SortEntry::descending("name").to_token(), "name:desc");
	}
}
