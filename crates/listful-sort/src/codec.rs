//! The sort-state codec
//!
//! Pure functions over [`RequestParams`]: extract a table's current sort
//! state, toggle a column for the next click, re-encode the toggled state
//! into link parameters and derive the CSS state token for the rendered
//! link. No function here ever fails on request data.

use crate::direction::SortDirection;
use crate::entry::SortEntry;
use crate::params::RequestParams;

/// Routing artifacts that must never survive into a generated link
const ROUTING_KEYS: &[&str] = &["action", "controller"];

/// Parses the sort state recorded for `table_key`.
///
/// Reads the `order[<table_key>][]` token list; an absent `order` key or
/// table key yields an empty sequence. Tokens with an empty field are
/// skipped.
pub fn parse(params: &RequestParams, table_key: &str) -> Vec<SortEntry> {
	params
		.order_tokens(table_key)
		.iter()
		.filter_map(|token| SortEntry::parse_token(token))
		.collect()
}

/// Returns the direction `field` is currently sorted in, if any.
///
/// When a field appears more than once in `entries`, the last occurrence
/// wins.
pub fn direction_of(entries: &[SortEntry], field: &str) -> Option<SortDirection> {
	entries
		.iter()
		.rev()
		.find(|entry| entry.field == field)
		.map(|entry| entry.direction)
}

/// Builds the sort state requested by the next click on `field`.
///
/// The result is always a single-entry sequence: clicking a column
/// replaces the table's whole sort state with that column, flipped from
/// its current direction. A field not present in `entries` sorts
/// ascending on its first click. Stacking multiple columns is the
/// caller's decision, not this codec's.
pub fn toggle(entries: &[SortEntry], field: &str) -> Vec<SortEntry> {
	let next = match direction_of(entries, field) {
		Some(current) => current.toggle(),
		None => SortDirection::Ascending,
	};
	vec![SortEntry::new(field, next)]
}

/// Re-encodes a sort state into link parameters.
///
/// Produces a copy of `params` with the `order[<table_key>][]` list
/// replaced by `entries` and the `action`/`controller` routing keys
/// stripped. Every other parameter is preserved verbatim, sort lists of
/// other tables included.
pub fn encode(params: &RequestParams, table_key: &str, entries: &[SortEntry]) -> RequestParams {
	let mut encoded = params.without(ROUTING_KEYS);
	encoded.set_order_tokens(table_key, entries.iter().map(SortEntry::to_token).collect());
	encoded
}

/// CSS state token for a column link: `"ascending"`, `"descending"` or
/// `""` when the field is not part of the current state.
pub fn css_state_token(entries: &[SortEntry], field: &str) -> &'static str {
	match direction_of(entries, field) {
		Some(SortDirection::Ascending) => "ascending",
		Some(SortDirection::Descending) => "descending",
		None => "",
	}
}
