//! Typed request-parameter mapping
//!
//! Incoming query strings are loosely typed key/value pairs. This module
//! normalizes them once at the boundary into [`RequestParams`], which
//! keeps the `order[<table>][]` sort lists apart from the rest of the
//! parameters so the codec never has to re-parse bracket keys.

use std::collections::BTreeMap;

/// A request's query parameters, with sort-order lists split out.
///
/// Flat parameters keep their incoming order. The repeatable
/// `order[<table>][]=<field>:<direction>` items are collected per table
/// key, in order, as raw tokens; [`codec::parse`] turns them into
/// [`SortEntry`] values.
///
/// [`codec::parse`]: crate::codec::parse
/// [`SortEntry`]: crate::entry::SortEntry
///
/// # Examples
///
/// ```rust
/// use listful_sort::RequestParams;
///
/// let params = RequestParams::from_pairs([
///     ("page".to_string(), "2".to_string()),
///     ("order[users][]".to_string(), "login:asc".to_string()),
/// ]);
///
/// assert_eq!(params.get("page"), Some("2"));
/// assert_eq!(params.order_tokens("users"), ["login:asc"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestParams {
	/// Flat parameters other than the recognized `order[...][]` keys
	pairs: Vec<(String, String)>,
	/// Raw sort tokens per table key
	order: BTreeMap<String, Vec<String>>,
}

impl RequestParams {
	/// Creates an empty parameter mapping
	pub fn new() -> Self {
		Self::default()
	}

	/// Builds a mapping from URL-decoded key/value pairs.
	///
	/// Keys shaped like `order[<table>][]` are routed into the per-table
	/// sort lists; everything else is kept verbatim as a flat pair.
	pub fn from_pairs<I>(pairs: I) -> Self
	where
		I: IntoIterator<Item = (String, String)>,
	{
		let mut params = Self::new();
		for (key, value) in pairs {
			match order_table_key(&key) {
				Some(table) => {
					params.order.entry(table.to_string()).or_default().push(value);
				}
				None => params.pairs.push((key, value)),
			}
		}
		params
	}

	/// Builds a mapping from a raw query string (`a=1&order%5Busers%5D%5B%5D=login%3Aasc`).
	///
	/// Undecodable input yields an empty mapping; query strings are
	/// untrusted and must not be able to fail rendering.
	pub fn from_query_str(query: &str) -> Self {
		let pairs: Vec<(String, String)> =
			serde_urlencoded::from_str(query).unwrap_or_default();
		Self::from_pairs(pairs)
	}

	/// Appends a flat parameter
	pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
		self.pairs.push((key.into(), value.into()));
	}

	/// Returns the first value for a flat parameter key
	pub fn get(&self, key: &str) -> Option<&str> {
		self.pairs
			.iter()
			.find(|(k, _)| k == key)
			.map(|(_, v)| v.as_str())
	}

	/// Returns the raw sort tokens recorded for a table key.
	///
	/// Absent keys yield an empty slice, never an error.
	pub fn order_tokens(&self, table_key: &str) -> &[String] {
		self.order.get(table_key).map(Vec::as_slice).unwrap_or(&[])
	}

	/// Replaces the sort tokens for a table key wholesale
	pub fn set_order_tokens(&mut self, table_key: impl Into<String>, tokens: Vec<String>) {
		self.order.insert(table_key.into(), tokens);
	}

	/// Returns a copy with the given flat keys removed.
	///
	/// Used by the codec to strip routing artifacts (`action`,
	/// `controller`) out of generated links.
	pub fn without(&self, keys: &[&str]) -> Self {
		Self {
			pairs: self
				.pairs
				.iter()
				.filter(|(k, _)| !keys.contains(&k.as_str()))
				.cloned()
				.collect(),
			order: self.order.clone(),
		}
	}

	/// Expands the mapping back into flat pairs, bracket keys included.
	///
	/// Flat pairs come first in their original order, then the sort lists
	/// by table key.
	pub fn to_pairs(&self) -> Vec<(String, String)> {
		let mut pairs = self.pairs.clone();
		for (table, tokens) in &self.order {
			for token in tokens {
				pairs.push((format!("order[{table}][]"), token.clone()));
			}
		}
		pairs
	}

	/// Serializes the mapping as a URL-encoded query string
	pub fn to_query_string(&self) -> String {
		serde_urlencoded::to_string(self.to_pairs()).unwrap_or_default()
	}
}

/// Extracts the table key out of an `order[<table>][]` parameter key
fn order_table_key(key: &str) -> Option<&str> {
	let table = key.strip_prefix("order[")?.strip_suffix("][]")?;
	if table.is_empty() { None } else { Some(table) }
}
