//! Orderable-field configuration and resolution
//!
//! Each entity type declares once, at startup, which of its fields may be
//! sorted on and what its default ordering is. [`resolve`] then turns a
//! parsed, untrusted sort state into the final entry sequence an ordering
//! clause is built from: unknown fields are dropped silently, the default
//! steps in when nothing (valid) was requested, and a `stable` default is
//! appended to every resolution as a tiebreaker.
//!
//! Configurations live in a process-wide registry populated during
//! startup and read-only afterwards; concurrent readers need no
//! coordination once initialization is done.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::codec;
use crate::direction::SortDirection;
use crate::entry::SortEntry;
use crate::error::{ConfigError, Result};
use crate::params::RequestParams;

/// The default ordering of an entity type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultOrder {
	/// Field sorted on when the request supplies no valid sort state
	pub field: String,
	/// Direction the default field is sorted in
	pub direction: SortDirection,
	/// When `true`, the default is appended to *every* resolution as a
	/// tiebreaker, even when explicit fields are present
	pub stable: bool,
}

/// Sort policy for one entity type.
///
/// Immutable once built. Construct via [`OrderableConfig::builder`],
/// seeding it with the entity's full field list (schema introspection is
/// the caller's concern), then narrow with [`only`] / [`except`] and pick
/// a default.
///
/// [`only`]: OrderableConfigBuilder::only
/// [`except`]: OrderableConfigBuilder::except
///
/// # Examples
///
/// ```rust
/// use listful_sort::{OrderableConfig, SortDirection, SortEntry};
///
/// let config = OrderableConfig::builder(["id", "login", "first_name", "password_salt"])
///     .except(["id", "password_salt"])
///     .default_order("login", SortDirection::Descending)
///     .build();
///
/// let resolved = config.resolve(&[SortEntry::ascending("first_name")]).unwrap();
/// assert_eq!(resolved, vec![SortEntry::ascending("first_name")]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderableConfig {
	allowed_fields: Vec<String>,
	default: DefaultOrder,
}

impl OrderableConfig {
	/// Starts building a configuration from the entity's full field list
	pub fn builder<I, S>(all_fields: I) -> OrderableConfigBuilder
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		OrderableConfigBuilder {
			fields: all_fields.into_iter().map(Into::into).collect(),
			default: None,
			stable: false,
		}
	}

	/// The fields this entity permits as sort keys
	pub fn allowed_fields(&self) -> &[String] {
		&self.allowed_fields
	}

	/// The configured default ordering
	pub fn default_order(&self) -> &DefaultOrder {
		&self.default
	}

	/// Whether `field` may be sorted on
	pub fn allows(&self, field: &str) -> bool {
		self.allowed_fields.iter().any(|f| f == field)
	}

	/// Resolves a parsed sort state into the final entry sequence.
	///
	/// Entries naming fields outside the orderable set are dropped and
	/// logged, never surfaced: they are user-supplied request data. The
	/// default ordering is used as the sole entry when nothing valid
	/// remains, and appended after the explicit entries when `stable`.
	/// A stable default is appended unconditionally, even when its field
	/// already appears explicitly; deduplicating would change the emitted
	/// clause.
	///
	/// The only failure is a default field outside the orderable set,
	/// which is a configuration mistake and reported as such. It is
	/// checked here rather than at construction so configurations can be
	/// assembled in any order.
	pub fn resolve(&self, parsed: &[SortEntry]) -> Result<Vec<SortEntry>> {
		if !self.allows(&self.default.field) {
			return Err(ConfigError::DefaultFieldNotOrderable(
				self.default.field.clone(),
			));
		}

		let mut resolved: Vec<SortEntry> = parsed
			.iter()
			.filter(|entry| {
				let allowed = self.allows(&entry.field);
				if !allowed {
					tracing::debug!(field = %entry.field, "dropping unorderable sort field");
				}
				allowed
			})
			.cloned()
			.collect();

		if resolved.is_empty() || self.default.stable {
			resolved.push(SortEntry::new(&self.default.field, self.default.direction));
		}

		Ok(resolved)
	}
}

/// Builder for [`OrderableConfig`].
///
/// When neither [`only`] nor [`except`] is called, every seeded field is
/// orderable; when no default is picked, the first orderable field sorts
/// ascending by default.
///
/// [`only`]: Self::only
/// [`except`]: Self::except
#[derive(Debug, Clone)]
pub struct OrderableConfigBuilder {
	fields: Vec<String>,
	default: Option<(String, SortDirection)>,
	stable: bool,
}

impl OrderableConfigBuilder {
	/// Restricts the orderable set to exactly these fields
	pub fn only<I, S>(mut self, fields: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.fields = fields.into_iter().map(Into::into).collect();
		self
	}

	/// Removes fields from the orderable set
	pub fn except<I, S>(mut self, fields: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let excluded: Vec<String> = fields.into_iter().map(Into::into).collect();
		self.fields.retain(|field| !excluded.contains(field));
		self
	}

	/// Picks the default sort field and direction.
	///
	/// Membership of the field in the orderable set is validated lazily
	/// at first [`OrderableConfig::resolve`], not here.
	pub fn default_order(mut self, field: impl Into<String>, direction: SortDirection) -> Self {
		self.default = Some((field.into(), direction));
		self
	}

	/// Makes the default a stable tiebreaker appended to every
	/// resolution
	pub fn stable(mut self, stable: bool) -> Self {
		self.stable = stable;
		self
	}

	/// Finishes the configuration
	pub fn build(self) -> OrderableConfig {
		let (field, direction) = self.default.unwrap_or_else(|| {
			(
				self.fields.first().cloned().unwrap_or_default(),
				SortDirection::Ascending,
			)
		});
		OrderableConfig {
			allowed_fields: self.fields,
			default: DefaultOrder {
				field,
				direction,
				stable: self.stable,
			},
		}
	}
}

/// Process-wide configuration registry, populated during startup
static CONFIGS: RwLock<Option<HashMap<String, OrderableConfig>>> = RwLock::new(None);

/// Registers an entity type's orderable configuration.
///
/// Must be called during startup, before request handling begins.
/// Registering the same key twice is a configuration error; the registry
/// is immutable for the lifetime of the process.
pub fn register(entity_key: impl Into<String>, config: OrderableConfig) -> Result<()> {
	let key = entity_key.into();
	let mut configs = CONFIGS.write().unwrap();
	let configs = configs.get_or_insert_with(HashMap::new);
	if configs.contains_key(&key) {
		return Err(ConfigError::AlreadyRegistered(key));
	}
	tracing::debug!(entity = %key, "registered orderable configuration");
	configs.insert(key, config);
	Ok(())
}

/// Looks up an entity's registered configuration
pub fn config(entity_key: &str) -> Option<OrderableConfig> {
	CONFIGS
		.read()
		.unwrap()
		.as_ref()
		.and_then(|configs| configs.get(entity_key))
		.cloned()
}

/// Resolves a parsed sort state against an entity's registered
/// configuration.
///
/// See [`OrderableConfig::resolve`] for the resolution rules. Fails with
/// [`ConfigError::UnknownEntity`] when nothing was registered for the
/// key.
pub fn resolve(entity_key: &str, parsed: &[SortEntry]) -> Result<Vec<SortEntry>> {
	match config(entity_key) {
		Some(config) => config.resolve(parsed),
		None => Err(ConfigError::UnknownEntity(entity_key.to_string())),
	}
}

/// Builds the data-source ordering clause for a resolved entry sequence.
///
/// The output is the core's boundary with the data layer:
/// `"field1 ASC, field2 DESC"`, ready for an ORDER BY equivalent.
pub fn order_clause(entries: &[SortEntry]) -> String {
	entries
		.iter()
		.map(|entry| format!("{} {}", entry.field, entry.direction.as_sql_str()))
		.collect::<Vec<_>>()
		.join(", ")
}

/// Entity types that can be ordered from request parameters.
///
/// The trait ties an entity to its table key, which namespaces both its
/// sort parameters and its registry entry, and provides the end-to-end
/// shortcut from request parameters to ordering clause.
///
/// # Examples
///
/// ```rust
/// use listful_sort::{registry, Orderable, OrderableConfig, RequestParams, SortDirection};
///
/// struct User;
///
/// impl Orderable for User {
///     fn table_key() -> &'static str {
///         "users"
///     }
/// }
///
/// registry::register(
///     User::table_key(),
///     OrderableConfig::builder(["login", "first_name"])
///         .default_order("login", SortDirection::Descending)
///         .build(),
/// )
/// .unwrap();
///
/// let params = RequestParams::new();
/// let clause = User::ordered_from(&params).unwrap();
/// assert_eq!(clause.as_deref(), Some("login DESC"));
/// ```
pub trait Orderable {
	/// The table key namespacing this entity's sort parameters and
	/// registry entry
	fn table_key() -> &'static str;

	/// Derives the ordering clause for the current request.
	///
	/// Parses the entity's sort state out of `params`, resolves it
	/// against the registered configuration and returns the finished
	/// clause, or `None` when resolution produced no entries.
	fn ordered_from(params: &RequestParams) -> Result<Option<String>> {
		let parsed = codec::parse(params, Self::table_key());
		let resolved = resolve(Self::table_key(), &parsed)?;
		if resolved.is_empty() {
			Ok(None)
		} else {
			Ok(Some(order_clause(&resolved)))
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn users_config() -> OrderableConfig {
		OrderableConfig::builder(["login", "first_name"])
			.default_order("login", SortDirection::Descending)
			.build()
	}

	#[rstest]
	fn test_builder_only_narrows_fields() {
		let config = OrderableConfig::builder(["id", "login", "email"])
			.only(["login", "email"])
			.build();
		assert_eq!(config.allowed_fields(), ["login", "email"]);
	}

	#[rstest]
	fn test_builder_except_removes_fields() {
		let config = OrderableConfig::builder(["id", "login", "password_salt"])
			.except(["id", "password_salt"])
			.build();
		assert_eq!(config.allowed_fields(), ["login"]);
	}

	#[rstest]
	fn test_builder_default_falls_back_to_first_field() {
		let config = OrderableConfig::builder(["login", "email"]).build();
		let default = config.default_order();
		assert_eq!(default.field, "login");
		assert_eq!(default.direction, SortDirection::Ascending);
		assert!(!default.stable);
	}

	#[rstest]
	fn test_resolve_filters_unknown_fields() {
		let resolved = users_config()
			.resolve(&[
				SortEntry::ascending("first_name"),
				SortEntry::descending("password_salt"),
			])
			.unwrap();
		assert_eq!(resolved, vec![SortEntry::ascending("first_name")]);
	}

	#[rstest]
	fn test_resolve_empty_uses_default() {
		let resolved = users_config().resolve(&[]).unwrap();
		assert_eq!(resolved, vec![SortEntry::descending("login")]);
	}

	#[rstest]
	fn test_resolve_all_filtered_uses_default() {
		let resolved = users_config()
			.resolve(&[SortEntry::ascending("password_salt")])
			.unwrap();
		assert_eq!(resolved, vec![SortEntry::descending("login")]);
	}

	#[rstest]
	fn test_resolve_stable_appends_default() {
		let config = OrderableConfig::builder(["id", "name"])
			.default_order("id", SortDirection::Ascending)
			.stable(true)
			.build();

		let resolved = config.resolve(&[SortEntry::descending("name")]).unwrap();

		assert_eq!(
			resolved,
			vec![SortEntry::descending("name"), SortEntry::ascending("id")]
		);
	}

	#[rstest]
	fn test_resolve_stable_default_not_deduplicated() {
		let config = OrderableConfig::builder(["id", "name"])
			.default_order("id", SortDirection::Ascending)
			.stable(true)
			.build();

		let resolved = config.resolve(&[SortEntry::descending("id")]).unwrap();

		assert_eq!(
			resolved,
			vec![SortEntry::descending("id"), SortEntry::ascending("id")]
		);
	}

	#[rstest]
	fn test_resolve_rejects_default_outside_orderable_set() {
		let config = OrderableConfig::builder(["login"])
			.default_order("created_at", SortDirection::Ascending)
			.build();

		let err = config.resolve(&[]).unwrap_err();

		assert_eq!(
			err,
			ConfigError::DefaultFieldNotOrderable("created_at".to_string())
		);
	}

	#[rstest]
	fn test_order_clause_joins_with_sql_directions() {
		let entries = vec![
			SortEntry::descending("last_name"),
			SortEntry::ascending("first_name"),
		];
		assert_eq!(order_clause(&entries), "last_name DESC, first_name ASC");
	}

	#[rstest]
	fn test_order_clause_empty_is_empty() {
		assert_eq!(order_clause(&[]), "");
	}

	#[rstest]
	fn test_register_twice_is_an_error() {
		// Registry is process-wide; use a key unique to this test.
		let key = "registry_test_register_twice";
		register(key, users_config()).unwrap();

		let err = register(key, users_config()).unwrap_err();

		assert_eq!(err, ConfigError::AlreadyRegistered(key.to_string()));
	}

	#[rstest]
	fn test_resolve_unknown_entity_is_an_error() {
		let err = resolve("registry_test_never_registered", &[]).unwrap_err();
		assert_eq!(
			err,
			ConfigError::UnknownEntity("registry_test_never_registered".to_string())
		);
	}
}
