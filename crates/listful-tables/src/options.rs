//! List-level rendering options

/// Options for a semantic list's outer element and identity.
///
/// The object name identifies the entity type being listed; the table
/// name (its plural by default) namespaces the list's sort parameters
/// and registry entry. A list without an object name still renders, but
/// its sortable column links are no-ops.
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
	pub(crate) as_name: Option<String>,
	pub(crate) table_name: Option<String>,
	pub(crate) id: Option<String>,
	pub(crate) class: Option<String>,
	pub(crate) sort_url: Option<String>,
	pub(crate) selectable: bool,
	pub(crate) expandable: bool,
}

impl ListOptions {
	/// Creates empty options
	pub fn new() -> Self {
		Self::default()
	}

	/// Names the entity type being listed (singular)
	pub fn as_name(mut self, name: impl Into<String>) -> Self {
		self.as_name = Some(name.into());
		self
	}

	/// Overrides the table key; defaults to the pluralized object name
	pub fn table_name(mut self, name: impl Into<String>) -> Self {
		self.table_name = Some(name.into());
		self
	}

	/// Sets the outer element's id; defaults to the object name
	pub fn id(mut self, id: impl Into<String>) -> Self {
		self.id = Some(id.into());
		self
	}

	/// Adds extra classes to the outer element
	pub fn class(mut self, class: impl Into<String>) -> Self {
		self.class = Some(class.into());
		self
	}

	/// Marks the list sortable and records the URL sort requests post to
	pub fn sort_url(mut self, url: impl Into<String>) -> Self {
		self.sort_url = Some(url.into());
		self
	}

	/// Marks the list rows selectable
	pub fn selectable(mut self, selectable: bool) -> Self {
		self.selectable = selectable;
		self
	}

	/// Marks the list rows expandable
	pub fn expandable(mut self, expandable: bool) -> Self {
		self.expandable = expandable;
		self
	}

	/// The object name, empty when never set
	pub(crate) fn object_name(&self) -> &str {
		self.as_name.as_deref().unwrap_or("")
	}

	/// The table key: explicit override or pluralized object name
	pub(crate) fn resolved_table_name(&self) -> String {
		match &self.table_name {
			Some(name) => name.clone(),
			None => pluralize(self.object_name()),
		}
	}
}

/// Naive English pluralization, enough for conventional table keys
pub(crate) fn pluralize(word: &str) -> String {
	if word.is_empty() {
		return String::new();
	}
	if let Some(stem) = word.strip_suffix('y') {
		let before = stem.chars().last();
		if !matches!(before, Some('a' | 'e' | 'i' | 'o' | 'u')) {
			return format!("{stem}ies");
		}
	}
	if ["s", "x", "z", "ch", "sh"]
		.iter()
		.any(|suffix| word.ends_with(suffix))
	{
		return format!("{word}es");
	}
	format!("{word}s")
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("user", "users")]
	#[case("category", "categories")]
	#[case("day", "days")]
	#[case("address", "addresses")]
	#[case("box", "boxes")]
	#[case("match", "matches")]
	#[case("", "")]
	fn test_pluralize(#[case] word: &str, #[case] expected: &str) {
		assert_eq!(pluralize(word), expected);
	}

	#[rstest]
	fn test_table_name_defaults_to_plural_object_name() {
		let options = ListOptions::new().as_name("user");
		assert_eq!(options.resolved_table_name(), "users");
	}

	#[rstest]
	fn test_table_name_override_wins() {
		let options = ListOptions::new().as_name("user").table_name("accounts");
		assert_eq!(options.resolved_table_name(), "accounts");
	}
}
