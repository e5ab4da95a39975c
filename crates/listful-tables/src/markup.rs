//! Minimal string-rendering markup builder
//!
//! A fluent tag builder producing HTML strings. Attribute values are
//! escaped on render; tag contents are taken as already-rendered markup,
//! use [`escape`] for plain text.

/// An HTML element under construction
///
/// # Examples
///
/// ```rust
/// use listful_tables::markup::Tag;
///
/// let html = Tag::new("td")
///     .class("controls")
///     .attr("colspan", "2")
///     .content("<a href=\"/edit\">edit</a>")
///     .render();
///
/// assert_eq!(
///     html,
///     "<td class=\"controls\" colspan=\"2\"><a href=\"/edit\">edit</a></td>"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Tag {
	name: String,
	attributes: Vec<(String, String)>,
	content: String,
}

impl Tag {
	/// Starts a new element
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			attributes: Vec::new(),
			content: String::new(),
		}
	}

	/// Sets an attribute, keeping insertion order
	pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.attributes.push((name.into(), value.into()));
		self
	}

	/// Appends a class name to the `class` attribute, space-separated
	pub fn class(mut self, class: &str) -> Self {
		if class.is_empty() {
			return self;
		}
		match self.attributes.iter_mut().find(|(name, _)| name == "class") {
			Some((_, value)) => {
				value.push(' ');
				value.push_str(class);
			}
			None => self.attributes.push(("class".to_string(), class.to_string())),
		}
		self
	}

	/// Sets the inner markup
	pub fn content(mut self, content: impl Into<String>) -> Self {
		self.content = content.into();
		self
	}

	/// Renders the element with attribute values escaped
	pub fn render(&self) -> String {
		let mut html = String::new();
		html.push('<');
		html.push_str(&self.name);
		for (name, value) in &self.attributes {
			html.push(' ');
			html.push_str(name);
			html.push_str("=\"");
			html.push_str(&escape(value));
			html.push('"');
		}
		html.push('>');
		html.push_str(&self.content);
		html.push_str("</");
		html.push_str(&self.name);
		html.push('>');
		html
	}
}

/// Escapes plain text for use in HTML content or attribute values
pub fn escape(text: &str) -> String {
	let mut escaped = String::with_capacity(text.len());
	for c in text.chars() {
		match c {
			'&' => escaped.push_str("&amp;"),
			'<' => escaped.push_str("&lt;"),
			'>' => escaped.push_str("&gt;"),
			'"' => escaped.push_str("&quot;"),
			_ => escaped.push(c),
		}
	}
	escaped
}
