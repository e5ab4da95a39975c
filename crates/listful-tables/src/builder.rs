//! The semantic table builder
//!
//! Renders a record collection as a `<table>` with `thead`/`tbody`/
//! `tfoot` column groups, alternating row classes and sortable header
//! links whose hrefs carry the toggled sort state.

use listful_sort::{RequestParams, SortEntry, codec, registry};

use crate::error::{Result, TableError};
use crate::markup::Tag;
use crate::options::ListOptions;

/// The column groups of a rendered table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnGroup {
	/// `<thead>` with one header row of column titles
	Head,
	/// `<tbody>` with one row per record
	Body,
	/// `<tfoot>` mirroring the column titles
	Foot,
}

/// Renders one body cell for a record and its index
type CellRenderer<T> = Box<dyn Fn(&T, usize) -> String>;

/// A full-width row rendered after each record's row
struct AuxRow<T> {
	renderer: CellRenderer<T>,
	class: &'static str,
}

enum ColumnKind {
	/// A regular data column
	Field,
	/// Row controls (edit/delete links); renders an empty header cell
	Controls,
}

/// One column of a semantic list.
///
/// The renderer produces the body cell markup for a record; the title is
/// what head and foot rows display. A `sort` field wraps the title in a
/// sortable link.
///
/// # Examples
///
/// ```rust
/// use listful_tables::Column;
///
/// struct User {
///     first_name: String,
///     last_name: String,
/// }
///
/// let column = Column::new(|user: &User, _| {
///     format!("{} {}", user.first_name, user.last_name)
/// })
/// .title("User Name")
/// .sort("first_name")
/// .width("20%");
/// ```
pub struct Column<T> {
	title: Option<String>,
	sort: Option<String>,
	width: Option<String>,
	kind: ColumnKind,
	renderer: CellRenderer<T>,
}

impl<T> Column<T> {
	/// Creates a column from its body cell renderer
	pub fn new(renderer: impl Fn(&T, usize) -> String + 'static) -> Self {
		Self {
			title: None,
			sort: None,
			width: None,
			kind: ColumnKind::Field,
			renderer: Box::new(renderer),
		}
	}

	/// Sets the title shown in head and foot rows
	pub fn title(mut self, title: impl Into<String>) -> Self {
		self.title = Some(title.into());
		self
	}

	/// Makes the column sortable on the given field
	pub fn sort(mut self, field: impl Into<String>) -> Self {
		self.sort = Some(field.into());
		self
	}

	/// Sets the column width attribute
	pub fn width(mut self, width: impl Into<String>) -> Self {
		self.width = Some(width.into());
		self
	}
}

/// Builder for a semantic HTML table over a record collection.
///
/// # Examples
///
/// ```rust
/// use listful_sort::RequestParams;
/// use listful_tables::{Column, ListOptions, SemanticList};
///
/// struct User {
///     login: String,
/// }
///
/// let users = vec![User { login: "ada".to_string() }];
/// let html = SemanticList::new(&users, RequestParams::new(), ListOptions::new().as_name("user"))
///     .column(Column::new(|u: &User, _| u.login.clone()).title("Login").sort("login"))
///     .render()
///     .unwrap();
///
/// assert!(html.starts_with("<table id=\"user\" class=\"semantic-list\">"));
/// ```
pub struct SemanticList<'a, T> {
	collection: &'a [T],
	params: RequestParams,
	options: ListOptions,
	columns: Vec<Column<T>>,
	aux_row: Option<AuxRow<T>>,
	group_key: Option<Box<dyn Fn(&T) -> String>>,
	groups: Vec<ColumnGroup>,
}

impl<'a, T> SemanticList<'a, T> {
	/// Creates a builder over a collection and the current request's
	/// parameters
	pub fn new(collection: &'a [T], params: RequestParams, options: ListOptions) -> Self {
		Self {
			collection,
			params,
			options,
			columns: Vec::new(),
			aux_row: None,
			group_key: None,
			groups: vec![ColumnGroup::Head, ColumnGroup::Body],
		}
	}

	/// Appends a column
	pub fn column(mut self, column: Column<T>) -> Self {
		self.columns.push(column);
		self
	}

	/// Appends a controls column: body-only row controls with an empty
	/// header cell
	pub fn controls(mut self, renderer: impl Fn(&T, usize) -> String + 'static) -> Self {
		let mut column = Column::new(renderer);
		column.kind = ColumnKind::Controls;
		self.columns.push(column);
		self
	}

	/// Adds a full-width extra row rendered after each record's row.
	///
	/// The row spans all columns and is skipped for records where the
	/// renderer returns an empty string. A list has one auxiliary row
	/// slot; this replaces any earlier [`extra`] or [`full_column`].
	///
	/// [`extra`]: Self::extra
	/// [`full_column`]: Self::full_column
	pub fn extra(mut self, renderer: impl Fn(&T, usize) -> String + 'static) -> Self {
		self.aux_row = Some(AuxRow {
			renderer: Box::new(renderer),
			class: "extra",
		});
		self
	}

	/// Adds a full-width column row rendered after each record's row.
	///
	/// Same colspan mechanics as [`extra`], classed `full-column`
	/// instead, for content that belongs to the record rather than
	/// alongside it.
	///
	/// [`extra`]: Self::extra
	pub fn full_column(mut self, renderer: impl Fn(&T, usize) -> String + 'static) -> Self {
		self.aux_row = Some(AuxRow {
			renderer: Box::new(renderer),
			class: "full-column",
		});
		self
	}

	/// Re-inserts the header row whenever the key changes between
	/// consecutive records
	pub fn grouped_by(mut self, key: impl Fn(&T) -> String + 'static) -> Self {
		self.group_key = Some(Box::new(key));
		self
	}

	/// Overrides which column groups are rendered, in order.
	///
	/// Defaults to head then body.
	pub fn with_groups(mut self, groups: &[ColumnGroup]) -> Self {
		self.groups = groups.to_vec();
		self
	}

	/// Renders the table.
	///
	/// Fails only on usage errors; request-derived sort state can never
	/// make rendering fail.
	pub fn render(&self) -> Result<String> {
		if self.columns.is_empty() {
			return Err(TableError::NoColumns);
		}
		if self.columns.iter().any(|c| c.sort.as_deref() == Some("")) {
			return Err(TableError::EmptySortField);
		}

		let mut content = String::new();
		for group in &self.groups {
			match group {
				ColumnGroup::Head => content.push_str(&self.render_head()),
				ColumnGroup::Body => content.push_str(&self.render_body()),
				ColumnGroup::Foot => content.push_str(&self.render_foot()),
			}
		}

		let mut table = Tag::new("table");
		if let Some(id) = self.options.id.as_deref().or(self.options.as_name.as_deref()) {
			table = table.attr("id", id);
		}
		table = table.class("semantic-list");
		if let Some(url) = &self.options.sort_url {
			table = table.class("sortable").attr("data-sorturl", url.as_str());
		}
		if self.options.selectable {
			table = table.class("selectable");
		}
		if self.options.expandable {
			table = table.class("expandable");
		}
		if let Some(class) = &self.options.class {
			table = table.class(class);
		}
		Ok(table.content(content).render())
	}

	fn header_row(&self) -> String {
		let mut row = String::new();
		for column in &self.columns {
			let title = match column.kind {
				ColumnKind::Field => column.title.clone().unwrap_or_default(),
				ColumnKind::Controls => String::new(),
			};
			let contents = match &column.sort {
				Some(field) => self.sortable_link(&title, field),
				None => title,
			};
			let mut cell = Tag::new("th");
			if let Some(width) = &column.width {
				cell = cell.attr("width", width);
			}
			row.push_str(&cell.content(contents).render());
		}
		Tag::new("tr").class("header").content(row).render()
	}

	fn render_head(&self) -> String {
		Tag::new("thead").content(self.header_row()).render()
	}

	fn render_body(&self) -> String {
		if self.collection.is_empty() {
			return String::new();
		}

		let mut rows = String::new();
		let mut last_group: Option<String> = None;
		for (index, record) in self.collection.iter().enumerate() {
			if let Some(key) = &self.group_key {
				let group = key(record);
				if last_group.as_deref() != Some(group.as_str()) {
					rows.push_str(&self.header_row());
				}
				last_group = Some(group);
			}

			let cycle = if index % 2 == 0 { "even" } else { "odd" };
			let mut cells = String::new();
			for column in &self.columns {
				let mut cell = Tag::new("td");
				if matches!(column.kind, ColumnKind::Controls) {
					cell = cell.class("controls");
				}
				cells.push_str(&cell.content((column.renderer)(record, index)).render());
			}
			rows.push_str(&Tag::new("tr").class(cycle).content(cells).render());

			if let Some(aux) = &self.aux_row {
				let contents = (aux.renderer)(record, index);
				if !contents.is_empty() {
					let cell = Tag::new("td")
						.attr("colspan", self.columns.len().to_string())
						.class(aux.class)
						.content(contents);
					rows.push_str(&Tag::new("tr").class(cycle).content(cell.render()).render());
				}
			}
		}
		Tag::new("tbody").content(rows).render()
	}

	fn render_foot(&self) -> String {
		let mut row = String::new();
		for column in &self.columns {
			let title = match column.kind {
				ColumnKind::Field => column.title.clone().unwrap_or_default(),
				ColumnKind::Controls => String::new(),
			};
			let contents = match &column.sort {
				Some(field) => self.sortable_link(&title, field),
				None => title,
			};
			row.push_str(&Tag::new("th").content(contents).render());
		}
		Tag::new("tfoot")
			.content(Tag::new("tr").content(row).render())
			.render()
	}

	/// Wraps column contents in a sort-toggling anchor.
	///
	/// A list without an object name cannot namespace its sort state, so
	/// the contents pass through untouched. When no sort state is
	/// present and the column is the entity's registered default, the
	/// default direction counts as the current one, so the first click
	/// flips it and the link is styled as active.
	fn sortable_link(&self, contents: &str, field: &str) -> String {
		if self.options.object_name().is_empty() {
			tracing::debug!(field, "list has no object name, sort link skipped");
			return contents.to_string();
		}
		let table_name = self.options.resolved_table_name();

		let mut entries = codec::parse(&self.params, &table_name);
		if entries.is_empty()
			&& let Some(config) = registry::config(&table_name)
		{
			let default = config.default_order();
			if default.field == field {
				entries.push(SortEntry::new(field, default.direction));
			}
		}

		let toggled = codec::toggle(&entries, field);
		let next_params = codec::encode(&self.params, &table_name, &toggled);
		let css = codec::css_state_token(&entries, field);

		Tag::new("a")
			.attr("href", format!("?{}", next_params.to_query_string()))
			.class(css)
			.content(contents)
			.render()
	}
}
