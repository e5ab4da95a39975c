//! # Listful
//!
//! Semantic HTML list rendering with query-parameter sort state.
//!
//! Listful renders record collections as semantic tables and manages the
//! column sort links bound to request query parameters. It is split in
//! two:
//!
//! - [`sort`] — the sort-state codec (parse / toggle / encode the
//!   `order[<table>][]` parameters) and the orderable-fields registry
//!   that turns untrusted sort state into a data-source ordering clause.
//! - [`tables`] — the semantic table builder rendering head/body/foot
//!   column groups with sortable header links (feature `tables`, on by
//!   default).
//!
//! ## Design
//!
//! Request data never errors: malformed sort tokens and unknown fields
//! degrade silently. Misconfiguration fails loudly at setup or first
//! use. Everything is a pure, synchronous computation over passed-in
//! data; the only process-wide state is the orderable-config registry,
//! populated once during startup.
//!
//! ## Example
//!
//! ```rust
//! use listful::sort::{codec, registry, Orderable, OrderableConfig, RequestParams, SortDirection};
//!
//! struct User;
//!
//! impl Orderable for User {
//!     fn table_key() -> &'static str {
//!         "users"
//!     }
//! }
//!
//! registry::register(
//!     User::table_key(),
//!     OrderableConfig::builder(["login", "first_name"])
//!         .default_order("login", SortDirection::Descending)
//!         .build(),
//! )
//! .unwrap();
//!
//! let params = RequestParams::from_query_str("order%5Busers%5D%5B%5D=first_name%3Aasc");
//! assert_eq!(
//!     User::ordered_from(&params).unwrap().as_deref(),
//!     Some("first_name ASC"),
//! );
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub use listful_sort as sort;

#[cfg(feature = "tables")]
pub use listful_tables as tables;
