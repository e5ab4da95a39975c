//! Query-parameter sort state for semantic lists
//!
//! This crate implements the sort half of listful: a small deterministic
//! state machine for column sort state carried in URL query parameters,
//! plus the per-entity configuration that turns that state into a
//! data-source ordering clause.
//!
//! Sort state travels in query parameters shaped like
//! `order[<table>][]=<field>:<direction>`, one repeatable list item per
//! table key. The [`codec`] module parses that shape, toggles a column's
//! direction for link generation and re-encodes the result; the
//! [`registry`] module validates the parsed state against an entity's
//! [`OrderableConfig`] and emits the final `"field ASC, field DESC"`
//! clause.
//!
//! Request data is untrusted: malformed tokens and unknown fields degrade
//! silently (logged at debug level), they never error. Misconfiguration,
//! on the other hand, fails loudly with a [`ConfigError`].
//!
//! # Example
//!
//! ```rust
//! use listful_sort::{codec, registry, OrderableConfig, RequestParams, SortDirection};
//!
//! let config = OrderableConfig::builder(["login", "first_name", "last_name"])
//!     .default_order("login", SortDirection::Descending)
//!     .build();
//!
//! let params = RequestParams::from_query_str("order%5Busers%5D%5B%5D=first_name%3Aasc");
//! let entries = codec::parse(&params, "users");
//! let resolved = config.resolve(&entries).unwrap();
//!
//! assert_eq!(registry::order_clause(&resolved), "first_name ASC");
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod codec;
pub mod direction;
pub mod entry;
pub mod error;
pub mod params;
pub mod registry;

// Re-exports for convenience
pub use direction::SortDirection;
pub use entry::SortEntry;
pub use error::{ConfigError, Result};
pub use params::RequestParams;
pub use registry::{Orderable, OrderableConfig, OrderableConfigBuilder};
