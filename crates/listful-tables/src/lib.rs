//! Semantic HTML table rendering for listful
//!
//! Renders record collections as semantic `<table>` markup: column
//! groups, alternating row classes, row controls and sortable column
//! headers. The sort state itself — parsing, toggling and re-encoding
//! the `order[<table>][]` query parameters — lives in `listful-sort`;
//! this crate wires it into anchor tags.
//!
//! # Example
//!
//! ```rust
//! use listful_sort::RequestParams;
//! use listful_tables::{Column, ListOptions, SemanticList};
//!
//! struct User {
//!     login: String,
//!     email: String,
//! }
//!
//! let users = vec![User {
//!     login: "ada".to_string(),
//!     email: "ada@example.com".to_string(),
//! }];
//!
//! let html = SemanticList::new(
//!     &users,
//!     RequestParams::from_query_str("page=1"),
//!     ListOptions::new().as_name("user").class("user-list"),
//! )
//! .column(Column::new(|u: &User, _| u.login.clone()).title("Login").sort("login"))
//! .column(Column::new(|u: &User, _| u.email.clone()).title("Email"))
//! .render()
//! .unwrap();
//!
//! assert!(html.contains("semantic-list"));
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod builder;
pub mod error;
pub mod markup;
pub mod options;

// Re-exports for convenience
pub use builder::{Column, ColumnGroup, SemanticList};
pub use error::{Result, TableError};
pub use markup::Tag;
pub use options::ListOptions;
