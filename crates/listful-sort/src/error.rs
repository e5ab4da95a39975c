//! Error types for orderable configuration
//!
//! Only misconfiguration is an error in this crate. Request data is
//! untrusted and degrades silently; see the crate docs.

use thiserror::Error;

/// Result type for configuration and resolution operations
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Orderable configuration errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
	/// No orderable configuration has been registered for the entity.
	#[error("no orderable configuration registered for entity '{0}'")]
	UnknownEntity(String),

	/// The entity was registered a second time. Configurations are
	/// immutable for the lifetime of the process.
	#[error("entity '{0}' already has an orderable configuration")]
	AlreadyRegistered(String),

	/// The configured default sort field is not part of the orderable
	/// set. Detected lazily at first resolution.
	#[error("default sort field '{0}' is not orderable")]
	DefaultFieldNotOrderable(String),
}
