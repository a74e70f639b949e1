use std::path::PathBuf;

use thiserror::Error;
use varpack::wire::{DataType, WireError};

/// Error type for `varpack` commands.
#[derive(Debug, Error)]
pub enum CliError {
	/// Engine, buffer, or codec failure.
	#[error(transparent)]
	Wire(#[from] WireError),
	/// File could not be read or written.
	#[error("{path}: {source}")]
	Io {
		/// File involved.
		path: PathBuf,
		/// Underlying I/O error.
		source: std::io::Error,
	},
	/// JSON document could not be parsed.
	#[error("{path}: invalid json: {source}")]
	Json {
		/// Document involved.
		path: PathBuf,
		/// Underlying parse error.
		source: serde_json::Error,
	},
	/// File is not a packed info list.
	#[error("not a varpack file: {reason}")]
	BadFile {
		/// Description of the mismatch.
		reason: &'static str,
	},
	/// Type name is neither a built-in name nor a numeric tag.
	#[error("unknown type name {name:?}")]
	UnknownType {
		/// Name as written.
		name: String,
	},
	/// Type has no JSON mapping.
	#[error("type {ty} cannot be written as json")]
	UnsupportedType {
		/// Requested tag.
		ty: DataType,
	},
	/// JSON value does not fit the declared type.
	#[error("info {key:?}: {reason}")]
	BadValue {
		/// Info key.
		key: String,
		/// What did not fit.
		reason: String,
	},
}

/// Result alias used by command handlers.
pub type Result<T> = std::result::Result<T, CliError>;
