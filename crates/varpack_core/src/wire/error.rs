use thiserror::Error;

use crate::wire::DataType;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, WireError>;

/// Errors produced while building, copying, packing, and unpacking values.
#[derive(Debug, Error)]
pub enum WireError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Caller passed a missing or malformed argument.
	#[error("bad parameter: {reason}")]
	BadParam {
		/// Short description of the violated precondition.
		reason: &'static str,
	},
	/// Allocation of a payload or buffer region failed.
	#[error("out of memory (requested {requested} bytes)")]
	OutOfMemory {
		/// Number of bytes that could not be reserved.
		requested: usize,
	},
	/// Type tag has no value representation or no handler.
	#[error("unknown data type {ty}")]
	UnknownDataType {
		/// Offending type tag.
		ty: DataType,
	},
	/// Operation requires at least one element.
	#[error("empty")]
	Empty,
	/// Collaborator does not support the requested operation.
	#[error("not supported: {what}")]
	NotSupported {
		/// Operation or payload kind.
		what: &'static str,
	},
	/// Collaborator has not been initialized yet.
	#[error("not initialized: {what}")]
	NotInitialized {
		/// Subsystem that is not ready.
		what: &'static str,
	},
	/// Unpack needed more bytes than were packed.
	#[error("unpack read past end of buffer: need {need} bytes, remaining {rem}")]
	ReadPastEnd {
		/// Requested bytes.
		need: usize,
		/// Unread bytes left in the buffer.
		rem: usize,
	},
	/// Stored type tag does not match the requested one.
	#[error("pack mismatch: expected {expected}, got {got}")]
	PackMismatch {
		/// Type the caller asked for.
		expected: DataType,
		/// Type found in the buffer.
		got: DataType,
	},
	/// Packed count exceeds the caller's capacity.
	#[error("unpack inadequate space: count={count}, max={max}")]
	InadequateSpace {
		/// Count stored in the buffer.
		count: usize,
		/// Maximum the caller accepts.
		max: usize,
	},
	/// Packed element count was negative.
	#[error("negative element count {count}")]
	NegativeCount {
		/// Parsed signed count.
		count: i32,
	},
	/// Registry slot is already occupied.
	#[error("type {ty} already registered as {name}")]
	TypeAlreadyRegistered {
		/// Requested tag.
		ty: DataType,
		/// Name of the existing registration.
		name: String,
	},
	/// Registry has no operations for a tag.
	#[error("no operations registered for type {ty}")]
	UnregisteredType {
		/// Requested tag.
		ty: DataType,
	},
	/// Nested arrays exceeded the configured depth.
	#[error("nesting depth exceeded (max={max_depth})")]
	DepthExceeded {
		/// Configured depth ceiling.
		max_depth: u32,
	},
	/// Decompression output exceeded configured safety limit.
	#[error("decompressed output exceeded limit {limit} bytes")]
	DecompressedTooLarge {
		/// Maximum allowed output bytes.
		limit: usize,
	},
	/// Packed text was not valid UTF-8.
	#[error("invalid utf-8 in {what}")]
	InvalidUtf8 {
		/// Field being decoded.
		what: &'static str,
	},
	/// Configuration value could not be parsed or is out of range.
	#[error("invalid config value for {key}: {value}")]
	InvalidConfig {
		/// Setting name.
		key: &'static str,
		/// Rejected value.
		value: String,
	},
}

impl WireError {
	/// Return `true` for collaborator errors that permit falling back to aliasing.
	pub fn is_not_ready(&self) -> bool {
		matches!(self, Self::NotInitialized { .. } | Self::NotSupported { .. })
	}
}
