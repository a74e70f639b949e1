use std::ops::Deref;
use std::sync::Arc;

use crate::wire::{Result, WireError};

/// Serialized hardware topology handed over by the topology collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Topology {
	/// Name of the producing library.
	pub source: String,
	/// Opaque topology description (typically XML).
	pub data: Vec<u8>,
}

/// Cpu binding mask of a process.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Cpuset {
	/// Name of the producing library.
	pub source: String,
	/// Bitmap of bound processing units.
	pub mask: Vec<u8>,
}

/// Payload that is either owned by the value or aliased from external memory.
#[derive(Debug)]
pub enum Held<T> {
	/// Deep copy owned and released by the value.
	Owned(Box<T>),
	/// Shared handle to memory owned elsewhere; dropping it never releases the target.
	Aliased(Arc<T>),
}

impl<T> Held<T> {
	/// Wrap an owned payload.
	pub fn owned(item: T) -> Self {
		Self::Owned(Box::new(item))
	}

	/// Return `true` when the payload is an alias.
	pub fn is_aliased(&self) -> bool {
		matches!(self, Self::Aliased(_))
	}

	/// Return the shared handle when aliased.
	pub fn alias(&self) -> Option<&Arc<T>> {
		match self {
			Self::Owned(_) => None,
			Self::Aliased(item) => Some(item),
		}
	}
}

impl<T> Deref for Held<T> {
	type Target = T;

	fn deref(&self) -> &T {
		match self {
			Self::Owned(item) => item,
			Self::Aliased(item) => item,
		}
	}
}

impl<T: Default> Default for Held<T> {
	fn default() -> Self {
		Self::Owned(Box::default())
	}
}

impl<T: PartialEq> PartialEq for Held<T> {
	fn eq(&self, other: &Self) -> bool {
		**self == **other
	}
}

/// Deep-copy and release hooks of the hardware-topology collaborator.
pub trait TopologySupport: Send + Sync {
	/// Produce an independent copy of a topology.
	fn copy_topology(&self, src: &Topology) -> Result<Topology>;
	/// Release a topology previously copied by this collaborator.
	fn release_topology(&self, topology: Topology);
	/// Produce an independent copy of a cpuset.
	fn copy_cpuset(&self, src: &Cpuset) -> Result<Cpuset>;
	/// Release a cpuset previously copied by this collaborator.
	fn release_cpuset(&self, cpuset: Cpuset);
}

/// Topology support backed by plain clones.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalTopology;

impl TopologySupport for LocalTopology {
	fn copy_topology(&self, src: &Topology) -> Result<Topology> {
		Ok(src.clone())
	}

	fn release_topology(&self, topology: Topology) {
		drop(topology);
	}

	fn copy_cpuset(&self, src: &Cpuset) -> Result<Cpuset> {
		Ok(src.clone())
	}

	fn release_cpuset(&self, cpuset: Cpuset) {
		drop(cpuset);
	}
}

/// Topology support before the hardware library is initialized.
///
/// Every copy reports [`WireError::NotInitialized`], which makes callers alias instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct DetachedTopology;

impl TopologySupport for DetachedTopology {
	fn copy_topology(&self, _src: &Topology) -> Result<Topology> {
		Err(WireError::NotInitialized { what: "topology" })
	}

	fn release_topology(&self, topology: Topology) {
		drop(topology);
	}

	fn copy_cpuset(&self, _src: &Cpuset) -> Result<Cpuset> {
		Err(WireError::NotInitialized { what: "cpuset" })
	}

	fn release_cpuset(&self, cpuset: Cpuset) {
		drop(cpuset);
	}
}

/// Copy hooks of the node-regex compiler used by `REGEX` values.
pub trait PatternSupport: Send + Sync {
	/// Compile or copy `pattern` into its packed byte form.
	fn copy(&self, pattern: &str) -> Result<Vec<u8>>;
	/// Release bytes produced by [`PatternSupport::copy`].
	fn release(&self, bytes: Vec<u8>);
}

/// Pattern support that stores the pattern text verbatim, NUL-terminated.
#[derive(Debug, Clone, Copy, Default)]
pub struct LiteralPatterns;

impl PatternSupport for LiteralPatterns {
	fn copy(&self, pattern: &str) -> Result<Vec<u8>> {
		let mut out = Vec::new();
		out.try_reserve_exact(pattern.len() + 1).map_err(|_| WireError::OutOfMemory {
			requested: pattern.len() + 1,
		})?;
		out.extend_from_slice(pattern.as_bytes());
		out.push(0);
		Ok(out)
	}

	fn release(&self, bytes: Vec<u8>) {
		drop(bytes);
	}
}
