use std::sync::Arc;

use crate::wire::{
	ArrayItems, Buffer, Coord, Cpuset, DataArray, DeviceDistance, DiskStats, Endpoint, Engine, Envar, Geometry, Held, Kval, NetStats, NodeStats, Proc,
	ProcInfo, ProcStats, RegAttr, Result, Topology, Value, WireError,
};

/// Copy context: engine collaborators plus the current nesting depth.
pub(crate) struct CopyCx<'e> {
	pub(crate) engine: &'e Engine,
	depth: u32,
}

impl<'e> CopyCx<'e> {
	pub(crate) fn new(engine: &'e Engine) -> Self {
		Self { engine, depth: 0 }
	}

	fn nested(&self) -> Result<Self> {
		let max_depth = self.engine.config().max_depth;
		if self.depth >= max_depth {
			return Err(WireError::DepthExceeded { max_depth });
		}
		Ok(Self {
			engine: self.engine,
			depth: self.depth + 1,
		})
	}
}

/// Independent copy of a payload, following its ownership rules.
pub(crate) trait Duplicate: Sized {
	fn duplicate(&self, cx: &CopyCx<'_>) -> Result<Self>;
}

pub(crate) fn copy_bytes(src: &[u8]) -> Result<Vec<u8>> {
	let mut out = Vec::new();
	out.try_reserve_exact(src.len()).map_err(|_| WireError::OutOfMemory { requested: src.len() })?;
	out.extend_from_slice(src);
	Ok(out)
}

pub(crate) fn copy_string(src: &str) -> Result<String> {
	let mut out = String::new();
	out.try_reserve_exact(src.len()).map_err(|_| WireError::OutOfMemory { requested: src.len() })?;
	out.push_str(src);
	Ok(out)
}

macro_rules! duplicate_by_clone {
	($($ty:ty),* $(,)?) => {
		$(
			impl Duplicate for $ty {
				fn duplicate(&self, _cx: &CopyCx<'_>) -> Result<Self> {
					Ok(self.clone())
				}
			}
		)*
	};
}

duplicate_by_clone!(Proc, ProcInfo, Envar, Coord, Geometry, DeviceDistance, Endpoint, RegAttr, ProcStats, DiskStats, NetStats, NodeStats);

impl Duplicate for Buffer {
	fn duplicate(&self, _cx: &CopyCx<'_>) -> Result<Self> {
		self.copy_unread()
	}
}

impl<T: Duplicate> Duplicate for Box<T> {
	fn duplicate(&self, cx: &CopyCx<'_>) -> Result<Self> {
		Ok(Box::new((**self).duplicate(cx)?))
	}
}

impl<T: Duplicate> Duplicate for Vec<T> {
	fn duplicate(&self, cx: &CopyCx<'_>) -> Result<Self> {
		let mut out = Vec::new();
		out.try_reserve_exact(self.len()).map_err(|_| WireError::OutOfMemory {
			requested: self.len().saturating_mul(size_of::<T>()),
		})?;
		for item in self {
			out.push(item.duplicate(cx)?);
		}
		Ok(out)
	}
}

impl Duplicate for Kval {
	fn duplicate(&self, cx: &CopyCx<'_>) -> Result<Self> {
		Ok(Self {
			key: copy_string(&self.key)?,
			value: self.value.duplicate(cx)?,
		})
	}
}

impl Duplicate for DataArray {
	fn duplicate(&self, cx: &CopyCx<'_>) -> Result<Self> {
		let cx = cx.nested()?;
		let items = match &self.items {
			ArrayItems::Values(items) => ArrayItems::Values(items.duplicate(&cx)?),
			ArrayItems::Infos(items) => ArrayItems::Infos(items.duplicate(&cx)?),
			ArrayItems::Kvals(items) => ArrayItems::Kvals(items.duplicate(&cx)?),
			ArrayItems::Arrays(items) => ArrayItems::Arrays(items.duplicate(&cx)?),
		};
		Ok(Self { ty: self.ty, items })
	}
}

/// Resolve a collaborator copy, falling back to the source handle when the collaborator is not ready.
fn held_fallback<T: Clone>(src: &Held<T>, copied: Result<T>, what: &'static str) -> Result<Held<T>> {
	match copied {
		Ok(copy) => Ok(Held::owned(copy)),
		Err(err) if err.is_not_ready() => {
			tracing::debug!(what, %err, aliased = src.is_aliased(), "collaborator copy unavailable, keeping source handle");
			Ok(match src {
				Held::Aliased(shared) => Held::Aliased(Arc::clone(shared)),
				Held::Owned(owned) => Held::Owned(owned.clone()),
			})
		}
		Err(err) => Err(err),
	}
}

/// Resolve a collaborator copy of caller memory, aliasing it when the collaborator is not ready.
pub(crate) fn adopt<T>(src: &Arc<T>, copied: Result<T>, what: &'static str) -> Result<Held<T>> {
	match copied {
		Ok(copy) => Ok(Held::owned(copy)),
		Err(err) if err.is_not_ready() => {
			tracing::debug!(what, %err, "collaborator copy unavailable, aliasing caller handle");
			Ok(Held::Aliased(Arc::clone(src)))
		}
		Err(err) => Err(err),
	}
}

impl Duplicate for Held<Topology> {
	fn duplicate(&self, cx: &CopyCx<'_>) -> Result<Self> {
		held_fallback(self, cx.engine.topology().copy_topology(self), "topology")
	}
}

impl Duplicate for Held<Cpuset> {
	fn duplicate(&self, cx: &CopyCx<'_>) -> Result<Self> {
		held_fallback(self, cx.engine.topology().copy_cpuset(self), "cpuset")
	}
}

impl Duplicate for Value {
	fn duplicate(&self, cx: &CopyCx<'_>) -> Result<Self> {
		let value = match self {
			Self::Undef => Self::Undef,
			Self::Bool(v) => Self::Bool(*v),
			Self::Byte(v) => Self::Byte(*v),
			Self::String(text) => Self::String(copy_string(text)?),
			Self::Size(v) => Self::Size(*v),
			Self::Pid(v) => Self::Pid(*v),
			Self::Int(v) => Self::Int(*v),
			Self::Int8(v) => Self::Int8(*v),
			Self::Int16(v) => Self::Int16(*v),
			Self::Int32(v) => Self::Int32(*v),
			Self::Int64(v) => Self::Int64(*v),
			Self::Uint(v) => Self::Uint(*v),
			Self::Uint8(v) => Self::Uint8(*v),
			Self::Uint16(v) => Self::Uint16(*v),
			Self::Uint32(v) => Self::Uint32(*v),
			Self::Uint64(v) => Self::Uint64(*v),
			Self::Float(v) => Self::Float(*v),
			Self::Double(v) => Self::Double(*v),
			Self::Timeval(v) => Self::Timeval(*v),
			Self::Time(v) => Self::Time(*v),
			Self::Status(v) => Self::Status(*v),
			Self::Rank(v) => Self::Rank(*v),
			Self::Nspace(nspace) => Self::Nspace(nspace.clone()),
			Self::Proc(proc) => Self::Proc(proc.duplicate(cx)?),
			Self::ByteObject(bytes) => Self::ByteObject(copy_bytes(bytes)?),
			Self::CompressedString(bytes) => Self::CompressedString(copy_bytes(bytes)?),
			Self::CompressedByteObject(bytes) => Self::CompressedByteObject(copy_bytes(bytes)?),
			Self::Regex(bytes) => Self::Regex(copy_bytes(bytes)?),
			Self::Persist(v) => Self::Persist(*v),
			Self::Scope(v) => Self::Scope(*v),
			Self::DataRange(v) => Self::DataRange(*v),
			Self::ProcState(v) => Self::ProcState(*v),
			Self::ProcInfo(info) => Self::ProcInfo(info.duplicate(cx)?),
			Self::DataArray(array) => Self::DataArray(array.duplicate(cx)?),
			Self::Pointer(alias) => Self::Pointer(alias.clone()),
			Self::AllocDirective(v) => Self::AllocDirective(*v),
			Self::Envar(envar) => Self::Envar(envar.duplicate(cx)?),
			Self::Coord(coord) => Self::Coord(coord.duplicate(cx)?),
			Self::LinkState(v) => Self::LinkState(*v),
			Self::JobState(v) => Self::JobState(*v),
			Self::Topology(topo) => Self::Topology(topo.duplicate(cx)?),
			Self::Cpuset(cpuset) => Self::Cpuset(cpuset.duplicate(cx)?),
			Self::Locality(v) => Self::Locality(*v),
			Self::Geometry(geometry) => Self::Geometry(geometry.duplicate(cx)?),
			Self::DevType(v) => Self::DevType(*v),
			Self::DeviceDistance(dist) => Self::DeviceDistance(dist.duplicate(cx)?),
			Self::Endpoint(endpoint) => Self::Endpoint(endpoint.duplicate(cx)?),
			Self::RegAttr(attr) => Self::RegAttr(attr.duplicate(cx)?),
			Self::DataBuffer(buffer) => Self::DataBuffer(buffer.duplicate(cx)?),
			Self::ProcStats(stats) => Self::ProcStats(stats.duplicate(cx)?),
			Self::DiskStats(stats) => Self::DiskStats(stats.duplicate(cx)?),
			Self::NetStats(stats) => Self::NetStats(stats.duplicate(cx)?),
			Self::NodeStats(stats) => Self::NodeStats(stats.duplicate(cx)?),
			Self::StorMedium(v) => Self::StorMedium(*v),
			Self::StorAccess(v) => Self::StorAccess(*v),
			Self::StorPersist(v) => Self::StorPersist(*v),
			Self::StorAccessType(v) => Self::StorAccessType(*v),
			Self::DataType(ty) => Self::DataType(*ty),
			Self::Unknown(ty) => return Err(WireError::UnknownDataType { ty: *ty }),
		};
		Ok(value)
	}
}
