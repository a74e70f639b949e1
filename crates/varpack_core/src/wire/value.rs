use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crate::wire::{
	Buffer, Coord, Cpuset, DataArray, DataType, DeviceDistance, DiskStats, Endpoint, Envar, Geometry, Held, NetStats, NodeStats, Nspace, Proc, ProcInfo,
	ProcStats, RegAttr, Result, Timeval, Topology, WireError,
};

/// Shared handle to caller-owned memory carried by `POINTER` values.
///
/// The value model never releases the target; dropping an alias only drops the handle.
#[derive(Clone, Default)]
pub struct Alias(Option<Arc<dyn Any + Send + Sync>>);

impl Alias {
	/// Alias an existing shared allocation.
	pub fn new<T: Any + Send + Sync>(target: Arc<T>) -> Self {
		Self(Some(target))
	}

	/// The null pointer.
	pub fn null() -> Self {
		Self(None)
	}

	/// Return `true` for the null pointer.
	pub fn is_null(&self) -> bool {
		self.0.is_none()
	}

	/// Address of the target, `0` for null.
	pub fn addr(&self) -> usize {
		self.0.as_ref().map_or(0, |target| Arc::as_ptr(target) as *const () as usize)
	}

	/// Return `true` when both handles point at the same allocation.
	pub fn ptr_eq(&self, other: &Self) -> bool {
		self.addr() == other.addr()
	}

	/// Recover the typed handle when the target has type `T`.
	pub fn downcast<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
		self.0.clone()?.downcast::<T>().ok()
	}
}

impl fmt::Debug for Alias {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Alias(0x{:x})", self.addr())
	}
}

impl PartialEq for Alias {
	fn eq(&self, other: &Self) -> bool {
		self.ptr_eq(other)
	}
}

/// Tagged value exchanged between processes.
///
/// Each arm owns its payload except [`Value::Pointer`] and aliased
/// topology/cpuset payloads, whose ownership is spelled out by [`Alias`] and [`Held`].
#[derive(Debug, Default, PartialEq)]
pub enum Value {
	/// No payload.
	#[default]
	Undef,
	/// `BOOL`
	Bool(bool),
	/// `BYTE`
	Byte(u8),
	/// `STRING`
	String(String),
	/// `SIZE`
	Size(usize),
	/// `PID`
	Pid(i32),
	/// `INT`
	Int(i32),
	/// `INT8`
	Int8(i8),
	/// `INT16`
	Int16(i16),
	/// `INT32`
	Int32(i32),
	/// `INT64`
	Int64(i64),
	/// `UINT`
	Uint(u32),
	/// `UINT8`
	Uint8(u8),
	/// `UINT16`
	Uint16(u16),
	/// `UINT32`
	Uint32(u32),
	/// `UINT64`
	Uint64(u64),
	/// `FLOAT`
	Float(f32),
	/// `DOUBLE`
	Double(f64),
	/// `TIMEVAL`
	Timeval(Timeval),
	/// `TIME`, seconds since the epoch.
	Time(i64),
	/// `STATUS`
	Status(i32),
	/// `PROC_RANK`
	Rank(u32),
	/// `PROC_NSPACE`
	Nspace(Nspace),
	/// `PROC`
	Proc(Box<Proc>),
	/// `BYTE_OBJECT`
	ByteObject(Vec<u8>),
	/// `COMPRESSED_STRING`
	CompressedString(Vec<u8>),
	/// `COMPRESSED_BYTE_OBJECT`
	CompressedByteObject(Vec<u8>),
	/// `REGEX`, bytes produced by the pattern collaborator.
	Regex(Vec<u8>),
	/// `PERSIST`
	Persist(u8),
	/// `SCOPE`
	Scope(u8),
	/// `DATA_RANGE`
	DataRange(u8),
	/// `PROC_STATE`
	ProcState(u8),
	/// `PROC_INFO`
	ProcInfo(Box<ProcInfo>),
	/// `DATA_ARRAY`
	DataArray(Box<DataArray>),
	/// `POINTER`, never owned.
	Pointer(Alias),
	/// `ALLOC_DIRECTIVE`
	AllocDirective(u8),
	/// `ENVAR`
	Envar(Envar),
	/// `COORD`
	Coord(Box<Coord>),
	/// `LINK_STATE`
	LinkState(u8),
	/// `JOB_STATE`
	JobState(u8),
	/// `TOPO`
	Topology(Held<Topology>),
	/// `PROC_CPUSET`
	Cpuset(Held<Cpuset>),
	/// `LOCTYPE`
	Locality(u16),
	/// `GEOMETRY`
	Geometry(Box<Geometry>),
	/// `DEVTYPE`
	DevType(u64),
	/// `DEVICE_DIST`
	DeviceDistance(Box<DeviceDistance>),
	/// `ENDPOINT`
	Endpoint(Box<Endpoint>),
	/// `REGATTR`
	RegAttr(Box<RegAttr>),
	/// `DATA_BUFFER`
	DataBuffer(Box<Buffer>),
	/// `PROC_STATS`
	ProcStats(Box<ProcStats>),
	/// `DISK_STATS`
	DiskStats(Box<DiskStats>),
	/// `NET_STATS`
	NetStats(Box<NetStats>),
	/// `NODE_STATS`
	NodeStats(Box<NodeStats>),
	/// `STOR_MEDIUM`
	StorMedium(u64),
	/// `STOR_ACCESS`
	StorAccess(u64),
	/// `STOR_PERSIST`
	StorPersist(u64),
	/// `STOR_ACCESS_TYPE`
	StorAccessType(u16),
	/// `DATA_TYPE`
	DataType(DataType),
	/// Tag loaded permissively without a payload representation.
	Unknown(DataType),
}

/// Native-order bytes of a fixed-width scalar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScalarBytes {
	bytes: [u8; 16],
	len: usize,
}

impl ScalarBytes {
	fn new(raw: &[u8]) -> Self {
		let mut bytes = [0_u8; 16];
		bytes[..raw.len()].copy_from_slice(raw);
		Self { bytes, len: raw.len() }
	}

	/// Bytes in native order.
	pub fn as_slice(&self) -> &[u8] {
		&self.bytes[..self.len]
	}

	/// Width in bytes.
	pub fn len(&self) -> usize {
		self.len
	}

	/// Return `true` for zero-width scalars.
	pub fn is_empty(&self) -> bool {
		self.len == 0
	}
}

impl Value {
	/// Tag selecting the active arm.
	pub fn data_type(&self) -> DataType {
		match self {
			Self::Undef => DataType::UNDEF,
			Self::Bool(_) => DataType::BOOL,
			Self::Byte(_) => DataType::BYTE,
			Self::String(_) => DataType::STRING,
			Self::Size(_) => DataType::SIZE,
			Self::Pid(_) => DataType::PID,
			Self::Int(_) => DataType::INT,
			Self::Int8(_) => DataType::INT8,
			Self::Int16(_) => DataType::INT16,
			Self::Int32(_) => DataType::INT32,
			Self::Int64(_) => DataType::INT64,
			Self::Uint(_) => DataType::UINT,
			Self::Uint8(_) => DataType::UINT8,
			Self::Uint16(_) => DataType::UINT16,
			Self::Uint32(_) => DataType::UINT32,
			Self::Uint64(_) => DataType::UINT64,
			Self::Float(_) => DataType::FLOAT,
			Self::Double(_) => DataType::DOUBLE,
			Self::Timeval(_) => DataType::TIMEVAL,
			Self::Time(_) => DataType::TIME,
			Self::Status(_) => DataType::STATUS,
			Self::Rank(_) => DataType::PROC_RANK,
			Self::Nspace(_) => DataType::PROC_NSPACE,
			Self::Proc(_) => DataType::PROC,
			Self::ByteObject(_) => DataType::BYTE_OBJECT,
			Self::CompressedString(_) => DataType::COMPRESSED_STRING,
			Self::CompressedByteObject(_) => DataType::COMPRESSED_BYTE_OBJECT,
			Self::Regex(_) => DataType::REGEX,
			Self::Persist(_) => DataType::PERSIST,
			Self::Scope(_) => DataType::SCOPE,
			Self::DataRange(_) => DataType::DATA_RANGE,
			Self::ProcState(_) => DataType::PROC_STATE,
			Self::ProcInfo(_) => DataType::PROC_INFO,
			Self::DataArray(_) => DataType::DATA_ARRAY,
			Self::Pointer(_) => DataType::POINTER,
			Self::AllocDirective(_) => DataType::ALLOC_DIRECTIVE,
			Self::Envar(_) => DataType::ENVAR,
			Self::Coord(_) => DataType::COORD,
			Self::LinkState(_) => DataType::LINK_STATE,
			Self::JobState(_) => DataType::JOB_STATE,
			Self::Topology(_) => DataType::TOPO,
			Self::Cpuset(_) => DataType::PROC_CPUSET,
			Self::Locality(_) => DataType::LOCTYPE,
			Self::Geometry(_) => DataType::GEOMETRY,
			Self::DevType(_) => DataType::DEVTYPE,
			Self::DeviceDistance(_) => DataType::DEVICE_DIST,
			Self::Endpoint(_) => DataType::ENDPOINT,
			Self::RegAttr(_) => DataType::REGATTR,
			Self::DataBuffer(_) => DataType::DATA_BUFFER,
			Self::ProcStats(_) => DataType::PROC_STATS,
			Self::DiskStats(_) => DataType::DISK_STATS,
			Self::NetStats(_) => DataType::NET_STATS,
			Self::NodeStats(_) => DataType::NODE_STATS,
			Self::StorMedium(_) => DataType::STOR_MEDIUM,
			Self::StorAccess(_) => DataType::STOR_ACCESS,
			Self::StorPersist(_) => DataType::STOR_PERSIST,
			Self::StorAccessType(_) => DataType::STOR_ACCESS_TYPE,
			Self::DataType(_) => DataType::DATA_TYPE,
			Self::Unknown(ty) => *ty,
		}
	}

	/// Return `true` for [`Value::Undef`].
	pub fn is_undef(&self) -> bool {
		matches!(self, Self::Undef)
	}

	/// Canonical empty payload for `ty`, or `None` when the tag has no value arm.
	///
	/// `BOOL` defaults to `true`: an attribute that is present is set.
	pub fn empty(ty: DataType) -> Option<Self> {
		let value = match ty {
			DataType::UNDEF => Self::Undef,
			DataType::BOOL => Self::Bool(true),
			DataType::BYTE => Self::Byte(0),
			DataType::STRING => Self::String(String::new()),
			DataType::SIZE => Self::Size(0),
			DataType::PID => Self::Pid(0),
			DataType::INT => Self::Int(0),
			DataType::INT8 => Self::Int8(0),
			DataType::INT16 => Self::Int16(0),
			DataType::INT32 => Self::Int32(0),
			DataType::INT64 => Self::Int64(0),
			DataType::UINT => Self::Uint(0),
			DataType::UINT8 => Self::Uint8(0),
			DataType::UINT16 => Self::Uint16(0),
			DataType::UINT32 => Self::Uint32(0),
			DataType::UINT64 => Self::Uint64(0),
			DataType::FLOAT => Self::Float(0.0),
			DataType::DOUBLE => Self::Double(0.0),
			DataType::TIMEVAL => Self::Timeval(Timeval::default()),
			DataType::TIME => Self::Time(0),
			DataType::STATUS => Self::Status(0),
			DataType::PROC_RANK => Self::Rank(0),
			DataType::PROC_NSPACE => Self::Nspace(Nspace::default()),
			DataType::PROC => Self::Proc(Box::default()),
			DataType::BYTE_OBJECT => Self::ByteObject(Vec::new()),
			DataType::COMPRESSED_STRING => Self::CompressedString(Vec::new()),
			DataType::COMPRESSED_BYTE_OBJECT => Self::CompressedByteObject(Vec::new()),
			DataType::REGEX => Self::Regex(Vec::new()),
			DataType::PERSIST => Self::Persist(0),
			DataType::SCOPE => Self::Scope(0),
			DataType::DATA_RANGE => Self::DataRange(0),
			DataType::PROC_STATE => Self::ProcState(0),
			DataType::PROC_INFO => Self::ProcInfo(Box::default()),
			DataType::DATA_ARRAY => Self::DataArray(Box::default()),
			DataType::POINTER => Self::Pointer(Alias::null()),
			DataType::ALLOC_DIRECTIVE => Self::AllocDirective(0),
			DataType::ENVAR => Self::Envar(Envar::default()),
			DataType::COORD => Self::Coord(Box::default()),
			DataType::LINK_STATE => Self::LinkState(0),
			DataType::JOB_STATE => Self::JobState(0),
			DataType::TOPO => Self::Topology(Held::default()),
			DataType::PROC_CPUSET => Self::Cpuset(Held::default()),
			DataType::LOCTYPE => Self::Locality(0),
			DataType::GEOMETRY => Self::Geometry(Box::default()),
			DataType::DEVTYPE => Self::DevType(0),
			DataType::DEVICE_DIST => Self::DeviceDistance(Box::default()),
			DataType::ENDPOINT => Self::Endpoint(Box::default()),
			DataType::REGATTR => Self::RegAttr(Box::default()),
			DataType::DATA_BUFFER => Self::DataBuffer(Box::default()),
			DataType::PROC_STATS => Self::ProcStats(Box::default()),
			DataType::DISK_STATS => Self::DiskStats(Box::default()),
			DataType::NET_STATS => Self::NetStats(Box::default()),
			DataType::NODE_STATS => Self::NodeStats(Box::default()),
			DataType::STOR_MEDIUM => Self::StorMedium(0),
			DataType::STOR_ACCESS => Self::StorAccess(0),
			DataType::STOR_PERSIST => Self::StorPersist(0),
			DataType::STOR_ACCESS_TYPE => Self::StorAccessType(0),
			DataType::DATA_TYPE => Self::DataType(DataType::UNDEF),
			_ => return None,
		};
		Some(value)
	}

	/// Decode a fixed-width scalar from exactly [`DataType::fixed_width`] native-order bytes.
	pub fn from_raw(ty: DataType, raw: &[u8]) -> Result<Self> {
		let width = ty.fixed_width().ok_or(WireError::BadParam {
			reason: "raw bytes supplied for a non-scalar type",
		})?;
		if raw.len() != width {
			return Err(WireError::BadParam {
				reason: "scalar width mismatch",
			});
		}

		let value = match ty {
			DataType::BOOL => Self::Bool(raw[0] != 0),
			DataType::BYTE => Self::Byte(raw[0]),
			DataType::INT8 => Self::Int8(i8::from_ne_bytes(ne(raw)?)),
			DataType::UINT8 => Self::Uint8(raw[0]),
			DataType::PERSIST => Self::Persist(raw[0]),
			DataType::SCOPE => Self::Scope(raw[0]),
			DataType::DATA_RANGE => Self::DataRange(raw[0]),
			DataType::PROC_STATE => Self::ProcState(raw[0]),
			DataType::ALLOC_DIRECTIVE => Self::AllocDirective(raw[0]),
			DataType::LINK_STATE => Self::LinkState(raw[0]),
			DataType::JOB_STATE => Self::JobState(raw[0]),
			DataType::INT16 => Self::Int16(i16::from_ne_bytes(ne(raw)?)),
			DataType::UINT16 => Self::Uint16(u16::from_ne_bytes(ne(raw)?)),
			DataType::LOCTYPE => Self::Locality(u16::from_ne_bytes(ne(raw)?)),
			DataType::STOR_ACCESS_TYPE => Self::StorAccessType(u16::from_ne_bytes(ne(raw)?)),
			DataType::DATA_TYPE => Self::DataType(DataType(u16::from_ne_bytes(ne(raw)?))),
			DataType::INT => Self::Int(i32::from_ne_bytes(ne(raw)?)),
			DataType::INT32 => Self::Int32(i32::from_ne_bytes(ne(raw)?)),
			DataType::PID => Self::Pid(i32::from_ne_bytes(ne(raw)?)),
			DataType::STATUS => Self::Status(i32::from_ne_bytes(ne(raw)?)),
			DataType::UINT => Self::Uint(u32::from_ne_bytes(ne(raw)?)),
			DataType::UINT32 => Self::Uint32(u32::from_ne_bytes(ne(raw)?)),
			DataType::PROC_RANK => Self::Rank(u32::from_ne_bytes(ne(raw)?)),
			DataType::FLOAT => Self::Float(f32::from_ne_bytes(ne(raw)?)),
			DataType::INT64 => Self::Int64(i64::from_ne_bytes(ne(raw)?)),
			DataType::TIME => Self::Time(i64::from_ne_bytes(ne(raw)?)),
			DataType::UINT64 => Self::Uint64(u64::from_ne_bytes(ne(raw)?)),
			DataType::DEVTYPE => Self::DevType(u64::from_ne_bytes(ne(raw)?)),
			DataType::STOR_MEDIUM => Self::StorMedium(u64::from_ne_bytes(ne(raw)?)),
			DataType::STOR_ACCESS => Self::StorAccess(u64::from_ne_bytes(ne(raw)?)),
			DataType::STOR_PERSIST => Self::StorPersist(u64::from_ne_bytes(ne(raw)?)),
			DataType::DOUBLE => Self::Double(f64::from_ne_bytes(ne(raw)?)),
			DataType::SIZE => Self::Size(usize::from_ne_bytes(ne(raw)?)),
			DataType::TIMEVAL => Self::Timeval(Timeval::from_ne_bytes(ne(raw)?)),
			_ => {
				return Err(WireError::BadParam {
					reason: "raw bytes supplied for a non-scalar type",
				});
			}
		};
		Ok(value)
	}

	/// Native-order bytes of a fixed-width scalar payload.
	pub fn scalar_bytes(&self) -> Option<ScalarBytes> {
		let raw = match self {
			Self::Bool(flag) => ScalarBytes::new(&[u8::from(*flag)]),
			Self::Byte(v)
			| Self::Uint8(v)
			| Self::Persist(v)
			| Self::Scope(v)
			| Self::DataRange(v)
			| Self::ProcState(v)
			| Self::AllocDirective(v)
			| Self::LinkState(v)
			| Self::JobState(v) => ScalarBytes::new(&[*v]),
			Self::Int8(v) => ScalarBytes::new(&v.to_ne_bytes()),
			Self::Int16(v) => ScalarBytes::new(&v.to_ne_bytes()),
			Self::Uint16(v) | Self::Locality(v) | Self::StorAccessType(v) => ScalarBytes::new(&v.to_ne_bytes()),
			Self::DataType(ty) => ScalarBytes::new(&ty.0.to_ne_bytes()),
			Self::Int(v) | Self::Int32(v) | Self::Pid(v) | Self::Status(v) => ScalarBytes::new(&v.to_ne_bytes()),
			Self::Uint(v) | Self::Uint32(v) | Self::Rank(v) => ScalarBytes::new(&v.to_ne_bytes()),
			Self::Float(v) => ScalarBytes::new(&v.to_ne_bytes()),
			Self::Int64(v) | Self::Time(v) => ScalarBytes::new(&v.to_ne_bytes()),
			Self::Uint64(v) | Self::DevType(v) | Self::StorMedium(v) | Self::StorAccess(v) | Self::StorPersist(v) => ScalarBytes::new(&v.to_ne_bytes()),
			Self::Double(v) => ScalarBytes::new(&v.to_ne_bytes()),
			Self::Size(v) => ScalarBytes::new(&v.to_ne_bytes()),
			Self::Timeval(tv) => ScalarBytes::new(&tv.to_ne_bytes()),
			_ => return None,
		};
		Some(raw)
	}

	/// In-memory size of the payload as reported by `unload` for composite values.
	pub fn payload_size(&self) -> usize {
		match self {
			Self::Undef | Self::Unknown(_) => 0,
			Self::String(text) => text.len(),
			Self::ByteObject(bytes) | Self::CompressedString(bytes) | Self::CompressedByteObject(bytes) | Self::Regex(bytes) => bytes.len(),
			Self::Nspace(nspace) => nspace.as_str().len(),
			Self::Proc(_) => size_of::<Proc>(),
			Self::ProcInfo(_) => size_of::<ProcInfo>(),
			Self::DataArray(_) => size_of::<DataArray>(),
			Self::Pointer(_) => size_of::<usize>(),
			Self::Envar(_) => size_of::<Envar>(),
			Self::Coord(_) => size_of::<Coord>(),
			Self::Topology(_) => size_of::<Topology>(),
			Self::Cpuset(_) => size_of::<Cpuset>(),
			Self::Geometry(_) => size_of::<Geometry>(),
			Self::DeviceDistance(_) => size_of::<DeviceDistance>(),
			Self::Endpoint(_) => size_of::<Endpoint>(),
			Self::RegAttr(_) => size_of::<RegAttr>(),
			Self::DataBuffer(_) => size_of::<Buffer>(),
			Self::ProcStats(_) => size_of::<ProcStats>(),
			Self::DiskStats(_) => size_of::<DiskStats>(),
			Self::NetStats(_) => size_of::<NetStats>(),
			Self::NodeStats(_) => size_of::<NodeStats>(),
			scalar => scalar.scalar_bytes().map_or(0, |raw| raw.len()),
		}
	}

	/// Borrow the text of a `STRING` value.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Self::String(text) => Some(text),
			_ => None,
		}
	}

	/// Borrow the bytes of a byte-object family value.
	pub fn as_bytes(&self) -> Option<&[u8]> {
		match self {
			Self::ByteObject(bytes) | Self::CompressedString(bytes) | Self::CompressedByteObject(bytes) | Self::Regex(bytes) => Some(bytes),
			_ => None,
		}
	}

	pub(crate) fn byte_object(ty: DataType, bytes: Vec<u8>) -> Option<Self> {
		match ty {
			DataType::BYTE_OBJECT => Some(Self::ByteObject(bytes)),
			DataType::COMPRESSED_STRING => Some(Self::CompressedString(bytes)),
			DataType::COMPRESSED_BYTE_OBJECT => Some(Self::CompressedByteObject(bytes)),
			DataType::REGEX => Some(Self::Regex(bytes)),
			_ => None,
		}
	}
}

fn ne<const N: usize>(raw: &[u8]) -> Result<[u8; N]> {
	raw.try_into().map_err(|_| WireError::BadParam {
		reason: "scalar width mismatch",
	})
}

macro_rules! value_from {
	($($ty:ty => $arm:ident),* $(,)?) => {
		$(
			impl From<$ty> for Value {
				fn from(value: $ty) -> Self {
					Self::$arm(value)
				}
			}
		)*
	};
}

value_from!(
	bool => Bool,
	u8 => Byte,
	String => String,
	i8 => Int8,
	i16 => Int16,
	i32 => Int32,
	i64 => Int64,
	u16 => Uint16,
	u32 => Uint32,
	u64 => Uint64,
	f32 => Float,
	f64 => Double,
	Timeval => Timeval,
	Vec<u8> => ByteObject,
	Envar => Envar,
);

impl From<&str> for Value {
	fn from(value: &str) -> Self {
		Self::String(value.to_owned())
	}
}

impl From<Proc> for Value {
	fn from(value: Proc) -> Self {
		Self::Proc(Box::new(value))
	}
}

impl From<DataArray> for Value {
	fn from(value: DataArray) -> Self {
		Self::DataArray(Box::new(value))
	}
}

/// Borrowed source data for [`crate::wire::Engine::load`].
///
/// The variant must match the requested type tag; a mismatch is a bad parameter.
#[derive(Debug, Clone, Copy)]
pub enum Datum<'a> {
	/// Native-order bytes of a fixed-width scalar.
	Raw(&'a [u8]),
	/// Existing value of the requested type, deep-copied.
	Value(&'a Value),
	/// Text for `STRING`, `PROC_NSPACE`, and `REGEX`.
	Str(&'a str),
	/// Bytes for the byte-object family.
	Bytes(&'a [u8]),
	/// `PROC`
	Proc(&'a Proc),
	/// `PROC_INFO`
	ProcInfo(&'a ProcInfo),
	/// `DATA_ARRAY`
	Array(&'a DataArray),
	/// `ENVAR`
	Envar(&'a Envar),
	/// `COORD`
	Coord(&'a Coord),
	/// `TOPO`, aliased when the topology collaborator cannot copy it.
	Topology(&'a Arc<Topology>),
	/// `PROC_CPUSET`, aliased when the topology collaborator cannot copy it.
	Cpuset(&'a Arc<Cpuset>),
	/// `GEOMETRY`
	Geometry(&'a Geometry),
	/// `DEVICE_DIST`
	DeviceDistance(&'a DeviceDistance),
	/// `ENDPOINT`
	Endpoint(&'a Endpoint),
	/// `REGATTR`
	RegAttr(&'a RegAttr),
	/// `DATA_BUFFER`
	Buffer(&'a Buffer),
	/// `PROC_STATS`
	ProcStats(&'a ProcStats),
	/// `DISK_STATS`
	DiskStats(&'a DiskStats),
	/// `NET_STATS`
	NetStats(&'a NetStats),
	/// `NODE_STATS`
	NodeStats(&'a NodeStats),
	/// `POINTER`
	Pointer(&'a Alias),
}

#[cfg(test)]
mod tests;
