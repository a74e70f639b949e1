use std::fmt;

use serde::Deserialize;

/// 16-bit type tag selecting a value payload or a registry entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Deserialize)]
#[serde(transparent)]
pub struct DataType(pub u16);

impl DataType {
	/// No payload.
	pub const UNDEF: Self = Self(0);
	/// Boolean flag.
	pub const BOOL: Self = Self(1);
	/// Single byte.
	pub const BYTE: Self = Self(2);
	/// Owned string.
	pub const STRING: Self = Self(3);
	/// Platform `size_t`.
	pub const SIZE: Self = Self(4);
	/// Process id.
	pub const PID: Self = Self(5);
	/// Platform `int`.
	pub const INT: Self = Self(6);
	/// Signed 8-bit integer.
	pub const INT8: Self = Self(7);
	/// Signed 16-bit integer.
	pub const INT16: Self = Self(8);
	/// Signed 32-bit integer.
	pub const INT32: Self = Self(9);
	/// Signed 64-bit integer.
	pub const INT64: Self = Self(10);
	/// Platform `unsigned int`.
	pub const UINT: Self = Self(11);
	/// Unsigned 8-bit integer.
	pub const UINT8: Self = Self(12);
	/// Unsigned 16-bit integer.
	pub const UINT16: Self = Self(13);
	/// Unsigned 32-bit integer.
	pub const UINT32: Self = Self(14);
	/// Unsigned 64-bit integer.
	pub const UINT64: Self = Self(15);
	/// 32-bit float.
	pub const FLOAT: Self = Self(16);
	/// 64-bit float.
	pub const DOUBLE: Self = Self(17);
	/// Seconds and microseconds.
	pub const TIMEVAL: Self = Self(18);
	/// Seconds since the epoch.
	pub const TIME: Self = Self(19);
	/// Status code.
	pub const STATUS: Self = Self(20);
	/// Tagged value (used as an array element type).
	pub const VALUE: Self = Self(21);
	/// Process identifier.
	pub const PROC: Self = Self(22);
	/// Application description.
	pub const APP: Self = Self(23);
	/// Key/value info.
	pub const INFO: Self = Self(24);
	/// Published data record.
	pub const PDATA: Self = Self(25);
	/// Byte object.
	pub const BYTE_OBJECT: Self = Self(27);
	/// Key/value pair with a heap key.
	pub const KVAL: Self = Self(28);
	/// Persistence policy.
	pub const PERSIST: Self = Self(30);
	/// Aliased external pointer.
	pub const POINTER: Self = Self(31);
	/// Data scope.
	pub const SCOPE: Self = Self(32);
	/// Data range.
	pub const DATA_RANGE: Self = Self(33);
	/// Wire command.
	pub const COMMAND: Self = Self(34);
	/// Info directive bits.
	pub const INFO_DIRECTIVES: Self = Self(35);
	/// A type tag as a value.
	pub const DATA_TYPE: Self = Self(36);
	/// Process state.
	pub const PROC_STATE: Self = Self(37);
	/// Process information record.
	pub const PROC_INFO: Self = Self(38);
	/// Homogeneous data array.
	pub const DATA_ARRAY: Self = Self(39);
	/// Process rank.
	pub const PROC_RANK: Self = Self(40);
	/// Query record.
	pub const QUERY: Self = Self(41);
	/// Compressed string.
	pub const COMPRESSED_STRING: Self = Self(42);
	/// Allocation directive.
	pub const ALLOC_DIRECTIVE: Self = Self(43);
	/// Environment variable directive.
	pub const ENVAR: Self = Self(46);
	/// Network coordinate.
	pub const COORD: Self = Self(47);
	/// Attribute registration.
	pub const REGATTR: Self = Self(48);
	/// Compiled node regex.
	pub const REGEX: Self = Self(49);
	/// Job state.
	pub const JOB_STATE: Self = Self(50);
	/// Link state.
	pub const LINK_STATE: Self = Self(51);
	/// Process cpuset.
	pub const PROC_CPUSET: Self = Self(52);
	/// Fabric geometry.
	pub const GEOMETRY: Self = Self(53);
	/// Device distance.
	pub const DEVICE_DIST: Self = Self(54);
	/// Fabric endpoint.
	pub const ENDPOINT: Self = Self(55);
	/// Hardware topology.
	pub const TOPO: Self = Self(56);
	/// Device type bitmask.
	pub const DEVTYPE: Self = Self(57);
	/// Locality bitmask.
	pub const LOCTYPE: Self = Self(58);
	/// Compressed byte object.
	pub const COMPRESSED_BYTE_OBJECT: Self = Self(59);
	/// Namespace.
	pub const PROC_NSPACE: Self = Self(60);
	/// Process statistics.
	pub const PROC_STATS: Self = Self(61);
	/// Disk statistics.
	pub const DISK_STATS: Self = Self(62);
	/// Network statistics.
	pub const NET_STATS: Self = Self(63);
	/// Node statistics.
	pub const NODE_STATS: Self = Self(64);
	/// Nested data buffer.
	pub const DATA_BUFFER: Self = Self(65);
	/// Storage medium bitmask.
	pub const STOR_MEDIUM: Self = Self(66);
	/// Storage access bitmask.
	pub const STOR_ACCESS: Self = Self(67);
	/// Storage persistence bitmask.
	pub const STOR_PERSIST: Self = Self(68);
	/// Storage access type.
	pub const STOR_ACCESS_TYPE: Self = Self(69);

	/// First tag available for runtime-registered types.
	pub const EXTENSION_BASE: u16 = 500;

	/// Raw tag value.
	pub fn tag(self) -> u16 {
		self.0
	}

	/// Built-in name for this tag, if any.
	pub fn name(self) -> Option<&'static str> {
		BUILTINS.iter().find(|(ty, _)| *ty == self).map(|(_, name)| *name)
	}

	/// Look up a built-in tag by name (case-insensitive).
	pub fn from_name(name: &str) -> Option<Self> {
		BUILTINS.iter().find(|(_, item)| item.eq_ignore_ascii_case(name)).map(|(ty, _)| *ty)
	}

	/// Return `true` for tags defined by this crate.
	pub fn is_builtin(self) -> bool {
		self.name().is_some()
	}

	/// Native width in bytes for fixed-width scalar tags.
	pub fn fixed_width(self) -> Option<usize> {
		let width = match self {
			Self::BOOL | Self::BYTE | Self::INT8 | Self::UINT8 => 1,
			Self::PERSIST | Self::SCOPE | Self::DATA_RANGE | Self::PROC_STATE => 1,
			Self::ALLOC_DIRECTIVE | Self::LINK_STATE | Self::JOB_STATE => 1,
			Self::INT16 | Self::UINT16 | Self::LOCTYPE | Self::STOR_ACCESS_TYPE | Self::DATA_TYPE => 2,
			Self::INT | Self::UINT | Self::INT32 | Self::UINT32 | Self::PID | Self::STATUS | Self::PROC_RANK | Self::FLOAT => 4,
			Self::INT64 | Self::UINT64 | Self::TIME | Self::DOUBLE | Self::DEVTYPE => 8,
			Self::STOR_MEDIUM | Self::STOR_ACCESS | Self::STOR_PERSIST => 8,
			Self::SIZE => size_of::<usize>(),
			Self::TIMEVAL => 16,
			_ => return None,
		};
		Some(width)
	}

	/// Return `true` for the byte-object family whose payload is an owned byte run.
	pub fn is_byte_object(self) -> bool {
		matches!(self, Self::BYTE_OBJECT | Self::COMPRESSED_STRING | Self::COMPRESSED_BYTE_OBJECT | Self::REGEX)
	}
}

impl fmt::Display for DataType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self.name() {
			Some(name) => f.write_str(name),
			None => write!(f, "TYPE#{}", self.0),
		}
	}
}

impl From<u16> for DataType {
	fn from(tag: u16) -> Self {
		Self(tag)
	}
}

/// Built-in tags and their diagnostic names, in tag order.
pub(crate) const BUILTINS: &[(DataType, &str)] = &[
	(DataType::UNDEF, "UNDEF"),
	(DataType::BOOL, "BOOL"),
	(DataType::BYTE, "BYTE"),
	(DataType::STRING, "STRING"),
	(DataType::SIZE, "SIZE"),
	(DataType::PID, "PID"),
	(DataType::INT, "INT"),
	(DataType::INT8, "INT8"),
	(DataType::INT16, "INT16"),
	(DataType::INT32, "INT32"),
	(DataType::INT64, "INT64"),
	(DataType::UINT, "UINT"),
	(DataType::UINT8, "UINT8"),
	(DataType::UINT16, "UINT16"),
	(DataType::UINT32, "UINT32"),
	(DataType::UINT64, "UINT64"),
	(DataType::FLOAT, "FLOAT"),
	(DataType::DOUBLE, "DOUBLE"),
	(DataType::TIMEVAL, "TIMEVAL"),
	(DataType::TIME, "TIME"),
	(DataType::STATUS, "STATUS"),
	(DataType::VALUE, "VALUE"),
	(DataType::PROC, "PROC"),
	(DataType::APP, "APP"),
	(DataType::INFO, "INFO"),
	(DataType::PDATA, "PDATA"),
	(DataType::BYTE_OBJECT, "BYTE_OBJECT"),
	(DataType::KVAL, "KVAL"),
	(DataType::PERSIST, "PERSIST"),
	(DataType::POINTER, "POINTER"),
	(DataType::SCOPE, "SCOPE"),
	(DataType::DATA_RANGE, "DATA_RANGE"),
	(DataType::COMMAND, "COMMAND"),
	(DataType::INFO_DIRECTIVES, "INFO_DIRECTIVES"),
	(DataType::DATA_TYPE, "DATA_TYPE"),
	(DataType::PROC_STATE, "PROC_STATE"),
	(DataType::PROC_INFO, "PROC_INFO"),
	(DataType::DATA_ARRAY, "DATA_ARRAY"),
	(DataType::PROC_RANK, "PROC_RANK"),
	(DataType::QUERY, "QUERY"),
	(DataType::COMPRESSED_STRING, "COMPRESSED_STRING"),
	(DataType::ALLOC_DIRECTIVE, "ALLOC_DIRECTIVE"),
	(DataType::ENVAR, "ENVAR"),
	(DataType::COORD, "COORD"),
	(DataType::REGATTR, "REGATTR"),
	(DataType::REGEX, "REGEX"),
	(DataType::JOB_STATE, "JOB_STATE"),
	(DataType::LINK_STATE, "LINK_STATE"),
	(DataType::PROC_CPUSET, "PROC_CPUSET"),
	(DataType::GEOMETRY, "GEOMETRY"),
	(DataType::DEVICE_DIST, "DEVICE_DIST"),
	(DataType::ENDPOINT, "ENDPOINT"),
	(DataType::TOPO, "TOPO"),
	(DataType::DEVTYPE, "DEVTYPE"),
	(DataType::LOCTYPE, "LOCTYPE"),
	(DataType::COMPRESSED_BYTE_OBJECT, "COMPRESSED_BYTE_OBJECT"),
	(DataType::PROC_NSPACE, "PROC_NSPACE"),
	(DataType::PROC_STATS, "PROC_STATS"),
	(DataType::DISK_STATS, "DISK_STATS"),
	(DataType::NET_STATS, "NET_STATS"),
	(DataType::NODE_STATS, "NODE_STATS"),
	(DataType::DATA_BUFFER, "DATA_BUFFER"),
	(DataType::STOR_MEDIUM, "STOR_MEDIUM"),
	(DataType::STOR_ACCESS, "STOR_ACCESS"),
	(DataType::STOR_PERSIST, "STOR_PERSIST"),
	(DataType::STOR_ACCESS_TYPE, "STOR_ACCESS_TYPE"),
];

#[cfg(test)]
mod tests;
