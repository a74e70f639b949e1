use crate::wire::{DataType, Key, Nspace};

/// Seconds plus microseconds, laid out as two native `i64`s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Timeval {
	/// Whole seconds.
	pub sec: i64,
	/// Microseconds within the second.
	pub usec: i64,
}

impl Timeval {
	/// Native in-memory width.
	pub const WIDTH: usize = 16;

	/// Encode as native-order bytes.
	pub fn to_ne_bytes(self) -> [u8; 16] {
		let mut out = [0_u8; 16];
		out[..8].copy_from_slice(&self.sec.to_ne_bytes());
		out[8..].copy_from_slice(&self.usec.to_ne_bytes());
		out
	}

	/// Decode from native-order bytes.
	pub fn from_ne_bytes(raw: [u8; 16]) -> Self {
		let mut sec = [0_u8; 8];
		let mut usec = [0_u8; 8];
		sec.copy_from_slice(&raw[..8]);
		usec.copy_from_slice(&raw[8..]);
		Self {
			sec: i64::from_ne_bytes(sec),
			usec: i64::from_ne_bytes(usec),
		}
	}
}

/// Process identifier: namespace plus rank.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Proc {
	/// Job namespace.
	pub nspace: Nspace,
	/// Rank within the namespace.
	pub rank: u32,
}

impl Proc {
	/// Rank has not been assigned.
	pub const RANK_UNDEF: u32 = u32::MAX;
	/// Every rank in the namespace.
	pub const RANK_WILDCARD: u32 = u32::MAX - 1;
	/// Every rank on the local node.
	pub const RANK_LOCAL_NODE: u32 = u32::MAX - 2;

	/// Build a process identifier.
	pub fn new(nspace: &str, rank: u32) -> Self {
		Self {
			nspace: Nspace::new(nspace),
			rank,
		}
	}
}

/// Per-process launch information.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProcInfo {
	/// Process identifier.
	pub proc: Proc,
	/// Host the process runs on.
	pub hostname: Option<String>,
	/// Executable path.
	pub executable_name: Option<String>,
	/// OS process id.
	pub pid: i32,
	/// Exit code, once known.
	pub exit_code: i32,
	/// Process state code.
	pub state: u8,
}

/// Environment variable directive.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Envar {
	/// Variable name.
	pub envar: Option<String>,
	/// Variable value.
	pub value: Option<String>,
	/// Separator used when prepending or appending.
	pub separator: u8,
}

/// Network coordinate in a fabric view.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Coord {
	/// View the coordinate is expressed in (0 undefined, 1 logical, 2 physical).
	pub view: u8,
	/// One entry per dimension.
	pub coord: Vec<u32>,
}

/// Fabric geometry of a device.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Geometry {
	/// Fabric index.
	pub fabric: usize,
	/// Device UUID.
	pub uuid: Option<String>,
	/// OS device name.
	pub osname: Option<String>,
	/// Coordinates in every available view.
	pub coordinates: Vec<Coord>,
}

/// Distance from a process to a device.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DeviceDistance {
	/// Device UUID.
	pub uuid: Option<String>,
	/// OS device name.
	pub osname: Option<String>,
	/// Device type bitmask.
	pub device_type: u64,
	/// Minimum distance.
	pub mindist: u16,
	/// Maximum distance.
	pub maxdist: u16,
}

/// Fabric endpoint assigned to a process.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Endpoint {
	/// Device UUID.
	pub uuid: Option<String>,
	/// OS device name.
	pub osname: Option<String>,
	/// Opaque endpoint address.
	pub endpt: Vec<u8>,
}

/// Attribute registration record.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RegAttr {
	/// Human-readable attribute name.
	pub name: Option<String>,
	/// Attribute key string.
	pub string: Key,
	/// Expected value type.
	pub ty: DataType,
	/// Description lines.
	pub description: Vec<String>,
}
