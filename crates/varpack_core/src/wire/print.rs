use std::fmt;

use crate::wire::{ArrayItems, DataArray, Held, Proc, Value};

/// Diagnostic line used by the built-in print operation.
pub fn render(prefix: &str, value: &Value) -> String {
	format!("{prefix}Data type: {}\tValue: {value}", value.data_type())
}

fn rank_label(rank: u32) -> Option<&'static str> {
	match rank {
		Proc::RANK_UNDEF => Some("UNDEF"),
		Proc::RANK_WILDCARD => Some("WILDCARD"),
		Proc::RANK_LOCAL_NODE => Some("LOCAL_NODE"),
		_ => None,
	}
}

fn write_rank(f: &mut fmt::Formatter<'_>, rank: u32) -> fmt::Result {
	match rank_label(rank) {
		Some(label) => f.write_str(label),
		None => write!(f, "{rank}"),
	}
}

fn ownership<T>(held: &Held<T>) -> &'static str {
	if held.is_aliased() { "aliased" } else { "owned" }
}

impl fmt::Display for Proc {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}:", self.nspace)?;
		write_rank(f, self.rank)
	}
}

impl fmt::Display for DataArray {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "[{} x {}]", self.size(), self.element_type())?;
		match self.items() {
			ArrayItems::Values(values) => {
				for value in values {
					write!(f, " {value}")?;
				}
			}
			ArrayItems::Infos(infos) => {
				for info in infos {
					write!(f, " {info}")?;
				}
			}
			ArrayItems::Kvals(kvals) => {
				for kval in kvals {
					write!(f, " {}={}", kval.key, kval.value)?;
				}
			}
			ArrayItems::Arrays(arrays) => {
				for nested in arrays {
					write!(f, " {nested}")?;
				}
			}
		}
		Ok(())
	}
}

impl fmt::Display for Value {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Undef => f.write_str("UNDEF"),
			Self::Unknown(ty) => write!(f, "<no payload for {ty}>"),
			Self::Bool(v) => write!(f, "{v}"),
			Self::Byte(v) | Self::Uint8(v) => write!(f, "{v}"),
			Self::Persist(v) | Self::Scope(v) | Self::DataRange(v) | Self::ProcState(v) => write!(f, "{v}"),
			Self::AllocDirective(v) | Self::LinkState(v) | Self::JobState(v) => write!(f, "{v}"),
			Self::Int8(v) => write!(f, "{v}"),
			Self::Int16(v) => write!(f, "{v}"),
			Self::Uint16(v) | Self::Locality(v) | Self::StorAccessType(v) => write!(f, "{v}"),
			Self::Int(v) | Self::Int32(v) | Self::Pid(v) | Self::Status(v) => write!(f, "{v}"),
			Self::Uint(v) | Self::Uint32(v) => write!(f, "{v}"),
			Self::Rank(rank) => write_rank(f, *rank),
			Self::Int64(v) | Self::Time(v) => write!(f, "{v}"),
			Self::Uint64(v) | Self::DevType(v) | Self::StorMedium(v) | Self::StorAccess(v) | Self::StorPersist(v) => write!(f, "{v}"),
			Self::Size(v) => write!(f, "{v}"),
			Self::Float(v) => write!(f, "{v}"),
			Self::Double(v) => write!(f, "{v}"),
			Self::Timeval(tv) => write!(f, "{}.{:06}", tv.sec, tv.usec),
			Self::DataType(ty) => write!(f, "{ty}"),
			Self::String(text) => write!(f, "{text:?}"),
			Self::Nspace(nspace) => f.write_str(nspace.as_str()),
			Self::Proc(proc) => write!(f, "{proc}"),
			Self::ByteObject(bytes) | Self::CompressedString(bytes) | Self::CompressedByteObject(bytes) => write!(f, "<{} bytes>", bytes.len()),
			Self::Regex(bytes) => {
				let text = bytes.strip_suffix(&[0]).unwrap_or(bytes.as_slice());
				write!(f, "{:?}", String::from_utf8_lossy(text))
			}
			Self::ProcInfo(info) => write!(
				f,
				"{} host={} exe={} pid={} exit={} state={}",
				info.proc,
				info.hostname.as_deref().unwrap_or("-"),
				info.executable_name.as_deref().unwrap_or("-"),
				info.pid,
				info.exit_code,
				info.state
			),
			Self::DataArray(array) => write!(f, "{array}"),
			Self::Pointer(alias) => write!(f, "0x{:x}", alias.addr()),
			Self::Envar(envar) => write!(
				f,
				"{}={} (sep {:?})",
				envar.envar.as_deref().unwrap_or(""),
				envar.value.as_deref().unwrap_or(""),
				char::from(envar.separator)
			),
			Self::Coord(coord) => write!(f, "view {} {:?}", coord.view, coord.coord),
			Self::Topology(topo) => write!(f, "{} <{} bytes, {}>", topo.source, topo.data.len(), ownership(topo)),
			Self::Cpuset(cpuset) => write!(f, "{} <{} bytes, {}>", cpuset.source, cpuset.mask.len(), ownership(cpuset)),
			Self::Geometry(geometry) => write!(
				f,
				"fabric {} uuid={} osname={} coords={}",
				geometry.fabric,
				geometry.uuid.as_deref().unwrap_or("-"),
				geometry.osname.as_deref().unwrap_or("-"),
				geometry.coordinates.len()
			),
			Self::DeviceDistance(dist) => write!(
				f,
				"uuid={} osname={} type=0x{:x} dist={}..{}",
				dist.uuid.as_deref().unwrap_or("-"),
				dist.osname.as_deref().unwrap_or("-"),
				dist.device_type,
				dist.mindist,
				dist.maxdist
			),
			Self::Endpoint(endpoint) => write!(
				f,
				"uuid={} osname={} <{} bytes>",
				endpoint.uuid.as_deref().unwrap_or("-"),
				endpoint.osname.as_deref().unwrap_or("-"),
				endpoint.endpt.len()
			),
			Self::RegAttr(attr) => write!(f, "{} ({}) {}", attr.string, attr.ty, attr.name.as_deref().unwrap_or("-")),
			Self::DataBuffer(buffer) => write!(f, "<{} unread bytes, {}>", buffer.remaining(), buffer.buffer_type().as_str()),
			Self::ProcStats(stats) => write!(f, "{} pid={} cpu={}% rss={}MB", stats.proc, stats.pid, stats.percent_cpu, stats.rss),
			Self::DiskStats(stats) => write!(
				f,
				"{} reads={} writes={}",
				stats.disk.as_deref().unwrap_or("-"),
				stats.num_reads_completed,
				stats.num_writes_completed
			),
			Self::NetStats(stats) => write!(
				f,
				"{} rx={} tx={}",
				stats.net_interface.as_deref().unwrap_or("-"),
				stats.num_bytes_recvd,
				stats.num_bytes_sent
			),
			Self::NodeStats(stats) => write!(
				f,
				"{} load={}/{}/{} free={}MB disks={} nets={}",
				stats.node.as_deref().unwrap_or("-"),
				stats.la,
				stats.la5,
				stats.la15,
				stats.free_mem,
				stats.diskstats.len(),
				stats.netstats.len()
			),
		}
	}
}
