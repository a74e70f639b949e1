//! Deterministic wire encoding of values.
//!
//! Integers are big-endian, floats are packed by bit pattern, strings and byte
//! objects carry a `u32` length prefix, and optional strings a `u8` presence flag.

use crate::wire::{
	ArrayItems, Buffer, BufferType, Coord, Cpuset, DataArray, DataType, DeviceDistance, DiskStats, Endpoint, Engine, Envar, Geometry, Held, Info,
	InfoFlags, InfoSlot, Key, Kval, NetStats, NodeStats, Nspace, Proc, ProcInfo, ProcStats, RegAttr, Result, Timeval, Topology, Value, WireError,
};

/// Store a type tag as `UINT16`.
pub fn store_data_type(buf: &mut Buffer, ty: DataType) -> Result<()> {
	buf.put_u16(ty.tag())
}

/// Read a type tag stored by [`store_data_type`].
pub fn get_data_type(buf: &mut Buffer) -> Result<DataType> {
	Ok(DataType(buf.get_u16()?))
}

impl Engine {
	/// Pack `values` of type `ty`, preceded by their count.
	///
	/// Fully described buffers also record the count's type and `ty`.
	pub fn pack(&self, buf: &mut Buffer, values: &[Value], ty: DataType) -> Result<()> {
		let info = self.registry().lookup(ty).ok_or(WireError::UnregisteredType { ty })?;
		let count = i32::try_from(values.len()).map_err(|_| WireError::BadParam {
			reason: "too many values for one pack call",
		})?;

		if buf.is_described() {
			store_data_type(buf, DataType::INT32)?;
		}
		buf.put_i32(count)?;
		if buf.is_described() {
			store_data_type(buf, ty)?;
		}
		info.ops.pack(self, buf, values)
	}

	/// Unpack at most `max` values of type `ty`.
	pub fn unpack(&self, buf: &mut Buffer, ty: DataType, max: usize) -> Result<Vec<Value>> {
		let info = self.registry().lookup(ty).ok_or(WireError::UnregisteredType { ty })?;

		if buf.is_described() {
			expect_type(buf, DataType::INT32)?;
		}
		let count = buf.get_i32()?;
		let count = usize::try_from(count).map_err(|_| WireError::NegativeCount { count })?;
		if count > max {
			return Err(WireError::InadequateSpace { count, max });
		}
		if buf.is_described() {
			expect_type(buf, ty)?;
		}
		info.ops.unpack(self, buf, count)
	}
}

fn expect_type(buf: &mut Buffer, expected: DataType) -> Result<()> {
	let got = get_data_type(buf)?;
	if got != expected {
		return Err(WireError::PackMismatch { expected, got });
	}
	Ok(())
}

/// Pack the payloads of `values`, which must all carry `ty` unless `ty` is `VALUE`.
pub fn pack_values(buf: &mut Buffer, ty: DataType, values: &[Value]) -> Result<()> {
	for value in values {
		if ty == DataType::VALUE {
			store_data_type(buf, value.data_type())?;
		} else if value.data_type() != ty {
			return Err(WireError::PackMismatch {
				expected: ty,
				got: value.data_type(),
			});
		}
		pack_payload(buf, value)?;
	}
	Ok(())
}

/// Unpack `count` payloads of type `ty`; `VALUE` reads a tag before each payload.
pub fn unpack_values(engine: &Engine, buf: &mut Buffer, ty: DataType, count: usize) -> Result<Vec<Value>> {
	let cx = UnpackCx {
		max_depth: engine.config().max_depth,
		depth: 0,
	};
	read_values(&cx, buf, ty, count)
}

#[derive(Clone, Copy)]
struct UnpackCx {
	max_depth: u32,
	depth: u32,
}

impl UnpackCx {
	fn nested(self) -> Result<Self> {
		if self.depth >= self.max_depth {
			return Err(WireError::DepthExceeded { max_depth: self.max_depth });
		}
		Ok(Self {
			depth: self.depth + 1,
			..self
		})
	}
}

/// Every element of a non-`UNDEF` type occupies at least one byte; `UNDEF` elements never cross the wire.
fn check_count(buf: &Buffer, ty: DataType, count: usize) -> Result<()> {
	if ty == DataType::UNDEF {
		return if count == 0 { Ok(()) } else { Err(WireError::UnknownDataType { ty }) };
	}
	if count > buf.remaining() {
		return Err(WireError::ReadPastEnd {
			need: count,
			rem: buf.remaining(),
		});
	}
	Ok(())
}

fn read_values(cx: &UnpackCx, buf: &mut Buffer, ty: DataType, count: usize) -> Result<Vec<Value>> {
	check_count(buf, ty, count)?;
	let mut out = Vec::with_capacity(count);
	for _ in 0..count {
		let item_ty = if ty == DataType::VALUE { get_data_type(buf)? } else { ty };
		out.push(unpack_payload(cx, buf, item_ty)?);
	}
	Ok(out)
}

fn put_len(buf: &mut Buffer, len: usize) -> Result<()> {
	let len = u32::try_from(len).map_err(|_| WireError::BadParam {
		reason: "length exceeds u32 range",
	})?;
	buf.put_u32(len)
}

fn get_len(buf: &mut Buffer) -> Result<usize> {
	let len = buf.get_u32()?;
	usize::try_from(len).map_err(|_| WireError::OutOfMemory { requested: usize::MAX })
}

fn put_bytes(buf: &mut Buffer, bytes: &[u8]) -> Result<()> {
	put_len(buf, bytes.len())?;
	buf.write_bytes(bytes)
}

fn get_bytes(buf: &mut Buffer) -> Result<Vec<u8>> {
	let len = get_len(buf)?;
	Ok(buf.read_exact(len)?.to_vec())
}

fn put_str(buf: &mut Buffer, text: &str) -> Result<()> {
	put_bytes(buf, text.as_bytes())
}

fn get_str(buf: &mut Buffer, what: &'static str) -> Result<String> {
	String::from_utf8(get_bytes(buf)?).map_err(|_| WireError::InvalidUtf8 { what })
}

fn put_opt_str(buf: &mut Buffer, text: Option<&str>) -> Result<()> {
	match text {
		Some(text) => {
			buf.put_u8(1)?;
			put_str(buf, text)
		}
		None => buf.put_u8(0),
	}
}

fn get_opt_str(buf: &mut Buffer, what: &'static str) -> Result<Option<String>> {
	match buf.get_u8()? {
		0 => Ok(None),
		_ => Ok(Some(get_str(buf, what)?)),
	}
}

fn put_timeval(buf: &mut Buffer, tv: Timeval) -> Result<()> {
	buf.put_i64(tv.sec)?;
	buf.put_i64(tv.usec)
}

fn get_timeval(buf: &mut Buffer) -> Result<Timeval> {
	Ok(Timeval {
		sec: buf.get_i64()?,
		usec: buf.get_i64()?,
	})
}

fn put_proc(buf: &mut Buffer, proc: &Proc) -> Result<()> {
	put_str(buf, proc.nspace.as_str())?;
	buf.put_u32(proc.rank)
}

fn get_proc(buf: &mut Buffer) -> Result<Proc> {
	let nspace = get_str(buf, "proc nspace")?;
	Ok(Proc {
		nspace: Nspace::new(&nspace),
		rank: buf.get_u32()?,
	})
}

fn put_coord(buf: &mut Buffer, coord: &Coord) -> Result<()> {
	buf.put_u8(coord.view)?;
	put_len(buf, coord.coord.len())?;
	coord.coord.iter().try_for_each(|dim| buf.put_u32(*dim))
}

fn get_coord(buf: &mut Buffer) -> Result<Coord> {
	let view = buf.get_u8()?;
	let dims = get_len(buf)?;
	check_count(buf, DataType::UINT32, dims)?;
	let coord = (0..dims).map(|_| buf.get_u32()).collect::<Result<Vec<_>>>()?;
	Ok(Coord { view, coord })
}

fn put_disk_stats(buf: &mut Buffer, stats: &DiskStats) -> Result<()> {
	put_opt_str(buf, stats.disk.as_deref())?;
	for counter in [
		stats.num_reads_completed,
		stats.num_reads_merged,
		stats.num_sectors_read,
		stats.milliseconds_reading,
		stats.num_writes_completed,
		stats.num_writes_merged,
		stats.num_sectors_written,
		stats.milliseconds_writing,
		stats.num_ios_in_progress,
		stats.milliseconds_io,
		stats.weighted_milliseconds_io,
	] {
		buf.put_u64(counter)?;
	}
	Ok(())
}

fn get_disk_stats(buf: &mut Buffer) -> Result<DiskStats> {
	Ok(DiskStats {
		disk: get_opt_str(buf, "disk name")?,
		num_reads_completed: buf.get_u64()?,
		num_reads_merged: buf.get_u64()?,
		num_sectors_read: buf.get_u64()?,
		milliseconds_reading: buf.get_u64()?,
		num_writes_completed: buf.get_u64()?,
		num_writes_merged: buf.get_u64()?,
		num_sectors_written: buf.get_u64()?,
		milliseconds_writing: buf.get_u64()?,
		num_ios_in_progress: buf.get_u64()?,
		milliseconds_io: buf.get_u64()?,
		weighted_milliseconds_io: buf.get_u64()?,
	})
}

fn put_net_stats(buf: &mut Buffer, stats: &NetStats) -> Result<()> {
	put_opt_str(buf, stats.net_interface.as_deref())?;
	for counter in [
		stats.num_bytes_recvd,
		stats.num_packets_recvd,
		stats.num_recv_errs,
		stats.num_bytes_sent,
		stats.num_packets_sent,
		stats.num_send_errs,
	] {
		buf.put_u64(counter)?;
	}
	Ok(())
}

fn get_net_stats(buf: &mut Buffer) -> Result<NetStats> {
	Ok(NetStats {
		net_interface: get_opt_str(buf, "net interface")?,
		num_bytes_recvd: buf.get_u64()?,
		num_packets_recvd: buf.get_u64()?,
		num_recv_errs: buf.get_u64()?,
		num_bytes_sent: buf.get_u64()?,
		num_packets_sent: buf.get_u64()?,
		num_send_errs: buf.get_u64()?,
	})
}

fn pack_array(buf: &mut Buffer, array: &DataArray) -> Result<()> {
	if array.ty == DataType::UNDEF && array.size() > 0 {
		return Err(WireError::UnknownDataType { ty: array.ty });
	}
	store_data_type(buf, array.ty)?;
	put_len(buf, array.size())?;
	match &array.items {
		ArrayItems::Values(values) => pack_values(buf, array.ty, values),
		ArrayItems::Infos(infos) => infos.iter().try_for_each(|info| pack_info(buf, info)),
		ArrayItems::Kvals(kvals) => kvals.iter().try_for_each(|kval| {
			put_str(buf, &kval.key)?;
			store_data_type(buf, kval.value.data_type())?;
			pack_payload(buf, &kval.value)
		}),
		ArrayItems::Arrays(arrays) => arrays.iter().try_for_each(|nested| pack_array(buf, nested)),
	}
}

fn pack_info(buf: &mut Buffer, info: &Info) -> Result<()> {
	put_str(buf, info.key().as_str())?;
	let mut flags = info.flags();
	flags.remove(InfoFlags::PERSISTENT);
	buf.put_u32(flags.bits())?;
	store_data_type(buf, info.value().data_type())?;
	pack_payload(buf, info.value())
}

fn unpack_array(cx: &UnpackCx, buf: &mut Buffer) -> Result<DataArray> {
	let cx = cx.nested()?;
	let ty = get_data_type(buf)?;
	let count = get_len(buf)?;
	check_count(buf, ty, count)?;

	let items = match ty {
		DataType::INFO => {
			let mut infos = Vec::with_capacity(count);
			for _ in 0..count {
				let key = get_str(buf, "info key")?;
				let flags = InfoFlags::from_bits(buf.get_u32()?);
				let value_ty = get_data_type(buf)?;
				let value = unpack_payload(&cx, buf, value_ty)?;
				infos.push(Info::from_parts(Key::new(&key), InfoSlot::Owned(value), flags));
			}
			ArrayItems::Infos(infos)
		}
		DataType::KVAL => {
			let mut kvals = Vec::with_capacity(count);
			for _ in 0..count {
				let key = get_str(buf, "kval key")?;
				let value_ty = get_data_type(buf)?;
				let value = unpack_payload(&cx, buf, value_ty)?;
				kvals.push(Kval {
					key,
					value: Box::new(value),
				});
			}
			ArrayItems::Kvals(kvals)
		}
		DataType::DATA_ARRAY => {
			let mut arrays = Vec::with_capacity(count);
			for _ in 0..count {
				arrays.push(unpack_array(&cx, buf)?);
			}
			ArrayItems::Arrays(arrays)
		}
		ty if ty == DataType::VALUE || Value::empty(ty).is_some() => ArrayItems::Values(read_values(&cx, buf, ty, count)?),
		ty => return Err(WireError::UnknownDataType { ty }),
	};
	Ok(DataArray { ty, items })
}

fn pack_payload(buf: &mut Buffer, value: &Value) -> Result<()> {
	match value {
		Value::Undef => Ok(()),
		Value::Unknown(ty) => Err(WireError::UnknownDataType { ty: *ty }),
		Value::Bool(flag) => buf.put_u8(u8::from(*flag)),
		Value::Byte(v)
		| Value::Uint8(v)
		| Value::Persist(v)
		| Value::Scope(v)
		| Value::DataRange(v)
		| Value::ProcState(v)
		| Value::AllocDirective(v)
		| Value::LinkState(v)
		| Value::JobState(v) => buf.put_u8(*v),
		Value::Int8(v) => buf.write_bytes(&v.to_be_bytes()),
		Value::Int16(v) => buf.write_bytes(&v.to_be_bytes()),
		Value::Uint16(v) | Value::Locality(v) | Value::StorAccessType(v) => buf.put_u16(*v),
		Value::DataType(ty) => store_data_type(buf, *ty),
		Value::Int(v) | Value::Int32(v) | Value::Pid(v) | Value::Status(v) => buf.put_i32(*v),
		Value::Uint(v) | Value::Uint32(v) | Value::Rank(v) => buf.put_u32(*v),
		Value::Int64(v) | Value::Time(v) => buf.put_i64(*v),
		Value::Uint64(v) | Value::DevType(v) | Value::StorMedium(v) | Value::StorAccess(v) | Value::StorPersist(v) => buf.put_u64(*v),
		Value::Size(v) => buf.put_u64(*v as u64),
		Value::Float(v) => buf.put_f32(*v),
		Value::Double(v) => buf.put_f64(*v),
		Value::Timeval(tv) => put_timeval(buf, *tv),
		Value::String(text) => put_str(buf, text),
		Value::Nspace(nspace) => put_str(buf, nspace.as_str()),
		Value::Proc(proc) => put_proc(buf, proc),
		Value::ByteObject(bytes) | Value::CompressedString(bytes) | Value::CompressedByteObject(bytes) | Value::Regex(bytes) => put_bytes(buf, bytes),
		Value::ProcInfo(info) => {
			put_proc(buf, &info.proc)?;
			put_opt_str(buf, info.hostname.as_deref())?;
			put_opt_str(buf, info.executable_name.as_deref())?;
			buf.put_i32(info.pid)?;
			buf.put_i32(info.exit_code)?;
			buf.put_u8(info.state)
		}
		Value::DataArray(array) => pack_array(buf, array),
		Value::Pointer(_) => Err(WireError::NotSupported { what: "packing pointers" }),
		Value::Envar(envar) => {
			put_opt_str(buf, envar.envar.as_deref())?;
			put_opt_str(buf, envar.value.as_deref())?;
			buf.put_u8(envar.separator)
		}
		Value::Coord(coord) => put_coord(buf, coord),
		Value::Topology(topo) => {
			put_str(buf, &topo.source)?;
			put_bytes(buf, &topo.data)
		}
		Value::Cpuset(cpuset) => {
			put_str(buf, &cpuset.source)?;
			put_bytes(buf, &cpuset.mask)
		}
		Value::Geometry(geometry) => {
			buf.put_u64(geometry.fabric as u64)?;
			put_opt_str(buf, geometry.uuid.as_deref())?;
			put_opt_str(buf, geometry.osname.as_deref())?;
			put_len(buf, geometry.coordinates.len())?;
			geometry.coordinates.iter().try_for_each(|coord| put_coord(buf, coord))
		}
		Value::DeviceDistance(dist) => {
			put_opt_str(buf, dist.uuid.as_deref())?;
			put_opt_str(buf, dist.osname.as_deref())?;
			buf.put_u64(dist.device_type)?;
			buf.put_u16(dist.mindist)?;
			buf.put_u16(dist.maxdist)
		}
		Value::Endpoint(endpoint) => {
			put_opt_str(buf, endpoint.uuid.as_deref())?;
			put_opt_str(buf, endpoint.osname.as_deref())?;
			put_bytes(buf, &endpoint.endpt)
		}
		Value::RegAttr(attr) => {
			put_opt_str(buf, attr.name.as_deref())?;
			put_str(buf, attr.string.as_str())?;
			store_data_type(buf, attr.ty)?;
			put_len(buf, attr.description.len())?;
			attr.description.iter().try_for_each(|line| put_str(buf, line))
		}
		Value::DataBuffer(nested) => {
			buf.put_u8(nested.buffer_type().to_byte())?;
			put_bytes(buf, nested.unread())
		}
		Value::ProcStats(stats) => {
			put_opt_str(buf, stats.node.as_deref())?;
			put_proc(buf, &stats.proc)?;
			buf.put_i32(stats.pid)?;
			put_opt_str(buf, stats.cmd.as_deref())?;
			buf.put_u8(stats.state)?;
			put_timeval(buf, stats.time)?;
			buf.put_f32(stats.percent_cpu)?;
			buf.put_i32(stats.priority)?;
			buf.put_u16(stats.num_threads)?;
			for mb in [stats.pss, stats.vsize, stats.rss, stats.peak_vsize] {
				buf.put_f32(mb)?;
			}
			buf.put_u16(stats.processor)?;
			put_timeval(buf, stats.sample_time)
		}
		Value::DiskStats(stats) => put_disk_stats(buf, stats),
		Value::NetStats(stats) => put_net_stats(buf, stats),
		Value::NodeStats(stats) => {
			put_opt_str(buf, stats.node.as_deref())?;
			for sample in [
				stats.la,
				stats.la5,
				stats.la15,
				stats.total_mem,
				stats.free_mem,
				stats.buffers,
				stats.cached,
				stats.swap_cached,
				stats.swap_total,
				stats.swap_free,
				stats.mapped,
			] {
				buf.put_f32(sample)?;
			}
			put_timeval(buf, stats.sample_time)?;
			put_len(buf, stats.diskstats.len())?;
			stats.diskstats.iter().try_for_each(|disk| put_disk_stats(buf, disk))?;
			put_len(buf, stats.netstats.len())?;
			stats.netstats.iter().try_for_each(|net| put_net_stats(buf, net))
		}
	}
}

fn unpack_payload(cx: &UnpackCx, buf: &mut Buffer, ty: DataType) -> Result<Value> {
	let value = match ty {
		DataType::UNDEF => Value::Undef,
		DataType::BOOL => Value::Bool(buf.get_u8()? != 0),
		DataType::BYTE => Value::Byte(buf.get_u8()?),
		DataType::UINT8 => Value::Uint8(buf.get_u8()?),
		DataType::PERSIST => Value::Persist(buf.get_u8()?),
		DataType::SCOPE => Value::Scope(buf.get_u8()?),
		DataType::DATA_RANGE => Value::DataRange(buf.get_u8()?),
		DataType::PROC_STATE => Value::ProcState(buf.get_u8()?),
		DataType::ALLOC_DIRECTIVE => Value::AllocDirective(buf.get_u8()?),
		DataType::LINK_STATE => Value::LinkState(buf.get_u8()?),
		DataType::JOB_STATE => Value::JobState(buf.get_u8()?),
		DataType::INT8 => Value::Int8(i8::from_be_bytes([buf.get_u8()?])),
		DataType::INT16 => Value::Int16(i16::from_be_bytes(buf.get_u16()?.to_be_bytes())),
		DataType::UINT16 => Value::Uint16(buf.get_u16()?),
		DataType::LOCTYPE => Value::Locality(buf.get_u16()?),
		DataType::STOR_ACCESS_TYPE => Value::StorAccessType(buf.get_u16()?),
		DataType::DATA_TYPE => Value::DataType(get_data_type(buf)?),
		DataType::INT => Value::Int(buf.get_i32()?),
		DataType::INT32 => Value::Int32(buf.get_i32()?),
		DataType::PID => Value::Pid(buf.get_i32()?),
		DataType::STATUS => Value::Status(buf.get_i32()?),
		DataType::UINT => Value::Uint(buf.get_u32()?),
		DataType::UINT32 => Value::Uint32(buf.get_u32()?),
		DataType::PROC_RANK => Value::Rank(buf.get_u32()?),
		DataType::INT64 => Value::Int64(buf.get_i64()?),
		DataType::TIME => Value::Time(buf.get_i64()?),
		DataType::UINT64 => Value::Uint64(buf.get_u64()?),
		DataType::DEVTYPE => Value::DevType(buf.get_u64()?),
		DataType::STOR_MEDIUM => Value::StorMedium(buf.get_u64()?),
		DataType::STOR_ACCESS => Value::StorAccess(buf.get_u64()?),
		DataType::STOR_PERSIST => Value::StorPersist(buf.get_u64()?),
		DataType::SIZE => Value::Size(usize::try_from(buf.get_u64()?).map_err(|_| WireError::BadParam {
			reason: "size exceeds platform width",
		})?),
		DataType::FLOAT => Value::Float(buf.get_f32()?),
		DataType::DOUBLE => Value::Double(buf.get_f64()?),
		DataType::TIMEVAL => Value::Timeval(get_timeval(buf)?),
		DataType::STRING => Value::String(get_str(buf, "string")?),
		DataType::PROC_NSPACE => Value::Nspace(Nspace::new(&get_str(buf, "nspace")?)),
		DataType::PROC => Value::Proc(Box::new(get_proc(buf)?)),
		DataType::BYTE_OBJECT => Value::ByteObject(get_bytes(buf)?),
		DataType::COMPRESSED_STRING => Value::CompressedString(get_bytes(buf)?),
		DataType::COMPRESSED_BYTE_OBJECT => Value::CompressedByteObject(get_bytes(buf)?),
		DataType::REGEX => Value::Regex(get_bytes(buf)?),
		DataType::PROC_INFO => Value::ProcInfo(Box::new(ProcInfo {
			proc: get_proc(buf)?,
			hostname: get_opt_str(buf, "hostname")?,
			executable_name: get_opt_str(buf, "executable name")?,
			pid: buf.get_i32()?,
			exit_code: buf.get_i32()?,
			state: buf.get_u8()?,
		})),
		DataType::DATA_ARRAY => Value::DataArray(Box::new(unpack_array(cx, buf)?)),
		DataType::POINTER => return Err(WireError::NotSupported { what: "unpacking pointers" }),
		DataType::ENVAR => Value::Envar(Envar {
			envar: get_opt_str(buf, "envar name")?,
			value: get_opt_str(buf, "envar value")?,
			separator: buf.get_u8()?,
		}),
		DataType::COORD => Value::Coord(Box::new(get_coord(buf)?)),
		DataType::TOPO => Value::Topology(Held::owned(Topology {
			source: get_str(buf, "topology source")?,
			data: get_bytes(buf)?,
		})),
		DataType::PROC_CPUSET => Value::Cpuset(Held::owned(Cpuset {
			source: get_str(buf, "cpuset source")?,
			mask: get_bytes(buf)?,
		})),
		DataType::GEOMETRY => {
			let fabric = usize::try_from(buf.get_u64()?).map_err(|_| WireError::BadParam {
				reason: "fabric index exceeds platform width",
			})?;
			let uuid = get_opt_str(buf, "geometry uuid")?;
			let osname = get_opt_str(buf, "geometry osname")?;
			let ncoords = get_len(buf)?;
			check_count(buf, DataType::COORD, ncoords)?;
			let coordinates = (0..ncoords).map(|_| get_coord(buf)).collect::<Result<Vec<_>>>()?;
			Value::Geometry(Box::new(Geometry {
				fabric,
				uuid,
				osname,
				coordinates,
			}))
		}
		DataType::DEVICE_DIST => Value::DeviceDistance(Box::new(DeviceDistance {
			uuid: get_opt_str(buf, "device uuid")?,
			osname: get_opt_str(buf, "device osname")?,
			device_type: buf.get_u64()?,
			mindist: buf.get_u16()?,
			maxdist: buf.get_u16()?,
		})),
		DataType::ENDPOINT => Value::Endpoint(Box::new(Endpoint {
			uuid: get_opt_str(buf, "endpoint uuid")?,
			osname: get_opt_str(buf, "endpoint osname")?,
			endpt: get_bytes(buf)?,
		})),
		DataType::REGATTR => {
			let name = get_opt_str(buf, "regattr name")?;
			let string = Key::new(&get_str(buf, "regattr key")?);
			let ty = get_data_type(buf)?;
			let lines = get_len(buf)?;
			check_count(buf, DataType::STRING, lines)?;
			let description = (0..lines).map(|_| get_str(buf, "regattr description")).collect::<Result<Vec<_>>>()?;
			Value::RegAttr(Box::new(RegAttr {
				name,
				string,
				ty,
				description,
			}))
		}
		DataType::DATA_BUFFER => {
			let marker = buf.get_u8()?;
			let buffer_type = BufferType::from_byte(marker).ok_or(WireError::BadParam {
				reason: "unknown nested buffer type",
			})?;
			let mut nested = Buffer::with_config(buf.growth(), buffer_type);
			nested.load(get_bytes(buf)?);
			Value::DataBuffer(Box::new(nested))
		}
		DataType::PROC_STATS => Value::ProcStats(Box::new(ProcStats {
			node: get_opt_str(buf, "stats node")?,
			proc: get_proc(buf)?,
			pid: buf.get_i32()?,
			cmd: get_opt_str(buf, "stats cmd")?,
			state: buf.get_u8()?,
			time: get_timeval(buf)?,
			percent_cpu: buf.get_f32()?,
			priority: buf.get_i32()?,
			num_threads: buf.get_u16()?,
			pss: buf.get_f32()?,
			vsize: buf.get_f32()?,
			rss: buf.get_f32()?,
			peak_vsize: buf.get_f32()?,
			processor: buf.get_u16()?,
			sample_time: get_timeval(buf)?,
		})),
		DataType::DISK_STATS => Value::DiskStats(Box::new(get_disk_stats(buf)?)),
		DataType::NET_STATS => Value::NetStats(Box::new(get_net_stats(buf)?)),
		DataType::NODE_STATS => {
			let mut stats = NodeStats {
				node: get_opt_str(buf, "stats node")?,
				la: buf.get_f32()?,
				la5: buf.get_f32()?,
				la15: buf.get_f32()?,
				total_mem: buf.get_f32()?,
				free_mem: buf.get_f32()?,
				buffers: buf.get_f32()?,
				cached: buf.get_f32()?,
				swap_cached: buf.get_f32()?,
				swap_total: buf.get_f32()?,
				swap_free: buf.get_f32()?,
				mapped: buf.get_f32()?,
				sample_time: get_timeval(buf)?,
				..NodeStats::default()
			};
			let disks = get_len(buf)?;
			check_count(buf, DataType::DISK_STATS, disks)?;
			stats.diskstats = (0..disks).map(|_| get_disk_stats(buf)).collect::<Result<Vec<_>>>()?;
			let nets = get_len(buf)?;
			check_count(buf, DataType::NET_STATS, nets)?;
			stats.netstats = (0..nets).map(|_| get_net_stats(buf)).collect::<Result<Vec<_>>>()?;
			Value::NodeStats(Box::new(stats))
		}
		ty => return Err(WireError::UnknownDataType { ty }),
	};
	Ok(value)
}

#[cfg(test)]
mod tests;
