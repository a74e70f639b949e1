use std::mem;

use crate::wire::copy::{CopyCx, Duplicate, adopt, copy_bytes, copy_string};
use crate::wire::{Alias, ArrayItems, DataArray, DataType, Datum, Engine, Held, Nspace, Result, Value, WireError};

/// Payload returned by [`Engine::unload`].
#[derive(Debug, PartialEq)]
pub enum Extracted {
	/// Scalar bytes were written into the caller's slice.
	Written,
	/// Fresh copy of a string.
	String(String),
	/// Byte-object storage handed off from the source value.
	Bytes(Vec<u8>),
	/// Independent copy of a composite payload.
	Copy(Value),
	/// Alias carried by a pointer value.
	Pointer(Alias),
}

/// Result of [`Engine::unload`]: the payload and its reported size.
#[derive(Debug, PartialEq)]
pub struct Unloaded {
	/// Scalar width, string or byte length, or in-memory payload size.
	pub size: usize,
	/// Extracted payload.
	pub data: Extracted,
}

impl Engine {
	/// Construct `value` of type `ty` from `data`, releasing whatever it held before.
	///
	/// Without data the canonical empty payload is produced. On failure the error is
	/// logged and `value` is left `Undef`.
	pub fn load(&self, value: &mut Value, data: Option<Datum<'_>>, ty: DataType) -> Result<()> {
		self.destruct(value);
		match self.build(data, ty) {
			Ok(loaded) => {
				*value = loaded;
				Ok(())
			}
			Err(err) => {
				tracing::error!(%ty, %err, "value load failed");
				Err(err)
			}
		}
	}

	fn build(&self, data: Option<Datum<'_>>, ty: DataType) -> Result<Value> {
		let Some(empty) = Value::empty(ty) else {
			return self.unknown_type(ty);
		};
		let Some(data) = data else {
			return Ok(empty);
		};

		if let Datum::Value(src) = data {
			if src.data_type() != ty {
				return Err(WireError::BadParam {
					reason: "datum kind does not match type",
				});
			}
			return self.xfer(src);
		}
		if ty.fixed_width().is_some() {
			let Datum::Raw(raw) = data else {
				return Err(WireError::BadParam {
					reason: "scalar types load from raw bytes",
				});
			};
			return Value::from_raw(ty, raw);
		}

		let cx = CopyCx::new(self);
		let value = match (ty, data) {
			(DataType::UNDEF, _) => Value::Undef,
			(DataType::STRING, Datum::Str(text)) => Value::String(copy_string(text)?),
			(DataType::PROC_NSPACE, Datum::Str(text)) => Value::Nspace(Nspace::new(text)),
			(DataType::REGEX, Datum::Str(pattern)) => Value::Regex(self.patterns().copy(pattern)?),
			(ty, Datum::Bytes(bytes)) if ty.is_byte_object() && ty != DataType::REGEX => {
				Value::byte_object(ty, copy_bytes(bytes)?).ok_or(WireError::UnknownDataType { ty })?
			}
			(DataType::PROC, Datum::Proc(proc)) => Value::Proc(Box::new(proc.duplicate(&cx)?)),
			(DataType::PROC_INFO, Datum::ProcInfo(info)) => Value::ProcInfo(Box::new(info.duplicate(&cx)?)),
			(DataType::DATA_ARRAY, Datum::Array(array)) => Value::DataArray(Box::new(array.duplicate(&cx)?)),
			(DataType::POINTER, Datum::Pointer(alias)) => Value::Pointer(alias.clone()),
			(DataType::ENVAR, Datum::Envar(envar)) => Value::Envar(envar.duplicate(&cx)?),
			(DataType::COORD, Datum::Coord(coord)) => Value::Coord(Box::new(coord.duplicate(&cx)?)),
			(DataType::TOPO, Datum::Topology(topo)) => Value::Topology(adopt(topo, self.topology().copy_topology(topo), "topology")?),
			(DataType::PROC_CPUSET, Datum::Cpuset(cpuset)) => Value::Cpuset(adopt(cpuset, self.topology().copy_cpuset(cpuset), "cpuset")?),
			(DataType::GEOMETRY, Datum::Geometry(geometry)) => Value::Geometry(Box::new(geometry.duplicate(&cx)?)),
			(DataType::DEVICE_DIST, Datum::DeviceDistance(dist)) => Value::DeviceDistance(Box::new(dist.duplicate(&cx)?)),
			(DataType::ENDPOINT, Datum::Endpoint(endpoint)) => Value::Endpoint(Box::new(endpoint.duplicate(&cx)?)),
			(DataType::REGATTR, Datum::RegAttr(attr)) => Value::RegAttr(Box::new(attr.duplicate(&cx)?)),
			(DataType::DATA_BUFFER, Datum::Buffer(buffer)) => Value::DataBuffer(Box::new(buffer.duplicate(&cx)?)),
			(DataType::PROC_STATS, Datum::ProcStats(stats)) => Value::ProcStats(Box::new(stats.duplicate(&cx)?)),
			(DataType::DISK_STATS, Datum::DiskStats(stats)) => Value::DiskStats(Box::new(stats.duplicate(&cx)?)),
			(DataType::NET_STATS, Datum::NetStats(stats)) => Value::NetStats(Box::new(stats.duplicate(&cx)?)),
			(DataType::NODE_STATS, Datum::NodeStats(stats)) => Value::NodeStats(Box::new(stats.duplicate(&cx)?)),
			_ => {
				return Err(WireError::BadParam {
					reason: "datum kind does not match type",
				});
			}
		};
		Ok(value)
	}

	fn unknown_type(&self, ty: DataType) -> Result<Value> {
		if self.config().strict_types {
			return Err(WireError::UnknownDataType { ty });
		}
		tracing::debug!(%ty, "loading unknown type without payload");
		Ok(Value::Unknown(ty))
	}

	/// Extract the payload of `value`.
	///
	/// Scalars are written into `out`, which must be at least the scalar width.
	/// Byte objects hand off their storage and leave `value` holding an empty byte
	/// object. Strings and composites are returned as independent copies.
	pub fn unload(&self, value: &mut Value, out: Option<&mut [u8]>) -> Result<Unloaded> {
		if let Some(raw) = value.scalar_bytes() {
			let Some(out) = out else {
				return Err(WireError::BadParam {
					reason: "scalar unload requires an output slice",
				});
			};
			let Some(dst) = out.get_mut(..raw.len()) else {
				return Err(WireError::BadParam {
					reason: "output slice shorter than scalar width",
				});
			};
			dst.copy_from_slice(raw.as_slice());
			return Ok(Unloaded {
				size: raw.len(),
				data: Extracted::Written,
			});
		}

		let ty = value.data_type();
		let unloaded = match value {
			Value::Undef | Value::Unknown(_) => return Err(WireError::UnknownDataType { ty }),
			Value::String(text) => Unloaded {
				size: text.len(),
				data: Extracted::String(copy_string(text)?),
			},
			Value::ByteObject(bytes) | Value::CompressedString(bytes) | Value::CompressedByteObject(bytes) | Value::Regex(bytes) => {
				let bytes = mem::take(bytes);
				Unloaded {
					size: bytes.len(),
					data: Extracted::Bytes(bytes),
				}
			}
			Value::Pointer(alias) => Unloaded {
				size: size_of::<usize>(),
				data: Extracted::Pointer(alias.clone()),
			},
			composite => Unloaded {
				size: composite.payload_size(),
				data: Extracted::Copy(self.xfer(composite)?),
			},
		};
		Ok(unloaded)
	}

	/// Independent copy of `src`.
	///
	/// Pointers alias. Topology and cpuset payloads keep the source handle when the
	/// topology collaborator is not ready.
	pub fn xfer(&self, src: &Value) -> Result<Value> {
		src.duplicate(&CopyCx::new(self))
	}

	/// Release everything `value` owns and reset it to `Undef`. Idempotent.
	pub fn destruct(&self, value: &mut Value) {
		self.release(mem::take(value));
	}

	/// Release every element of `array` and reset it to an empty `UNDEF` array.
	pub fn darray_destruct(&self, array: &mut DataArray) {
		let DataArray { ty, items } = mem::take(array);
		tracing::trace!(%ty, size = items.len(), "array released");
		match items {
			ArrayItems::Values(values) => values.into_iter().for_each(|value| self.release(value)),
			ArrayItems::Infos(infos) => infos.into_iter().for_each(|info| self.release_info(info)),
			ArrayItems::Kvals(kvals) => kvals.into_iter().for_each(|kval| self.release(*kval.value)),
			ArrayItems::Arrays(arrays) => {
				for mut nested in arrays {
					self.darray_destruct(&mut nested);
				}
			}
		}
	}

	pub(crate) fn release(&self, value: Value) {
		match value {
			Value::Topology(Held::Owned(topo)) => self.topology().release_topology(*topo),
			Value::Cpuset(Held::Owned(cpuset)) => self.topology().release_cpuset(*cpuset),
			Value::Regex(bytes) if !bytes.is_empty() => self.patterns().release(bytes),
			Value::DataArray(mut array) => self.darray_destruct(&mut array),
			_ => {}
		}
	}
}
