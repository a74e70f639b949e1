use serde::Deserialize;
use serde_json::json;
use varpack::wire::{ArrayItems, DataArray, DataType, Datum, Engine, Envar, Info, InfoFlags, InfoList, Proc, Timeval, Value};

use crate::cmd::util::{flag_names, hex, parse_type};
use crate::cmd::{CliError, Result};

/// JSON document accepted by `varpack pack`.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct InfoDoc {
	pub(crate) infos: Vec<InfoSpec>,
}

/// One info entry: key, type name, JSON value, and directive.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct InfoSpec {
	pub(crate) key: String,
	#[serde(rename = "type")]
	pub(crate) ty: String,
	#[serde(default)]
	pub(crate) value: serde_json::Value,
	#[serde(default)]
	pub(crate) required: bool,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ProcSpec {
	nspace: String,
	rank: u32,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct EnvarSpec {
	name: String,
	value: Option<String>,
	#[serde(default = "default_separator")]
	separator: char,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TimevalSpec {
	sec: i64,
	#[serde(default)]
	usec: i64,
}

fn default_separator() -> char {
	':'
}

const SIGNED: &[DataType] = &[
	DataType::INT,
	DataType::INT8,
	DataType::INT16,
	DataType::INT32,
	DataType::INT64,
	DataType::PID,
	DataType::STATUS,
	DataType::TIME,
];

/// Build an info list from `doc`, compressing long strings when `compress` is set.
pub(crate) fn build_list(engine: &Engine, doc: &InfoDoc, compress: bool) -> Result<InfoList> {
	let mut list = InfoList::start();
	for entry in &doc.infos {
		let mut info = load_info(engine, entry, compress)?;
		let copied = list.xfer(engine, &info);
		engine.info_destruct(&mut info);
		copied?;
	}
	tracing::debug!(count = list.len(), "info list built");
	Ok(list)
}

fn load_info(engine: &Engine, entry: &InfoSpec, compress: bool) -> Result<Info> {
	let ty = parse_type(&entry.ty)?;
	let bad = |reason: String| CliError::BadValue {
		key: entry.key.clone(),
		reason,
	};

	let mut info = Info::default();
	let key = Some(entry.key.as_str());
	let json = &entry.value;
	if json.is_null() {
		engine.info_load(&mut info, key, None, ty)?;
	} else if let Some(width) = ty.fixed_width() {
		let raw = raw_scalar(ty, width, json).map_err(bad)?;
		engine.info_load(&mut info, key, Some(Datum::Raw(&raw)), ty)?;
	} else {
		match ty {
			DataType::STRING | DataType::PROC_NSPACE | DataType::REGEX => {
				let text = json.as_str().ok_or_else(|| bad(format!("{ty} expects a string")))?;
				match compressed(engine, ty, text, compress)? {
					Some(packed) => engine.info_load(&mut info, key, Some(Datum::Value(&packed)), packed.data_type())?,
					None => engine.info_load(&mut info, key, Some(Datum::Str(text)), ty)?,
				}
			}
			DataType::BYTE_OBJECT => {
				let bytes = byte_run(json).ok_or_else(|| bad("byte object expects a string or an array of bytes".into()))?;
				engine.info_load(&mut info, key, Some(Datum::Bytes(&bytes)), ty)?;
			}
			DataType::PROC => {
				let parsed: ProcSpec = serde_json::from_value(json.clone()).map_err(|err| bad(err.to_string()))?;
				let proc = Proc::new(&parsed.nspace, parsed.rank);
				engine.info_load(&mut info, key, Some(Datum::Proc(&proc)), ty)?;
			}
			DataType::ENVAR => {
				let parsed: EnvarSpec = serde_json::from_value(json.clone()).map_err(|err| bad(err.to_string()))?;
				let separator = u8::try_from(parsed.separator).map_err(|_| bad("separator must be a single byte".into()))?;
				let envar = Envar {
					envar: Some(parsed.name),
					value: parsed.value,
					separator,
				};
				engine.info_load(&mut info, key, Some(Datum::Envar(&envar)), ty)?;
			}
			_ => return Err(CliError::UnsupportedType { ty }),
		}
	}

	if entry.required {
		info.set_flags(InfoFlags::REQUIRED);
	}
	Ok(info)
}

fn compressed(engine: &Engine, ty: DataType, text: &str, compress: bool) -> Result<Option<Value>> {
	if !compress || ty != DataType::STRING {
		return Ok(None);
	}
	Ok(engine.compress_string(text)?)
}

fn byte_run(json: &serde_json::Value) -> Option<Vec<u8>> {
	match json {
		serde_json::Value::String(text) => Some(text.as_bytes().to_vec()),
		serde_json::Value::Array(items) => items.iter().map(|item| item.as_u64().and_then(|byte| u8::try_from(byte).ok())).collect(),
		_ => None,
	}
}

/// Native-order bytes of a fixed-width scalar written as JSON.
fn raw_scalar(ty: DataType, width: usize, json: &serde_json::Value) -> std::result::Result<Vec<u8>, String> {
	let out_of_range = || format!("{json} does not fit {ty}");
	match ty {
		DataType::BOOL => json.as_bool().map(|flag| vec![u8::from(flag)]).ok_or_else(|| format!("{ty} expects true or false")),
		DataType::FLOAT => json
			.as_f64()
			.map(|v| (v as f32).to_ne_bytes().to_vec())
			.ok_or_else(|| format!("{ty} expects a number")),
		DataType::DOUBLE => json.as_f64().map(|v| v.to_ne_bytes().to_vec()).ok_or_else(|| format!("{ty} expects a number")),
		DataType::TIMEVAL => {
			let tv: TimevalSpec = serde_json::from_value(json.clone()).map_err(|err| err.to_string())?;
			Ok(Timeval {
				sec: tv.sec,
				usec: tv.usec,
			}
			.to_ne_bytes()
			.to_vec())
		}
		DataType::DATA_TYPE => {
			let name = json.as_str().ok_or_else(|| format!("{ty} expects a type name"))?;
			let tag = parse_type(name).map_err(|err| err.to_string())?;
			Ok(tag.0.to_ne_bytes().to_vec())
		}
		ty if SIGNED.contains(&ty) => {
			let v = json.as_i64().ok_or_else(|| format!("{ty} expects an integer"))?;
			match width {
				1 => i8::try_from(v).map(|v| v.to_ne_bytes().to_vec()).map_err(|_| out_of_range()),
				2 => i16::try_from(v).map(|v| v.to_ne_bytes().to_vec()).map_err(|_| out_of_range()),
				4 => i32::try_from(v).map(|v| v.to_ne_bytes().to_vec()).map_err(|_| out_of_range()),
				_ => Ok(v.to_ne_bytes().to_vec()),
			}
		}
		_ => {
			let v = json.as_u64().ok_or_else(|| format!("{ty} expects an unsigned integer"))?;
			match width {
				1 => u8::try_from(v).map(|v| v.to_ne_bytes().to_vec()).map_err(|_| out_of_range()),
				2 => u16::try_from(v).map(|v| v.to_ne_bytes().to_vec()).map_err(|_| out_of_range()),
				4 => u32::try_from(v).map(|v| v.to_ne_bytes().to_vec()).map_err(|_| out_of_range()),
				_ if ty == DataType::SIZE => usize::try_from(v).map(|v| v.to_ne_bytes().to_vec()).map_err(|_| out_of_range()),
				_ => Ok(v.to_ne_bytes().to_vec()),
			}
		}
	}
}

/// JSON rendering of an unpacked info array.
pub(crate) fn array_json(engine: &Engine, array: &DataArray) -> serde_json::Value {
	match array.items() {
		ArrayItems::Infos(infos) => infos.iter().map(|info| info_json(engine, info)).collect(),
		ArrayItems::Values(values) => values.iter().map(|value| value_json(engine, value)).collect(),
		ArrayItems::Kvals(kvals) => kvals
			.iter()
			.map(|kval| json!({ "key": kval.key, "type": kval.value.data_type().to_string(), "value": value_json(engine, &kval.value) }))
			.collect(),
		ArrayItems::Arrays(arrays) => arrays.iter().map(|nested| array_json(engine, nested)).collect(),
	}
}

fn info_json(engine: &Engine, info: &Info) -> serde_json::Value {
	json!({
		"key": info.key().as_str(),
		"type": type_label(engine, info.value().data_type()),
		"flags": flag_names(info.flags()),
		"value": value_json(engine, info.value()),
	})
}

fn type_label(engine: &Engine, ty: DataType) -> String {
	engine.data_type_string(ty).map_or_else(|| ty.to_string(), str::to_owned)
}

/// JSON rendering of one value; compressed payloads are expanded.
pub(crate) fn value_json(engine: &Engine, value: &Value) -> serde_json::Value {
	match value {
		Value::Undef | Value::Unknown(_) => serde_json::Value::Null,
		Value::Bool(v) => json!(v),
		Value::Byte(v)
		| Value::Uint8(v)
		| Value::Persist(v)
		| Value::Scope(v)
		| Value::DataRange(v)
		| Value::ProcState(v)
		| Value::AllocDirective(v)
		| Value::LinkState(v)
		| Value::JobState(v) => json!(v),
		Value::Int8(v) => json!(v),
		Value::Int16(v) => json!(v),
		Value::Uint16(v) | Value::Locality(v) | Value::StorAccessType(v) => json!(v),
		Value::Int(v) | Value::Int32(v) | Value::Pid(v) | Value::Status(v) => json!(v),
		Value::Uint(v) | Value::Uint32(v) | Value::Rank(v) => json!(v),
		Value::Int64(v) | Value::Time(v) => json!(v),
		Value::Uint64(v) | Value::DevType(v) | Value::StorMedium(v) | Value::StorAccess(v) | Value::StorPersist(v) => json!(v),
		Value::Size(v) => json!(v),
		Value::Float(v) => json!(f64::from(*v)),
		Value::Double(v) => json!(v),
		Value::Timeval(tv) => json!({ "sec": tv.sec, "usec": tv.usec }),
		Value::DataType(ty) => json!(type_label(engine, *ty)),
		Value::String(text) => json!(text),
		Value::Nspace(nspace) => json!(nspace.as_str()),
		Value::Proc(proc) => json!({ "nspace": proc.nspace.as_str(), "rank": proc.rank }),
		Value::ByteObject(bytes) => json!(hex(bytes)),
		Value::CompressedString(_) | Value::CompressedByteObject(_) => match engine.decompress_value(value) {
			Ok(expanded) => value_json(engine, &expanded),
			Err(err) => {
				tracing::warn!(%err, "compressed payload could not be expanded");
				serde_json::Value::Null
			}
		},
		Value::Regex(bytes) => json!(String::from_utf8_lossy(bytes.strip_suffix(&[0u8]).unwrap_or(bytes.as_slice()))),
		Value::Envar(envar) => json!({
			"name": envar.envar,
			"value": envar.value,
			"separator": char::from(envar.separator).to_string(),
		}),
		Value::DataArray(array) => array_json(engine, array),
		other => json!(other.to_string()),
	}
}
