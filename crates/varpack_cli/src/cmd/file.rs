use varpack::wire::{Buffer, BufferType, DataArray, DataType, Engine, Value};

use crate::cmd::{CliError, Result};

const MAGIC: &[u8; 3] = b"VPK";
const VERSION: u8 = 1;
const HEADER_LEN: usize = MAGIC.len() + 2;

/// Frame `array` as a `.vpk` file using the engine's buffer settings.
///
/// Layout: `VPK`, version byte, buffer-type byte, then one packed `DATA_ARRAY`.
pub(crate) fn encode(engine: &Engine, array: DataArray) -> Result<Vec<u8>> {
	let mut buf = engine.new_buffer();
	buf.write_bytes(MAGIC)?;
	buf.put_u8(VERSION)?;
	buf.put_u8(buf.buffer_type().to_byte())?;
	engine.pack(&mut buf, &[Value::DataArray(Box::new(array))], DataType::DATA_ARRAY)?;
	tracing::debug!(bytes = buf.bytes_used(), "packed file framed");
	Ok(buf.unload())
}

/// Parse a `.vpk` file back into its buffer type and info array.
pub(crate) fn decode(engine: &Engine, bytes: Vec<u8>) -> Result<(BufferType, DataArray)> {
	if bytes.len() < HEADER_LEN || &bytes[..MAGIC.len()] != MAGIC {
		return Err(CliError::BadFile { reason: "missing header" });
	}
	if bytes[MAGIC.len()] != VERSION {
		return Err(CliError::BadFile {
			reason: "unsupported version",
		});
	}
	let buffer_type = BufferType::from_byte(bytes[MAGIC.len() + 1]).ok_or(CliError::BadFile {
		reason: "unknown buffer type",
	})?;

	let mut buf = Buffer::with_config(engine.config().buffer, buffer_type);
	buf.load(bytes);
	buf.read_exact(HEADER_LEN)?;
	let values = engine.unpack(&mut buf, DataType::DATA_ARRAY, 1)?;
	if buf.remaining() > 0 {
		tracing::warn!(trailing = buf.remaining(), "ignoring bytes after the info array");
	}

	match values.into_iter().next() {
		Some(Value::DataArray(array)) => Ok((buffer_type, *array)),
		_ => Err(CliError::BadFile {
			reason: "missing info array",
		}),
	}
}
