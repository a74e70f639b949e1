use std::io::Read;

use crate::wire::{Engine, Result, Value, WireError};

/// zstd frame magic at the start of every compressed payload.
pub const ZSTD_MAGIC: [u8; 4] = [0x28, 0xB5, 0x2F, 0xFD];
const ZSTD_LEVEL: i32 = 3;

/// Compress `bytes` into a single zstd frame.
pub fn compress(bytes: &[u8]) -> Result<Vec<u8>> {
	Ok(zstd::stream::encode_all(bytes, ZSTD_LEVEL)?)
}

/// Expand a zstd frame, failing once the output would exceed `limit` bytes.
pub fn decompress(raw: &[u8], limit: usize) -> Result<Vec<u8>> {
	if !raw.starts_with(&ZSTD_MAGIC) {
		return Err(WireError::BadParam {
			reason: "compressed payload lacks zstd magic",
		});
	}

	let mut decoder = zstd::stream::read::Decoder::new(raw)?;
	let mut out = Vec::new();
	let mut buf = [0_u8; 8192];

	loop {
		let read = decoder.read(&mut buf)?;
		if read == 0 {
			break;
		}

		if out.len() + read > limit {
			return Err(WireError::DecompressedTooLarge { limit });
		}

		out.extend_from_slice(&buf[..read]);
	}

	Ok(out)
}

impl Engine {
	/// Compress `text` into a `COMPRESSED_STRING` when it reaches the configured floor.
	///
	/// Returns `None` for shorter strings, which are cheaper to send as-is.
	pub fn compress_string(&self, text: &str) -> Result<Option<Value>> {
		if text.len() < self.config().compress_limit {
			return Ok(None);
		}
		let packed = compress(text.as_bytes())?;
		tracing::debug!(from = text.len(), to = packed.len(), "string compressed");
		Ok(Some(Value::CompressedString(packed)))
	}

	/// Compress `bytes` into a `COMPRESSED_BYTE_OBJECT` when it reaches the configured floor.
	pub fn compress_bytes(&self, bytes: &[u8]) -> Result<Option<Value>> {
		if bytes.len() < self.config().compress_limit {
			return Ok(None);
		}
		let packed = compress(bytes)?;
		tracing::debug!(from = bytes.len(), to = packed.len(), "byte object compressed");
		Ok(Some(Value::CompressedByteObject(packed)))
	}

	/// Expand a compressed value back to `STRING` or `BYTE_OBJECT`.
	pub fn decompress_value(&self, value: &Value) -> Result<Value> {
		let limit = self.config().max_decompressed;
		match value {
			Value::CompressedString(raw) => {
				let bytes = decompress(raw, limit)?;
				let text = String::from_utf8(bytes).map_err(|_| WireError::InvalidUtf8 { what: "compressed string" })?;
				Ok(Value::String(text))
			}
			Value::CompressedByteObject(raw) => Ok(Value::ByteObject(decompress(raw, limit)?)),
			_ => Err(WireError::BadParam {
				reason: "value is not compressed",
			}),
		}
	}
}
