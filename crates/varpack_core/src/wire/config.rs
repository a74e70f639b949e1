use serde::Deserialize;

use crate::wire::{Result, WireError};

/// Environment variable overriding [`BufferConfig::initial_size`].
pub const ENV_BUFFER_INITIAL_SIZE: &str = "VARPACK_BUFFER_INITIAL_SIZE";
/// Environment variable overriding [`BufferConfig::threshold_size`].
pub const ENV_BUFFER_THRESHOLD_SIZE: &str = "VARPACK_BUFFER_THRESHOLD_SIZE";
/// Environment variable overriding [`EngineConfig::buffer_type`].
pub const ENV_BUFFER_TYPE: &str = "VARPACK_BUFFER_TYPE";
/// Environment variable overriding [`EngineConfig::strict_types`].
pub const ENV_STRICT_TYPES: &str = "VARPACK_STRICT_TYPES";
/// Environment variable overriding [`EngineConfig::max_depth`].
pub const ENV_MAX_DEPTH: &str = "VARPACK_MAX_DEPTH";
/// Environment variable overriding [`EngineConfig::compress_limit`].
pub const ENV_COMPRESS_LIMIT: &str = "VARPACK_COMPRESS_LIMIT";

/// Growth policy of packing buffers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BufferConfig {
	/// Size of the first allocation; doubled until the threshold is reached.
	pub initial_size: usize,
	/// Above this many bytes, growth rounds up to a multiple of the threshold.
	pub threshold_size: usize,
}

impl Default for BufferConfig {
	fn default() -> Self {
		Self {
			initial_size: 128,
			threshold_size: 4096,
		}
	}
}

impl BufferConfig {
	/// Reject sizes that would stall growth.
	pub fn validate(&self) -> Result<()> {
		if self.initial_size == 0 {
			return Err(WireError::InvalidConfig {
				key: "buffer.initial_size",
				value: self.initial_size.to_string(),
			});
		}
		if self.threshold_size == 0 {
			return Err(WireError::InvalidConfig {
				key: "buffer.threshold_size",
				value: self.threshold_size.to_string(),
			});
		}
		Ok(())
	}
}

/// Whether packed data carries type tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BufferType {
	/// Payload only.
	#[default]
	NonDescribed,
	/// Every packed group is preceded by its type tag.
	FullyDescribed,
}

impl BufferType {
	/// Stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::NonDescribed => "non_described",
			Self::FullyDescribed => "fully_described",
		}
	}

	/// Parse a label produced by [`BufferType::as_str`].
	pub fn parse(label: &str) -> Option<Self> {
		match label.trim().to_ascii_lowercase().as_str() {
			"non_described" | "non-described" | "non_desc" => Some(Self::NonDescribed),
			"fully_described" | "fully-described" | "fully_desc" => Some(Self::FullyDescribed),
			_ => None,
		}
	}

	/// Wire marker byte.
	pub fn to_byte(self) -> u8 {
		match self {
			Self::NonDescribed => 0,
			Self::FullyDescribed => 1,
		}
	}

	/// Parse a wire marker byte.
	pub fn from_byte(byte: u8) -> Option<Self> {
		match byte {
			0 => Some(Self::NonDescribed),
			1 => Some(Self::FullyDescribed),
			_ => None,
		}
	}
}

/// Process-wide engine settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
	/// Buffer growth policy.
	pub buffer: BufferConfig,
	/// Description mode of newly created buffers.
	pub buffer_type: BufferType,
	/// Fail on unknown type tags in `load` instead of leaving the payload unset.
	pub strict_types: bool,
	/// Maximum nesting of arrays and buffers during copy and unpack.
	pub max_depth: u32,
	/// Minimum string length worth compressing.
	pub compress_limit: usize,
	/// Maximum decompressed payload size.
	pub max_decompressed: usize,
}

impl Default for EngineConfig {
	fn default() -> Self {
		Self {
			buffer: BufferConfig::default(),
			buffer_type: BufferType::NonDescribed,
			strict_types: false,
			max_depth: 32,
			compress_limit: 4096,
			max_decompressed: 512 * 1024 * 1024,
		}
	}
}

impl EngineConfig {
	/// Preset for debugging peers: typed buffers and fail-fast on unknown tags.
	pub fn strict() -> Self {
		Self {
			buffer_type: BufferType::FullyDescribed,
			strict_types: true,
			..Self::default()
		}
	}

	/// Defaults with overrides read from the process environment.
	pub fn from_env() -> Result<Self> {
		Self::default().with_env_overrides(|key| std::env::var(key).ok())
	}

	/// Apply `VARPACK_*` overrides resolved through `lookup`.
	pub fn with_env_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
		if let Some(raw) = lookup(ENV_BUFFER_INITIAL_SIZE) {
			self.buffer.initial_size = parse_number(ENV_BUFFER_INITIAL_SIZE, &raw)?;
		}
		if let Some(raw) = lookup(ENV_BUFFER_THRESHOLD_SIZE) {
			self.buffer.threshold_size = parse_number(ENV_BUFFER_THRESHOLD_SIZE, &raw)?;
		}
		if let Some(raw) = lookup(ENV_BUFFER_TYPE) {
			self.buffer_type = BufferType::parse(&raw).ok_or(WireError::InvalidConfig {
				key: ENV_BUFFER_TYPE,
				value: raw.clone(),
			})?;
		}
		if let Some(raw) = lookup(ENV_STRICT_TYPES) {
			self.strict_types = parse_flag(ENV_STRICT_TYPES, &raw)?;
		}
		if let Some(raw) = lookup(ENV_MAX_DEPTH) {
			self.max_depth = parse_number(ENV_MAX_DEPTH, &raw)?;
		}
		if let Some(raw) = lookup(ENV_COMPRESS_LIMIT) {
			self.compress_limit = parse_number(ENV_COMPRESS_LIMIT, &raw)?;
		}
		self.validate()?;
		Ok(self)
	}

	/// Reject settings the engine cannot operate with.
	pub fn validate(&self) -> Result<()> {
		self.buffer.validate()?;
		if self.max_depth == 0 {
			return Err(WireError::InvalidConfig {
				key: "max_depth",
				value: self.max_depth.to_string(),
			});
		}
		Ok(())
	}
}

fn parse_number<T: std::str::FromStr>(key: &'static str, raw: &str) -> Result<T> {
	raw.trim().parse::<T>().map_err(|_| WireError::InvalidConfig { key, value: raw.to_owned() })
}

fn parse_flag(key: &'static str, raw: &str) -> Result<bool> {
	match raw.trim().to_ascii_lowercase().as_str() {
		"1" | "true" | "yes" | "on" => Ok(true),
		"0" | "false" | "no" | "off" => Ok(false),
		_ => Err(WireError::InvalidConfig { key, value: raw.to_owned() }),
	}
}

#[cfg(test)]
mod tests;
