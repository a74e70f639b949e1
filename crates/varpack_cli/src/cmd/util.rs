use std::path::Path;

use varpack::wire::{DataType, InfoFlags};

use crate::cmd::{CliError, Result};

/// Read a whole file, tagging errors with its path.
pub(crate) fn read_file(path: &Path) -> Result<Vec<u8>> {
	std::fs::read(path).map_err(|source| CliError::Io {
		path: path.to_path_buf(),
		source,
	})
}

/// Write a whole file, tagging errors with its path.
pub(crate) fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
	std::fs::write(path, bytes).map_err(|source| CliError::Io {
		path: path.to_path_buf(),
		source,
	})
}

/// Parse a built-in type name (case-insensitive) or a decimal tag.
pub(crate) fn parse_type(name: &str) -> Result<DataType> {
	if let Some(ty) = DataType::from_name(name) {
		return Ok(ty);
	}
	name.parse::<u16>()
		.map(DataType)
		.map_err(|_| CliError::UnknownType { name: name.to_owned() })
}

/// Labels of the set directive bits, in bit order.
pub(crate) fn flag_names(flags: InfoFlags) -> Vec<&'static str> {
	[
		(InfoFlags::REQUIRED, "required"),
		(InfoFlags::ARRAY_END, "array_end"),
		(InfoFlags::REQUIRED_PROCESSED, "required_processed"),
		(InfoFlags::QUALIFIER, "qualifier"),
		(InfoFlags::PERSISTENT, "persistent"),
	]
	.into_iter()
	.filter(|(bit, _)| flags.contains(*bit))
	.map(|(_, name)| name)
	.collect()
}

/// Lowercase hex rendering of a byte run.
pub(crate) fn hex(bytes: &[u8]) -> String {
	bytes.iter().map(|byte| format!("{byte:02x}")).collect()
}
