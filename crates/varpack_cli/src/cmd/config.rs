use std::path::Path;

use varpack::wire::EngineConfig;

use crate::cmd::util::read_file;
use crate::cmd::{CliError, Result};

/// Resolve engine settings: JSON file (if any), then `VARPACK_*` environment overrides.
pub(crate) fn load(path: Option<&Path>) -> Result<EngineConfig> {
	load_with(path, |key| std::env::var(key).ok())
}

pub(crate) fn load_with(path: Option<&Path>, lookup: impl Fn(&str) -> Option<String>) -> Result<EngineConfig> {
	let base = match path {
		Some(path) => {
			let raw = read_file(path)?;
			serde_json::from_slice(&raw).map_err(|source| CliError::Json {
				path: path.to_path_buf(),
				source,
			})?
		}
		None => EngineConfig::default(),
	};

	let config = base.with_env_overrides(lookup)?;
	tracing::debug!(?config, "engine config resolved");
	Ok(config)
}
