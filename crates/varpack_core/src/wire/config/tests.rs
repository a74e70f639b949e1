use std::collections::HashMap;

use crate::wire::{BufferType, EngineConfig, WireError};

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
	let map: HashMap<String, String> = pairs.iter().map(|(key, value)| ((*key).to_owned(), (*value).to_owned())).collect();
	move |key| map.get(key).cloned()
}

#[test]
fn env_overrides_apply_on_top_of_defaults() {
	let config = EngineConfig::default()
		.with_env_overrides(lookup(&[
			("VARPACK_BUFFER_INITIAL_SIZE", "64"),
			("VARPACK_BUFFER_THRESHOLD_SIZE", "1024"),
			("VARPACK_BUFFER_TYPE", "fully_described"),
			("VARPACK_STRICT_TYPES", "yes"),
			("VARPACK_MAX_DEPTH", "4"),
		]))
		.expect("overrides parse");

	assert_eq!(config.buffer.initial_size, 64);
	assert_eq!(config.buffer.threshold_size, 1024);
	assert_eq!(config.buffer_type, BufferType::FullyDescribed);
	assert!(config.strict_types);
	assert_eq!(config.max_depth, 4);
	assert_eq!(config.compress_limit, EngineConfig::default().compress_limit);
}

#[test]
fn missing_env_keeps_defaults() {
	let config = EngineConfig::default().with_env_overrides(lookup(&[])).expect("no overrides");
	assert_eq!(config, EngineConfig::default());
}

#[test]
fn malformed_env_value_is_rejected() {
	let err = EngineConfig::default()
		.with_env_overrides(lookup(&[("VARPACK_BUFFER_INITIAL_SIZE", "lots")]))
		.expect_err("non-numeric size should fail");
	assert!(matches!(err, WireError::InvalidConfig { key: "VARPACK_BUFFER_INITIAL_SIZE", .. }));

	let err = EngineConfig::default()
		.with_env_overrides(lookup(&[("VARPACK_STRICT_TYPES", "maybe")]))
		.expect_err("unknown flag should fail");
	assert!(matches!(err, WireError::InvalidConfig { key: "VARPACK_STRICT_TYPES", .. }));
}

#[test]
fn zero_threshold_fails_validation() {
	let err = EngineConfig::default()
		.with_env_overrides(lookup(&[("VARPACK_BUFFER_THRESHOLD_SIZE", "0")]))
		.expect_err("zero threshold should fail");
	assert!(matches!(err, WireError::InvalidConfig { key: "buffer.threshold_size", .. }));
}

#[test]
fn strict_preset_describes_buffers() {
	let config = EngineConfig::strict();
	assert!(config.strict_types);
	assert_eq!(config.buffer_type, BufferType::FullyDescribed);
	assert!(config.validate().is_ok());
}

#[test]
fn buffer_type_labels_round_trip() {
	for ty in [BufferType::NonDescribed, BufferType::FullyDescribed] {
		assert_eq!(BufferType::parse(ty.as_str()), Some(ty));
		assert_eq!(BufferType::from_byte(ty.to_byte()), Some(ty));
	}
	assert_eq!(BufferType::from_byte(7), None);
}
