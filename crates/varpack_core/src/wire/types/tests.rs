use crate::wire::DataType;

#[test]
fn builtin_names_round_trip() {
	assert_eq!(DataType::UINT32.name(), Some("UINT32"));
	assert_eq!(DataType::from_name("uint32"), Some(DataType::UINT32));
	assert_eq!(DataType::from_name("DATA_ARRAY"), Some(DataType::DATA_ARRAY));
	assert_eq!(DataType::from_name("NOPE"), None);
}

#[test]
fn extended_tags_render_numerically() {
	let ty = DataType(DataType::EXTENSION_BASE + 7);
	assert!(!ty.is_builtin());
	assert_eq!(ty.to_string(), "TYPE#507");
	assert_eq!(DataType::TOPO.to_string(), "TOPO");
}

#[test]
fn fixed_widths_match_native_scalars() {
	assert_eq!(DataType::BOOL.fixed_width(), Some(1));
	assert_eq!(DataType::INT16.fixed_width(), Some(2));
	assert_eq!(DataType::STOR_ACCESS_TYPE.fixed_width(), Some(2));
	assert_eq!(DataType::STATUS.fixed_width(), Some(4));
	assert_eq!(DataType::STOR_MEDIUM.fixed_width(), Some(8));
	assert_eq!(DataType::SIZE.fixed_width(), Some(size_of::<usize>()));
	assert_eq!(DataType::TIMEVAL.fixed_width(), Some(16));
	assert_eq!(DataType::STRING.fixed_width(), None);
	assert_eq!(DataType::POINTER.fixed_width(), None);
}

#[test]
fn byte_object_family_is_recognized() {
	for ty in [DataType::BYTE_OBJECT, DataType::COMPRESSED_STRING, DataType::COMPRESSED_BYTE_OBJECT, DataType::REGEX] {
		assert!(ty.is_byte_object(), "{ty} should be a byte object");
	}
	assert!(!DataType::STRING.is_byte_object());
}
