use std::sync::Arc;

use crate::wire::{DataType, Datum, Engine, Info, InfoFlags, InfoSlot, Value, WireError};

#[test]
fn info_load_sets_key_and_value() {
	let engine = Engine::default();
	let mut info = Info::default();
	engine
		.info_load(&mut info, Some("job.rank"), Some(Datum::Raw(&7_u32.to_ne_bytes())), DataType::PROC_RANK)
		.expect("load rank");
	assert_eq!(info.key().as_str(), "job.rank");
	assert_eq!(info.value(), &Value::Rank(7));
	assert_eq!(info.flags(), InfoFlags::NONE);
}

#[test]
fn info_load_without_key_leaves_info_untouched() {
	let engine = Engine::default();
	let mut info = Info::new("keep", Value::Int32(3));
	let err = engine
		.info_load(&mut info, None, Some(Datum::Str("ignored")), DataType::STRING)
		.expect_err("key is required");
	assert!(matches!(err, WireError::BadParam { .. }));
	assert_eq!(info.key().as_str(), "keep");
	assert_eq!(info.value(), &Value::Int32(3));
}

#[test]
fn info_load_truncates_long_keys() {
	let engine = Engine::default();
	let long = "k".repeat(600);
	let mut info = Info::default();
	engine.info_load(&mut info, Some(&long), None, DataType::BOOL).expect("load");
	assert_eq!(info.key().as_str().len(), crate::wire::MAX_KEYLEN);
}

#[test]
fn persistent_flag_follows_slot() {
	let mut info = Info::new("owned", Value::Uint8(1));
	info.set_flags(InfoFlags::REQUIRED | InfoFlags::PERSISTENT);
	assert!(info.is_required());
	assert!(!info.is_persistent());
	assert!(!info.flags().contains(InfoFlags::PERSISTENT));

	let shared = info.make_persistent();
	assert!(info.flags().contains(InfoFlags::PERSISTENT | InfoFlags::REQUIRED));
	assert!(matches!(info.slot(), InfoSlot::Persistent(_)));
	assert!(info.value_mut().is_none());

	info.set_flags(InfoFlags::QUALIFIER);
	assert!(info.flags().contains(InfoFlags::PERSISTENT));
	assert_eq!(*shared, Value::Uint8(1));
}

#[test]
fn xfer_of_persistent_info_aliases_payload() {
	let engine = Engine::default();
	let payload = Arc::new(Value::String("shared".into()));
	let src = Info::shared("alias", Arc::clone(&payload));

	let copy = engine.info_xfer(&src).expect("xfer");
	assert!(copy.is_persistent());
	assert!(Arc::ptr_eq(copy.shared_value().expect("shared"), &payload));
	assert_eq!(Arc::strong_count(&payload), 3);
}

#[test]
fn xfer_of_owned_info_deep_copies() {
	let engine = Engine::default();
	let mut src = Info::new("text", Value::String("payload".into()));
	src.set_flags(InfoFlags::REQUIRED);

	let copy = engine.info_xfer(&src).expect("xfer");
	assert_eq!(copy, src);
	assert!(copy.is_required());
	let (a, b) = (copy.value().as_str().expect("copy"), src.value().as_str().expect("src"));
	assert_ne!(a.as_ptr(), b.as_ptr());
}

#[test]
fn destruct_drops_only_the_persistent_handle() {
	let engine = Engine::default();
	let payload = Arc::new(Value::ByteObject(vec![9; 4]));
	let mut info = Info::shared("blob", Arc::clone(&payload));

	engine.info_destruct(&mut info);
	assert_eq!(info, Info::default());
	assert_eq!(Arc::strong_count(&payload), 1);
	assert_eq!(payload.as_bytes(), Some(&[9_u8; 4][..]));

	engine.info_destruct(&mut info);
	assert_eq!(info.value(), &Value::Undef);
}

#[test]
fn display_marks_persistent_infos() {
	let mut info = Info::new("count", Value::Uint32(5));
	assert_eq!(info.to_string(), "count=5");
	info.make_persistent();
	assert_eq!(info.to_string(), "count=5 (persistent)");
}
