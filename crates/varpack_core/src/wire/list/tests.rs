use std::sync::Arc;

use crate::wire::{DataType, Datum, Engine, Info, InfoFlags, InfoList, Value, WireError};

#[test]
fn convert_keeps_insertion_order() {
	let engine = Engine::default();
	let mut list = InfoList::start();
	list.add(&engine, "job.name", Some(Datum::Str("solver")), DataType::STRING).expect("add string");
	list.add(&engine, "job.size", Some(Datum::Raw(&64_u32.to_ne_bytes())), DataType::UINT32)
		.expect("add uint32");
	list.add(&engine, "job.debug", None, DataType::BOOL).expect("add bool");
	assert_eq!(list.len(), 3);

	let array = list.convert(&engine).expect("convert");
	assert_eq!(array.element_type(), DataType::INFO);
	let infos = array.infos().expect("info elements");
	let keys: Vec<_> = infos.iter().map(|info| info.key().as_str()).collect();
	assert_eq!(keys, ["job.name", "job.size", "job.debug"]);
	assert_eq!(infos[0].value(), &Value::String("solver".into()));
	assert_eq!(infos[1].value(), &Value::Uint32(64));
	assert_eq!(infos[2].value(), &Value::Bool(true));

	list.release(&engine);
}

#[test]
fn empty_list_does_not_convert() {
	let engine = Engine::default();
	let list = InfoList::start();
	assert!(list.is_empty());
	assert!(matches!(list.convert(&engine), Err(WireError::Empty)));
}

#[test]
fn insert_shares_the_callers_payload() {
	let engine = Engine::default();
	let mut original = Info::new("host", Value::String("node01".into()));
	original.set_flags(InfoFlags::REQUIRED);

	let mut list = InfoList::start();
	list.insert(&mut original);
	assert!(original.is_persistent());

	let node = list.iter().next().expect("inserted node");
	assert!(node.is_persistent());
	assert!(node.is_required());
	let shared = original.shared_value().expect("shared payload");
	assert!(Arc::ptr_eq(shared, node.shared_value().expect("node payload")));

	let array = list.convert(&engine).expect("convert");
	let copy = &array.infos().expect("infos")[0];
	assert!(Arc::ptr_eq(shared, copy.shared_value().expect("aliased copy")));
	assert_eq!(Arc::strong_count(shared), 3);

	list.release(&engine);
	assert_eq!(Arc::strong_count(shared), 2);
	assert_eq!(original.value(), &Value::String("node01".into()));
}

#[test]
fn xfer_appends_an_independent_copy() {
	let engine = Engine::default();
	let src = Info::new("blob", Value::ByteObject(vec![1, 2, 3]));

	let mut list = InfoList::start();
	list.xfer(&engine, &src).expect("xfer");
	let node = list.iter().next().expect("node");
	assert_eq!(node, &src);
	assert!(!node.is_persistent());
	assert_ne!(node.value().as_bytes().map(<[u8]>::as_ptr), src.value().as_bytes().map(<[u8]>::as_ptr));
}

#[test]
fn failed_add_leaves_list_unchanged() {
	let engine = Engine::default();
	let mut list = InfoList::start();
	let err = list
		.add(&engine, "bad", Some(Datum::Str("text")), DataType::UINT32)
		.expect_err("raw bytes required");
	assert!(matches!(err, WireError::BadParam { .. }));
	assert!(list.is_empty());
}
