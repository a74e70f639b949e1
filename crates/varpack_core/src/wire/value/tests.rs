use std::sync::Arc;

use crate::wire::types::BUILTINS;
use crate::wire::{Alias, DataType, Timeval, Value, WireError};

#[test]
fn every_empty_value_reports_its_tag() {
	for (ty, name) in BUILTINS {
		if let Some(value) = Value::empty(*ty) {
			assert_eq!(value.data_type(), *ty, "{name}");
		}
	}
}

#[test]
fn scalar_widths_match_tag_widths() {
	for (ty, name) in BUILTINS {
		let Some(width) = ty.fixed_width() else {
			continue;
		};
		let value = Value::empty(*ty).expect("scalar has an empty form");
		let raw = value.scalar_bytes().expect("scalar bytes");
		assert_eq!(raw.len(), width, "{name}");
		assert_eq!(value.payload_size(), width, "{name}");
	}
}

#[test]
fn empty_bool_defaults_to_true() {
	assert_eq!(Value::empty(DataType::BOOL), Some(Value::Bool(true)));
	assert_eq!(Value::empty(DataType::APP), None);
	assert_eq!(Value::empty(DataType(900)), None);
}

#[test]
fn from_raw_decodes_native_order() {
	let value = Value::from_raw(DataType::UINT32, &0xDEAD_BEEF_u32.to_ne_bytes()).expect("uint32");
	assert_eq!(value, Value::Uint32(0xDEAD_BEEF));

	let tv = Timeval { sec: 12, usec: 34 };
	let value = Value::from_raw(DataType::TIMEVAL, &tv.to_ne_bytes()).expect("timeval");
	assert_eq!(value, Value::Timeval(tv));

	let value = Value::from_raw(DataType::DATA_TYPE, &DataType::PROC.0.to_ne_bytes()).expect("data type");
	assert_eq!(value, Value::DataType(DataType::PROC));
}

#[test]
fn from_raw_rejects_width_mismatch() {
	let err = Value::from_raw(DataType::INT64, &[0_u8; 4]).expect_err("short input");
	assert!(matches!(err, WireError::BadParam { .. }));

	let err = Value::from_raw(DataType::STRING, b"text").expect_err("not a scalar");
	assert!(matches!(err, WireError::BadParam { .. }));
}

#[test]
fn alias_compares_by_address() {
	let target = Arc::new(17_u64);
	let a = Alias::new(Arc::clone(&target));
	let b = Alias::new(Arc::clone(&target));
	let other = Alias::new(Arc::new(17_u64));

	assert_eq!(a, b);
	assert_ne!(a, other);
	assert_eq!(a.addr(), Arc::as_ptr(&target) as usize);
	assert_eq!(a.downcast::<u64>().as_deref(), Some(&17));
	assert!(a.downcast::<u32>().is_none());
	assert!(Alias::null().is_null());
	assert_eq!(Alias::null().addr(), 0);
}

#[test]
fn conversions_pick_sized_arms() {
	assert_eq!(Value::from(7_i32).data_type(), DataType::INT32);
	assert_eq!(Value::from(7_u64).data_type(), DataType::UINT64);
	assert_eq!(Value::from("x").as_str(), Some("x"));
	assert_eq!(Value::from(vec![1_u8, 2]).as_bytes(), Some(&[1_u8, 2][..]));
}
