use std::sync::Arc;

use crate::wire::{
	Alias, Buffer, BufferType, Coord, DataArray, DataType, DiskStats, Engine, EngineConfig, Envar, Geometry, Info, InfoFlags, Kval, NodeStats, Proc,
	ProcInfo, Timeval, Value, WireError,
};

fn described_engine() -> Engine {
	Engine::new(EngineConfig {
		buffer_type: BufferType::FullyDescribed,
		..EngineConfig::default()
	})
	.expect("engine")
}

#[test]
fn non_described_layout_is_count_then_payload() {
	let engine = Engine::default();
	let mut buf = engine.new_buffer();
	engine.pack(&mut buf, &[Value::Uint16(0x0102), Value::Uint16(0x0304)], DataType::UINT16).expect("pack");
	assert_eq!(buf.payload(), [0, 0, 0, 2, 1, 2, 3, 4]);
}

#[test]
fn described_layout_tags_count_and_type() {
	let engine = described_engine();
	let mut buf = engine.new_buffer();
	engine.pack(&mut buf, &[Value::Bool(true)], DataType::BOOL).expect("pack");
	assert_eq!(buf.payload(), [0, 9, 0, 0, 0, 1, 0, 1, 1]);

	let values = engine.unpack(&mut buf, DataType::BOOL, 1).expect("unpack");
	assert_eq!(values, [Value::Bool(true)]);
	assert_eq!(buf.remaining(), 0);
}

#[test]
fn described_unpack_detects_type_mismatch() {
	let engine = described_engine();
	let mut buf = engine.new_buffer();
	engine.pack(&mut buf, &[Value::Int32(5)], DataType::INT32).expect("pack");
	let err = engine.unpack(&mut buf, DataType::UINT32, 4).expect_err("mismatch");
	assert!(matches!(err, WireError::PackMismatch { expected: DataType::UINT32, got: DataType::INT32 }));
}

#[test]
fn pack_rejects_values_of_another_type() {
	let engine = Engine::default();
	let mut buf = engine.new_buffer();
	let err = engine.pack(&mut buf, &[Value::Int32(1)], DataType::INT64).expect_err("mismatch");
	assert!(matches!(err, WireError::PackMismatch { .. }));
}

#[test]
fn unpack_bounds_the_count() {
	let engine = Engine::default();
	let mut buf = engine.new_buffer();
	engine.pack(&mut buf, &[Value::Byte(1), Value::Byte(2), Value::Byte(3)], DataType::BYTE).expect("pack");
	let err = engine.unpack(&mut buf, DataType::BYTE, 2).expect_err("too many");
	assert!(matches!(err, WireError::InadequateSpace { count: 3, max: 2 }));

	let mut negative = engine.new_buffer();
	negative.put_i32(-4).expect("count");
	assert!(matches!(engine.unpack(&mut negative, DataType::BYTE, 8), Err(WireError::NegativeCount { count: -4 })));
}

#[test]
fn truncated_input_reads_past_end() {
	let engine = Engine::default();
	let mut buf = engine.new_buffer();
	engine.pack(&mut buf, &[Value::from("truncate me")], DataType::STRING).expect("pack");
	let mut short = Buffer::new(BufferType::NonDescribed);
	short.load(buf.payload()[..buf.payload().len() - 3].to_vec());
	assert!(matches!(engine.unpack(&mut short, DataType::STRING, 1), Err(WireError::ReadPastEnd { .. })));

	let mut huge = engine.new_buffer();
	huge.put_i32(1_000_000).expect("count");
	assert!(matches!(engine.unpack(&mut huge, DataType::UINT64, usize::MAX), Err(WireError::ReadPastEnd { .. })));
}

#[test]
fn undefined_array_elements_are_rejected() {
	let engine = Engine::default();
	let mut buf = engine.new_buffer();
	buf.put_i32(1).expect("count");
	buf.put_u16(DataType::UNDEF.tag()).expect("element type");
	buf.put_u32(u32::MAX).expect("element count");
	assert!(matches!(
		engine.unpack(&mut buf, DataType::DATA_ARRAY, 1),
		Err(WireError::UnknownDataType { ty }) if ty == DataType::UNDEF
	));

	let undefined = DataArray::from_values(DataType::UNDEF, vec![Value::Undef, Value::Undef]).expect("array");
	let mut out = engine.new_buffer();
	let packed = engine.pack(&mut out, &[Value::DataArray(Box::new(undefined))], DataType::DATA_ARRAY);
	assert!(matches!(packed, Err(WireError::UnknownDataType { .. })));

	let mut empty = engine.new_buffer();
	engine
		.pack(&mut empty, &[Value::DataArray(Box::default())], DataType::DATA_ARRAY)
		.expect("empty array packs");
	let values = engine.unpack(&mut empty, DataType::DATA_ARRAY, 1).expect("empty array unpacks");
	assert!(matches!(&values[..], [Value::DataArray(array)] if array.is_empty()));
}

#[test]
fn value_type_tags_each_element() {
	let engine = Engine::default();
	let mut buf = engine.new_buffer();
	let values = [
		Value::Int8(-2),
		Value::from("two"),
		Value::Timeval(Timeval { sec: 3, usec: 4 }),
		Value::from(Proc::new("job", Proc::RANK_WILDCARD)),
	];
	engine.pack(&mut buf, &values, DataType::VALUE).expect("pack");
	assert_eq!(engine.unpack(&mut buf, DataType::VALUE, 4).expect("unpack"), values);
}

#[test]
fn info_array_drops_persistent_flag_on_the_wire() {
	let engine = described_engine();
	let mut shared = Info::new("host", Value::from("node07"));
	shared.set_flags(InfoFlags::REQUIRED);
	shared.make_persistent();
	let infos = vec![
		engine.info_xfer(&shared).expect("alias"),
		Info::new("ppn", Value::Uint32(8)),
		Info::new("extra", Value::Undef),
	];
	let array = Value::from(DataArray::from_infos(infos));

	let mut buf = engine.new_buffer();
	engine.pack(&mut buf, std::slice::from_ref(&array), DataType::DATA_ARRAY).expect("pack");
	let mut unpacked = engine.unpack(&mut buf, DataType::DATA_ARRAY, 1).expect("unpack");
	let Some(Value::DataArray(back)) = unpacked.pop() else {
		panic!("expected array");
	};

	let infos = back.infos().expect("infos");
	assert_eq!(infos.len(), 3);
	assert_eq!(infos[0].key().as_str(), "host");
	assert_eq!(infos[0].flags(), InfoFlags::REQUIRED);
	assert!(!infos[0].is_persistent());
	assert_eq!(infos[0].value(), &Value::from("node07"));
	assert_eq!(infos[1].value(), &Value::Uint32(8));
	assert_eq!(infos[2].value(), &Value::Undef);
}

#[test]
fn kval_and_nested_arrays_roundtrip() {
	let engine = Engine::default();
	let kvals = DataArray::from_kvals(vec![
		Kval::new("a", Value::Double(1.5)),
		Kval::new("b", Value::ByteObject(vec![0, 255])),
	]);
	let nested = DataArray::from_arrays(vec![
		kvals,
		DataArray::from_values(DataType::STRING, vec![Value::from("x"), Value::from("y")]).expect("strings"),
		DataArray::from_values(DataType::VALUE, vec![Value::Rank(3), Value::Bool(false)]).expect("mixed"),
	]);
	let value = Value::from(nested);

	let mut buf = engine.new_buffer();
	engine.pack(&mut buf, std::slice::from_ref(&value), DataType::DATA_ARRAY).expect("pack");
	assert_eq!(engine.unpack(&mut buf, DataType::DATA_ARRAY, 1).expect("unpack"), [value]);
}

#[test]
fn composite_payloads_roundtrip() {
	let engine = described_engine();
	let values = [
		Value::ProcInfo(Box::new(ProcInfo {
			proc: Proc::new("job", 1),
			hostname: Some("n1".into()),
			executable_name: None,
			pid: 4242,
			exit_code: 0,
			state: 3,
		})),
		Value::Envar(Envar {
			envar: Some("LD_LIBRARY_PATH".into()),
			value: Some("/usr/lib".into()),
			separator: b':',
		}),
		Value::Geometry(Box::new(Geometry {
			fabric: 2,
			uuid: Some("fab-2".into()),
			osname: None,
			coordinates: vec![Coord { view: 1, coord: vec![0, 4, 9] }],
		})),
		Value::NodeStats(Box::new(NodeStats {
			node: Some("n1".into()),
			la: 0.5,
			free_mem: 1024.0,
			diskstats: vec![DiskStats {
				disk: Some("sda".into()),
				num_reads_completed: 10,
				..DiskStats::default()
			}],
			..NodeStats::default()
		})),
	];

	let mut buf = engine.new_buffer();
	engine.pack(&mut buf, &values, DataType::VALUE).expect("pack");
	assert_eq!(engine.unpack(&mut buf, DataType::VALUE, values.len()).expect("unpack"), values);
}

#[test]
fn nested_buffer_keeps_only_unread_bytes() {
	let engine = Engine::default();
	let mut inner = Buffer::new(BufferType::FullyDescribed);
	inner.put_u32(1).expect("first");
	inner.put_u32(2).expect("second");
	inner.get_u32().expect("consume");

	let mut buf = engine.new_buffer();
	engine
		.pack(&mut buf, &[Value::DataBuffer(Box::new(inner))], DataType::DATA_BUFFER)
		.expect("pack");
	let mut unpacked = engine.unpack(&mut buf, DataType::DATA_BUFFER, 1).expect("unpack");
	let Some(Value::DataBuffer(mut back)) = unpacked.pop() else {
		panic!("expected buffer");
	};
	assert!(back.is_described());
	assert_eq!(back.remaining(), 4);
	assert_eq!(back.get_u32().expect("second"), 2);
}

#[test]
fn pointers_do_not_cross_the_wire() {
	let engine = Engine::default();
	let mut buf = engine.new_buffer();
	let value = Value::Pointer(Alias::new(Arc::new(1_u8)));
	let err = engine.pack(&mut buf, &[value], DataType::POINTER).expect_err("pointer");
	assert!(matches!(err, WireError::NotSupported { .. }));
}

#[test]
fn unpack_depth_is_bounded() {
	let packer = Engine::default();
	let mut array = DataArray::from_values(DataType::UINT8, vec![Value::Uint8(0)]).expect("leaf");
	for _ in 0..4 {
		array = DataArray::from_arrays(vec![array]);
	}
	let mut buf = packer.new_buffer();
	packer.pack(&mut buf, &[Value::from(array)], DataType::DATA_ARRAY).expect("pack");

	let shallow = Engine::new(EngineConfig {
		max_depth: 3,
		..EngineConfig::default()
	})
	.expect("engine");
	let err = shallow.unpack(&mut buf, DataType::DATA_ARRAY, 1).expect_err("too deep");
	assert!(matches!(err, WireError::DepthExceeded { max_depth: 3 }));
}

#[test]
fn data_type_tags_use_two_bytes() {
	let mut buf = Buffer::default();
	super::store_data_type(&mut buf, DataType::NODE_STATS).expect("store");
	assert_eq!(buf.payload(), [0, 64]);
	assert_eq!(super::get_data_type(&mut buf).expect("get"), DataType::NODE_STATS);
}
