use std::sync::Arc;

use crate::wire::{Buffer, BuiltinOps, DataType, Engine, EngineConfig, Result, TypeOps, TypeRegistry, Value, WireError};

/// Extension packing its values as decimal text.
struct DecimalOps;

impl TypeOps for DecimalOps {
	fn pack(&self, _engine: &Engine, buf: &mut Buffer, values: &[Value]) -> Result<()> {
		for value in values {
			let Value::Uint64(v) = value else {
				return Err(WireError::BadParam { reason: "decimal expects uint64" });
			};
			let text = v.to_string();
			buf.put_u8(text.len() as u8)?;
			buf.write_bytes(text.as_bytes())?;
		}
		Ok(())
	}

	fn unpack(&self, _engine: &Engine, buf: &mut Buffer, count: usize) -> Result<Vec<Value>> {
		(0..count)
			.map(|_| {
				let len = usize::from(buf.get_u8()?);
				let text = std::str::from_utf8(buf.read_exact(len)?).map_err(|_| WireError::InvalidUtf8 { what: "decimal" })?;
				let v = text.parse().map_err(|_| WireError::BadParam { reason: "decimal digits" })?;
				Ok(Value::Uint64(v))
			})
			.collect()
	}

	fn copy(&self, engine: &Engine, value: &Value) -> Result<Value> {
		engine.xfer(value)
	}

	fn print(&self, prefix: &str, value: &Value) -> String {
		format!("{prefix}decimal {value}")
	}

	fn release(&self, engine: &Engine, value: &mut Value) {
		engine.destruct(value);
	}
}

const DECIMAL: DataType = DataType(DataType::EXTENSION_BASE + 1);

#[test]
fn builtins_cover_every_value_arm() {
	let registry = TypeRegistry::with_builtins();
	assert_eq!(registry.data_type_string(DataType::STRING), Some("STRING"));
	assert_eq!(registry.data_type_string(DataType::VALUE), Some("VALUE"));
	assert!(registry.lookup(DataType::UNDEF).is_none());
	assert!(registry.lookup(DataType::INFO).is_none());
	assert!(registry.lookup(DataType::APP).is_none());

	for info in registry.iter() {
		assert!(info.ty == DataType::VALUE || Value::empty(info.ty).is_some(), "{}", info.name);
	}
	let tags: Vec<_> = registry.iter().map(|info| info.ty.tag()).collect();
	assert!(tags.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn duplicate_registration_is_rejected() {
	let mut registry = TypeRegistry::with_builtins();
	let err = registry
		.register(DataType::STRING, "text", Arc::new(BuiltinOps::new(DataType::STRING)))
		.expect_err("occupied");
	assert!(matches!(err, WireError::TypeAlreadyRegistered { ty: DataType::STRING, ref name } if name == "STRING"));
	assert_eq!(registry.data_type_string(DataType::STRING), Some("STRING"));
}

#[test]
fn extension_type_packs_through_registered_ops() {
	let engine = Engine::builder(EngineConfig::default())
		.register_type(DECIMAL, "DECIMAL", Arc::new(DecimalOps))
		.build()
		.expect("engine");
	assert_eq!(engine.data_type_string(DECIMAL), Some("DECIMAL"));

	let mut buf = engine.new_buffer();
	let values = [Value::Uint64(7), Value::Uint64(123_456)];
	engine.pack(&mut buf, &values, DECIMAL).expect("pack");
	assert_eq!(&buf.payload()[4..6], b"\x017");

	let unpacked = engine.unpack(&mut buf, DECIMAL, 8).expect("unpack");
	assert_eq!(unpacked, values);

	let ops = &engine.registry().lookup(DECIMAL).expect("registered").ops;
	assert_eq!(ops.print("> ", &values[0]), "> decimal 7");
}

#[test]
fn builder_rejects_builtin_collisions() {
	let err = Engine::builder(EngineConfig::default())
		.register_type(DataType::BOOL, "flag", Arc::new(DecimalOps))
		.build()
		.expect_err("collision");
	assert!(matches!(err, WireError::TypeAlreadyRegistered { .. }));
}

#[test]
fn unregistered_types_cannot_be_packed() {
	let engine = Engine::default();
	let mut buf = engine.new_buffer();
	let err = engine.pack(&mut buf, &[Value::Uint64(1)], DECIMAL).expect_err("unregistered");
	assert!(matches!(err, WireError::UnregisteredType { ty: DECIMAL }));
	assert!(buf.is_empty());
}

#[test]
fn builtin_print_names_type_and_value() {
	let registry = TypeRegistry::with_builtins();
	let ops = &registry.lookup(DataType::INT32).expect("int32").ops;
	assert_eq!(ops.print("  ", &Value::Int32(-3)), "  Data type: INT32\tValue: -3");
}
