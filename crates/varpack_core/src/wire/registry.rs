use std::fmt;
use std::sync::Arc;

use crate::wire::types::BUILTINS;
use crate::wire::{Buffer, DataType, Engine, Result, Value, WireError, codec, print};

/// Operation bundle registered for one type tag.
pub trait TypeOps: Send + Sync {
	/// Append `values` to `buf`.
	fn pack(&self, engine: &Engine, buf: &mut Buffer, values: &[Value]) -> Result<()>;
	/// Read `count` values from `buf`.
	fn unpack(&self, engine: &Engine, buf: &mut Buffer, count: usize) -> Result<Vec<Value>>;
	/// Independent copy of `value`.
	fn copy(&self, engine: &Engine, value: &Value) -> Result<Value>;
	/// Diagnostic rendering prefixed by `prefix`.
	fn print(&self, prefix: &str, value: &Value) -> String;
	/// Release `value`, leaving it `Undef`.
	fn release(&self, engine: &Engine, value: &mut Value);
}

/// Registered tag, name, and operations.
#[derive(Clone)]
pub struct TypeInfo {
	/// Tag.
	pub ty: DataType,
	/// Diagnostic name.
	pub name: String,
	/// Operation bundle.
	pub ops: Arc<dyn TypeOps>,
}

impl fmt::Debug for TypeInfo {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("TypeInfo").field("ty", &self.ty).field("name", &self.name).finish_non_exhaustive()
	}
}

/// Operations of a built-in tag, backed by the wire codec.
#[derive(Debug, Clone, Copy)]
pub struct BuiltinOps {
	ty: DataType,
}

impl BuiltinOps {
	/// Operations for built-in tag `ty`.
	pub fn new(ty: DataType) -> Self {
		Self { ty }
	}
}

impl TypeOps for BuiltinOps {
	fn pack(&self, _engine: &Engine, buf: &mut Buffer, values: &[Value]) -> Result<()> {
		codec::pack_values(buf, self.ty, values)
	}

	fn unpack(&self, engine: &Engine, buf: &mut Buffer, count: usize) -> Result<Vec<Value>> {
		codec::unpack_values(engine, buf, self.ty, count)
	}

	fn copy(&self, engine: &Engine, value: &Value) -> Result<Value> {
		engine.xfer(value)
	}

	fn print(&self, prefix: &str, value: &Value) -> String {
		print::render(prefix, value)
	}

	fn release(&self, engine: &Engine, value: &mut Value) {
		engine.destruct(value);
	}
}

/// Sparse tag-indexed table of type operations.
#[derive(Clone, Default)]
pub struct TypeRegistry {
	slots: Vec<Option<TypeInfo>>,
}

impl TypeRegistry {
	/// Empty registry.
	pub fn new() -> Self {
		Self::default()
	}

	/// Registry holding every built-in tag that has a wire representation.
	///
	/// `INFO` and `KVAL` are only packed as data-array elements and are not registered.
	pub fn with_builtins() -> Self {
		let mut registry = Self::new();
		for (ty, name) in BUILTINS {
			if *ty == DataType::VALUE || (*ty != DataType::UNDEF && Value::empty(*ty).is_some()) {
				registry.insert(TypeInfo {
					ty: *ty,
					name: (*name).to_owned(),
					ops: Arc::new(BuiltinOps::new(*ty)),
				});
			}
		}
		registry
	}

	/// Associate `ty` with `ops`; an occupied tag is rejected.
	pub fn register(&mut self, ty: DataType, name: impl Into<String>, ops: Arc<dyn TypeOps>) -> Result<()> {
		if let Some(existing) = self.lookup(ty) {
			return Err(WireError::TypeAlreadyRegistered {
				ty,
				name: existing.name.clone(),
			});
		}

		let name = name.into();
		tracing::debug!(%ty, %name, "type registered");
		self.insert(TypeInfo { ty, name, ops });
		Ok(())
	}

	fn insert(&mut self, info: TypeInfo) {
		let idx = usize::from(info.ty.tag());
		if self.slots.len() <= idx {
			self.slots.resize(idx + 1, None);
		}
		self.slots[idx] = Some(info);
	}

	/// Operations registered for `ty`.
	pub fn lookup(&self, ty: DataType) -> Option<&TypeInfo> {
		self.slots.get(usize::from(ty.tag()))?.as_ref()
	}

	/// Diagnostic name registered for `ty`.
	pub fn data_type_string(&self, ty: DataType) -> Option<&str> {
		self.lookup(ty).map(|info| info.name.as_str())
	}

	/// Number of registered tags.
	pub fn len(&self) -> usize {
		self.slots.iter().flatten().count()
	}

	/// Return `true` when nothing is registered.
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Registered entries in tag order.
	pub fn iter(&self) -> impl Iterator<Item = &TypeInfo> {
		self.slots.iter().flatten()
	}
}

impl fmt::Debug for TypeRegistry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_list().entries(self.iter().map(|info| (info.ty, &info.name))).finish()
	}
}

#[cfg(test)]
mod tests;
