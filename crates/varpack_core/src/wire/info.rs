use std::fmt;
use std::ops::BitOr;
use std::sync::Arc;

use crate::wire::copy::{CopyCx, Duplicate};
use crate::wire::{DataType, Datum, Engine, Key, Result, Value, WireError};

/// Directive bits attached to an [`Info`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct InfoFlags(u32);

impl InfoFlags {
	/// No directives.
	pub const NONE: Self = Self(0);
	/// Receiver must honor the attribute.
	pub const REQUIRED: Self = Self(0x01);
	/// Last element of an info array.
	pub const ARRAY_END: Self = Self(0x02);
	/// A required attribute has been handled.
	pub const REQUIRED_PROCESSED: Self = Self(0x04);
	/// Attribute qualifies a neighbouring one.
	pub const QUALIFIER: Self = Self(0x08);
	/// Payload is shared, not owned by this info.
	pub const PERSISTENT: Self = Self(0x10);

	/// Raw bits.
	pub fn bits(self) -> u32 {
		self.0
	}

	/// Build from raw bits.
	pub fn from_bits(bits: u32) -> Self {
		Self(bits)
	}

	/// Return `true` when every bit of `other` is set.
	pub fn contains(self, other: Self) -> bool {
		self.0 & other.0 == other.0
	}

	/// Set the bits of `other`.
	pub fn insert(&mut self, other: Self) {
		self.0 |= other.0;
	}

	/// Clear the bits of `other`.
	pub fn remove(&mut self, other: Self) {
		self.0 &= !other.0;
	}
}

impl BitOr for InfoFlags {
	type Output = Self;

	fn bitor(self, rhs: Self) -> Self {
		Self(self.0 | rhs.0)
	}
}

/// Storage of an info payload.
#[derive(Debug)]
pub enum InfoSlot {
	/// Owned by the info and released with it.
	Owned(Value),
	/// Shared handle; copies alias it and release only drops the handle.
	Persistent(Arc<Value>),
}

impl InfoSlot {
	/// Borrow the payload.
	pub fn value(&self) -> &Value {
		match self {
			Self::Owned(value) => value,
			Self::Persistent(value) => value,
		}
	}
}

impl Default for InfoSlot {
	fn default() -> Self {
		Self::Owned(Value::Undef)
	}
}

impl PartialEq for InfoSlot {
	fn eq(&self, other: &Self) -> bool {
		self.value() == other.value()
	}
}

/// Key, value, and directive flags.
///
/// [`InfoFlags::PERSISTENT`] is set exactly when the slot is [`InfoSlot::Persistent`].
#[derive(Debug, PartialEq, Default)]
pub struct Info {
	key: Key,
	slot: InfoSlot,
	flags: InfoFlags,
}

impl Info {
	/// Info owning `value`.
	pub fn new(key: &str, value: Value) -> Self {
		Self {
			key: Key::new(key),
			slot: InfoSlot::Owned(value),
			flags: InfoFlags::NONE,
		}
	}

	/// Persistent info sharing `value`.
	pub fn shared(key: &str, value: Arc<Value>) -> Self {
		Self {
			key: Key::new(key),
			slot: InfoSlot::Persistent(value),
			flags: InfoFlags::PERSISTENT,
		}
	}

	/// Attribute key.
	pub fn key(&self) -> &Key {
		&self.key
	}

	/// Payload.
	pub fn value(&self) -> &Value {
		self.slot.value()
	}

	/// Mutable payload; `None` for persistent infos.
	pub fn value_mut(&mut self) -> Option<&mut Value> {
		match &mut self.slot {
			InfoSlot::Owned(value) => Some(value),
			InfoSlot::Persistent(_) => None,
		}
	}

	/// Payload storage.
	pub fn slot(&self) -> &InfoSlot {
		&self.slot
	}

	/// Shared handle of a persistent payload.
	pub fn shared_value(&self) -> Option<&Arc<Value>> {
		match &self.slot {
			InfoSlot::Owned(_) => None,
			InfoSlot::Persistent(value) => Some(value),
		}
	}

	/// Directive flags.
	pub fn flags(&self) -> InfoFlags {
		self.flags
	}

	/// Replace directive flags; the persistent bit always follows the slot.
	pub fn set_flags(&mut self, mut flags: InfoFlags) {
		flags.remove(InfoFlags::PERSISTENT);
		if self.is_persistent() {
			flags.insert(InfoFlags::PERSISTENT);
		}
		self.flags = flags;
	}

	/// Return `true` when the payload is shared.
	pub fn is_persistent(&self) -> bool {
		matches!(self.slot, InfoSlot::Persistent(_))
	}

	/// Return `true` when the receiver must honor this attribute.
	pub fn is_required(&self) -> bool {
		self.flags.contains(InfoFlags::REQUIRED)
	}

	/// Move an owned payload behind a shared handle and return the handle.
	pub fn make_persistent(&mut self) -> Arc<Value> {
		let shared = match std::mem::take(&mut self.slot) {
			InfoSlot::Owned(value) => Arc::new(value),
			InfoSlot::Persistent(shared) => shared,
		};
		self.slot = InfoSlot::Persistent(Arc::clone(&shared));
		self.flags.insert(InfoFlags::PERSISTENT);
		shared
	}

	pub(crate) fn from_parts(key: Key, slot: InfoSlot, flags: InfoFlags) -> Self {
		let mut info = Self {
			key,
			slot,
			flags: InfoFlags::NONE,
		};
		info.set_flags(flags);
		info
	}
}

impl fmt::Display for Info {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}={}", self.key, self.value())?;
		if self.is_persistent() {
			f.write_str(" (persistent)")?;
		}
		Ok(())
	}
}

impl Duplicate for Info {
	fn duplicate(&self, cx: &CopyCx<'_>) -> Result<Self> {
		let slot = match &self.slot {
			InfoSlot::Persistent(value) => InfoSlot::Persistent(Arc::clone(value)),
			InfoSlot::Owned(value) => InfoSlot::Owned(value.duplicate(cx)?),
		};
		Ok(Self {
			key: self.key.clone(),
			slot,
			flags: self.flags,
		})
	}
}

impl Engine {
	/// Load `info` from a key and typed datum.
	///
	/// A missing key is a bad parameter; the info is left untouched in that case.
	pub fn info_load(&self, info: &mut Info, key: Option<&str>, data: Option<Datum<'_>>, ty: DataType) -> Result<()> {
		let Some(key) = key else {
			tracing::error!(%ty, "info load without key");
			return Err(WireError::BadParam { reason: "info key is required" });
		};

		self.info_destruct(info);
		info.key = Key::new(key);
		let mut value = Value::Undef;
		self.load(&mut value, data, ty)?;
		info.slot = InfoSlot::Owned(value);
		Ok(())
	}

	/// Copy an info: persistent sources alias the shared payload, others deep-copy it.
	pub fn info_xfer(&self, src: &Info) -> Result<Info> {
		src.duplicate(&CopyCx::new(self))
	}

	/// Release an info's owned payload and reset it to the default.
	pub fn info_destruct(&self, info: &mut Info) {
		self.release_info(std::mem::take(info));
	}

	pub(crate) fn release_info(&self, info: Info) {
		match info.slot {
			InfoSlot::Owned(value) => self.release(value),
			InfoSlot::Persistent(shared) => {
				// Last handle out releases through the collaborators.
				if let Ok(value) = Arc::try_unwrap(shared) {
					self.release(value);
				}
			}
		}
	}
}

#[cfg(test)]
mod tests;
