use crate::wire::{DataArray, DataType, Datum, Engine, Info, Result, WireError};

/// Ordered, append-only collection of infos; insertion order becomes array order.
#[derive(Debug, Default)]
pub struct InfoList {
	items: Vec<Info>,
}

impl InfoList {
	/// Empty list.
	pub fn start() -> Self {
		Self::default()
	}

	/// Load a new info from `data` and append it.
	pub fn add(&mut self, engine: &Engine, key: &str, data: Option<Datum<'_>>, ty: DataType) -> Result<()> {
		let mut info = Info::default();
		engine.info_load(&mut info, Some(key), data, ty)?;
		self.items.push(info);
		Ok(())
	}

	/// Append `info` by reference.
	///
	/// The caller's info becomes persistent and the list shares its payload.
	pub fn insert(&mut self, info: &mut Info) {
		let shared = info.make_persistent();
		let mut node = Info::shared(info.key().as_str(), shared);
		node.set_flags(info.flags());
		self.items.push(node);
	}

	/// Append a copy of `info` made with [`Engine::info_xfer`].
	pub fn xfer(&mut self, engine: &Engine, info: &Info) -> Result<()> {
		self.items.push(engine.info_xfer(info)?);
		Ok(())
	}

	/// Materialize an independent `INFO` array in insertion order.
	pub fn convert(&self, engine: &Engine) -> Result<DataArray> {
		if self.items.is_empty() {
			return Err(WireError::Empty);
		}

		let mut infos = Vec::new();
		infos.try_reserve_exact(self.items.len()).map_err(|_| WireError::OutOfMemory {
			requested: self.items.len().saturating_mul(size_of::<Info>()),
		})?;
		for info in &self.items {
			infos.push(engine.info_xfer(info)?);
		}
		Ok(DataArray::from_infos(infos))
	}

	/// Release every node; persistent nodes only drop their handle.
	pub fn release(self, engine: &Engine) {
		for info in self.items {
			engine.release_info(info);
		}
	}

	/// Number of nodes.
	pub fn len(&self) -> usize {
		self.items.len()
	}

	/// Return `true` when the list has no nodes.
	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	/// Nodes in insertion order.
	pub fn iter(&self) -> std::slice::Iter<'_, Info> {
		self.items.iter()
	}
}

impl<'a> IntoIterator for &'a InfoList {
	type Item = &'a Info;
	type IntoIter = std::slice::Iter<'a, Info>;

	fn into_iter(self) -> Self::IntoIter {
		self.items.iter()
	}
}

#[cfg(test)]
mod tests;
