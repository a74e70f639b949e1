use std::fmt;
use std::sync::Arc;

use crate::wire::{BufferConfig, BufferType, Result, WireError};

/// Allocation strategy used when a buffer grows.
pub trait BufferAlloc: Send + Sync {
	/// Grow `base` to exactly `new_len` bytes, zero-filling the extension.
	///
	/// On error `base` must be left untouched.
	fn grow(&self, base: &mut Vec<u8>, new_len: usize) -> Result<()>;
}

/// Default allocator: fallible in-place reservation.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemAlloc;

impl BufferAlloc for SystemAlloc {
	fn grow(&self, base: &mut Vec<u8>, new_len: usize) -> Result<()> {
		let extra = new_len.saturating_sub(base.len());
		base.try_reserve_exact(extra).map_err(|_| WireError::OutOfMemory { requested: new_len })?;
		base.resize(new_len, 0);
		Ok(())
	}
}

impl BufferConfig {
	/// Allocation size needed to hold `required` bytes when `allocated` are in use.
	///
	/// Returns `None` when the size would overflow `usize`.
	pub fn next_allocation(&self, allocated: usize, required: usize) -> Option<usize> {
		if required >= self.threshold_size {
			return required.div_ceil(self.threshold_size).checked_mul(self.threshold_size);
		}

		let mut to_alloc = if allocated == 0 { self.initial_size } else { allocated };
		while to_alloc < required {
			to_alloc = to_alloc.checked_mul(2)?;
		}
		Some(to_alloc)
	}
}

/// Growable byte region with independent pack (write) and unpack (read) cursors.
///
/// Cursors are offsets into the allocation, so growth never invalidates them.
/// Invariant: `unpack <= pack <= bytes_allocated`.
pub struct Buffer {
	base: Vec<u8>,
	pack: usize,
	unpack: usize,
	ty: BufferType,
	growth: BufferConfig,
	alloc: Arc<dyn BufferAlloc>,
}

impl Buffer {
	/// Create an empty buffer with default growth settings.
	pub fn new(ty: BufferType) -> Self {
		Self::with_config(BufferConfig::default(), ty)
	}

	/// Create an empty buffer with explicit growth settings.
	pub fn with_config(growth: BufferConfig, ty: BufferType) -> Self {
		Self::with_alloc(growth, ty, Arc::new(SystemAlloc))
	}

	/// Create an empty buffer backed by a custom allocator.
	pub fn with_alloc(growth: BufferConfig, ty: BufferType, alloc: Arc<dyn BufferAlloc>) -> Self {
		Self {
			base: Vec::new(),
			pack: 0,
			unpack: 0,
			ty,
			growth,
			alloc,
		}
	}

	/// Description mode of this buffer.
	pub fn buffer_type(&self) -> BufferType {
		self.ty
	}

	/// Change the description mode.
	pub fn set_buffer_type(&mut self, ty: BufferType) {
		self.ty = ty;
	}

	/// Return `true` for fully described buffers.
	pub fn is_described(&self) -> bool {
		self.ty == BufferType::FullyDescribed
	}

	/// Growth settings of this buffer.
	pub fn growth(&self) -> BufferConfig {
		self.growth
	}

	/// Bytes currently allocated.
	pub fn bytes_allocated(&self) -> usize {
		self.base.len()
	}

	/// Bytes packed so far.
	pub fn bytes_used(&self) -> usize {
		self.pack
	}

	/// Write cursor offset.
	pub fn pack_offset(&self) -> usize {
		self.pack
	}

	/// Read cursor offset.
	pub fn unpack_offset(&self) -> usize {
		self.unpack
	}

	/// Packed bytes not yet unpacked.
	pub fn remaining(&self) -> usize {
		self.pack.saturating_sub(self.unpack)
	}

	/// Return `true` when nothing has been packed.
	pub fn is_empty(&self) -> bool {
		self.pack == 0
	}

	/// Address of the allocation, or `None` before the first write.
	pub fn base_addr(&self) -> Option<usize> {
		if self.base.is_empty() { None } else { Some(self.base.as_ptr() as usize) }
	}

	/// All packed bytes.
	pub fn payload(&self) -> &[u8] {
		&self.base[..self.pack]
	}

	/// Packed bytes between the read and write cursors.
	pub fn unread(&self) -> &[u8] {
		if self.unpack >= self.pack {
			return &[];
		}
		&self.base[self.unpack..self.pack]
	}

	/// Guarantee `n` writable bytes at the pack cursor and return that region.
	///
	/// Fails with [`WireError::OutOfMemory`] and leaves the buffer unchanged when the
	/// allocator cannot satisfy the request.
	pub fn ensure_capacity(&mut self, n: usize) -> Result<&mut [u8]> {
		if n > 0 && self.base.len() - self.pack < n {
			let required = self.pack.checked_add(n).ok_or(WireError::OutOfMemory { requested: usize::MAX })?;
			let to_alloc = self
				.growth
				.next_allocation(self.base.len(), required)
				.ok_or(WireError::OutOfMemory { requested: required })?;

			let from = self.base.len();
			self.alloc.grow(&mut self.base, to_alloc)?;
			if self.base.len() < required {
				self.base.truncate(from);
				return Err(WireError::OutOfMemory { requested: to_alloc });
			}
			tracing::trace!(from, to = to_alloc, pack = self.pack, unpack = self.unpack, "buffer grown");
		}

		let start = self.pack;
		Ok(&mut self.base[start..start + n])
	}

	/// Return `true` when fewer than `n` unread bytes remain, or the cursors are inverted.
	///
	/// Running out is the normal end of an unpack loop, so this never logs.
	pub fn too_small(&self, n: usize) -> bool {
		if self.unpack > self.pack {
			return true;
		}
		self.pack - self.unpack < n
	}

	/// Append raw bytes at the pack cursor.
	pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
		let dst = self.ensure_capacity(bytes.len())?;
		dst.copy_from_slice(bytes);
		self.pack += bytes.len();
		Ok(())
	}

	/// Append one byte.
	pub fn put_u8(&mut self, value: u8) -> Result<()> {
		self.write_bytes(&[value])
	}

	/// Append a big-endian `u16`.
	pub fn put_u16(&mut self, value: u16) -> Result<()> {
		self.write_bytes(&value.to_be_bytes())
	}

	/// Append a big-endian `u32`.
	pub fn put_u32(&mut self, value: u32) -> Result<()> {
		self.write_bytes(&value.to_be_bytes())
	}

	/// Append a big-endian `u64`.
	pub fn put_u64(&mut self, value: u64) -> Result<()> {
		self.write_bytes(&value.to_be_bytes())
	}

	/// Append a big-endian `i32`.
	pub fn put_i32(&mut self, value: i32) -> Result<()> {
		self.write_bytes(&value.to_be_bytes())
	}

	/// Append a big-endian `i64`.
	pub fn put_i64(&mut self, value: i64) -> Result<()> {
		self.write_bytes(&value.to_be_bytes())
	}

	/// Append an `f32` by its bit pattern.
	pub fn put_f32(&mut self, value: f32) -> Result<()> {
		self.put_u32(value.to_bits())
	}

	/// Append an `f64` by its bit pattern.
	pub fn put_f64(&mut self, value: f64) -> Result<()> {
		self.put_u64(value.to_bits())
	}

	/// Read exactly `n` bytes and advance the unpack cursor.
	pub fn read_exact(&mut self, n: usize) -> Result<&[u8]> {
		if self.too_small(n) {
			return Err(WireError::ReadPastEnd {
				need: n,
				rem: self.remaining(),
			});
		}

		let start = self.unpack;
		self.unpack += n;
		Ok(&self.base[start..self.unpack])
	}

	fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
		let raw = self.read_exact(N)?;
		let mut out = [0_u8; N];
		out.copy_from_slice(raw);
		Ok(out)
	}

	/// Read one byte.
	pub fn get_u8(&mut self) -> Result<u8> {
		Ok(self.read_array::<1>()?[0])
	}

	/// Read a big-endian `u16`.
	pub fn get_u16(&mut self) -> Result<u16> {
		Ok(u16::from_be_bytes(self.read_array()?))
	}

	/// Read a big-endian `u32`.
	pub fn get_u32(&mut self) -> Result<u32> {
		Ok(u32::from_be_bytes(self.read_array()?))
	}

	/// Read a big-endian `u64`.
	pub fn get_u64(&mut self) -> Result<u64> {
		Ok(u64::from_be_bytes(self.read_array()?))
	}

	/// Read a big-endian `i32`.
	pub fn get_i32(&mut self) -> Result<i32> {
		Ok(i32::from_be_bytes(self.read_array()?))
	}

	/// Read a big-endian `i64`.
	pub fn get_i64(&mut self) -> Result<i64> {
		Ok(i64::from_be_bytes(self.read_array()?))
	}

	/// Read an `f32` bit pattern.
	pub fn get_f32(&mut self) -> Result<f32> {
		Ok(f32::from_bits(self.get_u32()?))
	}

	/// Read an `f64` bit pattern.
	pub fn get_f64(&mut self) -> Result<f64> {
		Ok(f64::from_bits(self.get_u64()?))
	}

	/// Replace the contents with `bytes`, taking ownership; everything is unread.
	pub fn load(&mut self, bytes: Vec<u8>) {
		self.pack = bytes.len();
		self.unpack = 0;
		self.base = bytes;
	}

	/// Hand off the unread bytes and leave the buffer empty.
	///
	/// When nothing has been unpacked yet the allocation itself is returned.
	pub fn unload(&mut self) -> Vec<u8> {
		let mut base = std::mem::take(&mut self.base);
		let (unpack, pack) = (self.unpack, self.pack);
		self.pack = 0;
		self.unpack = 0;

		if unpack >= pack {
			return Vec::new();
		}
		if unpack == 0 {
			base.truncate(pack);
			return base;
		}
		base[unpack..pack].to_vec()
	}

	/// Append the unread bytes of `src`.
	pub fn copy_payload(&mut self, src: &Buffer) -> Result<()> {
		self.write_bytes(src.unread())
	}

	/// New buffer with the same settings holding a copy of the unread bytes.
	pub fn copy_unread(&self) -> Result<Buffer> {
		let mut out = Buffer::with_alloc(self.growth, self.ty, Arc::clone(&self.alloc));
		out.copy_payload(self)?;
		Ok(out)
	}

	/// Move the unpack cursor back to the start.
	pub fn rewind(&mut self) {
		self.unpack = 0;
	}

	/// Release the allocation and zero both cursors.
	pub fn reset(&mut self) {
		self.base = Vec::new();
		self.pack = 0;
		self.unpack = 0;
	}
}

impl Default for Buffer {
	fn default() -> Self {
		Self::new(BufferType::NonDescribed)
	}
}

impl fmt::Debug for Buffer {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Buffer")
			.field("type", &self.ty)
			.field("bytes_allocated", &self.base.len())
			.field("pack", &self.pack)
			.field("unpack", &self.unpack)
			.finish()
	}
}

impl PartialEq for Buffer {
	fn eq(&self, other: &Self) -> bool {
		self.ty == other.ty && self.unread() == other.unread()
	}
}

#[cfg(test)]
mod tests;
