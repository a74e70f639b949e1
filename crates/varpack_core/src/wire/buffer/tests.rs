use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::wire::{Buffer, BufferAlloc, BufferConfig, BufferType, Result, WireError};

/// Always moves the allocation to a fresh block.
#[derive(Default)]
struct RelocatingAlloc {
	moves: AtomicUsize,
}

impl BufferAlloc for RelocatingAlloc {
	fn grow(&self, base: &mut Vec<u8>, new_len: usize) -> Result<()> {
		let mut fresh = vec![0_u8; new_len];
		fresh[..base.len()].copy_from_slice(base);
		*base = fresh;
		self.moves.fetch_add(1, Ordering::Relaxed);
		Ok(())
	}
}

struct FailingAlloc;

impl BufferAlloc for FailingAlloc {
	fn grow(&self, _base: &mut Vec<u8>, new_len: usize) -> Result<()> {
		Err(WireError::OutOfMemory { requested: new_len })
	}
}

/// Reports success but only grows by a fixed stride.
struct ShortAlloc;

impl BufferAlloc for ShortAlloc {
	fn grow(&self, base: &mut Vec<u8>, _new_len: usize) -> Result<()> {
		let len = base.len() + 4;
		base.resize(len, 0);
		Ok(())
	}
}

fn filled(len: usize) -> Vec<u8> {
	(0..len).map(|idx| (idx % 251) as u8).collect()
}

#[test]
fn empty_buffer_has_no_allocation() {
	let mut buf = Buffer::default();
	assert_eq!(buf.base_addr(), None);
	assert_eq!(buf.bytes_allocated(), 0);

	let region = buf.ensure_capacity(0).expect("zero-length reserve");
	assert!(region.is_empty());
	assert_eq!(buf.base_addr(), None);
	assert_eq!((buf.pack_offset(), buf.unpack_offset()), (0, 0));
}

#[test]
fn next_allocation_follows_growth_policy() {
	let cfg = BufferConfig::default();
	assert_eq!(cfg.next_allocation(0, 1), Some(128));
	assert_eq!(cfg.next_allocation(0, 200), Some(256));
	assert_eq!(cfg.next_allocation(256, 300), Some(512));
	assert_eq!(cfg.next_allocation(2048, 4095), Some(4096));
	assert_eq!(cfg.next_allocation(0, 4096), Some(4096));
	assert_eq!(cfg.next_allocation(4096, 4097), Some(8192));
	assert_eq!(cfg.next_allocation(0, 3 * 4096 + 1), Some(4 * 4096));
}

#[test]
fn growth_below_threshold_doubles() {
	let mut buf = Buffer::default();
	buf.write_bytes(&filled(100)).expect("first write");
	assert_eq!(buf.bytes_allocated(), 128);

	buf.write_bytes(&filled(100)).expect("second write");
	assert_eq!(buf.bytes_allocated(), 256);
	assert!(buf.bytes_allocated().is_power_of_two());

	buf.write_bytes(&filled(4095 - 200)).expect("just under threshold");
	assert_eq!(buf.bytes_used(), 4095);
	assert_eq!(buf.bytes_allocated(), 4096);
}

#[test]
fn growth_at_and_over_threshold_rounds_to_multiple() {
	let mut at = Buffer::default();
	at.write_bytes(&filled(4096)).expect("write at threshold");
	assert_eq!(at.bytes_allocated(), 4096);

	let mut over = Buffer::default();
	over.write_bytes(&filled(4097)).expect("write over threshold");
	assert_eq!(over.bytes_allocated(), 8192);
	assert_eq!(over.bytes_allocated() % 4096, 0);
}

#[test]
fn extension_is_zero_filled() {
	let mut buf = Buffer::default();
	let region = buf.ensure_capacity(64).expect("reserve");
	assert!(region.iter().all(|byte| *byte == 0));
	assert_eq!(buf.bytes_used(), 0);
	assert_eq!(buf.bytes_allocated(), 128);
}

#[test]
fn relocation_preserves_cursor_offsets() {
	let alloc = Arc::new(RelocatingAlloc::default());
	let mut buf = Buffer::with_alloc(BufferConfig::default(), BufferType::NonDescribed, alloc.clone());

	let head = filled(100);
	buf.write_bytes(&head).expect("first write");
	assert_eq!(buf.read_exact(40).expect("partial read"), &head[..40]);
	let before = buf.base_addr().expect("allocated");

	buf.write_bytes(&filled(5000)).expect("relocating write");
	assert_ne!(buf.base_addr(), Some(before));
	assert_eq!(alloc.moves.load(Ordering::Relaxed), 2);
	assert_eq!(buf.unpack_offset(), 40);
	assert_eq!(buf.pack_offset(), 5100);
	assert_eq!(buf.read_exact(60).expect("rest of head"), &head[40..]);
}

#[test]
fn failed_growth_leaves_buffer_unchanged() {
	let mut buf = Buffer::with_alloc(BufferConfig::default(), BufferType::NonDescribed, Arc::new(FailingAlloc));
	let err = buf.write_bytes(b"abc").expect_err("allocation fails");
	assert!(matches!(err, WireError::OutOfMemory { requested: 128 }));
	assert_eq!(buf.bytes_allocated(), 0);
	assert_eq!(buf.bytes_used(), 0);
	assert_eq!(buf.base_addr(), None);
}

#[test]
fn short_growth_is_out_of_memory() {
	let mut buf = Buffer::with_alloc(BufferConfig::default(), BufferType::NonDescribed, Arc::new(ShortAlloc));
	buf.write_bytes(b"abcd").expect("fits the first stride");
	assert_eq!(buf.bytes_allocated(), 4);

	let err = buf.write_bytes(&filled(64)).expect_err("allocator fell short");
	assert!(matches!(err, WireError::OutOfMemory { requested: 128 }));
	assert_eq!(buf.bytes_allocated(), 4);
	assert_eq!(buf.payload(), b"abcd");
}

#[test]
fn too_small_reports_short_and_corrupt_buffers() {
	let mut buf = Buffer::default();
	assert!(buf.too_small(1));
	assert!(!buf.too_small(0));

	buf.put_u32(7).expect("pack");
	assert!(!buf.too_small(4));
	assert!(buf.too_small(5));

	buf.get_u16().expect("read half");
	assert!(!buf.too_small(2));
	assert!(buf.too_small(3));

	buf.unpack = buf.pack + 1;
	assert!(buf.too_small(0));
	assert_eq!(buf.remaining(), 0);
	assert!(buf.unread().is_empty());
}

#[test]
fn reading_past_end_is_an_error() {
	let mut buf = Buffer::default();
	buf.put_u16(0xBEEF).expect("pack");
	let err = buf.get_u32().expect_err("short read");
	assert!(matches!(err, WireError::ReadPastEnd { need: 4, rem: 2 }));
	assert_eq!(buf.get_u16().expect("cursor untouched"), 0xBEEF);
}

#[test]
fn scalars_are_big_endian() {
	let mut buf = Buffer::default();
	buf.put_u32(0x0102_0304).expect("u32");
	buf.put_i64(-2).expect("i64");
	buf.put_f64(1.5).expect("f64");
	assert_eq!(&buf.payload()[..4], &[1, 2, 3, 4]);

	assert_eq!(buf.get_u32().expect("u32"), 0x0102_0304);
	assert_eq!(buf.get_i64().expect("i64"), -2);
	assert_eq!(buf.get_f64().expect("f64"), 1.5);
	assert!(buf.too_small(1));
}

#[test]
fn unload_hands_off_unread_allocation() {
	let mut buf = Buffer::default();
	buf.write_bytes(b"payload").expect("pack");
	let base = buf.base_addr().expect("allocated");

	let out = buf.unload();
	assert_eq!(out, b"payload");
	assert_eq!(out.as_ptr() as usize, base);
	assert_eq!(buf.base_addr(), None);
	assert_eq!((buf.pack_offset(), buf.unpack_offset()), (0, 0));
}

#[test]
fn unload_after_partial_read_returns_tail() {
	let mut buf = Buffer::default();
	buf.write_bytes(b"headtail").expect("pack");
	buf.read_exact(4).expect("consume head");
	assert_eq!(buf.unload(), b"tail");
	assert!(buf.is_empty());
}

#[test]
fn load_takes_ownership_and_copy_payload_appends_unread() {
	let mut src = Buffer::default();
	src.load(b"0123456789".to_vec());
	assert_eq!(src.bytes_used(), 10);
	src.read_exact(3).expect("skip");

	let mut dst = Buffer::default();
	dst.put_u8(b'>').expect("prefix");
	dst.copy_payload(&src).expect("copy");
	assert_eq!(dst.payload(), b">3456789");
	assert_eq!(src.unread(), b"3456789");

	let copy = src.copy_unread().expect("copy unread");
	assert_eq!(copy, src);
	assert_ne!(copy.base_addr(), src.base_addr());
}

#[test]
fn reset_releases_allocation() {
	let mut buf = Buffer::new(BufferType::FullyDescribed);
	buf.write_bytes(&filled(300)).expect("pack");
	buf.reset();
	assert_eq!(buf.bytes_allocated(), 0);
	assert!(buf.is_described());
}
