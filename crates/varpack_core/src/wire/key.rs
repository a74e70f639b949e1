use std::fmt;

/// Maximum key length in bytes, excluding any terminator.
pub const MAX_KEYLEN: usize = 511;
/// Maximum namespace length in bytes, excluding any terminator.
pub const MAX_NSLEN: usize = 255;

/// Fixed-capacity attribute key. Longer input is truncated on a char boundary.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Key(Box<str>);

impl Key {
	/// Build a key, truncating to [`MAX_KEYLEN`] bytes.
	pub fn new(key: &str) -> Self {
		Self(truncate(key, MAX_KEYLEN).into())
	}

	/// Borrow the key text.
	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Return `true` for the empty key.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl From<&str> for Key {
	fn from(key: &str) -> Self {
		Self::new(key)
	}
}

impl fmt::Display for Key {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

/// Fixed-capacity job namespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Nspace(Box<str>);

impl Nspace {
	/// Build a namespace, truncating to [`MAX_NSLEN`] bytes.
	pub fn new(nspace: &str) -> Self {
		Self(truncate(nspace, MAX_NSLEN).into())
	}

	/// Borrow the namespace text.
	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Return `true` for the unset namespace.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl From<&str> for Nspace {
	fn from(nspace: &str) -> Self {
		Self::new(nspace)
	}
}

impl fmt::Display for Nspace {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

fn truncate(input: &str, max: usize) -> &str {
	if input.len() <= max {
		return input;
	}
	let mut end = max;
	while !input.is_char_boundary(end) {
		end -= 1;
	}
	&input[..end]
}

#[cfg(test)]
mod tests {
	use super::{Key, MAX_KEYLEN, MAX_NSLEN, Nspace};

	#[test]
	fn long_keys_are_truncated() {
		let long = "k".repeat(MAX_KEYLEN + 20);
		assert_eq!(Key::new(&long).as_str().len(), MAX_KEYLEN);
	}

	#[test]
	fn truncation_respects_char_boundaries() {
		let long = "é".repeat(MAX_NSLEN);
		let nspace = Nspace::new(&long);
		assert!(nspace.as_str().len() <= MAX_NSLEN);
		assert!(nspace.as_str().chars().all(|ch| ch == 'é'));
	}
}
