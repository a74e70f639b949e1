use crate::wire::{DataType, Info, Result, Value, WireError};

/// Key and owned value pair carried by `KVAL` arrays.
#[derive(Debug, PartialEq, Default)]
pub struct Kval {
	/// Attribute key.
	pub key: String,
	/// Attribute value.
	pub value: Box<Value>,
}

impl Kval {
	/// Build a pair.
	pub fn new(key: &str, value: Value) -> Self {
		Self {
			key: key.to_owned(),
			value: Box::new(value),
		}
	}
}

/// Element storage of a [`DataArray`].
#[derive(Debug, PartialEq)]
pub enum ArrayItems {
	/// Values of the array type, or of any type for `VALUE` arrays.
	Values(Vec<Value>),
	/// `INFO` elements.
	Infos(Vec<Info>),
	/// `KVAL` elements.
	Kvals(Vec<Kval>),
	/// `DATA_ARRAY` elements.
	Arrays(Vec<DataArray>),
}

impl ArrayItems {
	/// Number of elements.
	pub fn len(&self) -> usize {
		match self {
			Self::Values(items) => items.len(),
			Self::Infos(items) => items.len(),
			Self::Kvals(items) => items.len(),
			Self::Arrays(items) => items.len(),
		}
	}

	/// Return `true` when there are no elements.
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

/// Homogeneous array `{type, size, array}`; nested arrays may recurse arbitrarily.
#[derive(Debug, PartialEq)]
pub struct DataArray {
	pub(crate) ty: DataType,
	pub(crate) items: ArrayItems,
}

impl Default for DataArray {
	fn default() -> Self {
		Self {
			ty: DataType::UNDEF,
			items: ArrayItems::Values(Vec::new()),
		}
	}
}

impl DataArray {
	/// Array of values that must all carry `ty`; `VALUE` accepts any element type.
	pub fn from_values(ty: DataType, values: Vec<Value>) -> Result<Self> {
		if matches!(ty, DataType::INFO | DataType::KVAL | DataType::DATA_ARRAY) {
			return Err(WireError::BadParam {
				reason: "container element type requires its typed constructor",
			});
		}
		if ty != DataType::VALUE && values.iter().any(|value| value.data_type() != ty) {
			return Err(WireError::BadParam {
				reason: "array element type mismatch",
			});
		}
		Ok(Self {
			ty,
			items: ArrayItems::Values(values),
		})
	}

	/// `INFO` array.
	pub fn from_infos(infos: Vec<Info>) -> Self {
		Self {
			ty: DataType::INFO,
			items: ArrayItems::Infos(infos),
		}
	}

	/// `KVAL` array.
	pub fn from_kvals(kvals: Vec<Kval>) -> Self {
		Self {
			ty: DataType::KVAL,
			items: ArrayItems::Kvals(kvals),
		}
	}

	/// `DATA_ARRAY` array.
	pub fn from_arrays(arrays: Vec<DataArray>) -> Self {
		Self {
			ty: DataType::DATA_ARRAY,
			items: ArrayItems::Arrays(arrays),
		}
	}

	/// Element type tag.
	pub fn element_type(&self) -> DataType {
		self.ty
	}

	/// Number of elements.
	pub fn size(&self) -> usize {
		self.items.len()
	}

	/// Return `true` when there are no elements.
	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	/// Borrow the element storage.
	pub fn items(&self) -> &ArrayItems {
		&self.items
	}

	/// Value elements, if this is a value array.
	pub fn values(&self) -> Option<&[Value]> {
		match &self.items {
			ArrayItems::Values(items) => Some(items),
			_ => None,
		}
	}

	/// Info elements, if this is an `INFO` array.
	pub fn infos(&self) -> Option<&[Info]> {
		match &self.items {
			ArrayItems::Infos(items) => Some(items),
			_ => None,
		}
	}

	/// Pair elements, if this is a `KVAL` array.
	pub fn kvals(&self) -> Option<&[Kval]> {
		match &self.items {
			ArrayItems::Kvals(items) => Some(items),
			_ => None,
		}
	}

	/// Nested arrays, if this is a `DATA_ARRAY` array.
	pub fn arrays(&self) -> Option<&[DataArray]> {
		match &self.items {
			ArrayItems::Arrays(items) => Some(items),
			_ => None,
		}
	}
}
