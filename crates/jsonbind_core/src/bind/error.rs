use thiserror::Error;

use crate::bind::{SlotKind, ValueKind};

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, BindError>;

/// Errors produced while narrowing values and binding them into targets.
#[derive(Debug, Error)]
pub enum BindError {
	/// Source value kind cannot be coerced into the target slot kind.
	#[error("type mismatch: cannot bind {value} into {target}")]
	TypeMismatch {
		/// Kind of the source value.
		value: ValueKind,
		/// Kind of the target slot.
		target: SlotKind,
	},
	/// String payload did not parse as the required number.
	#[error("invalid number {text:?}: {source}")]
	NumericParse {
		/// Offending string payload.
		text: String,
		/// Underlying parse failure.
		#[source]
		source: NumericParseError,
	},
	/// String payload did not parse as a timestamp.
	#[error("invalid timestamp {text:?}: {source}")]
	TemporalParse {
		/// Offending string payload.
		text: String,
		/// Underlying parse failure.
		#[source]
		source: time::error::Parse,
	},
	/// Mapping target uses a key type other than text.
	#[error("map key must be a string, target key kind is {key}")]
	KeyKindUnsupported {
		/// Declared key kind of the mapping target.
		key: &'static str,
	},
	/// Key path addressed a missing object key or array index.
	#[error("key not found: {key}")]
	KeyNotFound {
		/// Key or index text that failed to resolve.
		key: String,
	},
	/// Target slot cannot be written.
	#[error("target is not settable")]
	NotSettable,
	/// Key path expression syntax is invalid.
	#[error("invalid key path: {path}")]
	InvalidKeyPath {
		/// Original path string.
		path: String,
	},
}

/// Integer or float parse failure carried by [`BindError::NumericParse`].
#[derive(Debug, Error)]
pub enum NumericParseError {
	/// Base-10 integer parse failed.
	#[error(transparent)]
	Int(#[from] std::num::ParseIntError),
	/// Decimal float parse failed.
	#[error(transparent)]
	Float(#[from] std::num::ParseFloatError),
}

impl BindError {
	pub(crate) fn mismatch(value: ValueKind, target: SlotKind) -> Self {
		Self::TypeMismatch { value, target }
	}

	pub(crate) fn key_not_found(key: impl Into<String>) -> Self {
		Self::KeyNotFound { key: key.into() }
	}
}
