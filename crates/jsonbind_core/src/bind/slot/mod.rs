use std::fmt;
use std::sync::Arc;

use time::PrimitiveDateTime;

use crate::bind::{FieldTable, Result, Value};

mod impls;

/// A type that can be the target of [`bind`](crate::bind::bind).
///
/// Implementations describe their shape by lending themselves out as a
/// [`Slot`]; the coercion engine never inspects the concrete type.
pub trait Bind {
	/// The value a `null` source resets this type to, also used to seed
	/// fresh container elements.
	fn zero() -> Self
	where
		Self: Sized;

	/// Borrow this location as a typed slot.
	fn slot(&mut self) -> Slot<'_>;
}

/// Mutable borrow of a target location, classified by shape.
pub enum Slot<'a> {
	/// Any primitive integer width.
	Integer(&'a mut dyn IntegerSlot),
	/// `f32` or `f64`.
	Float(&'a mut dyn FloatSlot),
	/// `bool`.
	Boolean(&'a mut bool),
	/// `String`.
	Text(&'a mut String),
	/// Timestamp types decoded with the fixed text layout.
	Temporal(&'a mut dyn TemporalSlot),
	/// Growable sequence.
	Sequence(&'a mut dyn SequenceSlot),
	/// Keyed map.
	Mapping(&'a mut dyn MappingSlot),
	/// Struct declared with [`record!`](crate::record).
	Record(&'a mut dyn RecordSlot),
	/// `Option<T>`.
	Optional(&'a mut dyn OptionalSlot),
	/// The value model itself; stored without coercion.
	Value(&'a mut Value),
	/// A location that refuses writes.
	Unsettable,
}

impl Slot<'_> {
	/// Shape label of this slot.
	pub fn kind(&self) -> SlotKind {
		match self {
			Self::Integer(_) => SlotKind::Integer,
			Self::Float(_) => SlotKind::Float,
			Self::Boolean(_) => SlotKind::Boolean,
			Self::Text(_) => SlotKind::Text,
			Self::Temporal(_) => SlotKind::Temporal,
			Self::Sequence(_) => SlotKind::Sequence,
			Self::Mapping(_) => SlotKind::Mapping,
			Self::Record(_) => SlotKind::Record,
			Self::Optional(_) => SlotKind::Optional,
			Self::Value(_) => SlotKind::Value,
			Self::Unsettable => SlotKind::Unsettable,
		}
	}

	/// Whether the engine may write through this slot.
	pub fn is_settable(&self) -> bool {
		!matches!(self, Self::Unsettable)
	}
}

/// Shape tag of a [`Slot`], used in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotKind {
	/// [`Slot::Integer`].
	Integer,
	/// [`Slot::Float`].
	Float,
	/// [`Slot::Boolean`].
	Boolean,
	/// [`Slot::Text`].
	Text,
	/// [`Slot::Temporal`].
	Temporal,
	/// [`Slot::Sequence`].
	Sequence,
	/// [`Slot::Mapping`].
	Mapping,
	/// [`Slot::Record`].
	Record,
	/// [`Slot::Optional`].
	Optional,
	/// [`Slot::Value`].
	Value,
	/// [`Slot::Unsettable`].
	Unsettable,
}

impl fmt::Display for SlotKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let label = match self {
			Self::Integer => "integer",
			Self::Float => "float",
			Self::Boolean => "boolean",
			Self::Text => "string",
			Self::Temporal => "timestamp",
			Self::Sequence => "sequence",
			Self::Mapping => "map",
			Self::Record => "record",
			Self::Optional => "optional",
			Self::Value => "value",
			Self::Unsettable => "read-only location",
		};
		f.write_str(label)
	}
}

/// Integer storage of any width. Stores truncate like an `as` cast.
pub trait IntegerSlot {
	/// Store `value`, truncated to the slot's width.
	fn set_i64(&mut self, value: i64);
}

/// Floating point storage.
pub trait FloatSlot {
	/// Store `value`, narrowed to the slot's precision.
	fn set_f64(&mut self, value: f64);
}

/// Timestamp storage.
pub trait TemporalSlot {
	/// Store a UTC wall-clock timestamp.
	fn set_timestamp(&mut self, value: PrimitiveDateTime);
}

/// Growable sequence of bindable elements.
pub trait SequenceSlot {
	/// Drop every element.
	fn clear(&mut self);
	/// Bind `value` into a fresh zero element and append it.
	fn push_bound(&mut self, value: &Value) -> Result<()>;
}

/// Key type classification for mapping targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyKind {
	/// Text keys; the only kind object keys can bind into.
	String,
	/// Integer keys.
	Integer,
	/// Boolean keys.
	Boolean,
	/// Any other key type.
	Other,
}

impl KeyKind {
	/// Lowercase label for this kind.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::String => "string",
			Self::Integer => "integer",
			Self::Boolean => "boolean",
			Self::Other => "other",
		}
	}
}

/// Map key types.
pub trait MapKey: Sized {
	/// Classification of this key type.
	const KIND: KeyKind;

	/// Convert an object key. Key types whose [`MapKey::KIND`] is not
	/// [`KeyKind::String`] exist only for classification and return `None`.
	fn from_key(key: &str) -> Option<Self>;
}

/// Keyed map of bindable values.
pub trait MappingSlot {
	/// Classification of the map's key type.
	fn key_kind(&self) -> KeyKind;
	/// Drop every entry.
	fn clear(&mut self);
	/// Bind `value` into a fresh zero element and insert it under `key`,
	/// replacing any previous entry for that key.
	fn insert_bound(&mut self, key: &str, value: &Value) -> Result<()>;
}

/// Struct with named fields addressable by index.
///
/// Usually implemented through [`record!`](crate::record), which also
/// provides [`Bind`].
pub trait Record: Default + 'static {
	/// Declared field names, in declaration order.
	const FIELDS: &'static [&'static str];

	/// Slot for the field at `index` into [`Record::FIELDS`].
	fn field(&mut self, index: usize) -> Option<Slot<'_>>;
}

/// Object-safe view of a [`Record`].
pub trait RecordSlot {
	/// Resolver table for this record type.
	fn table(&self) -> Arc<FieldTable>;
	/// Slot for the field at `index`.
	fn field(&mut self, index: usize) -> Option<Slot<'_>>;
	/// Reset every field to the record's default.
	fn reset(&mut self);
}

impl<T: Record> RecordSlot for T {
	fn table(&self) -> Arc<FieldTable> {
		crate::bind::field_table::<T>()
	}

	fn field(&mut self, index: usize) -> Option<Slot<'_>> {
		Record::field(self, index)
	}

	fn reset(&mut self) {
		*self = T::default();
	}
}

/// Optional location.
pub trait OptionalSlot {
	/// Set to absent.
	fn clear(&mut self);
	/// Bind `value` into the present value in place. When absent, bind into
	/// a fresh zero value and store it only if that bind succeeds.
	fn bind_present(&mut self, value: &Value) -> Result<()>;
}

/// Wrapper whose contents the binding engine refuses to overwrite.
///
/// Binding `null` into it is a no-op; any other value fails with
/// [`BindError::NotSettable`](crate::bind::BindError::NotSettable).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReadOnly<T>(pub T);

impl<T> std::ops::Deref for ReadOnly<T> {
	type Target = T;

	fn deref(&self) -> &T {
		&self.0
	}
}
