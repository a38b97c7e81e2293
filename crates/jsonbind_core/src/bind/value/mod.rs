use std::fmt;

use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use crate::bind::{BindError, Result, SlotKind};

/// In-memory JSON document tree.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
	/// JSON `null`.
	#[default]
	Null,
	/// Integral number that fits in `i64`.
	Int(i64),
	/// Any other number.
	Float(f64),
	/// JSON `true`/`false`.
	Bool(bool),
	/// UTF-8 text.
	String(String),
	/// Ordered sequence of values.
	Array(Vec<Value>),
	/// Ordered key/value mapping.
	Object(Object),
}

/// Variant tag of a [`Value`], used in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
	/// [`Value::Null`].
	Null,
	/// [`Value::Int`].
	Int,
	/// [`Value::Float`].
	Float,
	/// [`Value::Bool`].
	Bool,
	/// [`Value::String`].
	String,
	/// [`Value::Array`].
	Array,
	/// [`Value::Object`].
	Object,
}

impl ValueKind {
	/// Lowercase label for this kind.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Null => "null",
			Self::Int => "integer",
			Self::Float => "float",
			Self::Bool => "boolean",
			Self::String => "string",
			Self::Array => "array",
			Self::Object => "object",
		}
	}
}

impl fmt::Display for ValueKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Insertion-ordered string-keyed map of values.
///
/// Re-inserting an existing key replaces its value in place, so iteration
/// order follows first insertion while lookups see the last write.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Object {
	entries: IndexMap<String, Value>,
}

impl Object {
	/// Create an empty object.
	pub fn new() -> Self {
		Self::default()
	}

	/// Number of keys.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Whether the object has no keys.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Look up a key by exact match.
	pub fn get(&self, key: &str) -> Option<&Value> {
		self.entries.get(key)
	}

	/// Whether `key` is present.
	pub fn contains_key(&self, key: &str) -> bool {
		self.entries.contains_key(key)
	}

	/// Insert or overwrite `key`, returning the previous value.
	pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
		self.entries.insert(key.into(), value.into())
	}

	/// Overlay every entry of `other` onto this object.
	pub fn merge(&mut self, other: &Object) {
		for (key, value) in other.iter() {
			self.entries.insert(key.to_owned(), value.clone());
		}
	}

	/// Iterate entries in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
		self.entries.iter().map(|(key, value)| (key.as_str(), value))
	}

	/// Iterate keys in insertion order.
	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.entries.keys().map(String::as_str)
	}
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Object {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let mut out = Self::new();
		for (key, value) in iter {
			out.insert(key, value);
		}
		out
	}
}

impl Value {
	/// Empty array value.
	pub fn array() -> Self {
		Self::Array(Vec::new())
	}

	/// Empty object value.
	pub fn object() -> Self {
		Self::Object(Object::new())
	}

	/// Variant tag.
	pub fn kind(&self) -> ValueKind {
		match self {
			Self::Null => ValueKind::Null,
			Self::Int(_) => ValueKind::Int,
			Self::Float(_) => ValueKind::Float,
			Self::Bool(_) => ValueKind::Bool,
			Self::String(_) => ValueKind::String,
			Self::Array(_) => ValueKind::Array,
			Self::Object(_) => ValueKind::Object,
		}
	}

	/// Whether this is [`Value::Null`].
	pub fn is_null(&self) -> bool {
		matches!(self, Self::Null)
	}

	/// Integer payload.
	pub fn as_i64(&self) -> Option<i64> {
		match self {
			Self::Int(value) => Some(*value),
			_ => None,
		}
	}

	/// Numeric payload, widening integers.
	pub fn as_f64(&self) -> Option<f64> {
		match self {
			Self::Int(value) => Some(*value as f64),
			Self::Float(value) => Some(*value),
			_ => None,
		}
	}

	/// Boolean payload.
	pub fn as_bool(&self) -> Option<bool> {
		match self {
			Self::Bool(value) => Some(*value),
			_ => None,
		}
	}

	/// Text payload.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Self::String(value) => Some(value),
			_ => None,
		}
	}

	/// Array elements.
	pub fn as_array(&self) -> Option<&[Value]> {
		match self {
			Self::Array(items) => Some(items),
			_ => None,
		}
	}

	/// Object entries.
	pub fn as_object(&self) -> Option<&Object> {
		match self {
			Self::Object(object) => Some(object),
			_ => None,
		}
	}

	/// Push `item` onto an array value.
	pub fn append(&mut self, item: impl Into<Value>) -> Result<()> {
		match self {
			Self::Array(items) => {
				items.push(item.into());
				Ok(())
			}
			other => Err(BindError::mismatch(other.kind(), SlotKind::Sequence)),
		}
	}

	/// Insert or overwrite `key` on an object value.
	pub fn update(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Result<()> {
		match self {
			Self::Object(object) => {
				object.insert(key, value);
				Ok(())
			}
			other => Err(BindError::mismatch(other.kind(), SlotKind::Mapping)),
		}
	}
}

/// Compact JSON text. This is the canonical rendering used when arrays and
/// objects are bound into string targets.
impl fmt::Display for Value {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let text = serde_json::to_string(self).map_err(|_| fmt::Error)?;
		f.write_str(&text)
	}
}

impl Serialize for Value {
	fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
		match self {
			Self::Null => serializer.serialize_unit(),
			Self::Int(value) => serializer.serialize_i64(*value),
			Self::Float(value) => serializer.serialize_f64(*value),
			Self::Bool(value) => serializer.serialize_bool(*value),
			Self::String(value) => serializer.serialize_str(value),
			Self::Array(items) => {
				let mut seq = serializer.serialize_seq(Some(items.len()))?;
				for item in items {
					seq.serialize_element(item)?;
				}
				seq.end()
			}
			Self::Object(object) => object.serialize(serializer),
		}
	}
}

impl Serialize for Object {
	fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
		let mut map = serializer.serialize_map(Some(self.len()))?;
		for (key, value) in self.iter() {
			map.serialize_entry(key, value)?;
		}
		map.end()
	}
}

impl From<serde_json::Value> for Value {
	fn from(value: serde_json::Value) -> Self {
		match value {
			serde_json::Value::Null => Self::Null,
			serde_json::Value::Bool(value) => Self::Bool(value),
			serde_json::Value::Number(number) => match number.as_i64() {
				Some(value) => Self::Int(value),
				None => Self::Float(number.as_f64().unwrap_or(f64::NAN)),
			},
			serde_json::Value::String(value) => Self::String(value),
			serde_json::Value::Array(items) => Self::Array(items.into_iter().map(Self::from).collect()),
			serde_json::Value::Object(map) => Self::Object(map.into_iter().map(|(key, value)| (key, Self::from(value))).collect()),
		}
	}
}

macro_rules! value_from_int {
	($($ty:ty),*) => {
		$(
			impl From<$ty> for Value {
				fn from(value: $ty) -> Self {
					Self::Int(i64::from(value))
				}
			}
		)*
	};
}
value_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Value {
	fn from(value: f32) -> Self {
		Self::Float(f64::from(value))
	}
}

impl From<f64> for Value {
	fn from(value: f64) -> Self {
		Self::Float(value)
	}
}

impl From<bool> for Value {
	fn from(value: bool) -> Self {
		Self::Bool(value)
	}
}

impl From<&str> for Value {
	fn from(value: &str) -> Self {
		Self::String(value.to_owned())
	}
}

impl From<String> for Value {
	fn from(value: String) -> Self {
		Self::String(value)
	}
}

impl From<Vec<Value>> for Value {
	fn from(items: Vec<Value>) -> Self {
		Self::Array(items)
	}
}

impl From<Object> for Value {
	fn from(object: Object) -> Self {
		Self::Object(object)
	}
}

impl<T: Into<Value>> From<Option<T>> for Value {
	fn from(value: Option<T>) -> Self {
		value.map_or(Self::Null, Into::into)
	}
}

impl FromIterator<Value> for Value {
	fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
		Self::Array(iter.into_iter().collect())
	}
}
