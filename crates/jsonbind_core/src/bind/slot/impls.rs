use std::collections::{BTreeMap, HashMap, VecDeque};
use std::hash::{BuildHasher, Hash};

use indexmap::IndexMap;

use super::{Bind, FloatSlot, IntegerSlot, KeyKind, MapKey, MappingSlot, OptionalSlot, ReadOnly, SequenceSlot, Slot};
use crate::bind::{BindError, Result, Value, bind};

macro_rules! integer_slot {
	($($ty:ty),*) => {
		$(
			impl IntegerSlot for $ty {
				fn set_i64(&mut self, value: i64) {
					*self = value as $ty;
				}
			}

			impl Bind for $ty {
				fn zero() -> Self {
					0
				}

				fn slot(&mut self) -> Slot<'_> {
					Slot::Integer(self)
				}
			}

			impl MapKey for $ty {
				const KIND: KeyKind = KeyKind::Integer;

				fn from_key(_key: &str) -> Option<Self> {
					None
				}
			}
		)*
	};
}
integer_slot!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! float_slot {
	($($ty:ty),*) => {
		$(
			impl FloatSlot for $ty {
				fn set_f64(&mut self, value: f64) {
					*self = value as $ty;
				}
			}

			impl Bind for $ty {
				fn zero() -> Self {
					0.0
				}

				fn slot(&mut self) -> Slot<'_> {
					Slot::Float(self)
				}
			}
		)*
	};
}
float_slot!(f32, f64);

impl Bind for bool {
	fn zero() -> Self {
		false
	}

	fn slot(&mut self) -> Slot<'_> {
		Slot::Boolean(self)
	}
}

impl MapKey for bool {
	const KIND: KeyKind = KeyKind::Boolean;

	fn from_key(_key: &str) -> Option<Self> {
		None
	}
}

impl MapKey for char {
	const KIND: KeyKind = KeyKind::Other;

	fn from_key(_key: &str) -> Option<Self> {
		None
	}
}

impl Bind for String {
	fn zero() -> Self {
		String::new()
	}

	fn slot(&mut self) -> Slot<'_> {
		Slot::Text(self)
	}
}

impl MapKey for String {
	const KIND: KeyKind = KeyKind::String;

	fn from_key(key: &str) -> Option<Self> {
		Some(key.to_owned())
	}
}

impl MapKey for Box<str> {
	const KIND: KeyKind = KeyKind::String;

	fn from_key(key: &str) -> Option<Self> {
		Some(key.into())
	}
}

impl Bind for Value {
	fn zero() -> Self {
		Value::Null
	}

	fn slot(&mut self) -> Slot<'_> {
		Slot::Value(self)
	}
}

impl<T: Bind> SequenceSlot for Vec<T> {
	fn clear(&mut self) {
		Vec::clear(self);
	}

	fn push_bound(&mut self, value: &Value) -> Result<()> {
		let mut item = T::zero();
		bind(value, &mut item)?;
		self.push(item);
		Ok(())
	}
}

impl<T: Bind> Bind for Vec<T> {
	fn zero() -> Self {
		Vec::new()
	}

	fn slot(&mut self) -> Slot<'_> {
		Slot::Sequence(self)
	}
}

impl<T: Bind> SequenceSlot for VecDeque<T> {
	fn clear(&mut self) {
		VecDeque::clear(self);
	}

	fn push_bound(&mut self, value: &Value) -> Result<()> {
		let mut item = T::zero();
		bind(value, &mut item)?;
		self.push_back(item);
		Ok(())
	}
}

impl<T: Bind> Bind for VecDeque<T> {
	fn zero() -> Self {
		VecDeque::new()
	}

	fn slot(&mut self) -> Slot<'_> {
		Slot::Sequence(self)
	}
}

fn bound_entry<K: MapKey, V: Bind>(key: &str, value: &Value) -> Result<(K, V)> {
	let key = K::from_key(key).ok_or(BindError::KeyKindUnsupported { key: K::KIND.as_str() })?;
	let mut item = V::zero();
	bind(value, &mut item)?;
	Ok((key, item))
}

impl<K, V, S> MappingSlot for HashMap<K, V, S>
where
	K: MapKey + Eq + Hash,
	V: Bind,
	S: BuildHasher,
{
	fn key_kind(&self) -> KeyKind {
		K::KIND
	}

	fn clear(&mut self) {
		HashMap::clear(self);
	}

	fn insert_bound(&mut self, key: &str, value: &Value) -> Result<()> {
		let (key, item) = bound_entry::<K, V>(key, value)?;
		self.insert(key, item);
		Ok(())
	}
}

impl<K, V, S> Bind for HashMap<K, V, S>
where
	K: MapKey + Eq + Hash,
	V: Bind,
	S: BuildHasher + Default,
{
	fn zero() -> Self {
		HashMap::default()
	}

	fn slot(&mut self) -> Slot<'_> {
		Slot::Mapping(self)
	}
}

impl<K: MapKey + Ord, V: Bind> MappingSlot for BTreeMap<K, V> {
	fn key_kind(&self) -> KeyKind {
		K::KIND
	}

	fn clear(&mut self) {
		BTreeMap::clear(self);
	}

	fn insert_bound(&mut self, key: &str, value: &Value) -> Result<()> {
		let (key, item) = bound_entry::<K, V>(key, value)?;
		self.insert(key, item);
		Ok(())
	}
}

impl<K: MapKey + Ord, V: Bind> Bind for BTreeMap<K, V> {
	fn zero() -> Self {
		BTreeMap::new()
	}

	fn slot(&mut self) -> Slot<'_> {
		Slot::Mapping(self)
	}
}

impl<K, V, S> MappingSlot for IndexMap<K, V, S>
where
	K: MapKey + Eq + Hash,
	V: Bind,
	S: BuildHasher,
{
	fn key_kind(&self) -> KeyKind {
		K::KIND
	}

	fn clear(&mut self) {
		IndexMap::clear(self);
	}

	fn insert_bound(&mut self, key: &str, value: &Value) -> Result<()> {
		let (key, item) = bound_entry::<K, V>(key, value)?;
		self.insert(key, item);
		Ok(())
	}
}

impl<K, V, S> Bind for IndexMap<K, V, S>
where
	K: MapKey + Eq + Hash,
	V: Bind,
	S: BuildHasher + Default,
{
	fn zero() -> Self {
		IndexMap::default()
	}

	fn slot(&mut self) -> Slot<'_> {
		Slot::Mapping(self)
	}
}

impl<T: Bind> OptionalSlot for Option<T> {
	fn clear(&mut self) {
		*self = None;
	}

	fn bind_present(&mut self, value: &Value) -> Result<()> {
		if let Some(inner) = self {
			return bind(value, inner);
		}
		let mut fresh = T::zero();
		bind(value, &mut fresh)?;
		*self = Some(fresh);
		Ok(())
	}
}

impl<T: Bind> Bind for Option<T> {
	fn zero() -> Self {
		None
	}

	fn slot(&mut self) -> Slot<'_> {
		Slot::Optional(self)
	}
}

impl<T: Bind> Bind for Box<T> {
	fn zero() -> Self {
		Box::new(T::zero())
	}

	fn slot(&mut self) -> Slot<'_> {
		(**self).slot()
	}
}

impl<T: Bind> Bind for ReadOnly<T> {
	fn zero() -> Self {
		ReadOnly(T::zero())
	}

	fn slot(&mut self) -> Slot<'_> {
		Slot::Unsettable
	}
}
