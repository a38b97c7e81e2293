use std::any::TypeId;
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use parking_lot::RwLock;

use crate::bind::Record;

/// Object key to field index lookup for one record type.
#[derive(Debug)]
pub struct FieldTable {
	names: &'static [&'static str],
	exact: HashMap<&'static str, usize>,
	normalized: HashMap<String, usize>,
}

impl FieldTable {
	/// Build a table over declared field names. The first declaration wins
	/// when two names collide.
	pub fn build(names: &'static [&'static str]) -> Self {
		let mut exact = HashMap::with_capacity(names.len());
		let mut normalized = HashMap::with_capacity(names.len());
		for (index, name) in names.iter().enumerate() {
			exact.entry(*name).or_insert(index);
			normalized.entry(camel_split(name, "_")).or_insert(index);
		}
		Self { names, exact, normalized }
	}

	/// Declared field names, in declaration order.
	pub fn names(&self) -> &'static [&'static str] {
		self.names
	}

	/// Resolve an object key to a field index.
	///
	/// Tries the key verbatim against declared names, then its
	/// [`camel_split`] form against the declared names' normalized forms.
	pub fn resolve(&self, key: &str) -> Option<usize> {
		if let Some(index) = self.exact.get(key) {
			return Some(*index);
		}
		self.normalized.get(&camel_split(key, "_")).copied()
	}
}

static TABLES: OnceLock<RwLock<HashMap<TypeId, Arc<FieldTable>>>> = OnceLock::new();

fn tables() -> &'static RwLock<HashMap<TypeId, Arc<FieldTable>>> {
	TABLES.get_or_init(|| RwLock::new(HashMap::new()))
}

/// Cached resolver table for record type `T`.
pub fn field_table<T: Record>() -> Arc<FieldTable> {
	let key = TypeId::of::<T>();
	if let Some(table) = tables().read().get(&key) {
		return Arc::clone(table);
	}

	let built = Arc::new(FieldTable::build(T::FIELDS));
	let mut guard = tables().write();
	Arc::clone(guard.entry(key).or_insert(built))
}

/// Split an identifier into lowercase words at case boundaries and join
/// them with `sep`.
///
/// `SecurityGroupId` becomes `security_group_id` and `HTTPServer` becomes
/// `http_server`. Existing `_`, `-` and whitespace also separate words.
pub fn camel_split(input: &str, sep: &str) -> String {
	let chars: Vec<char> = input.chars().collect();
	let mut words: Vec<String> = Vec::new();
	let mut current = String::new();

	for (idx, ch) in chars.iter().copied().enumerate() {
		if ch == '_' || ch == '-' || ch.is_whitespace() {
			if !current.is_empty() {
				words.push(std::mem::take(&mut current));
			}
			continue;
		}

		if ch.is_uppercase() && !current.is_empty() {
			let prev = chars[idx - 1];
			let next_is_lower = chars.get(idx + 1).is_some_and(|next| next.is_lowercase());
			if prev.is_lowercase() || prev.is_ascii_digit() || (prev.is_uppercase() && next_is_lower) {
				words.push(std::mem::take(&mut current));
			}
		}

		current.extend(ch.to_lowercase());
	}

	if !current.is_empty() {
		words.push(current);
	}
	words.join(sep)
}
