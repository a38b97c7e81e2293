use crate::bind::{BindError, Result, Value};

/// One parsed operation in a key path expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathStep {
	/// Select an object key, or an array element when the key is a decimal index.
	Key(String),
	/// Select an array element by zero-based index.
	Index(usize),
}

/// Parsed key path expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPath {
	/// Ordered sequence of path steps.
	pub steps: Vec<PathStep>,
}

impl KeyPath {
	/// Parse dotted key syntax with optional `[index]` selectors, e.g.
	/// `SecurityGroups.SecurityGroup[0].Tags`.
	///
	/// Keys may contain ASCII alphanumerics, `_` and `-`.
	pub fn parse(input: &str) -> Result<Self> {
		let invalid = || BindError::InvalidKeyPath { path: input.to_owned() };
		if input.is_empty() {
			return Err(invalid());
		}

		let bytes = input.as_bytes();
		let mut idx = 0_usize;
		let mut steps = Vec::new();

		while idx < bytes.len() {
			let start = idx;
			while idx < bytes.len() && (bytes[idx].is_ascii_alphanumeric() || matches!(bytes[idx], b'_' | b'-')) {
				idx += 1;
			}

			if idx > start {
				steps.push(PathStep::Key(input[start..idx].to_owned()));
			} else if bytes[idx] != b'[' || !steps.is_empty() {
				return Err(invalid());
			}

			while idx < bytes.len() && bytes[idx] == b'[' {
				idx += 1;
				let n_start = idx;
				while idx < bytes.len() && bytes[idx].is_ascii_digit() {
					idx += 1;
				}
				if idx == n_start || idx >= bytes.len() || bytes[idx] != b']' {
					return Err(invalid());
				}

				let number = input[n_start..idx].parse::<usize>().map_err(|_| invalid())?;
				steps.push(PathStep::Index(number));
				idx += 1;
			}

			if idx < bytes.len() {
				if bytes[idx] != b'.' {
					return Err(invalid());
				}
				idx += 1;
				if idx >= bytes.len() {
					return Err(invalid());
				}
			}
		}

		Ok(Self { steps })
	}

	/// Path with no steps; narrows to the value itself.
	pub fn root() -> Self {
		Self { steps: Vec::new() }
	}
}

impl Value {
	/// Drill into nested objects and arrays, one key per level.
	///
	/// Object levels match keys exactly; array levels parse the key as a
	/// decimal index. Any miss is [`BindError::KeyNotFound`].
	pub fn get<K: AsRef<str>>(&self, keys: &[K]) -> Result<&Value> {
		keys.iter().try_fold(self, |current, key| step_key(current, key.as_ref()))
	}

	/// [`Value::get`] driven by a parsed [`KeyPath`].
	pub fn get_path(&self, path: &KeyPath) -> Result<&Value> {
		path.steps.iter().try_fold(self, |current, step| match step {
			PathStep::Key(key) => step_key(current, key),
			PathStep::Index(index) => match current {
				Value::Array(items) => items.get(*index).ok_or_else(|| BindError::key_not_found(index.to_string())),
				_ => Err(BindError::key_not_found(format!("[{index}]"))),
			},
		})
	}
}

fn step_key<'v>(current: &'v Value, key: &str) -> Result<&'v Value> {
	let found = match current {
		Value::Object(object) => object.get(key),
		Value::Array(items) => key.parse::<usize>().ok().and_then(|index| items.get(index)),
		_ => None,
	};
	found.ok_or_else(|| BindError::key_not_found(key))
}
