use std::path::Path;

use jsonbind::bind::{KeyPath, Value};
use tracing::debug;

use crate::error::{CliError, Result};

/// Read a JSON file into the value model.
pub(crate) fn load_value(path: &Path) -> Result<Value> {
	let text = std::fs::read_to_string(path).map_err(|source| CliError::Io {
		path: path.to_owned(),
		source,
	})?;
	let parsed: serde_json::Value = serde_json::from_str(&text)?;
	debug!(path = %path.display(), bytes = text.len(), "loaded json document");
	Ok(Value::from(parsed))
}

/// Narrow `value` by an optional dotted key path.
pub(crate) fn narrow<'v>(value: &'v Value, key_path: Option<&str>) -> Result<&'v Value> {
	let Some(key_path) = key_path else {
		return Ok(value);
	};
	let parsed = KeyPath::parse(key_path)?;
	Ok(value.get_path(&parsed)?)
}
