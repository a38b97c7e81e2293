use std::path::PathBuf;

use crate::cmd::util::{load_value, narrow};
use crate::error::Result;

/// Print the value at `key_path` as compact text, or pretty JSON with `json`.
pub fn run(path: PathBuf, key_path: Option<String>, json: bool) -> Result<()> {
	let root = load_value(&path)?;
	let value = narrow(&root, key_path.as_deref())?;

	if json {
		println!("{}", serde_json::to_string_pretty(value)?);
	} else {
		println!("{value}");
	}
	Ok(())
}
