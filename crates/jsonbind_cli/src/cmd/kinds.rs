use std::path::PathBuf;

use jsonbind::bind::Value;

use crate::cmd::util::{load_value, narrow};
use crate::error::Result;

/// Maximum number of elements listed per array.
const MAX_ARRAY_ITEMS: usize = 16;

/// Print an indented tree of node kinds under `key_path`.
pub fn run(path: PathBuf, key_path: Option<String>, max_depth: u32) -> Result<()> {
	let root = load_value(&path)?;
	let value = narrow(&root, key_path.as_deref())?;

	let mut out = String::new();
	render_kinds(value, 0, max_depth, &mut out);
	print!("{out}");
	Ok(())
}

fn render_kinds(value: &Value, depth: u32, max_depth: u32, out: &mut String) {
	let pad = "  ".repeat(depth as usize);
	match value {
		Value::Array(items) => {
			out.push_str(&format!("array[{}]\n", items.len()));
			if depth >= max_depth {
				return;
			}
			for (idx, item) in items.iter().enumerate().take(MAX_ARRAY_ITEMS) {
				out.push_str(&format!("{pad}  [{idx}] "));
				render_kinds(item, depth + 1, max_depth, out);
			}
			if items.len() > MAX_ARRAY_ITEMS {
				out.push_str(&format!("{pad}  ... {} more\n", items.len() - MAX_ARRAY_ITEMS));
			}
		}
		Value::Object(object) => {
			out.push_str(&format!("object{{{}}}\n", object.len()));
			if depth >= max_depth {
				return;
			}
			for (key, item) in object.iter() {
				out.push_str(&format!("{pad}  {key}: "));
				render_kinds(item, depth + 1, max_depth, out);
			}
		}
		scalar => {
			out.push_str(scalar.kind().as_str());
			out.push('\n');
		}
	}
}
