use std::path::PathBuf;

use clap::ValueEnum;
use jsonbind::bind::{Bind, Value, bind};
use serde::Serialize;

use crate::cmd::records::{Disk, SecurityGroup, Tags};
use crate::cmd::util::{load_value, narrow};
use crate::error::Result;

/// Record types selectable with `--as`.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum RecordKind {
	/// Security group with rules and tags.
	SecurityGroup,
	/// Block storage volume.
	Disk,
	/// Tag list wrapper.
	Tags,
}

/// Bind the value at `key_path` into `record` and print it as JSON.
///
/// An array binds into a list of records, anything else into one record.
pub fn run(path: PathBuf, record: RecordKind, key_path: Option<String>) -> Result<()> {
	let root = load_value(&path)?;
	let value = narrow(&root, key_path.as_deref())?;

	match record {
		RecordKind::SecurityGroup => print_bound::<SecurityGroup>(value),
		RecordKind::Disk => print_bound::<Disk>(value),
		RecordKind::Tags => print_bound::<Tags>(value),
	}
}

fn print_bound<T: Bind + Serialize>(value: &Value) -> Result<()> {
	let rendered = if matches!(value, Value::Array(_)) {
		let mut items: Vec<T> = Vec::new();
		bind(value, &mut items)?;
		serde_json::to_string_pretty(&items)?
	} else {
		let mut item = T::zero();
		bind(value, &mut item)?;
		serde_json::to_string_pretty(&item)?
	};
	println!("{rendered}");
	Ok(())
}
