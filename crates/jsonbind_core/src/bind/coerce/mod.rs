use tracing::{debug, trace};

use crate::bind::{Bind, BindError, KeyKind, MappingSlot, Object, RecordSlot, Result, Slot, Value, ValueKind, ZERO_TIMESTAMP, parse_timestamp};

/// Write `value` into `target`, coercing across kinds where defined.
///
/// Errors are returned as soon as they occur; fields, entries and elements
/// bound before the failure keep their new contents.
pub fn bind<T: Bind>(value: &Value, target: &mut T) -> Result<()> {
	bind_slot(value, target.slot())
}

/// Narrow `value` by `keys` (see [`Value::get`]) and bind the result.
pub fn bind_at<T: Bind, K: AsRef<str>>(value: &Value, keys: &[K], target: &mut T) -> Result<()> {
	bind(value.get(keys)?, target)
}

/// Bind into an already classified slot.
pub fn bind_slot(value: &Value, slot: Slot<'_>) -> Result<()> {
	let slot = match slot {
		Slot::Optional(inner) if !value.is_null() => return inner.bind_present(value),
		Slot::Unsettable if !value.is_null() => return Err(BindError::NotSettable),
		other => other,
	};

	match value {
		Value::Null => {
			bind_null(slot);
			Ok(())
		}
		Value::Int(v) => bind_int(*v, slot),
		Value::Bool(v) => bind_bool(*v, slot),
		Value::Float(v) => bind_float(*v, slot),
		Value::String(v) => bind_string(v, slot),
		Value::Array(items) => bind_array(value, items, slot),
		Value::Object(object) => bind_object(value, object, slot),
	}
}

/// Interpret text as a boolean.
///
/// After trimming and lowercasing, `1`, `t`, `true`, `y`, `yes` and `on`
/// are true; every other spelling is false.
pub fn parse_truthy(text: &str) -> bool {
	matches!(text.trim().to_ascii_lowercase().as_str(), "1" | "t" | "true" | "y" | "yes" | "on")
}

fn bind_null(slot: Slot<'_>) {
	match slot {
		Slot::Integer(target) => target.set_i64(0),
		Slot::Float(target) => target.set_f64(0.0),
		Slot::Boolean(target) => *target = false,
		Slot::Text(target) => target.clear(),
		Slot::Temporal(target) => target.set_timestamp(ZERO_TIMESTAMP),
		Slot::Sequence(target) => target.clear(),
		Slot::Mapping(target) => target.clear(),
		Slot::Record(target) => target.reset(),
		Slot::Optional(target) => target.clear(),
		Slot::Value(target) => *target = Value::Null,
		Slot::Unsettable => {}
	}
}

fn bind_int(value: i64, slot: Slot<'_>) -> Result<()> {
	match slot {
		Slot::Value(target) => *target = Value::Int(value),
		Slot::Integer(target) => target.set_i64(value),
		Slot::Float(target) => target.set_f64(value as f64),
		Slot::Boolean(target) => *target = value != 0,
		Slot::Text(target) => *target = value.to_string(),
		other => return Err(BindError::mismatch(ValueKind::Int, other.kind())),
	}
	Ok(())
}

fn bind_bool(value: bool, slot: Slot<'_>) -> Result<()> {
	match slot {
		Slot::Value(target) => *target = Value::Bool(value),
		Slot::Boolean(target) => *target = value,
		Slot::Integer(target) => target.set_i64(i64::from(value)),
		Slot::Float(target) => target.set_f64(if value { 1.0 } else { 0.0 }),
		Slot::Text(target) => *target = value.to_string(),
		other => return Err(BindError::mismatch(ValueKind::Bool, other.kind())),
	}
	Ok(())
}

fn bind_float(value: f64, slot: Slot<'_>) -> Result<()> {
	match slot {
		Slot::Value(target) => *target = Value::Float(value),
		Slot::Float(target) => target.set_f64(value),
		Slot::Integer(target) => target.set_i64(value as i64),
		Slot::Boolean(target) => *target = value != 0.0,
		Slot::Text(target) => *target = fixed_point(value),
		other => return Err(BindError::mismatch(ValueKind::Float, other.kind())),
	}
	Ok(())
}

/// Six-decimal rendering; non-finite values use `NaN`, `+Inf` and `-Inf`.
fn fixed_point(value: f64) -> String {
	match value {
		v if v.is_nan() => "NaN".to_owned(),
		v if v.is_infinite() && v > 0.0 => "+Inf".to_owned(),
		v if v.is_infinite() => "-Inf".to_owned(),
		v => format!("{v:.6}"),
	}
}

fn bind_string(text: &str, slot: Slot<'_>) -> Result<()> {
	match slot {
		Slot::Value(target) => *target = Value::String(text.to_owned()),
		Slot::Text(target) => text.clone_into(target),
		Slot::Temporal(target) => target.set_timestamp(parse_timestamp(text)?),
		Slot::Integer(target) => {
			let parsed = text.parse::<i64>().map_err(|source| BindError::NumericParse {
				text: text.to_owned(),
				source: source.into(),
			})?;
			target.set_i64(parsed);
		}
		Slot::Float(target) => {
			let parsed = text.parse::<f64>().map_err(|source| BindError::NumericParse {
				text: text.to_owned(),
				source: source.into(),
			})?;
			target.set_f64(parsed);
		}
		Slot::Boolean(target) => *target = parse_truthy(text),
		other => return Err(BindError::mismatch(ValueKind::String, other.kind())),
	}
	Ok(())
}

fn bind_array(value: &Value, items: &[Value], slot: Slot<'_>) -> Result<()> {
	match slot {
		Slot::Value(Value::Array(existing)) => existing.extend_from_slice(items),
		Slot::Value(target) => *target = value.clone(),
		Slot::Sequence(target) => {
			for item in items {
				target.push_bound(item)?;
			}
		}
		Slot::Text(target) => *target = value.to_string(),
		other => return Err(BindError::mismatch(ValueKind::Array, other.kind())),
	}
	Ok(())
}

fn bind_object(value: &Value, object: &Object, slot: Slot<'_>) -> Result<()> {
	match slot {
		Slot::Value(Value::Object(existing)) => existing.merge(object),
		Slot::Value(target) => *target = value.clone(),
		Slot::Mapping(target) => populate_mapping(object, target)?,
		Slot::Record(target) => populate_record(object, target)?,
		Slot::Text(target) => *target = value.to_string(),
		other => return Err(BindError::mismatch(ValueKind::Object, other.kind())),
	}
	Ok(())
}

fn populate_mapping(object: &Object, target: &mut dyn MappingSlot) -> Result<()> {
	let kind = target.key_kind();
	if kind != KeyKind::String {
		return Err(BindError::KeyKindUnsupported { key: kind.as_str() });
	}

	for (key, item) in object.iter() {
		target.insert_bound(key, item).inspect_err(|err| debug!(key, error = %err, "map entry failed to bind"))?;
	}
	Ok(())
}

fn populate_record(object: &Object, target: &mut dyn RecordSlot) -> Result<()> {
	let table = target.table();
	for (key, item) in object.iter() {
		let Some(index) = table.resolve(key) else {
			trace!(key, "ignoring key with no matching field");
			continue;
		};
		let Some(slot) = target.field(index) else {
			continue;
		};
		bind_slot(item, slot).inspect_err(|err| debug!(key, error = %err, "record field failed to bind"))?;
	}
	Ok(())
}
