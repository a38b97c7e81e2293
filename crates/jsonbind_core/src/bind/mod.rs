mod coerce;
mod error;
mod field;
mod path;
mod record;
mod slot;
mod temporal;
mod value;

/// Coercion engine entry points.
pub use coerce::{bind, bind_at, bind_slot, parse_truthy};
/// Error and result aliases.
pub use error::{BindError, NumericParseError, Result};
/// Record field resolution and its per-type cache.
pub use field::{FieldTable, camel_split, field_table};
/// Key path parser types.
pub use path::{KeyPath, PathStep};
/// Target slot classification and the traits behind each slot kind.
pub use slot::{
	Bind, FloatSlot, IntegerSlot, KeyKind, MapKey, MappingSlot, OptionalSlot, ReadOnly, Record, RecordSlot, SequenceSlot, Slot, SlotKind,
	TemporalSlot,
};
/// Fixed-layout timestamp conversion.
pub use temporal::{Timestamp, ZERO_TIMESTAMP, format_timestamp, parse_timestamp};
/// JSON value model.
pub use value::{Object, Value, ValueKind};
