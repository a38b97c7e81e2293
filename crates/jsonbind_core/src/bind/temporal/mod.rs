use std::fmt;
use std::ops::Deref;

use time::format_description::BorrowedFormatItem;
use time::macros::{datetime, format_description};
use time::{OffsetDateTime, PrimitiveDateTime, UtcOffset};

use crate::bind::{Bind, BindError, Result, Slot, TemporalSlot, Value};

/// Text layout shared by parsing and formatting, e.g. `2024-03-01T12:30:00Z`.
const LAYOUT: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]Z");

/// Timestamp an empty string or `null` binds to.
pub const ZERO_TIMESTAMP: PrimitiveDateTime = datetime!(0001-01-01 0:00);

/// Parse `YYYY-MM-DDTHH:MM:SSZ`. An empty string yields [`ZERO_TIMESTAMP`].
pub fn parse_timestamp(text: &str) -> Result<PrimitiveDateTime> {
	if text.is_empty() {
		return Ok(ZERO_TIMESTAMP);
	}
	PrimitiveDateTime::parse(text, LAYOUT).map_err(|source| BindError::TemporalParse {
		text: text.to_owned(),
		source,
	})
}

/// Render a timestamp in the layout [`parse_timestamp`] accepts.
pub fn format_timestamp(value: PrimitiveDateTime) -> String {
	value.format(LAYOUT).unwrap_or_else(|_| value.to_string())
}

impl TemporalSlot for PrimitiveDateTime {
	fn set_timestamp(&mut self, value: PrimitiveDateTime) {
		*self = value;
	}
}

impl Bind for PrimitiveDateTime {
	fn zero() -> Self {
		ZERO_TIMESTAMP
	}

	fn slot(&mut self) -> Slot<'_> {
		Slot::Temporal(self)
	}
}

// Text carries no offset; everything is read as UTC.
impl TemporalSlot for OffsetDateTime {
	fn set_timestamp(&mut self, value: PrimitiveDateTime) {
		*self = value.assume_utc();
	}
}

impl Bind for OffsetDateTime {
	fn zero() -> Self {
		ZERO_TIMESTAMP.assume_utc()
	}

	fn slot(&mut self) -> Slot<'_> {
		Slot::Temporal(self)
	}
}

/// UTC timestamp that defaults to [`ZERO_TIMESTAMP`].
///
/// `time`'s own types have no zero value, so records that derive
/// [`Default`] use this for timestamp fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(pub OffsetDateTime);

impl Timestamp {
	/// Whether this is the zero timestamp, i.e. nothing was bound.
	pub fn is_zero(&self) -> bool {
		self.0 == ZERO_TIMESTAMP.assume_utc()
	}

	fn wall_clock(&self) -> PrimitiveDateTime {
		let utc = self.0.to_offset(UtcOffset::UTC);
		PrimitiveDateTime::new(utc.date(), utc.time())
	}
}

impl Default for Timestamp {
	fn default() -> Self {
		Self(ZERO_TIMESTAMP.assume_utc())
	}
}

impl Deref for Timestamp {
	type Target = OffsetDateTime;

	fn deref(&self) -> &OffsetDateTime {
		&self.0
	}
}

impl From<OffsetDateTime> for Timestamp {
	fn from(value: OffsetDateTime) -> Self {
		Self(value)
	}
}

impl fmt::Display for Timestamp {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&format_timestamp(self.wall_clock()))
	}
}

impl From<Timestamp> for Value {
	fn from(value: Timestamp) -> Self {
		Value::String(value.to_string())
	}
}

impl TemporalSlot for Timestamp {
	fn set_timestamp(&mut self, value: PrimitiveDateTime) {
		self.0 = value.assume_utc();
	}
}

impl Bind for Timestamp {
	fn zero() -> Self {
		Self::default()
	}

	fn slot(&mut self) -> Slot<'_> {
		Slot::Temporal(self)
	}
}
