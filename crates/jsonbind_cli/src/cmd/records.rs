//! Provider response shapes the `bind` command can target.

use std::collections::BTreeMap;

use jsonbind::bind::Timestamp;
use jsonbind::record;
use serde::{Serialize, Serializer};

fn timestamp_text<S: Serializer>(value: &Timestamp, serializer: S) -> Result<S::Ok, S::Error> {
	if value.is_zero() {
		serializer.serialize_none()
	} else {
		serializer.collect_str(value)
	}
}

/// One key/value label.
#[derive(Debug, Default, Serialize)]
pub struct Tag {
	pub tag_key: String,
	pub tag_value: String,
}

record!(Tag { tag_key, tag_value });

/// Wrapper object providers put around tag lists.
#[derive(Debug, Default, Serialize)]
pub struct Tags {
	pub tag: Vec<Tag>,
}

record!(Tags { tag });

/// Security group rule.
#[derive(Debug, Default, Serialize)]
pub struct Permission {
	pub ip_protocol: String,
	pub port_range: String,
	pub source_cidr_ip: String,
	pub dest_cidr_ip: String,
	pub policy: String,
	pub priority: i32,
	pub direction: String,
}

record!(Permission {
	ip_protocol,
	port_range,
	source_cidr_ip,
	dest_cidr_ip,
	policy,
	priority,
	direction,
});

/// Security group as returned by a describe call.
#[derive(Debug, Default, Serialize)]
pub struct SecurityGroup {
	pub region_id: String,
	pub vpc_id: String,
	pub security_group_id: String,
	pub security_group_name: String,
	pub description: String,
	#[serde(serialize_with = "timestamp_text")]
	pub creation_time: Timestamp,
	pub permissions: Vec<Permission>,
	pub tags: Tags,
}

record!(SecurityGroup {
	region_id,
	vpc_id,
	security_group_id,
	security_group_name,
	description,
	creation_time,
	permissions,
	tags,
});

/// Block storage volume.
#[derive(Debug, Default, Serialize)]
pub struct Disk {
	pub disk_id: String,
	pub disk_name: String,
	/// Capacity in GiB.
	pub size: u64,
	pub category: String,
	pub status: String,
	pub portable: bool,
	pub delete_with_instance: bool,
	pub encrypted: bool,
	pub iops: u32,
	#[serde(serialize_with = "timestamp_text")]
	pub creation_time: Timestamp,
	pub tags: BTreeMap<String, String>,
}

record!(Disk {
	disk_id,
	disk_name,
	size,
	category,
	status,
	portable,
	delete_with_instance,
	encrypted,
	iops,
	creation_time,
	tags,
});
