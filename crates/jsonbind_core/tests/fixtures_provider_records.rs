#![allow(missing_docs)]

use std::collections::BTreeMap;
use std::thread;

use jsonbind::bind::{BindError, Timestamp, Value, bind, bind_at};
use jsonbind::record;
use jsonbind_testkit::load_json_fixture;

#[derive(Debug, Default, Clone, PartialEq)]
struct Tag {
	tag_key: String,
	tag_value: String,
}

record!(Tag { tag_key, tag_value });

#[derive(Debug, Default, Clone, PartialEq)]
struct Tags {
	tag: Vec<Tag>,
}

record!(Tags { tag });

#[derive(Debug, Default, Clone, PartialEq)]
struct Permission {
	ip_protocol: String,
	port_range: String,
	source_cidr_ip: String,
	priority: i32,
}

record!(Permission {
	ip_protocol,
	port_range,
	source_cidr_ip,
	priority,
});

#[derive(Debug, Default, Clone, PartialEq)]
struct SecurityGroup {
	region_id: String,
	security_group_id: String,
	security_group_name: String,
	description: String,
	vpc_id: String,
	creation_time: Timestamp,
	tags: Tags,
	permissions: Vec<Permission>,
}

record!(SecurityGroup {
	region_id,
	security_group_id,
	security_group_name,
	description,
	vpc_id,
	creation_time,
	tags,
	permissions,
});

#[derive(Debug, Default, Clone, PartialEq)]
struct Disk {
	disk_id: String,
	size: u64,
	portable: bool,
	encrypted: bool,
	iops: u32,
	tags: BTreeMap<String, String>,
}

record!(Disk {
	disk_id,
	size,
	portable,
	encrypted,
	iops,
	tags,
});

fn fixture(name: &str) -> Value {
	Value::from(load_json_fixture(name))
}

#[test]
fn security_groups_bind_from_provider_response() {
	let source = fixture("security_groups.json");
	let mut groups: Vec<SecurityGroup> = Vec::new();
	bind_at(&source, &["SecurityGroups", "SecurityGroup"], &mut groups).expect("groups bind");

	assert_eq!(groups.len(), 2);
	let web = &groups[0];
	assert_eq!(web.security_group_id, "sg-bp1fg655nh68xyz9i2ab");
	assert_eq!(web.security_group_name, "web");
	assert_eq!(web.vpc_id, "vpc-bp1opxu1zkhn00gzv26cb");
	assert_eq!(web.creation_time.to_string(), "2019-03-12T08:15:30Z");
	assert_eq!(web.tags.tag.len(), 2);
	assert_eq!(web.tags.tag[1], Tag { tag_key: "team".into(), tag_value: "edge".into() });
	assert_eq!(web.permissions[0].priority, 1);
	assert_eq!(web.permissions[1].priority, 100);
	assert_eq!(web.permissions[1].source_cidr_ip, "10.0.0.0/8");

	let bare = &groups[1];
	assert!(bare.description.is_empty());
	assert!(bare.creation_time.is_zero());
	assert!(bare.tags.tag.is_empty());
	assert!(bare.permissions.is_empty());
}

#[test]
fn refresh_overlays_only_present_fields() {
	let source = fixture("security_groups.json");
	let mut group = SecurityGroup {
		region_id: "cn-hangzhou".into(),
		..SecurityGroup::default()
	};
	bind_at(&source, &["SecurityGroups", "SecurityGroup", "0"], &mut group).expect("first refresh");
	assert_eq!(group.region_id, "cn-hangzhou");
	assert_eq!(group.permissions.len(), 2);

	let mut update = jsonbind::bind::Object::new();
	update.insert("SecurityGroupName", "web-renamed");
	bind(&Value::Object(update), &mut group).expect("second refresh");
	assert_eq!(group.security_group_name, "web-renamed");
	assert_eq!(group.security_group_id, "sg-bp1fg655nh68xyz9i2ab");
}

#[test]
fn disks_coerce_mixed_scalar_kinds() {
	let source = fixture("disks.json");
	let mut disks: Vec<Disk> = Vec::new();
	bind_at(&source, &["Disks", "Disk"], &mut disks).expect("disks bind");

	assert_eq!(disks.len(), 2);
	assert_eq!(disks[0].size, 40);
	assert!(!disks[0].portable);
	assert!(!disks[0].encrypted);
	assert_eq!(disks[0].iops, 2120);
	assert_eq!(disks[0].tags.get("cost-center").map(String::as_str), Some("42"));

	assert_eq!(disks[1].size, 500);
	assert!(disks[1].portable);
	assert!(disks[1].encrypted);
	assert!(disks[1].tags.is_empty());
}

#[test]
fn missing_path_reports_key() {
	let source = fixture("disks.json");
	let mut disks: Vec<Disk> = Vec::new();
	let err = bind_at(&source, &["Disks", "Volume"], &mut disks).expect_err("missing key");
	assert!(matches!(err, BindError::KeyNotFound { ref key } if key == "Volume"));
}

#[test]
fn concurrent_binds_share_field_tables() {
	let source = fixture("security_groups.json");
	let groups = source.get(&["SecurityGroups", "SecurityGroup"]).expect("groups").clone();

	let results: Vec<Vec<SecurityGroup>> = thread::scope(|scope| {
		let handles: Vec<_> = (0..8)
			.map(|_| {
				scope.spawn(|| {
					let mut out: Vec<SecurityGroup> = Vec::new();
					bind(&groups, &mut out).expect("thread bind");
					out
				})
			})
			.collect();
		handles.into_iter().map(|handle| handle.join().expect("thread joins")).collect()
	});

	for result in &results[1..] {
		assert_eq!(result, &results[0]);
	}
	assert_eq!(results[0].len(), 2);
}
