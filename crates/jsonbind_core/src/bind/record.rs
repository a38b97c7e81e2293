/// Implements [`Record`](crate::bind::Record) and [`Bind`](crate::bind::Bind)
/// for a struct with named fields.
///
/// List the fields that should receive object keys. A field's declared name
/// is its identifier unless renamed with `as "Name"`; lookups also accept
/// the camel-split form of either side, so `SecurityGroupId` reaches
/// `security_group_id`. The struct must implement [`Default`], which is
/// what `null` resets it to.
///
/// ```
/// use jsonbind::bind::{Value, bind};
/// use jsonbind::record;
///
/// #[derive(Debug, Default)]
/// struct Tag {
/// 	key: String,
/// 	value: String,
/// }
///
/// record!(Tag { key as "TagKey", value as "TagValue" });
///
/// let source: Value = serde_json::json!({ "TagKey": "env", "tag_value": "prod" }).into();
/// let mut tag = Tag::default();
/// bind(&source, &mut tag).unwrap();
/// assert_eq!(tag.key, "env");
/// assert_eq!(tag.value, "prod");
/// ```
#[macro_export]
macro_rules! record {
	($ty:ty { $($field:ident $(as $name:literal)?),* $(,)? }) => {
		impl $crate::bind::Record for $ty {
			const FIELDS: &'static [&'static str] = &[$($crate::record!(@name $field $($name)?)),*];

			#[allow(unused_assignments, unused_mut, unused_variables)]
			fn field(&mut self, index: usize) -> ::core::option::Option<$crate::bind::Slot<'_>> {
				let mut position = 0_usize;
				$(
					if index == position {
						return ::core::option::Option::Some($crate::bind::Bind::slot(&mut self.$field));
					}
					position += 1;
				)*
				::core::option::Option::None
			}
		}

		impl $crate::bind::Bind for $ty {
			fn zero() -> Self {
				<$ty as ::core::default::Default>::default()
			}

			fn slot(&mut self) -> $crate::bind::Slot<'_> {
				$crate::bind::Slot::Record(self)
			}
		}
	};
	(@name $field:ident $name:literal) => {
		$name
	};
	(@name $field:ident) => {
		stringify!($field)
	};
}
