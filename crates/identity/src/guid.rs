//! 128-bit identifiers in Windows `GUID` layout.
//!
//! The binary value is the source of truth. The registry/IDL string form is
//! derived from it on demand as `{xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx}` in
//! lowercase hex.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};
use uuid::Uuid;

/// A GUID stored as its binary value.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Guid(Uuid);

impl Guid {
	pub const NIL: Self = Self(Uuid::nil());

	/// Builds a GUID from the `Data1`/`Data2`/`Data3`/`Data4` fields of a Windows `GUID`.
	pub const fn from_fields(data1: u32, data2: u16, data3: u16, data4: [u8; 8]) -> Self {
		Self(Uuid::from_fields(data1, data2, data3, &data4))
	}

	pub const fn from_u128(value: u128) -> Self {
		Self(Uuid::from_u128(value))
	}

	pub const fn as_u128(&self) -> u128 {
		self.0.as_u128()
	}

	/// Returns the `Data1`/`Data2`/`Data3`/`Data4` fields.
	pub fn fields(&self) -> (u32, u16, u16, [u8; 8]) {
		let (data1, data2, data3, data4) = self.0.as_fields();
		(data1, data2, data3, *data4)
	}

	/// Parses braced or bare hyphenated text in either case.
	pub fn parse(text: &str) -> Result<Self, uuid::Error> {
		Uuid::parse_str(text).map(Self)
	}

	/// Returns true when `literal` is the derived string form, ignoring ASCII case.
	pub fn matches_literal(&self, literal: &str) -> bool {
		self.to_string().eq_ignore_ascii_case(literal)
	}
}

impl fmt::Display for Guid {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Display::fmt(&self.0.braced(), f)
	}
}

impl fmt::Debug for Guid {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Guid({self})")
	}
}

impl FromStr for Guid {
	type Err = uuid::Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::parse(s)
	}
}

impl Serialize for Guid {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.collect_str(self)
	}
}

#[cfg(windows)]
impl From<Guid> for windows_sys::core::GUID {
	fn from(guid: Guid) -> Self {
		windows_sys::core::GUID::from_u128(guid.as_u128())
	}
}

/// A GUID together with the string literal handed to registry and IDL consumers.
///
/// The two encodings are written separately, so they can drift. Binding checks
/// [`DualGuid::is_consistent`] before anything reads the value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DualGuid {
	guid: Guid,
	literal: &'static str,
}

impl DualGuid {
	pub const fn new(guid: Guid, literal: &'static str) -> Self {
		Self { guid, literal }
	}

	pub const fn guid(&self) -> Guid {
		self.guid
	}

	pub const fn literal(&self) -> &'static str {
		self.literal
	}

	pub fn is_consistent(&self) -> bool {
		self.guid.matches_literal(self.literal)
	}
}

impl fmt::Display for DualGuid {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Display::fmt(&self.guid, f)
	}
}

impl Serialize for DualGuid {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		self.guid.serialize(serializer)
	}
}

#[cfg(test)]
mod tests {
	use proptest::prelude::*;

	use super::*;

	const SAMPLE: Guid = Guid::from_fields(0x21ad80bd, 0xb800, 0x4027, [0xb8, 0x4a, 0x1e, 0x0d, 0x07, 0x4a, 0xe5, 0x07]);

	#[test]
	fn display_uses_braced_lowercase_grouping() {
		assert_eq!(SAMPLE.to_string(), "{21ad80bd-b800-4027-b84a-1e0d074ae507}");
	}

	#[test]
	fn fields_follow_windows_layout() {
		assert_eq!(SAMPLE.fields(), (0x21ad80bd, 0xb800, 0x4027, [0xb8, 0x4a, 0x1e, 0x0d, 0x07, 0x4a, 0xe5, 0x07]));
		assert_eq!(SAMPLE.as_u128(), 0x21ad80bd_b800_4027_b84a_1e0d074ae507);
	}

	#[test]
	fn literal_match_ignores_case() {
		assert!(SAMPLE.matches_literal("{21AD80BD-B800-4027-B84A-1E0D074AE507}"));
		assert!(!SAMPLE.matches_literal("21ad80bd-b800-4027-b84a-1e0d074ae507"));
		assert!(!SAMPLE.matches_literal("{21ad80bd-b800-4027-b84a-1e0d074ae508}"));
	}

	#[test]
	fn parse_accepts_braced_and_bare() {
		assert_eq!(Guid::parse("{21AD80BD-B800-4027-B84A-1E0D074AE507}").unwrap(), SAMPLE);
		assert_eq!("21ad80bd-b800-4027-b84a-1e0d074ae507".parse::<Guid>().unwrap(), SAMPLE);
		assert!(Guid::parse("{21ad80bd-b800-4027}").is_err());
	}

	#[test]
	fn dual_guid_detects_drift() {
		assert!(DualGuid::new(SAMPLE, "{21ad80bd-b800-4027-b84a-1e0d074ae507}").is_consistent());
		assert!(!DualGuid::new(SAMPLE, "{4424eff5-6510-481d-b912-606d81c43c52}").is_consistent());
	}

	proptest! {
		#[test]
		fn derived_literal_always_matches(value in any::<u128>()) {
			let guid = Guid::from_u128(value);
			let upper = guid.to_string().to_ascii_uppercase();
			prop_assert!(DualGuid::new(guid, Box::leak(upper.into_boxed_str())).is_consistent());
			prop_assert_eq!(Guid::parse(&guid.to_string()).unwrap(), guid);
		}
	}
}
