//! Hypervisor-socket port assignments.

use serde::Serialize;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

/// Lowest port a bundle may use. Everything below is the well-known range.
pub const MIN_PORT: u16 = 1024;

/// Distance between a fork port and its canonical counterpart.
pub const PORT_OFFSET: u16 = 1000;

/// Named hvsocket endpoints owned by the service.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumIter, EnumString, IntoStaticStr, Serialize)]
pub enum PortKind {
	#[strum(serialize = "init")]
	#[serde(rename = "init")]
	Init,
	#[strum(serialize = "plan9")]
	#[serde(rename = "plan9")]
	Plan9,
	#[strum(serialize = "plan9-drvfs")]
	#[serde(rename = "plan9-drvfs")]
	Plan9Drvfs,
	#[strum(serialize = "plan9-drvfs-admin")]
	#[serde(rename = "plan9-drvfs-admin")]
	Plan9DrvfsAdmin,
	#[strum(serialize = "virtiofs")]
	#[serde(rename = "virtiofs")]
	Virtiofs,
	#[strum(serialize = "crash-dump")]
	#[serde(rename = "crash-dump")]
	CrashDump,
}

impl PortKind {
	pub fn as_str(self) -> &'static str {
		self.into()
	}
}

/// The six port numbers of one bundle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct PortMap {
	pub(crate) init: u16,
	pub(crate) plan9: u16,
	pub(crate) plan9_drvfs: u16,
	pub(crate) plan9_drvfs_admin: u16,
	pub(crate) virtiofs: u16,
	pub(crate) crash_dump: u16,
}

impl PortMap {
	pub const fn get(&self, kind: PortKind) -> u16 {
		match kind {
			PortKind::Init => self.init,
			PortKind::Plan9 => self.plan9,
			PortKind::Plan9Drvfs => self.plan9_drvfs,
			PortKind::Plan9DrvfsAdmin => self.plan9_drvfs_admin,
			PortKind::Virtiofs => self.virtiofs,
			PortKind::CrashDump => self.crash_dump,
		}
	}

	/// Iterates `(kind, port)` in declaration order.
	pub fn iter(&self) -> impl Iterator<Item = (PortKind, u16)> + '_ {
		PortKind::iter().map(move |kind| (kind, self.get(kind)))
	}

	pub fn contains(&self, port: u16) -> bool {
		self.iter().any(|(_, p)| p == port)
	}
}

#[cfg(test)]
mod tests {
	use rstest::rstest;

	use super::*;

	const SAMPLE: PortMap = PortMap {
		init: 51000,
		plan9: 51001,
		plan9_drvfs: 51002,
		plan9_drvfs_admin: 51003,
		virtiofs: 51004,
		crash_dump: 51005,
	};

	#[rstest]
	#[case("init", PortKind::Init)]
	#[case("plan9", PortKind::Plan9)]
	#[case("plan9-drvfs", PortKind::Plan9Drvfs)]
	#[case("plan9-drvfs-admin", PortKind::Plan9DrvfsAdmin)]
	#[case("virtiofs", PortKind::Virtiofs)]
	#[case("crash-dump", PortKind::CrashDump)]
	fn kind_names_round_trip(#[case] name: &str, #[case] kind: PortKind) {
		assert_eq!(name.parse::<PortKind>().unwrap(), kind);
		assert_eq!(kind.as_str(), name);
		assert_eq!(kind.to_string(), name);
	}

	#[test]
	fn unknown_kind_does_not_parse() {
		assert!("ssh".parse::<PortKind>().is_err());
		assert!("Init".parse::<PortKind>().is_err());
	}

	#[test]
	fn iter_visits_every_kind_in_order() {
		let ports: Vec<u16> = SAMPLE.iter().map(|(_, p)| p).collect();
		assert_eq!(ports, vec![51000, 51001, 51002, 51003, 51004, 51005]);
		assert!(SAMPLE.contains(51003));
		assert!(!SAMPLE.contains(50003));
	}
}
