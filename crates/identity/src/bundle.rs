//! Identity bundle types.
//!
//! A bundle is the unit of substitution: the whole set is canonical or the whole
//! set is fork. Fields are crate-private so no caller can assemble a bundle from
//! parts of both.

use serde::Serialize;
use strum::Display;

use crate::guid::{DualGuid, Guid};
use crate::names::NamedObjects;
use crate::ports::PortMap;

/// Which identity set a build carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum BuildMode {
	/// Upstream WSL identities.
	Canonical,
	/// WSLX identities for side-by-side installs.
	Fork,
}

impl BuildMode {
	/// Mode selected by the `fork` cargo feature.
	pub const CURRENT: Self = if cfg!(feature = "fork") { Self::Fork } else { Self::Canonical };

	pub const fn sibling(self) -> Self {
		match self {
			Self::Canonical => Self::Fork,
			Self::Fork => Self::Canonical,
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ServiceIdentity {
	pub name: &'static str,
	pub display_name: &'static str,
	pub description: &'static str,
}

/// COM activation identifiers of the user-session server.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ComIdentity {
	pub clsid_user_session: DualGuid,
	pub appid: DualGuid,
	pub iid_user_session: DualGuid,
	pub clsid_proxy_stub: DualGuid,
}

/// One HNS NAT network.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct NatNetwork {
	pub id: Guid,
	pub name: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct NetworkIdentity {
	/// Network created without Hyper-V firewall.
	pub(crate) legacy: NatNetwork,
	/// Network created with Hyper-V firewall.
	pub(crate) firewall: NatNetwork,
}

impl NetworkIdentity {
	pub const fn get(&self, firewall: bool) -> &NatNetwork {
		if firewall { &self.firewall } else { &self.legacy }
	}
}

/// Explorer shell folder registration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ShellIntegration {
	pub folder_clsid: DualGuid,
	pub display_name: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct InstallerIdentity {
	/// MSI `UpgradeCode`. Only consumed as text by the WiX sources.
	pub(crate) upgrade_code: &'static str,
	pub(crate) install_dir: &'static str,
}

/// One complete identity set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct IdentityBundle {
	pub(crate) mode: BuildMode,
	pub(crate) service: ServiceIdentity,
	pub(crate) com: ComIdentity,
	pub(crate) registry_root: &'static str,
	pub(crate) network: NetworkIdentity,
	pub(crate) vm_owner: &'static str,
	pub(crate) ports: PortMap,
	pub(crate) named_objects: NamedObjects,
	pub(crate) shell: ShellIntegration,
	pub(crate) installer: InstallerIdentity,
}

/// How a GUID-valued field is encoded in a bundle.
#[derive(Clone, Copy, Debug)]
pub(crate) enum GuidField {
	Dual(DualGuid),
	Binary(Guid),
	Text(&'static str),
}

/// Rules a text field must satisfy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum TextRule {
	/// Free-form label.
	Label,
	/// Backslash-separated registry key path.
	RegistryPath,
	/// Kernel object name with optional `Global\` / `Local\` namespace.
	KernelObject,
	/// Single name with no separators (service and network names, pipe prefixes).
	Token,
	/// One filesystem path component.
	DirectoryName,
}

impl IdentityBundle {
	pub const fn mode(&self) -> BuildMode {
		self.mode
	}

	/// Bundle selected by the `fork` cargo feature.
	pub const fn for_build() -> &'static Self {
		Self::for_mode(BuildMode::CURRENT)
	}

	pub(crate) const fn for_mode(mode: BuildMode) -> &'static Self {
		match mode {
			BuildMode::Canonical => &crate::bundles::CANONICAL,
			BuildMode::Fork => &crate::bundles::FORK,
		}
	}

	/// Every GUID-valued field, keyed by its stable field name.
	pub(crate) fn guid_fields(&self) -> [(&'static str, GuidField); 8] {
		[
			("com.clsid-user-session", GuidField::Dual(self.com.clsid_user_session)),
			("com.appid", GuidField::Dual(self.com.appid)),
			("com.iid-user-session", GuidField::Dual(self.com.iid_user_session)),
			("com.clsid-proxy-stub", GuidField::Dual(self.com.clsid_proxy_stub)),
			("network.legacy.id", GuidField::Binary(self.network.legacy.id)),
			("network.firewall.id", GuidField::Binary(self.network.firewall.id)),
			("shell.folder-clsid", GuidField::Dual(self.shell.folder_clsid)),
			("installer.upgrade-code", GuidField::Text(self.installer.upgrade_code)),
		]
	}

	/// Every text field with the rule it is checked against.
	pub(crate) fn text_fields(&self) -> [(&'static str, &'static str, TextRule); 12] {
		[
			("service.name", self.service.name, TextRule::Token),
			("service.display-name", self.service.display_name, TextRule::Label),
			("service.description", self.service.description, TextRule::Label),
			("registry-root", self.registry_root, TextRule::RegistryPath),
			("network.legacy.name", self.network.legacy.name, TextRule::Token),
			("network.firewall.name", self.network.firewall.name, TextRule::Token),
			("vm-owner", self.vm_owner, TextRule::Token),
			("named-object.install-log-mutex", self.named_objects.install_log_mutex, TextRule::KernelObject),
			("named-object.debug-shell-pipe", self.named_objects.debug_shell_pipe_prefix, TextRule::Token),
			("shell.display-name", self.shell.display_name, TextRule::Label),
			("installer.upgrade-code", self.installer.upgrade_code, TextRule::Label),
			("installer.install-dir", self.installer.install_dir, TextRule::DirectoryName),
		]
	}
}

impl GuidField {
	/// Binary value of the field, if its encoding yields one.
	pub(crate) fn value(&self) -> Option<Guid> {
		match self {
			Self::Dual(dual) => Some(dual.guid()),
			Self::Binary(guid) => Some(*guid),
			Self::Text(text) => Guid::parse(text).ok(),
		}
	}
}
