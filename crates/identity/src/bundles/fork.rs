//! WSLX identities. Every value here is fresh; none is shared with upstream.

use crate::bundle::{BuildMode, ComIdentity, IdentityBundle, InstallerIdentity, NatNetwork, NetworkIdentity, ServiceIdentity, ShellIntegration};
use crate::guid::{DualGuid, Guid};
use crate::names::NamedObjects;
use crate::ports::PortMap;

pub(crate) const FORK: IdentityBundle = IdentityBundle {
	mode: BuildMode::Fork,
	service: ServiceIdentity {
		name: "WSLXService",
		display_name: "WSLX Service",
		description: "Provides support for running WSLX Linux distributions",
	},
	com: ComIdentity {
		// WslXUserSession
		clsid_user_session: DualGuid::new(
			Guid::from_fields(0x21ad80bd, 0xb800, 0x4027, [0xb8, 0x4a, 0x1e, 0x0d, 0x07, 0x4a, 0xe5, 0x07]),
			"{21ad80bd-b800-4027-b84a-1e0d074ae507}",
		),
		appid: DualGuid::new(
			Guid::from_fields(0x4424eff5, 0x6510, 0x481d, [0xb9, 0x12, 0x60, 0x6d, 0x81, 0xc4, 0x3c, 0x52]),
			"{4424eff5-6510-481d-b912-606d81c43c52}",
		),
		iid_user_session: DualGuid::new(
			Guid::from_fields(0x8b283ac3, 0xd362, 0x46f2, [0xb6, 0x8f, 0x3b, 0xa6, 0xa1, 0x60, 0x7c, 0xc8]),
			"{8b283ac3-d362-46f2-b68f-3ba6a1607cc8}",
		),
		clsid_proxy_stub: DualGuid::new(
			Guid::from_fields(0x27a1899d, 0xd923, 0x4ddd, [0x91, 0xb7, 0x45, 0x4b, 0x90, 0x10, 0x9e, 0x50]),
			"{27a1899d-d923-4ddd-91b7-454b90109e50}",
		),
	},
	registry_root: r"Software\Microsoft\Windows\CurrentVersion\WslX",
	network: NetworkIdentity {
		legacy: NatNetwork {
			id: Guid::from_fields(0x9437b4d2, 0x808d, 0x4521, [0xb3, 0x49, 0xa0, 0x46, 0x7c, 0x5e, 0xb1, 0x90]),
			name: "WSLX",
		},
		firewall: NatNetwork {
			id: Guid::from_fields(0xbdc5e13c, 0xa7b3, 0x4794, [0x97, 0x8d, 0x42, 0x38, 0xa6, 0xa4, 0x11, 0x44]),
			name: "WSLX (Hyper-V firewall)",
		},
	},
	vm_owner: "WSLX",
	// Canonical ports + PORT_OFFSET.
	ports: PortMap {
		init: 51000,
		plan9: 51001,
		plan9_drvfs: 51002,
		plan9_drvfs_admin: 51003,
		virtiofs: 51004,
		crash_dump: 51005,
	},
	named_objects: NamedObjects {
		install_log_mutex: r"Global\WslXInstallLog",
		debug_shell_pipe_prefix: "wslx_debugshell_",
	},
	shell: ShellIntegration {
		folder_clsid: DualGuid::new(
			Guid::from_fields(0xb0a2dcf3, 0xa071, 0x44b6, [0xa4, 0xe8, 0x11, 0xd1, 0xdc, 0xc1, 0x73, 0x3c]),
			"{b0a2dcf3-a071-44b6-a4e8-11d1dcc1733c}",
		),
		display_name: "Linux (WSLX)",
	},
	installer: InstallerIdentity {
		upgrade_code: "{abb3b349-a099-4615-97ba-7f1b0729ea5c}",
		install_dir: "WSLX",
	},
};
