//! Upstream WSL identities. A fork build must not reuse any of these.

use crate::bundle::{BuildMode, ComIdentity, IdentityBundle, InstallerIdentity, NatNetwork, NetworkIdentity, ServiceIdentity, ShellIntegration};
use crate::guid::{DualGuid, Guid};
use crate::names::NamedObjects;
use crate::ports::PortMap;

pub(crate) const CANONICAL: IdentityBundle = IdentityBundle {
	mode: BuildMode::Canonical,
	service: ServiceIdentity {
		name: "WSLService",
		display_name: "WSL Service",
		description: "Provides support for running WSL Linux distributions",
	},
	com: ComIdentity {
		// LxssUserSession
		clsid_user_session: DualGuid::new(
			Guid::from_fields(0xa9b7a1b9, 0x0671, 0x405c, [0x95, 0xf1, 0xe0, 0x61, 0x2c, 0xb4, 0xce, 0x7e]),
			"{a9b7a1b9-0671-405c-95f1-e0612cb4ce7e}",
		),
		appid: DualGuid::new(
			Guid::from_fields(0x370121d2, 0xaa7e, 0x4608, [0xa8, 0x6d, 0x0b, 0xba, 0xb9, 0xda, 0x1a, 0x60]),
			"{370121D2-AA7E-4608-A86D-0BBAB9DA1A60}",
		),
		// ILxssUserSession
		iid_user_session: DualGuid::new(
			Guid::from_fields(0x38541bdc, 0xf54f, 0x4ceb, [0x85, 0xd0, 0x37, 0xf0, 0xf3, 0xd2, 0x61, 0x7e]),
			"{38541BDC-F54F-4CEB-85D0-37F0F3D2617E}",
		),
		clsid_proxy_stub: DualGuid::new(
			Guid::from_fields(0x4ea0c6dd, 0xe9ff, 0x48e7, [0x99, 0x4e, 0x13, 0xa3, 0x1d, 0x10, 0xdc, 0x60]),
			"{4EA0C6DD-E9FF-48E7-994E-13A31D10DC60}",
		),
	},
	registry_root: r"Software\Microsoft\Windows\CurrentVersion\Lxss",
	network: NetworkIdentity {
		legacy: NatNetwork {
			id: Guid::from_fields(0xb95d0c5e, 0x57d4, 0x412b, [0xb5, 0x71, 0x18, 0xa8, 0x1a, 0x16, 0xe0, 0x05]),
			name: "WSL",
		},
		firewall: NatNetwork {
			id: Guid::from_fields(0x790e58b4, 0x7939, 0x4434, [0x93, 0x58, 0x89, 0xae, 0x7d, 0xdb, 0xe8, 0x7e]),
			name: "WSL (Hyper-V firewall)",
		},
	},
	vm_owner: "WSL",
	ports: PortMap {
		init: 50000,
		plan9: 50001,
		plan9_drvfs: 50002,
		plan9_drvfs_admin: 50003,
		virtiofs: 50004,
		crash_dump: 50005,
	},
	named_objects: NamedObjects {
		install_log_mutex: r"Global\WslInstallLog",
		debug_shell_pipe_prefix: "wsl_debugshell_",
	},
	shell: ShellIntegration {
		folder_clsid: DualGuid::new(
			Guid::from_fields(0xb2b4a4d1, 0x2754, 0x4140, [0xa2, 0xeb, 0x9a, 0x76, 0xd9, 0xd7, 0xcd, 0xc6]),
			"{B2B4A4D1-2754-4140-A2EB-9A76D9D7CDC6}",
		),
		display_name: "Linux",
	},
	installer: InstallerIdentity {
		upgrade_code: "{6D5B792B-1EDC-4DE9-8EAD-201B820F8E82}",
		install_dir: "WSL",
	},
};
