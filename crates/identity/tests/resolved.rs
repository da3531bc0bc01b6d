#![allow(unused_crate_dependencies)]
//! Behaviour of the process-wide registry for the identity set this build selected.

use wslx_identity::{BindState, BuildMode, IdentifierCategory, IdentityError, NamedObject, NamedObjectKind, PortKind};

#[test]
fn global_binds_once_and_stays_bound() {
	let first = wslx_identity::bind().expect("embedded identity set must validate");
	let second = wslx_identity::bind().unwrap();
	assert!(std::ptr::eq(first, second));
	assert!(std::ptr::eq(first.bundle(), wslx_identity::identity().bundle()));
	assert_eq!(wslx_identity::global().state(), BindState::Bound);
	assert_eq!(first.mode(), BuildMode::CURRENT);
}

#[test]
fn every_accessor_reads_the_selected_set() {
	let id = wslx_identity::identity();
	let fork = id.mode() == BuildMode::Fork;
	let tag = if fork { "WSLX" } else { "WSL" };

	assert_eq!(id.vm_owner(), tag);
	assert_eq!(id.install_directory_name(), tag);
	assert_eq!(id.network(false).name, tag);
	assert!(id.service().name.starts_with(tag));
	assert!(id.registry_root().ends_with(if fork { "WslX" } else { "Lxss" }));
	assert_eq!(id.port(PortKind::Init), if fork { 51000 } else { 50000 });
	assert_eq!(
		id.named_object(NamedObjectKind::InstallLogMutex),
		NamedObject::Name(if fork { r"Global\WslXInstallLog" } else { r"Global\WslInstallLog" })
	);
	assert_eq!(
		id.com().clsid_user_session.to_string(),
		if fork { "{21ad80bd-b800-4027-b84a-1e0d074ae507}" } else { "{a9b7a1b9-0671-405c-95f1-e0612cb4ce7e}" }
	);
}

#[cfg(feature = "fork")]
#[test]
fn fork_crash_dump_port() {
	assert_eq!(wslx_identity::identity().port(PortKind::CrashDump), 51005);
	assert_eq!(wslx_identity::identity().port_by_name("crash-dump").unwrap(), 51005);
}

#[cfg(not(feature = "fork"))]
#[test]
fn canonical_crash_dump_port() {
	assert_eq!(wslx_identity::identity().port(PortKind::CrashDump), 50005);
}

#[test]
fn unknown_port_kind_is_an_error() {
	let err = wslx_identity::identity().port_by_name("gns").unwrap_err();
	assert_eq!(
		err,
		IdentityError::UnknownIdentifierRequested {
			category: IdentifierCategory::Port,
			requested: "gns".to_owned(),
		}
	);
	assert_eq!(err.to_string(), r#"unknown port kind "gns""#);
}

#[test]
fn binds_from_many_threads_agree() {
	let bundles: Vec<usize> = std::thread::scope(|s| {
		let handles: Vec<_> = (0..4).map(|_| s.spawn(|| std::ptr::from_ref(wslx_identity::identity().bundle()) as usize)).collect();
		handles.into_iter().map(|h| h.join().unwrap()).collect()
	});
	assert!(bundles.windows(2).all(|w| w[0] == w[1]));
}
