//! Text renderings of a resolved identity for non-Rust consumers.

use std::fmt::Write;

use anyhow::{Result, bail};
use strum::IntoEnumIterator;
use wslx_identity::{NamedObjectKind, PortKind, ResolvedIdentity};

/// Human-readable summary.
pub fn summary(id: &ResolvedIdentity) -> String {
	let mut out = String::new();
	let service = id.service();
	let com = id.com();
	let shell = id.shell_integration();

	let _ = writeln!(out, "mode              {}", id.mode());
	let _ = writeln!(out, "service           {} ({})", service.name, service.display_name);
	let _ = writeln!(out, "registry root     HKCU\\{}", id.registry_root());
	let _ = writeln!(out, "vm owner          {}", id.vm_owner());
	let _ = writeln!(out);
	let _ = writeln!(out, "com clsid         {}", com.clsid_user_session);
	let _ = writeln!(out, "com appid         {}", com.appid);
	let _ = writeln!(out, "com iid           {}", com.iid_user_session);
	let _ = writeln!(out, "com proxy stub    {}", com.clsid_proxy_stub);
	let _ = writeln!(out);
	for firewall in [false, true] {
		let net = id.network(firewall);
		let _ = writeln!(out, "network           {} {:?}", net.id, net.name);
	}
	let _ = writeln!(out);
	for kind in PortKind::iter() {
		let _ = writeln!(out, "port {:<17} {}", kind.as_str(), id.port(kind));
	}
	let _ = writeln!(out);
	for kind in NamedObjectKind::iter() {
		let obj = id.named_object(kind);
		let marker = if obj.is_prefix() { "*" } else { "" };
		let _ = writeln!(out, "object {:<17} {}{marker}", kind.to_string(), obj.as_str());
	}
	let _ = writeln!(out);
	let _ = writeln!(out, "shell folder      {} {:?}", shell.folder_clsid, shell.display_name);
	let _ = writeln!(out, "upgrade code      {}", id.installer_upgrade_code());
	let _ = writeln!(out, "install dir       {}", id.install_directory_name());
	out
}

/// Pretty JSON of the whole bundle.
pub fn json(id: &ResolvedIdentity) -> Result<String> {
	Ok(serde_json::to_string_pretty(id.bundle())?)
}

/// WiX preprocessor defines consumed by the installer sources.
pub fn wix(id: &ResolvedIdentity) -> String {
	let service = id.service();
	let shell = id.shell_integration();
	let defines = [
		("IdentityMode", id.mode().to_string()),
		("UpgradeCode", id.installer_upgrade_code().to_owned()),
		("InstallDir", id.install_directory_name().to_owned()),
		("ServiceName", service.name.to_owned()),
		("ServiceDisplayName", service.display_name.to_owned()),
		("ServiceDescription", service.description.to_owned()),
		("UserSessionClsid", id.com().clsid_user_session.to_string()),
		("AppId", id.com().appid.to_string()),
		("ProxyStubClsid", id.com().clsid_proxy_stub.to_string()),
		("ShellFolderClsid", shell.folder_clsid.to_string()),
		("ShellFolderName", shell.display_name.to_owned()),
		("RegistryRoot", id.registry_root().to_owned()),
	];

	let mut out = String::new();
	for (name, value) in defines {
		let _ = writeln!(out, "<?define {name} = \"{}\" ?>", escape_attr(&value));
	}
	out
}

/// Looks up one value by dotted key, e.g. `port.crash-dump`.
pub fn lookup(id: &ResolvedIdentity, key: &str) -> Result<String> {
	if let Some(kind) = key.strip_prefix("port.") {
		return Ok(id.port_by_name(kind)?.to_string());
	}
	if let Some(kind) = key.strip_prefix("named-object.") {
		return Ok(id.named_object_by_name(kind)?.as_str().to_owned());
	}

	let com = id.com();
	let value = match key {
		"mode" => id.mode().to_string(),
		"service.name" => id.service().name.to_owned(),
		"service.display-name" => id.service().display_name.to_owned(),
		"service.description" => id.service().description.to_owned(),
		"com.clsid-user-session" => com.clsid_user_session.to_string(),
		"com.appid" => com.appid.to_string(),
		"com.iid-user-session" => com.iid_user_session.to_string(),
		"com.clsid-proxy-stub" => com.clsid_proxy_stub.to_string(),
		"registry-root" => id.registry_root().to_owned(),
		"network.legacy.id" => id.network(false).id.to_string(),
		"network.legacy.name" => id.network(false).name.to_owned(),
		"network.firewall.id" => id.network(true).id.to_string(),
		"network.firewall.name" => id.network(true).name.to_owned(),
		"vm-owner" => id.vm_owner().to_owned(),
		"shell.folder-clsid" => id.shell_integration().folder_clsid.to_string(),
		"shell.display-name" => id.shell_integration().display_name.to_owned(),
		"installer.upgrade-code" => id.installer_upgrade_code().to_owned(),
		"installer.install-dir" => id.install_directory_name().to_owned(),
		_ => bail!("unknown identity key {key:?}"),
	};
	Ok(value)
}

fn escape_attr(value: &str) -> String {
	value.replace('&', "&amp;").replace('"', "&quot;").replace('<', "&lt;").replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	fn id() -> &'static ResolvedIdentity {
		wslx_identity::identity()
	}

	#[test]
	fn lookup_covers_ports_and_objects() {
		let id = id();
		assert_eq!(lookup(id, "port.crash-dump").unwrap(), id.port(PortKind::CrashDump).to_string());
		assert_eq!(lookup(id, "named-object.debug-shell-pipe").unwrap(), id.named_object(NamedObjectKind::DebugShellPipe).as_str());
		assert_eq!(lookup(id, "registry-root").unwrap(), id.registry_root());
	}

	#[test]
	fn lookup_rejects_unknown_keys() {
		let id = id();
		let err = lookup(id, "port.ssh").unwrap_err();
		assert_eq!(err.to_string(), r#"unknown port kind "ssh""#);
		assert!(lookup(id, "com.typelib").is_err());
	}

	#[test]
	fn wix_defines_carry_the_upgrade_code() {
		let id = id();
		let out = wix(id);
		let expected = format!("<?define UpgradeCode = \"{}\" ?>", id.installer_upgrade_code());
		assert!(out.lines().any(|l| l == expected), "{out}");
		assert_eq!(out.lines().count(), 12);
	}

	#[test]
	fn attribute_escaping() {
		assert_eq!(escape_attr(r#"a "b" & <c>"#), "a &quot;b&quot; &amp; &lt;c&gt;");
	}

	#[test]
	fn json_has_kebab_case_groups() {
		let value: serde_json::Value = serde_json::from_str(&json(id()).unwrap()).unwrap();
		assert_eq!(value["mode"], id().mode().to_string());
		assert_eq!(value["ports"]["crash-dump"], id().port(PortKind::CrashDump));
		assert_eq!(value["com"]["clsid-user-session"], id().com().clsid_user_session.to_string());
	}
}
