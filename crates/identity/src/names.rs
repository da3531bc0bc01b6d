//! Named kernel objects shared across processes and sessions.

use serde::Serialize;
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Prefix of every local named-pipe path.
pub const PIPE_NAMESPACE: &str = r"\\.\pipe\";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter, EnumString, IntoStaticStr, Serialize)]
pub enum NamedObjectKind {
	/// Machine-wide mutex serializing installer log writes.
	#[strum(serialize = "install-log-mutex")]
	#[serde(rename = "install-log-mutex")]
	InstallLogMutex,
	/// Per-session debug shell pipe; the caller appends the session suffix.
	#[strum(serialize = "debug-shell-pipe")]
	#[serde(rename = "debug-shell-pipe")]
	DebugShellPipe,
}

/// A kernel object name as handed to `CreateMutexW`/`CreateNamedPipeW` callers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NamedObject {
	/// Complete object name.
	Name(&'static str),
	/// Leading part of a name that is completed per session.
	Prefix(&'static str),
}

impl NamedObject {
	pub const fn as_str(&self) -> &'static str {
		match self {
			Self::Name(s) | Self::Prefix(s) => s,
		}
	}

	pub const fn is_prefix(&self) -> bool {
		matches!(self, Self::Prefix(_))
	}

	/// Completes a prefix with `suffix`. Complete names are returned as-is.
	pub fn qualify(&self, suffix: &str) -> String {
		match self {
			Self::Name(name) => (*name).to_owned(),
			Self::Prefix(prefix) => format!("{prefix}{suffix}"),
		}
	}
}

/// Object names owned by one bundle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct NamedObjects {
	pub(crate) install_log_mutex: &'static str,
	pub(crate) debug_shell_pipe_prefix: &'static str,
}

impl NamedObjects {
	pub const fn get(&self, kind: NamedObjectKind) -> NamedObject {
		match kind {
			NamedObjectKind::InstallLogMutex => NamedObject::Name(self.install_log_mutex),
			NamedObjectKind::DebugShellPipe => NamedObject::Prefix(self.debug_shell_pipe_prefix),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const SAMPLE: NamedObjects = NamedObjects {
		install_log_mutex: r"Global\WslXInstallLog",
		debug_shell_pipe_prefix: "wslx_debugshell_",
	};

	#[test]
	fn mutex_is_a_complete_name() {
		let obj = SAMPLE.get(NamedObjectKind::InstallLogMutex);
		assert!(!obj.is_prefix());
		assert_eq!(obj.qualify("ignored"), r"Global\WslXInstallLog");
	}

	#[test]
	fn pipe_prefix_takes_session_suffix() {
		let obj = SAMPLE.get(NamedObjectKind::DebugShellPipe);
		assert!(obj.is_prefix());
		assert_eq!(obj.qualify("Ubuntu"), "wslx_debugshell_Ubuntu");
	}

	#[test]
	fn kind_names_parse() {
		assert_eq!("install-log-mutex".parse::<NamedObjectKind>().unwrap(), NamedObjectKind::InstallLogMutex);
		assert_eq!("debug-shell-pipe".parse::<NamedObjectKind>().unwrap(), NamedObjectKind::DebugShellPipe);
		assert!("session-event".parse::<NamedObjectKind>().is_err());
	}
}
