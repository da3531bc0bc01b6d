//! Bind-once identity registry.
//!
//! # Lifecycle
//!
//! `Unbound -> Validating -> Bound` or `Unbound -> Validating -> Failed`. Both
//! end states are terminal. The outcome is cached, so every later bind returns
//! the same resolved identity or the same error.

use std::sync::OnceLock;
use std::sync::atomic::{AtomicU8, Ordering};

use crate::bundle::{BuildMode, ComIdentity, IdentityBundle, NatNetwork, ServiceIdentity, ShellIntegration};
use crate::error::{IdentifierCategory, IdentityError, Result};
use crate::names::{NamedObject, NamedObjectKind, PIPE_NAMESPACE};
use crate::ports::PortKind;
use crate::validate;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BindState {
	Unbound,
	Validating,
	Bound,
	Failed,
}

impl BindState {
	const fn from_u8(raw: u8) -> Self {
		match raw {
			0 => Self::Unbound,
			1 => Self::Validating,
			2 => Self::Bound,
			_ => Self::Failed,
		}
	}
}

/// Owns one bundle and hands out a [`ResolvedIdentity`] once it validates.
pub struct IdentityRegistry {
	bundle: &'static IdentityBundle,
	sibling: Option<&'static IdentityBundle>,
	state: AtomicU8,
	resolved: OnceLock<Result<ResolvedIdentity>>,
}

impl IdentityRegistry {
	/// Registry over the bundle the build selected, checked against the other one.
	pub const fn for_build() -> Self {
		Self::with_sibling(IdentityBundle::for_build(), IdentityBundle::for_mode(BuildMode::CURRENT.sibling()))
	}

	#[cfg(test)]
	pub(crate) const fn new(bundle: &'static IdentityBundle) -> Self {
		Self {
			bundle,
			sibling: None,
			state: AtomicU8::new(BindState::Unbound as u8),
			resolved: OnceLock::new(),
		}
	}

	pub(crate) const fn with_sibling(bundle: &'static IdentityBundle, sibling: &'static IdentityBundle) -> Self {
		Self {
			bundle,
			sibling: Some(sibling),
			state: AtomicU8::new(BindState::Unbound as u8),
			resolved: OnceLock::new(),
		}
	}

	pub fn state(&self) -> BindState {
		BindState::from_u8(self.state.load(Ordering::Acquire))
	}

	/// Validates the bundle on first call and returns the cached outcome.
	///
	/// Concurrent first callers block until the one validation finishes.
	pub fn bind(&self) -> Result<&ResolvedIdentity> {
		self.resolved.get_or_init(|| self.resolve()).as_ref().map_err(Clone::clone)
	}

	/// Returns the resolved identity if a bind already succeeded.
	pub fn get(&self) -> Option<&ResolvedIdentity> {
		self.resolved.get().and_then(|r| r.as_ref().ok())
	}

	fn resolve(&self) -> Result<ResolvedIdentity> {
		let mode = self.bundle.mode;
		self.state.store(BindState::Validating as u8, Ordering::Release);
		tracing::debug!(%mode, "validating identity bundle");

		let mut problems = validate::check_bundle(self.bundle);
		if let Some(sibling) = self.sibling {
			problems.extend(validate::check_pair(self.bundle, sibling));
		}

		if problems.is_empty() {
			self.state.store(BindState::Bound as u8, Ordering::Release);
			tracing::debug!(%mode, service = self.bundle.service.name, "identity bound");
			Ok(ResolvedIdentity { bundle: self.bundle })
		} else {
			for problem in &problems {
				tracing::error!(%mode, %problem, "identity inconsistency");
			}
			self.state.store(BindState::Failed as u8, Ordering::Release);
			Err(IdentityError::ConfigurationInconsistency { mode, problems })
		}
	}
}

/// Read-only view over a validated bundle.
///
/// Only [`IdentityRegistry::bind`] constructs one, so holding a
/// `ResolvedIdentity` proves the bundle passed validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResolvedIdentity {
	bundle: &'static IdentityBundle,
}

impl ResolvedIdentity {
	pub fn mode(&self) -> BuildMode {
		self.bundle.mode
	}

	/// The whole bundle, for renderers that emit every field.
	pub fn bundle(&self) -> &'static IdentityBundle {
		self.bundle
	}

	pub fn service(&self) -> &'static ServiceIdentity {
		&self.bundle.service
	}

	pub fn com(&self) -> &'static ComIdentity {
		&self.bundle.com
	}

	/// Distribution registration key, relative to `HKEY_CURRENT_USER`.
	pub fn registry_root(&self) -> &'static str {
		self.bundle.registry_root
	}

	pub fn network(&self, firewall: bool) -> &'static NatNetwork {
		self.bundle.network.get(firewall)
	}

	/// Owner tag for HCS compute systems.
	pub fn vm_owner(&self) -> &'static str {
		self.bundle.vm_owner
	}

	pub fn port(&self, kind: PortKind) -> u16 {
		self.bundle.ports.get(kind)
	}

	pub fn port_by_name(&self, name: &str) -> Result<u16> {
		let kind = name.parse::<PortKind>().map_err(|_| IdentityError::UnknownIdentifierRequested {
			category: IdentifierCategory::Port,
			requested: name.to_owned(),
		})?;
		Ok(self.port(kind))
	}

	pub fn named_object(&self, kind: NamedObjectKind) -> NamedObject {
		self.bundle.named_objects.get(kind)
	}

	pub fn named_object_by_name(&self, name: &str) -> Result<NamedObject> {
		let kind = name.parse::<NamedObjectKind>().map_err(|_| IdentityError::UnknownIdentifierRequested {
			category: IdentifierCategory::NamedObject,
			requested: name.to_owned(),
		})?;
		Ok(self.named_object(kind))
	}

	/// Full pipe path of the debug shell for one session.
	pub fn debug_shell_pipe_path(&self, suffix: &str) -> String {
		let name = self.named_object(NamedObjectKind::DebugShellPipe).qualify(suffix);
		format!("{PIPE_NAMESPACE}{name}")
	}

	pub fn shell_integration(&self) -> &'static ShellIntegration {
		&self.bundle.shell
	}

	pub fn installer_upgrade_code(&self) -> &'static str {
		self.bundle.installer.upgrade_code
	}

	pub fn install_directory_name(&self) -> &'static str {
		self.bundle.installer.install_dir
	}
}
