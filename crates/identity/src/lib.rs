//! Identity namespace registry for side-by-side WSL installations.
//!
//! A WSLX build installs next to upstream WSL, so every identifier upstream owns
//! (COM classes, registry keys, HNS networks, hvsocket ports, kernel object
//! names, installer codes) needs a distinct fork-side value. This crate embeds
//! both identity sets, selects one with the `fork` cargo feature, validates it
//! once and exposes it read-only.
//!
//! The selection is whole-bundle. No API reads a field from the other set, and
//! binding checks the selected set against the other one so that a value copied
//! across by mistake fails the build instead of colliding at install time.
//!
//! ```no_run
//! use wslx_identity::PortKind;
//!
//! let identity = wslx_identity::identity();
//! let port = identity.port(PortKind::Init);
//! let key = identity.registry_root();
//! # let _ = (port, key);
//! ```

mod bundle;
mod bundles;
mod error;
mod guid;
mod names;
mod ports;
mod registry;
mod validate;

pub use bundle::{BuildMode, ComIdentity, IdentityBundle, InstallerIdentity, NatNetwork, NetworkIdentity, ServiceIdentity, ShellIntegration};
pub use error::{IdentifierCategory, IdentityError, Inconsistency, Result, TextDefect};
pub use guid::{DualGuid, Guid};
pub use names::{NamedObject, NamedObjectKind, NamedObjects, PIPE_NAMESPACE};
pub use ports::{MIN_PORT, PORT_OFFSET, PortKind, PortMap};
pub use registry::{BindState, IdentityRegistry, ResolvedIdentity};

static GLOBAL: IdentityRegistry = IdentityRegistry::for_build();

/// Process-wide registry over the identity set this build selected.
pub fn global() -> &'static IdentityRegistry {
	&GLOBAL
}

/// Binds the process-wide registry. Later calls return the cached outcome.
pub fn bind() -> Result<&'static ResolvedIdentity> {
	GLOBAL.bind()
}

/// Returns the bound identity, binding first if needed.
///
/// # Panics
///
/// Panics when the build carries an inconsistent identity set. Nothing may be
/// registered, created or opened with such a set, so startup stops here.
pub fn identity() -> &'static ResolvedIdentity {
	match bind() {
		Ok(identity) => identity,
		Err(e) => panic!("refusing to start with an inconsistent identity set: {e}"),
	}
}
