//! Error types for binding and querying the identity registry.

use thiserror::Error;

use crate::bundle::BuildMode;
use crate::guid::Guid;
use crate::ports::PortKind;

/// Something the registry can be asked for by name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
pub enum IdentifierCategory {
	#[strum(serialize = "port")]
	Port,
	#[strum(serialize = "named object")]
	NamedObject,
}

/// Why a text field was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum TextDefect {
	#[error("empty")]
	Empty,
	#[error("contains control character {0:?}")]
	ControlCharacter(char),
	#[error("contains separator {0:?}")]
	Separator(char),
	#[error("contains an empty path segment")]
	EmptySegment,
	#[error("contains reserved character {0:?}")]
	ReservedCharacter(char),
	#[error("ends with a dot or space")]
	TrailingDotOrSpace,
}

/// One defect found while validating a bundle.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Inconsistency {
	/// String literal encodes a different value than the binary GUID.
	#[error("{field}: literal {literal} does not encode {derived}")]
	GuidMismatch { field: &'static str, literal: &'static str, derived: Guid },
	/// String-only GUID does not parse.
	#[error("{field}: {literal:?} is not a GUID")]
	MalformedGuid { field: &'static str, literal: &'static str },
	/// Two fields of one bundle carry the same GUID.
	#[error("{first} and {second} share {guid}")]
	DuplicateGuid { first: &'static str, second: &'static str, guid: Guid },
	#[error("port {kind} = {port} is below {min}")]
	PortOutOfRange { kind: PortKind, port: u16, min: u16 },
	#[error("ports {first} and {second} share {port}")]
	DuplicatePort { first: PortKind, second: PortKind, port: u16 },
	#[error("{field}: {defect} ({value:?})")]
	InvalidText { field: &'static str, value: &'static str, defect: TextDefect },
	/// Fork and canonical bundles share an identifier.
	#[error("{field} is identical in both bundles ({value})")]
	PairCollision { field: &'static str, value: String },
	#[error("port {kind}: fork {fork} is not canonical {canonical} + {offset}")]
	PortOffset { kind: PortKind, canonical: u16, fork: u16, offset: u16 },
	/// A fork port lands on a port the canonical service listens on.
	#[error("port {kind} = {port} is also a canonical port")]
	PortCollision { kind: PortKind, port: u16 },
	#[error("sibling bundle is {found}, expected {expected}")]
	ModeMismatch { expected: BuildMode, found: BuildMode },
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum IdentityError {
	/// The selected bundle failed validation. Fatal: nothing may be registered
	/// or opened with it.
	#[error("{mode} identity bundle failed validation with {} problem(s): {}", .problems.len(), first_problem(.problems))]
	ConfigurationInconsistency { mode: BuildMode, problems: Vec<Inconsistency> },
	/// Accessor was asked for a kind outside the enumerated set.
	#[error("unknown {category} kind {requested:?}")]
	UnknownIdentifierRequested { category: IdentifierCategory, requested: String },
}

fn first_problem(problems: &[Inconsistency]) -> String {
	problems.first().map(ToString::to_string).unwrap_or_default()
}

pub type Result<T> = std::result::Result<T, IdentityError>;
