//! Consistency checks run once when a bundle is bound.
//!
//! Checks collect every defect instead of stopping at the first so that a
//! broken bundle is diagnosed in one build.

use crate::bundle::{BuildMode, GuidField, IdentityBundle, TextRule};
use crate::error::{Inconsistency, TextDefect};
use crate::guid::Guid;
use crate::ports::{MIN_PORT, PORT_OFFSET};

/// Characters Windows rejects in a file or directory name.
const RESERVED_PATH_CHARS: &[char] = &['\\', '/', ':', '*', '?', '"', '<', '>', '|'];

/// Kernel object namespaces a name may be placed in.
const OBJECT_NAMESPACES: &[&str] = &["Global\\", "Local\\"];

/// Checks one bundle on its own.
pub(crate) fn check_bundle(bundle: &IdentityBundle) -> Vec<Inconsistency> {
	let mut problems = Vec::new();
	check_guids(bundle, &mut problems);
	check_ports(bundle, &mut problems);
	for (field, value, rule) in bundle.text_fields() {
		if let Some(defect) = text_defect(value, rule) {
			problems.push(Inconsistency::InvalidText { field, value, defect });
		}
	}
	problems
}

/// Checks the collision-avoidance contract between a bundle and its sibling.
pub(crate) fn check_pair(selected: &IdentityBundle, sibling: &IdentityBundle) -> Vec<Inconsistency> {
	let expected = selected.mode.sibling();
	if sibling.mode != expected {
		return vec![Inconsistency::ModeMismatch { expected, found: sibling.mode }];
	}
	let (canonical, fork) = match selected.mode {
		BuildMode::Canonical => (selected, sibling),
		BuildMode::Fork => (sibling, selected),
	};

	let mut problems = Vec::new();

	// CLSIDs, AppIDs and IIDs share HKCR, so any reuse collides, not only same-field reuse.
	let taken: Vec<Guid> = canonical.guid_fields().iter().filter_map(|(_, g)| g.value()).collect();
	for (field, ours) in fork.guid_fields() {
		if let Some(guid) = ours.value()
			&& taken.contains(&guid)
		{
			problems.push(Inconsistency::PairCollision { field, value: guid.to_string() });
		}
	}

	// Registry keys, object names and paths compare case-insensitively on Windows.
	for ((field, ours, _), (_, theirs, _)) in fork.text_fields().into_iter().zip(canonical.text_fields()) {
		if ours.eq_ignore_ascii_case(theirs) {
			problems.push(Inconsistency::PairCollision { field, value: ours.to_owned() });
		}
	}

	for ((kind, fork_port), (_, canonical_port)) in fork.ports.iter().zip(canonical.ports.iter()) {
		if canonical_port.checked_add(PORT_OFFSET) != Some(fork_port) {
			problems.push(Inconsistency::PortOffset {
				kind,
				canonical: canonical_port,
				fork: fork_port,
				offset: PORT_OFFSET,
			});
		}
		if canonical.ports.contains(fork_port) {
			problems.push(Inconsistency::PortCollision { kind, port: fork_port });
		}
	}

	problems
}

fn check_guids(bundle: &IdentityBundle, problems: &mut Vec<Inconsistency>) {
	let mut seen: Vec<(&'static str, Guid)> = Vec::with_capacity(8);
	for (field, encoded) in bundle.guid_fields() {
		match encoded {
			GuidField::Dual(dual) if !dual.is_consistent() => {
				problems.push(Inconsistency::GuidMismatch {
					field,
					literal: dual.literal(),
					derived: dual.guid(),
				});
			}
			GuidField::Text(literal) if Guid::parse(literal).is_err() => {
				problems.push(Inconsistency::MalformedGuid { field, literal });
			}
			_ => {}
		}

		let Some(guid) = encoded.value() else {
			continue;
		};
		if let Some(&(first, _)) = seen.iter().find(|(_, g)| *g == guid) {
			problems.push(Inconsistency::DuplicateGuid { first, second: field, guid });
		}
		seen.push((field, guid));
	}
}

fn check_ports(bundle: &IdentityBundle, problems: &mut Vec<Inconsistency>) {
	let ports: Vec<_> = bundle.ports.iter().collect();
	for (i, &(kind, port)) in ports.iter().enumerate() {
		if port < MIN_PORT {
			problems.push(Inconsistency::PortOutOfRange { kind, port, min: MIN_PORT });
		}
		if let Some(&(first, _)) = ports[..i].iter().find(|(_, p)| *p == port) {
			problems.push(Inconsistency::DuplicatePort { first, second: kind, port });
		}
	}
}

/// Returns the first rule `value` breaks, if any.
pub(crate) fn text_defect(value: &str, rule: TextRule) -> Option<TextDefect> {
	if value.is_empty() {
		return Some(TextDefect::Empty);
	}
	if let Some(c) = value.chars().find(|c| c.is_control()) {
		return Some(TextDefect::ControlCharacter(c));
	}

	match rule {
		TextRule::Label => None,
		TextRule::Token => value.chars().find(|c| matches!(c, '\\' | '/')).map(TextDefect::Separator),
		TextRule::RegistryPath => {
			if value.contains('/') {
				Some(TextDefect::Separator('/'))
			} else if value.split('\\').any(str::is_empty) {
				Some(TextDefect::EmptySegment)
			} else {
				None
			}
		}
		TextRule::KernelObject => {
			let name = OBJECT_NAMESPACES
				.iter()
				.find_map(|ns| value.strip_prefix(*ns))
				.unwrap_or(value);
			if name.is_empty() {
				Some(TextDefect::Empty)
			} else {
				name.chars().find(|c| matches!(c, '\\' | '/')).map(TextDefect::Separator)
			}
		}
		TextRule::DirectoryName => {
			if let Some(c) = value.chars().find(|c| RESERVED_PATH_CHARS.contains(c)) {
				Some(TextDefect::ReservedCharacter(c))
			} else if value.ends_with(['.', ' ']) {
				Some(TextDefect::TrailingDotOrSpace)
			} else {
				None
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use rstest::rstest;

	use super::*;

	#[rstest]
	#[case::label("WSLX (Hyper-V firewall)", TextRule::Label, None)]
	#[case::empty("", TextRule::Label, Some(TextDefect::Empty))]
	#[case::nul("WSL\0X", TextRule::Label, Some(TextDefect::ControlCharacter('\0')))]
	#[case::registry(r"Software\Microsoft\Windows\CurrentVersion\WslX", TextRule::RegistryPath, None)]
	#[case::registry_forward_slash("Software/WslX", TextRule::RegistryPath, Some(TextDefect::Separator('/')))]
	#[case::registry_trailing(r"Software\WslX\", TextRule::RegistryPath, Some(TextDefect::EmptySegment))]
	#[case::registry_leading(r"\Software\WslX", TextRule::RegistryPath, Some(TextDefect::EmptySegment))]
	#[case::registry_doubled(r"Software\\WslX", TextRule::RegistryPath, Some(TextDefect::EmptySegment))]
	#[case::mutex_global(r"Global\WslXInstallLog", TextRule::KernelObject, None)]
	#[case::mutex_bare("WslXInstallLog", TextRule::KernelObject, None)]
	#[case::mutex_nested(r"Global\Wsl\InstallLog", TextRule::KernelObject, Some(TextDefect::Separator('\\')))]
	#[case::mutex_namespace_only(r"Local\", TextRule::KernelObject, Some(TextDefect::Empty))]
	#[case::token("wslx_debugshell_", TextRule::Token, None)]
	#[case::token_slash("wslx/debug", TextRule::Token, Some(TextDefect::Separator('/')))]
	#[case::network_name("WSLX (Hyper-V firewall)", TextRule::Token, None)]
	#[case::network_name_traversal(r"WSLX\..\evil/name", TextRule::Token, Some(TextDefect::Separator('\\')))]
	#[case::dir("WSLX", TextRule::DirectoryName, None)]
	#[case::dir_colon("C:WSLX", TextRule::DirectoryName, Some(TextDefect::ReservedCharacter(':')))]
	#[case::dir_trailing_dot("WSLX.", TextRule::DirectoryName, Some(TextDefect::TrailingDotOrSpace))]
	fn text_rules(#[case] value: &str, #[case] rule: TextRule, #[case] expected: Option<TextDefect>) {
		assert_eq!(text_defect(value, rule), expected);
	}
}
