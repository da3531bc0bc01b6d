//! WSLX identity tool.
//!
//! Binds the identity set compiled into this build and prints it for the
//! installer and build scripts, which cannot link the Rust crate directly.

use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;
use wslx_identity::{IdentityError, ResolvedIdentity};

const INCONSISTENT: &str = "identity set failed validation";

mod render;

#[derive(Parser, Debug)]
#[command(name = "wslx-ident")]
#[command(about = "Print the service identity set compiled into this build")]
struct Args {
	/// Verbose logging
	#[arg(short, long, global = true)]
	verbose: bool,

	#[command(subcommand)]
	command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
	/// Human-readable summary (default)
	Show,
	/// Whole bundle as JSON
	Json,
	/// WiX preprocessor defines
	Wix,
	/// One value by dotted key, e.g. `port.crash-dump`
	Get { key: String },
	/// Validate the identity set and list every problem found
	Check,
}

fn main() -> anyhow::Result<ExitCode> {
	let args = Args::parse();

	let subscriber = tracing_subscriber::fmt()
		.with_max_level(if args.verbose { tracing::Level::DEBUG } else { tracing::Level::INFO })
		.with_writer(std::io::stderr)
		.finish();
	tracing::subscriber::set_global_default(subscriber)?;

	let bound = wslx_identity::bind();
	if let Ok(id) = &bound {
		info!(mode = %id.mode(), "identity bound");
	}

	let out = match args.command.unwrap_or(Command::Show) {
		Command::Check => return Ok(check(bound)),
		Command::Show => render::summary(bound.context(INCONSISTENT)?),
		Command::Json => render::json(bound.context(INCONSISTENT)?)?,
		Command::Wix => render::wix(bound.context(INCONSISTENT)?),
		Command::Get { key } => render::lookup(bound.context(INCONSISTENT)?, &key)?,
	};
	print!("{out}");
	if !out.ends_with('\n') {
		println!();
	}
	Ok(ExitCode::SUCCESS)
}

fn check(bound: wslx_identity::Result<&ResolvedIdentity>) -> ExitCode {
	match bound {
		Ok(id) => {
			println!("ok: {} identity set is consistent", id.mode());
			ExitCode::SUCCESS
		}
		Err(IdentityError::ConfigurationInconsistency { mode, problems }) => {
			println!("{mode} identity set has {} problem(s):", problems.len());
			for problem in problems {
				println!("  {problem}");
			}
			ExitCode::FAILURE
		}
		Err(e) => {
			println!("{e}");
			ExitCode::FAILURE
		}
	}
}
