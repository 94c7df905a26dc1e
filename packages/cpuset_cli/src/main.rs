#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Command-line tool for converting between cpuset strings and lists of processor indexes.
//!
//! ```text
//! $ cpuset normalize 3,0,1,2,7
//! 0-3,7
//! $ cpuset expand 0-3,7
//! 0,1,2,3,7
//! $ cpuset compact 9 0 1 10 2
//! 0-2,9-10
//! $ CPUS=4-5,1 cpuset normalize --from-env CPUS
//! 1,4-5
//! $ cpuset compact -- -2 -1 0
//! -2-0
//! ```
//!
//! Negative values passed to `compact` would be read as flags, so they must follow `--`.
//!
//! Diagnostics are written to stderr. Set `RUST_LOG=debug` for more detail.

use std::process::ExitCode;
use std::{env, io};

use argh::FromArgs;
use itertools::Itertools;
use thiserror::Error;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Convert between cpuset strings (e.g. "0-3,7") and lists of processor indexes.
#[derive(FromArgs, Debug)]
struct Args {
    #[argh(subcommand)]
    command: Command,
}

#[derive(FromArgs, Debug)]
#[argh(subcommand)]
enum Command {
    Normalize(NormalizeArgs),
    Expand(ExpandArgs),
    Compact(CompactArgs),
}

/// print the canonical form of a cpuset string
#[derive(FromArgs, Debug)]
#[argh(subcommand, name = "normalize")]
struct NormalizeArgs {
    #[argh(positional)]
    /// the cpuset string, unless --from-env is used
    cpuset: Option<String>,

    /// read the cpuset string from this environment variable
    #[argh(option)]
    from_env: Option<String>,
}

/// print every processor index in a cpuset string, without compacting ranges
#[derive(FromArgs, Debug)]
#[argh(subcommand, name = "expand")]
struct ExpandArgs {
    #[argh(positional)]
    /// the cpuset string, unless --from-env is used
    cpuset: Option<String>,

    /// read the cpuset string from this environment variable
    #[argh(option)]
    from_env: Option<String>,
}

/// print a cpuset string covering the given processor indexes (put negative values after --)
#[derive(FromArgs, Debug)]
#[argh(subcommand, name = "compact")]
struct CompactArgs {
    #[argh(positional)]
    /// processor indexes, in any order; negative values must follow --
    values: Vec<i64>,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("expected either a cpuset argument or --from-env, not both")]
    AmbiguousInput,

    #[error("expected a cpuset argument or --from-env")]
    MissingInput,

    #[error("environment variable '{0}' is not set or is not valid unicode")]
    MissingEnvironmentVariable(String),

    #[error(transparent)]
    Cpuset(#[from] cpuset::Error),
}

/// Picks the cpuset text from either the positional argument or the named environment variable.
fn resolve_input(
    cpuset: Option<String>,
    from_env: Option<&str>,
    lookup_env: impl Fn(&str) -> Option<String>,
) -> Result<String, CliError> {
    match (cpuset, from_env) {
        (Some(_), Some(_)) => Err(CliError::AmbiguousInput),
        (Some(cpuset), None) => Ok(cpuset),
        (None, Some(name)) => {
            lookup_env(name).ok_or_else(|| CliError::MissingEnvironmentVariable(name.to_string()))
        }
        (None, None) => Err(CliError::MissingInput),
    }
}

/// Executes the command, returning the text to print on success.
fn run(command: Command, lookup_env: impl Fn(&str) -> Option<String>) -> Result<String, CliError> {
    match command {
        Command::Normalize(args) => {
            let text = resolve_input(args.cpuset, args.from_env.as_deref(), lookup_env)?;
            debug!(input = %text, "normalizing cpuset");

            Ok(cpuset::unparse(cpuset::parse(&text)?))
        }
        Command::Expand(args) => {
            let text = resolve_input(args.cpuset, args.from_env.as_deref(), lookup_env)?;
            debug!(input = %text, "expanding cpuset");

            Ok(cpuset::parse(&text)?.iter().join(","))
        }
        Command::Compact(args) => {
            debug!(count = args.values.len(), "compacting values");

            Ok(cpuset::unparse(args.values))
        }
    }
}

// Binary entry point - process exit behavior is exercised manually, the logic lives in run().
#[cfg_attr(test, mutants::skip)]
#[cfg_attr(coverage_nightly, coverage(off))]
fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args: Args = argh::from_env();

    match run(args.command, |name| env::var(name).ok()) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::FAILURE
        }
    }
}
