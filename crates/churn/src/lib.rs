//! Command-line driver for the churn append/remove benchmark.
//!
//! The binary is a thin shell around [`drive`], which takes the parsed
//! [`Cli`] and a writer standing in for stdout so that every path can
//! be exercised without spawning a process.

#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

use std::error::Error;
use std::fmt;
use std::io::{self, Write};

use churn_core::{
    resolve_count, run, ConfigError, ContainerKind, CountError, ParseMode, RunConfig, RunReport,
};
use clap::{ArgAction, Parser};
use tracing::debug;

/// Printed when there is nothing to measure.
pub const USAGE: &str = "Usage: array_append_remove <count>";

/// Printed in strict mode when the count argument is rejected.
pub const INVALID_NUMBER: &str = "Invalid number";

/* ---------------------------------------------------------------------- */
/* CLI flags                                                              */
/* ---------------------------------------------------------------------- */
#[derive(Parser, Debug)]
#[command(
    name = "array_append_remove",
    author,
    version,
    about = "Append N integers to a container, then pop them all",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Cli {
    /// Number of elements to append and then remove
    #[arg(value_name = "COUNT", allow_hyphen_values = true)]
    pub count: Option<String>,

    /// Trailing positionals are accepted and ignored
    #[arg(hide = true, allow_hyphen_values = true)]
    pub rest: Vec<String>,

    /// Container backing the run: vec, deque or smallvec
    #[arg(long, default_value_t = ContainerKind::Vec)]
    pub container: ContainerKind,

    /// Print "Invalid number" instead of usage for a malformed count
    #[arg(long, action = ArgAction::SetTrue)]
    pub strict: bool,

    /// Log filter for stderr (e.g. "info", "churn_core=debug")
    #[arg(long, default_value = "warn")]
    pub log: String,

    // Long forms only: `-h` and `-V` are counts like any other malformed one.
    /// Print help
    #[arg(long, action = ArgAction::Help)]
    help: Option<bool>,

    /// Print version
    #[arg(long, action = ArgAction::Version)]
    version: Option<bool>,
}

impl Cli {
    /// How a malformed count is treated.
    pub fn parse_mode(&self) -> ParseMode {
        if self.strict {
            ParseMode::Strict
        } else {
            ParseMode::Permissive
        }
    }
}

/// What a call to [`drive`] did.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The count was zero or absent; usage was printed.
    Usage,
    /// Strict mode rejected the count; the invalid-number message was printed.
    InvalidNumber(CountError),
    /// The workload ran.
    Completed(RunReport),
}

/// Failures that end the process with a non-zero status.
#[derive(Debug)]
pub enum DriverError {
    /// Writing to stdout failed.
    Io(io::Error),
    /// The resolved run configuration is unusable.
    Config(ConfigError),
}

impl fmt::Display for DriverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "stdout: {e}"),
            Self::Config(e) => write!(f, "config: {e}"),
        }
    }
}

impl Error for DriverError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Config(e) => Some(e),
        }
    }
}

impl From<io::Error> for DriverError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<ConfigError> for DriverError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

/// Resolve the count, then either print a message or run the workload.
///
/// Nothing is written to `out` when the workload runs.
pub fn drive<W: Write>(cli: &Cli, out: &mut W) -> Result<Outcome, DriverError> {
    if !cli.rest.is_empty() {
        debug!(ignored = ?cli.rest, "extra arguments ignored");
    }

    let count = match resolve_count(cli.count.as_deref(), cli.parse_mode()) {
        Ok(count) => count,
        Err(err) => {
            debug!(error = %err, "strict mode rejected count");
            writeln!(out, "{INVALID_NUMBER}")?;
            out.flush()?;
            return Ok(Outcome::InvalidNumber(err));
        }
    };

    let config = RunConfig::new(count, cli.container);
    if config.is_empty() {
        writeln!(out, "{USAGE}")?;
        out.flush()?;
        return Ok(Outcome::Usage);
    }
    config.validate()?;

    Ok(Outcome::Completed(run(&config)))
}

/// Install the stderr subscriber.
///
/// An unparsable filter falls back to `warn`. Installing twice is a
/// no-op.
pub fn init_tracing(filter: &str) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};
    let filter = match EnvFilter::try_new(filter) {
        Ok(f) => f,
        Err(_) => EnvFilter::new("warn"),
    };

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr))
        .try_init();
}
