//! Core types for the churn append/remove benchmark.
//!
//! This is the leaf crate of the workspace. It owns everything the
//! benchmark measures and everything the driver needs to decide whether
//! to measure at all:
//!
//! - [`count`]: explicit parsing of the element-count argument
//! - [`sequence`]: the [`Sequence`] trait over standard growable containers
//! - [`workload`]: the fill and drain phases, plus a timed [`run`]
//! - [`config`]: validated run configuration
//! - [`error`]: error types for parsing and configuration

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod count;
pub mod error;
pub mod sequence;
pub mod workload;

pub use config::{RunConfig, MAX_COUNT};
pub use count::{parse_count, resolve_count, ParseMode};
pub use error::{ConfigError, CountError};
pub use sequence::{ContainerKind, InlineVec, Sequence, UnknownContainer};
pub use workload::{drain, fill, run, RunReport};
