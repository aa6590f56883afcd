//! Benchmark profiles for the churn append/remove workload.
//!
//! Provides the element counts shared by the Criterion benches and the
//! `cycle` example:
//!
//! - [`SMALL`]: 1K elements, stays hot in L1
//! - [`MEDIUM`]: 100K elements, several reallocations
//! - [`LARGE`]: 1M elements, matches a typical command-line run

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use churn_core::{drain, fill, ContainerKind, RunConfig, Sequence};

/// 1K elements.
pub const SMALL: u64 = 1_000;
/// 100K elements.
pub const MEDIUM: u64 = 100_000;
/// 1M elements.
pub const LARGE: u64 = 1_000_000;

/// Named profiles in ascending size.
pub const PROFILES: [(&str, u64); 3] = [("small", SMALL), ("medium", MEDIUM), ("large", LARGE)];

/// One run config per container kind for the given count.
pub fn configs_for(count: u64) -> Vec<RunConfig> {
    ContainerKind::ALL
        .into_iter()
        .map(|kind| RunConfig::new(count, kind))
        .collect()
}

/// One full fill/drain cycle on a fresh container of type `S`.
///
/// Returns the number of elements removed so callers can feed it to
/// `black_box`.
pub fn cycle<S: Sequence>(count: u64) -> u64 {
    let mut seq = S::default();
    fill(&mut seq, count);
    drain(&mut seq)
}
