//! The fill and drain phases.
//!
//! [`fill`] and [`drain`] are the measured loops. [`run`] wraps them
//! with wall-clock timing and logging for the command-line driver.

use std::collections::VecDeque;
use std::hint::black_box;
use std::time::{Duration, Instant};

use tracing::{debug, info, info_span};

use crate::config::RunConfig;
use crate::sequence::{ContainerKind, InlineVec, Sequence};

/// Append `0..n` to the end of `seq`, in increasing order.
pub fn fill<S: Sequence>(seq: &mut S, n: u64) {
    for i in 0..n {
        seq.push(i);
    }
}

/// Remove the last element of `seq` until it is empty.
///
/// Returns the number of elements removed.
pub fn drain<S: Sequence>(seq: &mut S) -> u64 {
    let mut removed = 0u64;
    while !seq.is_empty() {
        black_box(seq.pop());
        removed += 1;
    }
    removed
}

/// Outcome of one [`run`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunReport {
    /// The requested count.
    pub count: u64,
    /// The container that was measured.
    pub container: ContainerKind,
    /// Length of the container after the fill phase.
    pub appended: u64,
    /// Number of elements removed by the drain phase.
    pub removed: u64,
    /// Wall-clock time of the fill phase.
    pub fill_elapsed: Duration,
    /// Wall-clock time of the drain phase.
    pub drain_elapsed: Duration,
}

impl RunReport {
    /// Combined time of both phases.
    pub fn total_elapsed(&self) -> Duration {
        self.fill_elapsed + self.drain_elapsed
    }
}

/// Fill then drain the container selected by `config`.
///
/// The container is created empty, lives only for the duration of this
/// call, and is dropped empty.
pub fn run(config: &RunConfig) -> RunReport {
    let span = info_span!("workload", count = config.count, container = %config.container);
    let _enter = span.enter();

    let report = match config.container {
        ContainerKind::Vec => run_with::<Vec<u64>>(config.count),
        ContainerKind::Deque => run_with::<VecDeque<u64>>(config.count),
        ContainerKind::SmallVec => run_with::<InlineVec>(config.count),
    };

    info!(
        appended = report.appended,
        removed = report.removed,
        fill = ?report.fill_elapsed,
        drain = ?report.drain_elapsed,
        "workload complete"
    );
    report
}

fn run_with<S: Sequence>(count: u64) -> RunReport {
    let mut seq = S::default();

    let start = Instant::now();
    fill(&mut seq, count);
    let fill_elapsed = start.elapsed();
    let appended = seq.len() as u64;
    debug!(appended, "fill phase done");

    let start = Instant::now();
    let removed = drain(&mut seq);
    let drain_elapsed = start.elapsed();
    debug!(removed, "drain phase done");

    RunReport {
        count,
        container: S::KIND,
        appended,
        removed,
        fill_elapsed,
        drain_elapsed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn filled_in_order<S: Sequence>(n: u64) -> bool {
        let mut seq = S::default();
        fill(&mut seq, n);
        seq.len() as u64 == n && (0..n).all(|i| seq.get(i as usize) == Some(i))
    }

    fn drained_empty<S: Sequence>(n: u64) -> bool {
        let mut seq = S::default();
        fill(&mut seq, n);
        drain(&mut seq) == n && seq.is_empty()
    }

    #[test]
    fn single_element_round() {
        let mut seq: Vec<u64> = Vec::new();
        fill(&mut seq, 1);
        assert_eq!(seq, vec![0]);
        assert_eq!(drain(&mut seq), 1);
        assert!(seq.is_empty());
    }

    #[test]
    fn zero_count_touches_nothing() {
        let mut seq: Vec<u64> = Vec::new();
        fill(&mut seq, 0);
        assert_eq!(drain(&mut seq), 0);
        assert_eq!(seq.capacity(), 0);
    }

    #[test]
    fn drain_pops_from_the_back() {
        let mut seq: VecDeque<u64> = VecDeque::new();
        fill(&mut seq, 3);
        assert_eq!(Sequence::pop(&mut seq), Some(2));
        assert_eq!(seq.front(), Some(&0));
    }

    #[test]
    fn run_reports_every_container() {
        for kind in ContainerKind::ALL {
            let report = run(&RunConfig::new(5, kind));
            assert_eq!(report.container, kind);
            assert_eq!(report.count, 5);
            assert_eq!(report.appended, 5);
            assert_eq!(report.removed, 5);
            assert_eq!(
                report.total_elapsed(),
                report.fill_elapsed + report.drain_elapsed
            );
        }
    }

    #[test]
    fn run_past_inline_capacity() {
        let report = run(&RunConfig::new(1_000, ContainerKind::SmallVec));
        assert_eq!(report.appended, 1_000);
        assert_eq!(report.removed, 1_000);
    }

    proptest! {
        #[test]
        fn fill_appends_in_order(n in 1u64..2_000) {
            prop_assert!(filled_in_order::<Vec<u64>>(n));
            prop_assert!(filled_in_order::<VecDeque<u64>>(n));
            prop_assert!(filled_in_order::<InlineVec>(n));
        }

        #[test]
        fn drain_empties(n in 1u64..2_000) {
            prop_assert!(drained_empty::<Vec<u64>>(n));
            prop_assert!(drained_empty::<VecDeque<u64>>(n));
            prop_assert!(drained_empty::<InlineVec>(n));
        }
    }
}
