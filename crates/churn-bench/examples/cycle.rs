//! Times one fill/drain cycle per container at the medium profile.

use churn_bench::{configs_for, MEDIUM};
use churn_core::run;

fn main() {
    println!("=== churn: {MEDIUM} elements per container ===\n");

    for config in configs_for(MEDIUM) {
        let report = run(&config);
        println!(
            "{:<9} fill {:>12}  drain {:>12}  total {:>12}",
            report.container,
            format!("{:?}", report.fill_elapsed),
            format!("{:?}", report.drain_elapsed),
            format!("{:?}", report.total_elapsed())
        );
    }
}
