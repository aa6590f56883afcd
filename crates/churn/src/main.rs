use std::io;
use std::process::ExitCode;

use churn::{drive, init_tracing, Cli};
use clap::Parser;
use tracing::debug;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli.log);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match drive(&cli, &mut out) {
        Ok(outcome) => {
            debug!(?outcome, "done");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("array_append_remove: {e}");
            ExitCode::FAILURE
        }
    }
}
