//! Evaluate privacy-risk metrics over a directory of tabular datasets.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use std::io::{self, Write};
use std::process::ExitCode;
use tabrisk_lib::{Host, run};

/// Host backed by the real process streams.
#[derive(Debug, Clone, Copy, Default)]
struct ProcessHost;

#[cfg_attr(coverage_nightly, coverage(off))]
impl Host for ProcessHost {
    fn output(&mut self) -> impl Write {
        io::stdout().lock()
    }

    fn error(&mut self) -> impl Write {
        io::stderr().lock()
    }

    fn exit(&mut self, code: i32) {
        std::process::exit(code);
    }
}

#[tokio::main]
#[cfg_attr(coverage_nightly, coverage(off))]
async fn main() -> ExitCode {
    match run(&mut ProcessHost, std::env::args()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let _ = writeln!(io::stderr(), "error: {e}");
            ExitCode::FAILURE
        }
    }
}
