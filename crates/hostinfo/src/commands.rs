//! External command invocations for the diagnostics report.
//!
//! The report shells out to the same fixed commands the surrounding
//! tooling has always used rather than querying kernel interfaces
//! directly. Children inherit stdio, so their output lands in the
//! report between our own lines.

use std::process::{Command, ExitStatus};

use anyhow::{Context, Result};

/// Shell pipeline printing the first lines of the memory pseudo-file.
const MEMINFO_PIPELINE: &str = "cat /proc/meminfo | head -n 3";

/// Run `uname -a`, letting the child write straight to stdout.
pub fn run_uname() -> Result<ExitStatus> {
    Command::new("uname")
        .arg("-a")
        .status()
        .context("failed to run uname")
}

/// Print the first three lines of `/proc/meminfo` via `sh -c`.
///
/// The pipeline needs a shell; `head` bounds the output to three lines.
pub fn run_meminfo_head() -> Result<ExitStatus> {
    Command::new("sh")
        .args(["-c", MEMINFO_PIPELINE])
        .status()
        .context("failed to run the meminfo pipeline")
}
