//! Host diagnostics printer entry point.
//!
//! Prints a short plain-text report: banner, host name, invoking user,
//! kernel info (`uname -a`), and the head of `/proc/meminfo`. Each step
//! is independent; a step that fails skips its line, is recorded at
//! debug level on stderr, and never changes the exit code. The process
//! always exits 0.

use tracing::debug;
use tracing_subscriber::EnvFilter;

use hostinfo::{commands, probe};

fn init_tracing() {
    // Priority: RUST_LOG env var > default (warn). Diagnostics go to
    // stderr so the report on stdout stays clean.
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn main() {
    init_tracing();

    println!("=== Ubuntu Machine Info ===");

    match probe::host_name() {
        Some(name) => println!("Hostname: {name}"),
        None => debug!("host name unavailable"),
    }

    match probe::current_user() {
        Some(user) => println!("User: {user}"),
        None => debug!("USER is not set"),
    }

    match commands::run_uname() {
        Ok(status) if status.success() => println!("Full uname info above."),
        Ok(status) => debug!("uname exited with {}", status),
        Err(err) => debug!("uname invocation failed: {:#}", err),
    }

    match commands::run_meminfo_head() {
        Ok(status) if status.success() => println!("Memory info above."),
        Ok(status) => debug!("meminfo pipeline exited with {}", status),
        Err(err) => debug!("meminfo pipeline failed: {:#}", err),
    }
}
