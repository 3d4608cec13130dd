//! Building blocks for the host diagnostics report.
//!
//! `probe` answers passive queries (host name, invoking user) and
//! `commands` wraps the external commands the report shells out to.
//! The binary in `main.rs` sequences them and owns the skip-on-failure
//! policy: a step that fails drops its line and nothing else.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Used by the binary target only
use tracing as _;
use tracing_subscriber as _;

pub mod commands;
pub mod probe;
