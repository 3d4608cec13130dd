//! Passive host queries.

use sysinfo::System;

/// The machine's configured host name, if the OS exposes one.
pub fn host_name() -> Option<String> {
    System::host_name()
}

/// The invoking user's name from the `USER` environment variable.
///
/// An empty value still counts as present; only an unset (or
/// non-unicode) variable suppresses the report line.
pub fn current_user() -> Option<String> {
    std::env::var("USER").ok()
}
