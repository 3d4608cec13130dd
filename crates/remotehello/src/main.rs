//! Remote-session hello payload.
//!
//! Minimal proof-of-life program meant to be copied to a host and run
//! there: greets, names the host it runs on, and stamps the current
//! local time.

use chrono::Local;

fn main() {
    // HOSTNAME may legitimately be unset; the line still prints, bare.
    let host = std::env::var("HOSTNAME").unwrap_or_default();

    println!("Hello from remote server!");
    println!("Running on: {host}");
    println!("Current time: {}", Local::now().to_rfc2822());
}
