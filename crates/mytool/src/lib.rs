//! Argument echo tool: invocation classification and line rendering.
//!
//! The binary's contract is deliberately raw: any argument text is
//! accepted and echoed verbatim, and the process exits 0 for every
//! input. That rules out a structured flag parser (auto-help, `--`
//! consumption, and parse errors would all change the contract), so
//! the raw argument list is the input. The pure pieces live here so
//! they can be tested without spawning a process.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

/// Version line printed for `--version` / `-v`.
pub const VERSION_LINE: &str = concat!("mytool version ", env!("CARGO_PKG_VERSION"));

/// How a given argument list should be handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// First argument was a recognized version flag.
    Version,
    /// Echo the arguments back.
    Echo(Vec<String>),
}

/// Classify an argument list (exclusive of the program name).
///
/// Only the first argument can select the version path; the same text
/// anywhere else is echoed like any other argument.
pub fn classify(args: Vec<String>) -> Invocation {
    match args.first().map(String::as_str) {
        Some("--version" | "-v") => Invocation::Version,
        _ => Invocation::Echo(args),
    }
}

/// Render the echo report: greeting, count line, one line per argument
/// with its 1-based position.
pub fn echo_lines(args: &[String]) -> Vec<String> {
    let mut lines = Vec::with_capacity(args.len() + 2);
    lines.push("Hello from mytool!".to_string());
    lines.push(format!("You passed {} arguments.", args.len()));
    for (index, arg) in args.iter().enumerate() {
        lines.push(format!("arg[{}]: {}", index + 1, arg));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_version_line_is_fixed() {
        assert_eq!(VERSION_LINE, "mytool version 1.0.0");
    }

    #[test]
    fn test_classify_version_flags() {
        assert_eq!(classify(args(&["--version"])), Invocation::Version);
        assert_eq!(classify(args(&["-v"])), Invocation::Version);
        // Trailing arguments do not matter once the flag is first.
        assert_eq!(classify(args(&["--version", "extra"])), Invocation::Version);
    }

    #[test]
    fn test_classify_rejects_near_misses() {
        assert_eq!(
            classify(args(&["-V"])),
            Invocation::Echo(args(&["-V"]))
        );
        assert_eq!(
            classify(args(&["--verbose"])),
            Invocation::Echo(args(&["--verbose"]))
        );
        // The flag in second position is just another argument.
        assert_eq!(
            classify(args(&["first", "--version"])),
            Invocation::Echo(args(&["first", "--version"]))
        );
    }

    #[test]
    fn test_classify_empty_is_echo() {
        assert_eq!(classify(vec![]), Invocation::Echo(vec![]));
    }

    #[test]
    fn test_echo_lines_zero_args() {
        assert_eq!(
            echo_lines(&[]),
            vec!["Hello from mytool!", "You passed 0 arguments."]
        );
    }

    #[test]
    fn test_echo_lines_indices_are_one_based() {
        let lines = echo_lines(&args(&["alpha", "--beta", ""]));
        assert_eq!(
            lines,
            vec![
                "Hello from mytool!",
                "You passed 3 arguments.",
                "arg[1]: alpha",
                "arg[2]: --beta",
                "arg[3]: ",
            ]
        );
    }
}
