//! Argument echo tool entry point.

use mytool::{Invocation, VERSION_LINE, classify, echo_lines};

fn main() {
    // Arguments are taken lossily so invalid UTF-8 never aborts the run.
    let args: Vec<String> = std::env::args_os()
        .skip(1)
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();

    match classify(args) {
        Invocation::Version => println!("{VERSION_LINE}"),
        Invocation::Echo(args) => {
            for line in echo_lines(&args) {
                println!("{line}");
            }
        }
    }
}
