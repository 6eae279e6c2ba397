//! FILENAME: app/src/main.rs
// PURPOSE: Command-line entry point.

use std::process::ExitCode;

fn main() -> ExitCode {
    app_lib::run()
}
