//! Common test utilities shared across integration tests.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::NamedTempFile;

/// Run the namedays binary with colors disabled.
pub fn run_namedays(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_namedays"))
        .args(args)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute namedays binary")
}

/// Run the namedays binary against a specific calendar file.
pub fn run_namedays_with_data(data: &Path, args: &[&str]) -> Output {
    let data = data.to_str().expect("temp path is UTF-8");
    let mut full = vec!["--data", data];
    full.extend_from_slice(args);
    run_namedays(&full)
}

/// Write a calendar file to a temporary location.
pub fn calendar_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

/// Standard output as a string.
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Standard error as a string.
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
