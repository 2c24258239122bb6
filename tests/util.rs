// tests/util.rs
// Shared test helpers for integration tests

use std::io::Write;
use tempfile::NamedTempFile;

/// Writes `content` to a fresh temporary file and returns its handle.
/// The file is removed when the handle is dropped.
#[allow(dead_code)]
pub fn wordlist(content: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("failed to create temp wordlist");
    file.write_all(content).expect("failed to write temp wordlist");
    file.flush().expect("failed to flush temp wordlist");
    file
}

/// Builds a command for the hc-hex binary with a clean logging environment.
#[allow(dead_code)]
pub fn hc_hex() -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::cargo_bin("hc-hex").expect("hc-hex binary not built");
    cmd.env_remove("RUST_LOG").env_remove("HC_HEX_CONFIG");
    cmd
}
