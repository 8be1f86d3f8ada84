//! Shared test helpers.

#![allow(dead_code)]

use std::path::PathBuf;
use tempfile::TempDir;

/// Create a temp directory to hold a scratch hosts file.
pub fn temp_dir() -> TempDir {
    tempfile::Builder::new()
        .prefix("hostedit_test_")
        .tempdir()
        .expect("temp dir")
}

/// Write `content` to `<dir>/hosts` and return its path.
pub fn hosts_file(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("hosts");
    std::fs::write(&path, content).unwrap();
    path
}

pub const SAMPLE: &str = "\
# /etc/hosts
127.0.0.1 localhost
::1 localhost ip6-localhost ip6-loopback

192.168.1.10\tnas.lan # storage box
10.0.0.5 build.internal
";
