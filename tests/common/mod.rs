//! Shared helpers for the binary tests.

use std::{
    fs,
    path::{Path, PathBuf},
};

use assert_cmd::Command;

/// Scratch directory that is removed when dropped.
#[derive(Debug)]
pub struct TempWorkspace {
    dir: tempfile::TempDir,
}

impl TempWorkspace {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn create_file(&self, rel: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, contents).unwrap();
        path
    }
}

/// The binary under test, run from inside `ws` so reported names stay relative.
pub fn bin(ws: &TempWorkspace) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_count_words"));
    cmd.current_dir(ws.path()).env_remove("RUST_LOG");
    cmd
}
