use anyhow::Context;
use std::path::{Path, PathBuf};

/// The directory the command was invoked from.
pub fn current_dir() -> anyhow::Result<PathBuf> {
    std::env::current_dir().context("failed to read current working directory")
}

/// Make `path` absolute against `cwd`. Absolute paths pass through untouched.
pub fn absolutize(path: PathBuf, cwd: &Path) -> PathBuf {
    if path.is_absolute() {
        path
    } else {
        cwd.join(path)
    }
}
