use crate::paths::STATE_DIR_ENV;
use std::path::PathBuf;

/// Where session records live.
///
/// Defaults to the OS temp dir. `ARMADA_STATE_DIR` overrides it, and because
/// child processes inherit the environment they resolve the same directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub state_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            state_dir: std::env::temp_dir(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var_os(key))
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<std::ffi::OsString>,
    {
        match lookup(STATE_DIR_ENV) {
            Some(dir) if !dir.is_empty() => Self::with_state_dir(dir),
            _ => Self::default(),
        }
    }

    pub fn with_state_dir(state_dir: impl Into<PathBuf>) -> Self {
        Self {
            state_dir: state_dir.into(),
        }
    }
}
