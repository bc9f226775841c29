use crate::session::SessionScope;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Record location
// ---------------------------------------------------------------------------

pub const RECORD_PREFIX: &str = "armada_develop_env_";
pub const RECORD_EXTENSION: &str = "json";

/// Environment variable that overrides the directory holding session records.
pub const STATE_DIR_ENV: &str = "ARMADA_STATE_DIR";

pub fn record_file_name(scope: SessionScope) -> String {
    format!("{RECORD_PREFIX}{}.{RECORD_EXTENSION}", scope.id())
}

pub fn record_path(state_dir: &Path, scope: SessionScope) -> PathBuf {
    state_dir.join(record_file_name(scope))
}

/// Base name of a directory, used as the default microservice name.
pub fn dir_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
