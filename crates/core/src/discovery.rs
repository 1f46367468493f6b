use crate::error::{Result, RtscopeError};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// File name searched for when no database is given.
pub const DEFAULT_DB_NAME: &str = ".rtscope.db";
/// Environment variable naming the database file.
pub const DB_ENV_VAR: &str = "RTSCOPE_DB";

/// Nearest `DEFAULT_DB_NAME` in `start` or one of its ancestors.
pub fn find_db(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(DEFAULT_DB_NAME))
        .find(|candidate| candidate.is_file())
}

/// Pick the database file: an explicit path, then `env_value`, then the nearest
/// database above `cwd`.
pub fn locate_db(
    explicit: Option<PathBuf>,
    env_value: Option<OsString>,
    cwd: &Path,
) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path);
    }
    if let Some(value) = env_value.filter(|v| !v.is_empty()) {
        tracing::debug!("Using database from {}", DB_ENV_VAR);
        return Ok(PathBuf::from(value));
    }
    find_db(cwd).ok_or_else(|| {
        RtscopeError::Config(format!(
            "no database file: pass --db-file or create {} in {} or a parent directory",
            DEFAULT_DB_NAME,
            cwd.display()
        ))
    })
}
