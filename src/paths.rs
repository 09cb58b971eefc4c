//! Path resolution for taskpad data.
//!
//! Provides XDG-compliant path resolution for the database file.

use std::env;
use std::path::PathBuf;

/// Environment variable naming the database file.
pub const DB_PATH_ENV: &str = "TASKPAD_DB";

/// Get XDG-compliant data directory for taskpad.
///
/// # Returns
/// Path to data directory: `$XDG_DATA_HOME/taskpad/`, falling back to
/// `~/.local/share/taskpad/`, or `./taskpad/` when neither is set.
pub fn get_data_dir() -> PathBuf {
    let data_home = env::var("XDG_DATA_HOME")
        .map(PathBuf::from)
        .or_else(|_| env::var("HOME").map(|home| PathBuf::from(home).join(".local/share")))
        .unwrap_or_else(|_| PathBuf::from("."));

    data_home.join("taskpad")
}

/// Get database file path (data_dir/taskpad.db).
pub fn get_db_path() -> PathBuf {
    get_data_dir().join("taskpad.db")
}

/// Resolve the database path: explicit flag, then `TASKPAD_DB`, then the
/// data directory default.
pub fn resolve_db_path(flag: Option<PathBuf>) -> PathBuf {
    flag.or_else(|| env::var(DB_PATH_ENV).ok().map(PathBuf::from))
        .unwrap_or_else(get_db_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_get_data_dir_ends_with_taskpad() {
        let path = get_data_dir();
        assert!(path.ends_with("taskpad"));
    }

    #[test]
    fn test_get_db_path_ends_with_taskpad_db() {
        let path = get_db_path();
        assert!(path.ends_with("taskpad/taskpad.db"));
    }

    #[test]
    #[serial]
    fn test_resolve_db_path_precedence() {
        unsafe {
            env::set_var(DB_PATH_ENV, "/tmp/taskpad-env.db");
        }

        assert_eq!(
            resolve_db_path(Some(PathBuf::from("/tmp/taskpad-flag.db"))),
            PathBuf::from("/tmp/taskpad-flag.db"),
            "flag should override env var"
        );
        assert_eq!(resolve_db_path(None), PathBuf::from("/tmp/taskpad-env.db"));

        unsafe {
            env::remove_var(DB_PATH_ENV);
        }

        assert_eq!(resolve_db_path(None), get_db_path());
    }
}
