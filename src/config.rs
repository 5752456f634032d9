//! Support for library configuration options

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use once_cell::sync::Lazy;

/// Name of the file that stores every appointment, inside the data directory
pub const EVENTS_FILE_NAME: &str = "unified_events.json";

/// Name of the file that mirrors the todo list, inside the data directory
pub const TODOS_FILE_NAME: &str = "todos.json";

/// Environment variable that can be used to pick the initial value of [`DATA_DIR`]
pub const DATA_DIR_ENV_VAR: &str = "PLANNER_LARDER_DATA_DIR";

/// The application-private directory where both files live.
/// It defaults to `$PLANNER_LARDER_DATA_DIR`, or to the current directory.
/// Feel free to override it when initing this library.
pub static DATA_DIR: Lazy<Arc<Mutex<PathBuf>>> = Lazy::new(|| {
    let dir = std::env::var_os(DATA_DIR_ENV_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    Arc::new(Mutex::new(dir))
});

/// Returns the current value of [`DATA_DIR`]
pub fn data_dir() -> PathBuf {
    match DATA_DIR.lock() {
        Ok(dir) => dir.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    }
}

/// Override [`DATA_DIR`]
pub fn set_data_dir<P: Into<PathBuf>>(dir: P) {
    let dir = dir.into();
    match DATA_DIR.lock() {
        Ok(mut current) => *current = dir,
        Err(poisoned) => *poisoned.into_inner() = dir,
    }
}

/// Where the appointments of a given data directory are stored
pub fn events_file(data_dir: &std::path::Path) -> PathBuf {
    data_dir.join(EVENTS_FILE_NAME)
}

/// Where the todo mirror of a given data directory is stored
pub fn todos_file(data_dir: &std::path::Path) -> PathBuf {
    data_dir.join(TODOS_FILE_NAME)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_files_sit_side_by_side() {
        let dir = std::path::Path::new("/data/planner");
        assert_eq!(events_file(dir), PathBuf::from("/data/planner/unified_events.json"));
        assert_eq!(todos_file(dir), PathBuf::from("/data/planner/todos.json"));
    }
}
