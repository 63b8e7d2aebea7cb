use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tempfile::TempDir;

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Write `content` to `path`, creating parent directories.
pub fn write(path: &Path, content: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

/// Canonical `content` directory inside a temp site root.
pub fn content_root(temp: &TempDir) -> PathBuf {
    let root = temp.path().join("content");
    fs::create_dir_all(&root).unwrap();
    dunce::canonicalize(&root).unwrap()
}

/// Run `f` with `XDG_CONFIG_HOME` pointing into `temp` and extra env vars set.
///
/// Env mutation is process-wide, so every caller is serialized.
pub fn with_env<F: FnOnce()>(temp: &TempDir, vars: &[(&str, &str)], f: F) {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let xdg = temp.path().join("xdg");
    fs::create_dir_all(&xdg).unwrap();

    let previous_xdg = std::env::var("XDG_CONFIG_HOME").ok();
    std::env::set_var("XDG_CONFIG_HOME", &xdg);
    for (key, value) in vars {
        std::env::set_var(key, value);
    }

    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(f));

    for (key, _) in vars {
        std::env::remove_var(key);
    }
    match previous_xdg {
        Some(value) => std::env::set_var("XDG_CONFIG_HOME", value),
        None => std::env::remove_var("XDG_CONFIG_HOME"),
    }
    if let Err(panic) = result {
        std::panic::resume_unwind(panic);
    }
}
