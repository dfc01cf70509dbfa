use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Write `contents` to `name` inside `dir` and return the path.
pub fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write temp file");
    path
}

/// A minimal config pointing the reference provider at `snapshot`.
pub fn config_with_snapshot(snapshot: &Path) -> String {
    format!(
        "[scan]\nthreshold = 5\n\n[reference]\nsnapshot = {:?}\n",
        snapshot.display().to_string()
    )
}
