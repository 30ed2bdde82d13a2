//! Platform-specific directory utilities.

use std::path::PathBuf;

/// Directory holding saved dragons.
///
/// `SAVE_DATA_DIR` wins; otherwise the platform data directory
/// (`~/.local/share/dragon-sim/dragons` on Linux), falling back to
/// `./save_data/dragons`.
pub fn save_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("SAVE_DATA_DIR") {
        return PathBuf::from(dir);
    }

    directories::ProjectDirs::from("", "", "dragon-sim")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("./save_data"))
        .join("dragons")
}
