//! Path utilities for the Zellij sandbox environment.
//!
//! Zellij mounts the host filesystem under `/host`; plugin-owned files such
//! as trace output live below that prefix.

use std::path::PathBuf;

/// Returns the data directory for plugin-owned files.
///
/// The directory is located at `/host/.local/share/zellij/zienda` in the
/// Zellij sandbox. `/host` points to the cwd of the last focused terminal,
/// or the folder where Zellij was started if that's not available, so this
/// typically resolves to `~/.local/share/zellij/zienda`. Trace output is
/// written inside this directory.
///
/// # Examples
///
/// ```
/// use zienda::infrastructure::get_data_dir;
///
/// let data_dir = get_data_dir();
/// assert_eq!(data_dir.to_str().unwrap(), "/host/.local/share/zellij/zienda");
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("zienda")
}
