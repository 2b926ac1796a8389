//! Rotating file writer with size-based rotation and backup retention.
//!
//! Trace output grows without bound if left alone. The writer rotates the
//! file once it crosses a size threshold and keeps a fixed number of
//! timestamped backups, so disk usage stays capped.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;

/// Maximum file size before rotation (10 MB).
const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Number of backup files to retain after rotation.
const MAX_BACKUP_FILES: usize = 3;

/// Thread-safe file writer with size-based rotation.
///
/// Before each write the current file size is checked; past
/// `MAX_FILE_SIZE_BYTES` the file is renamed to `<name>.json.<timestamp>`,
/// a fresh file is started, and backups beyond `MAX_BACKUP_FILES` are
/// deleted. A `Mutex` guards the handle so concurrent writers interleave
/// whole lines.
pub struct FileWriter {
    file_path: PathBuf,
    /// Opened lazily on first write.
    writer: Mutex<Option<std::fs::File>>,
}

impl FileWriter {
    /// Creates a writer for the given path. The file itself is not touched
    /// until the first [`write_line`](Self::write_line).
    pub const fn new(file_path: PathBuf) -> Self {
        Self {
            file_path,
            writer: Mutex::new(None),
        }
    }

    /// Appends one line to the file, rotating first if it has grown past
    /// the size threshold.
    ///
    /// The line is flushed immediately; the plugin host may tear the WASM
    /// instance down at any time.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened, written, or rotated,
    /// or if the internal lock is poisoned.
    pub fn write_line(&self, json: &str) -> std::io::Result<()> {
        let mut writer = self.writer.lock().map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::Other, format!("Mutex poisoned: {e}"))
        })?;

        self.check_and_rotate(&mut writer)?;

        if writer.is_none() {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.file_path)?;
            *writer = Some(file);
        }

        let file = writer.as_mut().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::Other, "No file available")
        })?;

        writeln!(file, "{json}")?;
        file.flush()?;
        drop(writer);

        Ok(())
    }

    /// Drops the handle and rotates when the file has outgrown the limit.
    fn check_and_rotate(&self, writer: &mut Option<std::fs::File>) -> std::io::Result<()> {
        if let Ok(metadata) = fs::metadata(&self.file_path) {
            if metadata.len() > MAX_FILE_SIZE_BYTES {
                *writer = None;
                self.rotate_files()?;
            }
        }
        Ok(())
    }

    /// Renames the current file to `<name>.json.<unix_timestamp>` and prunes
    /// old backups.
    fn rotate_files(&self) -> std::io::Result<()> {
        let timestamp = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or(std::time::Duration::from_secs(0))
            .as_secs();

        let backup_path = self.file_path.with_extension(format!("json.{timestamp}"));

        if self.file_path.exists() {
            fs::rename(&self.file_path, &backup_path)?;
        }

        self.cleanup_old_backups()?;

        Ok(())
    }

    /// Deletes backups beyond the retention limit, keeping the newest ones.
    ///
    /// Individual deletions that fail are skipped so one stuck file cannot
    /// block the rest of the cleanup.
    fn cleanup_old_backups(&self) -> std::io::Result<()> {
        let parent_dir = self.file_path.parent().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::Other, "No parent directory")
        })?;

        let file_stem = self.file_path
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| {
                std::io::Error::new(std::io::ErrorKind::Other, "Invalid file name")
            })?;

        let mut backups: Vec<PathBuf> = fs::read_dir(parent_dir)?
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name.starts_with(file_stem) && name.contains(".json."))
            })
            .collect();

        backups.sort_by(|a, b| {
            let a_time = fs::metadata(a).and_then(|m| m.modified()).ok();
            let b_time = fs::metadata(b).and_then(|m| m.modified()).ok();
            b_time.cmp(&a_time)
        });

        for old_backup in backups.iter().skip(MAX_BACKUP_FILES) {
            let _ = fs::remove_file(old_backup);
        }

        Ok(())
    }
}

impl std::fmt::Debug for FileWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileWriter")
            .field("file_path", &self.file_path)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_line_creates_the_file_and_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.json");
        let writer = FileWriter::new(path.clone());

        writer.write_line("{\"a\":1}").unwrap();
        writer.write_line("{\"b\":2}").unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "{\"a\":1}\n{\"b\":2}\n");
    }

    #[test]
    fn rotation_moves_the_primary_file_aside() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.json");
        fs::write(&path, "old contents").unwrap();

        let writer = FileWriter::new(path.clone());
        writer.rotate_files().unwrap();

        assert!(!path.exists());
        let backups: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(Result::ok)
            .filter(|entry| {
                entry
                    .file_name()
                    .to_string_lossy()
                    .contains(".json.")
            })
            .collect();
        assert_eq!(backups.len(), 1);
        assert_eq!(fs::read_to_string(backups[0].path()).unwrap(), "old contents");
    }

    #[test]
    fn cleanup_keeps_only_the_newest_backups() {
        let dir = tempfile::tempdir().unwrap();
        for stamp in [100, 200, 300, 400, 500] {
            fs::write(dir.path().join(format!("trace.json.{stamp}")), "x").unwrap();
        }

        let writer = FileWriter::new(dir.path().join("trace.json"));
        writer.cleanup_old_backups().unwrap();

        let remaining = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(Result::ok)
            .filter(|entry| {
                entry
                    .file_name()
                    .to_string_lossy()
                    .contains(".json.")
            })
            .count();
        assert_eq!(remaining, MAX_BACKUP_FILES);
    }
}
