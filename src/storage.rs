//! Last-completion timestamp persistence.
//!
//! The only state the maze keeps across runs is the time of the last maze
//! completion, used by the completion summary. It is stored as a single
//! RFC 3339 line in a file; a missing or unreadable file simply means no
//! completion has been recorded yet.

use std::fs;
use std::io;
use std::path::PathBuf;

use chrono::{DateTime, Local};

/// File-backed store for the single last-completion timestamp.
#[derive(Debug, Clone)]
pub struct CompletionStore {
    path: PathBuf,
}

impl CompletionStore {
    /// Creates a store backed by the given file path. The file is only
    /// created once a completion is recorded.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Records a completion time, replacing any previous one.
    ///
    /// # Errors
    /// Returns an error if the file cannot be written.
    pub fn record(&self, time: DateTime<Local>) -> Result<(), io::Error> {
        if let Err(e) = fs::write(&self.path, time.to_rfc3339()) {
            eprintln!("Failed to write completion time: {}", e);
            return Err(e);
        }
        Ok(())
    }

    /// Returns the last recorded completion time, or `None` if none has been
    /// recorded or the stored value cannot be read back.
    pub fn last(&self) -> Option<DateTime<Local>> {
        let contents = fs::read_to_string(&self.path).ok()?;
        DateTime::parse_from_rfc3339(contents.trim())
            .ok()
            .map(|time| time.with_timezone(&Local))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn temp_store(name: &str) -> CompletionStore {
        CompletionStore::new(env::temp_dir().join(name))
    }

    /// Tests that a recorded completion time reads back unchanged
    #[test]
    fn test_record_and_read_back() {
        let store = temp_store("warren_completion_round_trip");
        let time = Local::now();

        store.record(time).expect("recording should succeed");
        let read_back = store.last().expect("a recorded time should read back");

        assert_eq!(read_back, time, "completion time should round-trip");
        fs::remove_file(env::temp_dir().join("warren_completion_round_trip")).ok();
    }

    /// Tests that a missing file means no completion yet
    #[test]
    fn test_missing_file_is_none() {
        let store = temp_store("warren_completion_missing");
        assert!(store.last().is_none());
    }

    /// Tests that garbage contents are treated as no completion
    #[test]
    fn test_unparseable_contents_is_none() {
        let path = env::temp_dir().join("warren_completion_garbage");
        fs::write(&path, "not a timestamp").expect("test setup write failed");

        let store = CompletionStore::new(&path);
        assert!(store.last().is_none());
        fs::remove_file(path).ok();
    }
}
