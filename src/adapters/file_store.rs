//! File-based key-value store adapter.
//!
//! Each key is stored as `<dir>/<key>.json`. Every write goes to its own
//! uniquely named temporary file in the same directory and is renamed into
//! place, so a crash mid-write leaves the previous value intact and
//! concurrent writers never share a temp file. The last rename wins.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::error::{classify_io_error, StorageError};
use crate::traits::KeyValueStore;

/// Name of the kiosk data directory under the platform data dir.
const DATA_DIR_NAME: &str = "suvidha";

/// File-based key-value store.
///
/// # Example
///
/// ```ignore
/// use suvidha::adapters::FileKeyValueStore;
/// use suvidha::traits::KeyValueStore;
///
/// let store = FileKeyValueStore::open("/var/lib/suvidha")?;
/// store.set("suvidha_current_user", "{...}")?;
/// ```
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    dir: PathBuf,
}

impl FileKeyValueStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        if !dir.exists() {
            fs::create_dir_all(&dir).map_err(|e| StorageError::Unavailable {
                message: format!("cannot create {}: {}", dir.display(), e),
            })?;
        }
        if !dir.is_dir() {
            return Err(StorageError::Unavailable {
                message: format!("{} is not a directory", dir.display()),
            });
        }
        Ok(Self { dir })
    }

    /// Default location: `<platform data dir>/suvidha`.
    ///
    /// Returns `None` if the platform data directory cannot be determined.
    pub fn default_dir() -> Option<PathBuf> {
        dirs::data_dir().map(|d| d.join(DATA_DIR_NAME))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file backing `key`.
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    fn write_atomically(&self, key: &str, path: &Path, value: &str) -> io::Result<()> {
        let mut tmp = tempfile::Builder::new()
            .prefix(&format!(".{}.", key))
            .suffix(".tmp")
            .tempfile_in(&self.dir)?;
        tmp.write_all(value.as_bytes())?;
        tmp.as_file().sync_all()?;
        persist(tmp, path)
    }
}

fn persist(tmp: NamedTempFile, path: &Path) -> io::Result<()> {
    tmp.persist(path).map(|_| ()).map_err(|e| e.error)
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                if self.dir.is_dir() {
                    Ok(None)
                } else {
                    Err(StorageError::Unavailable {
                        message: format!("{} no longer exists", self.dir.display()),
                    })
                }
            }
            Err(e) => Err(classify_io_error(e, key, path, "read")),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key);
        self.write_atomically(key, &path, value)
            .map_err(|e| classify_io_error(e, key, path, "write"))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(classify_io_error(e, key, path, "remove")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_creates_directory() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("nested").join("suvidha");
        let store = FileKeyValueStore::open(&dir).unwrap();
        assert!(dir.is_dir());
        assert_eq!(store.dir(), dir.as_path());
    }

    #[test]
    fn test_open_rejects_file_path() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("not-a-dir");
        fs::write(&file, "x").unwrap();
        assert!(matches!(
            FileKeyValueStore::open(&file),
            Err(StorageError::Unavailable { .. })
        ));
    }

    #[test]
    fn test_get_missing_key_is_none() {
        let temp = TempDir::new().unwrap();
        let store = FileKeyValueStore::open(temp.path()).unwrap();
        assert_eq!(store.get("absent").unwrap(), None);
    }

    #[test]
    fn test_set_get_remove() {
        let temp = TempDir::new().unwrap();
        let store = FileKeyValueStore::open(temp.path()).unwrap();

        store.set("k", "[1,2,3]").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("[1,2,3]"));
        assert!(store.path_for("k").exists());

        store.set("k", "[]").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("[]"));

        store.remove("k").unwrap();
        assert_eq!(store.get("k").unwrap(), None);
        store.remove("k").unwrap();
    }

    #[test]
    fn test_no_temp_file_left_behind() {
        let temp = TempDir::new().unwrap();
        let store = FileKeyValueStore::open(temp.path()).unwrap();
        store.set("k", "v").unwrap();
        let names: Vec<_> = fs::read_dir(temp.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["k.json".to_string()]);
    }

    #[test]
    fn test_concurrent_writers_last_write_wins() {
        let temp = TempDir::new().unwrap();
        let store = FileKeyValueStore::open(temp.path()).unwrap();

        let handles: Vec<_> = (0..4)
            .map(|writer| {
                let store = store.clone();
                std::thread::spawn(move || {
                    (0..100)
                        .filter(|n| {
                            let value = format!("[{{\"writer\":{writer},\"n\":{n}}}]");
                            store.set("suvidha_complaints", &value).is_err()
                        })
                        .count()
                })
            })
            .collect();
        let failures: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();
        assert_eq!(failures, 0);

        let doc = store.get("suvidha_complaints").unwrap().unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&doc).unwrap();
        assert!(parsed[0]["writer"].is_u64());

        let leftovers = fs::read_dir(temp.path())
            .unwrap()
            .filter(|e| e.as_ref().unwrap().file_name().to_string_lossy().ends_with(".tmp"))
            .count();
        assert_eq!(leftovers, 0);
    }

    #[test]
    fn test_deleted_directory_is_unavailable() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("data");
        let store = FileKeyValueStore::open(&dir).unwrap();
        fs::remove_dir_all(&dir).unwrap();
        assert!(matches!(
            store.get("k"),
            Err(StorageError::Unavailable { .. })
        ));
        assert!(store.set("k", "v").is_err());
    }

    #[test]
    fn test_default_dir_ends_with_app_name() {
        if let Some(dir) = FileKeyValueStore::default_dir() {
            assert!(dir.ends_with(DATA_DIR_NAME));
        }
    }
}
