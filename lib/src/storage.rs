//! Session-scoped key-value storage backends
//!
//! Values are plain strings addressed by string keys, mirroring the
//! browser's `sessionStorage`. [`MemoryStorage`] lives for the process
//! only; [`FileStorage`] keeps one file per key in a session directory so a
//! later process can pick the values back up.

#[cfg(test)]
use mockall::automock;

use std::{
    cell::RefCell,
    collections::HashMap,
    fs, io,
    path::{Path, PathBuf},
};

use crate::error::Result;

/// Trait describing a session-scoped key-value storage
#[cfg_attr(test, automock)]
pub trait SessionStorage {
    /// Returns the value stored under key, if any
    fn get_item(&self, key: &str) -> Result<Option<String>>;
    /// Stores value under key, replacing any previous value
    fn set_item(&self, key: &str, value: &str) -> Result<()>;
    /// Removes the value stored under key. Removing a missing key is not an
    /// error.
    fn remove_item(&self, key: &str) -> Result<()>;
}

/// In-process storage backed by a map
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Returns a new empty MemoryStorage
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

/// Storage keeping one `<key>.json` file per key inside a directory
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Returns a new FileStorage rooted at dir. The directory is created on
    /// first write.
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl SessionStorage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path_for(key), value)?;
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
#[path = "./storage_tests.rs"]
mod tests;
