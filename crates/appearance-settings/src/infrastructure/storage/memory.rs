//! In-memory settings repository.
//!
//! Allows tests (and hosts that keep settings only for the session) to run the
//! settings store without touching the file system, and to inject load or save
//! failures.

use std::cell::{Cell, RefCell};
use std::io;
use std::path::PathBuf;

use appearance_core::SettingsRecord;

use crate::application::settings_store::{SettingsRepository, StorageError};

/// A [`SettingsRepository`] that keeps the record in memory.
#[derive(Debug, Default)]
pub struct InMemorySettingsRepository {
    stored: RefCell<Option<SettingsRecord>>,
    fail_loads: Cell<bool>,
    fail_saves: Cell<bool>,
    save_calls: Cell<u32>,
}

impl InMemorySettingsRepository {
    /// Creates an empty repository: loading yields the default record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository that already holds `record`.
    pub fn with_record(record: SettingsRecord) -> Self {
        let repo = Self::new();
        *repo.stored.borrow_mut() = Some(record);
        repo
    }

    /// Makes every subsequent `load` fail with an I/O error.
    pub fn fail_loads(&self, fail: bool) {
        self.fail_loads.set(fail);
    }

    /// Makes every subsequent `save` fail with an I/O error.  Failed saves are
    /// still counted.
    pub fn fail_saves(&self, fail: bool) {
        self.fail_saves.set(fail);
    }

    /// The last successfully saved (or initial) record.
    pub fn stored(&self) -> Option<SettingsRecord> {
        *self.stored.borrow()
    }

    /// Number of `save` calls, successful or not.
    pub fn save_calls(&self) -> u32 {
        self.save_calls.get()
    }

    fn injected_failure() -> StorageError {
        StorageError::Io {
            path: PathBuf::from("<memory>"),
            source: io::Error::new(io::ErrorKind::Other, "injected failure"),
        }
    }
}

impl SettingsRepository for InMemorySettingsRepository {
    fn load(&self) -> Result<SettingsRecord, StorageError> {
        if self.fail_loads.get() {
            return Err(Self::injected_failure());
        }
        Ok(self.stored().unwrap_or_default())
    }

    fn save(&self, record: &SettingsRecord) -> Result<(), StorageError> {
        self.save_calls.set(self.save_calls.get() + 1);
        if self.fail_saves.get() {
            return Err(Self::injected_failure());
        }
        *self.stored.borrow_mut() = Some(*record);
        Ok(())
    }
}
