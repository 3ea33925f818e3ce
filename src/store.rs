//! JSON collection storage.
//!
//! Each collection is one JSON document on disk holding an array of flat
//! objects (`cases.json`, `indictments.json`, ...). Every operation re-reads
//! the full file; nothing is cached between calls. Writers go through a
//! temp-file-then-rename publish so a concurrent reader never observes a
//! partially written document.

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::AppError;

/// A record stored in a named collection. Ids are opaque unique strings,
/// never sequential integers.
pub trait Record: Serialize + DeserializeOwned {
    /// File name of the collection this record type lives in, e.g. `cases.json`.
    const COLLECTION: &'static str;

    fn id(&self) -> &str;
}

/// Generate a fresh opaque record id: 16 random bytes, hex-encoded.
pub fn generate_id() -> String {
    use rand::Rng;
    let mut rng = rand::rng();
    let bytes: [u8; 16] = rng.random();
    hex::encode(bytes)
}

/// Current timestamp in the `YYYY-MM-DD HH:MM:SS` format all audit fields use.
pub fn timestamp_now() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

/// File-backed store for JSON collections under a single data directory.
#[derive(Debug, Clone)]
pub struct JsonStore {
    data_dir: PathBuf,
}

impl JsonStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        JsonStore { data_dir: data_dir.into() }
    }

    /// Build a store from the `DATA_DIR` environment variable, falling back
    /// to `data` when unset.
    pub fn from_env() -> Self {
        let dir = std::env::var("DATA_DIR").unwrap_or_else(|_| "data".to_string());
        JsonStore::new(dir)
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn collection_path(&self, name: &str) -> PathBuf {
        self.data_dir.join(name)
    }

    /// Load a collection in file order. An absent or empty document yields an
    /// empty vec; malformed JSON is a storage error.
    pub fn load<T: Record>(&self) -> Result<Vec<T>, AppError> {
        let path = self.collection_path(T::COLLECTION);
        let content = match fs::read_to_string(&path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(AppError::Io(e)),
        };
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        let records: Vec<T> = serde_json::from_str(&content).map_err(|e| {
            log::error!("Malformed collection {}: {}", T::COLLECTION, e);
            AppError::Json(e)
        })?;
        Ok(records)
    }

    /// Overwrite the collection with the given records. The document is
    /// written to a `.tmp` sibling and renamed into place, so readers see
    /// either the old or the new content, never a torn write.
    pub fn save<T: Record>(&self, records: &[T]) -> Result<(), AppError> {
        fs::create_dir_all(&self.data_dir)?;
        let path = self.collection_path(T::COLLECTION);
        let tmp = self.collection_path(&format!("{}.tmp", T::COLLECTION));
        let json = serde_json::to_string_pretty(records)?;
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &path)?;
        log::debug!("Saved {} ({} records)", T::COLLECTION, records.len());
        Ok(())
    }

    /// Linear scan for a record by id. O(n) by design: collections are small
    /// and there is no index.
    pub fn find_by_id<T: Record>(&self, id: &str) -> Result<Option<T>, AppError> {
        let records = self.load::<T>()?;
        Ok(records.into_iter().find(|r| r.id() == id))
    }

    /// Load the collection, apply `patch` to the record matching `id`, and
    /// re-save the whole collection. Returns the patched record.
    ///
    /// Last-writer-wins: two callers racing on the same collection are not
    /// detected, and the later save overwrites the earlier one.
    pub fn update_record<T, F>(&self, id: &str, patch: F) -> Result<T, AppError>
    where
        T: Record + Clone,
        F: FnOnce(&mut T),
    {
        let mut records = self.load::<T>()?;
        let target = records
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or(AppError::NotFound)?;
        patch(target);
        let updated = target.clone();
        self.save(&records)?;
        Ok(updated)
    }

    /// Load, append, re-save.
    pub fn append_record<T: Record>(&self, record: T) -> Result<(), AppError> {
        let mut records = self.load::<T>()?;
        records.push(record);
        self.save(&records)
    }
}
