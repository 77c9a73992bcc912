use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::RwLock;
use thiserror::Error;

use crate::models::Profile;

/// Errors that can occur with profile store operations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store lock poisoned")]
    Poisoned,
}

/// Append-only collection of submitted profiles
///
/// Insertion order is preserved and is the order matching results follow.
pub trait ProfileStore: Send + Sync {
    /// Snapshot of every stored profile, oldest first
    fn load_profiles(&self) -> Result<Vec<Profile>, StoreError>;

    fn append_profile(&self, profile: Profile) -> Result<(), StoreError>;

    /// The most recently appended profile, if any
    fn current_profile(&self) -> Result<Option<Profile>, StoreError> {
        Ok(self.load_profiles()?.pop())
    }
}

/// In-memory store, lost on restart
#[derive(Debug, Default)]
pub struct MemoryStore {
    profiles: RwLock<Vec<Profile>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_profiles(profiles: Vec<Profile>) -> Self {
        Self {
            profiles: RwLock::new(profiles),
        }
    }
}

impl ProfileStore for MemoryStore {
    fn load_profiles(&self) -> Result<Vec<Profile>, StoreError> {
        let profiles = self.profiles.read().map_err(|_| StoreError::Poisoned)?;
        Ok(profiles.clone())
    }

    fn append_profile(&self, profile: Profile) -> Result<(), StoreError> {
        let mut profiles = self.profiles.write().map_err(|_| StoreError::Poisoned)?;
        profiles.push(profile);
        Ok(())
    }
}

/// Store keeping the whole collection as one JSON array in a single file
///
/// A missing file reads as an empty collection. Each append writes the full
/// collection to a sibling temp file and renames it over the target, so a
/// reader never sees a partially written file.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    lock: RwLock<()>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: RwLock::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<Vec<Profile>, StoreError> {
        match fs::read(&self.path) {
            Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => Ok(Vec::new()),
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn write_all(&self, profiles: &[Profile]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_vec_pretty(profiles)?;
        let tmp = self.temp_path();
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "profiles.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl ProfileStore for JsonFileStore {
    fn load_profiles(&self) -> Result<Vec<Profile>, StoreError> {
        let _guard = self.lock.read().map_err(|_| StoreError::Poisoned)?;
        self.read_all()
    }

    fn append_profile(&self, profile: Profile) -> Result<(), StoreError> {
        let _guard = self.lock.write().map_err(|_| StoreError::Poisoned)?;
        let mut profiles = self.read_all()?;
        profiles.push(profile);
        self.write_all(&profiles)?;
        tracing::debug!("Persisted {} profiles to {}", profiles.len(), self.path.display());
        Ok(())
    }
}
