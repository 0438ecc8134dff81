//! Settings store trait and implementations.
//!
//! Provides a trait-based abstraction over persistence so the edit session
//! can be exercised without touching the filesystem.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::DnsSettings;
use crate::error::StoreError;

/// Trait for loading and saving persisted DNS settings.
pub trait SettingsStore {
    /// Load the stored settings, or `None` if nothing has been saved yet.
    fn load(&self) -> Result<Option<DnsSettings>, StoreError>;

    /// Replace the stored settings.
    fn save(&mut self, settings: &DnsSettings) -> Result<(), StoreError>;
}

/// Stores settings as a TOML file.
///
/// Saves go through a temporary sibling file that is renamed over the
/// target, so readers never observe a half-written file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl SettingsStore for FileStore {
    fn load(&self) -> Result<Option<DnsSettings>, StoreError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = ?self.path, "no persisted settings");
                return Ok(None);
            }
            Err(source) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        let settings = toml::from_str(&content).map_err(StoreError::Parse)?;
        tracing::debug!(path = ?self.path, "loaded persisted settings");
        Ok(Some(settings))
    }

    fn save(&mut self, settings: &DnsSettings) -> Result<(), StoreError> {
        let content = toml::to_string_pretty(settings).map_err(StoreError::Serialize)?;
        let temp = self.temp_path();

        std::fs::write(&temp, content).map_err(|source| StoreError::Write {
            path: temp.clone(),
            source,
        })?;
        std::fs::rename(&temp, &self.path).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })?;

        tracing::info!(
            path = ?self.path,
            servers = settings.custom_dns_domains.len(),
            "saved DNS settings"
        );
        Ok(())
    }
}

/// In-memory store, mainly for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    settings: Option<DnsSettings>,
    saves: usize,
}

impl MemoryStore {
    pub fn new(settings: DnsSettings) -> Self {
        Self {
            settings: Some(settings),
            saves: 0,
        }
    }

    /// Currently stored settings.
    pub fn settings(&self) -> Option<&DnsSettings> {
        self.settings.as_ref()
    }

    /// Number of successful saves.
    pub fn save_count(&self) -> usize {
        self.saves
    }

    /// Replace the stored snapshot without counting it as a save, as an
    /// external writer would.
    pub fn replace(&mut self, settings: DnsSettings) {
        self.settings = Some(settings);
    }
}

impl SettingsStore for MemoryStore {
    fn load(&self) -> Result<Option<DnsSettings>, StoreError> {
        Ok(self.settings.clone())
    }

    fn save(&mut self, settings: &DnsSettings) -> Result<(), StoreError> {
        self.settings = Some(settings.clone());
        self.saves += 1;
        Ok(())
    }
}
