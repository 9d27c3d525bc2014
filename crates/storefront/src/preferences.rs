//! Local preference cache.
//!
//! Three scalar preferences survive restarts: the theme, whether the daily tip
//! was dismissed, and the uploaded pet photo. They live in one JSON object
//! file that is rewritten through a temp file and a rename.
//!
//! The cache never fails its callers. If the file cannot be opened or parsed
//! the adapter becomes unavailable: reads return `None` and writes are
//! dropped, each logged at `warn`.

use core::fmt;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Mutex;

/// Preference keys and their stored names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PreferenceKey {
    /// `light` or `dark`.
    Theme,
    /// `"true"` once the daily tip has been closed.
    TipDismissed,
    /// `data:` URI of the uploaded pet photo.
    PetPhoto,
}

impl PreferenceKey {
    pub const ALL: [Self; 3] = [Self::Theme, Self::TipDismissed, Self::PetPhoto];

    /// Name under which the value is stored.
    #[must_use]
    pub const fn storage_name(self) -> &'static str {
        match self {
            Self::Theme => "theme",
            Self::TipDismissed => "tipClosed",
            Self::PetPhoto => "userPetPhoto",
        }
    }
}

impl fmt::Display for PreferenceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.storage_name())
    }
}

/// Error returned for an unrecognised preference name.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown preference: {0} (expected theme, tipClosed or userPetPhoto)")]
pub struct UnknownPreference(pub String);

impl FromStr for PreferenceKey {
    type Err = UnknownPreference;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.storage_name() == s)
            .ok_or_else(|| UnknownPreference(s.to_string()))
    }
}

/// Reasons the backing file could not be used.
#[derive(thiserror::Error, Debug)]
enum PreferencesError {
    #[error("failed to create {path}: {source}")]
    CreateDir { path: PathBuf, source: io::Error },
    #[error("failed to read {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("{path} is not a JSON object of strings: {source}")]
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write { path: PathBuf, source: io::Error },
    #[error("failed to encode preferences: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Debug)]
enum Backing {
    Available {
        path: PathBuf,
        values: BTreeMap<String, String>,
    },
    Unavailable,
}

/// File-backed key-value cache for the three preferences.
#[derive(Debug)]
pub struct Preferences {
    backing: Mutex<Backing>,
}

impl Preferences {
    /// Open the cache at `path`, creating its directory if needed.
    ///
    /// A missing file is an empty cache. Any other failure yields an
    /// unavailable adapter.
    #[must_use]
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let backing = match load(&path) {
            Ok(values) => {
                tracing::debug!(path = %path.display(), entries = values.len(), "Preferences loaded");
                Backing::Available { path, values }
            }
            Err(e) => {
                tracing::warn!(error = %e, "Preference cache unavailable, preferences will not persist");
                Backing::Unavailable
            }
        };
        Self {
            backing: Mutex::new(backing),
        }
    }

    /// An adapter that never stores anything.
    #[must_use]
    pub const fn disabled() -> Self {
        Self {
            backing: Mutex::new(Backing::Unavailable),
        }
    }

    /// Whether values are being persisted.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.backing
            .lock()
            .is_ok_and(|b| matches!(*b, Backing::Available { .. }))
    }

    /// Read a preference. Unset and unavailable both read as `None`.
    #[must_use]
    pub fn get(&self, key: PreferenceKey) -> Option<String> {
        let Ok(backing) = self.backing.lock() else {
            tracing::warn!(key = %key, "Preference lock poisoned, treating as unset");
            return None;
        };
        match &*backing {
            Backing::Available { values, .. } => values.get(key.storage_name()).cloned(),
            Backing::Unavailable => None,
        }
    }

    /// Store a preference, overwriting any previous value.
    pub fn set(&self, key: PreferenceKey, value: impl Into<String>) {
        let value = value.into();
        self.update(key, |values| {
            values.insert(key.storage_name().to_string(), value);
        });
    }

    /// Forget a preference.
    pub fn remove(&self, key: PreferenceKey) {
        self.update(key, |values| {
            values.remove(key.storage_name());
        });
    }

    fn update(&self, key: PreferenceKey, change: impl FnOnce(&mut BTreeMap<String, String>)) {
        let Ok(mut backing) = self.backing.lock() else {
            tracing::warn!(key = %key, "Preference lock poisoned, write dropped");
            return;
        };
        let Backing::Available { path, values } = &mut *backing else {
            tracing::warn!(key = %key, "Preference cache unavailable, write dropped");
            return;
        };

        // Only commit in memory once the file write has landed
        let mut next = values.clone();
        change(&mut next);
        match store(path, &next) {
            Ok(()) => *values = next,
            Err(e) => tracing::warn!(key = %key, error = %e, "Preference write dropped"),
        }
    }
}

fn load(path: &Path) -> Result<BTreeMap<String, String>, PreferencesError> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(|source| PreferencesError::CreateDir {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
        Err(source) => {
            return Err(PreferencesError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    if raw.trim().is_empty() {
        return Ok(BTreeMap::new());
    }

    serde_json::from_str(&raw).map_err(|source| PreferencesError::Malformed {
        path: path.to_path_buf(),
        source,
    })
}

fn store(path: &Path, values: &BTreeMap<String, String>) -> Result<(), PreferencesError> {
    let encoded = serde_json::to_vec_pretty(values)?;

    let mut tmp_name = path.file_name().unwrap_or_default().to_os_string();
    tmp_name.push(".tmp");
    let tmp = path.with_file_name(tmp_name);

    let write_err = |source| PreferencesError::Write {
        path: path.to_path_buf(),
        source,
    };
    fs::write(&tmp, encoded).map_err(write_err)?;
    fs::rename(&tmp, path).map_err(write_err)
}
