//! Inspect and edit the preference cache the site persists to.

use std::path::PathBuf;

use petcare_storefront::config::DEFAULT_PREFERENCES_PATH;
use petcare_storefront::preferences::{PreferenceKey, Preferences};
use tracing::info;

/// Error editing preferences.
#[derive(Debug, thiserror::Error)]
pub enum PrefsError {
    #[error("preference file {0} cannot be opened")]
    Unavailable(String),
    #[error("{0} was not saved, the preference file could not be written")]
    WriteDropped(String),
}

/// Open the preference file, falling back to the site's default location.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn open(path: Option<PathBuf>) -> Result<Preferences, PrefsError> {
    let path = path.unwrap_or_else(|| PathBuf::from(DEFAULT_PREFERENCES_PATH));
    let prefs = Preferences::open(&path);
    if prefs.is_available() {
        Ok(prefs)
    } else {
        Err(PrefsError::Unavailable(path.display().to_string()))
    }
}

/// Print one preference.
///
/// # Errors
///
/// Returns an error if `key` is not a known preference.
pub fn get(prefs: &Preferences, key: &str) -> Result<(), Box<dyn std::error::Error>> {
    let key: PreferenceKey = key.parse()?;
    match prefs.get(key) {
        Some(value) if key == PreferenceKey::PetPhoto => {
            info!("{key} = <{} bytes of image data>", value.len());
        }
        Some(value) => info!("{key} = {value}"),
        None => info!("{key} is not set"),
    }
    Ok(())
}

/// Store one preference.
///
/// # Errors
///
/// Returns an error if `key` is not a known preference or the write did not
/// land.
pub fn set(prefs: &Preferences, key: &str, value: &str) -> Result<(), Box<dyn std::error::Error>> {
    let key: PreferenceKey = key.parse()?;
    prefs.set(key, value);
    if prefs.get(key).as_deref() != Some(value) {
        return Err(PrefsError::WriteDropped(key.to_string()).into());
    }
    info!("{key} set");
    Ok(())
}

/// Forget one preference.
///
/// # Errors
///
/// Returns an error if `key` is not a known preference or the value is still
/// stored afterwards.
pub fn clear(prefs: &Preferences, key: &str) -> Result<(), Box<dyn std::error::Error>> {
    let key: PreferenceKey = key.parse()?;
    prefs.remove(key);
    if prefs.get(key).is_some() {
        return Err(PrefsError::WriteDropped(key.to_string()).into());
    }
    info!("{key} cleared");
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn temp_prefs() -> (PathBuf, Preferences) {
        let dir = std::env::temp_dir().join(format!("petcare-cli-{}", uuid::Uuid::new_v4()));
        let path = dir.join("preferences.json");
        let prefs = open(Some(path.clone())).unwrap();
        (path, prefs)
    }

    #[test]
    fn test_set_then_clear() {
        let (path, prefs) = temp_prefs();
        set(&prefs, "theme", "dark").unwrap();
        assert_eq!(prefs.get(PreferenceKey::Theme).as_deref(), Some("dark"));

        let reopened = open(Some(path.clone())).unwrap();
        assert_eq!(reopened.get(PreferenceKey::Theme).as_deref(), Some("dark"));

        clear(&reopened, "theme").unwrap();
        assert_eq!(reopened.get(PreferenceKey::Theme), None);
        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_set_reports_dropped_write() {
        let (path, prefs) = temp_prefs();
        set(&prefs, "theme", "light").unwrap();
        std::fs::remove_dir_all(path.parent().unwrap()).unwrap();

        let err = set(&prefs, "theme", "dark").unwrap_err();
        assert!(err.to_string().contains("theme was not saved"));
        assert_eq!(prefs.get(PreferenceKey::Theme).as_deref(), Some("light"));

        assert!(clear(&prefs, "theme").is_err());
    }

    #[test]
    fn test_disabled_cache_rejects_set() {
        let prefs = Preferences::disabled();
        assert!(set(&prefs, "tipClosed", "true").is_err());
    }

    #[test]
    fn test_unknown_key() {
        let (path, prefs) = temp_prefs();
        assert!(get(&prefs, "colour").is_err());
        assert!(set(&prefs, "colour", "red").is_err());
        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }
}
