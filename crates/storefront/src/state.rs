//! Application state shared across handlers.

use std::sync::{Arc, Mutex, MutexGuard, RwLock, RwLockReadGuard, RwLockWriteGuard};

use petcare_core::{Store, Theme};
use tokio::sync::watch;

use crate::config::StorefrontConfig;
use crate::error::AppError;
use crate::newsletter::{NewsletterClient, NewsletterError};
use crate::preferences::{PreferenceKey, Preferences};
use crate::render::views::NavigationView;
use crate::theme::ThemeSignal;
use crate::toast::ToastSlot;

/// Error creating application state.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("newsletter client: {0}")]
    Newsletter(#[from] NewsletterError),
}

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc`. The store sits behind one
/// `RwLock` and the navigation chrome behind a `Mutex`; both are only ever
/// held for synchronous sections, never across an `.await`.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    store: RwLock<Store>,
    preferences: Preferences,
    toasts: ToastSlot,
    navigation: Mutex<NavigationView>,
    newsletter: NewsletterClient,
    theme: ThemeSignal,
}

impl AppState {
    /// Create a new application state from the seed content.
    ///
    /// The persisted theme, if any, is applied to the store before the first
    /// request.
    ///
    /// # Errors
    ///
    /// Returns an error if the newsletter endpoint cannot be built.
    pub fn new(config: StorefrontConfig) -> Result<Self, StateError> {
        let preferences = Preferences::open(&config.preferences_path);
        Self::with_preferences(config, preferences)
    }

    /// Like [`AppState::new`] but with a caller-supplied preference cache.
    ///
    /// # Errors
    ///
    /// Returns an error if the newsletter endpoint cannot be built.
    pub fn with_preferences(
        config: StorefrontConfig,
        preferences: Preferences,
    ) -> Result<Self, StateError> {
        let newsletter = NewsletterClient::new(&config.newsletter)?;

        let theme = Theme::from_preference(preferences.get(PreferenceKey::Theme).as_deref());
        let mut store = Store::seeded();
        store.set_theme(theme);
        tracing::debug!(theme = theme.as_str(), "Store seeded");

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                store: RwLock::new(store),
                preferences,
                toasts: ToastSlot::default(),
                navigation: Mutex::new(NavigationView::at_top()),
                newsletter,
                theme: ThemeSignal::new(theme),
            }),
        })
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Read access to the store.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Internal` if the lock is poisoned.
    pub fn store(&self) -> Result<RwLockReadGuard<'_, Store>, AppError> {
        self.inner
            .store
            .read()
            .map_err(|e| AppError::Internal(format!("store lock poisoned: {e}")))
    }

    /// Write access to the store.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Internal` if the lock is poisoned.
    pub fn store_mut(&self) -> Result<RwLockWriteGuard<'_, Store>, AppError> {
        self.inner
            .store
            .write()
            .map_err(|e| AppError::Internal(format!("store lock poisoned: {e}")))
    }

    /// Get a reference to the preference cache.
    #[must_use]
    pub fn preferences(&self) -> &Preferences {
        &self.inner.preferences
    }

    /// Get a reference to the toast slot.
    #[must_use]
    pub fn toasts(&self) -> &ToastSlot {
        &self.inner.toasts
    }

    /// The navigation chrome (highlighted link, back-to-top, mobile menu).
    ///
    /// # Errors
    ///
    /// Returns `AppError::Internal` if the lock is poisoned.
    pub fn navigation(&self) -> Result<MutexGuard<'_, NavigationView>, AppError> {
        self.inner
            .navigation
            .lock()
            .map_err(|e| AppError::Internal(format!("navigation lock poisoned: {e}")))
    }

    /// Get a reference to the newsletter client.
    #[must_use]
    pub fn newsletter(&self) -> &NewsletterClient {
        &self.inner.newsletter
    }

    #[must_use]
    pub fn theme_signal(&self) -> &ThemeSignal {
        &self.inner.theme
    }

    /// Subscribe to theme changes (used by the health chart).
    #[must_use]
    pub fn theme_changes(&self) -> watch::Receiver<Theme> {
        self.inner.theme.subscribe()
    }
}
