//! Theme and language preferences.
//!
//! [`Preferences`] is loaded once at startup and shared down the component
//! tree as a [`SharedPreferences`] handle. Setters change the in-memory
//! value first and then persist it; a failed write leaves the new value in
//! effect for the session.

mod palette;
mod theme;

pub use palette::{hex_to_rgb, Palette, DARK, LIGHT};
pub use theme::ThemeScheme;

use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::models::Language;
use crate::storage;
use crate::traits::{KeyValueStore, StorageError};

/// Explicit accessor passed to components that read or change preferences.
pub type SharedPreferences = Arc<RwLock<Preferences>>;

/// Current theme scheme and interface language.
pub struct Preferences {
    store: Arc<dyn KeyValueStore>,
    theme: ThemeScheme,
    language: Language,
}

impl std::fmt::Debug for Preferences {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Preferences")
            .field("theme", &self.theme)
            .field("language", &self.language)
            .finish()
    }
}

impl Preferences {
    /// Defaults (`light`, `en`) without reading storage.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            theme: ThemeScheme::default(),
            language: Language::default(),
        }
    }

    /// Read `theme_mode` and `app_language`.
    ///
    /// Unknown values and read failures keep the defaults.
    pub async fn load(store: Arc<dyn KeyValueStore>) -> Self {
        let mut prefs = Self::new(store);

        match prefs.store.get_item(storage::THEME_MODE).await {
            Ok(Some(raw)) => match ThemeScheme::from_str_exact(&raw) {
                Some(theme) => prefs.theme = theme,
                None => debug!("Ignoring stored theme '{}'", raw),
            },
            Ok(None) => {}
            Err(e) => warn!("Error loading theme: {}", e),
        }

        match prefs.store.get_item(storage::APP_LANGUAGE).await {
            Ok(Some(raw)) => match Language::from_code(&raw) {
                Some(language) => prefs.language = language,
                None => debug!("Ignoring stored language '{}'", raw),
            },
            Ok(None) => {}
            Err(e) => warn!("Error loading language: {}", e),
        }

        prefs
    }

    /// Wrap into the shared handle.
    pub fn shared(self) -> SharedPreferences {
        Arc::new(RwLock::new(self))
    }

    pub fn theme(&self) -> ThemeScheme {
        self.theme
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn palette(&self) -> &'static Palette {
        Palette::for_scheme(self.theme)
    }

    pub async fn set_theme(&mut self, theme: ThemeScheme) -> Result<(), StorageError> {
        self.theme = theme;
        self.store
            .set_item(storage::THEME_MODE, theme.as_str())
            .await
            .map_err(|e| {
                warn!("Error saving theme: {}", e);
                e
            })
    }

    pub async fn toggle_theme(&mut self) -> Result<(), StorageError> {
        self.set_theme(self.theme.toggled()).await
    }

    pub async fn set_language(&mut self, language: Language) -> Result<(), StorageError> {
        self.language = language;
        self.store
            .set_item(storage::APP_LANGUAGE, language.code())
            .await
            .map_err(|e| {
                warn!("Error saving language: {}", e);
                e
            })
    }

    pub async fn toggle_language(&mut self) -> Result<(), StorageError> {
        self.set_language(self.language.toggled()).await
    }
}
