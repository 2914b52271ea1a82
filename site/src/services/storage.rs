//! localStorage persistence.
//!
//! Two keys survive reloads: the colour theme and the newsletter
//! subscriber list. Storage being unavailable (private browsing, storage
//! disabled) degrades gracefully: reads fall back to defaults and failed
//! writes are logged rather than surfaced to the visitor.

use pdfsmith::Theme;
use thiserror::Error;
use wasm_bindgen::JsValue;
use web_sys::Storage;

/// localStorage key holding the colour theme ("light" or "dark").
pub const THEME_KEY: &str = "theme";

/// localStorage key holding the newsletter subscriber list (JSON array).
pub const SUBSCRIBERS_KEY: &str = "newsletterSubscribers";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("localStorage is not available")]
    Unavailable,
    #[error("browser API error: {0}")]
    Js(String),
}

impl From<JsValue> for StorageError {
    fn from(value: JsValue) -> Self {
        Self::Js(format!("{value:?}"))
    }
}

fn local_storage() -> Result<Storage, StorageError> {
    gloo_utils::window()
        .local_storage()?
        .ok_or(StorageError::Unavailable)
}

/// Stored theme, or the light default when storage is missing or unreadable.
pub fn load_theme() -> Theme {
    let stored = local_storage()
        .ok()
        .and_then(|storage| storage.get_item(THEME_KEY).ok().flatten());
    Theme::from_stored(stored.as_deref())
}

/// Persist the theme choice. Failures are logged and otherwise ignored.
pub fn save_theme(theme: Theme) {
    if let Err(err) = try_save_theme(theme) {
        log::warn!("Theme not persisted: {}", err);
    }
}

fn try_save_theme(theme: Theme) -> Result<(), StorageError> {
    local_storage()?.set_item(THEME_KEY, theme.as_str())?;
    Ok(())
}

/// Append a subscriber (already validated) to the stored list.
pub fn append_subscriber(email: &str) -> Result<(), StorageError> {
    let storage = local_storage()?;
    let raw = storage.get_item(SUBSCRIBERS_KEY)?;
    let updated = pdfsmith::newsletter::append(raw.as_deref(), email, chrono::Utc::now());
    storage.set_item(SUBSCRIBERS_KEY, &updated)?;
    Ok(())
}
