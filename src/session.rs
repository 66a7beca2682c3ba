//! Client-side session
//!
//! Token, cached profile and theme live in a key/value store. Pages receive a
//! [`Session`] through the Dioxus context instead of touching browser storage
//! directly, so tests can hand them a [`MemoryStore`].

use crate::model::UserProfile;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";
pub const THEME_KEY: &str = "theme";

pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Store used by native builds and tests
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// `window.localStorage`
#[cfg(target_arch = "wasm32")]
pub struct LocalStorage;

#[cfg(target_arch = "wasm32")]
impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

#[cfg(target_arch = "wasm32")]
impl SessionStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        match Self::storage() {
            Some(storage) => {
                if let Err(e) = storage.set_item(key, value) {
                    log::warn!("Could not write '{}' to local storage: {:?}", key, e);
                }
            }
            None => log::warn!("Local storage unavailable, '{}' not saved", key),
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            if let Err(e) = storage.remove_item(key) {
                log::warn!("Could not remove '{}' from local storage: {:?}", key, e);
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Glyph of the toggle button, showing the theme it switches to
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Theme::Light => "🌙",
            Theme::Dark => "☀️",
        }
    }
}

#[derive(Clone)]
pub struct Session {
    store: Rc<dyn SessionStore>,
}

impl Session {
    pub fn new(store: impl SessionStore + 'static) -> Self {
        Self {
            store: Rc::new(store),
        }
    }

    /// Session backed by the platform's persistent storage
    pub fn for_platform() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            Self::new(LocalStorage)
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            Self::new(MemoryStore::default())
        }
    }

    /// Bearer token, if one is stored and non-empty
    pub fn token(&self) -> Option<String> {
        self.store
            .get(TOKEN_KEY)
            .filter(|token| !token.trim().is_empty())
    }

    pub fn set_token(&self, token: &str) {
        self.store.set(TOKEN_KEY, token.trim());
    }

    pub fn user(&self) -> Option<UserProfile> {
        let raw = self.store.get(USER_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                log::warn!("Ignoring unreadable cached profile: {}", e);
                None
            }
        }
    }

    pub fn store_user(&self, user: &UserProfile) {
        match serde_json::to_string(user) {
            Ok(raw) => self.store.set(USER_KEY, &raw),
            Err(e) => log::error!("Could not cache profile: {}", e),
        }
    }

    pub fn theme(&self) -> Theme {
        match self.store.get(THEME_KEY).as_deref() {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn set_theme(&self, theme: Theme) {
        self.store.set(THEME_KEY, theme.as_str());
    }

    /// Forgets the token and cached profile, keeps preferences
    pub fn clear(&self) {
        self.store.remove(TOKEN_KEY);
        self.store.remove(USER_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_presence() {
        let session = Session::new(MemoryStore::default());
        assert_eq!(session.token(), None);
        session.set_token("  abc  ");
        assert_eq!(session.token().as_deref(), Some("abc"));
        session.set_token("");
        assert_eq!(session.token(), None);
    }

    #[test]
    fn test_cached_user_round_trip() {
        let session = Session::new(MemoryStore::default());
        let user = UserProfile {
            name: "Grace Hopper".to_string(),
            phone: "+100".to_string(),
            address: "Arlington".to_string(),
            ..Default::default()
        };
        session.store_user(&user);
        assert_eq!(session.user(), Some(user));
    }

    #[test]
    fn test_corrupt_user_is_ignored() {
        let store = MemoryStore::default();
        store.set(USER_KEY, "{not json");
        let session = Session::new(store);
        assert_eq!(session.user(), None);
    }

    #[test]
    fn test_clear_keeps_theme() {
        let session = Session::new(MemoryStore::default());
        session.set_token("t");
        session.store_user(&UserProfile::default());
        session.set_theme(Theme::Dark);
        session.clear();
        assert_eq!(session.token(), None);
        assert_eq!(session.user(), None);
        assert_eq!(session.theme(), Theme::Dark);
    }

    #[test]
    fn test_theme_toggle() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }
}
