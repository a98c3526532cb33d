//! Browser `localStorage` access. Outside the browser nothing is persisted.

/// Key of the identity provider refresh token.
pub const REFRESH_TOKEN_KEY: &str = "gardenhub.refresh_token";
/// Key of the Google redirect awaiting its callback.
pub const GOOGLE_SIGN_IN_KEY: &str = "gardenhub.google_sign_in";
/// Key of the selected colour theme.
pub const THEME_KEY: &str = "gardenhub.theme";

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok()).flatten()
}

#[cfg(target_arch = "wasm32")]
pub fn load(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok().flatten()
}

#[cfg(target_arch = "wasm32")]
pub fn save(key: &str, value: &str) {
    if let Some(storage) = local_storage() {
        if storage.set_item(key, value).is_err() {
            tracing::warn!("Could not persist {key}");
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub fn remove(key: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(key);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn load(_key: &str) -> Option<String> {
    None
}

#[cfg(not(target_arch = "wasm32"))]
pub fn save(_key: &str, _value: &str) {}

#[cfg(not(target_arch = "wasm32"))]
pub fn remove(_key: &str) {}
