//! Browser-backed session persistence and CSRF cookie access.
//!
//! Server renders use [`NullStorage`], so SSR output is always anonymous;
//! the browser backend rehydrates the real session during hydration.

use campus_access::SessionStorage;

/// localStorage key holding the serialized token pair.
pub const SESSION_KEY: &str = "campus.session";

/// Cookie the API sets with the CSRF token.
const CSRF_COOKIE: &str = "csrftoken";

/// Storage backend for server rendering: always empty, never persists.
#[derive(Debug, Default)]
pub struct NullStorage;

impl SessionStorage for NullStorage {
    fn load(&self) -> Option<String> {
        None
    }

    fn save(&self, _raw: &str) {}

    fn clear(&self) {}
}

/// Storage backend over the browser's localStorage.
#[cfg(feature = "hydrate")]
#[derive(Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
impl BrowserStorage {
    fn local_storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

#[cfg(feature = "hydrate")]
impl SessionStorage for BrowserStorage {
    fn load(&self) -> Option<String> {
        Self::local_storage()?.get_item(SESSION_KEY).ok().flatten()
    }

    fn save(&self, raw: &str) {
        match Self::local_storage() {
            Some(storage) => {
                if storage.set_item(SESSION_KEY, raw).is_err() {
                    tracing::warn!("failed to persist session to local storage");
                }
            }
            None => tracing::warn!("local storage is unavailable"),
        }
    }

    fn clear(&self) {
        if let Some(storage) = Self::local_storage() {
            let _ = storage.remove_item(SESSION_KEY);
        }
    }
}

/// The storage backend for the current build target.
#[cfg(feature = "hydrate")]
pub type DefaultStorage = BrowserStorage;

/// The storage backend for the current build target.
#[cfg(not(feature = "hydrate"))]
pub type DefaultStorage = NullStorage;

/// Reads the CSRF token out of the browser's cookies.
#[cfg(feature = "hydrate")]
pub fn csrf_token() -> Option<String> {
    use wasm_bindgen::JsCast;

    let cookies = web_sys::window()?
        .document()?
        .dyn_into::<web_sys::HtmlDocument>()
        .ok()?
        .cookie()
        .ok()?;

    token_from_cookies(&cookies)
}

/// Reads the CSRF token out of the browser's cookies.
///
/// There is no cookie jar outside the browser.
#[cfg(not(feature = "hydrate"))]
pub fn csrf_token() -> Option<String> {
    None
}

/// Extracts the CSRF token from a `Cookie`-header-shaped string.
fn token_from_cookies(cookies: &str) -> Option<String> {
    cookies
        .split("; ")
        .find_map(|pair| pair.strip_prefix(CSRF_COOKIE))
        .and_then(|rest| rest.strip_prefix('='))
        .map(|value| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_storage_holds_nothing() {
        let storage = NullStorage;
        storage.save("record");
        assert!(storage.load().is_none());
    }

    #[test]
    fn csrf_token_is_found_among_other_cookies() {
        let cookies = "theme=dark; csrftoken=abc123; lang=fr";
        assert_eq!(token_from_cookies(cookies).as_deref(), Some("abc123"));
    }

    #[test]
    fn csrf_token_absent_when_cookie_missing() {
        assert!(token_from_cookies("theme=dark; lang=fr").is_none());
        assert!(token_from_cookies("").is_none());
    }

    #[test]
    fn csrf_prefix_must_be_a_whole_cookie_name() {
        // A cookie merely starting with the name must not match.
        assert!(token_from_cookies("csrftoken_old=zzz").is_none());
    }
}
