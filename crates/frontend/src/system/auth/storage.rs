use crate::system::sector::{BrowserStorage, KeyValueStore};

const ACCESS_TOKEN_KEY: &str = "auth_access_token";
const REFRESH_TOKEN_KEY: &str = "auth_refresh_token";

/// Get access token from localStorage
pub fn get_access_token() -> Option<String> {
    BrowserStorage.get_item(ACCESS_TOKEN_KEY)
}

/// Get refresh token from localStorage
pub fn get_refresh_token() -> Option<String> {
    BrowserStorage.get_item(REFRESH_TOKEN_KEY)
}

/// Clear all authentication tokens
pub fn clear_tokens() {
    BrowserStorage.remove_item(ACCESS_TOKEN_KEY);
    BrowserStorage.remove_item(REFRESH_TOKEN_KEY);
}
