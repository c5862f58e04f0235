//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

/// Port of the service-desk API when no explicit base URL is configured
pub const API_PORT: u16 = 3000;

/// Compile-time override, e.g. `API_BASE_URL=https://api.example.com trunk build`
const API_BASE_OVERRIDE: Option<&str> = option_env!("API_BASE_URL");

/// Login page of the external auth provider, relative to the API base
const AUTH_LOGIN_PATH: &str = "/login";

/// Get the base URL for API requests
///
/// Uses `API_BASE_URL` when it was set at build time, otherwise the current
/// window location with port 3000.
///
/// # Returns
/// - API base URL like "http://localhost:3000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    if let Some(base) = API_BASE_OVERRIDE {
        return normalize_base(base);
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    base_from_location(&protocol, &hostname, API_PORT)
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/api/service-orders");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Where the browser goes after signing out
pub fn auth_login_url() -> String {
    api_url(AUTH_LOGIN_PATH)
}

fn base_from_location(protocol: &str, hostname: &str, port: u16) -> String {
    format!("{}//{}:{}", protocol, hostname, port)
}

fn normalize_base(base: &str) -> String {
    base.trim_end_matches('/').to_string()
}
