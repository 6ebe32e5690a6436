//! API utilities for frontend-backend communication.

/// Get the base URL for backend requests.
///
/// Constructed from the current window location, using port 8000 for the
/// sales-analysis backend.
///
/// # Returns
/// - Base URL like "http://localhost:8000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:8000", protocol, hostname)
}

/// Build a full backend URL from a path.
///
/// # Example
/// ```rust,no_run
/// use frontend::shared::api_utils::api_url;
/// let url = api_url("/sales/total/?selected_month=2024-07");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
