//! Endpoint resolution for the hosted data service.

use wasm_bindgen::JsValue;

/// Base URL of the data service REST interface.
///
/// Hosted deployments set a `window.COMETICA_DATA_URL` global; without
/// it the service is assumed to run next to the app on port 8000.
///
/// # Example
/// ```rust,ignore
/// let url = format!("{}/rest/v1/products", data_base());
/// ```
pub fn data_base() -> String {
    if let Some(window) = web_sys::window() {
        if let Ok(value) = js_sys::Reflect::get(&window, &JsValue::from_str("COMETICA_DATA_URL")) {
            if let Some(url) = value.as_string() {
                if !url.is_empty() {
                    return url.trim_end_matches('/').to_string();
                }
            }
        }
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
    format!("{}//{}:8000", protocol, hostname)
}

/// Full REST URL for a table path
pub fn rest_url(table: &str) -> String {
    format!("{}/rest/v1/{}", data_base(), table)
}
