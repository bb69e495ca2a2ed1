const API_PORT: u16 = 3000;

/// Base URL of the backend: same host as the page, port 3000.
/// Empty when there is no window.
pub fn api_base() -> String {
    let Some(window) = web_sys::window() else {
        return String::new();
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, API_PORT)
}

pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
