use std::env;

pub const DEFAULT_BASE_URL: &str = "https://Maxsword2025.pythonanywhere.com/api";
pub const DEFAULT_PORT: u16 = 8080;

pub fn resolve_base_url() -> String {
    match env::var("CALORIE_API_BASE_URL") {
        Ok(url) if !url.trim().is_empty() => url.trim().trim_end_matches('/').to_string(),
        _ => DEFAULT_BASE_URL.to_string(),
    }
}

pub fn resolve_port() -> u16 {
    env::var("PORT")
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(DEFAULT_PORT)
}
