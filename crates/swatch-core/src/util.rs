//! Shared utility functions used across multiple modules.

/// Current local timestamp formatted as `DD-MM-YYYY HH:mm:ss`.
pub fn now_timestamp() -> String {
    chrono::Local::now().format("%d-%m-%Y %H:%M:%S").to_string()
}

/// Date portion of a timestamp: the substring before the first space.
///
/// Returns the whole input when it contains no space.
pub fn date_part(timestamp: &str) -> &str {
    timestamp.split(' ').next().unwrap_or(timestamp)
}
