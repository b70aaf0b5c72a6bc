use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Number of entries returned by a ranking when the caller does not say.
pub const DEFAULT_TOP_K: usize = 5;

/// Size of the generated record set used when the API is unreachable.
pub const DEFAULT_SYNTHETIC_COUNT: usize = 60;

/// Trailing window of the monthly rollup, in calendar months.
pub const MONTH_WINDOW: usize = 12;

pub fn resource_paths() -> HashMap<&'static str, &'static str> {
    HashMap::from([
        ("contracts", "contracts"),
        ("customers", "customers"),
        ("singers", "singers"),
    ])
}

pub fn default_cache_dir() -> PathBuf {
    if let Some(cache) = dirs::cache_dir() {
        cache.join("agency-crm-sdk")
    } else {
        PathBuf::from(".agency-crm-sdk-cache")
    }
}
