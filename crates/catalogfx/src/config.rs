use std::{env, str::FromStr, time::Duration};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Item page cache TTL in seconds (default: 120)
    pub page_cache_ttl_seconds: u64,
    /// Rate table cache TTL in seconds (default: 3600)
    pub rates_cache_ttl_seconds: u64,
    /// Symbol table cache TTL in seconds (default: one year)
    pub symbols_cache_ttl_seconds: u64,
    /// Maximum number of in-memory cache entries (default: 10,000)
    /// Note: Only used when the `memory` feature is enabled.
    #[allow(dead_code)]
    pub cache_max_entries: usize,
    /// Path to SQLite database file (default: "catalogfx.db")
    /// Note: Only used when the `sqlite` feature is enabled.
    #[allow(dead_code)]
    pub sqlite_path: String,
    /// Redis connection URL (default: "redis://localhost:6379")
    /// Note: Only used when the `redis` feature is enabled.
    #[allow(dead_code)]
    pub redis_url: String,
    /// Access key appended to the rate source URLs.
    pub fixer_api_key: String,
    pub fixer_rates_url: String,
    pub fixer_symbols_url: String,
}

const ONE_YEAR_SECONDS: u64 = 365 * 24 * 60 * 60;

fn parsed_or<T: FromStr>(value: Option<String>, default: T) -> T {
    value.and_then(|v| v.parse().ok()).unwrap_or(default)
}

fn string_or(value: Option<String>, default: &str) -> String {
    value.unwrap_or_else(|| default.to_string())
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `PAGE_CACHE_TTL_SECONDS` - Item page cache TTL (default: 120)
    /// - `RATES_CACHE_TTL_SECONDS` - Rate table cache TTL (default: 3600)
    /// - `SYMBOLS_CACHE_TTL_SECONDS` - Symbol table cache TTL (default: 31536000)
    /// - `CACHE_MAX_ENTRIES` - Maximum in-memory cache entries (default: 10,000)
    /// - `SQLITE_PATH` - SQLite database path (default: "catalogfx.db")
    /// - `REDIS_URL` - Redis connection URL (default: "redis://localhost:6379")
    /// - `FIXER_API_KEY` - Rate source access key (default: empty)
    /// - `FIXER_RATES_URL` - Rates endpoint, up to and including `access_key=`
    /// - `FIXER_SYMBOLS_URL` - Symbols endpoint, up to and including `access_key=`
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the configuration from `lookup`.
    ///
    /// Absent or unparsable values fall back to their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            page_cache_ttl_seconds: parsed_or(lookup("PAGE_CACHE_TTL_SECONDS"), 120),
            rates_cache_ttl_seconds: parsed_or(lookup("RATES_CACHE_TTL_SECONDS"), 3600),
            symbols_cache_ttl_seconds: parsed_or(
                lookup("SYMBOLS_CACHE_TTL_SECONDS"),
                ONE_YEAR_SECONDS,
            ),
            cache_max_entries: parsed_or(lookup("CACHE_MAX_ENTRIES"), 10_000),
            sqlite_path: string_or(lookup("SQLITE_PATH"), "catalogfx.db"),
            redis_url: string_or(lookup("REDIS_URL"), "redis://localhost:6379"),
            fixer_api_key: string_or(lookup("FIXER_API_KEY"), ""),
            fixer_rates_url: string_or(
                lookup("FIXER_RATES_URL"),
                "http://data.fixer.io/api/latest?access_key=",
            ),
            fixer_symbols_url: string_or(
                lookup("FIXER_SYMBOLS_URL"),
                "http://data.fixer.io/api/symbols?access_key=",
            ),
        }
    }

    pub fn page_cache_ttl(&self) -> Duration {
        Duration::from_secs(self.page_cache_ttl_seconds)
    }

    pub fn rates_cache_ttl(&self) -> Duration {
        Duration::from_secs(self.rates_cache_ttl_seconds)
    }

    pub fn symbols_cache_ttl(&self) -> Duration {
        Duration::from_secs(self.symbols_cache_ttl_seconds)
    }
}
