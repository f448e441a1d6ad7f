use std::{env, str::FromStr, time::Duration};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Cache TTL in seconds (default: 300)
    pub cache_ttl_seconds: u64,
    /// Maximum number of in-memory cache entries (default: 10,000)
    pub cache_max_entries: usize,
    /// Per-command Redis deadline in milliseconds (default: 2,000)
    #[cfg_attr(not(feature = "redis"), allow(dead_code))]
    pub cache_op_timeout_ms: u64,
    /// Bound on the Redis startup connection and PING, in seconds (default: 5)
    #[cfg_attr(not(feature = "redis"), allow(dead_code))]
    pub cache_connect_timeout_seconds: u64,
    /// Path to SQLite database file (default: "catalog.db")
    pub sqlite_path: String,
    /// Redis connection URL (default: "redis://localhost:6379")
    #[cfg_attr(not(feature = "redis"), allow(dead_code))]
    pub redis_url: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CACHE_TTL_SECONDS` - Cache TTL in seconds (default: 300)
    /// - `CACHE_MAX_ENTRIES` - Maximum cache entries (default: 10,000)
    /// - `CACHE_OP_TIMEOUT_MS` - Redis command deadline (default: 2,000)
    /// - `CACHE_CONNECT_TIMEOUT_SECONDS` - Redis startup deadline (default: 5)
    /// - `SQLITE_PATH` - SQLite database path (default: "catalog.db")
    /// - `REDIS_URL` - Redis connection URL (default: "redis://localhost:6379")
    ///
    /// Unparseable values fall back to the default.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        fn parsed<T: FromStr>(value: Option<String>, default: T) -> T {
            value.and_then(|v| v.trim().parse().ok()).unwrap_or(default)
        }

        Self {
            cache_ttl_seconds: parsed(lookup("CACHE_TTL_SECONDS"), 300),
            cache_max_entries: parsed(lookup("CACHE_MAX_ENTRIES"), 10_000),
            cache_op_timeout_ms: parsed(lookup("CACHE_OP_TIMEOUT_MS"), 2_000),
            cache_connect_timeout_seconds: parsed(lookup("CACHE_CONNECT_TIMEOUT_SECONDS"), 5),
            sqlite_path: lookup("SQLITE_PATH").unwrap_or_else(|| "catalog.db".to_string()),
            redis_url: lookup("REDIS_URL")
                .unwrap_or_else(|| "redis://localhost:6379".to_string()),
        }
    }

    /// Get cache TTL as a Duration.
    ///
    /// Never shorter than one second, the smallest expiry every cache backend
    /// can honour.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_seconds.max(1))
    }

    /// Get the Redis command deadline as a Duration.
    #[cfg_attr(not(feature = "redis"), allow(dead_code))]
    pub fn cache_op_timeout(&self) -> Duration {
        Duration::from_millis(self.cache_op_timeout_ms)
    }

    /// Get the Redis startup deadline as a Duration.
    #[cfg_attr(not(feature = "redis"), allow(dead_code))]
    pub fn cache_connect_timeout(&self) -> Duration {
        Duration::from_secs(self.cache_connect_timeout_seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_default_values() {
        let config = config_from(&[]);

        assert_eq!(config.cache_ttl_seconds, 300);
        assert_eq!(config.cache_max_entries, 10_000);
        assert_eq!(config.cache_op_timeout_ms, 2_000);
        assert_eq!(config.cache_connect_timeout_seconds, 5);
        assert_eq!(config.sqlite_path, "catalog.db");
        assert_eq!(config.redis_url, "redis://localhost:6379");
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("CACHE_TTL_SECONDS", "60"),
            ("CACHE_MAX_ENTRIES", "500"),
            ("CACHE_OP_TIMEOUT_MS", "250"),
            ("SQLITE_PATH", "/var/lib/catalog/catalog.db"),
            ("REDIS_URL", "redis://cache:6379/2"),
        ]);

        assert_eq!(config.cache_ttl(), Duration::from_secs(60));
        assert_eq!(config.cache_max_entries, 500);
        assert_eq!(config.cache_op_timeout(), Duration::from_millis(250));
        assert_eq!(config.sqlite_path, "/var/lib/catalog/catalog.db");
        assert_eq!(config.redis_url, "redis://cache:6379/2");
    }

    #[test]
    fn test_zero_ttl_is_clamped_to_one_second() {
        let config = config_from(&[("CACHE_TTL_SECONDS", "0")]);

        assert_eq!(config.cache_ttl_seconds, 0);
        assert_eq!(config.cache_ttl(), Duration::from_secs(1));
    }

    #[test]
    fn test_invalid_numbers_fall_back_to_defaults() {
        let config = config_from(&[
            ("CACHE_TTL_SECONDS", "five minutes"),
            ("CACHE_CONNECT_TIMEOUT_SECONDS", "-1"),
        ]);

        assert_eq!(config.cache_ttl(), Duration::from_secs(300));
        assert_eq!(config.cache_connect_timeout(), Duration::from_secs(5));
    }
}
